use clap::{ArgAction, Parser, ValueEnum};
use kijun::prelude::*;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::fmt;
use std::fs;
use std::time::Instant;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

// --- Sample Record Types ---

#[derive(Debug, Deserialize)]
struct User {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Age")]
    age: u32,
    #[serde(rename = "Tags", default)]
    tags: Vec<String>,
}

kijun::reflect!(User {
    "Name" => name,
    "Age" => age,
    "Tags" => tags,
});

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name: {}, Age: {}", self.name, self.age)?;
        if !self.tags.is_empty() {
            write!(f, ", Tags: [{}]", self.tags.join(", "))?;
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
struct Phrase {
    #[serde(rename = "searchValue")]
    search_value: String,
}

kijun::reflect!(Phrase {
    "searchValue" => search_value,
});

impl fmt::Display for Phrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "searchValue: {:?}", self.search_value)
    }
}

fn sample_users() -> Vec<User> {
    [("Adam", 13, "student"), ("John", 33, "staff"), ("DBag", 53, "")]
        .into_iter()
        .map(|(name, age, tag)| User {
            name: name.to_string(),
            age,
            tags: if tag.is_empty() {
                Vec::new()
            } else {
                vec![tag.to_string()]
            },
        })
        .collect()
}

fn sample_phrases() -> Vec<Phrase> {
    ["I got ants!", "If you see something, say something."]
        .into_iter()
        .map(|text| Phrase {
            search_value: text.to_string(),
        })
        .collect()
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Dataset {
    User,
    Phrase,
}

/// Compiles a single (field, operator, value) rule and evaluates it against sample records
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Field to test, e.g. `Age`
    field: Option<String>,
    /// Built-in comparison (e.g. `LessThanOrEqual`) or capability name (e.g. `Contains`)
    operator: Option<String>,
    /// Target value, parsed into the type the operator requires
    value: Option<String>,

    /// The record type to compile the rule against
    #[arg(short, long, value_enum, default_value_t = Dataset::User)]
    dataset: Dataset,

    /// Optional path to a JSON array of records to evaluate
    #[arg(long)]
    data: Option<String>,

    /// Optional path to a compiler configuration JSON file
    #[arg(short, long)]
    config: Option<String>,

    /// List the fields of the selected record type and exit
    #[arg(long)]
    describe: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.dataset {
        Dataset::User => run::<User>(&cli, sample_users),
        Dataset::Phrase => run::<Phrase>(&cli, sample_phrases),
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run<T>(cli: &Cli, defaults: fn() -> Vec<T>)
where
    T: Reflect + DeserializeOwned + fmt::Display,
{
    let schema = T::schema();
    if cli.describe {
        println!("Fields of {}:", schema.type_name());
        for field in schema.fields() {
            println!("  {:<16} {}", field.name, field.type_name);
        }
        return;
    }

    let (Some(field), Some(operator), Some(value)) = (&cli.field, &cli.operator, &cli.value)
    else {
        exit_with_error("A field, an operator and a value are required (or pass --describe).");
    };

    // --- 1. Loading ---
    let compiler = load_compiler(cli.config.as_deref());
    let records = match &cli.data {
        Some(path) => load_records::<T>(path),
        None => {
            info!("No data file provided, using built-in sample records");
            defaults()
        }
    };

    // --- 2. Compilation ---
    let rule = Rule::new(field.as_str(), operator.as_str(), value.as_str())
        .unwrap_or_else(|e| exit_with_error(&format!("Invalid rule: {}", e)));
    let compile_start = Instant::now();
    let predicate = compiler
        .compile::<T>(&rule)
        .unwrap_or_else(|e| exit_with_error(&format!("Rule compilation failed: {}", e)));
    let compile_duration = compile_start.elapsed();
    debug!(?predicate, "rule compiled");

    // --- 3. Evaluation ---
    println!("Rule: {}", rule);
    println!("Evaluating Rule:");
    let eval_start = Instant::now();
    let mut matched = 0;
    for record in &records {
        let evaluation = predicate.explain(record);
        if evaluation.matched {
            matched += 1;
        }
        println!(
            "\t{} : {}  [{}]",
            record, evaluation.matched, evaluation.reason
        );
    }
    let eval_duration = eval_start.elapsed();

    println!("\n--- Summary ---");
    println!("Records:      {}", records.len());
    println!("Matched:      {}", matched);
    println!("Compilation:  {:?}", compile_duration);
    println!("Evaluation:   {:?}", eval_duration);
}

fn load_compiler(config_path: Option<&str>) -> PredicateCompiler {
    let Some(path) = config_path else {
        return PredicateCompiler::new();
    };
    let json = fs::read_to_string(path).unwrap_or_else(|e| {
        exit_with_error(&format!("Failed to read config file '{}': {}", path, e))
    });
    let config = CompilerConfig::from_json(&json)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse config JSON: {}", e)));
    info!(
        aliases = config.operator_aliases.len(),
        capabilities = config.capabilities,
        "Loaded compiler configuration"
    );
    PredicateCompiler::builder().with_config(config).build()
}

fn load_records<T: DeserializeOwned>(path: &str) -> Vec<T> {
    let json = fs::read_to_string(path).unwrap_or_else(|e| {
        exit_with_error(&format!("Failed to read data file '{}': {}", path, e))
    });
    let records: Vec<T> = serde_json::from_str(&json)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse data JSON: {}", e)));
    info!(records = records.len(), path, "Loaded records");
    records
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
