use crate::error::CompileError;
use crate::evaluator::CompiledPredicate;
use crate::rule::Rule;
use crate::schema::{Reflect, Schema};
use ahash::AHashMap;
use itertools::Itertools;
use tracing::debug;

mod config;
pub mod operator;

pub use config::CompilerConfig;
pub use operator::{Comparison, OperatorForm, OperatorResolution};

use operator::OperatorRequest;

/// Compiles [`Rule`]s into [`CompiledPredicate`]s.
///
/// Compilation is a linear pipeline: field resolution, operator resolution,
/// value coercion, assembly. Any stage failing ends the compilation with a
/// [`CompileError`]; nothing is retried and nothing is cached between calls.
#[derive(Debug, Clone)]
pub struct PredicateCompiler {
    operator_aliases: AHashMap<String, String>,
    capabilities: bool,
}

pub struct CompilerBuilder {
    operator_aliases: AHashMap<String, String>,
    capabilities: bool,
}

impl CompilerBuilder {
    pub fn new() -> Self {
        Self::from_config(CompilerConfig::default())
    }

    pub fn from_config(config: CompilerConfig) -> Self {
        Self {
            operator_aliases: config.operator_aliases,
            capabilities: config.capabilities,
        }
    }

    /// Maps `alias` onto a built-in comparison or capability name.
    pub fn with_operator_alias(mut self, alias: &str, canonical: &str) -> Self {
        self.operator_aliases
            .insert(alias.to_string(), canonical.to_string());
        self
    }

    /// Enables or disables the fallback to named capabilities.
    pub fn with_capabilities(mut self, enabled: bool) -> Self {
        self.capabilities = enabled;
        self
    }

    /// Merges a loaded configuration; its aliases extend the ones already set.
    pub fn with_config(mut self, config: CompilerConfig) -> Self {
        self.operator_aliases.extend(config.operator_aliases);
        self.capabilities = config.capabilities;
        self
    }

    pub fn build(self) -> PredicateCompiler {
        PredicateCompiler {
            operator_aliases: self.operator_aliases,
            capabilities: self.capabilities,
        }
    }
}

impl Default for CompilerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PredicateCompiler {
    pub fn new() -> Self {
        CompilerBuilder::new().build()
    }

    pub fn builder() -> CompilerBuilder {
        CompilerBuilder::new()
    }

    /// Compiles `rule` against the registered schema of `T`.
    pub fn compile<T: Reflect>(&self, rule: &Rule) -> Result<CompiledPredicate<T>, CompileError> {
        self.compile_with(T::schema(), rule)
    }

    /// Compiles `rule` against an explicitly supplied schema.
    pub fn compile_with<T: 'static>(
        &self,
        schema: &Schema<T>,
        rule: &Rule,
    ) -> Result<CompiledPredicate<T>, CompileError> {
        let slot =
            schema
                .slot(rule.field_name())
                .ok_or_else(|| CompileError::UnknownField {
                    type_name: schema.type_name(),
                    field: rule.field_name().to_string(),
                    known: schema.field_names().join(", "),
                })?;
        let field_type = slot.type_name();
        debug!(
            type_name = schema.type_name(),
            field = rule.field_name(),
            %field_type,
            "resolved field"
        );

        let request = OperatorRequest {
            field: rule.field_name(),
            operator: self.canonical_operator(rule.operator_name()),
            written: rule.operator_name(),
            target: rule.target_value(),
            capabilities: self.capabilities,
        };
        let executable = slot.compile(&request)?;

        debug!(rule = %rule, "compiled predicate");
        Ok(CompiledPredicate::new(rule.clone(), field_type, executable))
    }

    /// Resolves an alias to its canonical operator name; unknown names pass through.
    pub fn canonical_operator<'a>(&'a self, operator: &'a str) -> &'a str {
        self.operator_aliases
            .get(operator)
            .map(String::as_str)
            .unwrap_or(operator)
    }
}

impl Default for PredicateCompiler {
    fn default() -> Self {
        Self::new()
    }
}
