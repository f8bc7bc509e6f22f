mod formatter;

pub use formatter::TraceFormatter;

/// A record of how a compiled predicate was evaluated against one instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvaluationTrace {
    /// A built-in comparison, e.g. `Age (was 13) <= 33`.
    Comparison {
        field: String,
        observed: String,
        symbol: String,
        target: String,
        outcome: bool,
    },
    /// A single-argument capability, e.g. `searchValue (was "I got ants!") Contains "ants"`.
    Method {
        field: String,
        observed: String,
        name: String,
        argument: String,
        outcome: bool,
    },
    /// A zero-argument capability compared with its expected outcome.
    Check {
        field: String,
        observed: String,
        name: String,
        expected: String,
        outcome: bool,
    },
}

impl EvaluationTrace {
    pub fn outcome(&self) -> bool {
        match self {
            EvaluationTrace::Comparison { outcome, .. }
            | EvaluationTrace::Method { outcome, .. }
            | EvaluationTrace::Check { outcome, .. } => *outcome,
        }
    }

    pub fn field(&self) -> &str {
        match self {
            EvaluationTrace::Comparison { field, .. }
            | EvaluationTrace::Method { field, .. }
            | EvaluationTrace::Check { field, .. } => field,
        }
    }
}
