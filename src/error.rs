use thiserror::Error;

/// Errors raised when a rule is constructed with missing components.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuleError {
    #[error("Rule {component} must not be empty")]
    EmptyComponent { component: &'static str },
}

/// A textual target value that could not be parsed into the type an operator requires.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Cannot convert '{value}' to {target_type}: {reason}")]
pub struct CoercionError {
    pub value: String,
    pub target_type: String,
    pub reason: String,
}

impl CoercionError {
    pub fn new(value: &str, target_type: impl Into<String>, reason: impl ToString) -> Self {
        Self {
            value: value.to_string(),
            target_type: target_type.into(),
            reason: reason.to_string(),
        }
    }
}

/// Errors that can occur while compiling a rule into a predicate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompileError {
    #[error("Type '{type_name}' has no readable field '{field}' (known fields: {known})")]
    UnknownField {
        type_name: &'static str,
        field: String,
        known: String,
    },

    #[error(
        "Operator '{operator}' is neither a built-in comparison nor a capability of field '{field}' ({field_type})"
    )]
    UnknownOperator {
        field: String,
        field_type: String,
        operator: String,
    },

    #[error("Target value for field '{field}' is invalid: {source}")]
    ValueCoercionError {
        field: String,
        #[source]
        source: CoercionError,
    },

    #[error(
        "Operator '{operator}' cannot be applied to field '{field}': {field_type} {message}"
    )]
    TypeMismatch {
        field: String,
        field_type: String,
        operator: String,
        message: String,
    },
}
