use crate::error::CompileError;
use crate::schema::{Capability, Coerce, FieldType};
use std::cmp::Ordering;
use std::fmt;
use tracing::debug;

/// The six built-in comparison kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Comparison {
    Equal,
    NotEqual,
    GreaterThan,
    GreaterThanOrEqual,
    LessThan,
    LessThanOrEqual,
}

impl Comparison {
    pub const ALL: [Comparison; 6] = [
        Comparison::Equal,
        Comparison::NotEqual,
        Comparison::GreaterThan,
        Comparison::GreaterThanOrEqual,
        Comparison::LessThan,
        Comparison::LessThanOrEqual,
    ];

    /// Matches an operator name exactly (case-sensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    pub fn name(self) -> &'static str {
        match self {
            Comparison::Equal => "Equal",
            Comparison::NotEqual => "NotEqual",
            Comparison::GreaterThan => "GreaterThan",
            Comparison::GreaterThanOrEqual => "GreaterThanOrEqual",
            Comparison::LessThan => "LessThan",
            Comparison::LessThanOrEqual => "LessThanOrEqual",
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Comparison::Equal => "==",
            Comparison::NotEqual => "!=",
            Comparison::GreaterThan => ">",
            Comparison::GreaterThanOrEqual => ">=",
            Comparison::LessThan => "<",
            Comparison::LessThanOrEqual => "<=",
        }
    }

    /// Whether the comparison needs an ordering rather than just equality.
    pub fn is_ordering(self) -> bool {
        !matches!(self, Comparison::Equal | Comparison::NotEqual)
    }

    /// Applies the comparison as `left <op> right`.
    ///
    /// Ordering comparisons on a type without an ordering, or on values that
    /// are unordered (NaN), are `false`.
    pub fn apply<F: FieldType>(self, left: &F, right: &F) -> bool {
        let ordering = || F::ORDERING.and_then(|compare| compare(left, right));
        match self {
            Comparison::Equal => left == right,
            Comparison::NotEqual => left != right,
            Comparison::GreaterThan => ordering() == Some(Ordering::Greater),
            Comparison::GreaterThanOrEqual => {
                matches!(ordering(), Some(Ordering::Greater | Ordering::Equal))
            }
            Comparison::LessThan => ordering() == Some(Ordering::Less),
            Comparison::LessThanOrEqual => {
                matches!(ordering(), Some(Ordering::Less | Ordering::Equal))
            }
        }
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How an operator name was resolved against a field type `F`.
pub enum OperatorResolution<F> {
    Builtin(Comparison),
    Named {
        name: String,
        capability: Capability<F>,
    },
}

impl<F> fmt::Debug for OperatorResolution<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperatorResolution::Builtin(kind) => f.debug_tuple("Builtin").field(kind).finish(),
            OperatorResolution::Named { name, .. } => {
                f.debug_struct("Named").field("name", name).finish()
            }
        }
    }
}

/// The shape of a bound operator, kept for explanations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperatorForm {
    Comparison,
    Method,
    Check,
}

/// An operator with its target value coerced and captured.
pub struct BoundOperator<F> {
    pub(crate) form: OperatorForm,
    /// `<=` for comparisons, the capability name otherwise.
    pub(crate) label: String,
    pub(crate) argument: String,
    pub(crate) test: Box<dyn Fn(&F) -> bool + Send + Sync>,
}

/// Everything the operator and coercion stages need from a rule.
pub(crate) struct OperatorRequest<'a> {
    pub field: &'a str,
    /// Operator name after alias resolution.
    pub operator: &'a str,
    /// Operator name as written in the rule, used in error messages.
    pub written: &'a str,
    pub target: &'a str,
    pub capabilities: bool,
}

/// Resolves the operator: built-in comparison first, then the field type's
/// capability table. A built-in match never falls back to a capability.
pub(crate) fn resolve<F: FieldType>(
    request: &OperatorRequest<'_>,
) -> Result<OperatorResolution<F>, CompileError> {
    if let Some(kind) = Comparison::from_name(request.operator) {
        if kind.is_ordering() && F::ORDERING.is_none() {
            return Err(CompileError::TypeMismatch {
                field: request.field.to_string(),
                field_type: F::type_name(),
                operator: request.written.to_string(),
                message: "has no ordering".to_string(),
            });
        }
        debug!(field = request.field, operator = %kind, "resolved built-in comparison");
        return Ok(OperatorResolution::Builtin(kind));
    }

    let capability = if request.capabilities {
        F::capability(request.operator)
    } else {
        None
    };
    match capability {
        Some(capability) => {
            debug!(
                field = request.field,
                operator = request.operator,
                parameter = capability.parameter_type().as_deref().unwrap_or("none"),
                "resolved capability"
            );
            Ok(OperatorResolution::Named {
                name: request.operator.to_string(),
                capability,
            })
        }
        None => Err(CompileError::UnknownOperator {
            field: request.field.to_string(),
            field_type: F::type_name(),
            operator: request.written.to_string(),
        }),
    }
}

/// Coerces the target value into the type the resolved operator requires and
/// captures it.
pub(crate) fn bind<F: FieldType>(
    resolution: OperatorResolution<F>,
    request: &OperatorRequest<'_>,
) -> Result<BoundOperator<F>, CompileError> {
    let coercion_error = |source| CompileError::ValueCoercionError {
        field: request.field.to_string(),
        source,
    };

    let bound = match resolution {
        OperatorResolution::Builtin(kind) => {
            let target = F::coerce(request.target).map_err(coercion_error)?;
            BoundOperator {
                form: OperatorForm::Comparison,
                label: kind.symbol().to_string(),
                argument: format!("{:?}", target),
                test: Box::new(move |value: &F| kind.apply(value, &target)),
            }
        }
        OperatorResolution::Named {
            name,
            capability: Capability::Check(check),
        } => {
            let expected = bool::coerce(request.target).map_err(coercion_error)?;
            BoundOperator {
                form: OperatorForm::Check,
                label: name,
                argument: expected.to_string(),
                test: Box::new(move |value: &F| check(value) == expected),
            }
        }
        OperatorResolution::Named {
            name,
            capability: Capability::Method(method),
        } => {
            let binding = method.bind(request.target).map_err(coercion_error)?;
            BoundOperator {
                form: OperatorForm::Method,
                label: name,
                argument: binding.rendered,
                test: binding.test,
            }
        }
    };
    debug!(
        field = request.field,
        argument = %bound.argument,
        "coerced target value"
    );
    Ok(bound)
}
