use crate::error::RuleError;
use serde::Deserialize;
use std::fmt;

/// A declarative `(field, operator, value)` triple describing a single test.
///
/// A rule knows nothing about the type it will be compiled against. Whether the
/// field or operator actually exist is only checked by the
/// [`PredicateCompiler`](crate::compiler::PredicateCompiler).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "RawRule")]
pub struct Rule {
    field_name: String,
    operator_name: String,
    target_value: String,
}

impl Rule {
    /// Creates a rule, storing all three components verbatim.
    ///
    /// Fails with [`RuleError::EmptyComponent`] if any component is empty.
    pub fn new(
        field_name: impl Into<String>,
        operator_name: impl Into<String>,
        target_value: impl Into<String>,
    ) -> Result<Self, RuleError> {
        let rule = Self {
            field_name: field_name.into(),
            operator_name: operator_name.into(),
            target_value: target_value.into(),
        };
        rule.validate()?;
        Ok(rule)
    }

    pub fn field_name(&self) -> &str {
        &self.field_name
    }

    pub fn operator_name(&self) -> &str {
        &self.operator_name
    }

    pub fn target_value(&self) -> &str {
        &self.target_value
    }

    fn validate(&self) -> Result<(), RuleError> {
        for (component, value) in [
            ("field name", &self.field_name),
            ("operator name", &self.operator_name),
            ("target value", &self.target_value),
        ] {
            if value.is_empty() {
                return Err(RuleError::EmptyComponent { component });
            }
        }
        Ok(())
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.field_name, self.operator_name, self.target_value
        )
    }
}

/// Wire shape of a rule, checked before it becomes a [`Rule`].
#[derive(Deserialize)]
struct RawRule {
    #[serde(alias = "fieldName", alias = "field")]
    field_name: String,
    #[serde(alias = "operatorName", alias = "operator")]
    operator_name: String,
    #[serde(alias = "targetValue", alias = "value")]
    target_value: String,
}

impl TryFrom<RawRule> for Rule {
    type Error = RuleError;

    fn try_from(raw: RawRule) -> Result<Self, Self::Error> {
        Rule::new(raw.field_name, raw.operator_name, raw.target_value)
    }
}
