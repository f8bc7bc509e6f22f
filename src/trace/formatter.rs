use super::EvaluationTrace;

/// Formats evaluation traces into human-readable strings
pub struct TraceFormatter;

impl TraceFormatter {
    /// Format an evaluation trace as `field (was value) operator target`.
    pub fn format_trace(trace: &EvaluationTrace) -> String {
        match trace {
            EvaluationTrace::Comparison {
                field,
                observed,
                symbol,
                target,
                ..
            } => format!("{} {} {}", Self::format_leaf(field, observed), symbol, target),
            EvaluationTrace::Method {
                field,
                observed,
                name,
                argument,
                ..
            } => format!("{} {} {}", Self::format_leaf(field, observed), name, argument),
            EvaluationTrace::Check {
                field,
                observed,
                name,
                expected,
                ..
            } => format!(
                "{} {} is {}",
                Self::format_leaf(field, observed),
                name,
                expected
            ),
        }
    }

    fn format_leaf(field: &str, observed: &str) -> String {
        format!("{} (was {})", field, observed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_comparison() {
        let trace = EvaluationTrace::Comparison {
            field: "Age".to_string(),
            observed: "13".to_string(),
            symbol: "<=".to_string(),
            target: "33".to_string(),
            outcome: true,
        };
        assert_eq!(TraceFormatter::format_trace(&trace), "Age (was 13) <= 33");
    }

    #[test]
    fn test_format_check() {
        let trace = EvaluationTrace::Check {
            field: "Name".to_string(),
            observed: "\"\"".to_string(),
            name: "IsEmpty".to_string(),
            expected: "true".to_string(),
            outcome: true,
        };
        assert_eq!(
            TraceFormatter::format_trace(&trace),
            "Name (was \"\") IsEmpty is true"
        );
    }
}
