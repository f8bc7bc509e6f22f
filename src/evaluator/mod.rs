use crate::rule::Rule;
use crate::trace::{EvaluationTrace, TraceFormatter};
use std::fmt;
use std::sync::Arc;
use tracing::trace;

pub(crate) mod engine;

/// A compiled test over `T`. Produced per rule by the
/// [`PredicateCompiler`](crate::compiler::PredicateCompiler).
pub trait ExecutablePredicate<T>: Send + Sync {
    fn evaluate(&self, instance: &T) -> bool;

    /// Evaluates and records the observed value alongside the outcome.
    fn trace(&self, instance: &T) -> EvaluationTrace;
}

/// The result of explaining a single evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub matched: bool,
    /// A human-readable account of the test, e.g. `Age (was 13) <= 33`.
    pub reason: String,
}

/// A reusable, stateless predicate compiled from a [`Rule`].
///
/// Cloning is cheap and a predicate can be shared across threads; each call
/// only reads the instance it is given.
pub struct CompiledPredicate<T> {
    rule: Rule,
    field_type: String,
    executable: Arc<dyn ExecutablePredicate<T>>,
}

impl<T> CompiledPredicate<T> {
    pub(crate) fn new(
        rule: Rule,
        field_type: String,
        executable: Arc<dyn ExecutablePredicate<T>>,
    ) -> Self {
        Self {
            rule,
            field_type,
            executable,
        }
    }

    pub fn evaluate(&self, instance: &T) -> bool {
        self.executable.evaluate(instance)
    }

    /// Evaluates the predicate and explains the outcome.
    pub fn explain(&self, instance: &T) -> Evaluation {
        let evaluation_trace = self.executable.trace(instance);
        let reason = TraceFormatter::format_trace(&evaluation_trace);
        trace!(rule = %self.rule, %reason, "explained evaluation");
        Evaluation {
            matched: evaluation_trace.outcome(),
            reason,
        }
    }

    /// Returns the instances that satisfy the predicate.
    pub fn filter<'a, I>(&'a self, instances: I) -> impl Iterator<Item = &'a T> + 'a
    where
        I: IntoIterator<Item = &'a T>,
        I::IntoIter: 'a,
    {
        instances
            .into_iter()
            .filter(move |instance| self.evaluate(instance))
    }

    /// Borrows the predicate as a plain closure.
    pub fn as_fn(&self) -> impl Fn(&T) -> bool + '_ {
        move |instance: &T| self.evaluate(instance)
    }

    pub fn rule(&self) -> &Rule {
        &self.rule
    }

    /// Native type of the field the rule was resolved against.
    pub fn field_type(&self) -> &str {
        &self.field_type
    }
}

impl<T> Clone for CompiledPredicate<T> {
    fn clone(&self) -> Self {
        Self {
            rule: self.rule.clone(),
            field_type: self.field_type.clone(),
            executable: Arc::clone(&self.executable),
        }
    }
}

impl<T> fmt::Debug for CompiledPredicate<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompiledPredicate")
            .field("rule", &self.rule)
            .field("field_type", &self.field_type)
            .finish_non_exhaustive()
    }
}
