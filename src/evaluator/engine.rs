use super::ExecutablePredicate;
use crate::compiler::operator::{BoundOperator, OperatorForm};
use crate::schema::FieldType;
use crate::trace::EvaluationTrace;
use std::sync::Arc;

/// The assembled predicate: read one field, apply one bound operator.
pub(crate) struct FieldTest<T, F, A> {
    field: String,
    accessor: Arc<A>,
    operator: BoundOperator<F>,
    _marker: std::marker::PhantomData<fn(&T)>,
}

impl<T, F, A> FieldTest<T, F, A> {
    pub(crate) fn new(field: String, accessor: Arc<A>, operator: BoundOperator<F>) -> Self {
        Self {
            field,
            accessor,
            operator,
            _marker: std::marker::PhantomData,
        }
    }
}

impl<T, F, A> ExecutablePredicate<T> for FieldTest<T, F, A>
where
    T: 'static,
    F: FieldType,
    A: Fn(&T) -> &F + Send + Sync + 'static,
{
    fn evaluate(&self, instance: &T) -> bool {
        (self.operator.test)((self.accessor)(instance))
    }

    fn trace(&self, instance: &T) -> EvaluationTrace {
        let value = (self.accessor)(instance);
        let outcome = (self.operator.test)(value);
        let field = self.field.clone();
        let observed = format!("{:?}", value);
        let operator = self.operator.label.clone();
        let argument = self.operator.argument.clone();
        match self.operator.form {
            OperatorForm::Comparison => EvaluationTrace::Comparison {
                field,
                observed,
                symbol: operator,
                target: argument,
                outcome,
            },
            OperatorForm::Method => EvaluationTrace::Method {
                field,
                observed,
                name: operator,
                argument,
                outcome,
            },
            OperatorForm::Check => EvaluationTrace::Check {
                field,
                observed,
                name: operator,
                expected: argument,
                outcome,
            },
        }
    }
}
