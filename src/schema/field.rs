use super::types::FieldType;
use crate::compiler::operator::{self, OperatorRequest};
use crate::error::CompileError;
use crate::evaluator::ExecutablePredicate;
use crate::evaluator::engine::FieldTest;
use std::marker::PhantomData;
use std::sync::Arc;

/// A registered field with its native type erased.
///
/// The typed implementation is where a rule is monomorphised: once the field
/// is found, the remaining stages run against the concrete field type.
pub(crate) trait FieldSlot<T>: Send + Sync {
    fn name(&self) -> &str;
    fn type_name(&self) -> String;
    fn compile(
        &self,
        request: &OperatorRequest<'_>,
    ) -> Result<Arc<dyn ExecutablePredicate<T>>, CompileError>;
}

pub(crate) struct TypedField<T, F, A> {
    name: String,
    accessor: Arc<A>,
    _marker: PhantomData<fn(&T) -> &F>,
}

impl<T, F, A> TypedField<T, F, A> {
    pub(crate) fn new(name: String, accessor: A) -> Self {
        Self {
            name,
            accessor: Arc::new(accessor),
            _marker: PhantomData,
        }
    }
}

impl<T, F, A> FieldSlot<T> for TypedField<T, F, A>
where
    T: 'static,
    F: FieldType,
    A: Fn(&T) -> &F + Send + Sync + 'static,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn type_name(&self) -> String {
        F::type_name()
    }

    fn compile(
        &self,
        request: &OperatorRequest<'_>,
    ) -> Result<Arc<dyn ExecutablePredicate<T>>, CompileError> {
        let resolution = operator::resolve::<F>(request)?;
        let bound = operator::bind(resolution, request)?;
        Ok(Arc::new(FieldTest::new(
            self.name.clone(),
            Arc::clone(&self.accessor),
            bound,
        )))
    }
}
