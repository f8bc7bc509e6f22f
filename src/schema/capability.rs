use super::types::Coerce;
use crate::error::CoercionError;
use std::marker::PhantomData;

/// A named, type-specific test exposed by a field's native type `F`.
///
/// Capabilities are the fallback tier of operator resolution: they are only
/// consulted when an operator name is not one of the built-in comparisons.
pub enum Capability<F> {
    /// A zero-argument test such as `IsEmpty`. The rule's target value is read
    /// as the boolean outcome the test is expected to produce.
    Check(fn(&F) -> bool),
    /// A single-argument test such as `Contains`, whose argument is coerced from
    /// the rule's target value.
    Method(Box<dyn Method<F>>),
}

impl<F: 'static> Capability<F> {
    pub fn check(test: fn(&F) -> bool) -> Self {
        Capability::Check(test)
    }

    /// Wraps a single-argument test. The parameter type `P` decides how the
    /// target value is coerced.
    pub fn method<P, C>(call: C) -> Self
    where
        P: Coerce,
        C: Fn(&F, &P) -> bool + Send + Sync + 'static,
    {
        Capability::Method(Box::new(TypedMethod {
            call,
            _marker: PhantomData,
        }))
    }

    /// The type name of the argument this capability expects, if it takes one.
    pub fn parameter_type(&self) -> Option<String> {
        match self {
            Capability::Check(_) => None,
            Capability::Method(method) => Some(method.parameter_type()),
        }
    }
}

/// A single-argument capability with its parameter type erased.
pub trait Method<F>: Send + Sync {
    fn parameter_type(&self) -> String;

    /// Coerces `argument` into the parameter type and closes over it.
    fn bind(self: Box<Self>, argument: &str) -> Result<Binding<F>, CoercionError>;
}

/// A capability bound to its coerced argument.
pub struct Binding<F> {
    /// Debug rendering of the coerced argument.
    pub rendered: String,
    pub test: Box<dyn Fn(&F) -> bool + Send + Sync>,
}

struct TypedMethod<F, P, C> {
    call: C,
    _marker: PhantomData<fn(&F, &P)>,
}

impl<F, P, C> Method<F> for TypedMethod<F, P, C>
where
    F: 'static,
    P: Coerce,
    C: Fn(&F, &P) -> bool + Send + Sync + 'static,
{
    fn parameter_type(&self) -> String {
        P::type_name()
    }

    fn bind(self: Box<Self>, argument: &str) -> Result<Binding<F>, CoercionError> {
        let argument = P::coerce(argument)?;
        let rendered = format!("{:?}", argument);
        let call = self.call;
        Ok(Binding {
            rendered,
            test: Box::new(move |value| call(value, &argument)),
        })
    }
}
