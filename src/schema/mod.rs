//! Runtime type descriptors.
//!
//! Rust has no runtime reflection, so every record type that rules are compiled
//! against registers its readable fields in a [`Schema`]. A schema maps field
//! names to typed accessors; the field's native type (a [`FieldType`]) supplies
//! parsing, ordering and named capabilities.

use ahash::AHashMap;

mod capability;
mod field;
mod types;

pub use capability::{Binding, Capability, Method};
pub use types::{Coerce, FieldType};

pub(crate) use field::FieldSlot;
use field::TypedField;

/// Name and native type of a field, resolved from a [`Schema`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub name: String,
    pub type_name: String,
}

/// The registration table describing the readable fields of `T`.
pub struct Schema<T> {
    type_name: &'static str,
    fields: Vec<Box<dyn FieldSlot<T>>>,
    index: AHashMap<String, usize>,
}

impl<T: 'static> Schema<T> {
    pub fn builder(type_name: &'static str) -> SchemaBuilder<T> {
        SchemaBuilder::new(type_name)
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Resolves a field by its exact, case-sensitive name.
    pub fn field(&self, name: &str) -> Option<FieldDescriptor> {
        self.slot(name).map(describe)
    }

    /// All fields, in registration order.
    pub fn fields(&self) -> impl Iterator<Item = FieldDescriptor> + '_ {
        self.fields.iter().map(|slot| describe(slot.as_ref()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub(crate) fn slot(&self, name: &str) -> Option<&dyn FieldSlot<T>> {
        self.index
            .get(name)
            .map(|&position| self.fields[position].as_ref())
    }

    pub(crate) fn field_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.fields.iter().map(|slot| slot.name())
    }
}

fn describe<T>(slot: &dyn FieldSlot<T>) -> FieldDescriptor {
    FieldDescriptor {
        name: slot.name().to_string(),
        type_name: slot.type_name(),
    }
}

pub struct SchemaBuilder<T> {
    type_name: &'static str,
    fields: Vec<Box<dyn FieldSlot<T>>>,
    index: AHashMap<String, usize>,
}

impl<T: 'static> SchemaBuilder<T> {
    pub fn new(type_name: &'static str) -> Self {
        Self {
            type_name,
            fields: Vec::new(),
            index: AHashMap::new(),
        }
    }

    /// Registers a readable field. Registering the same name again replaces the
    /// accessor but keeps the original position.
    pub fn field<F, A>(mut self, name: impl Into<String>, accessor: A) -> Self
    where
        F: FieldType,
        A: Fn(&T) -> &F + Send + Sync + 'static,
    {
        let name = name.into();
        let slot: Box<dyn FieldSlot<T>> = Box::new(TypedField::new(name.clone(), accessor));
        match self.index.get(&name) {
            Some(&position) => self.fields[position] = slot,
            None => {
                self.index.insert(name, self.fields.len());
                self.fields.push(slot);
            }
        }
        self
    }

    pub fn build(self) -> Schema<T> {
        Schema {
            type_name: self.type_name,
            fields: self.fields,
            index: self.index,
        }
    }
}

/// Types that expose a [`Schema`] describing themselves.
///
/// Implement it with the [`reflect!`](crate::reflect) macro, which builds the
/// schema once and reuses it for every compilation.
pub trait Reflect: Sized + 'static {
    fn schema() -> &'static Schema<Self>;
}

/// Implements [`Reflect`] for a struct by listing its readable fields.
///
/// ```rust
/// use kijun::reflect;
///
/// struct User {
///     name: String,
///     age: u32,
/// }
///
/// reflect!(User {
///     "Name" => name,
///     "Age" => age,
/// });
///
/// # use kijun::schema::Reflect;
/// assert_eq!(User::schema().len(), 2);
/// ```
#[macro_export]
macro_rules! reflect {
    ($ty:ty { $($name:literal => $field:ident),* $(,)? }) => {
        impl $crate::schema::Reflect for $ty {
            fn schema() -> &'static $crate::schema::Schema<Self> {
                static SCHEMA: ::std::sync::OnceLock<$crate::schema::Schema<$ty>> =
                    ::std::sync::OnceLock::new();
                SCHEMA.get_or_init(|| {
                    $crate::schema::Schema::<$ty>::builder(stringify!($ty))
                        $(.field($name, |record: &$ty| &record.$field))*
                        .build()
                })
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Sensor {
        label: String,
        reading: f64,
    }

    fn sensor_schema() -> Schema<Sensor> {
        Schema::builder("Sensor")
            .field("Label", |s: &Sensor| &s.label)
            .field("Reading", |s: &Sensor| &s.reading)
            .build()
    }

    #[test]
    fn test_schema_resolves_fields_by_exact_name() {
        let schema = sensor_schema();
        assert_eq!(
            schema.field("Reading"),
            Some(FieldDescriptor {
                name: "Reading".to_string(),
                type_name: "f64".to_string(),
            })
        );
        assert!(schema.field("reading").is_none());
        assert_eq!(schema.type_name(), "Sensor");
    }

    #[test]
    fn test_duplicate_registration_replaces_in_place() {
        let schema = Schema::builder("Sensor")
            .field("Label", |s: &Sensor| &s.label)
            .field("Reading", |s: &Sensor| &s.reading)
            .field("Label", |s: &Sensor| &s.reading)
            .build();
        let fields: Vec<_> = schema.fields().collect();
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0].name, "Label");
        assert_eq!(fields[0].type_name, "f64");
        assert_eq!(fields[1].name, "Reading");
    }
}
