use super::capability::Capability;
use crate::error::CoercionError;
use std::cmp::Ordering;
use std::fmt;

/// Parses a rule's textual target value into a concrete type.
pub trait Coerce: Sized + fmt::Debug + Send + Sync + 'static {
    fn type_name() -> String;
    fn coerce(text: &str) -> Result<Self, CoercionError>;
}

/// A type that can appear as a field of a [`Schema`](super::Schema).
///
/// A field type supplies everything operator resolution needs: equality for
/// `Equal`/`NotEqual`, an optional ordering for the four ordering comparisons,
/// and a table of named capabilities.
pub trait FieldType: Coerce + PartialEq {
    /// Ordering used by `GreaterThan`, `LessThan` and friends. `None` for types
    /// without a meaningful order; ordering rules on such fields fail to compile.
    const ORDERING: Option<fn(&Self, &Self) -> Option<Ordering>> = None;

    /// Looks up a named capability, e.g. `"Contains"` on `String`.
    fn capability(name: &str) -> Option<Capability<Self>> {
        let _ = name;
        None
    }
}

macro_rules! integer_field_types {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Coerce for $ty {
                fn type_name() -> String {
                    stringify!($ty).to_string()
                }
                fn coerce(text: &str) -> Result<Self, CoercionError> {
                    text.trim()
                        .parse::<$ty>()
                        .map_err(|e| CoercionError::new(text, Self::type_name(), e))
                }
            }

            impl FieldType for $ty {
                const ORDERING: Option<fn(&Self, &Self) -> Option<Ordering>> =
                    Some(<$ty as PartialOrd>::partial_cmp);

                fn capability(name: &str) -> Option<Capability<Self>> {
                    match name {
                        "Equals" => Some(Capability::method(|value: &$ty, other: &$ty| value == other)),
                        "IsMultipleOf" => Some(Capability::method(|value: &$ty, divisor: &$ty| {
                            *divisor != 0 && value.wrapping_rem(*divisor) == 0
                        })),
                        _ => None,
                    }
                }
            }
        )*
    };
}

macro_rules! float_field_types {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Coerce for $ty {
                fn type_name() -> String {
                    stringify!($ty).to_string()
                }
                fn coerce(text: &str) -> Result<Self, CoercionError> {
                    text.trim()
                        .parse::<$ty>()
                        .map_err(|e| CoercionError::new(text, Self::type_name(), e))
                }
            }

            impl FieldType for $ty {
                const ORDERING: Option<fn(&Self, &Self) -> Option<Ordering>> =
                    Some(<$ty as PartialOrd>::partial_cmp);

                fn capability(name: &str) -> Option<Capability<Self>> {
                    match name {
                        "Equals" => Some(Capability::method(|value: &$ty, other: &$ty| value == other)),
                        "IsNaN" => Some(Capability::check(|value: &$ty| value.is_nan())),
                        "IsFinite" => Some(Capability::check(|value: &$ty| value.is_finite())),
                        _ => None,
                    }
                }
            }
        )*
    };
}

integer_field_types!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
float_field_types!(f32, f64);

impl Coerce for bool {
    fn type_name() -> String {
        "bool".to_string()
    }

    fn coerce(text: &str) -> Result<Self, CoercionError> {
        let trimmed = text.trim();
        if trimmed.eq_ignore_ascii_case("true") {
            Ok(true)
        } else if trimmed.eq_ignore_ascii_case("false") {
            Ok(false)
        } else {
            Err(CoercionError::new(
                text,
                Self::type_name(),
                "expected 'true' or 'false'",
            ))
        }
    }
}

// Booleans compare for equality only.
impl FieldType for bool {
    fn capability(name: &str) -> Option<Capability<Self>> {
        match name {
            "Equals" => Some(Capability::method(|value: &bool, other: &bool| {
                value == other
            })),
            _ => None,
        }
    }
}

impl Coerce for char {
    fn type_name() -> String {
        "char".to_string()
    }

    fn coerce(text: &str) -> Result<Self, CoercionError> {
        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(c),
            _ => Err(CoercionError::new(
                text,
                Self::type_name(),
                "expected exactly one character",
            )),
        }
    }
}

impl FieldType for char {
    const ORDERING: Option<fn(&Self, &Self) -> Option<Ordering>> =
        Some(<char as PartialOrd>::partial_cmp);

    fn capability(name: &str) -> Option<Capability<Self>> {
        match name {
            "Equals" => Some(Capability::method(|value: &char, other: &char| {
                value == other
            })),
            "IsDigit" => Some(Capability::check(|value: &char| value.is_ascii_digit())),
            "IsAlphabetic" => Some(Capability::check(|value: &char| value.is_alphabetic())),
            "IsWhitespace" => Some(Capability::check(|value: &char| value.is_whitespace())),
            _ => None,
        }
    }
}

impl Coerce for String {
    fn type_name() -> String {
        "String".to_string()
    }

    fn coerce(text: &str) -> Result<Self, CoercionError> {
        Ok(text.to_string())
    }
}

impl FieldType for String {
    const ORDERING: Option<fn(&Self, &Self) -> Option<Ordering>> =
        Some(<String as PartialOrd>::partial_cmp);

    fn capability(name: &str) -> Option<Capability<Self>> {
        match name {
            "Contains" => Some(Capability::method(|value: &String, needle: &String| {
                value.contains(needle.as_str())
            })),
            "StartsWith" => Some(Capability::method(|value: &String, prefix: &String| {
                value.starts_with(prefix.as_str())
            })),
            "EndsWith" => Some(Capability::method(|value: &String, suffix: &String| {
                value.ends_with(suffix.as_str())
            })),
            "Equals" => Some(Capability::method(|value: &String, other: &String| {
                value == other
            })),
            "EqualsIgnoreCase" => Some(Capability::method(|value: &String, other: &String| {
                value.to_lowercase() == other.to_lowercase()
            })),
            "IsEmpty" => Some(Capability::check(|value: &String| value.is_empty())),
            "IsAscii" => Some(Capability::check(|value: &String| value.is_ascii())),
            _ => None,
        }
    }
}

/// Lists coerce from comma-separated text; each element is trimmed and then
/// coerced as `E`.
impl<E: FieldType> Coerce for Vec<E> {
    fn type_name() -> String {
        format!("Vec<{}>", E::type_name())
    }

    fn coerce(text: &str) -> Result<Self, CoercionError> {
        text.split(',')
            .map(|item| {
                E::coerce(item.trim())
                    .map_err(|e| CoercionError::new(text, Self::type_name(), e))
            })
            .collect()
    }
}

impl<E: FieldType> FieldType for Vec<E> {
    fn capability(name: &str) -> Option<Capability<Self>> {
        match name {
            "Contains" => Some(Capability::method(|items: &Vec<E>, item: &E| {
                items.contains(item)
            })),
            "IsEmpty" => Some(Capability::check(|items: &Vec<E>| items.is_empty())),
            _ => None,
        }
    }
}
