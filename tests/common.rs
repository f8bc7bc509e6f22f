//! Common record types and fixtures shared by the integration tests.
use kijun::prelude::*;
use kijun::schema::Coerce;

#[allow(dead_code)]
#[derive(Debug, Clone)]
pub struct User {
    pub name: String,
    pub age: u32,
    pub tags: Vec<String>,
}

kijun::reflect!(User {
    "Name" => name,
    "Age" => age,
    "Tags" => tags,
});

#[allow(dead_code)]
pub fn user(name: &str, age: u32, tags: &[&str]) -> User {
    User {
        name: name.to_string(),
        age,
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

/// Adam (13), John (33) and DBag (53).
#[allow(dead_code)]
pub fn sample_users() -> Vec<User> {
    vec![
        user("Adam", 13, &["student"]),
        user("John", 33, &["staff", "admin"]),
        user("DBag", 53, &[]),
    ]
}

#[allow(dead_code)]
#[derive(Debug, Clone)]
pub struct Phrase {
    pub search_value: String,
}

kijun::reflect!(Phrase {
    "searchValue" => search_value,
});

#[allow(dead_code)]
pub fn phrase(text: &str) -> Phrase {
    Phrase {
        search_value: text.to_string(),
    }
}

/// A user-defined field type with its own parsing and capability table.
#[allow(dead_code)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Active,
    Suspended,
}

impl Coerce for Status {
    fn type_name() -> String {
        "Status".to_string()
    }

    fn coerce(text: &str) -> std::result::Result<Self, CoercionError> {
        match text {
            "Active" => Ok(Status::Active),
            "Suspended" => Ok(Status::Suspended),
            other => Err(CoercionError::new(other, "Status", "unknown status")),
        }
    }
}

impl FieldType for Status {
    fn capability(name: &str) -> Option<Capability<Self>> {
        match name {
            "IsActive" => Some(Capability::check(|status: &Status| {
                *status == Status::Active
            })),
            _ => None,
        }
    }
}

#[allow(dead_code)]
#[derive(Debug, Clone)]
pub struct Reading {
    pub celsius: f64,
    pub online: bool,
    pub grade: char,
    pub offset: i64,
    pub status: Status,
}

kijun::reflect!(Reading {
    "Celsius" => celsius,
    "Online" => online,
    "Grade" => grade,
    "Offset" => offset,
    "Status" => status,
});

#[allow(dead_code)]
pub fn reading() -> Reading {
    Reading {
        celsius: 21.5,
        online: true,
        grade: 'B',
        offset: -4,
        status: Status::Active,
    }
}

/// Builds a rule from literals, panicking on empty components.
#[allow(dead_code)]
pub fn rule(field: &str, operator: &str, value: &str) -> Rule {
    Rule::new(field, operator, value).unwrap()
}
