use crate::types::permissions::Permission;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq)]
pub struct DatabaseSpec {
    pub id: String,
    pub name: String,
    pub enabled: bool,
}

impl DatabaseSpec {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            enabled: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BucketSpec {
    pub id: String,
    pub name: String,
    pub permissions: Vec<Permission>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CollectionSpec {
    pub id: String,
    pub name: String,
    pub permissions: Vec<Permission>,
    /// Attribute definitions in creation order. Order matters to the
    /// first-failure-aborts semantics of the provisioner.
    pub attributes: Vec<AttributeSpec>,
}

/// A typed field definition within a collection's schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeSpec {
    pub key: String,
    pub kind: AttributeKind,
    pub required: bool,
    pub array: bool,
}

/// The backend only supports arrays of strings: an array attribute is a
/// `String` kind with [`AttributeSpec::array`] set, routed through the
/// string-attribute endpoint. Other kinds never carry the array flag here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AttributeKind {
    String { size: u32 },
    Boolean,
    Integer,
    Float,
    DateTime,
}

impl AttributeSpec {
    pub fn string(key: impl Into<String>, size: u32, required: bool) -> Self {
        Self {
            key: key.into(),
            kind: AttributeKind::String { size },
            required,
            array: false,
        }
    }

    pub fn string_array(key: impl Into<String>, size: u32) -> Self {
        Self {
            key: key.into(),
            kind: AttributeKind::String { size },
            required: false,
            array: true,
        }
    }

    pub fn boolean(key: impl Into<String>, required: bool) -> Self {
        Self {
            key: key.into(),
            kind: AttributeKind::Boolean,
            required,
            array: false,
        }
    }

    pub fn integer(key: impl Into<String>, required: bool) -> Self {
        Self {
            key: key.into(),
            kind: AttributeKind::Integer,
            required,
            array: false,
        }
    }

    pub fn float(key: impl Into<String>, required: bool) -> Self {
        Self {
            key: key.into(),
            kind: AttributeKind::Float,
            required,
            array: false,
        }
    }

    pub fn datetime(key: impl Into<String>, required: bool) -> Self {
        Self {
            key: key.into(),
            kind: AttributeKind::DateTime,
            required,
            array: false,
        }
    }
}
