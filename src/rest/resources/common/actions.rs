//! Update actions shared by several resources.

use serde::Serialize;
use serde_json::{Map, Value};

use super::ResourceIdentifier;
use crate::rest::TypedAction;

/// Sets or, with `None`, removes the key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SetKeyAction {
    /// The new key.
    pub key: Option<String>,
}

impl SetKeyAction {
    /// Creates the action.
    #[must_use]
    pub const fn new(key: Option<String>) -> Self {
        Self { key }
    }
}

impl TypedAction for SetKeyAction {
    const ACTION: &'static str = "setKey";
}

/// Changes the name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ChangeNameAction {
    /// The new name.
    pub name: String,
}

impl ChangeNameAction {
    /// Creates the action.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl TypedAction for ChangeNameAction {
    const ACTION: &'static str = "changeName";
}

/// Sets or, without a type, removes the custom type and all custom fields.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SetCustomTypeAction {
    /// The custom type.
    #[serde(rename = "type")]
    pub type_id: Option<ResourceIdentifier>,
    /// Initial field values.
    pub fields: Option<Map<String, Value>>,
}

impl SetCustomTypeAction {
    /// Sets the custom type identified by `type_identifier`.
    #[must_use]
    pub const fn new(type_identifier: ResourceIdentifier) -> Self {
        Self {
            type_id: Some(type_identifier),
            fields: None,
        }
    }

    /// Removes the custom type.
    #[must_use]
    pub const fn remove() -> Self {
        Self {
            type_id: None,
            fields: None,
        }
    }

    /// Sets initial field values.
    #[must_use]
    pub fn with_fields(mut self, fields: Map<String, Value>) -> Self {
        self.fields = Some(fields);
        self
    }
}

impl TypedAction for SetCustomTypeAction {
    const ACTION: &'static str = "setCustomType";
}

/// Sets or, with `None`, removes one custom field.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SetCustomFieldAction {
    /// Field name.
    pub name: String,
    /// New value.
    pub value: Option<Value>,
}

impl SetCustomFieldAction {
    /// Creates the action.
    #[must_use]
    pub fn new(name: impl Into<String>, value: Option<Value>) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

impl TypedAction for SetCustomFieldAction {
    const ACTION: &'static str = "setCustomField";
}
