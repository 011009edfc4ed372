//! References between resources and custom fields.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A reference to another resource, as returned by the API.
///
/// `obj` is only present when the reference was expanded.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reference {
    /// The referenced resource type (e.g. `zone`, `tax-category`).
    pub type_id: String,
    /// The referenced resource id.
    pub id: String,
    /// The expanded resource.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub obj: Option<Value>,
}

/// Identifies a resource by id or by key when sending drafts and actions.
///
/// # Example
///
/// ```rust
/// use commercetools_api::rest::resources::ResourceIdentifier;
///
/// let zone = ResourceIdentifier::by_key("zone", "europe");
/// assert_eq!(
///     serde_json::to_string(&zone).unwrap(),
///     r#"{"typeId":"zone","key":"europe"}"#
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceIdentifier {
    /// The referenced resource type.
    pub type_id: String,
    /// The referenced resource id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// The referenced resource key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

impl ResourceIdentifier {
    /// Identifies a resource by id.
    #[must_use]
    pub fn by_id(type_id: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            type_id: type_id.into(),
            id: Some(id.into()),
            key: None,
        }
    }

    /// Identifies a resource by key.
    #[must_use]
    pub fn by_key(type_id: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            type_id: type_id.into(),
            id: None,
            key: Some(key.into()),
        }
    }
}

/// Custom fields attached to a resource.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CustomFields {
    /// The type defining the fields.
    #[serde(rename = "type")]
    pub type_ref: Reference,
    /// Field values by name.
    #[serde(default)]
    pub fields: Map<String, Value>,
}

/// Custom fields as sent in drafts.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CustomFieldsDraft {
    /// The type defining the fields.
    #[serde(rename = "type")]
    pub type_id: ResourceIdentifier,
    /// Field values by name.
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub fields: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_expanded_reference() {
        let reference: Reference = serde_json::from_value(json!({
            "typeId": "zone",
            "id": "z1",
            "obj": {"name": "Europe"}
        }))
        .unwrap();
        assert_eq!(reference.type_id, "zone");
        assert_eq!(reference.obj.unwrap()["name"], "Europe");
    }

    #[test]
    fn test_custom_fields_deserialization() {
        let custom: CustomFields = serde_json::from_value(json!({
            "type": {"typeId": "type", "id": "t1"},
            "fields": {"tier": "gold", "points": 10}
        }))
        .unwrap();
        assert_eq!(custom.type_ref.id, "t1");
        assert_eq!(custom.fields.get("points"), Some(&json!(10)));
    }

    #[test]
    fn test_identifier_by_id_serialization() {
        let identifier = ResourceIdentifier::by_id("type", "t1");
        assert_eq!(
            serde_json::to_value(&identifier).unwrap(),
            json!({"typeId": "type", "id": "t1"})
        );
    }
}
