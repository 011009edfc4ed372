//! `CustomerGroup` resource.
//!
//! Customer groups classify customers, for example to give a group its own
//! prices.
//!
//! # Example
//!
//! ```rust,ignore
//! use commercetools_api::rest::{Resource, UpdatableResource, UpdateRequest};
//! use commercetools_api::rest::resources::{
//!     ChangeNameAction, CustomerGroup, CustomerGroupDraft, SetKeyAction,
//! };
//!
//! let created = CustomerGroup::create(&client, &CustomerGroupDraft::new("VIP")).await?;
//! let group = created.result.unwrap();
//!
//! let request = UpdateRequest::new(group.version)
//!     .action(ChangeNameAction::new("Very Important"))
//!     .action(SetKeyAction::new(Some("vip".to_string())));
//! let updated = CustomerGroup::update(&client, &group.id, &request).await?;
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::rest::resources::common::{CustomFields, CustomFieldsDraft};
use crate::rest::{Resource, UpdatableResource};

/// A customer group.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerGroup {
    /// Server-generated id.
    pub id: String,
    /// Current version, used for optimistic concurrency.
    pub version: i64,
    /// When the group was created.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// When the group was last modified.
    #[serde(default)]
    pub last_modified_at: Option<DateTime<Utc>>,
    /// Display name.
    pub name: String,
    /// User-defined unique key.
    #[serde(default)]
    pub key: Option<String>,
    /// Custom fields.
    #[serde(default)]
    pub custom: Option<CustomFields>,
}

impl Resource for CustomerGroup {
    type Draft = CustomerGroupDraft;

    const NAME: &'static str = "CustomerGroup";
    const ENDPOINT: &'static str = "/customer-groups";
}

impl UpdatableResource for CustomerGroup {}

/// Payload for creating a customer group.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerGroupDraft {
    /// Display name, sent as `groupName`.
    #[serde(rename = "groupName")]
    pub group_name: String,
    /// User-defined unique key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// Custom fields.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom: Option<CustomFieldsDraft>,
}

impl CustomerGroupDraft {
    /// Creates a draft with the given name.
    #[must_use]
    pub fn new(group_name: impl Into<String>) -> Self {
        Self {
            group_name: group_name.into(),
            key: None,
            custom: None,
        }
    }
}
