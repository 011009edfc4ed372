//! `CustomObject` resource.
//!
//! Custom objects store arbitrary JSON values under a `(container, key)`
//! pair. They have no update actions: posting a draft for an existing pair
//! replaces its value.
//!
//! # Example
//!
//! ```rust,ignore
//! use commercetools_api::rest::resources::{CustomObject, CustomObjectDraft};
//! use serde_json::json;
//!
//! let draft = CustomObjectDraft::new("settings", "checkout", json!({"guest": true}));
//! let saved = CustomObject::create_or_update(&client, &draft).await?;
//!
//! let found: Response<CustomObject> =
//!     CustomObject::get_by_container_and_key(&client, "settings", "checkout").await?;
//! ```

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::clients::{Client, HttpError};
use crate::rest::resource::{id_path, require, require_version};
use crate::rest::{Resource, Response};

const DATA_ERASURE: &str = "dataErasure";

/// A JSON value stored under a container and key.
///
/// `T` defaults to [`Value`]; use a concrete type to decode the stored value
/// directly.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomObject<T = Value> {
    /// Server-generated id.
    pub id: String,
    /// Current version, used for optimistic concurrency.
    pub version: i64,
    /// When the object was created.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// When the object was last modified.
    #[serde(default)]
    pub last_modified_at: Option<DateTime<Utc>>,
    /// Namespace of the object.
    pub container: String,
    /// Key of the object, unique within its container.
    pub key: String,
    /// The stored value.
    pub value: T,
}

impl<T> Resource for CustomObject<T>
where
    T: DeserializeOwned + Serialize + Send + Sync,
{
    type Draft = CustomObjectDraft<T>;

    const NAME: &'static str = "CustomObject";
    const ENDPOINT: &'static str = "/custom-objects";
}

impl<T> CustomObject<T>
where
    T: DeserializeOwned + Serialize + Send + Sync,
{
    /// Fetches the custom object stored under `container` and `key`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidRequest`] if `container` or `key` is
    /// blank, or any transport error.
    pub async fn get_by_container_and_key(
        client: &Client,
        container: &str,
        key: &str,
    ) -> Result<Response<Self>, HttpError> {
        let path = container_key_path(container, key)?;
        client.get(&path, &[]).await
    }

    /// Creates the custom object, or replaces the value of an existing one
    /// with the same container and key.
    ///
    /// When the draft carries a version, the server rejects the write if the
    /// stored object is at another version.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidRequest`] if the container or key is
    /// blank, or any transport error.
    pub async fn create_or_update(
        client: &Client,
        draft: &CustomObjectDraft<T>,
    ) -> Result<Response<Self>, HttpError> {
        require("container", &draft.container)?;
        require("key", &draft.key)?;
        if let Some(version) = draft.version {
            require_version(version)?;
        }
        client.post(Self::ENDPOINT, draft, &[]).await
    }

    /// Deletes the custom object with the given id.
    ///
    /// Unlike [`Resource::delete`], the version is optional here.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidRequest`] if `id` is blank or a version
    /// below 1 is given, or any transport error.
    pub async fn delete_by_id(
        client: &Client,
        id: &str,
        version: Option<i64>,
        data_erasure: bool,
    ) -> Result<Response<Self>, HttpError> {
        let id = require("id", id)?;
        let mut query = Vec::new();
        if let Some(version) = version {
            require_version(version)?;
            query.push(("version".to_string(), version.to_string()));
        }
        push_data_erasure(&mut query, data_erasure);
        client.delete(&id_path(Self::ENDPOINT, id), &query).await
    }

    /// Deletes the custom object stored under `container` and `key`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidRequest`] if `container` or `key` is
    /// blank, or any transport error.
    pub async fn delete_by_container_and_key(
        client: &Client,
        container: &str,
        key: &str,
        data_erasure: bool,
    ) -> Result<Response<Self>, HttpError> {
        let path = container_key_path(container, key)?;
        let mut query = Vec::new();
        push_data_erasure(&mut query, data_erasure);
        client.delete(&path, &query).await
    }
}

/// Payload for creating or replacing a custom object.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CustomObjectDraft<T = Value> {
    /// Namespace of the object.
    pub container: String,
    /// Key of the object, unique within its container.
    pub key: String,
    /// The value to store.
    pub value: T,
    /// Expected current version, for optimistic concurrency.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<i64>,
}

impl<T> CustomObjectDraft<T> {
    /// Creates an unversioned draft.
    #[must_use]
    pub fn new(container: impl Into<String>, key: impl Into<String>, value: T) -> Self {
        Self {
            container: container.into(),
            key: key.into(),
            value,
            version: None,
        }
    }

    /// Only replaces the stored object if it is at `version`.
    #[must_use]
    pub const fn with_version(mut self, version: i64) -> Self {
        self.version = Some(version);
        self
    }
}

fn container_key_path(container: &str, key: &str) -> Result<String, HttpError> {
    let container = require("container", container)?;
    let key = require("key", key)?;
    Ok(format!(
        "/custom-objects/{}/{}",
        urlencoding::encode(container),
        urlencoding::encode(key)
    ))
}

fn push_data_erasure(query: &mut Vec<(String, String)>, data_erasure: bool) {
    if data_erasure {
        query.push((DATA_ERASURE.to_string(), "true".to_string()));
    }
}
