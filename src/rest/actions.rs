//! Update actions and their wire encoding.
//!
//! Resources are modified by posting a batch of update actions together with
//! the version the caller expects the resource to be at:
//!
//! ```json
//! {"version": 2, "actions": [{"action": "setKey", "key": "vip"}]}
//! ```
//!
//! Typed actions implement [`TypedAction`] and get [`UpdateAction`] for free.
//! [`GenericAction`] covers actions without a typed counterpart.
//!
//! Properties set to `null` are left out of the payload. For several
//! actions an absent field means "unset", so `{"action":"setKey"}` removes
//! the key.
//!
//! # Example
//!
//! ```rust
//! use commercetools_api::rest::{GenericAction, UpdateRequest};
//! use commercetools_api::rest::resources::SetKeyAction;
//!
//! let request = UpdateRequest::new(2)
//!     .action(SetKeyAction::new(None))
//!     .action(GenericAction::new("changeName").set_property("name", "VIP"));
//!
//! let json = request.to_json().unwrap();
//! assert_eq!(
//!     json.to_string(),
//!     r#"{"version":2,"actions":[{"action":"setKey"},{"action":"changeName","name":"VIP"}]}"#
//! );
//! ```

use std::fmt;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::clients::{HttpError, InvalidRequestError};

/// Name of the discriminator field of every action.
pub const ACTION_FIELD: &str = "action";

/// An update action of any kind.
pub trait UpdateAction: fmt::Debug + Send + Sync {
    /// The wire name of the action (e.g. `setKey`).
    fn action(&self) -> &str;

    /// The action's own fields, without the `action` discriminator.
    ///
    /// # Errors
    ///
    /// Returns a serde error if the fields cannot be serialized to a JSON object.
    fn fields(&self) -> Result<Map<String, Value>, serde_json::Error>;
}

/// An update action backed by a serializable struct.
///
/// The action name is fixed by the type, so callers cannot construct an
/// action with the wrong or an empty name.
pub trait TypedAction: Serialize + fmt::Debug + Send + Sync {
    /// The wire name of the action.
    const ACTION: &'static str;
}

impl<T: TypedAction> UpdateAction for T {
    fn action(&self) -> &str {
        T::ACTION
    }

    fn fields(&self) -> Result<Map<String, Value>, serde_json::Error> {
        match serde_json::to_value(self)? {
            Value::Object(map) => Ok(map),
            Value::Null => Ok(Map::new()),
            other => Err(serde::ser::Error::custom(format!(
                "update action '{}' must serialize to an object, got {other}",
                T::ACTION
            ))),
        }
    }
}

/// An update action with a free-form, ordered property bag.
///
/// Use it for actions the crate has no typed struct for.
#[derive(Clone, Debug, PartialEq)]
pub struct GenericAction {
    action: String,
    properties: Map<String, Value>,
}

impl GenericAction {
    /// Creates a generic action with the given wire name.
    #[must_use]
    pub fn new(action: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            properties: Map::new(),
        }
    }

    /// Sets a property. Setting the same name twice keeps the last value in
    /// its original position.
    ///
    /// A property named `action` is ignored when encoding.
    #[must_use]
    pub fn set_property(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }

    /// Returns a property value.
    #[must_use]
    pub fn property(&self, name: &str) -> Option<&Value> {
        self.properties.get(name)
    }
}

impl UpdateAction for GenericAction {
    fn action(&self) -> &str {
        &self.action
    }

    fn fields(&self) -> Result<Map<String, Value>, serde_json::Error> {
        Ok(self.properties.clone())
    }
}

/// A versioned batch of update actions.
#[derive(Debug)]
pub struct UpdateRequest {
    version: i64,
    actions: Vec<Box<dyn UpdateAction>>,
}

impl UpdateRequest {
    /// Creates an empty batch for a resource expected to be at `version`.
    #[must_use]
    pub fn new(version: i64) -> Self {
        Self {
            version,
            actions: Vec::new(),
        }
    }

    /// Appends an action.
    #[must_use]
    pub fn action(mut self, action: impl UpdateAction + 'static) -> Self {
        self.actions.push(Box::new(action));
        self
    }

    /// Appends an already boxed action.
    #[must_use]
    pub fn boxed_action(mut self, action: Box<dyn UpdateAction>) -> Self {
        self.actions.push(action);
        self
    }

    /// Returns the expected resource version.
    #[must_use]
    pub const fn version(&self) -> i64 {
        self.version
    }

    /// Returns the number of actions in the batch.
    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Returns `true` if the batch has no actions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Encodes the batch into its wire payload.
    ///
    /// # Errors
    ///
    /// See [`encode`].
    pub fn to_json(&self) -> Result<Value, HttpError> {
        encode(self.version, &self.actions)
    }
}

/// Encodes a version and actions into `{"version": v, "actions": [...]}`.
///
/// Each action is written as its `action` discriminator followed by its own
/// fields in declaration order. Null values are dropped.
///
/// # Errors
///
/// Returns [`HttpError::InvalidRequest`] if `version < 1`, `actions` is
/// empty, or an action has an empty name, and [`HttpError::Encode`] if an
/// action cannot be serialized.
pub fn encode(version: i64, actions: &[Box<dyn UpdateAction>]) -> Result<Value, HttpError> {
    validate(version, actions.len())?;

    let mut encoded = Vec::with_capacity(actions.len());
    for action in actions {
        if action.action().trim().is_empty() {
            return Err(InvalidRequestError::EmptyActionName.into());
        }

        let mut object = Map::new();
        object.insert(
            ACTION_FIELD.to_string(),
            Value::String(action.action().to_string()),
        );
        for (name, value) in action.fields()? {
            if name == ACTION_FIELD || value.is_null() {
                continue;
            }
            object.insert(name, strip_nulls(value));
        }
        encoded.push(Value::Object(object));
    }

    let mut payload = Map::new();
    payload.insert("version".to_string(), Value::from(version));
    payload.insert("actions".to_string(), Value::Array(encoded));
    Ok(Value::Object(payload))
}

/// Checks the preconditions of an update before anything is encoded or sent.
///
/// # Errors
///
/// Returns [`InvalidRequestError::InvalidVersion`] or
/// [`InvalidRequestError::NoActions`].
pub const fn validate(version: i64, action_count: usize) -> Result<(), InvalidRequestError> {
    if version < 1 {
        return Err(InvalidRequestError::InvalidVersion { version });
    }
    if action_count == 0 {
        return Err(InvalidRequestError::NoActions);
    }
    Ok(())
}

/// Removes null-valued members from objects, recursively.
fn strip_nulls(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .filter(|(_, v)| !v.is_null())
                .map(|(k, v)| (k, strip_nulls(v)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(strip_nulls).collect()),
        other => other,
    }
}
