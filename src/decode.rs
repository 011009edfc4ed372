//! Discriminated JSON decoding.
//!
//! Several API payloads are polymorphic: a `type` field selects which shape
//! the rest of the object has. This module provides the [`Discriminated`]
//! trait, implemented by each polymorphic family, and [`decode`], which reads
//! the discriminator and hands it to the family's explicit variant table.
//!
//! Each family decides what an unknown discriminator means. Money falls back
//! to its plain variant while tiers refuse to decode. Both policies are kept
//! distinct on purpose; do not unify them without checking which values the
//! live API can send.
//!
//! # Example
//!
//! ```rust
//! use commercetools_api::decode::decode;
//! use commercetools_api::rest::resources::Money;
//! use serde_json::json;
//!
//! let money: Option<Money> = decode(&json!({
//!     "type": "centPrecision",
//!     "currencyCode": "EUR",
//!     "centAmount": 1000,
//!     "fractionDigits": 2
//! }))
//! .unwrap();
//!
//! assert_eq!(money.unwrap().fraction_digits(), Some(2));
//! ```

use serde::de::{self, DeserializeOwned};
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};
use thiserror::Error;

/// Errors raised while decoding a polymorphic payload.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The discriminator carried a value the family does not accept.
    #[error("Cannot deserialize {family}. Unknown type: {value}")]
    UnknownDiscriminator {
        /// The polymorphic family being decoded (e.g. `tier`).
        family: &'static str,
        /// The offending discriminator value.
        value: String,
    },

    /// The discriminator was required but absent.
    #[error("Cannot deserialize {family}. The discriminator field is missing.")]
    MissingDiscriminator {
        /// The polymorphic family being decoded.
        family: &'static str,
    },

    /// The payload did not match the shape of the selected variant.
    #[error("Cannot deserialize {target}: {source}")]
    InvalidPayload {
        /// The type or variant that was being built.
        target: &'static str,
        /// The underlying serde error.
        #[source]
        source: serde_json::Error,
    },
}

/// A polymorphic family selected by a discriminator field.
///
/// Implementors map each accepted discriminator value to a concrete variant
/// in [`from_variant`](Self::from_variant) and decide what happens for
/// unknown or absent values.
pub trait Discriminated: Sized {
    /// Human-readable family name used in errors.
    const FAMILY: &'static str;

    /// Name of the discriminator field.
    const DISCRIMINATOR: &'static str = "type";

    /// Builds the variant selected by `tag` from `data`.
    ///
    /// `tag` is `None` when the discriminator is absent or `null`.
    /// Returning `Ok(None)` means the payload carries no value of this family.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError`] when the family rejects the payload.
    fn from_variant(tag: Option<&str>, data: &Value) -> Result<Option<Self>, DecodeError>;
}

/// Decodes a polymorphic value from JSON.
///
/// `null` decodes to `None` for every family. A non-string discriminator is
/// handed to the family in its JSON text form.
///
/// # Errors
///
/// Returns [`DecodeError`] if the value is not an object or the family
/// rejects it.
pub fn decode<T: Discriminated>(value: &Value) -> Result<Option<T>, DecodeError> {
    if value.is_null() {
        return Ok(None);
    }
    if !value.is_object() {
        // Non-objects never deserialize into a map, so this always returns the error.
        payload::<Map<String, Value>>(T::FAMILY, value)?;
    }

    let rendered;
    let tag = match value.get(T::DISCRIMINATOR) {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s.as_str()),
        Some(other) => {
            rendered = other.to_string();
            Some(rendered.as_str())
        }
    };

    T::from_variant(tag, value)
}

/// Deserializes `value` into `T`, attributing failures to `target`.
///
/// # Errors
///
/// Returns [`DecodeError::InvalidPayload`] on any serde failure.
pub fn payload<T: DeserializeOwned>(target: &'static str, value: &Value) -> Result<T, DecodeError> {
    T::deserialize(value).map_err(|source| DecodeError::InvalidPayload { target, source })
}

/// Serde adapter decoding a required discriminated value.
///
/// Used to implement `Deserialize` for discriminated families so they can sit
/// inside ordinary `#[derive(Deserialize)]` structs and collections.
///
/// # Errors
///
/// Fails when [`decode`] fails or yields no value.
pub fn deserialize_required<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Discriminated,
{
    let value = Value::deserialize(deserializer)?;
    decode::<T>(&value)
        .map_err(de::Error::custom)?
        .ok_or_else(|| {
            de::Error::custom(format!(
                "Cannot deserialize {}: required fields are missing",
                T::FAMILY
            ))
        })
}

/// Serde adapter decoding an optional discriminated value.
///
/// Pair with `#[serde(default)]` so an absent field also yields `None`.
///
/// # Errors
///
/// Fails when [`decode`] fails.
pub fn deserialize_optional<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Discriminated,
{
    let value = Value::deserialize(deserializer)?;
    decode::<T>(&value).map_err(de::Error::custom)
}
