//! Shipping rate price tiers.
//!
//! A tier overrides the price of a shipping rate for carts matching a
//! condition. The `type` field selects the condition. Unlike money, an
//! unknown tier type is a hard decode error: a tier whose condition the
//! client cannot interpret must not be silently priced.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::money::Money;
use crate::decode::{self, payload, DecodeError, Discriminated};

/// A formula computing the price of a `CartScore` tier from the cart score.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceFunction {
    /// ISO 4217 currency code of the computed price.
    pub currency_code: String,
    /// The formula, with `x` standing for the score (e.g. `(50 * x) + 4950`).
    pub function: String,
}

/// A shipping rate price tier.
///
/// # Example
///
/// ```rust
/// use commercetools_api::decode::decode;
/// use commercetools_api::rest::resources::Tier;
/// use serde_json::json;
///
/// let tier: Tier = decode(&json!({
///     "type": "CartClassification",
///     "value": "Heavy",
///     "price": {"currencyCode": "EUR", "centAmount": 1000}
/// }))
/// .unwrap()
/// .unwrap();
/// assert_eq!(tier.tier_type(), "CartClassification");
///
/// let unknown = decode::<Tier>(&json!({"type": "CartWeight"}));
/// assert!(unknown.is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum Tier {
    /// Applies when the cart total reaches a minimum amount.
    #[serde(rename = "CartValue", rename_all = "camelCase")]
    CartValue {
        /// Price of the tier.
        price: Money,
        /// Minimum cart total, in cents, for the tier to apply.
        #[serde(skip_serializing_if = "Option::is_none")]
        minimum_cent_amount: Option<i64>,
        /// Set by the server when the tier matches a given cart.
        #[serde(skip_serializing_if = "Option::is_none")]
        is_matching: Option<bool>,
    },
    /// Applies to carts with a given shipping rate input classification.
    #[serde(rename = "CartClassification", rename_all = "camelCase")]
    CartClassification {
        /// Price of the tier.
        price: Money,
        /// Classification key.
        value: String,
        /// Set by the server when the tier matches a given cart.
        #[serde(skip_serializing_if = "Option::is_none")]
        is_matching: Option<bool>,
    },
    /// Applies to carts with a given score.
    #[serde(rename = "CartScore", rename_all = "camelCase")]
    CartScore {
        /// Fixed price of the tier. Absent when a price function is used.
        #[serde(skip_serializing_if = "Option::is_none")]
        price: Option<Money>,
        /// The score the tier applies to.
        score: i64,
        /// Formula computing the price from the score.
        #[serde(skip_serializing_if = "Option::is_none")]
        price_function: Option<PriceFunction>,
        /// Set by the server when the tier matches a given cart.
        #[serde(skip_serializing_if = "Option::is_none")]
        is_matching: Option<bool>,
    },
}

impl Tier {
    /// Returns the wire value of the `type` discriminator.
    #[must_use]
    pub const fn tier_type(&self) -> &'static str {
        match self {
            Self::CartValue { .. } => "CartValue",
            Self::CartClassification { .. } => "CartClassification",
            Self::CartScore { .. } => "CartScore",
        }
    }

    /// Returns the fixed price of the tier, if it has one.
    #[must_use]
    pub const fn price(&self) -> Option<&Money> {
        match self {
            Self::CartValue { price, .. } | Self::CartClassification { price, .. } => Some(price),
            Self::CartScore { price, .. } => price.as_ref(),
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CartValueData {
    price: Money,
    minimum_cent_amount: Option<i64>,
    is_matching: Option<bool>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CartClassificationData {
    price: Money,
    value: String,
    is_matching: Option<bool>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CartScoreData {
    #[serde(default, deserialize_with = "decode::deserialize_optional")]
    price: Option<Money>,
    score: i64,
    price_function: Option<PriceFunction>,
    is_matching: Option<bool>,
}

impl Discriminated for Tier {
    const FAMILY: &'static str = "tier";

    fn from_variant(tag: Option<&str>, data: &Value) -> Result<Option<Self>, DecodeError> {
        let tier = match tag {
            Some("CartValue") => {
                let d: CartValueData = payload("CartValue tier", data)?;
                Self::CartValue {
                    price: d.price,
                    minimum_cent_amount: d.minimum_cent_amount,
                    is_matching: d.is_matching,
                }
            }
            Some("CartClassification") => {
                let d: CartClassificationData = payload("CartClassification tier", data)?;
                Self::CartClassification {
                    price: d.price,
                    value: d.value,
                    is_matching: d.is_matching,
                }
            }
            Some("CartScore") => {
                let d: CartScoreData = payload("CartScore tier", data)?;
                Self::CartScore {
                    price: d.price,
                    score: d.score,
                    price_function: d.price_function,
                    is_matching: d.is_matching,
                }
            }
            Some(other) => {
                return Err(DecodeError::UnknownDiscriminator {
                    family: Self::FAMILY,
                    value: other.to_string(),
                })
            }
            None => {
                return Err(DecodeError::MissingDiscriminator {
                    family: Self::FAMILY,
                })
            }
        };
        Ok(Some(tier))
    }
}

impl<'de> Deserialize<'de> for Tier {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        decode::deserialize_required(deserializer)
    }
}
