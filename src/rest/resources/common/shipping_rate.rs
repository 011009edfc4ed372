//! Shipping rates of a shipping method zone.

use serde::{Deserialize, Serialize};

use super::money::Money;
use super::tier::Tier;
use crate::decode;

/// The price of shipping to a zone in one currency.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingRate {
    /// The base price.
    pub price: Money,
    /// Cart total above which shipping is free.
    #[serde(
        default,
        deserialize_with = "decode::deserialize_optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub free_above: Option<Money>,
    /// Set by the server when the rate matches a given cart.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_matching: Option<bool>,
    /// Price tiers overriding `price` for matching carts.
    #[serde(default)]
    pub tiers: Vec<Tier>,
}

/// A shipping rate as sent when creating a shipping method.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingRateDraft {
    /// The base price.
    pub price: Money,
    /// Cart total above which shipping is free.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub free_above: Option<Money>,
    /// Price tiers.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tiers: Vec<Tier>,
}

impl ShippingRateDraft {
    /// Creates a draft with a base price only.
    #[must_use]
    pub const fn new(price: Money) -> Self {
        Self {
            price,
            free_above: None,
            tiers: Vec::new(),
        }
    }
}
