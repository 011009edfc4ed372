//! Common types embedded in several resources.
//!
//! These types are not resources themselves (they don't implement
//! [`Resource`](crate::rest::Resource)) but appear as nested data within
//! resources like `ShippingMethod` and `CustomerGroup`.
//!
//! [`Money`] and [`Tier`] are polymorphic and decode through
//! [`decode`](crate::decode::decode).

mod actions;
mod money;
mod reference;
mod shipping_rate;
mod tier;

use std::collections::BTreeMap;

pub use actions::{
    ChangeNameAction, SetCustomFieldAction, SetCustomTypeAction, SetKeyAction,
};
pub use money::{Money, MoneyType};
pub use reference::{CustomFields, CustomFieldsDraft, Reference, ResourceIdentifier};
pub use shipping_rate::{ShippingRate, ShippingRateDraft};
pub use tier::{PriceFunction, Tier};

/// A string in several locales, keyed by IETF language tag.
pub type LocalizedString = BTreeMap<String, String>;
