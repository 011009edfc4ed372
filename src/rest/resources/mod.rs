//! API resources.
//!
//! Each resource implements [`Resource`](crate::rest::Resource) and, where
//! the endpoint accepts update actions,
//! [`UpdatableResource`](crate::rest::UpdatableResource).
//!
//! # Available Resources
//!
//! ## CustomerGroup
//!
//! ```rust,ignore
//! use commercetools_api::rest::{QueryParams, Resource};
//! use commercetools_api::rest::resources::CustomerGroup;
//!
//! let params = QueryParams::new().where_predicate("key = \"vip\"").limit(20);
//! let groups = CustomerGroup::query(&client, &params).await?;
//! ```
//!
//! ## ShippingMethod
//!
//! Shipping rates carry polymorphic [`Money`] values and [`Tier`]s.
//!
//! ```rust,ignore
//! use commercetools_api::rest::UpdatableResource;
//! use commercetools_api::rest::resources::ShippingMethod;
//!
//! let method = ShippingMethod::get_by_key(&client, "standard").await?;
//! ```
//!
//! ## CustomObject
//!
//! ```rust,ignore
//! use commercetools_api::rest::resources::{CustomObject, CustomObjectDraft};
//!
//! let draft = CustomObjectDraft::new("settings", "checkout", serde_json::json!(true));
//! let saved = CustomObject::create_or_update(&client, &draft).await?;
//! ```

pub mod common;
mod custom_object;
mod customer_group;
mod shipping_method;

pub use common::{
    ChangeNameAction, CustomFields, CustomFieldsDraft, LocalizedString, Money, MoneyType,
    PriceFunction, Reference, ResourceIdentifier, SetCustomFieldAction, SetCustomTypeAction,
    SetKeyAction, ShippingRate, ShippingRateDraft, Tier,
};
pub use custom_object::{CustomObject, CustomObjectDraft};
pub use customer_group::{CustomerGroup, CustomerGroupDraft};
pub use shipping_method::{
    AddShippingRateAction, AddZoneAction, ChangeIsDefaultAction, RemoveShippingRateAction,
    ShippingMethod, ShippingMethodDraft, ZoneRate, ZoneRateDraft,
};
