//! `ShippingMethod` resource.
//!
//! A shipping method holds one set of [`ShippingRate`]s per zone. Rates and
//! their tiers carry polymorphic [`Money`](crate::rest::resources::Money)
//! values, which decode through the money resolver.

use serde::{Deserialize, Serialize};

use crate::rest::resources::common::{
    LocalizedString, Reference, ResourceIdentifier, ShippingRate, ShippingRateDraft,
};
use crate::rest::{Resource, TypedAction, UpdatableResource};

/// A shipping method.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingMethod {
    /// Server-generated id.
    pub id: String,
    /// Current version, used for optimistic concurrency.
    pub version: i64,
    /// User-defined unique key.
    #[serde(default)]
    pub key: Option<String>,
    /// Display name.
    pub name: String,
    /// Plain description.
    #[serde(default)]
    pub description: Option<String>,
    /// Description per locale.
    #[serde(default)]
    pub localized_description: Option<LocalizedString>,
    /// Tax category applied to the shipping costs.
    pub tax_category: Reference,
    /// Shipping rates grouped by zone.
    #[serde(default)]
    pub zone_rates: Vec<ZoneRate>,
    /// Whether this is the project's default shipping method.
    #[serde(default)]
    pub is_default: bool,
    /// Cart predicate restricting where the method applies.
    #[serde(default)]
    pub predicate: Option<String>,
}

impl ShippingMethod {
    /// Returns the rates of the zone with the given id.
    #[must_use]
    pub fn rates_for_zone(&self, zone_id: &str) -> Option<&[ShippingRate]> {
        self.zone_rates
            .iter()
            .find(|zone_rate| zone_rate.zone.id == zone_id)
            .map(|zone_rate| zone_rate.shipping_rates.as_slice())
    }
}

impl Resource for ShippingMethod {
    type Draft = ShippingMethodDraft;

    const NAME: &'static str = "ShippingMethod";
    const ENDPOINT: &'static str = "/shipping-methods";
}

impl UpdatableResource for ShippingMethod {}

/// The shipping rates of one zone.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneRate {
    /// The zone the rates apply to.
    pub zone: Reference,
    /// Rates for the zone, one per currency.
    #[serde(default)]
    pub shipping_rates: Vec<ShippingRate>,
}

/// Payload for creating a shipping method.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingMethodDraft {
    /// User-defined unique key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// Display name.
    pub name: String,
    /// Plain description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Tax category applied to the shipping costs.
    pub tax_category: ResourceIdentifier,
    /// Shipping rates grouped by zone.
    pub zone_rates: Vec<ZoneRateDraft>,
    /// Whether this becomes the project's default shipping method.
    pub is_default: bool,
    /// Cart predicate restricting where the method applies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub predicate: Option<String>,
}

impl ShippingMethodDraft {
    /// Creates a non-default draft without zone rates.
    #[must_use]
    pub fn new(name: impl Into<String>, tax_category: ResourceIdentifier) -> Self {
        Self {
            key: None,
            name: name.into(),
            description: None,
            tax_category,
            zone_rates: Vec::new(),
            is_default: false,
            predicate: None,
        }
    }

    /// Adds the rates of one zone.
    #[must_use]
    pub fn zone_rate(mut self, zone: ResourceIdentifier, shipping_rates: Vec<ShippingRateDraft>) -> Self {
        self.zone_rates.push(ZoneRateDraft {
            zone,
            shipping_rates,
        });
        self
    }
}

/// The shipping rates of one zone, as sent in a draft.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneRateDraft {
    /// The zone the rates apply to.
    pub zone: ResourceIdentifier,
    /// Rates for the zone, one per currency.
    pub shipping_rates: Vec<ShippingRateDraft>,
}

/// Adds a zone to the shipping method.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AddZoneAction {
    pub zone: ResourceIdentifier,
}

impl TypedAction for AddZoneAction {
    const ACTION: &'static str = "addZone";
}

/// Adds a shipping rate to a zone of the shipping method.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddShippingRateAction {
    pub zone: ResourceIdentifier,
    pub shipping_rate: ShippingRateDraft,
}

impl TypedAction for AddShippingRateAction {
    const ACTION: &'static str = "addShippingRate";
}

/// Removes a shipping rate from a zone of the shipping method.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveShippingRateAction {
    pub zone: ResourceIdentifier,
    pub shipping_rate: ShippingRateDraft,
}

impl TypedAction for RemoveShippingRateAction {
    const ACTION: &'static str = "removeShippingRate";
}

/// Makes the shipping method the project default, or not.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeIsDefaultAction {
    pub is_default: bool,
}

impl TypedAction for ChangeIsDefaultAction {
    const ACTION: &'static str = "changeIsDefault";
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::resources::common::{Money, MoneyType, SetKeyAction, Tier};
    use crate::rest::UpdateRequest;
    use serde_json::json;

    fn shipping_method_json() -> serde_json::Value {
        json!({
            "id": "sm-1",
            "version": 4,
            "key": "standard",
            "name": "Standard",
            "localizedDescription": {"en": "Standard shipping", "de": "Standardversand"},
            "taxCategory": {"typeId": "tax-category", "id": "tc-1"},
            "zoneRates": [{
                "zone": {"typeId": "zone", "id": "zone-eu"},
                "shippingRates": [{
                    "price": {"type": "centPrecision", "currencyCode": "EUR", "centAmount": 500, "fractionDigits": 2},
                    "freeAbove": {"currencyCode": "EUR", "centAmount": 5000},
                    "tiers": [
                        {"type": "CartValue", "minimumCentAmount": 2000, "price": {"currencyCode": "EUR", "centAmount": 250}},
                        {"type": "CartClassification", "value": "Heavy", "price": {"type": "highPrecision", "currencyCode": "EUR", "centAmount": 1000, "fractionDigits": 3, "preciseAmount": 9999}},
                        {"type": "CartScore", "score": 3, "priceFunction": {"currencyCode": "EUR", "function": "x * 100"}}
                    ]
                }]
            }],
            "isDefault": true
        })
    }

    #[test]
    fn test_shipping_method_decodes_money_and_tiers() {
        let method: ShippingMethod = serde_json::from_value(shipping_method_json()).unwrap();

        assert_eq!(method.key.as_deref(), Some("standard"));
        assert!(method.is_default);
        assert_eq!(
            method.localized_description.unwrap().get("de").map(String::as_str),
            Some("Standardversand")
        );

        let rate = &method.zone_rates[0].shipping_rates[0];
        assert_eq!(rate.price.money_type(), MoneyType::CentPrecision);
        assert_eq!(rate.free_above.as_ref().map(Money::money_type), Some(MoneyType::Plain));

        match &rate.tiers[1] {
            Tier::CartClassification { price, value, .. } => {
                assert_eq!(value, "Heavy");
                assert_eq!(price.precise_amount(), Some(9999));
            }
            other => panic!("unexpected tier: {other:?}"),
        }
        match &rate.tiers[2] {
            Tier::CartScore {
                price,
                score,
                price_function,
                ..
            } => {
                assert!(price.is_none());
                assert_eq!(*score, 3);
                assert_eq!(price_function.as_ref().unwrap().function, "x * 100");
            }
            other => panic!("unexpected tier: {other:?}"),
        }
    }

    #[test]
    fn test_rates_for_zone() {
        let mut method: ShippingMethod = serde_json::from_value(shipping_method_json()).unwrap();
        assert_eq!(method.rates_for_zone("zone-eu").map(<[_]>::len), Some(1));
        assert!(method.rates_for_zone("zone-us").is_none());

        method.zone_rates.clear();
        assert!(method.rates_for_zone("zone-eu").is_none());
    }

    #[test]
    fn test_unknown_tier_type_fails_whole_method() {
        let mut value = shipping_method_json();
        value["zoneRates"][0]["shippingRates"][0]["tiers"][0]["type"] = json!("CartWeight");

        let error = serde_json::from_value::<ShippingMethod>(value).unwrap_err();
        assert!(error.to_string().contains("Unknown type: CartWeight"));
    }

    #[test]
    fn test_draft_serialization() {
        let draft = ShippingMethodDraft::new("Express", ResourceIdentifier::by_id("tax-category", "tc-1"))
            .zone_rate(
                ResourceIdentifier::by_key("zone", "europe"),
                vec![ShippingRateDraft::new(Money::plain("EUR", 990))],
            );

        assert_eq!(
            serde_json::to_value(&draft).unwrap(),
            json!({
                "name": "Express",
                "taxCategory": {"typeId": "tax-category", "id": "tc-1"},
                "zoneRates": [{
                    "zone": {"typeId": "zone", "key": "europe"},
                    "shippingRates": [{"price": {"currencyCode": "EUR", "centAmount": 990}}]
                }],
                "isDefault": false
            })
        );
    }

    #[test]
    fn test_shipping_method_actions_encode() {
        let zone = ResourceIdentifier::by_id("zone", "zone-eu");
        let json = UpdateRequest::new(4)
            .action(SetKeyAction::new(Some("express".to_string())))
            .action(AddZoneAction { zone: zone.clone() })
            .action(AddShippingRateAction {
                zone,
                shipping_rate: ShippingRateDraft::new(Money::plain("EUR", 1200)),
            })
            .action(ChangeIsDefaultAction { is_default: false })
            .to_json()
            .unwrap();

        assert_eq!(json["actions"][0], json!({"action": "setKey", "key": "express"}));
        assert_eq!(json["actions"][1]["action"], "addZone");
        assert_eq!(
            json["actions"][2]["shippingRate"],
            json!({"price": {"currencyCode": "EUR", "centAmount": 1200}})
        );
        assert_eq!(
            json["actions"][3],
            json!({"action": "changeIsDefault", "isDefault": false})
        );
    }
}
