//! Monetary amounts.
//!
//! The API returns money in three shapes, selected by a `type` field:
//!
//! - no `type` (or an unrecognized one): the plain `{currencyCode, centAmount}` shape
//! - `centPrecision`: adds `fractionDigits`
//! - `highPrecision`: adds `fractionDigits` and `preciseAmount`
//!
//! Unknown types fall back to the plain shape so money types introduced
//! server-side later still decode. Tiers, in contrast, reject unknown types.

use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::decode::{self, payload, DecodeError, Discriminated};

/// The known money shapes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MoneyType {
    /// No precision information.
    Plain,
    /// `centPrecision`
    CentPrecision,
    /// `highPrecision`
    HighPrecision,
}

impl MoneyType {
    /// Matches a `type` value case-insensitively. Unknown values yield `None`.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        [Self::Plain, Self::CentPrecision, Self::HighPrecision]
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(value))
    }

    /// Returns the wire name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::CentPrecision => "centPrecision",
            Self::HighPrecision => "highPrecision",
        }
    }
}

/// An amount of money in a currency.
///
/// # Example
///
/// ```rust
/// use commercetools_api::rest::resources::Money;
///
/// let money = Money::plain("EUR", 1999);
/// assert_eq!(money.currency_code(), "EUR");
/// assert_eq!(money.cent_amount(), 1999);
/// assert_eq!(money.fraction_digits(), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Money {
    /// `{currencyCode, centAmount}`
    Plain {
        /// ISO 4217 currency code.
        currency_code: String,
        /// Amount in the smallest indivisible unit of the currency.
        cent_amount: i64,
    },
    /// Money with an explicit number of fraction digits.
    CentPrecision {
        /// ISO 4217 currency code.
        currency_code: String,
        /// Amount in the smallest indivisible unit of the currency.
        cent_amount: i64,
        /// Number of digits after the decimal separator.
        fraction_digits: u32,
    },
    /// Money more precise than the currency's smallest unit.
    HighPrecision {
        /// ISO 4217 currency code.
        currency_code: String,
        /// `precise_amount` rounded to the currency's smallest unit.
        cent_amount: i64,
        /// Number of digits after the decimal separator.
        fraction_digits: u32,
        /// Amount in units of `10^-fraction_digits`.
        precise_amount: i64,
    },
}

impl Money {
    /// Creates plain money.
    #[must_use]
    pub fn plain(currency_code: impl Into<String>, cent_amount: i64) -> Self {
        Self::Plain {
            currency_code: currency_code.into(),
            cent_amount,
        }
    }

    /// Returns the shape of this amount.
    #[must_use]
    pub const fn money_type(&self) -> MoneyType {
        match self {
            Self::Plain { .. } => MoneyType::Plain,
            Self::CentPrecision { .. } => MoneyType::CentPrecision,
            Self::HighPrecision { .. } => MoneyType::HighPrecision,
        }
    }

    /// Returns the currency code.
    #[must_use]
    pub fn currency_code(&self) -> &str {
        match self {
            Self::Plain { currency_code, .. }
            | Self::CentPrecision { currency_code, .. }
            | Self::HighPrecision { currency_code, .. } => currency_code,
        }
    }

    /// Returns the amount in cents.
    #[must_use]
    pub const fn cent_amount(&self) -> i64 {
        match self {
            Self::Plain { cent_amount, .. }
            | Self::CentPrecision { cent_amount, .. }
            | Self::HighPrecision { cent_amount, .. } => *cent_amount,
        }
    }

    /// Returns the fraction digits, if this shape carries them.
    #[must_use]
    pub const fn fraction_digits(&self) -> Option<u32> {
        match self {
            Self::Plain { .. } => None,
            Self::CentPrecision {
                fraction_digits, ..
            }
            | Self::HighPrecision {
                fraction_digits, ..
            } => Some(*fraction_digits),
        }
    }

    /// Returns the precise amount of high precision money.
    #[must_use]
    pub const fn precise_amount(&self) -> Option<i64> {
        match self {
            Self::HighPrecision { precise_amount, .. } => Some(*precise_amount),
            _ => None,
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlainData {
    currency_code: String,
    cent_amount: i64,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CentPrecisionData {
    currency_code: String,
    cent_amount: i64,
    fraction_digits: u32,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct HighPrecisionData {
    currency_code: String,
    cent_amount: i64,
    fraction_digits: u32,
    precise_amount: i64,
}

impl Money {
    /// The plain fallback: requires both `currencyCode` and `centAmount`.
    fn plain_fallback(data: &Value) -> Result<Option<Self>, DecodeError> {
        let present = |field: &str| data.get(field).is_some_and(|v| !v.is_null());
        if !present("currencyCode") || !present("centAmount") {
            return Ok(None);
        }
        let d: PlainData = payload("money", data)?;
        Ok(Some(Self::Plain {
            currency_code: d.currency_code,
            cent_amount: d.cent_amount,
        }))
    }
}

impl Discriminated for Money {
    const FAMILY: &'static str = "money";

    fn from_variant(tag: Option<&str>, data: &Value) -> Result<Option<Self>, DecodeError> {
        match tag.and_then(MoneyType::parse) {
            Some(MoneyType::CentPrecision) => {
                let d: CentPrecisionData = payload("centPrecision money", data)?;
                Ok(Some(Self::CentPrecision {
                    currency_code: d.currency_code,
                    cent_amount: d.cent_amount,
                    fraction_digits: d.fraction_digits,
                }))
            }
            Some(MoneyType::HighPrecision) => {
                let d: HighPrecisionData = payload("highPrecision money", data)?;
                Ok(Some(Self::HighPrecision {
                    currency_code: d.currency_code,
                    cent_amount: d.cent_amount,
                    fraction_digits: d.fraction_digits,
                    precise_amount: d.precise_amount,
                }))
            }
            Some(MoneyType::Plain) | None => Self::plain_fallback(data),
        }
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        decode::deserialize_required(deserializer)
    }
}

impl Serialize for Money {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(None)?;
        if !matches!(self, Self::Plain { .. }) {
            map.serialize_entry("type", self.money_type().as_str())?;
        }
        map.serialize_entry("currencyCode", self.currency_code())?;
        map.serialize_entry("centAmount", &self.cent_amount())?;
        if let Some(fraction_digits) = self.fraction_digits() {
            map.serialize_entry("fractionDigits", &fraction_digits)?;
        }
        if let Some(precise_amount) = self.precise_amount() {
            map.serialize_entry("preciseAmount", &precise_amount)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::decode;
    use serde_json::json;

    #[test]
    fn test_money_without_type_is_plain() {
        let money: Money = decode(&json!({"currencyCode": "EUR", "centAmount": 100}))
            .unwrap()
            .unwrap();
        assert_eq!(money, Money::plain("EUR", 100));
        assert_eq!(money.money_type(), MoneyType::Plain);
        assert!(money.fraction_digits().is_none());
        assert!(money.precise_amount().is_none());
    }

    #[test]
    fn test_money_without_type_and_missing_fields_is_none() {
        assert!(decode::<Money>(&json!({"currencyCode": "EUR"})).unwrap().is_none());
        assert!(decode::<Money>(&json!({"centAmount": 1})).unwrap().is_none());
        assert!(decode::<Money>(&json!({"currencyCode": "EUR", "centAmount": null}))
            .unwrap()
            .is_none());
        assert!(decode::<Money>(&Value::Null).unwrap().is_none());
    }

    #[test]
    fn test_cent_precision_money() {
        let money: Money = decode(&json!({
            "type": "centPrecision",
            "currencyCode": "USD",
            "centAmount": 4200,
            "fractionDigits": 2
        }))
        .unwrap()
        .unwrap();
        assert_eq!(money.money_type(), MoneyType::CentPrecision);
        assert_eq!(money.fraction_digits(), Some(2));
        assert_eq!(money.cent_amount(), 4200);
    }

    #[test]
    fn test_high_precision_money() {
        let money: Money = decode(&json!({
            "currencyCode": "EUR",
            "centAmount": 100,
            "fractionDigits": 3,
            "type": "highPrecision",
            "preciseAmount": 1000
        }))
        .unwrap()
        .unwrap();
        assert_eq!(money.currency_code(), "EUR");
        assert_eq!(money.cent_amount(), 100);
        assert_eq!(money.fraction_digits(), Some(3));
        assert_eq!(money.precise_amount(), Some(1000));
    }

    #[test]
    fn test_money_type_is_case_insensitive() {
        let money: Money = decode(&json!({
            "type": "CENTPRECISION",
            "currencyCode": "EUR",
            "centAmount": 1,
            "fractionDigits": 2
        }))
        .unwrap()
        .unwrap();
        assert_eq!(money.money_type(), MoneyType::CentPrecision);
    }

    #[test]
    fn test_unknown_money_type_falls_back_to_plain() {
        let money: Money = decode(&json!({
            "type": "superPrecision",
            "currencyCode": "EUR",
            "centAmount": 5,
            "fractionDigits": 9
        }))
        .unwrap()
        .unwrap();
        assert_eq!(money, Money::plain("EUR", 5));
    }

    #[test]
    fn test_known_type_with_missing_fields_is_an_error() {
        let result = decode::<Money>(&json!({
            "type": "highPrecision",
            "currencyCode": "EUR",
            "centAmount": 5
        }));
        assert!(matches!(
            result,
            Err(DecodeError::InvalidPayload { target: "highPrecision money", .. })
        ));
    }

    #[test]
    fn test_money_serialization() {
        assert_eq!(
            serde_json::to_string(&Money::plain("EUR", 100)).unwrap(),
            r#"{"currencyCode":"EUR","centAmount":100}"#
        );

        let money = Money::HighPrecision {
            currency_code: "EUR".to_string(),
            cent_amount: 100,
            fraction_digits: 3,
            precise_amount: 1000,
        };
        assert_eq!(
            serde_json::to_string(&money).unwrap(),
            r#"{"type":"highPrecision","currencyCode":"EUR","centAmount":100,"fractionDigits":3,"preciseAmount":1000}"#
        );
    }

    #[test]
    fn test_money_inside_derived_struct() {
        #[derive(Deserialize)]
        struct Price {
            value: Money,
        }

        let price: Price = serde_json::from_value(json!({
            "value": {"type": "centPrecision", "currencyCode": "EUR", "centAmount": 1, "fractionDigits": 2}
        }))
        .unwrap();
        assert_eq!(price.value.fraction_digits(), Some(2));

        let missing: Result<Price, _> = serde_json::from_value(json!({"value": {"currencyCode": "EUR"}}));
        assert!(missing.is_err());
    }
}
