//! Effect records and their detail payloads.

use std::{
    collections::BTreeMap,
    convert::TryFrom,
    fmt::{self, Display, Formatter},
};

use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::FromPrimitive;
use serde::{Serialize, Serializer};

use ledger_types::{AccountId, Amount, OperationId};

/// The kind of an effect, with the numeric code it is persisted under.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromPrimitive, ToPrimitive, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectType {
    /// A new account was funded.
    AccountCreated = 0,
    /// An account was merged into another.
    AccountRemoved = 1,
    /// An account received funds.
    AccountCredited = 2,
    /// An account sent funds.
    AccountDebited = 3,
    /// An account's low, medium or high threshold changed.
    AccountThresholdsUpdated = 4,
    /// An account's home domain changed.
    AccountHomeDomainUpdated = 5,
    /// An account's authorization flags changed.
    AccountFlagsUpdated = 6,
    /// An account's inflation destination changed.
    AccountInflationDestinationUpdated = 7,
    /// A signer was added to an account.
    SignerCreated = 10,
    /// A signer was removed from an account.
    SignerRemoved = 11,
    /// A signer of an account is still present after a signer change.
    SignerUpdated = 12,
    #[allow(missing_docs)]
    TrustlineCreated = 20,
    #[allow(missing_docs)]
    TrustlineRemoved = 21,
    #[allow(missing_docs)]
    TrustlineUpdated = 22,
    #[allow(missing_docs)]
    TrustlineAuthorized = 23,
    #[allow(missing_docs)]
    TrustlineDeauthorized = 24,
    #[allow(missing_docs)]
    OfferCreated = 30,
    #[allow(missing_docs)]
    OfferRemoved = 31,
    #[allow(missing_docs)]
    OfferUpdated = 32,
    /// One side of a trade against an offer.
    Trade = 33,
    #[allow(missing_docs)]
    DataCreated = 40,
    #[allow(missing_docs)]
    DataRemoved = 41,
    #[allow(missing_docs)]
    DataUpdated = 42,
    #[allow(missing_docs)]
    SequenceBumped = 43,
}

impl EffectType {
    /// Returns the persisted numeric code.
    pub fn code(&self) -> i32 {
        *self as i32
    }
}

impl TryFrom<i32> for EffectType {
    type Error = i32;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        FromPrimitive::from_i32(code).ok_or(code)
    }
}

impl Display for EffectType {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        write!(formatter, "{:?}", self)
    }
}

/// A single value in an effect's detail payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailValue {
    #[allow(missing_docs)]
    String(String),
    #[allow(missing_docs)]
    Integer(i64),
    /// Rendered as its seven-decimal string.
    Amount(Amount),
    #[allow(missing_docs)]
    Bool(bool),
}

impl Serialize for DetailValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            DetailValue::String(value) => serializer.serialize_str(value),
            DetailValue::Integer(value) => serializer.serialize_i64(*value),
            DetailValue::Amount(amount) => serializer.collect_str(amount),
            DetailValue::Bool(value) => serializer.serialize_bool(*value),
        }
    }
}

impl From<String> for DetailValue {
    fn from(value: String) -> Self {
        DetailValue::String(value)
    }
}

impl From<&str> for DetailValue {
    fn from(value: &str) -> Self {
        DetailValue::String(value.to_string())
    }
}

impl From<i64> for DetailValue {
    fn from(value: i64) -> Self {
        DetailValue::Integer(value)
    }
}

impl From<u32> for DetailValue {
    fn from(value: u32) -> Self {
        DetailValue::Integer(i64::from(value))
    }
}

impl From<Amount> for DetailValue {
    fn from(amount: Amount) -> Self {
        DetailValue::Amount(amount)
    }
}

impl From<bool> for DetailValue {
    fn from(value: bool) -> Self {
        DetailValue::Bool(value)
    }
}

/// The detail payload of an effect: keys in sorted order, each with a typed value.
///
/// Serializes as a flat object.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Details(BTreeMap<String, DetailValue>);

impl Details {
    /// Constructs an empty `Details`.
    pub fn new() -> Self {
        Details(BTreeMap::new())
    }

    /// Sets `key` to `value`, replacing any previous value.
    pub fn insert<K: Into<String>, V: Into<DetailValue>>(&mut self, key: K, value: V) {
        self.0.insert(key.into(), value.into());
    }

    /// Returns the value of `key`.
    pub fn get(&self, key: &str) -> Option<&DetailValue> {
        self.0.get(key)
    }

    /// Returns `true` if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns the entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &DetailValue)> {
        self.0.iter().map(|(key, value)| (key.as_str(), value))
    }
}

/// One observable consequence of an applied operation, attributed to one account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Effect {
    /// The account the effect is attributed to.
    pub address: AccountId,
    /// The operation which caused the effect.
    pub operation_id: OperationId,
    /// The kind of the effect.
    #[serde(rename = "type")]
    pub effect_type: EffectType,
    /// 1-based position among the operation's effects.
    pub order: u32,
    /// Type-specific payload.
    pub details: Details,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn should_convert_codes() {
        assert_eq!(EffectType::try_from(0), Ok(EffectType::AccountCreated));
        assert_eq!(EffectType::try_from(33), Ok(EffectType::Trade));
        assert_eq!(EffectType::try_from(43), Ok(EffectType::SequenceBumped));
        assert_eq!(EffectType::try_from(8), Err(8));
        assert_eq!(EffectType::SignerUpdated.code(), 12);
        assert_eq!(EffectType::AccountInflationDestinationUpdated.code(), 7);
    }

    #[test]
    fn details_should_serialize_as_flat_object() {
        let mut details = Details::new();
        details.insert("amount", Amount::new(10_000_000_000));
        details.insert("asset_type", "native");
        details.insert("offer_id", 7_i64);
        details.insert("auth_required_flag", true);
        details.insert("weight", 1_u32);

        assert_eq!(
            serde_json::to_value(&details).unwrap(),
            json!({
                "amount": "1000.0000000",
                "asset_type": "native",
                "auth_required_flag": true,
                "offer_id": 7,
                "weight": 1,
            })
        );
        let keys: Vec<&str> = details.iter().map(|(key, _)| key).collect();
        assert_eq!(
            keys,
            ["amount", "asset_type", "auth_required_flag", "offer_id", "weight"]
        );
    }

    #[test]
    fn insert_should_replace_previous_value() {
        let mut details = Details::new();
        details.insert("auth_required_flag", true);
        details.insert("auth_required_flag", false);
        assert_eq!(details.len(), 1);
        assert_eq!(
            details.get("auth_required_flag"),
            Some(&DetailValue::Bool(false))
        );
    }

    #[test]
    fn effect_should_serialize_type_name() {
        let effect = Effect {
            address: AccountId::new([0; 32]),
            operation_id: OperationId::from_raw(240518172673),
            effect_type: EffectType::AccountCredited,
            order: 1,
            details: Details::new(),
        };
        assert_eq!(
            serde_json::to_value(&effect).unwrap(),
            json!({
                "address": "GAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAWHF",
                "operation_id": 240518172673_i64,
                "type": "account_credited",
                "order": 1,
                "details": {},
            })
        );
    }
}
