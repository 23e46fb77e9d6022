//! Operations: the individual actions carried by a transaction.

use std::{
    convert::TryFrom,
    fmt::{self, Display, Formatter},
};

#[cfg(feature = "datasize")]
use datasize::DataSize;
use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::FromPrimitive;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{AccountId, Amount, Asset, Price, Signer};

/// The protocol's tag for each kind of operation.
#[repr(i32)]
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, FromPrimitive, ToPrimitive, Serialize, Deserialize,
)]
#[cfg_attr(feature = "datasize", derive(DataSize))]
#[serde(rename_all = "snake_case")]
pub enum OperationType {
    #[allow(missing_docs)]
    CreateAccount = 0,
    #[allow(missing_docs)]
    Payment = 1,
    #[allow(missing_docs)]
    PathPaymentStrictReceive = 2,
    #[allow(missing_docs)]
    ManageSellOffer = 3,
    #[allow(missing_docs)]
    CreatePassiveSellOffer = 4,
    #[allow(missing_docs)]
    SetOptions = 5,
    #[allow(missing_docs)]
    ChangeTrust = 6,
    #[allow(missing_docs)]
    AllowTrust = 7,
    #[allow(missing_docs)]
    AccountMerge = 8,
    #[allow(missing_docs)]
    Inflation = 9,
    #[allow(missing_docs)]
    ManageData = 10,
    #[allow(missing_docs)]
    BumpSequence = 11,
    #[allow(missing_docs)]
    ManageBuyOffer = 12,
    #[allow(missing_docs)]
    PathPaymentStrictSend = 13,
}

impl OperationType {
    /// Returns the protocol's numeric tag.
    pub fn code(&self) -> i32 {
        *self as i32
    }
}

impl TryFrom<i32> for OperationType {
    type Error = i32;

    /// Fails with the unrecognised tag itself.
    fn try_from(code: i32) -> Result<Self, Self::Error> {
        FromPrimitive::from_i32(code).ok_or(code)
    }
}

impl Display for OperationType {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        write!(formatter, "{:?}", self)
    }
}

/// Error returned when an unrecognised tag turns out to name a known operation type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("tag {0} names the known operation type {1}")]
pub struct KnownTypeCodeError(pub i32, pub OperationType);

/// The raw tag of an operation this version of the decoder does not recognise.
///
/// Never holds the tag of a known `OperationType`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "datasize", derive(DataSize))]
#[serde(try_from = "i32", into = "i32")]
pub struct UnknownTypeCode(i32);

impl UnknownTypeCode {
    /// Returns the raw tag.
    pub fn value(&self) -> i32 {
        self.0
    }
}

impl TryFrom<i32> for UnknownTypeCode {
    type Error = KnownTypeCodeError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match OperationType::try_from(code) {
            Ok(operation_type) => Err(KnownTypeCodeError(code, operation_type)),
            Err(code) => Ok(UnknownTypeCode(code)),
        }
    }
}

impl From<UnknownTypeCode> for i32 {
    fn from(code: UnknownTypeCode) -> Self {
        code.0
    }
}

impl Display for UnknownTypeCode {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

/// Funds and creates a new account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "datasize", derive(DataSize))]
#[serde(deny_unknown_fields)]
pub struct CreateAccountOp {
    /// The account to create.
    pub destination: AccountId,
    /// Native balance to fund it with.
    pub starting_balance: Amount,
}

/// Sends an amount of an asset to an existing account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "datasize", derive(DataSize))]
#[serde(deny_unknown_fields)]
pub struct PaymentOp {
    /// The receiving account.
    pub destination: AccountId,
    /// The asset sent.
    pub asset: Asset,
    /// The amount sent.
    pub amount: Amount,
}

/// Sends an asset through a path of offers so the destination receives an exact amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "datasize", derive(DataSize))]
#[serde(deny_unknown_fields)]
pub struct PathPaymentStrictReceiveOp {
    /// The asset debited from the source.
    pub send_asset: Asset,
    /// The most the source is willing to send.
    pub send_max: Amount,
    /// The receiving account.
    pub destination: AccountId,
    /// The asset credited to the destination.
    pub dest_asset: Asset,
    /// The exact amount the destination receives.
    pub dest_amount: Amount,
    /// Intermediate assets.
    #[serde(default)]
    pub path: Vec<Asset>,
}

/// Sends an exact amount of an asset through a path of offers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "datasize", derive(DataSize))]
#[serde(deny_unknown_fields)]
pub struct PathPaymentStrictSendOp {
    /// The asset debited from the source.
    pub send_asset: Asset,
    /// The exact amount the source sends.
    pub send_amount: Amount,
    /// The receiving account.
    pub destination: AccountId,
    /// The asset credited to the destination.
    pub dest_asset: Asset,
    /// The least the destination is willing to receive.
    pub dest_min: Amount,
    /// Intermediate assets.
    #[serde(default)]
    pub path: Vec<Asset>,
}

/// Creates, updates or deletes an offer to sell an amount of an asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "datasize", derive(DataSize))]
#[serde(deny_unknown_fields)]
pub struct ManageSellOfferOp {
    /// The asset offered.
    pub selling: Asset,
    /// The asset wanted.
    pub buying: Asset,
    /// Amount of `selling` offered; zero deletes the offer.
    pub amount: Amount,
    /// Price of one unit of `selling` in terms of `buying`.
    pub price: Price,
    /// Zero creates a new offer.
    pub offer_id: i64,
}

/// Creates, updates or deletes an offer to buy an amount of an asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "datasize", derive(DataSize))]
#[serde(deny_unknown_fields)]
pub struct ManageBuyOfferOp {
    /// The asset offered.
    pub selling: Asset,
    /// The asset wanted.
    pub buying: Asset,
    /// Amount of `buying` wanted; zero deletes the offer.
    pub buy_amount: Amount,
    /// Price of one unit of `buying` in terms of `selling`.
    pub price: Price,
    /// Zero creates a new offer.
    pub offer_id: i64,
}

/// Creates an offer which does not take offers at the same price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "datasize", derive(DataSize))]
#[serde(deny_unknown_fields)]
pub struct CreatePassiveSellOfferOp {
    /// The asset offered.
    pub selling: Asset,
    /// The asset wanted.
    pub buying: Asset,
    /// Amount of `selling` offered.
    pub amount: Amount,
    /// Price of one unit of `selling` in terms of `buying`.
    pub price: Price,
}

/// Changes account settings. Every field is optional; absent fields are left untouched.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "datasize", derive(DataSize))]
#[serde(default, deny_unknown_fields)]
pub struct SetOptionsOp {
    /// New inflation destination.
    pub inflation_destination: Option<AccountId>,
    /// Account flags to clear.
    pub clear_flags: Option<u32>,
    /// Account flags to set.
    pub set_flags: Option<u32>,
    /// New weight of the master key.
    pub master_weight: Option<u32>,
    /// New low threshold.
    pub low_threshold: Option<u32>,
    /// New medium threshold.
    pub med_threshold: Option<u32>,
    /// New high threshold.
    pub high_threshold: Option<u32>,
    /// New home domain.
    pub home_domain: Option<String>,
    /// Signer to add, update, or remove (with weight zero).
    pub signer: Option<Signer>,
}

/// Creates, updates or removes a trustline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "datasize", derive(DataSize))]
#[serde(deny_unknown_fields)]
pub struct ChangeTrustOp {
    /// The asset to trust.
    pub line: Asset,
    /// The most the source is willing to hold; zero removes the trustline.
    pub limit: Amount,
}

/// Authorizes or deauthorizes another account to hold the source's asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "datasize", derive(DataSize))]
#[serde(deny_unknown_fields)]
pub struct AllowTrustOp {
    /// The account holding the trustline.
    pub trustor: AccountId,
    /// The asset code issued by the source.
    pub asset_code: String,
    /// Whether the trustline is authorized.
    pub authorize: bool,
}

/// Sets, modifies or deletes a data entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "datasize", derive(DataSize))]
#[serde(deny_unknown_fields)]
pub struct ManageDataOp {
    /// The name of the entry.
    pub data_name: String,
    /// The new value; absent deletes the entry.
    #[serde(default)]
    pub data_value: Option<Vec<u8>>,
}

/// Bumps the source's sequence number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "datasize", derive(DataSize))]
#[serde(deny_unknown_fields)]
pub struct BumpSequenceOp {
    /// The sequence number to bump to.
    pub bump_to: i64,
}

/// The request payload of an operation, one arm per operation type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "datasize", derive(DataSize))]
#[serde(tag = "type", content = "body", rename_all = "snake_case")]
pub enum OperationBody {
    #[allow(missing_docs)]
    CreateAccount(CreateAccountOp),
    #[allow(missing_docs)]
    Payment(PaymentOp),
    #[allow(missing_docs)]
    PathPaymentStrictReceive(PathPaymentStrictReceiveOp),
    #[allow(missing_docs)]
    ManageSellOffer(ManageSellOfferOp),
    #[allow(missing_docs)]
    CreatePassiveSellOffer(CreatePassiveSellOfferOp),
    #[allow(missing_docs)]
    SetOptions(SetOptionsOp),
    #[allow(missing_docs)]
    ChangeTrust(ChangeTrustOp),
    #[allow(missing_docs)]
    AllowTrust(AllowTrustOp),
    /// Merges the source into the destination account.
    AccountMerge(AccountId),
    #[allow(missing_docs)]
    Inflation,
    #[allow(missing_docs)]
    ManageData(ManageDataOp),
    #[allow(missing_docs)]
    BumpSequence(BumpSequenceOp),
    #[allow(missing_docs)]
    ManageBuyOffer(ManageBuyOfferOp),
    #[allow(missing_docs)]
    PathPaymentStrictSend(PathPaymentStrictSendOp),
    /// An operation whose tag this version of the decoder does not recognise.
    Unknown {
        /// The raw tag.
        type_code: UnknownTypeCode,
    },
}

impl OperationBody {
    /// Returns the type of this operation, or the raw tag if it is not a known type.
    pub fn operation_type(&self) -> Result<OperationType, i32> {
        let operation_type = match self {
            OperationBody::CreateAccount(_) => OperationType::CreateAccount,
            OperationBody::Payment(_) => OperationType::Payment,
            OperationBody::PathPaymentStrictReceive(_) => OperationType::PathPaymentStrictReceive,
            OperationBody::ManageSellOffer(_) => OperationType::ManageSellOffer,
            OperationBody::CreatePassiveSellOffer(_) => OperationType::CreatePassiveSellOffer,
            OperationBody::SetOptions(_) => OperationType::SetOptions,
            OperationBody::ChangeTrust(_) => OperationType::ChangeTrust,
            OperationBody::AllowTrust(_) => OperationType::AllowTrust,
            OperationBody::AccountMerge(_) => OperationType::AccountMerge,
            OperationBody::Inflation => OperationType::Inflation,
            OperationBody::ManageData(_) => OperationType::ManageData,
            OperationBody::BumpSequence(_) => OperationType::BumpSequence,
            OperationBody::ManageBuyOffer(_) => OperationType::ManageBuyOffer,
            OperationBody::PathPaymentStrictSend(_) => OperationType::PathPaymentStrictSend,
            OperationBody::Unknown { type_code } => return Err(type_code.value()),
        };
        Ok(operation_type)
    }
}

/// An operation, with its optional per-operation source account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "datasize", derive(DataSize))]
#[serde(deny_unknown_fields)]
pub struct Operation {
    /// Overrides the transaction's source account for this operation.
    #[serde(default)]
    pub source_account: Option<AccountId>,
    /// The request payload.
    pub body: OperationBody,
}

impl Operation {
    /// Constructs an operation which uses the transaction's source account.
    pub fn new(body: OperationBody) -> Self {
        Operation {
            source_account: None,
            body,
        }
    }
}
