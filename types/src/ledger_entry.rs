//! Ledger entries and the before/after snapshots recorded when an operation changes them.

use std::collections::BTreeMap;

use bitflags::bitflags;
#[cfg(feature = "datasize")]
use datasize::DataSize;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{AccountId, Amount, Asset, Signer};

bitflags! {
    /// Authorization flags an issuing account sets on itself.
    #[cfg_attr(feature = "datasize", derive(DataSize))]
    pub struct AccountFlags: u32 {
        /// Trustlines to this account's assets must be authorized by the issuer.
        const AUTH_REQUIRED = 0x1;
        /// The issuer may revoke authorization of existing trustlines.
        const AUTH_REVOCABLE = 0x2;
        /// None of the authorization flags can ever be changed again.
        const AUTH_IMMUTABLE = 0x4;
    }
}

impl Default for AccountFlags {
    fn default() -> Self {
        AccountFlags::empty()
    }
}

impl Serialize for AccountFlags {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.bits().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for AccountFlags {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let bits = u32::deserialize(deserializer)?;
        Ok(AccountFlags::from_bits_truncate(bits))
    }
}

/// The signing weight of the master key and the weights required for each class of operation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "datasize", derive(DataSize))]
#[serde(deny_unknown_fields)]
pub struct Thresholds {
    /// Weight of the account's own key.
    pub master_weight: u8,
    /// Threshold for low-security operations.
    pub low: u8,
    /// Threshold for medium-security operations.
    pub medium: u8,
    /// Threshold for high-security operations.
    pub high: u8,
}

/// The state of an account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "datasize", derive(DataSize))]
#[serde(deny_unknown_fields)]
pub struct AccountEntry {
    /// The account.
    pub account_id: AccountId,
    /// Balance of the native asset.
    pub balance: Amount,
    /// Last used sequence number.
    pub sequence_number: i64,
    /// Number of trustlines, offers, signers and data entries owned by the account.
    #[serde(default)]
    pub num_sub_entries: u32,
    /// Account receiving this account's inflation votes.
    #[serde(default)]
    pub inflation_destination: Option<AccountId>,
    /// Authorization flags.
    #[serde(default)]
    pub flags: AccountFlags,
    /// Domain hosting the account's metadata.
    #[serde(default)]
    pub home_domain: String,
    /// Master weight and thresholds.
    pub thresholds: Thresholds,
    /// Additional signers.
    #[serde(default)]
    pub signers: Vec<Signer>,
}

impl AccountEntry {
    /// Returns the weight of the account's own key.
    pub fn master_key_weight(&self) -> u8 {
        self.thresholds.master_weight
    }

    /// Returns every key able to sign for this account, keyed by address, with its weight.
    ///
    /// The master key is only included while its weight is non-zero.
    pub fn signer_summary(&self) -> BTreeMap<String, u32> {
        let mut summary = BTreeMap::new();
        if self.master_key_weight() > 0 {
            summary.insert(
                self.account_id.address(),
                u32::from(self.master_key_weight()),
            );
        }
        for signer in &self.signers {
            summary.insert(signer.key.address(), signer.weight);
        }
        summary
    }
}

/// A trustline: an account's holding of a credit asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "datasize", derive(DataSize))]
#[serde(deny_unknown_fields)]
pub struct TrustLineEntry {
    /// The holding account.
    pub account_id: AccountId,
    /// The asset held.
    pub asset: Asset,
    /// Amount held.
    pub balance: Amount,
    /// Maximum amount the account is willing to hold.
    pub limit: Amount,
    /// Authorization flags.
    #[serde(default)]
    pub flags: u32,
}

/// A price, as a fraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "datasize", derive(DataSize))]
#[serde(deny_unknown_fields)]
pub struct Price {
    /// Numerator.
    pub n: i32,
    /// Denominator.
    pub d: i32,
}

/// An open offer on the order book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "datasize", derive(DataSize))]
#[serde(deny_unknown_fields)]
pub struct OfferEntry {
    /// The account selling.
    pub seller_id: AccountId,
    /// The offer's id.
    pub offer_id: i64,
    /// The asset offered.
    pub selling: Asset,
    /// The asset wanted.
    pub buying: Asset,
    /// Amount of `selling` still offered.
    pub amount: Amount,
    /// Price of one unit of `selling` in terms of `buying`.
    pub price: Price,
    /// Offer flags.
    #[serde(default)]
    pub flags: u32,
}

/// A named blob of data attached to an account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "datasize", derive(DataSize))]
#[serde(deny_unknown_fields)]
pub struct DataEntry {
    /// The owning account.
    pub account_id: AccountId,
    /// The name of the entry.
    pub data_name: String,
    /// The value of the entry.
    pub data_value: Vec<u8>,
}

/// The kind of a ledger entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "datasize", derive(DataSize))]
#[serde(rename_all = "snake_case")]
pub enum LedgerEntryType {
    /// An [`AccountEntry`].
    Account,
    /// A [`TrustLineEntry`].
    Trustline,
    /// An [`OfferEntry`].
    Offer,
    /// A [`DataEntry`].
    Data,
}

/// The contents of a ledger entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "datasize", derive(DataSize))]
#[serde(tag = "type", content = "entry", rename_all = "snake_case")]
pub enum LedgerEntryData {
    #[allow(missing_docs)]
    Account(AccountEntry),
    #[allow(missing_docs)]
    Trustline(TrustLineEntry),
    #[allow(missing_docs)]
    Offer(OfferEntry),
    #[allow(missing_docs)]
    Data(DataEntry),
}

impl LedgerEntryData {
    /// Returns the kind of this entry.
    pub fn entry_type(&self) -> LedgerEntryType {
        match self {
            LedgerEntryData::Account(_) => LedgerEntryType::Account,
            LedgerEntryData::Trustline(_) => LedgerEntryType::Trustline,
            LedgerEntryData::Offer(_) => LedgerEntryType::Offer,
            LedgerEntryData::Data(_) => LedgerEntryType::Data,
        }
    }

    /// Returns the account entry, if this is one.
    pub fn as_account(&self) -> Option<&AccountEntry> {
        match self {
            LedgerEntryData::Account(account) => Some(account),
            _ => None,
        }
    }
}

/// A piece of ledger state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "datasize", derive(DataSize))]
#[serde(deny_unknown_fields)]
pub struct LedgerEntry {
    /// Sequence of the ledger which last modified this entry.
    pub last_modified_ledger_sequence: u32,
    /// The entry itself.
    pub data: LedgerEntryData,
}

/// The state of one ledger entry before and after an operation touched it.
///
/// `pre` is absent for entries the operation created and `post` is absent for entries it removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "datasize", derive(DataSize))]
#[serde(deny_unknown_fields)]
pub struct LedgerEntryChange {
    /// The kind of the changed entry.
    pub entry_type: LedgerEntryType,
    /// The entry before the operation.
    pub pre: Option<LedgerEntry>,
    /// The entry after the operation.
    pub post: Option<LedgerEntry>,
}

impl LedgerEntryChange {
    /// Returns a change of `entry_type` from `pre` to `post`.
    pub fn new(
        entry_type: LedgerEntryType,
        pre: Option<LedgerEntry>,
        post: Option<LedgerEntry>,
    ) -> Self {
        LedgerEntryChange {
            entry_type,
            pre,
            post,
        }
    }
}
