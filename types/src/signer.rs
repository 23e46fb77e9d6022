//! Keys authorized to sign on behalf of an account.

use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

#[cfg(feature = "datasize")]
use datasize::DataSize;
#[cfg(any(feature = "testing", test))]
use rand::Rng;
use serde::{de::Error as SerdeError, Deserialize, Deserializer, Serialize, Serializer};

use crate::{
    strkey::{self, VersionByte},
    AccountId,
};

/// The weight given to an account's own key when the account is created.
pub const DEFAULT_SIGNER_WEIGHT: u32 = 1;

/// The key of a signer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "datasize", derive(DataSize))]
pub enum SignerKey {
    /// An ed25519 public key.
    Ed25519([u8; 32]),
    /// The hash of a transaction authorized in advance.
    PreAuthTx([u8; 32]),
    /// The hash of a preimage which must be revealed to sign.
    HashX([u8; 32]),
}

impl SignerKey {
    /// Returns the strkey form of this signer key.
    pub fn address(&self) -> String {
        match self {
            SignerKey::Ed25519(key) => strkey::encode(VersionByte::AccountId, key),
            SignerKey::PreAuthTx(hash) => strkey::encode(VersionByte::PreAuthTx, hash),
            SignerKey::HashX(hash) => strkey::encode(VersionByte::HashX, hash),
        }
    }

    /// Returns a random ed25519 `SignerKey`.
    #[cfg(any(feature = "testing", test))]
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        SignerKey::Ed25519(rng.gen())
    }
}

impl From<AccountId> for SignerKey {
    fn from(account_id: AccountId) -> Self {
        SignerKey::Ed25519(account_id.value())
    }
}

impl Display for SignerKey {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        formatter.write_str(&self.address())
    }
}

impl FromStr for SignerKey {
    type Err = strkey::Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.chars().next() {
            Some('T') => strkey::decode_32(VersionByte::PreAuthTx, input).map(SignerKey::PreAuthTx),
            Some('X') => strkey::decode_32(VersionByte::HashX, input).map(SignerKey::HashX),
            _ => strkey::decode_32(VersionByte::AccountId, input).map(SignerKey::Ed25519),
        }
    }
}

impl Serialize for SignerKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.address())
    }
}

impl<'de> Deserialize<'de> for SignerKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let address = String::deserialize(deserializer)?;
        SignerKey::from_str(&address).map_err(SerdeError::custom)
    }
}

/// A signer of an account, with the weight its signature carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "datasize", derive(DataSize))]
#[serde(deny_unknown_fields)]
pub struct Signer {
    /// The signer's key.
    pub key: SignerKey,
    /// The signer's weight.
    pub weight: u32,
}

impl Signer {
    /// Constructs a new `Signer`.
    pub fn new(key: SignerKey, weight: u32) -> Self {
        Signer { key, weight }
    }
}
