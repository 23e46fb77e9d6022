use std::{
    fmt::{self, Debug, Display, Formatter},
    str::FromStr,
};

#[cfg(feature = "datasize")]
use datasize::DataSize;
#[cfg(any(feature = "testing", test))]
use rand::Rng;
use serde::{de::Error as SerdeError, Deserialize, Deserializer, Serialize, Serializer};

use crate::strkey::{self, VersionByte};

/// The number of bytes in an account's public key.
pub const ACCOUNT_ID_LENGTH: usize = 32;

/// An account, identified by its ed25519 public key.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "datasize", derive(DataSize))]
pub struct AccountId([u8; ACCOUNT_ID_LENGTH]);

impl AccountId {
    /// Constructs a new `AccountId` from the raw public key.
    pub const fn new(key: [u8; ACCOUNT_ID_LENGTH]) -> Self {
        AccountId(key)
    }

    /// Returns the raw public key.
    pub fn value(&self) -> [u8; ACCOUNT_ID_LENGTH] {
        self.0
    }

    /// Returns the canonical `G...` address of this account.
    pub fn address(&self) -> String {
        strkey::encode(VersionByte::AccountId, &self.0)
    }

    /// Returns a random `AccountId`.
    #[cfg(any(feature = "testing", test))]
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        AccountId(rng.gen())
    }
}

impl Display for AccountId {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        write!(formatter, "{}", self.address())
    }
}

impl Debug for AccountId {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        write!(formatter, "AccountId({})", self.address())
    }
}

impl FromStr for AccountId {
    type Err = strkey::Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        strkey::decode_32(VersionByte::AccountId, input).map(AccountId)
    }
}

impl Serialize for AccountId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.address())
    }
}

impl<'de> Deserialize<'de> for AccountId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let address = String::deserialize(deserializer)?;
        AccountId::from_str(&address).map_err(SerdeError::custom)
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    #[test]
    fn should_parse_and_display_address() {
        let address = "GBRPYHIL2CI3FNQ4BXLFMNDLFJUNPU2HY3ZMFSHONUCEOASW7QC7OX2H";
        let account_id = AccountId::from_str(address).unwrap();
        assert_eq!(account_id.value()[..4], [0x62, 0xfc, 0x1d, 0x0b]);
        assert_eq!(account_id.to_string(), address);
    }

    #[test]
    fn should_reject_non_account_strkey() {
        let pre_auth = "TAAQCAIBAEAQCAIBAEAQCAIBAEAQCAIBAEAQCAIBAEAQCAIBAEAQCENW";
        assert!(matches!(
            AccountId::from_str(pre_auth),
            Err(strkey::Error::InvalidVersionByte { .. })
        ));
    }

    #[test]
    fn serde_roundtrip() {
        let rng = &mut StdRng::seed_from_u64(7);
        let account_id = AccountId::random(rng);
        let json = serde_json::to_string(&account_id).unwrap();
        assert_eq!(json, format!("\"{}\"", account_id.address()));
        let decoded: AccountId = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, account_id);
    }
}
