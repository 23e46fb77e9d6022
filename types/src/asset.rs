//! Native and issued (credit) assets.

use std::fmt::{self, Display, Formatter};

#[cfg(feature = "datasize")]
use datasize::DataSize;
#[cfg(any(feature = "testing", test))]
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::AccountId;

const MAX_ALPHANUM4_CODE_LENGTH: usize = 4;
const MAX_ALPHANUM12_CODE_LENGTH: usize = 12;

/// The kind of an [`Asset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "datasize", derive(DataSize))]
#[serde(rename_all = "snake_case")]
pub enum AssetType {
    /// The protocol's base currency.
    Native,
    /// An issued asset with a code of one to four characters.
    CreditAlphanum4,
    /// An issued asset with a code of five to twelve characters.
    CreditAlphanum12,
}

impl AssetType {
    /// Returns the canonical name of the asset type.
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetType::Native => "native",
            AssetType::CreditAlphanum4 => "credit_alphanum4",
            AssetType::CreditAlphanum12 => "credit_alphanum12",
        }
    }
}

impl Display for AssetType {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Errors returned when constructing a credit [`Asset`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssetError {
    /// The asset code is empty or longer than twelve characters.
    #[error("asset code {0:?} must be between 1 and 12 characters long")]
    InvalidCodeLength(String),
    /// The asset code holds a character which is not an ASCII letter or digit.
    #[error("asset code {0:?} must be ASCII alphanumeric")]
    InvalidCodeCharacter(String),
}

/// An asset: either the native currency, or a credit identified by its code and issuer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "datasize", derive(DataSize))]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Asset {
    /// The protocol's base currency.
    Native,
    /// A credit asset with a short code.
    CreditAlphanum4 {
        /// The asset code.
        code: String,
        /// The issuing account.
        issuer: AccountId,
    },
    /// A credit asset with a long code.
    CreditAlphanum12 {
        /// The asset code.
        code: String,
        /// The issuing account.
        issuer: AccountId,
    },
}

impl Asset {
    /// Constructs a credit asset, choosing the alphanum4 or alphanum12 form from the code length.
    pub fn credit(code: &str, issuer: AccountId) -> Result<Self, AssetError> {
        if !code.bytes().all(|byte| byte.is_ascii_alphanumeric()) {
            return Err(AssetError::InvalidCodeCharacter(code.to_string()));
        }
        match code.len() {
            1..=MAX_ALPHANUM4_CODE_LENGTH => Ok(Asset::CreditAlphanum4 {
                code: code.to_string(),
                issuer,
            }),
            5..=MAX_ALPHANUM12_CODE_LENGTH => Ok(Asset::CreditAlphanum12 {
                code: code.to_string(),
                issuer,
            }),
            _ => Err(AssetError::InvalidCodeLength(code.to_string())),
        }
    }

    /// Returns the type of this asset.
    pub fn asset_type(&self) -> AssetType {
        match self {
            Asset::Native => AssetType::Native,
            Asset::CreditAlphanum4 { .. } => AssetType::CreditAlphanum4,
            Asset::CreditAlphanum12 { .. } => AssetType::CreditAlphanum12,
        }
    }

    /// Returns the asset code, or `None` for the native asset.
    pub fn code(&self) -> Option<&str> {
        match self {
            Asset::Native => None,
            Asset::CreditAlphanum4 { code, .. } | Asset::CreditAlphanum12 { code, .. } => {
                Some(code)
            }
        }
    }

    /// Returns the issuing account, or `None` for the native asset.
    pub fn issuer(&self) -> Option<&AccountId> {
        match self {
            Asset::Native => None,
            Asset::CreditAlphanum4 { issuer, .. } | Asset::CreditAlphanum12 { issuer, .. } => {
                Some(issuer)
            }
        }
    }

    /// Returns a random `Asset`.
    #[cfg(any(feature = "testing", test))]
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        match rng.gen_range(0..3) {
            0 => Asset::Native,
            1 => {
                let length = rng.gen_range(1..=MAX_ALPHANUM4_CODE_LENGTH);
                Asset::CreditAlphanum4 {
                    code: random_code(rng, length),
                    issuer: AccountId::random(rng),
                }
            }
            _ => {
                let length = rng.gen_range(5..=MAX_ALPHANUM12_CODE_LENGTH);
                Asset::CreditAlphanum12 {
                    code: random_code(rng, length),
                    issuer: AccountId::random(rng),
                }
            }
        }
    }
}

#[cfg(any(feature = "testing", test))]
fn random_code<R: Rng + ?Sized>(rng: &mut R, length: usize) -> String {
    const CHARACTERS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
    (0..length)
        .map(|_| CHARACTERS[rng.gen_range(0..CHARACTERS.len())] as char)
        .collect()
}

impl Display for Asset {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        match self {
            Asset::Native => write!(formatter, "native"),
            Asset::CreditAlphanum4 { code, issuer } | Asset::CreditAlphanum12 { code, issuer } => {
                write!(formatter, "{}:{}", code, issuer)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    const ISSUER: &str = "GAXMF43TGZHW3QN3REOUA2U5PW5BTARXGGYJ3JIFHW3YT6QRKRL3CPPU";

    #[test]
    fn should_pick_credit_form_from_code_length() {
        let issuer = AccountId::from_str(ISSUER).unwrap();
        let eur = Asset::credit("EUR", issuer).unwrap();
        assert_eq!(eur.asset_type(), AssetType::CreditAlphanum4);
        assert_eq!(eur.code(), Some("EUR"));
        assert_eq!(eur.issuer(), Some(&issuer));

        let long = Asset::credit("EURODOLLAR", issuer).unwrap();
        assert_eq!(long.asset_type(), AssetType::CreditAlphanum12);
    }

    #[test]
    fn should_reject_invalid_codes() {
        let issuer = AccountId::from_str(ISSUER).unwrap();
        assert_eq!(
            Asset::credit("", issuer),
            Err(AssetError::InvalidCodeLength(String::new()))
        );
        assert!(matches!(
            Asset::credit("ABCDEFGHIJKLM", issuer),
            Err(AssetError::InvalidCodeLength(_))
        ));
        assert!(matches!(
            Asset::credit("EU-R", issuer),
            Err(AssetError::InvalidCodeCharacter(_))
        ));
    }

    #[test]
    fn native_has_no_code_or_issuer() {
        assert_eq!(Asset::Native.asset_type().as_str(), "native");
        assert_eq!(Asset::Native.code(), None);
        assert_eq!(Asset::Native.issuer(), None);
    }

    #[test]
    fn should_deserialize_tagged_json() {
        let json = format!(
            r#"{{"type":"credit_alphanum4","code":"EUR","issuer":"{}"}}"#,
            ISSUER
        );
        let asset: Asset = serde_json::from_str(&json).unwrap();
        assert_eq!(asset.to_string(), format!("EUR:{}", ISSUER));

        let native: Asset = serde_json::from_str(r#"{"type":"native"}"#).unwrap();
        assert_eq!(native, Asset::Native);
    }
}
