//! The checksummed base32 "strkey" encoding used for account ids and signer keys.
//!
//! A strkey is `version byte || payload || checksum`, where the checksum is the little-endian
//! CRC16-XModem of the version byte and payload, rendered as unpadded upper-case RFC 4648 base32.

use std::fmt::{self, Display, Formatter};

#[cfg(feature = "datasize")]
use datasize::DataSize;
use thiserror::Error;

const ALPHABET: &[u8; 32] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";
const CHECKSUM_LENGTH: usize = 2;

/// The leading byte of a strkey, identifying what kind of key it holds.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "datasize", derive(DataSize))]
pub enum VersionByte {
    /// An ed25519 public key, rendered with a leading `G`.
    AccountId = 6 << 3,
    /// An ed25519 secret seed, rendered with a leading `S`.
    Seed = 18 << 3,
    /// A pre-authorized transaction hash, rendered with a leading `T`.
    PreAuthTx = 19 << 3,
    /// The hash of an arbitrary preimage, rendered with a leading `X`.
    HashX = 23 << 3,
}

impl VersionByte {
    fn from_u8(value: u8) -> Option<Self> {
        match value {
            v if v == VersionByte::AccountId as u8 => Some(VersionByte::AccountId),
            v if v == VersionByte::Seed as u8 => Some(VersionByte::Seed),
            v if v == VersionByte::PreAuthTx as u8 => Some(VersionByte::PreAuthTx),
            v if v == VersionByte::HashX as u8 => Some(VersionByte::HashX),
            _ => None,
        }
    }
}

impl Display for VersionByte {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        match self {
            VersionByte::AccountId => write!(formatter, "account id"),
            VersionByte::Seed => write!(formatter, "seed"),
            VersionByte::PreAuthTx => write!(formatter, "pre-auth tx"),
            VersionByte::HashX => write!(formatter, "hash-x"),
        }
    }
}

/// Errors returned when decoding a strkey.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The decoded data is too short to hold a version byte and a checksum.
    #[error("strkey is too short: {0} decoded bytes")]
    TooShort(usize),
    /// The input holds a character outside the upper-case base32 alphabet.
    #[error("invalid base32 character {character:?} at position {position}")]
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Its position in the input.
        position: usize,
    },
    /// The input length cannot be produced by unpadded base32, or its trailing bits are not zero.
    #[error("strkey is not canonical base32")]
    NonCanonical,
    /// The version byte is not the expected one.
    #[error("expected a {expected} strkey, got version byte {actual:#04x}")]
    InvalidVersionByte {
        /// The version byte the caller asked for.
        expected: VersionByte,
        /// The version byte found in the input.
        actual: u8,
    },
    /// The payload length is not the one the caller expects.
    #[error("expected a {expected} byte payload, got {actual}")]
    InvalidPayloadLength {
        /// The expected number of bytes.
        expected: usize,
        /// The number of bytes found.
        actual: usize,
    },
    /// The embedded checksum does not match the data.
    #[error("strkey checksum mismatch: expected {expected:#06x}, got {actual:#06x}")]
    InvalidChecksum {
        /// Checksum computed over the decoded data.
        expected: u16,
        /// Checksum carried by the input.
        actual: u16,
    },
}

/// Encodes `payload` as a strkey with the given version byte.
pub fn encode(version: VersionByte, payload: &[u8]) -> String {
    let mut raw = Vec::with_capacity(1 + payload.len() + CHECKSUM_LENGTH);
    raw.push(version as u8);
    raw.extend_from_slice(payload);
    let checksum = crc16_xmodem(&raw);
    raw.extend_from_slice(&checksum.to_le_bytes());
    base32_encode(&raw)
}

/// Decodes a strkey, checking it carries `version` and a valid checksum, and returns the payload.
pub fn decode(version: VersionByte, input: &str) -> Result<Vec<u8>, Error> {
    let raw = base32_decode(input)?;
    if raw.len() < 1 + CHECKSUM_LENGTH {
        return Err(Error::TooShort(raw.len()));
    }

    let (data, checksum_bytes) = raw.split_at(raw.len() - CHECKSUM_LENGTH);
    if VersionByte::from_u8(data[0]) != Some(version) {
        return Err(Error::InvalidVersionByte {
            expected: version,
            actual: data[0],
        });
    }

    let expected = crc16_xmodem(data);
    let actual = u16::from_le_bytes([checksum_bytes[0], checksum_bytes[1]]);
    if expected != actual {
        return Err(Error::InvalidChecksum { expected, actual });
    }

    Ok(data[1..].to_vec())
}

/// Decodes a strkey whose payload must be exactly 32 bytes.
pub fn decode_32(version: VersionByte, input: &str) -> Result<[u8; 32], Error> {
    let payload = decode(version, input)?;
    let actual = payload.len();
    <[u8; 32]>::try_from(payload.as_slice()).map_err(|_| Error::InvalidPayloadLength {
        expected: 32,
        actual,
    })
}

fn crc16_xmodem(data: &[u8]) -> u16 {
    let mut crc: u16 = 0;
    for byte in data {
        crc ^= u16::from(*byte) << 8;
        for _ in 0..8 {
            crc = if crc & 0x8000 != 0 {
                (crc << 1) ^ 0x1021
            } else {
                crc << 1
            };
        }
    }
    crc
}

fn base32_encode(data: &[u8]) -> String {
    let mut output = String::with_capacity((data.len() * 8 + 4) / 5);
    let mut buffer: u32 = 0;
    let mut bits = 0;
    for byte in data {
        buffer = (buffer << 8) | u32::from(*byte);
        bits += 8;
        while bits >= 5 {
            bits -= 5;
            output.push(ALPHABET[((buffer >> bits) & 0x1f) as usize] as char);
        }
    }
    if bits > 0 {
        output.push(ALPHABET[((buffer << (5 - bits)) & 0x1f) as usize] as char);
    }
    output
}

fn base32_decode(input: &str) -> Result<Vec<u8>, Error> {
    // Lengths whose last group carries a partial, meaningless byte are never produced.
    if matches!(input.len() % 8, 1 | 3 | 6) {
        return Err(Error::NonCanonical);
    }

    let mut output = Vec::with_capacity(input.len() * 5 / 8);
    let mut buffer: u32 = 0;
    let mut bits = 0;
    for (position, character) in input.chars().enumerate() {
        let value = match character {
            'A'..='Z' => character as u32 - 'A' as u32,
            '2'..='7' => character as u32 - '2' as u32 + 26,
            _ => return Err(Error::InvalidCharacter { character, position }),
        };
        buffer = (buffer << 5) | value;
        bits += 5;
        if bits >= 8 {
            bits -= 8;
            output.push((buffer >> bits) as u8);
            buffer &= (1 << bits) - 1;
        }
    }
    if buffer != 0 {
        return Err(Error::NonCanonical);
    }
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADDRESS: &str = "GCQZP3IU7XU6EJ63JZXKCQOYT2RNXN3HB5CNHENNUEUHSMA4VUJJJSEN";
    const KEY: [u8; 32] = [
        0xa1, 0x97, 0xed, 0x14, 0xfd, 0xe9, 0xe2, 0x27, 0xdb, 0x4e, 0x6e, 0xa1, 0x41, 0xd8, 0x9e,
        0xa2, 0xdb, 0xb7, 0x67, 0x0f, 0x44, 0xd3, 0x91, 0xad, 0xa1, 0x28, 0x79, 0x30, 0x1c, 0xad,
        0x12, 0x94,
    ];

    #[test]
    fn should_encode_account_id() {
        assert_eq!(encode(VersionByte::AccountId, &KEY), ADDRESS);
    }

    #[test]
    fn should_decode_account_id() {
        assert_eq!(decode_32(VersionByte::AccountId, ADDRESS).unwrap(), KEY);
    }

    #[test]
    fn should_encode_other_version_bytes() {
        assert_eq!(
            encode(VersionByte::PreAuthTx, &[1; 32]),
            "TAAQCAIBAEAQCAIBAEAQCAIBAEAQCAIBAEAQCAIBAEAQCAIBAEAQCENW"
        );
        assert_eq!(
            encode(VersionByte::HashX, &[2; 32]),
            "XABAEAQCAIBAEAQCAIBAEAQCAIBAEAQCAIBAEAQCAIBAEAQCAIBAEQAI"
        );
    }

    #[test]
    fn should_reject_wrong_version_byte() {
        let error = decode(VersionByte::HashX, ADDRESS).unwrap_err();
        assert_eq!(
            error,
            Error::InvalidVersionByte {
                expected: VersionByte::HashX,
                actual: VersionByte::AccountId as u8,
            }
        );
    }

    #[test]
    fn should_reject_bad_checksum() {
        let mut corrupted = ADDRESS.to_string();
        corrupted.replace_range(10..11, "A");
        assert!(matches!(
            decode(VersionByte::AccountId, &corrupted),
            Err(Error::InvalidChecksum { .. })
        ));
    }

    #[test]
    fn should_reject_lower_case_and_invalid_characters() {
        assert!(matches!(
            decode(VersionByte::AccountId, &ADDRESS.to_lowercase()),
            Err(Error::InvalidCharacter { position: 0, .. })
        ));
        assert!(matches!(
            decode(VersionByte::AccountId, "G0"),
            Err(Error::InvalidCharacter { position: 1, .. })
        ));
    }

    #[test]
    fn should_reject_truncated_input() {
        assert!(decode(VersionByte::AccountId, &ADDRESS[..55]).is_err());
        assert!(matches!(
            decode(VersionByte::AccountId, ""),
            Err(Error::TooShort(0))
        ));
    }
}
