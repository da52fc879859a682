//! 20-byte addresses
//!
//! Addresses are shared between the ledger and the EVM: the same 20 bytes
//! identify a bank account and an EVM account. The canonical string form is
//! lowercase hex with a `0x` prefix.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of bytes in an address
pub const ADDRESS_LENGTH: usize = 20;

/// Address parsing errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressError {
    #[error("address must start with 0x: {0}")]
    MissingPrefix(String),
    #[error("malformed address format: {0}")]
    Malformed(String),
    #[error("address must be in lowercase: {0}")]
    NotLowercase(String),
}

/// A 20-byte account or contract address
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Address([u8; ADDRESS_LENGTH]);

impl Address {
    /// The all-zero address
    pub const ZERO: Address = Address([0u8; ADDRESS_LENGTH]);

    pub const fn new(bytes: [u8; ADDRESS_LENGTH]) -> Self {
        Self(bytes)
    }

    /// Build an address from the low 20 bytes of `data`, left-padding
    /// shorter input with zeros.
    pub fn from_slice_lossy(data: &[u8]) -> Self {
        let mut bytes = [0u8; ADDRESS_LENGTH];
        if data.len() >= ADDRESS_LENGTH {
            bytes.copy_from_slice(&data[data.len() - ADDRESS_LENGTH..]);
        } else {
            bytes[ADDRESS_LENGTH - data.len()..].copy_from_slice(data);
        }
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; ADDRESS_LENGTH] {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; ADDRESS_LENGTH]
    }

    /// Left-padded 32-byte word, as used in ABI slots and log topics
    pub fn to_word(&self) -> [u8; 32] {
        let mut word = [0u8; 32];
        word[12..].copy_from_slice(&self.0);
        word
    }

    /// Parse only the canonical form: `0x` + 40 lowercase hex characters.
    pub fn parse_canonical(s: &str) -> Result<Self, AddressError> {
        if !s.starts_with("0x") {
            return Err(AddressError::MissingPrefix(s.to_string()));
        }
        if s != s.to_lowercase() {
            return Err(AddressError::NotLowercase(s.to_string()));
        }
        s.parse()
    }
}

impl FromStr for Address {
    type Err = AddressError;

    /// Accepts hex with or without `0x`, in any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);
        if digits.len() != ADDRESS_LENGTH * 2 {
            return Err(AddressError::Malformed(s.to_string()));
        }
        let decoded = hex::decode(digits).map_err(|_| AddressError::Malformed(s.to_string()))?;
        let mut bytes = [0u8; ADDRESS_LENGTH];
        bytes.copy_from_slice(&decoded);
        Ok(Self(bytes))
    }
}

impl From<alloy_primitives::Address> for Address {
    fn from(address: alloy_primitives::Address) -> Self {
        Self(address.0 .0)
    }
}

impl From<Address> for alloy_primitives::Address {
    fn from(address: Address) -> Self {
        alloy_primitives::Address::new(address.0)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self)
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
