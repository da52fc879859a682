//! Core value types
//!
//! This module contains the fundamental building blocks shared by the
//! ledger collaborators and the virtual frontier contract subsystem:
//! - 20-byte account/contract addresses
//! - Coins and ledger denom metadata

pub mod address;
pub mod coin;

pub use address::{Address, AddressError, ADDRESS_LENGTH};
pub use coin::{validate_denom, Coin, CoinError, DenomMetadata, DenomUnit};
