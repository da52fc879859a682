//! Virtual Frontier: ledger-native tokens behind an ERC-20 call surface
//!
//! This crate provides the bank contract subsystem of an EVM-enabled chain:
//! - A registry of virtual frontier contracts with a denom index
//! - Bank contract deployment at genesis and at block start
//! - Native dispatch of ERC-20 calls with fixed gas costs
//! - Governance updates of contract activation
//! - Branchable key-value state shared with the ledger, account and EVM
//!   collaborators
//! - JSON snapshot persistence for the `vfc` sandbox
//!
//! # Example
//!
//! ```rust
//! use virtual_frontier::contract::{BankMethod, CallOutcome};
//!
//! let input = BankMethod::Decimals.selector();
//! assert_eq!(BankMethod::from_input(&input), Some(BankMethod::Decimals));
//!
//! let receipt = CallOutcome::revert("not supported method", 100).settle(5_000);
//! assert!(receipt.reverted);
//! assert_eq!(receipt.gas_left, 4_900);
//! ```

pub mod cli;
pub mod contract;
pub mod core;
pub mod crypto;
pub mod host;
pub mod storage;

#[cfg(test)]
mod testutil;

// Re-export commonly used types
pub use contract::{
    CallOutcome, CallReceipt, ContractRecord, ErrorKind, Keeper, VfcConfig, VfcError,
};
pub use core::{Address, Coin, DenomMetadata};
pub use host::{AccountKeeper, BankKeeper, EvmHost};
pub use storage::{Context, MemStore, Storage};
