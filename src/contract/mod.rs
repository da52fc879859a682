//! Virtual frontier contract module
//!
//! Exposes ledger denoms to EVM callers as ERC-20 tokens without running
//! any contract code: each bank contract is a registry entry plus a fixed
//! pseudo-bytecode account, and calls to it are answered natively.
//!
//! # Overview
//!
//! This module implements:
//! - The contract registry and the denom-to-address index
//! - Denom metadata to token view derivation
//! - Deployment at genesis and at runtime, singly or in batches
//! - ERC-20 call dispatch with fixed gas costs
//! - Governance updates of the `active` flag
//!
//! # Example
//!
//! ```rust
//! use virtual_frontier::contract::{Keeper, VfcConfig};
//! use virtual_frontier::core::Address;
//! use virtual_frontier::host::{StoreAccounts, StoreBank, StoreEvm};
//! use virtual_frontier::storage::{Context, MemStore};
//! use num_bigint::BigInt;
//!
//! let keeper = Keeper::new(
//!     StoreBank::new(),
//!     StoreAccounts::new(),
//!     StoreEvm::new(),
//!     VfcConfig::default(),
//! );
//!
//! let mut store = MemStore::new();
//! let mut ctx = Context::new(&mut store, 1);
//! assert!(keeper.contracts(&ctx).unwrap().is_empty());
//!
//! // calls to other addresses are left to the EVM
//! let receipt = keeper
//!     .apply_call(&mut ctx, &Address::new([1; 20]), &Address::new([2; 20]), &[], 21_000, &BigInt::from(0))
//!     .unwrap();
//! assert!(receipt.is_none());
//! ```

pub mod abi;
pub mod compiled;
pub mod denom;
pub mod deploy;
pub mod dispatch;
pub mod error;
pub mod governance;
pub mod keeper;
pub mod method;
pub mod outcome;
pub mod registry;
pub mod types;

pub use abi::AbiError;
pub use compiled::{creation_bytecode, vfbc_code_hash, VFBC_RUNTIME_CODE};
pub use denom::{derive_token_view, DerivedTokenView};
pub use deploy::{DeployerNonce, DeploymentPlan, DeploymentStrategy, GenesisDeployment, RuntimeDeployment};
pub use error::{ErrorKind, VfcError};
pub use governance::{ActivationUpdate, UpdateVirtualFrontierBankContractsProposal};
pub use keeper::{Keeper, VfcConfig};
pub use method::{BankMethod, OpGas};
pub use outcome::{CallOutcome, CallReceipt};
pub use registry::ContractRegistry;
pub use types::{BankContractMetadata, ContractKind, ContractRecord};
