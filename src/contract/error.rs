//! Virtual frontier contract errors

use crate::contract::abi::AbiError;
use crate::core::{AddressError, CoinError};
use crate::host::HostError;
use thiserror::Error;

/// Broad classes of failure, used by callers to decide how to react
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed address, metadata or input; rejected before any state change
    Validation,
    /// Duplicate denom mapping or duplicate batch entry
    Conflict,
    /// Unknown address, denom or module account
    NotFound,
    /// A creation call failed or reverted
    Execution,
    /// A registry or ledger invariant is broken
    Internal,
}

/// Contract subsystem errors
#[derive(Error, Debug)]
pub enum VfcError {
    #[error("invalid contract record: {0}")]
    InvalidRecord(String),
    #[error("invalid address: {0}")]
    InvalidAddress(#[from] AddressError),
    #[error("decimals does not fit uint8: {0}")]
    DecimalsOverflow(u32),
    #[error("denom {denom} is not eligible for a bank contract: {reason}")]
    Ineligible { denom: String, reason: String },
    #[error("invalid request: {0}")]
    InvalidRequest(String),
    #[error("denom {denom} is already mapped to {existing}")]
    DenomAlreadyMapped { denom: String, existing: String },
    #[error("duplicated contract address {0} in update list")]
    DuplicateUpdate(String),
    #[error("address {0} is already in use")]
    AddressInUse(String),
    #[error("module account {0} not found")]
    ModuleAccountNotFound(String),
    #[error("virtual frontier contract {0} not found")]
    ContractNotFound(String),
    #[error("denom metadata of {0} not found")]
    DenomMetadataNotFound(String),
    #[error("contract {0} is not a bank contract")]
    NotBankContract(String),
    #[error("execution failed: {0}")]
    Execution(String),
    #[error("intrinsic gas too low: have {have}, want {want}")]
    IntrinsicGasTooLow { have: u64, want: u64 },
    #[error("codec error: {0}")]
    Codec(#[from] serde_json::Error),
    #[error("abi error: {0}")]
    Abi(#[from] AbiError),
    #[error("invalid coin: {0}")]
    Coin(#[from] CoinError),
    #[error("host error: {0}")]
    Host(#[from] HostError),
}

impl VfcError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            VfcError::InvalidRecord(_)
            | VfcError::InvalidAddress(_)
            | VfcError::DecimalsOverflow(_)
            | VfcError::Ineligible { .. }
            | VfcError::InvalidRequest(_)
            | VfcError::NotBankContract(_)
            | VfcError::IntrinsicGasTooLow { .. }
            | VfcError::Abi(_)
            | VfcError::Coin(_) => ErrorKind::Validation,
            VfcError::DenomAlreadyMapped { .. }
            | VfcError::DuplicateUpdate(_)
            | VfcError::AddressInUse(_) => ErrorKind::Conflict,
            VfcError::ModuleAccountNotFound(_)
            | VfcError::ContractNotFound(_)
            | VfcError::DenomMetadataNotFound(_) => ErrorKind::NotFound,
            VfcError::Execution(_) => ErrorKind::Execution,
            VfcError::Codec(_) | VfcError::Host(_) => ErrorKind::Internal,
        }
    }
}
