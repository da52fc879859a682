//! Persisted contract records
//!
//! - `ContractRecord`: one registry entry, keyed by address
//! - `BankContractMetadata`: the kind-specific payload of bank contracts
//! - Event type and attribute names

use crate::contract::error::VfcError;
use crate::core::Address;
use serde::{Deserialize, Serialize};

/// Event type of registry changes
pub const EVENT_TYPE_VFC: &str = "virtual_frontier_contract";
pub const ATTRIBUTE_KEY_ACTION: &str = "action";
pub const ATTRIBUTE_KEY_TYPE: &str = "type";
pub const ATTRIBUTE_KEY_ADDRESS: &str = "address";
pub const ACTION_DEPLOY: &str = "deploy";
pub const ACTION_UPDATE: &str = "update";

/// Kind of a virtual frontier contract
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContractKind {
    Unspecified,
    Bank,
}

impl ContractKind {
    /// Human-readable name used in events
    pub fn name(&self) -> &'static str {
        match self {
            ContractKind::Bank => "bank",
            ContractKind::Unspecified => "",
        }
    }
}

/// Metadata of a bank contract
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankContractMetadata {
    pub min_denom: String,
}

impl BankContractMetadata {
    pub fn new(min_denom: impl Into<String>) -> Self {
        Self {
            min_denom: min_denom.into(),
        }
    }

    pub fn validate_basic(&self) -> Result<(), VfcError> {
        if self.min_denom.is_empty() {
            return Err(VfcError::InvalidRecord("min denom cannot be empty".to_string()));
        }
        Ok(())
    }

    pub fn encode(&self) -> Result<Vec<u8>, VfcError> {
        Ok(serde_json::to_vec(self)?)
    }

    pub fn decode(bz: &[u8]) -> Result<Self, VfcError> {
        Ok(serde_json::from_slice(bz)?)
    }
}

/// A registered virtual frontier contract
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractRecord {
    /// Canonical lowercase `0x` hex
    pub address: String,
    pub active: bool,
    pub kind: ContractKind,
    /// Kind-specific payload
    pub metadata: Vec<u8>,
}

impl ContractRecord {
    /// New bank contract record
    pub fn bank(address: &Address, active: bool, metadata: &BankContractMetadata) -> Result<Self, VfcError> {
        Ok(Self {
            address: address.to_string(),
            active,
            kind: ContractKind::Bank,
            metadata: metadata.encode()?,
        })
    }

    /// Structural checks, independent of any state
    pub fn validate_basic(&self) -> Result<(), VfcError> {
        let address = Address::parse_canonical(&self.address)?;
        if address.is_zero() {
            return Err(VfcError::InvalidRecord("address cannot be nil address".to_string()));
        }
        if self.metadata.is_empty() {
            return Err(VfcError::InvalidRecord("metadata cannot be empty".to_string()));
        }

        match self.kind {
            ContractKind::Bank => {
                let metadata = BankContractMetadata::decode(&self.metadata).map_err(|e| {
                    VfcError::InvalidRecord(format!("failed to decode bank contract metadata: {}", e))
                })?;
                metadata.validate_basic()
            }
            ContractKind::Unspecified => {
                Err(VfcError::InvalidRecord("type must be specified".to_string()))
            }
        }
    }

    /// Address of the record; records are validated before storage
    pub fn contract_address(&self) -> Result<Address, VfcError> {
        Ok(self.address.parse()?)
    }

    pub fn type_name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn bank_metadata(&self) -> Result<BankContractMetadata, VfcError> {
        if self.kind != ContractKind::Bank {
            return Err(VfcError::NotBankContract(self.address.clone()));
        }
        BankContractMetadata::decode(&self.metadata)
    }
}
