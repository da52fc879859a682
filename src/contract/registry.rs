//! Contract registry
//!
//! Two namespaces in the shared store:
//! - `0x30 | address` → contract record
//! - `0x31 | sha256(denom)` → address; written once per denom

use crate::contract::error::VfcError;
use crate::contract::types::ContractRecord;
use crate::core::Address;
use crate::crypto::sha256;
use crate::storage::Context;

const CONTRACT_PREFIX: u8 = 0x30;
const DENOM_PREFIX: u8 = 0x31;

fn contract_key(address: &Address) -> Vec<u8> {
    let mut key = vec![CONTRACT_PREFIX];
    key.extend_from_slice(address.as_bytes());
    key
}

fn denom_key(denom: &str) -> Vec<u8> {
    let mut key = vec![DENOM_PREFIX];
    key.extend(sha256(denom.as_bytes()));
    key
}

/// Registry of virtual frontier contracts
#[derive(Debug, Clone, Copy, Default)]
pub struct ContractRegistry;

impl ContractRegistry {
    pub fn new() -> Self {
        Self
    }

    pub fn is_registered(&self, ctx: &Context, address: &Address) -> bool {
        ctx.store().has(&contract_key(address))
    }

    pub fn get(&self, ctx: &Context, address: &Address) -> Result<Option<ContractRecord>, VfcError> {
        match ctx.store().get(&contract_key(address)) {
            Some(bz) => Ok(Some(serde_json::from_slice(&bz)?)),
            None => Ok(None),
        }
    }

    /// Store a record under `address` after validating it
    pub fn put(&self, ctx: &mut Context, address: &Address, record: &ContractRecord) -> Result<(), VfcError> {
        record.validate_basic()?;
        if record.address != address.to_string() {
            return Err(VfcError::InvalidRecord(format!(
                "record address {} does not match key {}",
                record.address, address
            )));
        }
        let bz = serde_json::to_vec(record)?;
        ctx.store_mut().set(&contract_key(address), bz);
        Ok(())
    }

    pub fn has_denom_mapping(&self, ctx: &Context, denom: &str) -> bool {
        ctx.store().has(&denom_key(denom))
    }

    pub fn address_for_denom(&self, ctx: &Context, denom: &str) -> Option<Address> {
        ctx.store()
            .get(&denom_key(denom))
            .map(|bz| Address::from_slice_lossy(&bz))
    }

    /// Map `denom` to `address`; an existing mapping is never overwritten
    pub fn register_denom_mapping(&self, ctx: &mut Context, denom: &str, address: &Address) -> Result<(), VfcError> {
        if let Some(existing) = self.address_for_denom(ctx, denom) {
            return Err(VfcError::DenomAlreadyMapped {
                denom: denom.to_string(),
                existing: existing.to_string(),
            });
        }
        ctx.store_mut()
            .set(&denom_key(denom), address.as_bytes().to_vec());
        Ok(())
    }

    /// Every record, in address order
    pub fn all(&self, ctx: &Context) -> Result<Vec<ContractRecord>, VfcError> {
        ctx.store()
            .prefix_scan(&[CONTRACT_PREFIX])
            .into_iter()
            .map(|(_, bz)| Ok(serde_json::from_slice(&bz)?))
            .collect()
    }
}
