//! Governance updates of bank contract activation
//!
//! Voting happens elsewhere. A passed proposal hands its contract list to
//! [`Keeper::handle_proposal`], which validates it and flips the `active`
//! flag of each listed contract.

use crate::contract::error::VfcError;
use crate::contract::keeper::Keeper;
use crate::contract::types::{
    ContractKind, ContractRecord, ACTION_UPDATE, ATTRIBUTE_KEY_ACTION, ATTRIBUTE_KEY_ADDRESS,
    ATTRIBUTE_KEY_TYPE, EVENT_TYPE_VFC,
};
use crate::core::Address;
use crate::host::{AccountKeeper, BankKeeper, EvmHost};
use crate::storage::{Context, Event};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

pub const PROPOSAL_TYPE_UPDATE_BANK_CONTRACTS: &str = "UpdateVirtualFrontierBankContracts";

pub const MAX_TITLE_LENGTH: usize = 140;
pub const MAX_DESCRIPTION_LENGTH: usize = 10_000;

/// New activation state of one contract
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivationUpdate {
    pub contract_address: String,
    pub active: bool,
}

impl ActivationUpdate {
    pub fn new(contract_address: &Address, active: bool) -> Self {
        Self {
            contract_address: contract_address.to_string(),
            active,
        }
    }

    pub fn validate_basic(&self) -> Result<(), VfcError> {
        if self.contract_address.is_empty() {
            return Err(VfcError::InvalidRequest("contract address cannot be empty".to_string()));
        }
        Address::parse_canonical(&self.contract_address)?;
        Ok(())
    }
}

/// Proposal to change the activation of existing bank contracts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateVirtualFrontierBankContractsProposal {
    pub title: String,
    pub description: String,
    pub contracts: Vec<ActivationUpdate>,
}

impl UpdateVirtualFrontierBankContractsProposal {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        contracts: Vec<ActivationUpdate>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            contracts,
        }
    }

    pub fn proposal_type(&self) -> &'static str {
        PROPOSAL_TYPE_UPDATE_BANK_CONTRACTS
    }

    /// Stateless checks
    pub fn validate_basic(&self) -> Result<(), VfcError> {
        if self.title.trim().is_empty() {
            return Err(VfcError::InvalidRequest("proposal title cannot be blank".to_string()));
        }
        if self.title.len() > MAX_TITLE_LENGTH {
            return Err(VfcError::InvalidRequest(format!(
                "proposal title is longer than max length of {}",
                MAX_TITLE_LENGTH
            )));
        }
        if self.description.trim().is_empty() {
            return Err(VfcError::InvalidRequest(
                "proposal description cannot be blank".to_string(),
            ));
        }
        if self.description.len() > MAX_DESCRIPTION_LENGTH {
            return Err(VfcError::InvalidRequest(format!(
                "proposal description is longer than max length of {}",
                MAX_DESCRIPTION_LENGTH
            )));
        }

        if self.contracts.is_empty() {
            return Err(VfcError::InvalidRequest("contracts cannot be empty".to_string()));
        }
        let mut seen = HashSet::new();
        for update in &self.contracts {
            update.validate_basic()?;
            if !seen.insert(update.contract_address.as_str()) {
                return Err(VfcError::DuplicateUpdate(update.contract_address.clone()));
            }
        }
        Ok(())
    }
}

impl<B, A, E> Keeper<B, A, E>
where
    B: BankKeeper,
    A: AccountKeeper,
    E: EvmHost,
{
    /// Set the `active` flag of existing bank contracts.
    ///
    /// Every entry is checked before anything is written. Returns the
    /// updated addresses in input order.
    pub fn update_activation(
        &self,
        ctx: &mut Context,
        updates: &[ActivationUpdate],
    ) -> Result<Vec<Address>, VfcError> {
        if updates.is_empty() {
            return Err(VfcError::InvalidRequest("no contracts to update".to_string()));
        }

        let mut seen = HashSet::new();
        let mut pending: Vec<(Address, ContractRecord)> = Vec::with_capacity(updates.len());
        for update in updates {
            update.validate_basic()?;
            let address = Address::parse_canonical(&update.contract_address)?;
            if !seen.insert(address) {
                return Err(VfcError::DuplicateUpdate(address.to_string()));
            }

            let mut record = self
                .registry
                .get(ctx, &address)?
                .ok_or_else(|| VfcError::ContractNotFound(address.to_string()))?;
            if record.kind != ContractKind::Bank {
                return Err(VfcError::NotBankContract(address.to_string()));
            }

            // re-encode so only a well-formed payload goes back in
            let metadata = record.bank_metadata()?;
            record.metadata = metadata.encode()?;
            record.active = update.active;
            pending.push((address, record));
        }

        let mut updated = Vec::with_capacity(pending.len());
        for (address, record) in pending {
            self.registry.put(ctx, &address, &record)?;
            ctx.emit_event(
                Event::new(EVENT_TYPE_VFC)
                    .with_attribute(ATTRIBUTE_KEY_ACTION, ACTION_UPDATE)
                    .with_attribute(ATTRIBUTE_KEY_TYPE, record.type_name())
                    .with_attribute(ATTRIBUTE_KEY_ADDRESS, record.address.clone()),
            );
            log::info!(
                "virtual frontier contract {} is now {}",
                address,
                if record.active { "active" } else { "inactive" }
            );
            updated.push(address);
        }
        Ok(updated)
    }

    /// Apply a passed proposal atomically
    pub fn handle_proposal(
        &self,
        ctx: &mut Context,
        proposal: &UpdateVirtualFrontierBankContractsProposal,
    ) -> Result<Vec<Address>, VfcError> {
        proposal.validate_basic()?;
        ctx.branch(|child| self.update_activation(child, &proposal.contracts))
            .map_err(|e| {
                log::warn!("proposal {:?} rejected: {}", proposal.title, e);
                e
            })
    }
}
