//! Store-backed account registry
//!
//! Plain accounts and module accounts, each with a sequence number. Module
//! accounts live at `module_address(name)`.

use crate::core::Address;
use crate::crypto::module_address;
use crate::host::{AccountKeeper, HostError};
use crate::storage::Context;
use serde::{Deserialize, Serialize};

const ACCOUNT_PREFIX: u8 = 0x10;

fn account_key(address: &Address) -> Vec<u8> {
    let mut key = vec![ACCOUNT_PREFIX];
    key.extend_from_slice(address.as_bytes());
    key
}

/// A ledger account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub address: Address,
    pub sequence: u64,
    /// Set for module-owned accounts
    #[serde(default)]
    pub module_name: Option<String>,
}

impl Account {
    pub fn new(address: Address) -> Self {
        Self {
            address,
            sequence: 0,
            module_name: None,
        }
    }

    /// Module account at its derived address, sequence zero
    pub fn new_module(name: &str) -> Self {
        Self {
            address: module_address(name),
            sequence: 0,
            module_name: Some(name.to_string()),
        }
    }

    pub fn is_module(&self) -> bool {
        self.module_name.is_some()
    }
}

/// Account registry kept in the shared key-value store
#[derive(Debug, Clone, Copy, Default)]
pub struct StoreAccounts;

impl StoreAccounts {
    pub fn new() -> Self {
        Self
    }

    pub fn set_account(&self, ctx: &mut Context, account: &Account) -> Result<(), HostError> {
        let bz = serde_json::to_vec(account)?;
        ctx.store_mut().set(&account_key(&account.address), bz);
        Ok(())
    }

    pub fn remove_account(&self, ctx: &mut Context, address: &Address) {
        ctx.store_mut().delete(&account_key(address));
    }

    /// Create the named module account if it is missing and return it
    pub fn ensure_module_account(&self, ctx: &mut Context, name: &str) -> Result<Account, HostError> {
        if let Some(account) = self.get_module_account(ctx, name) {
            return Ok(account);
        }
        let account = Account::new_module(name);
        if self.get_account(ctx, &account.address).is_some() {
            return Err(HostError::AccountExists(account.address));
        }
        self.set_account(ctx, &account)?;
        log::debug!("created module account {} at {}", name, account.address);
        Ok(account)
    }
}

impl AccountKeeper for StoreAccounts {
    fn get_account(&self, ctx: &Context, address: &Address) -> Option<Account> {
        let bz = ctx.store().get(&account_key(address))?;
        serde_json::from_slice(&bz).ok()
    }

    fn get_module_account(&self, ctx: &Context, name: &str) -> Option<Account> {
        self.get_account(ctx, &module_address(name))
            .filter(|account| account.module_name.as_deref() == Some(name))
    }

    fn set_module_account(&self, ctx: &mut Context, account: &Account) -> Result<(), HostError> {
        self.set_account(ctx, account)
    }
}
