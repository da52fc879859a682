//! External collaborators
//!
//! The ledger, account and EVM modules are owned by the surrounding chain.
//! The subsystem only talks to them through these traits; every method takes
//! the `Context` so their state is branched together with the registry.
//!
//! `StoreBank`, `StoreAccounts` and `StoreEvm` are minimal store-backed
//! implementations used by the tests and the sandbox CLI.

pub mod accounts;
pub mod bank;
pub mod evm;

pub use accounts::{Account, StoreAccounts};
pub use bank::StoreBank;
pub use evm::{CreationCall, EvmAccount, EvmParams, ExecutionConfig, StoreEvm};

use crate::contract::CallOutcome;
use crate::core::{Address, Coin, CoinError, DenomMetadata};
use crate::storage::{Context, Log};
use num_bigint::BigInt;
use thiserror::Error;

/// Collaborator errors
#[derive(Error, Debug)]
pub enum HostError {
    #[error("insufficient funds: {address} has {have}{denom}, need {need}{denom}")]
    InsufficientFunds {
        address: Address,
        denom: String,
        have: BigInt,
        need: BigInt,
    },
    #[error("invalid coin: {0}")]
    InvalidCoin(#[from] CoinError),
    #[error("{0} transfers are currently disabled")]
    SendDisabled(String),
    #[error("account {0} already exists")]
    AccountExists(Address),
    #[error("codec error: {0}")]
    Codec(#[from] serde_json::Error),
}

/// Ledger (bank) module
pub trait BankKeeper {
    fn get_balance(&self, ctx: &Context, address: &Address, denom: &str) -> BigInt;

    fn get_supply(&self, ctx: &Context, denom: &str) -> BigInt;

    fn send_coins(
        &self,
        ctx: &mut Context,
        from: &Address,
        to: &Address,
        coin: &Coin,
    ) -> Result<(), HostError>;

    fn is_send_enabled(&self, ctx: &Context, denom: &str) -> bool;

    /// Recipients the ledger refuses to credit (module accounts and the like)
    fn is_blocked(&self, address: &Address) -> bool;

    fn get_denom_metadata(&self, ctx: &Context, denom: &str) -> Option<DenomMetadata>;

    /// Visit every metadata record in ascending denom order; the visitor
    /// returns `true` to stop.
    fn iterate_denom_metadata(&self, ctx: &Context, visitor: &mut dyn FnMut(&DenomMetadata) -> bool);
}

/// Account (auth) module
pub trait AccountKeeper {
    fn get_account(&self, ctx: &Context, address: &Address) -> Option<Account>;

    fn get_module_account(&self, ctx: &Context, name: &str) -> Option<Account>;

    fn set_module_account(&self, ctx: &mut Context, account: &Account) -> Result<(), HostError>;

    fn is_module_account(&self, ctx: &Context, address: &Address) -> bool {
        self.get_account(ctx, address)
            .map_or(false, |account| account.is_module())
    }
}

/// EVM module
pub trait EvmHost {
    fn params(&self, ctx: &Context) -> EvmParams;

    fn get_account(&self, ctx: &Context, address: &Address) -> Option<EvmAccount>;

    fn install_account(
        &self,
        ctx: &mut Context,
        address: &Address,
        account: &EvmAccount,
    ) -> Result<(), HostError>;

    fn install_code(&self, ctx: &mut Context, code_hash: &[u8; 32], code: &[u8]);

    fn get_code(&self, ctx: &Context, code_hash: &[u8; 32]) -> Option<Vec<u8>>;

    /// Run a contract-creation message with the given (non-persisted) config
    fn execute_creation_call(
        &self,
        ctx: &mut Context,
        call: &CreationCall,
        config: &ExecutionConfig,
    ) -> CallOutcome;

    fn emit_log(&self, ctx: &mut Context, log: Log);

    /// Baseline gas of any message, charged regardless of outcome
    fn intrinsic_gas(&self, input: &[u8], is_create: bool) -> u64;
}
