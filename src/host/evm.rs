//! Store-backed EVM surface
//!
//! Not an interpreter. It keeps contract accounts, code by hash and the
//! module params, charges Ethereum intrinsic gas, and runs creation calls
//! whose init code is the standard copy-and-return prelude:
//!
//! ```text
//! PUSH2 len  DUP1  PUSH2 offset  PUSH1 0  CODECOPY  PUSH1 0  RETURN  INVALID
//! ```
//!
//! Anything after the runtime code (constructor arguments) is ignored.

use crate::contract::CallOutcome;
use crate::core::coin::amount_serde;
use crate::core::Address;
use crate::crypto::{create_address, keccak256};
use crate::host::{EvmHost, HostError};
use crate::storage::{Context, Log};
use num_bigint::BigInt;
use num_traits::Zero;
use serde::{Deserialize, Serialize};

const ACCOUNT_PREFIX: u8 = 0x20;
const CODE_PREFIX: u8 = 0x21;
const PARAMS_KEY: &[u8] = &[0x22];

/// Base cost of a call
pub const TX_GAS: u64 = 21_000;
/// Base cost of a contract creation
pub const TX_GAS_CONTRACT_CREATION: u64 = 53_000;
pub const TX_DATA_ZERO_GAS: u64 = 4;
pub const TX_DATA_NON_ZERO_GAS: u64 = 16;
/// Flat cost of the CREATE itself
pub const CREATE_GAS: u64 = 32_000;
/// Cost per byte of deployed code
pub const CREATE_DATA_GAS: u64 = 200;

/// Length of the init prelude, which is also the runtime code offset
pub const INIT_PRELUDE_LEN: usize = 14;

fn account_key(address: &Address) -> Vec<u8> {
    let mut key = vec![ACCOUNT_PREFIX];
    key.extend_from_slice(address.as_bytes());
    key
}

fn code_key(code_hash: &[u8; 32]) -> Vec<u8> {
    let mut key = vec![CODE_PREFIX];
    key.extend_from_slice(code_hash);
    key
}

/// Hash of empty code
pub fn empty_code_hash() -> [u8; 32] {
    keccak256(&[])
}

/// EVM module parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvmParams {
    /// Native denom used as the EVM's value token
    pub evm_denom: String,
    /// Governance switch for contract creation
    pub enable_create: bool,
}

impl Default for EvmParams {
    fn default() -> Self {
        Self {
            evm_denom: "aphoton".to_string(),
            enable_create: true,
        }
    }
}

/// Account as seen by the EVM
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvmAccount {
    pub nonce: u64,
    #[serde(with = "amount_serde")]
    pub balance: BigInt,
    pub code_hash: [u8; 32],
}

impl EvmAccount {
    /// Contract account with nonce 1 and no balance
    pub fn contract(code_hash: [u8; 32]) -> Self {
        Self {
            nonce: 1,
            balance: BigInt::zero(),
            code_hash,
        }
    }

    pub fn is_contract(&self) -> bool {
        self.code_hash != empty_code_hash()
    }
}

/// A contract-creation message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreationCall {
    pub from: Address,
    pub nonce: u64,
    pub value: BigInt,
    pub gas_limit: u64,
    pub input: Vec<u8>,
}

impl CreationCall {
    /// Address the contract will be created at
    pub fn contract_address(&self) -> Address {
        create_address(&self.from, self.nonce)
    }
}

/// Per-call execution settings; never persisted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecutionConfig {
    pub enable_create: bool,
}

impl From<&EvmParams> for ExecutionConfig {
    fn from(params: &EvmParams) -> Self {
        Self {
            enable_create: params.enable_create,
        }
    }
}

/// Split init code into the runtime code it returns
fn runtime_from_init_code(input: &[u8]) -> Option<&[u8]> {
    match input {
        [0x61, l0, l1, 0x80, 0x61, o0, o1, 0x60, 0x00, 0x39, 0x60, 0x00, 0xf3, 0xfe, ..] => {
            let len = u16::from_be_bytes([*l0, *l1]) as usize;
            let offset = u16::from_be_bytes([*o0, *o1]) as usize;
            if offset != INIT_PRELUDE_LEN {
                return None;
            }
            input.get(offset..offset + len)
        }
        _ => None,
    }
}

/// EVM state kept in the shared key-value store
#[derive(Debug, Clone, Copy, Default)]
pub struct StoreEvm;

impl StoreEvm {
    pub fn new() -> Self {
        Self
    }

    pub fn set_params(&self, ctx: &mut Context, params: &EvmParams) -> Result<(), HostError> {
        let bz = serde_json::to_vec(params)?;
        ctx.store_mut().set(PARAMS_KEY, bz);
        Ok(())
    }
}

impl EvmHost for StoreEvm {
    fn params(&self, ctx: &Context) -> EvmParams {
        ctx.store()
            .get(PARAMS_KEY)
            .and_then(|bz| serde_json::from_slice(&bz).ok())
            .unwrap_or_default()
    }

    fn get_account(&self, ctx: &Context, address: &Address) -> Option<EvmAccount> {
        let bz = ctx.store().get(&account_key(address))?;
        serde_json::from_slice(&bz).ok()
    }

    fn install_account(
        &self,
        ctx: &mut Context,
        address: &Address,
        account: &EvmAccount,
    ) -> Result<(), HostError> {
        let bz = serde_json::to_vec(account)?;
        ctx.store_mut().set(&account_key(address), bz);
        Ok(())
    }

    fn install_code(&self, ctx: &mut Context, code_hash: &[u8; 32], code: &[u8]) {
        ctx.store_mut().set(&code_key(code_hash), code.to_vec());
    }

    fn get_code(&self, ctx: &Context, code_hash: &[u8; 32]) -> Option<Vec<u8>> {
        ctx.store().get(&code_key(code_hash))
    }

    fn execute_creation_call(
        &self,
        ctx: &mut Context,
        call: &CreationCall,
        config: &ExecutionConfig,
    ) -> CallOutcome {
        if !config.enable_create {
            return CallOutcome::error("failed to create new contract: create disabled");
        }

        let intrinsic = self.intrinsic_gas(&call.input, true);
        if call.gas_limit < intrinsic {
            return CallOutcome::error(format!(
                "intrinsic gas too low: have {}, want {}",
                call.gas_limit, intrinsic
            ));
        }
        if !call.value.is_zero() {
            return CallOutcome::error("value transfer on creation is not supported");
        }

        let address = call.contract_address();
        if let Some(existing) = self.get_account(ctx, &address) {
            if existing.nonce != 0 || existing.is_contract() {
                return CallOutcome::error(format!("contract address collision at {}", address));
            }
        }

        let runtime = match runtime_from_init_code(&call.input) {
            Some(runtime) => runtime,
            None => return CallOutcome::revert("unsupported init code", call.gas_limit - intrinsic),
        };

        let gas_used = intrinsic + CREATE_GAS + CREATE_DATA_GAS * runtime.len() as u64;
        if gas_used > call.gas_limit {
            return CallOutcome::OutOfGas;
        }

        let code_hash = keccak256(runtime);
        self.install_code(ctx, &code_hash, runtime);
        if let Err(e) = self.install_account(ctx, &address, &EvmAccount::contract(code_hash)) {
            return CallOutcome::error(e.to_string());
        }

        log::debug!("created contract {} ({} bytes of code)", address, runtime.len());
        CallOutcome::success(runtime.to_vec(), gas_used)
    }

    fn emit_log(&self, ctx: &mut Context, log: Log) {
        ctx.add_log(log);
    }

    fn intrinsic_gas(&self, input: &[u8], is_create: bool) -> u64 {
        let base = if is_create {
            TX_GAS_CONTRACT_CREATION
        } else {
            TX_GAS
        };
        let zeros = input.iter().filter(|b| **b == 0).count() as u64;
        let non_zeros = input.len() as u64 - zeros;
        base + zeros * TX_DATA_ZERO_GAS + non_zeros * TX_DATA_NON_ZERO_GAS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemStore;

    fn init_code(runtime: &[u8], trailer: &[u8]) -> Vec<u8> {
        let len = (runtime.len() as u16).to_be_bytes();
        let mut code = vec![
            0x61, len[0], len[1], 0x80, 0x61, 0x00, 0x0e, 0x60, 0x00, 0x39, 0x60, 0x00, 0xf3, 0xfe,
        ];
        code.extend_from_slice(runtime);
        code.extend_from_slice(trailer);
        code
    }

    fn creation(input: Vec<u8>) -> CreationCall {
        CreationCall {
            from: Address::new([7; 20]),
            nonce: 0,
            value: BigInt::zero(),
            gas_limit: 3_000_000,
            input,
        }
    }

    #[test]
    fn test_intrinsic_gas() {
        let evm = StoreEvm::new();
        assert_eq!(evm.intrinsic_gas(&[], false), 21_000);
        assert_eq!(evm.intrinsic_gas(&[0, 1, 0, 2], false), 21_000 + 8 + 32);
        assert_eq!(evm.intrinsic_gas(&[1], true), 53_016);
    }

    #[test]
    fn test_creation_installs_runtime_code() {
        let mut store = MemStore::new();
        let mut ctx = Context::new(&mut store, 1);
        let evm = StoreEvm::new();
        let runtime = [0x60, 0x00, 0x60, 0x00, 0xfd];
        let call = creation(init_code(&runtime, &[0; 64]));

        let outcome = evm.execute_creation_call(&mut ctx, &call, &ExecutionConfig { enable_create: true });
        let expected_gas = evm.intrinsic_gas(&call.input, true) + 32_000 + 200 * 5;
        assert_eq!(outcome, CallOutcome::success(runtime.to_vec(), expected_gas));

        let account = evm.get_account(&ctx, &call.contract_address()).unwrap();
        assert_eq!(account.nonce, 1);
        assert_eq!(account.code_hash, keccak256(&runtime));
        assert_eq!(evm.get_code(&ctx, &account.code_hash).unwrap(), runtime.to_vec());
    }

    #[test]
    fn test_creation_respects_config() {
        let mut store = MemStore::new();
        let mut ctx = Context::new(&mut store, 1);
        let evm = StoreEvm::new();
        let call = creation(init_code(&[0xfe], &[]));

        let outcome = evm.execute_creation_call(&mut ctx, &call, &ExecutionConfig { enable_create: false });
        assert!(matches!(outcome, CallOutcome::Error { .. }));
        assert!(evm.get_account(&ctx, &call.contract_address()).is_none());
    }

    #[test]
    fn test_creation_rejects_collision_and_bad_code() {
        let mut store = MemStore::new();
        let mut ctx = Context::new(&mut store, 1);
        let evm = StoreEvm::new();
        let config = ExecutionConfig { enable_create: true };

        let call = creation(init_code(&[0xfe], &[]));
        assert!(evm.execute_creation_call(&mut ctx, &call, &config).is_success());
        assert!(matches!(
            evm.execute_creation_call(&mut ctx, &call, &config),
            CallOutcome::Error { .. }
        ));

        let mut other = creation(vec![0x60, 0x00]);
        other.nonce = 1;
        assert!(matches!(
            evm.execute_creation_call(&mut ctx, &other, &config),
            CallOutcome::Revert { .. }
        ));
    }

    #[test]
    fn test_creation_out_of_gas() {
        let mut store = MemStore::new();
        let mut ctx = Context::new(&mut store, 1);
        let evm = StoreEvm::new();
        let mut call = creation(init_code(&[0xfe; 100], &[]));
        call.gas_limit = evm.intrinsic_gas(&call.input, true) + 32_000;

        assert_eq!(
            evm.execute_creation_call(&mut ctx, &call, &ExecutionConfig { enable_create: true }),
            CallOutcome::OutOfGas
        );
    }

    #[test]
    fn test_params_default_and_override() {
        let mut store = MemStore::new();
        let mut ctx = Context::new(&mut store, 1);
        let evm = StoreEvm::new();
        assert!(evm.params(&ctx).enable_create);

        let params = EvmParams {
            evm_denom: "uvfc".to_string(),
            enable_create: false,
        };
        evm.set_params(&mut ctx, &params).unwrap();
        assert_eq!(evm.params(&ctx), params);
        assert!(!ExecutionConfig::from(&params).enable_create);
    }
}
