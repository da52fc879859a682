//! Virtual frontier contract keeper
//!
//! Owns the registry and wires it to the ledger, account and EVM
//! collaborators. Deployment, dispatch and governance live in their own
//! files as further `impl` blocks on [`Keeper`].

use crate::contract::error::VfcError;
use crate::contract::outcome::{CallOutcome, CallReceipt};
use crate::contract::registry::ContractRegistry;
use crate::contract::types::ContractRecord;
use crate::core::Address;
use crate::crypto::module_address;
use crate::host::{AccountKeeper, BankKeeper, EvmHost};
use crate::storage::Context;
use num_bigint::BigInt;
use serde::{Deserialize, Serialize};

/// Default name of the module account that deploys every contract
pub const DEFAULT_DEPLOYER_MODULE_NAME: &str = "vfc_deployer";

/// Gas allowance of a deployment's creation call
pub const DEFAULT_CREATION_GAS_LIMIT: u64 = 3_000_000;

/// Prefix of denoms that arrived over IBC
pub const DEFAULT_IBC_DENOM_PREFIX: &str = "ibc/";

/// Keeper configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VfcConfig {
    pub deployer_module_name: String,
    pub creation_gas_limit: u64,
    /// Denoms with this prefix are deployed automatically at block start
    pub ibc_denom_prefix: String,
}

impl Default for VfcConfig {
    fn default() -> Self {
        Self {
            deployer_module_name: DEFAULT_DEPLOYER_MODULE_NAME.to_string(),
            creation_gas_limit: DEFAULT_CREATION_GAS_LIMIT,
            ibc_denom_prefix: DEFAULT_IBC_DENOM_PREFIX.to_string(),
        }
    }
}

/// Virtual frontier contract keeper
pub struct Keeper<B, A, E> {
    pub(crate) bank: B,
    pub(crate) accounts: A,
    pub(crate) evm: E,
    pub(crate) registry: ContractRegistry,
    pub(crate) config: VfcConfig,
}

impl<B, A, E> Keeper<B, A, E>
where
    B: BankKeeper,
    A: AccountKeeper,
    E: EvmHost,
{
    pub fn new(bank: B, accounts: A, evm: E, config: VfcConfig) -> Self {
        Self {
            bank,
            accounts,
            evm,
            registry: ContractRegistry::new(),
            config,
        }
    }

    pub fn bank(&self) -> &B {
        &self.bank
    }

    pub fn accounts(&self) -> &A {
        &self.accounts
    }

    pub fn evm(&self) -> &E {
        &self.evm
    }

    pub fn registry(&self) -> &ContractRegistry {
        &self.registry
    }

    pub fn config(&self) -> &VfcConfig {
        &self.config
    }

    /// Address of the deployer module account
    pub fn deployer_address(&self) -> Address {
        module_address(&self.config.deployer_module_name)
    }

    pub fn is_virtual_frontier_contract(&self, ctx: &Context, address: &Address) -> bool {
        self.registry.is_registered(ctx, address)
    }

    pub fn get_contract(&self, ctx: &Context, address: &Address) -> Result<Option<ContractRecord>, VfcError> {
        self.registry.get(ctx, address)
    }

    /// All registered contracts, in address order
    pub fn contracts(&self, ctx: &Context) -> Result<Vec<ContractRecord>, VfcError> {
        self.registry.all(ctx)
    }

    pub fn address_for_denom(&self, ctx: &Context, denom: &str) -> Option<Address> {
        self.registry.address_for_denom(ctx, denom)
    }

    /// Run a call whose destination may be a virtual frontier contract.
    ///
    /// Returns `Ok(None)` when `to` is not registered, leaving the call to
    /// the EVM. Otherwise intrinsic gas is charged first, the dispatch runs
    /// in a branch, and its state changes are kept only if it succeeded.
    pub fn apply_call(
        &self,
        ctx: &mut Context,
        sender: &Address,
        to: &Address,
        input: &[u8],
        gas_limit: u64,
        value: &BigInt,
    ) -> Result<Option<CallReceipt>, VfcError> {
        let record = match self.registry.get(ctx, to)? {
            Some(record) => record,
            None => return Ok(None),
        };

        let intrinsic = self.evm.intrinsic_gas(input, false);
        if gas_limit < intrinsic {
            return Err(VfcError::IntrinsicGasTooLow {
                have: gas_limit,
                want: intrinsic,
            });
        }
        let gas = gas_limit - intrinsic;

        let outcome = match ctx.branch(|child| {
            let outcome = self.dispatch(child, sender, &record, input, gas, value);
            if outcome.is_success() {
                Ok(outcome)
            } else {
                Err(outcome)
            }
        }) {
            Ok(outcome) | Err(outcome) => outcome,
        };

        if let CallOutcome::Error { message } = &outcome {
            log::warn!("call to virtual frontier contract {} failed: {}", to, message);
        }

        Ok(Some(outcome.settle(gas).with_intrinsic(intrinsic)))
    }

    /// Deploy bank contracts for every new IBC denom.
    ///
    /// Runs in a branch; a failure is logged and leaves no trace, so block
    /// processing carries on.
    pub fn begin_block(&self, ctx: &mut Context) -> Vec<Address> {
        match ctx.branch(|child| self.deploy_for_all_eligible(child, None)) {
            Ok(deployed) => {
                if !deployed.is_empty() {
                    log::info!(
                        "deployed {} virtual frontier bank contract(s) at height {}",
                        deployed.len(),
                        ctx.block_height()
                    );
                }
                deployed
            }
            Err(e) => {
                log::error!(
                    "failed to deploy virtual frontier bank contracts at height {}: {}",
                    ctx.block_height(),
                    e
                );
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contract::abi;
    use crate::contract::method::BankMethod;
    use crate::testutil::{self, setup, SENDER};

    #[test]
    fn test_default_config() {
        let config = VfcConfig::default();
        assert_eq!(config.deployer_module_name, "vfc_deployer");
        assert_eq!(config.creation_gas_limit, 3_000_000);
        assert_eq!(config.ibc_denom_prefix, "ibc/");

        let partial: VfcConfig = serde_json::from_str(r#"{"creation_gas_limit": 5}"#).unwrap();
        assert_eq!(partial.creation_gas_limit, 5);
        assert_eq!(partial.deployer_module_name, "vfc_deployer");
    }

    #[test]
    fn test_apply_call_ignores_plain_addresses() {
        let (mut store, keeper) = setup();
        let mut ctx = Context::new(&mut store, 1);

        let receipt = keeper
            .apply_call(&mut ctx, &SENDER, &Address::new([0x42; 20]), &[], 100_000, &BigInt::from(0))
            .unwrap();
        assert!(receipt.is_none());
    }

    #[test]
    fn test_apply_call_charges_intrinsic_gas() {
        let (mut store, keeper) = setup();
        let mut ctx = Context::new(&mut store, 1);
        let contract = testutil::deploy(&keeper, &mut ctx, "ibc/uatom", 6);

        let input = BankMethod::Decimals.selector();
        let intrinsic = keeper.evm().intrinsic_gas(&input, false);
        let receipt = keeper
            .apply_call(&mut ctx, &SENDER, &contract, &input, intrinsic + 1_000, &BigInt::from(0))
            .unwrap()
            .unwrap();

        assert!(receipt.success);
        assert_eq!(receipt.gas_used, intrinsic + 340);
        assert_eq!(receipt.gas_left, 1_000 - 340);
        assert_eq!(abi::decode_uint256(&receipt.return_data).unwrap(), BigInt::from(6));

        let err = keeper
            .apply_call(&mut ctx, &SENDER, &contract, &input, intrinsic - 1, &BigInt::from(0))
            .unwrap_err();
        assert!(matches!(err, VfcError::IntrinsicGasTooLow { .. }));
    }

    #[test]
    fn test_value_transfer_consumes_only_intrinsic() {
        let (mut store, keeper) = setup();
        let mut ctx = Context::new(&mut store, 1);
        let contract = testutil::deploy(&keeper, &mut ctx, "ibc/uatom", 6);

        for (input, value) in [
            (Vec::new(), BigInt::from(0)),
            (BankMethod::Name.selector().to_vec(), BigInt::from(1)),
        ] {
            let intrinsic = keeper.evm().intrinsic_gas(&input, false);
            let receipt = keeper
                .apply_call(&mut ctx, &SENDER, &contract, &input, intrinsic + 50_000, &value)
                .unwrap()
                .unwrap();
            assert!(receipt.reverted);
            assert_eq!(receipt.gas_used, intrinsic);
            assert_eq!(receipt.revert_reason().as_deref(), Some("not allowed to receive"));
        }
    }

    #[test]
    fn test_begin_block_deploys_ibc_denoms_only() {
        let (mut store, keeper) = setup();
        let mut ctx = Context::new(&mut store, 5);
        testutil::set_metadata(&keeper, &mut ctx, "ibc/uatom", 6);
        testutil::set_metadata(&keeper, &mut ctx, "ibc/uosmo", 6);
        testutil::set_metadata(&keeper, &mut ctx, "uother", 6);

        let deployed = keeper.begin_block(&mut ctx);
        assert_eq!(deployed.len(), 2);
        assert!(keeper.address_for_denom(&ctx, "ibc/uatom").is_some());
        assert!(keeper.address_for_denom(&ctx, "ibc/uosmo").is_some());
        assert!(keeper.address_for_denom(&ctx, "uother").is_none());
        assert!(keeper.address_for_denom(&ctx, testutil::NATIVE_DENOM).is_none());

        // nothing left to deploy
        assert!(keeper.begin_block(&mut ctx).is_empty());
        assert_eq!(keeper.contracts(&ctx).unwrap().len(), 2);
    }

    #[test]
    fn test_begin_block_failure_leaves_no_trace() {
        let (mut store, keeper) = setup();
        let mut ctx = Context::new(&mut store, 5);
        testutil::set_metadata(&keeper, &mut ctx, "ibc/uatom", 6);
        testutil::remove_deployer(&mut ctx);

        assert!(keeper.begin_block(&mut ctx).is_empty());
        assert!(keeper.contracts(&ctx).unwrap().is_empty());
        assert!(ctx.events().is_empty());
    }
}
