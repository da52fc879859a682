//! Bank contract deployment
//!
//! Addresses come from the deployer module account and its sequence, the
//! same way a plain CREATE derives them. How the contract account is
//! materialised depends on the chain phase:
//! - [`GenesisDeployment`]: the EVM is not running yet, so the account and
//!   the fixed runtime code are written directly
//! - [`RuntimeDeployment`]: a creation call is executed by the EVM, even if
//!   contract creation is disabled by governance
//!
//! Deployment is not atomic by itself; callers run it inside a branch.

use crate::contract::compiled::{creation_bytecode, vfbc_code_hash, VFBC_RUNTIME_CODE};
use crate::contract::denom::{derive_token_view, DerivedTokenView};
use crate::contract::error::VfcError;
use crate::contract::keeper::Keeper;
use crate::contract::outcome::CallOutcome;
use crate::contract::types::{
    BankContractMetadata, ContractRecord, ACTION_DEPLOY, ATTRIBUTE_KEY_ACTION,
    ATTRIBUTE_KEY_ADDRESS, ATTRIBUTE_KEY_TYPE, EVENT_TYPE_VFC,
};
use crate::core::{Address, DenomMetadata};
use crate::crypto::create_address;
use crate::host::{Account, AccountKeeper, BankKeeper, CreationCall, EvmAccount, EvmHost, ExecutionConfig};
use crate::storage::{Context, Event};
use num_bigint::BigInt;
use num_traits::Zero;

/// Sequence counter of the deployer identity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployerNonce {
    account: Account,
}

impl DeployerNonce {
    pub fn new(account: Account) -> Self {
        Self { account }
    }

    pub fn address(&self) -> Address {
        self.account.address
    }

    pub fn sequence(&self) -> u64 {
        self.account.sequence
    }

    /// Address the next deployment will get
    pub fn next_address(&self) -> Address {
        create_address(&self.account.address, self.account.sequence)
    }

    pub fn advance(&mut self) {
        self.account.sequence += 1;
    }

    /// The deployer account with its current sequence
    pub fn account(&self) -> &Account {
        &self.account
    }
}

/// What is being deployed, and where
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentPlan {
    pub address: Address,
    pub init_code: Vec<u8>,
}

/// Materialises a contract account for a plan
pub trait DeploymentStrategy<E: EvmHost> {
    fn name(&self) -> &'static str;

    /// Create the account at `plan.address` and advance the deployer
    fn materialize(
        &self,
        evm: &E,
        ctx: &mut Context,
        deployer: &mut DeployerNonce,
        plan: &DeploymentPlan,
    ) -> Result<(), VfcError>;
}

/// Direct state writes, used while building genesis
#[derive(Debug, Clone, Copy, Default)]
pub struct GenesisDeployment;

impl<E: EvmHost> DeploymentStrategy<E> for GenesisDeployment {
    fn name(&self) -> &'static str {
        "genesis"
    }

    fn materialize(
        &self,
        evm: &E,
        ctx: &mut Context,
        deployer: &mut DeployerNonce,
        plan: &DeploymentPlan,
    ) -> Result<(), VfcError> {
        let code_hash = vfbc_code_hash();
        evm.install_account(ctx, &plan.address, &EvmAccount::contract(code_hash))?;
        evm.install_code(ctx, &code_hash, VFBC_RUNTIME_CODE);
        deployer.advance();
        Ok(())
    }
}

/// Creation call through the EVM
#[derive(Debug, Clone, Copy)]
pub struct RuntimeDeployment {
    pub gas_limit: u64,
}

impl<E: EvmHost> DeploymentStrategy<E> for RuntimeDeployment {
    fn name(&self) -> &'static str {
        "runtime"
    }

    fn materialize(
        &self,
        evm: &E,
        ctx: &mut Context,
        deployer: &mut DeployerNonce,
        plan: &DeploymentPlan,
    ) -> Result<(), VfcError> {
        if plan.init_code.is_empty() {
            return Err(VfcError::InvalidRequest(
                "input call data must not be empty".to_string(),
            ));
        }

        if !evm.params(ctx).enable_create {
            log::debug!("contract creation is disabled, overriding for this deployment");
        }
        // not persisted
        let config = ExecutionConfig {
            enable_create: true,
        };

        let call = CreationCall {
            from: deployer.address(),
            nonce: deployer.sequence(),
            value: BigInt::zero(),
            gas_limit: self.gas_limit,
            input: plan.init_code.clone(),
        };

        match evm.execute_creation_call(ctx, &call, &config) {
            CallOutcome::Success { .. } => {}
            CallOutcome::Revert { reason, .. } => {
                return Err(VfcError::Execution(format!("execution reverted: {}", reason)))
            }
            CallOutcome::OutOfGas => return Err(VfcError::Execution("out of gas".to_string())),
            CallOutcome::Error { message } => return Err(VfcError::Execution(message)),
        }

        if evm.get_account(ctx, &plan.address).is_none() {
            return Err(VfcError::Execution("contract account not found".to_string()));
        }

        deployer.advance();
        Ok(())
    }
}

impl<B, A, E> Keeper<B, A, E>
where
    B: BankKeeper,
    A: AccountKeeper,
    E: EvmHost,
{
    /// Strategy for the current chain phase
    pub fn deployment_strategy(&self, ctx: &Context) -> Box<dyn DeploymentStrategy<E>> {
        if ctx.is_genesis() {
            Box::new(GenesisDeployment)
        } else {
            Box::new(RuntimeDeployment {
                gas_limit: self.config.creation_gas_limit,
            })
        }
    }

    /// Load the deployer module account
    pub fn deployer_nonce(&self, ctx: &Context) -> Result<DeployerNonce, VfcError> {
        let name = &self.config.deployer_module_name;
        self.accounts
            .get_module_account(ctx, name)
            .map(DeployerNonce::new)
            .ok_or_else(|| VfcError::ModuleAccountNotFound(name.clone()))
    }

    /// Deploy a bank contract for `view.min_denom` and register it.
    ///
    /// Fails without touching state if the decimals do not fit a byte or
    /// the denom already has a contract.
    pub fn deploy_bank_contract(
        &self,
        ctx: &mut Context,
        active: bool,
        view: &DerivedTokenView,
    ) -> Result<Address, VfcError> {
        let decimals = view
            .decimals_u8()
            .ok_or(VfcError::DecimalsOverflow(view.decimals))?;

        if let Some(existing) = self.registry.address_for_denom(ctx, &view.min_denom) {
            return Err(VfcError::DenomAlreadyMapped {
                denom: view.min_denom.clone(),
                existing: existing.to_string(),
            });
        }

        let metadata = BankContractMetadata::new(view.min_denom.clone());
        metadata.validate_basic()?;

        let mut deployer = self.deployer_nonce(ctx)?;
        let plan = DeploymentPlan {
            address: deployer.next_address(),
            init_code: creation_bytecode(&view.name, decimals),
        };

        if self
            .evm
            .get_account(ctx, &plan.address)
            .map_or(false, |account| account.is_contract())
        {
            return Err(VfcError::AddressInUse(format!(
                "contract address already exists at {}",
                plan.address
            )));
        }
        if self.registry.is_registered(ctx, &plan.address) {
            return Err(VfcError::AddressInUse(format!(
                "virtual frontier contract {} already exists",
                plan.address
            )));
        }

        let strategy = self.deployment_strategy(ctx);
        strategy.materialize(&self.evm, ctx, &mut deployer, &plan)?;
        self.accounts.set_module_account(ctx, deployer.account())?;

        let record = ContractRecord::bank(&plan.address, active, &metadata)?;
        self.registry.put(ctx, &plan.address, &record)?;
        self.registry
            .register_denom_mapping(ctx, &view.min_denom, &plan.address)?;

        ctx.emit_event(
            Event::new(EVENT_TYPE_VFC)
                .with_attribute(ATTRIBUTE_KEY_ACTION, ACTION_DEPLOY)
                .with_attribute(ATTRIBUTE_KEY_TYPE, record.type_name())
                .with_attribute(ATTRIBUTE_KEY_ADDRESS, record.address.clone()),
        );
        log::info!(
            "deployed {} bank contract for {} at {} (active: {})",
            strategy.name(),
            view.min_denom,
            plan.address,
            active
        );

        Ok(plan.address)
    }

    /// Token view of `metadata` if a contract may be deployed for it
    pub fn eligible_token_view(&self, ctx: &Context, metadata: &DenomMetadata) -> Option<DerivedTokenView> {
        if self.registry.has_denom_mapping(ctx, &metadata.base) {
            return None;
        }
        let (view, passed_validation) = derive_token_view(metadata);
        if !passed_validation || view.decimals_u8().is_none() {
            return None;
        }
        Some(view)
    }

    /// Deploy for every eligible denom accepted by `filter` (IBC denoms by
    /// default), in ledger iteration order. The native denom's contract
    /// starts inactive.
    ///
    /// Stops at the first failure; state written so far must be discarded
    /// by the caller.
    pub fn deploy_for_all_eligible(
        &self,
        ctx: &mut Context,
        filter: Option<&dyn Fn(&DenomMetadata) -> bool>,
    ) -> Result<Vec<Address>, VfcError> {
        let prefix = self.config.ibc_denom_prefix.as_str();
        let default_filter = |metadata: &DenomMetadata| metadata.base.starts_with(prefix);
        let filter = filter.unwrap_or(&default_filter);

        let mut views = Vec::new();
        self.bank.iterate_denom_metadata(ctx, &mut |metadata| {
            if filter(metadata) {
                if let Some(view) = self.eligible_token_view(ctx, metadata) {
                    views.push(view);
                }
            }
            false
        });

        let native_denom = self.evm.params(ctx).evm_denom;
        let mut deployed = Vec::with_capacity(views.len());
        for view in views {
            let active = view.min_denom != native_denom;
            match self.deploy_bank_contract(ctx, active, &view) {
                Ok(address) => deployed.push(address),
                Err(e) => {
                    log::error!(
                        "failed to deploy virtual frontier bank contract for {}: {}",
                        view.min_denom,
                        e
                    );
                    return Err(e);
                }
            }
        }
        Ok(deployed)
    }

    /// Deploy an active bank contract for a single denom, atomically
    pub fn deploy_for_denom(&self, ctx: &mut Context, base: &str) -> Result<Address, VfcError> {
        let metadata = self
            .bank
            .get_denom_metadata(ctx, base)
            .ok_or_else(|| VfcError::DenomMetadataNotFound(base.to_string()))?;

        if let Some(existing) = self.registry.address_for_denom(ctx, base) {
            return Err(VfcError::DenomAlreadyMapped {
                denom: base.to_string(),
                existing: existing.to_string(),
            });
        }

        let view = self
            .eligible_token_view(ctx, &metadata)
            .ok_or_else(|| VfcError::Ineligible {
                denom: base.to_string(),
                reason: "metadata does not pass validation for deployment".to_string(),
            })?;

        ctx.branch(|child| self.deploy_bank_contract(child, true, &view))
            .map_err(|e| {
                log::error!("failed to deploy bank contract for {}: {}", base, e);
                e
            })
    }
}
