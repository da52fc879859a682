//! CLI commands for the sandbox chain
//!
//! Implements all command handlers for the CLI interface.

use crate::contract::abi::IERC20;
use crate::contract::{
    abi, ActivationUpdate, CallReceipt, Keeper, UpdateVirtualFrontierBankContractsProposal,
    VfcConfig, VfcError,
};
use crate::core::{Address, Coin, DenomMetadata};
use crate::host::{BankKeeper, EvmHost, EvmParams, StoreAccounts, StoreBank, StoreEvm};
use crate::storage::{save_to_file, ChainSnapshot, Context, Event, Log, Storage, StorageConfig};
use alloy_sol_types::SolCall;
use num_bigint::BigInt;
use std::fs;
use std::path::{Path, PathBuf};

/// Result type for CLI operations
pub type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

/// Keeper wired to the store-backed collaborators
pub type SandboxKeeper = Keeper<StoreBank, StoreAccounts, StoreEvm>;

/// Default gas limit of `call` and `transfer`
pub const DEFAULT_CALL_GAS: u64 = 100_000;

/// Load keeper configuration from a JSON file, or use the defaults
pub fn load_config(path: Option<&Path>) -> CliResult<VfcConfig> {
    match path {
        Some(path) => {
            let data = fs::read_to_string(path)?;
            Ok(serde_json::from_str(&data)?)
        }
        None => Ok(VfcConfig::default()),
    }
}

fn storage_for(data_dir: &Path) -> CliResult<Storage> {
    let storage_config = StorageConfig {
        data_dir: data_dir.to_path_buf(),
        ..Default::default()
    };
    Ok(Storage::new(storage_config)?)
}

fn new_keeper(config: VfcConfig) -> SandboxKeeper {
    Keeper::new(
        StoreBank::new(),
        StoreAccounts::new(),
        StoreEvm::new(),
        config,
    )
}

/// Application state
pub struct AppState {
    pub snapshot: ChainSnapshot,
    pub storage: Storage,
    pub keeper: SandboxKeeper,
    pub data_dir: PathBuf,
}

impl AppState {
    /// Load an initialized sandbox
    pub fn new(data_dir: PathBuf, config: VfcConfig) -> CliResult<Self> {
        let storage = storage_for(&data_dir)?;
        if !storage.exists() {
            return Err(format!(
                "no sandbox at {:?}, create one with: vfc init",
                data_dir
            )
            .into());
        }

        let snapshot = storage.load()?;
        log::debug!("loaded sandbox at height {}", snapshot.block_height);

        Ok(Self {
            snapshot,
            storage,
            keeper: new_keeper(config),
            data_dir,
        })
    }

    /// Save the current state
    pub fn save(&self) -> CliResult<()> {
        self.storage.save(&self.snapshot)?;
        Ok(())
    }

    /// Run a state change at the current height; nothing is kept on error
    pub fn execute<T>(
        &mut self,
        f: impl FnOnce(&SandboxKeeper, &mut Context) -> Result<T, VfcError>,
    ) -> CliResult<T> {
        let keeper = &self.keeper;
        let mut ctx = Context::new(&mut self.snapshot.state, self.snapshot.block_height);
        let value = ctx.branch(|child| f(keeper, child))?;
        let (events, logs) = ctx.into_effects();
        print_effects(&events, &logs);
        Ok(value)
    }

    /// Read state at the current height
    pub fn query<T>(&mut self, f: impl FnOnce(&SandboxKeeper, &Context) -> T) -> T {
        let ctx = Context::new(&mut self.snapshot.state, self.snapshot.block_height);
        f(&self.keeper, &ctx)
    }
}

fn print_effects(events: &[Event], logs: &[Log]) {
    for event in events {
        let attributes: Vec<String> = event
            .attributes
            .iter()
            .map(|(key, value)| format!("{}={}", key, value))
            .collect();
        println!("   📣 {} {}", event.kind, attributes.join(" "));
    }
    for log in logs {
        println!(
            "   📜 log from {} ({} topics, {} data bytes, block {})",
            log.address,
            log.topics.len(),
            log.data.len(),
            log.block_number
        );
    }
}

fn print_receipt(receipt: &CallReceipt) {
    if receipt.success {
        println!("✅ Call succeeded");
    } else if receipt.reverted {
        println!("↩️  Call reverted");
    } else {
        println!("❌ Call failed");
    }
    println!("   ├─ Gas used: {}", receipt.gas_used);
    println!("   ├─ Gas left: {}", receipt.gas_left);
    if let Some(reason) = receipt.revert_reason() {
        println!("   ├─ Reason: {}", reason);
    }
    println!("   └─ Return data: 0x{}", hex::encode(&receipt.return_data));
}

/// Initialize a new sandbox.
///
/// Block 0 is genesis: the deployer account, EVM params and metadata are
/// written directly, and contracts are deployed for the native denom
/// (inactive) and every IBC denom.
pub fn cmd_init(
    data_dir: &Path,
    config: VfcConfig,
    native_denom: &str,
    decimals: u32,
    metadata_file: Option<&Path>,
) -> CliResult<()> {
    let storage = storage_for(data_dir)?;
    if storage.exists() {
        println!("⚠️  Sandbox already exists at {:?}", data_dir);
        return Ok(());
    }

    let genesis_metadata: Vec<DenomMetadata> = match metadata_file {
        Some(path) => serde_json::from_str(&fs::read_to_string(path)?)?,
        None => Vec::new(),
    };

    let keeper = new_keeper(config);
    let prefix = keeper.config().ibc_denom_prefix.clone();
    let mut snapshot = ChainSnapshot::default();

    let deployed = {
        let mut ctx = Context::new(&mut snapshot.state, 0);
        let deployed = ctx.branch(|ctx| -> Result<Vec<Address>, VfcError> {
            keeper
                .accounts()
                .ensure_module_account(ctx, &keeper.config().deployer_module_name)?;
            keeper.evm().set_params(
                ctx,
                &EvmParams {
                    evm_denom: native_denom.to_string(),
                    enable_create: true,
                },
            )?;
            keeper
                .bank()
                .set_denom_metadata(ctx, &DenomMetadata::with_display_unit(native_denom, decimals))?;
            for metadata in &genesis_metadata {
                keeper.bank().set_denom_metadata(ctx, metadata)?;
            }

            let genesis_filter: &dyn Fn(&DenomMetadata) -> bool = &|metadata: &DenomMetadata| {
                metadata.base == native_denom || metadata.base.starts_with(prefix.as_str())
            };
            keeper.deploy_for_all_eligible(ctx, Some(genesis_filter))
        })?;
        let (events, logs) = ctx.into_effects();
        print_effects(&events, &logs);
        deployed
    };

    storage.save(&snapshot)?;

    println!("✅ Sandbox initialized!");
    println!("   📁 Data directory: {:?}", data_dir);
    println!("   🪙 Native denom: {} ({} decimals)", native_denom, decimals);
    println!("   📄 Genesis denoms: {}", genesis_metadata.len() + 1);
    println!("   📦 Bank contracts deployed: {}", deployed.len());
    for address in &deployed {
        println!("   └─ {}", address);
    }

    Ok(())
}

/// Register ledger metadata for a denom
pub fn cmd_add_denom(state: &mut AppState, denom: &str, decimals: u32) -> CliResult<()> {
    let metadata = DenomMetadata::with_display_unit(denom, decimals);
    state.execute(|keeper, ctx| Ok(keeper.bank().set_denom_metadata(ctx, &metadata)?))?;
    state.save()?;

    println!("🪙 Denom {} registered ({} decimals)", denom, decimals);
    Ok(())
}

/// Mint coins to an address
pub fn cmd_mint(state: &mut AppState, to: &str, denom: &str, amount: &str) -> CliResult<()> {
    let to: Address = to.parse()?;
    let coin = Coin::new(denom, amount.parse::<BigInt>()?)?;

    state.execute(|keeper, ctx| Ok(keeper.bank().mint(ctx, &to, &coin)?))?;
    state.save()?;

    println!("💰 Minted {}{} to {}", coin.amount, coin.denom, to);
    Ok(())
}

/// Deploy an active bank contract for one denom
pub fn cmd_deploy(state: &mut AppState, denom: &str) -> CliResult<()> {
    let address = state.execute(|keeper, ctx| keeper.deploy_for_denom(ctx, denom))?;
    state.save()?;

    println!("📦 Bank contract for {} deployed!", denom);
    println!("   📍 Address: {}", address);
    Ok(())
}

/// Advance the height and run begin-block deployments
pub fn cmd_begin_block(state: &mut AppState) -> CliResult<()> {
    state.snapshot.block_height += 1;
    let deployed = state.execute(|keeper, ctx| Ok(keeper.begin_block(ctx)))?;
    state.save()?;

    println!("🧱 Block {} started", state.snapshot.block_height);
    println!("   📦 Bank contracts deployed: {}", deployed.len());
    for address in &deployed {
        println!("   └─ {}", address);
    }
    Ok(())
}

fn call_contract(
    state: &mut AppState,
    from: &Address,
    to: &Address,
    input: &[u8],
    gas: u64,
) -> CliResult<Option<CallReceipt>> {
    let receipt = state.execute(|keeper, ctx| {
        keeper.apply_call(ctx, from, to, input, gas, &BigInt::from(0))
    })?;
    state.save()?;
    Ok(receipt)
}

/// Send raw call data to a contract
pub fn cmd_call(state: &mut AppState, from: &str, to: &str, input: &str, gas: u64) -> CliResult<()> {
    let from: Address = from.parse()?;
    let to: Address = to.parse()?;
    let input = hex::decode(input.trim_start_matches("0x"))?;

    match call_contract(state, &from, &to, &input, gas)? {
        Some(receipt) => print_receipt(&receipt),
        None => println!("⚠️  {} is not a virtual frontier contract", to),
    }
    Ok(())
}

/// ERC-20 transfer through a bank contract
pub fn cmd_transfer(
    state: &mut AppState,
    from: &str,
    contract: &str,
    to: &str,
    amount: &str,
    gas: u64,
) -> CliResult<()> {
    let from: Address = from.parse()?;
    let contract: Address = contract.parse()?;
    let to: Address = to.parse()?;
    let input = IERC20::transferCall {
        to: to.into(),
        amount: abi::to_u256(&amount.parse::<BigInt>()?)?,
    }
    .abi_encode();

    println!("📤 Transfer from {} to {} via {}", from, to, contract);
    match call_contract(state, &from, &contract, &input, gas)? {
        Some(receipt) => print_receipt(&receipt),
        None => println!("⚠️  {} is not a virtual frontier contract", contract),
    }
    Ok(())
}

/// Activate or deactivate a contract through a governance proposal
pub fn cmd_set_active(state: &mut AppState, address: &str, active: bool) -> CliResult<()> {
    let address: Address = address.parse()?;
    let action = if active { "Activate" } else { "Deactivate" };
    let proposal = UpdateVirtualFrontierBankContractsProposal::new(
        format!("{} {}", action, address),
        format!("{} virtual frontier bank contract {}", action, address),
        vec![ActivationUpdate::new(&address, active)],
    );

    state.execute(|keeper, ctx| keeper.handle_proposal(ctx, &proposal))?;
    state.save()?;

    println!("🗳️  Proposal applied: {} is now {}", address, if active { "active" } else { "inactive" });
    Ok(())
}

/// List all contracts
pub fn cmd_list(state: &mut AppState) -> CliResult<()> {
    let contracts = state.query(|keeper, ctx| keeper.contracts(ctx))?;

    if contracts.is_empty() {
        println!("📭 No contracts found. Deploy one with: vfc deploy <denom>");
        return Ok(());
    }

    println!("📋 Virtual frontier contracts:");
    for record in &contracts {
        let denom = record
            .bank_metadata()
            .map(|metadata| metadata.min_denom)
            .unwrap_or_default();
        let status = if record.active { "active" } else { "inactive" };
        println!("   {} | {} | {} | {}", record.address, record.type_name(), denom, status);
    }
    Ok(())
}

/// Show contract info
pub fn cmd_info(state: &mut AppState, address: &str) -> CliResult<()> {
    let address: Address = address.parse()?;
    let (record, account, supply) = state.query(|keeper, ctx| -> Result<_, VfcError> {
        let record = keeper.get_contract(ctx, &address)?;
        let account = keeper.evm().get_account(ctx, &address);
        let supply = match &record {
            Some(record) => Some(keeper.bank().get_supply(ctx, &record.bank_metadata()?.min_denom)),
            None => None,
        };
        Ok((record, account, supply))
    })?;

    let record = match record {
        Some(record) => record,
        None => {
            println!("❓ No virtual frontier contract at {}", address);
            return Ok(());
        }
    };

    println!("📜 Contract {}", record.address);
    println!("   ├─ Type: {}", record.type_name());
    println!("   ├─ Active: {}", record.active);
    if let Ok(metadata) = record.bank_metadata() {
        println!("   ├─ Denom: {}", metadata.min_denom);
    }
    if let Some(supply) = supply {
        println!("   ├─ Total supply: {}", supply);
    }
    match account {
        Some(account) => println!("   └─ Code hash: 0x{}", hex::encode(account.code_hash)),
        None => println!("   └─ Code hash: -"),
    }
    Ok(())
}

/// Show a ledger balance
pub fn cmd_balance(state: &mut AppState, address: &str, denom: &str) -> CliResult<()> {
    let address: Address = address.parse()?;
    let balance = state.query(|keeper, ctx| keeper.bank().get_balance(ctx, &address, denom));

    println!("💰 Balance for {}", address);
    println!("   Total: {}{}", balance, denom);
    Ok(())
}

/// Write the current snapshot to a file
pub fn cmd_export(state: &mut AppState, path: &Path) -> CliResult<()> {
    save_to_file(&state.snapshot, path)?;
    println!("💾 Exported block {} to {:?}", state.snapshot.block_height, path);
    Ok(())
}

/// List snapshot backups, newest first
pub fn cmd_backups(state: &mut AppState) -> CliResult<()> {
    let backups = state.storage.list_backups();
    if backups.is_empty() {
        println!("📭 No backups yet");
        return Ok(());
    }

    println!("🗄️  Backups:");
    for index in backups {
        let snapshot = state.storage.restore_backup(index)?;
        println!("   {} | block {}", index, snapshot.block_height);
    }
    Ok(())
}

/// Roll the sandbox back to a backup
pub fn cmd_restore(state: &mut AppState, index: usize) -> CliResult<()> {
    let snapshot = state.storage.restore_backup(index)?;
    log::info!(
        "restoring backup {} (block {} -> {})",
        index,
        state.snapshot.block_height,
        snapshot.block_height
    );
    state.snapshot = snapshot;
    state.save()?;

    println!("⏪ Restored block {} from backup {}", state.snapshot.block_height, index);
    Ok(())
}
