//! Shared test fixtures

use crate::contract::governance::ActivationUpdate;
use crate::contract::keeper::DEFAULT_DEPLOYER_MODULE_NAME;
use crate::contract::{Keeper, VfcConfig};
use crate::core::{Address, Coin, DenomMetadata};
use crate::crypto::module_address;
use crate::host::{EvmParams, StoreAccounts, StoreBank, StoreEvm};
use crate::storage::{Context, MemStore};
use num_bigint::BigInt;

pub const NATIVE_DENOM: &str = "aphoton";

pub const SENDER: Address = Address::new([0x11; 20]);

pub const SENDER_FUNDS: u64 = 1_000_000;

pub type TestKeeper = Keeper<StoreBank, StoreAccounts, StoreEvm>;

/// Keeper over an empty store holding the deployer account, the native denom
/// and a funded sender
pub fn setup() -> (MemStore, TestKeeper) {
    let mut store = MemStore::new();
    let keeper = Keeper::new(
        StoreBank::new(),
        StoreAccounts::new(),
        StoreEvm::new(),
        VfcConfig::default(),
    );

    {
        let mut ctx = Context::new(&mut store, 0);
        keeper
            .accounts()
            .ensure_module_account(&mut ctx, DEFAULT_DEPLOYER_MODULE_NAME)
            .unwrap();
        keeper
            .evm()
            .set_params(
                &mut ctx,
                &EvmParams {
                    evm_denom: NATIVE_DENOM.to_string(),
                    enable_create: true,
                },
            )
            .unwrap();
        set_metadata(&keeper, &mut ctx, NATIVE_DENOM, 18);
        fund(&keeper, &mut ctx, &SENDER, NATIVE_DENOM, SENDER_FUNDS);
    }

    (store, keeper)
}

pub fn set_metadata(keeper: &TestKeeper, ctx: &mut Context, denom: &str, decimals: u32) {
    keeper
        .bank()
        .set_denom_metadata(ctx, &DenomMetadata::with_display_unit(denom, decimals))
        .unwrap();
}

pub fn fund(keeper: &TestKeeper, ctx: &mut Context, to: &Address, denom: &str, amount: u64) {
    let coin = Coin::new(denom, BigInt::from(amount)).unwrap();
    keeper.bank().mint(ctx, to, &coin).unwrap();
}

/// Register metadata for `denom` and deploy its bank contract
pub fn deploy(keeper: &TestKeeper, ctx: &mut Context, denom: &str, decimals: u32) -> Address {
    set_metadata(keeper, ctx, denom, decimals);
    keeper.deploy_for_denom(ctx, denom).unwrap()
}

pub fn set_active(keeper: &TestKeeper, ctx: &mut Context, contract: &Address, active: bool) {
    keeper
        .update_activation(ctx, &[ActivationUpdate::new(contract, active)])
        .unwrap();
}

pub fn remove_deployer(ctx: &mut Context) {
    StoreAccounts::new().remove_account(ctx, &module_address(DEFAULT_DEPLOYER_MODULE_NAME));
}
