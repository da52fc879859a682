//! Store-backed ledger
//!
//! Balances, supply, denom metadata and per-denom send switches, keyed
//! under their own prefixes in the shared store.

use crate::core::{Address, Coin, DenomMetadata};
use crate::host::{BankKeeper, HostError};
use crate::storage::Context;
use num_bigint::BigInt;
use std::collections::BTreeSet;

const METADATA_PREFIX: u8 = 0x01;
const BALANCE_PREFIX: u8 = 0x02;
const SUPPLY_PREFIX: u8 = 0x03;
const SEND_DISABLED_PREFIX: u8 = 0x04;

fn metadata_key(denom: &str) -> Vec<u8> {
    let mut key = vec![METADATA_PREFIX];
    key.extend_from_slice(denom.as_bytes());
    key
}

fn balance_key(address: &Address, denom: &str) -> Vec<u8> {
    let mut key = vec![BALANCE_PREFIX];
    key.extend_from_slice(address.as_bytes());
    key.extend_from_slice(denom.as_bytes());
    key
}

fn supply_key(denom: &str) -> Vec<u8> {
    let mut key = vec![SUPPLY_PREFIX];
    key.extend_from_slice(denom.as_bytes());
    key
}

fn send_disabled_key(denom: &str) -> Vec<u8> {
    let mut key = vec![SEND_DISABLED_PREFIX];
    key.extend_from_slice(denom.as_bytes());
    key
}

fn read_amount(bytes: Option<Vec<u8>>) -> BigInt {
    bytes
        .and_then(|bz| String::from_utf8(bz).ok())
        .and_then(|s| s.parse().ok())
        .unwrap_or_default()
}

/// Ledger kept in the shared key-value store
#[derive(Debug, Clone, Default)]
pub struct StoreBank {
    blocked: BTreeSet<Address>,
}

impl StoreBank {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ledger that refuses to credit the given addresses
    pub fn with_blocked(blocked: impl IntoIterator<Item = Address>) -> Self {
        Self {
            blocked: blocked.into_iter().collect(),
        }
    }

    /// Store metadata as-is; like the ledger, no validation happens on write
    pub fn set_denom_metadata(
        &self,
        ctx: &mut Context,
        metadata: &DenomMetadata,
    ) -> Result<(), HostError> {
        let bz = serde_json::to_vec(metadata)?;
        ctx.store_mut().set(&metadata_key(&metadata.base), bz);
        Ok(())
    }

    pub fn set_send_enabled(&self, ctx: &mut Context, denom: &str, enabled: bool) {
        let key = send_disabled_key(denom);
        if enabled {
            ctx.store_mut().delete(&key);
        } else {
            ctx.store_mut().set(&key, vec![1]);
        }
    }

    /// Create new coins in `to`'s balance
    pub fn mint(&self, ctx: &mut Context, to: &Address, coin: &Coin) -> Result<(), HostError> {
        let balance = self.get_balance(ctx, to, &coin.denom) + &coin.amount;
        let supply = self.get_supply(ctx, &coin.denom) + &coin.amount;
        self.write_balance(ctx, to, &coin.denom, &balance);
        ctx.store_mut()
            .set(&supply_key(&coin.denom), supply.to_string().into_bytes());
        Ok(())
    }

    fn write_balance(&self, ctx: &mut Context, address: &Address, denom: &str, amount: &BigInt) {
        ctx.store_mut()
            .set(&balance_key(address, denom), amount.to_string().into_bytes());
    }
}

impl BankKeeper for StoreBank {
    fn get_balance(&self, ctx: &Context, address: &Address, denom: &str) -> BigInt {
        read_amount(ctx.store().get(&balance_key(address, denom)))
    }

    fn get_supply(&self, ctx: &Context, denom: &str) -> BigInt {
        read_amount(ctx.store().get(&supply_key(denom)))
    }

    fn send_coins(
        &self,
        ctx: &mut Context,
        from: &Address,
        to: &Address,
        coin: &Coin,
    ) -> Result<(), HostError> {
        let checked = Coin::new(coin.denom.clone(), coin.amount.clone())?;
        if !self.is_send_enabled(ctx, &checked.denom) {
            return Err(HostError::SendDisabled(checked.denom));
        }

        let from_balance = self.get_balance(ctx, from, &checked.denom);
        if from_balance < checked.amount {
            return Err(HostError::InsufficientFunds {
                address: *from,
                denom: checked.denom,
                have: from_balance,
                need: checked.amount,
            });
        }

        self.write_balance(ctx, from, &checked.denom, &(from_balance - &checked.amount));
        let to_balance = self.get_balance(ctx, to, &checked.denom) + &checked.amount;
        self.write_balance(ctx, to, &checked.denom, &to_balance);

        log::debug!(
            "sent {}{} from {} to {}",
            checked.amount,
            checked.denom,
            from,
            to
        );
        Ok(())
    }

    fn is_send_enabled(&self, ctx: &Context, denom: &str) -> bool {
        !ctx.store().has(&send_disabled_key(denom))
    }

    fn is_blocked(&self, address: &Address) -> bool {
        self.blocked.contains(address)
    }

    fn get_denom_metadata(&self, ctx: &Context, denom: &str) -> Option<DenomMetadata> {
        let bz = ctx.store().get(&metadata_key(denom))?;
        serde_json::from_slice(&bz).ok()
    }

    fn iterate_denom_metadata(&self, ctx: &Context, visitor: &mut dyn FnMut(&DenomMetadata) -> bool) {
        for (_, bz) in ctx.store().prefix_scan(&[METADATA_PREFIX]) {
            let metadata: DenomMetadata = match serde_json::from_slice(&bz) {
                Ok(metadata) => metadata,
                Err(e) => {
                    log::warn!("skipping undecodable denom metadata: {}", e);
                    continue;
                }
            };
            if visitor(&metadata) {
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemStore;

    fn coin(amount: i64) -> Coin {
        Coin::new("uatom", BigInt::from(amount)).unwrap()
    }

    #[test]
    fn test_mint_and_send() {
        let mut store = MemStore::new();
        let mut ctx = Context::new(&mut store, 1);
        let bank = StoreBank::new();
        let alice = Address::new([1; 20]);
        let bob = Address::new([2; 20]);

        bank.mint(&mut ctx, &alice, &coin(100)).unwrap();
        assert_eq!(bank.get_supply(&ctx, "uatom"), BigInt::from(100));

        bank.send_coins(&mut ctx, &alice, &bob, &coin(30)).unwrap();
        assert_eq!(bank.get_balance(&ctx, &alice, "uatom"), BigInt::from(70));
        assert_eq!(bank.get_balance(&ctx, &bob, "uatom"), BigInt::from(30));
        assert_eq!(bank.get_supply(&ctx, "uatom"), BigInt::from(100));
    }

    #[test]
    fn test_send_insufficient_funds() {
        let mut store = MemStore::new();
        let mut ctx = Context::new(&mut store, 1);
        let bank = StoreBank::new();
        let alice = Address::new([1; 20]);

        bank.mint(&mut ctx, &alice, &coin(5)).unwrap();
        let result = bank.send_coins(&mut ctx, &alice, &Address::new([2; 20]), &coin(6));
        assert!(matches!(result, Err(HostError::InsufficientFunds { .. })));
        assert_eq!(bank.get_balance(&ctx, &alice, "uatom"), BigInt::from(5));
    }

    #[test]
    fn test_send_rejects_negative_and_disabled() {
        let mut store = MemStore::new();
        let mut ctx = Context::new(&mut store, 1);
        let bank = StoreBank::new();
        let alice = Address::new([1; 20]);
        let bob = Address::new([2; 20]);
        bank.mint(&mut ctx, &alice, &coin(5)).unwrap();

        let negative = Coin {
            denom: "uatom".to_string(),
            amount: BigInt::from(-1),
        };
        assert!(matches!(
            bank.send_coins(&mut ctx, &alice, &bob, &negative),
            Err(HostError::InvalidCoin(_))
        ));

        bank.set_send_enabled(&mut ctx, "uatom", false);
        assert!(!bank.is_send_enabled(&ctx, "uatom"));
        assert!(matches!(
            bank.send_coins(&mut ctx, &alice, &bob, &coin(1)),
            Err(HostError::SendDisabled(_))
        ));

        bank.set_send_enabled(&mut ctx, "uatom", true);
        assert!(bank.send_coins(&mut ctx, &alice, &bob, &coin(1)).is_ok());
    }

    #[test]
    fn test_metadata_iteration_is_ordered() {
        let mut store = MemStore::new();
        let mut ctx = Context::new(&mut store, 1);
        let bank = StoreBank::new();

        for denom in ["ibc/uosmo", "aphoton", "ibc/uatom"] {
            bank.set_denom_metadata(&mut ctx, &DenomMetadata::with_display_unit(denom, 6))
                .unwrap();
        }

        let mut seen = Vec::new();
        bank.iterate_denom_metadata(&ctx, &mut |metadata| {
            seen.push(metadata.base.clone());
            false
        });
        assert_eq!(seen, vec!["aphoton", "ibc/uatom", "ibc/uosmo"]);

        let mut first = Vec::new();
        bank.iterate_denom_metadata(&ctx, &mut |metadata| {
            first.push(metadata.base.clone());
            true
        });
        assert_eq!(first, vec!["aphoton"]);
    }

    #[test]
    fn test_blocked_addresses() {
        let blocked = Address::new([9; 20]);
        let bank = StoreBank::with_blocked([blocked]);
        assert!(bank.is_blocked(&blocked));
        assert!(!bank.is_blocked(&Address::new([1; 20])));
    }
}
