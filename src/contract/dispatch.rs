//! Bank contract call dispatch
//!
//! Every call to a registered bank contract ends in exactly one
//! [`CallOutcome`]. Gas sufficiency is checked before any argument is
//! decoded, and the ledger is only written in the final step of a
//! successful `transfer`.

use crate::contract::abi::{self, IERC20Calls};
use crate::contract::denom::{derive_token_view, DerivedTokenView};
use crate::contract::keeper::Keeper;
use crate::contract::method::{BankMethod, OpGas};
use crate::contract::outcome::CallOutcome;
use crate::contract::types::{ContractKind, ContractRecord};
use crate::core::{Address, Coin};
use crate::host::{AccountKeeper, BankKeeper, EvmHost};
use crate::storage::{Context, Log};
use alloy_primitives::U256;
use alloy_sol_types::{SolInterface, SolValue};
use num_bigint::BigInt;
use num_traits::Zero;

const REASON_NOT_ALLOWED_TO_RECEIVE: &str = "not allowed to receive";
const REASON_INVALID_CALL_DATA: &str = "invalid call data";
const REASON_NOT_SUPPORTED: &str = "not supported method";

impl<B, A, E> Keeper<B, A, E>
where
    B: BankKeeper,
    A: AccountKeeper,
    E: EvmHost,
{
    /// Execute a call against a registered contract.
    ///
    /// `gas` is what is left after intrinsic gas. The caller decides
    /// whether to keep the state changes; only a successful `transfer`
    /// makes any.
    pub fn dispatch(
        &self,
        ctx: &mut Context,
        sender: &Address,
        record: &ContractRecord,
        input: &[u8],
        gas: u64,
        value: &BigInt,
    ) -> CallOutcome {
        if record.kind != ContractKind::Bank {
            return CallOutcome::error("not a bank contract");
        }

        // plain value transfers are refused
        if input.is_empty() || !value.is_zero() {
            return CallOutcome::revert(REASON_NOT_ALLOWED_TO_RECEIVE, 0);
        }

        let metadata = match record.bank_metadata() {
            Ok(metadata) => metadata,
            Err(e) => {
                return CallOutcome::error(format!(
                    "failed to decode virtual frontier bank contract metadata: {}",
                    e
                ))
            }
        };
        if metadata.min_denom.is_empty() {
            return CallOutcome::error("virtual frontier bank contract metadata, denom is empty");
        }
        let denom = metadata.min_denom.as_str();

        let ledger_metadata = match self.bank.get_denom_metadata(ctx, denom) {
            Some(ledger_metadata) => ledger_metadata,
            None => {
                return CallOutcome::error(format!("bank denom metadata not found for {}", denom))
            }
        };

        let method = match BankMethod::from_input(input) {
            Some(method) => method,
            // fallback function: does nothing
            None => return CallOutcome::success(Vec::new(), 0),
        };
        let cost = method.gas();

        if !method.is_supported() {
            if gas < cost.full {
                return CallOutcome::OutOfGas;
            }
            return CallOutcome::revert(REASON_NOT_SUPPORTED, cost.revert);
        }

        if gas < cost.full {
            return CallOutcome::OutOfGas;
        }
        if input.len() != method.input_len() {
            return CallOutcome::revert(REASON_INVALID_CALL_DATA, cost.revert);
        }

        // malformed ledger metadata still yields a usable view
        let (view, _) = derive_token_view(&ledger_metadata);
        let call = match IERC20Calls::abi_decode(input) {
            Ok(call) => call,
            Err(e) => return CallOutcome::error(format!("failed to decode call data: {}", e)),
        };

        match call {
            IERC20Calls::name(_) => CallOutcome::success(view.name.abi_encode(), cost.full),
            IERC20Calls::symbol(_) => CallOutcome::success(view.symbol.abi_encode(), cost.full),
            IERC20Calls::decimals(_) => decimals(&view, cost),
            IERC20Calls::totalSupply(_) => {
                uint256_result(&self.bank.get_supply(ctx, denom), cost.full)
            }
            IERC20Calls::balanceOf(call) => {
                let owner = Address::from(call.account);
                uint256_result(&self.bank.get_balance(ctx, &owner, denom), cost.full)
            }
            IERC20Calls::transfer(call) => {
                let to = Address::from(call.to);
                self.transfer(ctx, sender, record, denom, &to, call.amount, gas, cost)
            }
            IERC20Calls::approve(_) | IERC20Calls::transferFrom(_) | IERC20Calls::allowance(_) => {
                CallOutcome::revert(REASON_NOT_SUPPORTED, cost.revert)
            }
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn transfer(
        &self,
        ctx: &mut Context,
        sender: &Address,
        record: &ContractRecord,
        denom: &str,
        to: &Address,
        amount: U256,
        gas: u64,
        cost: OpGas,
    ) -> CallOutcome {
        // reverts, but consumes everything that was offered
        if !record.active {
            return CallOutcome::revert(
                format!("virtual frontier contract {} is not active", record.address),
                gas,
            );
        }
        let contract = match record.contract_address() {
            Ok(contract) => contract,
            Err(e) => return CallOutcome::error(e.to_string()),
        };

        if self.accounts.is_module_account(ctx, to) {
            return CallOutcome::revert("can not transfer to module account", cost.revert);
        }
        if self.is_virtual_frontier_contract(ctx, to) {
            return CallOutcome::revert(REASON_NOT_ALLOWED_TO_RECEIVE, cost.revert);
        }

        // a uint256 argument is never negative nor wider than 256 bits
        let data = amount.abi_encode();
        let amount = abi::from_u256(amount);

        if self.bank.get_balance(ctx, sender, denom) < amount {
            return CallOutcome::revert("ERC20: transfer amount exceeds balance", cost.revert);
        }
        if !self.bank.is_send_enabled(ctx, denom) {
            return CallOutcome::revert(
                format!("{} transfers are currently disabled", denom),
                cost.revert,
            );
        }
        if self.bank.is_blocked(to) {
            return CallOutcome::revert(
                format!("unauthorized, {} is not allowed to receive funds", to),
                cost.revert,
            );
        }

        // state changes from here on
        let coin = Coin {
            denom: denom.to_string(),
            amount,
        };
        if let Err(e) = self.bank.send_coins(ctx, sender, to, &coin) {
            return CallOutcome::revert(format!("failed to transfer: {}", e), cost.full);
        }

        let log = Log {
            address: contract,
            topics: vec![abi::transfer_event_topic(), sender.to_word(), to.to_word()],
            data,
            block_number: ctx.block_height(),
        };
        self.evm.emit_log(ctx, log);

        CallOutcome::success_bool(true, cost.full)
    }
}

fn decimals(view: &DerivedTokenView, cost: OpGas) -> CallOutcome {
    match view.decimals_u8() {
        Some(decimals) => CallOutcome::success(<alloy_sol_types::sol_data::Uint<8> as alloy_sol_types::SolType>::abi_encode(&decimals), cost.full),
        None => CallOutcome::revert(format!("decimals overflow {}", view.decimals), cost.revert),
    }
}

fn uint256_result(value: &BigInt, gas: u64) -> CallOutcome {
    match abi::encode_uint256(value) {
        Ok(word) => CallOutcome::success(word, gas),
        Err(e) => CallOutcome::error(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contract::types::BankContractMetadata;
    use crate::core::DenomMetadata;
    use crate::host::{HostError, StoreAccounts, StoreBank, StoreEvm};
    use crate::storage::MemStore;
    use crate::testutil::{self, setup, TestKeeper, SENDER};
    use alloy_sol_types::SolCall;

    const ZERO: u64 = 0;
    const PLENTY: u64 = 1_000_000;

    fn call(selector: BankMethod, args: &[[u8; 32]]) -> Vec<u8> {
        let mut input = selector.selector().to_vec();
        for arg in args {
            input.extend_from_slice(arg);
        }
        input
    }

    fn transfer_input(to: &Address, amount: u64) -> Vec<u8> {
        abi::IERC20::transferCall {
            to: (*to).into(),
            amount: U256::from(amount),
        }
        .abi_encode()
    }

    fn balance_of_input(owner: &Address) -> Vec<u8> {
        call(BankMethod::BalanceOf, &[owner.to_word()])
    }

    fn run(keeper: &TestKeeper, ctx: &mut Context, contract: &Address, input: &[u8], gas: u64) -> CallOutcome {
        let record = keeper.get_contract(ctx, contract).unwrap().unwrap();
        keeper.dispatch(ctx, &SENDER, &record, input, gas, &BigInt::from(ZERO))
    }

    fn uint_result(outcome: &CallOutcome) -> BigInt {
        match outcome {
            CallOutcome::Success { return_data, .. } => abi::decode_uint256(return_data).unwrap(),
            other => panic!("expected success, got {:?}", other),
        }
    }

    fn gas_used(outcome: &CallOutcome) -> u64 {
        match outcome {
            CallOutcome::Success { gas_used, .. } | CallOutcome::Revert { gas_used, .. } => *gas_used,
            other => panic!("no partial gas for {:?}", other),
        }
    }

    fn revert_reason(outcome: &CallOutcome) -> &str {
        match outcome {
            CallOutcome::Revert { reason, .. } => reason,
            other => panic!("expected revert, got {:?}", other),
        }
    }

    #[test]
    fn test_read_only_methods() {
        let (mut store, keeper) = setup();
        let mut ctx = Context::new(&mut store, 1);
        let contract = testutil::deploy(&keeper, &mut ctx, "ibc/uatom", 6);
        testutil::fund(&keeper, &mut ctx, &SENDER, "ibc/uatom", 500);

        let name = run(&keeper, &mut ctx, &contract, &call(BankMethod::Name, &[]), PLENTY);
        match &name {
            CallOutcome::Success { return_data, gas_used } => {
                assert_eq!(abi::decode_string(return_data).unwrap(), "BC/UATOM");
                assert_eq!(*gas_used, 3400);
            }
            other => panic!("unexpected {:?}", other),
        }

        let symbol = run(&keeper, &mut ctx, &contract, &call(BankMethod::Symbol, &[]), PLENTY);
        assert_eq!(gas_used(&symbol), 3400);

        let decimals = run(&keeper, &mut ctx, &contract, &call(BankMethod::Decimals, &[]), PLENTY);
        assert_eq!(uint_result(&decimals), BigInt::from(6));
        assert_eq!(gas_used(&decimals), 340);

        let supply = run(&keeper, &mut ctx, &contract, &call(BankMethod::TotalSupply, &[]), PLENTY);
        assert_eq!(uint_result(&supply), BigInt::from(500));
        assert_eq!(gas_used(&supply), 2400);

        let balance = run(&keeper, &mut ctx, &contract, &balance_of_input(&SENDER), PLENTY);
        assert_eq!(uint_result(&balance), BigInt::from(500));
        assert_eq!(gas_used(&balance), 2800);
    }

    #[test]
    fn test_balance_of_uses_low_address_bytes() {
        let (mut store, keeper) = setup();
        let mut ctx = Context::new(&mut store, 1);
        let contract = testutil::deploy(&keeper, &mut ctx, "ibc/uatom", 6);
        testutil::fund(&keeper, &mut ctx, &SENDER, "ibc/uatom", 42);

        let mut dirty = SENDER.to_word();
        dirty[..12].copy_from_slice(&[0xff; 12]);
        let outcome = run(&keeper, &mut ctx, &contract, &call(BankMethod::BalanceOf, &[dirty]), PLENTY);
        assert_eq!(uint_result(&outcome), BigInt::from(42));
    }

    #[test]
    fn test_one_gas_short_is_out_of_gas() {
        let (mut store, keeper) = setup();
        let mut ctx = Context::new(&mut store, 1);
        let contract = testutil::deploy(&keeper, &mut ctx, "ibc/uatom", 6);
        let recipient = Address::new([0x33; 20]);

        let cases = [
            call(BankMethod::Name, &[]),
            call(BankMethod::Symbol, &[]),
            call(BankMethod::Decimals, &[]),
            call(BankMethod::TotalSupply, &[]),
            balance_of_input(&SENDER),
            transfer_input(&recipient, 1),
        ];
        for input in cases {
            let method = BankMethod::from_input(&input).unwrap();
            let outcome = run(&keeper, &mut ctx, &contract, &input, method.gas().full - 1);
            assert_eq!(outcome, CallOutcome::OutOfGas, "{:?}", method);
            assert_eq!(outcome.settle(method.gas().full - 1).gas_left, 0);
        }
    }

    #[test]
    fn test_gas_checked_before_call_data() {
        let (mut store, keeper) = setup();
        let mut ctx = Context::new(&mut store, 1);
        let contract = testutil::deploy(&keeper, &mut ctx, "ibc/uatom", 6);

        let mut input = call(BankMethod::Decimals, &[]);
        input.push(0);
        assert_eq!(run(&keeper, &mut ctx, &contract, &input, 339), CallOutcome::OutOfGas);

        let outcome = run(&keeper, &mut ctx, &contract, &input, 340);
        assert_eq!(revert_reason(&outcome), "invalid call data");
        assert_eq!(gas_used(&outcome), 85);
    }

    #[test]
    fn test_wrong_input_length_reverts_at_revert_cost() {
        let (mut store, keeper) = setup();
        let mut ctx = Context::new(&mut store, 1);
        let contract = testutil::deploy(&keeper, &mut ctx, "ibc/uatom", 6);

        let mut short_transfer = transfer_input(&Address::new([1; 20]), 1);
        short_transfer.pop();
        let mut long_name = call(BankMethod::Name, &[]);
        long_name.extend_from_slice(&[0; 32]);

        for (input, expected_gas) in [
            (short_transfer, 3425),
            (long_name, 850),
            (call(BankMethod::BalanceOf, &[]), 700),
            (call(BankMethod::TotalSupply, &[[0; 32]]), 600),
        ] {
            let outcome = run(&keeper, &mut ctx, &contract, &input, PLENTY);
            assert_eq!(revert_reason(&outcome), "invalid call data");
            assert_eq!(gas_used(&outcome), expected_gas);
        }
    }

    #[test]
    fn test_unsupported_methods_always_revert() {
        let (mut store, keeper) = setup();
        let mut ctx = Context::new(&mut store, 1);
        let contract = testutil::deploy(&keeper, &mut ctx, "ibc/uatom", 6);

        for method in [BankMethod::Approve, BankMethod::TransferFrom, BankMethod::Allowance] {
            for input in [
                method.selector().to_vec(),
                call(method, &[[1; 32], [2; 32]]),
                call(method, &[[1; 32], [2; 32], [3; 32], [4; 32]]),
            ] {
                let outcome = run(&keeper, &mut ctx, &contract, &input, PLENTY);
                assert_eq!(revert_reason(&outcome), "not supported method");
                assert_eq!(gas_used(&outcome), 100);
            }
            assert_eq!(
                run(&keeper, &mut ctx, &contract, &method.selector(), 99),
                CallOutcome::OutOfGas
            );
        }
    }

    #[test]
    fn test_unknown_selector_is_fallback() {
        let (mut store, keeper) = setup();
        let mut ctx = Context::new(&mut store, 1);
        let contract = testutil::deploy(&keeper, &mut ctx, "ibc/uatom", 6);

        for input in [
            vec![0xde, 0xad, 0xbe, 0xef],
            vec![0xde, 0xad, 0xbe, 0xef, 1, 2, 3],
            vec![0x06, 0xfd],
        ] {
            assert_eq!(
                run(&keeper, &mut ctx, &contract, &input, 0),
                CallOutcome::success(Vec::new(), 0)
            );
        }
    }

    #[test]
    fn test_value_or_empty_input_is_refused() {
        let (mut store, keeper) = setup();
        let mut ctx = Context::new(&mut store, 1);
        let contract = testutil::deploy(&keeper, &mut ctx, "ibc/uatom", 6);
        let record = keeper.get_contract(&ctx, &contract).unwrap().unwrap();

        let empty = keeper.dispatch(&mut ctx, &SENDER, &record, &[], PLENTY, &BigInt::from(0));
        assert_eq!(empty, CallOutcome::revert("not allowed to receive", 0));

        let with_value = keeper.dispatch(
            &mut ctx,
            &SENDER,
            &record,
            &call(BankMethod::Name, &[]),
            PLENTY,
            &BigInt::from(1),
        );
        assert_eq!(with_value, CallOutcome::revert("not allowed to receive", 0));
    }

    #[test]
    fn test_transfer_moves_ledger_balance() {
        let (mut store, keeper) = setup();
        let mut ctx = Context::new(&mut store, 4);
        let contract = testutil::deploy(&keeper, &mut ctx, "ibc/uatom", 6);
        testutil::fund(&keeper, &mut ctx, &SENDER, "ibc/uatom", 1_000);
        let recipient = Address::new([0x33; 20]);

        let outcome = run(&keeper, &mut ctx, &contract, &transfer_input(&recipient, 400), PLENTY);
        assert_eq!(outcome, CallOutcome::success_bool(true, 13_700));

        let bank = keeper.bank();
        assert_eq!(bank.get_balance(&ctx, &SENDER, "ibc/uatom"), BigInt::from(600));
        assert_eq!(bank.get_balance(&ctx, &recipient, "ibc/uatom"), BigInt::from(400));
        let after = run(&keeper, &mut ctx, &contract, &balance_of_input(&recipient), PLENTY);
        assert_eq!(uint_result(&after), BigInt::from(400));

        let log = ctx.logs().last().unwrap();
        assert_eq!(log.address, contract);
        assert_eq!(
            log.topics,
            vec![abi::transfer_event_topic(), SENDER.to_word(), recipient.to_word()]
        );
        assert_eq!(abi::decode_uint256(&log.data).unwrap(), BigInt::from(400));
        assert_eq!(log.block_number, 4);
    }

    #[test]
    fn test_zero_transfer_changes_nothing() {
        let (mut store, keeper) = setup();
        let mut ctx = Context::new(&mut store, 1);
        let contract = testutil::deploy(&keeper, &mut ctx, "ibc/uatom", 6);
        let recipient = Address::new([0x33; 20]);

        let outcome = run(&keeper, &mut ctx, &contract, &transfer_input(&recipient, 0), PLENTY);
        assert!(outcome.is_success());
        assert!(keeper.bank().get_balance(&ctx, &recipient, "ibc/uatom").is_zero());
        assert!(keeper.bank().get_balance(&ctx, &SENDER, "ibc/uatom").is_zero());
    }

    #[test]
    fn test_transfer_refusals() {
        let (mut store, keeper) = setup();
        let mut ctx = Context::new(&mut store, 1);
        let contract = testutil::deploy(&keeper, &mut ctx, "ibc/uatom", 6);
        let other_contract = testutil::deploy(&keeper, &mut ctx, "ibc/uosmo", 6);
        testutil::fund(&keeper, &mut ctx, &SENDER, "ibc/uatom", 10);
        let deployer = keeper.deployer_address();

        let cases = [
            (transfer_input(&deployer, 1), "can not transfer to module account".to_string()),
            (transfer_input(&other_contract, 1), "not allowed to receive".to_string()),
            (
                transfer_input(&Address::new([0x33; 20]), 11),
                "ERC20: transfer amount exceeds balance".to_string(),
            ),
        ];
        for (input, reason) in cases {
            let outcome = run(&keeper, &mut ctx, &contract, &input, PLENTY);
            assert_eq!(revert_reason(&outcome), reason);
            assert_eq!(gas_used(&outcome), 3425);
        }

        assert_eq!(keeper.bank().get_balance(&ctx, &SENDER, "ibc/uatom"), BigInt::from(10));
        assert!(keeper.bank().get_balance(&ctx, &deployer, "ibc/uatom").is_zero());
        assert!(keeper.bank().get_balance(&ctx, &other_contract, "ibc/uatom").is_zero());
        assert!(ctx.logs().is_empty());
    }

    #[test]
    fn test_transfer_respects_ledger_policy() {
        let (mut store, keeper) = setup_with_bank(StoreBank::with_blocked([Address::new([0x66; 20])]));
        let mut ctx = Context::new(&mut store, 1);
        let contract = testutil::deploy(&keeper, &mut ctx, "ibc/uatom", 6);
        testutil::fund(&keeper, &mut ctx, &SENDER, "ibc/uatom", 10);

        let blocked = run(&keeper, &mut ctx, &contract, &transfer_input(&Address::new([0x66; 20]), 1), PLENTY);
        assert_eq!(
            revert_reason(&blocked),
            "unauthorized, 0x6666666666666666666666666666666666666666 is not allowed to receive funds"
        );
        assert_eq!(gas_used(&blocked), 3425);

        keeper.bank().set_send_enabled(&mut ctx, "ibc/uatom", false);
        let disabled = run(&keeper, &mut ctx, &contract, &transfer_input(&Address::new([0x33; 20]), 1), PLENTY);
        assert_eq!(revert_reason(&disabled), "ibc/uatom transfers are currently disabled");
        assert_eq!(gas_used(&disabled), 3425);
    }

    #[test]
    fn test_inactive_contract_reverts_transfer_with_all_gas() {
        let (mut store, keeper) = setup();
        let mut ctx = Context::new(&mut store, 1);
        let contract = testutil::deploy(&keeper, &mut ctx, "ibc/uatom", 6);
        testutil::fund(&keeper, &mut ctx, &SENDER, "ibc/uatom", 10);
        testutil::set_active(&keeper, &mut ctx, &contract, false);
        let recipient = Address::new([0x33; 20]);

        let outcome = run(&keeper, &mut ctx, &contract, &transfer_input(&recipient, 1), PLENTY);
        assert_eq!(
            revert_reason(&outcome),
            format!("virtual frontier contract {} is not active", contract)
        );
        let receipt = outcome.settle(PLENTY);
        assert!(receipt.reverted);
        assert!(!receipt.success);
        assert_eq!(receipt.gas_used, PLENTY);
        assert_eq!(receipt.gas_left, 0);

        // the full call path reports the same status
        let receipt = keeper
            .apply_call(&mut ctx, &SENDER, &contract, &transfer_input(&recipient, 1), 200_000, &BigInt::from(0))
            .unwrap()
            .unwrap();
        assert!(receipt.reverted);
        assert_eq!(receipt.gas_used, 200_000);
        assert!(receipt.revert_reason().unwrap().ends_with("is not active"));

        assert_eq!(keeper.bank().get_balance(&ctx, &SENDER, "ibc/uatom"), BigInt::from(10));
        assert!(keeper.bank().get_balance(&ctx, &recipient, "ibc/uatom").is_zero());

        // reads keep working
        let decimals = run(&keeper, &mut ctx, &contract, &call(BankMethod::Decimals, &[]), PLENTY);
        assert_eq!(uint_result(&decimals), BigInt::from(6));
    }

    #[test]
    fn test_missing_ledger_metadata_is_fatal() {
        let (mut store, keeper) = setup();
        let mut ctx = Context::new(&mut store, 1);
        let address = Address::new([0x77; 20]);
        let record = ContractRecord::bank(&address, true, &BankContractMetadata::new("ibc/ghost")).unwrap();
        keeper.registry().put(&mut ctx, &address, &record).unwrap();

        let outcome = run(&keeper, &mut ctx, &address, &call(BankMethod::Name, &[]), PLENTY);
        assert_eq!(
            outcome,
            CallOutcome::error("bank denom metadata not found for ibc/ghost")
        );
    }

    #[test]
    fn test_decimals_overflow_reverts() {
        let (mut store, keeper) = setup();
        let mut ctx = Context::new(&mut store, 1);
        let contract = testutil::deploy(&keeper, &mut ctx, "ibc/uatom", 6);

        // ledger metadata changed after deployment
        testutil::set_metadata(&keeper, &mut ctx, "ibc/uatom", 300);
        let outcome = run(&keeper, &mut ctx, &contract, &call(BankMethod::Decimals, &[]), PLENTY);
        assert_eq!(revert_reason(&outcome), "decimals overflow 300");
        assert_eq!(gas_used(&outcome), 85);
    }

    /// Ledger whose transfers always fail
    struct FailingBank(StoreBank);

    impl BankKeeper for FailingBank {
        fn get_balance(&self, ctx: &Context, address: &Address, denom: &str) -> BigInt {
            self.0.get_balance(ctx, address, denom)
        }

        fn get_supply(&self, ctx: &Context, denom: &str) -> BigInt {
            self.0.get_supply(ctx, denom)
        }

        fn send_coins(&self, _: &mut Context, _: &Address, _: &Address, coin: &Coin) -> Result<(), HostError> {
            Err(HostError::SendDisabled(coin.denom.clone()))
        }

        fn is_send_enabled(&self, ctx: &Context, denom: &str) -> bool {
            self.0.is_send_enabled(ctx, denom)
        }

        fn is_blocked(&self, address: &Address) -> bool {
            self.0.is_blocked(address)
        }

        fn get_denom_metadata(&self, ctx: &Context, denom: &str) -> Option<DenomMetadata> {
            self.0.get_denom_metadata(ctx, denom)
        }

        fn iterate_denom_metadata(&self, ctx: &Context, visitor: &mut dyn FnMut(&DenomMetadata) -> bool) {
            self.0.iterate_denom_metadata(ctx, visitor)
        }
    }

    fn setup_with_bank<B: BankKeeper>(bank: B) -> (MemStore, Keeper<B, StoreAccounts, StoreEvm>) {
        let (store, keeper) = setup();
        let keeper = Keeper::new(bank, keeper.accounts, keeper.evm, keeper.config);
        (store, keeper)
    }

    #[test]
    fn test_failed_ledger_transfer_costs_full_gas() {
        let (mut store, keeper) = setup();
        let contract = {
            let mut ctx = Context::new(&mut store, 1);
            let contract = testutil::deploy(&keeper, &mut ctx, "ibc/uatom", 6);
            testutil::fund(&keeper, &mut ctx, &SENDER, "ibc/uatom", 10);
            contract
        };

        let failing = Keeper::new(
            FailingBank(StoreBank::new()),
            StoreAccounts::new(),
            StoreEvm::new(),
            keeper.config().clone(),
        );
        let mut ctx = Context::new(&mut store, 2);
        let record = failing.get_contract(&ctx, &contract).unwrap().unwrap();
        let outcome = failing.dispatch(
            &mut ctx,
            &SENDER,
            &record,
            &transfer_input(&Address::new([0x33; 20]), 5),
            PLENTY,
            &BigInt::from(0),
        );

        assert!(revert_reason(&outcome).starts_with("failed to transfer: "));
        assert_eq!(gas_used(&outcome), 13_700);
        assert!(ctx.logs().is_empty());
        assert_eq!(
            failing.bank().get_balance(&ctx, &SENDER, "ibc/uatom"),
            BigInt::from(10)
        );
    }
}
