//! Bank contract methods
//!
//! Two independent static tables: selector to method, and method to gas.
//! Selectors come from the `sol!` declarations in [`crate::contract::abi`].

use crate::contract::abi::IERC20;
use alloy_sol_types::SolCall;

/// ERC-20 methods a bank contract recognises
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BankMethod {
    Name,
    Symbol,
    Decimals,
    TotalSupply,
    BalanceOf,
    Transfer,
    Approve,
    TransferFrom,
    Allowance,
}

/// Selector table
pub const SELECTORS: [([u8; 4], BankMethod); 9] = [
    (IERC20::nameCall::SELECTOR, BankMethod::Name),
    (IERC20::symbolCall::SELECTOR, BankMethod::Symbol),
    (IERC20::decimalsCall::SELECTOR, BankMethod::Decimals),
    (IERC20::totalSupplyCall::SELECTOR, BankMethod::TotalSupply),
    (IERC20::balanceOfCall::SELECTOR, BankMethod::BalanceOf),
    (IERC20::transferCall::SELECTOR, BankMethod::Transfer),
    (IERC20::approveCall::SELECTOR, BankMethod::Approve),
    (IERC20::transferFromCall::SELECTOR, BankMethod::TransferFrom),
    (IERC20::allowanceCall::SELECTOR, BankMethod::Allowance),
];

/// Gas charged by one operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpGas {
    /// Charged on success
    pub full: u64,
    /// Charged when a precondition fails
    pub revert: u64,
}

impl OpGas {
    const fn quartered(full: u64) -> Self {
        Self {
            full,
            revert: full / 4,
        }
    }

    const fn flat(cost: u64) -> Self {
        Self {
            full: cost,
            revert: cost,
        }
    }
}

/// Gas table
pub const GAS: [(BankMethod, OpGas); 9] = [
    (BankMethod::Name, OpGas::quartered(3400)),
    (BankMethod::Symbol, OpGas::quartered(3400)),
    (BankMethod::Decimals, OpGas::quartered(340)),
    (BankMethod::TotalSupply, OpGas::quartered(2400)),
    (BankMethod::BalanceOf, OpGas::quartered(2800)),
    (BankMethod::Transfer, OpGas::quartered(13700)),
    (BankMethod::Approve, OpGas::flat(100)),
    (BankMethod::TransferFrom, OpGas::flat(100)),
    (BankMethod::Allowance, OpGas::flat(100)),
];

impl BankMethod {
    /// Look up the method named by the first four bytes of `input`
    pub fn from_input(input: &[u8]) -> Option<Self> {
        let sel = input.get(..4)?;
        SELECTORS
            .iter()
            .find(|(selector, _)| selector[..] == *sel)
            .map(|(_, method)| *method)
    }

    pub fn selector(&self) -> [u8; 4] {
        SELECTORS
            .iter()
            .find(|(_, method)| method == self)
            .map(|(selector, _)| *selector)
            .unwrap_or_default()
    }

    pub fn gas(&self) -> OpGas {
        GAS.iter()
            .find(|(method, _)| method == self)
            .map(|(_, gas)| *gas)
            .unwrap_or(OpGas::flat(0))
    }

    pub fn signature(&self) -> &'static str {
        match self {
            BankMethod::Name => IERC20::nameCall::SIGNATURE,
            BankMethod::Symbol => IERC20::symbolCall::SIGNATURE,
            BankMethod::Decimals => IERC20::decimalsCall::SIGNATURE,
            BankMethod::TotalSupply => IERC20::totalSupplyCall::SIGNATURE,
            BankMethod::BalanceOf => IERC20::balanceOfCall::SIGNATURE,
            BankMethod::Transfer => IERC20::transferCall::SIGNATURE,
            BankMethod::Approve => IERC20::approveCall::SIGNATURE,
            BankMethod::TransferFrom => IERC20::transferFromCall::SIGNATURE,
            BankMethod::Allowance => IERC20::allowanceCall::SIGNATURE,
        }
    }

    /// Exact call data length: selector plus one word per static argument
    pub fn input_len(&self) -> usize {
        match self {
            BankMethod::Name | BankMethod::Symbol | BankMethod::Decimals | BankMethod::TotalSupply => 4,
            BankMethod::BalanceOf => 4 + 32,
            BankMethod::Transfer | BankMethod::Approve | BankMethod::Allowance => 4 + 64,
            BankMethod::TransferFrom => 4 + 96,
        }
    }

    /// approve, transferFrom and allowance always revert
    pub fn is_supported(&self) -> bool {
        !matches!(
            self,
            BankMethod::Approve | BankMethod::TransferFrom | BankMethod::Allowance
        )
    }
}
