//! ERC-20 ABI bindings of the bank contract
//!
//! The interface, the `Transfer` event and the template constructor are
//! declared once with `sol!`; call data, return words and `Error(string)`
//! payloads all go through `alloy-sol-types`. Ledger amounts are `BigInt`,
//! so this module also converts them to and from `uint256`.

use alloy_primitives::U256;
use alloy_sol_types::{sol, Revert, SolConstructor, SolError, SolEvent, SolValue};
use num_bigint::{BigInt, Sign};
use num_traits::Signed;
use thiserror::Error;

sol! {
    /// ERC-20 surface answered by every bank contract
    interface IERC20 {
        event Transfer(address indexed from, address indexed to, uint256 value);

        function name() external view returns (string);
        function symbol() external view returns (string);
        function decimals() external view returns (uint8);
        function totalSupply() external view returns (uint256);
        function balanceOf(address account) external view returns (uint256);
        function transfer(address to, uint256 amount) external returns (bool);
        function approve(address spender, uint256 amount) external returns (bool);
        function transferFrom(address from, address to, uint256 amount) external returns (bool);
        function allowance(address owner, address spender) external view returns (uint256);
    }

    /// Template deployed at every bank contract address
    contract VirtualFrontierBankContract {
        constructor(string name, string symbol, uint8 decimals);
    }
}

pub use IERC20::IERC20Calls;

/// Selector of `Error(string)`
pub const REVERT_SELECTOR: [u8; 4] = Revert::SELECTOR;

/// ABI codec errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AbiError {
    #[error("value does not fit uint256: {0}")]
    Overflow(BigInt),
    #[error("negative value for unsigned type: {0}")]
    Negative(BigInt),
    #[error("abi decoding failed: {0}")]
    Decode(String),
    #[error("missing Error(string) selector")]
    NotRevert,
}

impl From<alloy_sol_types::Error> for AbiError {
    fn from(err: alloy_sol_types::Error) -> Self {
        AbiError::Decode(err.to_string())
    }
}

/// Topic of `Transfer(address,address,uint256)`
pub fn transfer_event_topic() -> [u8; 32] {
    IERC20::Transfer::SIGNATURE_HASH.0
}

/// Ledger amount as a `uint256`
pub fn to_u256(value: &BigInt) -> Result<U256, AbiError> {
    if value.is_negative() {
        return Err(AbiError::Negative(value.clone()));
    }
    let (_, bytes) = value.to_bytes_be();
    U256::try_from_be_slice(&bytes).ok_or_else(|| AbiError::Overflow(value.clone()))
}

pub fn from_u256(value: U256) -> BigInt {
    BigInt::from_bytes_be(Sign::Plus, &value.to_be_bytes::<32>())
}

/// Single `uint256` return word
pub fn encode_uint256(value: &BigInt) -> Result<Vec<u8>, AbiError> {
    Ok(to_u256(value)?.abi_encode())
}

pub fn decode_uint256(data: &[u8]) -> Result<BigInt, AbiError> {
    Ok(from_u256(U256::abi_decode(data)?))
}

pub fn decode_string(data: &[u8]) -> Result<String, AbiError> {
    Ok(String::abi_decode(data)?)
}

/// Arguments of the bank contract constructor
pub fn encode_constructor_args(name: &str, symbol: &str, decimals: u8) -> Vec<u8> {
    VirtualFrontierBankContract::constructorCall {
        name: name.to_string(),
        symbol: symbol.to_string(),
        decimals,
    }
    .abi_encode()
}

/// `Error(string)` payload carried by failed calls
pub fn encode_revert(reason: &str) -> Vec<u8> {
    Revert {
        reason: reason.to_string(),
    }
    .abi_encode()
}

/// Reason string of an `Error(string)` payload
pub fn decode_revert(data: &[u8]) -> Result<String, AbiError> {
    if !data.starts_with(&REVERT_SELECTOR) {
        return Err(AbiError::NotRevert);
    }
    Ok(Revert::abi_decode(data)?.reason)
}
