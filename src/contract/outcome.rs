//! Call outcomes and receipt settlement
//!
//! A `CallOutcome` is what one dispatch produced; `settle` turns it into
//! the receipt fields the EVM reports: status, return data and gas.

use crate::contract::abi;
use alloy_sol_types::SolValue;

/// Result of one dispatch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallOutcome {
    /// Consumes exactly `gas_used`
    Success { return_data: Vec<u8>, gas_used: u64 },
    /// Consumes the declared partial cost
    Revert { reason: String, gas_used: u64 },
    /// Consumes all offered gas
    OutOfGas,
    /// Unexpected failure; consumes all offered gas
    Error { message: String },
}

impl CallOutcome {
    pub fn success(return_data: Vec<u8>, gas_used: u64) -> Self {
        CallOutcome::Success {
            return_data,
            gas_used,
        }
    }

    /// Success returning an ABI-encoded `bool`
    pub fn success_bool(value: bool, gas_used: u64) -> Self {
        Self::success(value.abi_encode(), gas_used)
    }

    pub fn revert(reason: impl Into<String>, gas_used: u64) -> Self {
        CallOutcome::Revert {
            reason: reason.into(),
            gas_used,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        CallOutcome::Error {
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, CallOutcome::Success { .. })
    }

    /// Settle against the gas that was offered to the call
    pub fn settle(&self, gas_offered: u64) -> CallReceipt {
        let (success, reverted, return_data, gas_used, vm_error) = match self {
            CallOutcome::Success {
                return_data,
                gas_used,
            } => (true, false, return_data.clone(), *gas_used, None),
            CallOutcome::Revert { reason, gas_used } => (
                false,
                true,
                abi::encode_revert(reason),
                *gas_used,
                Some(VM_ERR_REVERTED.to_string()),
            ),
            CallOutcome::OutOfGas => (
                false,
                false,
                abi::encode_revert(VM_ERR_OUT_OF_GAS),
                gas_offered,
                Some(VM_ERR_OUT_OF_GAS.to_string()),
            ),
            CallOutcome::Error { message } => (
                false,
                false,
                abi::encode_revert(message),
                gas_offered,
                Some(message.clone()),
            ),
        };

        // dispatch only charges after a sufficiency check
        let gas_used = gas_used.min(gas_offered);
        CallReceipt {
            success,
            reverted,
            return_data,
            gas_used,
            gas_left: gas_offered - gas_used,
            vm_error,
        }
    }
}

pub const VM_ERR_REVERTED: &str = "execution reverted";
pub const VM_ERR_OUT_OF_GAS: &str = "out of gas";

/// Externally visible result of a call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallReceipt {
    pub success: bool,
    /// True only for reverts; other failures leave it false
    pub reverted: bool,
    /// Return value on success, `Error(string)` payload otherwise
    pub return_data: Vec<u8>,
    pub gas_used: u64,
    pub gas_left: u64,
    pub vm_error: Option<String>,
}

impl CallReceipt {
    /// Add intrinsic gas that was charged before dispatch
    pub fn with_intrinsic(mut self, intrinsic: u64) -> Self {
        self.gas_used += intrinsic;
        self
    }

    /// Decoded revert reason, if the call failed
    pub fn revert_reason(&self) -> Option<String> {
        if self.success {
            return None;
        }
        abi::decode_revert(&self.return_data).ok()
    }
}
