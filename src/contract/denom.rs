//! Ledger metadata to ERC-20 view

use crate::core::DenomMetadata;
use serde::{Deserialize, Serialize};

/// Token facts a contract-call client expects, derived from ledger metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedTokenView {
    pub min_denom: String,
    /// Largest exponent among the declared units
    pub decimals: u32,
    /// Display label, falling back to the long name
    pub name: String,
    pub symbol: String,
}

impl DerivedTokenView {
    /// Decimals as the single byte ERC-20 returns, if they fit
    pub fn decimals_u8(&self) -> Option<u8> {
        u8::try_from(self.decimals).ok()
    }
}

/// Build the token view of `metadata`.
///
/// The view is always produced, even for metadata the ledger itself would
/// reject; the second value tells whether validation passed.
pub fn derive_token_view(metadata: &DenomMetadata) -> (DerivedTokenView, bool) {
    let passed_validation = metadata.validate().is_ok();

    let decimals = metadata
        .denom_units
        .iter()
        .map(|unit| unit.exponent)
        .max()
        .unwrap_or(0);

    let name = if metadata.display.is_empty() {
        metadata.name.clone()
    } else {
        metadata.display.clone()
    };

    let view = DerivedTokenView {
        min_denom: metadata.base.clone(),
        decimals,
        name,
        symbol: metadata.symbol.clone(),
    };
    (view, passed_validation)
}
