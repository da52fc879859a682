//! Coins and ledger denom metadata
//!
//! Amounts are arbitrary-precision signed integers, matching the ledger's
//! integer type. Denom metadata follows the bank module's layout
//! (base, display, units with exponents) and its validation rules.

use num_bigint::BigInt;
use num_traits::Signed;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// Minimum length of a denom
const MIN_DENOM_LENGTH: usize = 3;

/// Maximum length of a denom
const MAX_DENOM_LENGTH: usize = 128;

/// Coin and metadata validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoinError {
    #[error("invalid denom: {0}")]
    InvalidDenom(String),
    #[error("negative coin amount: {0}")]
    NegativeAmount(BigInt),
    #[error("name field cannot be blank")]
    BlankName,
    #[error("symbol field cannot be blank")]
    BlankSymbol,
    #[error("metadata's first denomination unit must be the one with base denom '{0}'")]
    FirstUnitNotBase(String),
    #[error("the exponent for base denomination unit {0} must be 0")]
    BaseExponentNotZero(String),
    #[error("the denomination units must be sorted in ascending order by exponent")]
    UnitsNotSorted,
    #[error("duplicate denomination unit {0}")]
    DuplicateUnit(String),
    #[error("metadata must contain a denomination unit with display denom '{0}'")]
    MissingDisplayUnit(String),
}

/// Check a denom against `[a-zA-Z][a-zA-Z0-9/:._-]{2,127}`.
pub fn validate_denom(denom: &str) -> Result<(), CoinError> {
    let len = denom.len();
    let mut chars = denom.chars();
    let first_ok = chars.next().map_or(false, |c| c.is_ascii_alphabetic());
    let rest_ok = chars.all(|c| c.is_ascii_alphanumeric() || "/:._-".contains(c));

    if !(MIN_DENOM_LENGTH..=MAX_DENOM_LENGTH).contains(&len) || !first_ok || !rest_ok {
        return Err(CoinError::InvalidDenom(denom.to_string()));
    }
    Ok(())
}

/// An amount of a single denom
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coin {
    pub denom: String,
    #[serde(with = "amount_serde")]
    pub amount: BigInt,
}

impl Coin {
    /// Create a coin, rejecting invalid denoms and negative amounts
    pub fn new(denom: impl Into<String>, amount: BigInt) -> Result<Self, CoinError> {
        let denom = denom.into();
        validate_denom(&denom)?;
        if amount.is_negative() {
            return Err(CoinError::NegativeAmount(amount));
        }
        Ok(Self { denom, amount })
    }
}

/// One unit of a denom, e.g. `uatom` with exponent 0 or `atom` with exponent 6
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DenomUnit {
    pub denom: String,
    pub exponent: u32,
    #[serde(default)]
    pub aliases: Vec<String>,
}

/// Ledger-side metadata of a denom
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DenomMetadata {
    #[serde(default)]
    pub description: String,
    pub denom_units: Vec<DenomUnit>,
    /// Smallest unit, the ledger's canonical identifier
    pub base: String,
    /// Unit clients should display
    pub display: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub symbol: String,
}

impl DenomMetadata {
    /// Metadata with the base unit and one display unit named after `base`
    /// without its first letter, e.g. `uatom` → `ATOM`
    pub fn with_display_unit(base: &str, decimals: u32) -> Self {
        let display = base.get(1..).unwrap_or_default().to_uppercase();
        DenomMetadata {
            description: String::new(),
            denom_units: vec![
                DenomUnit {
                    denom: base.to_string(),
                    exponent: 0,
                    aliases: vec![],
                },
                DenomUnit {
                    denom: display.clone(),
                    exponent: decimals,
                    aliases: vec![],
                },
            ],
            base: base.to_string(),
            display: display.clone(),
            name: display.clone(),
            symbol: display,
        }
    }

    /// Validate the metadata the same way the bank module does on write
    pub fn validate(&self) -> Result<(), CoinError> {
        if self.name.trim().is_empty() {
            return Err(CoinError::BlankName);
        }
        if self.symbol.trim().is_empty() {
            return Err(CoinError::BlankSymbol);
        }

        validate_denom(&self.base)?;
        validate_denom(&self.display)?;

        let mut has_display = false;
        let mut current_exponent = 0u32;
        let mut seen = HashSet::new();

        for (i, unit) in self.denom_units.iter().enumerate() {
            if i == 0 {
                if unit.denom != self.base {
                    return Err(CoinError::FirstUnitNotBase(self.base.clone()));
                }
                if unit.exponent != 0 {
                    return Err(CoinError::BaseExponentNotZero(unit.denom.clone()));
                }
            } else if current_exponent >= unit.exponent {
                return Err(CoinError::UnitsNotSorted);
            }
            current_exponent = unit.exponent;

            if !seen.insert(unit.denom.as_str()) {
                return Err(CoinError::DuplicateUnit(unit.denom.clone()));
            }
            if unit.denom == self.display {
                has_display = true;
            }

            validate_denom(&unit.denom)?;
            for alias in &unit.aliases {
                if !seen.insert(alias.as_str()) {
                    return Err(CoinError::DuplicateUnit(alias.clone()));
                }
            }
        }

        if !has_display {
            return Err(CoinError::MissingDisplayUnit(self.display.clone()));
        }

        Ok(())
    }
}

/// Serialize amounts as decimal strings so they survive JSON intact
pub mod amount_serde {
    use num_bigint::BigInt;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(amount: &BigInt, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&amount.to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<BigInt, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
