//! Cryptographic utilities
//!
//! This module provides:
//! - SHA-256 and Keccak-256 hashing
//! - Module-account and contract-creation address derivation

pub mod hash;

pub use hash::{create_address, keccak256, keccak256_hex, module_address, sha256, sha256_hex};
