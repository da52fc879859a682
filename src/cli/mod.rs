//! Sandbox CLI
//!
//! Command handlers for the `vfc` binary. State is a single persisted
//! snapshot of the key-value store, loaded for every command.

pub mod commands;

pub use commands::*;
