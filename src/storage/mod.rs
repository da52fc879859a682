//! Branchable state storage
//!
//! - `KvStore` / `MemStore`: ordered key-value state
//! - `CacheStore`: copy-on-write branch with explicit commit
//! - `Context`: one state transition's store, height, events and logs
//! - Snapshot persistence for the sandbox CLI

pub mod cache;
pub mod context;
pub mod kv;
pub mod persistence;

pub use cache::CacheStore;
pub use context::{Context, Event, Log};
pub use kv::{KvStore, MemStore};
pub use persistence::{
    load_from_file, save_to_file, ChainSnapshot, Storage, StorageConfig, StorageError,
};
