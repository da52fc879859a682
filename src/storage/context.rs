//! Execution context
//!
//! A `Context` bundles the state store of one state transition with the
//! block height and the events and EVM logs it has produced so far.
//! `branch` runs a closure against a copy-on-write child context and only
//! folds the child's writes, events and logs back in when it returns `Ok`.

use crate::core::Address;
use crate::storage::cache::CacheStore;
use crate::storage::kv::KvStore;
use serde::{Deserialize, Serialize};

/// Chain event with string attributes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub kind: String,
    pub attributes: Vec<(String, String)>,
}

impl Event {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            attributes: Vec::new(),
        }
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((key.into(), value.into()));
        self
    }

    /// First value for `key`, if any
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// EVM log entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Log {
    pub address: Address,
    pub topics: Vec<[u8; 32]>,
    pub data: Vec<u8>,
    pub block_number: u64,
}

/// State, height and side effects of one state transition
pub struct Context<'a> {
    store: &'a mut dyn KvStore,
    block_height: u64,
    events: Vec<Event>,
    logs: Vec<Log>,
}

impl<'a> Context<'a> {
    pub fn new(store: &'a mut dyn KvStore, block_height: u64) -> Self {
        Self {
            store,
            block_height,
            events: Vec::new(),
            logs: Vec::new(),
        }
    }

    pub fn block_height(&self) -> u64 {
        self.block_height
    }

    /// Genesis is built at height zero, before the EVM can execute
    pub fn is_genesis(&self) -> bool {
        self.block_height == 0
    }

    pub fn store(&self) -> &dyn KvStore {
        &*self.store
    }

    pub fn store_mut(&mut self) -> &mut dyn KvStore {
        &mut *self.store
    }

    pub fn emit_event(&mut self, event: Event) {
        self.events.push(event);
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn add_log(&mut self, log: Log) {
        self.logs.push(log);
    }

    pub fn logs(&self) -> &[Log] {
        &self.logs
    }

    /// Hand the collected events and logs to the caller
    pub fn into_effects(self) -> (Vec<Event>, Vec<Log>) {
        (self.events, self.logs)
    }

    /// Run `f` against a branch of this context.
    ///
    /// On `Ok` the branch's writes, events and logs are committed into this
    /// context; on `Err` all of them are discarded.
    pub fn branch<T, E>(
        &mut self,
        f: impl FnOnce(&mut Context<'_>) -> Result<T, E>,
    ) -> Result<T, E> {
        let block_height = self.block_height;
        let mut cache = CacheStore::new(&mut *self.store);

        let mut child = Context::new(&mut cache, block_height);
        let result = f(&mut child);
        let (events, logs) = child.into_effects();

        match result {
            Ok(value) => {
                cache.commit();
                self.events.extend(events);
                self.logs.extend(logs);
                Ok(value)
            }
            Err(err) => Err(err),
        }
    }
}
