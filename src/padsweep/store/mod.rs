//! # Storage Layer
//!
//! The sweeps run against whatever key-value engine the host editor uses.
//! That engine is not implemented here; it is consumed through the narrow
//! [`KeyValueStore`] trait, which mirrors the semantics the host's DB module
//! actually provides:
//!
//! - point `get`/`set`/`remove`, where an absent key reads as `None` and
//!   removing an absent key is not an error
//! - `find_keys`, a glob-style key enumeration with `*` as the only wildcard
//! - an explicit `init`/`shutdown` lifecycle: `init` before any operation,
//!   `shutdown` exactly once per process run, on every exit path
//!
//! There is no multi-key atomicity anywhere in this contract. The sweeps are
//! written to survive that: every cascade step is remove-if-present, so an
//! interrupted run is finished by the next one.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production backend, a single JSON object file in the
//!   dirty-db style (key -> value), write-through on mutation
//! - [`memory::InMemoryStore`]: in-memory backend for tests, with fixture
//!   builders and an operation-recording wrapper

use crate::error::Result;
use serde_json::Value;

pub mod fs;
pub mod memory;

/// Abstract interface over the shared key-value store.
pub trait KeyValueStore {
    /// Open the store. Must be called before any other operation.
    fn init(&mut self) -> Result<()>;

    /// Point lookup. `None` signals "no record".
    fn get(&self, key: &str) -> Result<Option<Value>>;

    /// Create or overwrite a record.
    fn set(&mut self, key: &str, value: Value) -> Result<()>;

    /// Remove a record. Removing a non-existent key is not an error.
    fn remove(&mut self, key: &str) -> Result<()>;

    /// Enumerate keys matching a glob pattern (`*` wildcard). Returns an
    /// empty vec when nothing matches.
    fn find_keys(&self, pattern: &str) -> Result<Vec<String>>;

    /// Flush and close. Called exactly once per run.
    fn shutdown(&mut self) -> Result<()>;
}
