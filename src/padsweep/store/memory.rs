use super::KeyValueStore;
use crate::error::Result;
use crate::keys::pattern_matches;
use serde_json::Value;
use std::collections::BTreeMap;

/// In-memory store for testing and development.
/// Does NOT persist data. BTreeMap keeps `find_keys` order deterministic.
#[derive(Default)]
pub struct InMemoryStore {
    records: BTreeMap<String, Value>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for InMemoryStore {
    fn init(&mut self) -> Result<()> {
        Ok(())
    }

    fn get(&self, key: &str) -> Result<Option<Value>> {
        Ok(self.records.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: Value) -> Result<()> {
        self.records.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.records.remove(key);
        Ok(())
    }

    fn find_keys(&self, pattern: &str) -> Result<Vec<String>> {
        Ok(self
            .records
            .keys()
            .filter(|k| pattern_matches(pattern, k))
            .cloned()
            .collect())
    }

    fn shutdown(&mut self) -> Result<()> {
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::keys;
    use serde_json::json;

    /// Builder over an [`InMemoryStore`] that plants the record families the
    /// sweeps care about, in the shapes the application layer writes them.
    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_conf_allow_etherpads(mut self, allowed: bool) -> Self {
            self.store
                .set(keys::ALLOW_ETHERPADS_CONF, json!(allowed))
                .unwrap();
            self
        }

        pub fn with_group(mut self, gid: &str, pad_ids: &[&str]) -> Self {
            self.store
                .set(
                    &format!("mypads:group:{}", gid),
                    json!({ "name": gid, "pads": pad_ids }),
                )
                .unwrap();
            self
        }

        /// A fully live pad: claimed by MyPads, with host record, two
        /// revisions, one chat line, and both alias halves.
        pub fn with_live_pad(self, pid: &str, roid: &str) -> Self {
            self.with_claimed_pad(pid).with_pad_records(pid, roid)
        }

        /// Only the `mypads:pad:` claim record.
        pub fn with_claimed_pad(mut self, pid: &str) -> Self {
            self.store
                .set(&keys::mypads_pad_key(pid), json!({ "name": pid }))
                .unwrap();
            self
        }

        /// Host-side records without the MyPads claim: what a half-finished
        /// deletion leaves behind.
        pub fn with_pad_records(mut self, pid: &str, roid: &str) -> Self {
            self.store
                .set(&keys::pad_key(pid), json!({ "atext": "text" }))
                .unwrap();
            self.store
                .set(&format!("pad:{}:revs:0", pid), json!({ "changeset": "Z:1" }))
                .unwrap();
            self.store
                .set(&format!("pad:{}:revs:1", pid), json!({ "changeset": "Z:2" }))
                .unwrap();
            self.store
                .set(&format!("pad:{}:chat:0", pid), json!({ "text": "hello" }))
                .unwrap();
            self.store
                .set(&keys::pad_to_readonly_key(pid), json!(roid))
                .unwrap();
            self.store
                .set(&keys::readonly_to_pad_key(roid), json!(pid))
                .unwrap();
            self
        }

        pub fn with_deletion_job(mut self, pid: &str) -> Self {
            self.store.set(&keys::job_key(pid), json!(1)).unwrap();
            self
        }
    }

    /// Every store operation a sweep performs, for asserting non-mutation.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum StoreOp {
        Get(String),
        Set(String),
        Remove(String),
        FindKeys(String),
    }

    /// Wraps a store and logs each call, so tests can prove a dry run or a
    /// safety refusal issued no writes. The log lives in a `RefCell` because
    /// reads come through `&self`.
    pub struct RecordingStore<S: KeyValueStore> {
        pub inner: S,
        ops: std::cell::RefCell<Vec<StoreOp>>,
    }

    impl<S: KeyValueStore> RecordingStore<S> {
        pub fn new(inner: S) -> Self {
            Self {
                inner,
                ops: std::cell::RefCell::new(Vec::new()),
            }
        }

        pub fn ops(&self) -> Vec<StoreOp> {
            self.ops.borrow().clone()
        }

        pub fn mutations(&self) -> Vec<StoreOp> {
            self.ops
                .borrow()
                .iter()
                .filter(|op| matches!(op, StoreOp::Set(_) | StoreOp::Remove(_)))
                .cloned()
                .collect()
        }

        pub fn find_keys_calls(&self) -> usize {
            self.ops
                .borrow()
                .iter()
                .filter(|op| matches!(op, StoreOp::FindKeys(_)))
                .count()
        }
    }

    impl<S: KeyValueStore> KeyValueStore for RecordingStore<S> {
        fn init(&mut self) -> Result<()> {
            self.inner.init()
        }

        fn get(&self, key: &str) -> Result<Option<Value>> {
            self.ops.borrow_mut().push(StoreOp::Get(key.to_string()));
            self.inner.get(key)
        }

        fn set(&mut self, key: &str, value: Value) -> Result<()> {
            self.ops.borrow_mut().push(StoreOp::Set(key.to_string()));
            self.inner.set(key, value)
        }

        fn remove(&mut self, key: &str) -> Result<()> {
            self.ops.borrow_mut().push(StoreOp::Remove(key.to_string()));
            self.inner.remove(key)
        }

        fn find_keys(&self, pattern: &str) -> Result<Vec<String>> {
            self.ops
                .borrow_mut()
                .push(StoreOp::FindKeys(pattern.to_string()));
            self.inner.find_keys(pattern)
        }

        fn shutdown(&mut self) -> Result<()> {
            self.inner.shutdown()
        }
    }
}
