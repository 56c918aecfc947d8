//! Cascade deletion of everything that exists only because a pad exists.
//!
//! Order matters and is fixed: alias halves first, then the host pad record,
//! then its revision and chat families. Aliases go before the thing they
//! alias so that an interrupted run never leaves a resolvable alias pointing
//! at records a later run can no longer find. Every step is
//! remove-if-present, which is what makes reruns safe.

use crate::error::Result;
use crate::keys;
use crate::store::KeyValueStore;
use serde_json::Value;

/// Remove the full dependent record set of `pad_id`:
///
/// 1. `readonly2pad:<roid>`
/// 2. `pad2readonly:<pid>`
/// 3. `pad:<pid>`
/// 4. all `pad:<pid>:revs:*`
/// 5. all `pad:<pid>:chat:*`
///
/// The caller may already know the readonly id (the orphan sweep reaches the
/// pad through it); otherwise it is looked up via `pad2readonly:<pid>`. A
/// missing alias is not an error, the pair may have been half-erased already.
pub fn delete_pad_records<S: KeyValueStore>(
    store: &mut S,
    pad_id: &str,
    readonly_id: Option<&str>,
) -> Result<()> {
    let readonly_id = match readonly_id {
        Some(roid) => Some(roid.to_string()),
        None => lookup_readonly_id(store, pad_id)?,
    };

    if let Some(roid) = readonly_id {
        store.remove(&keys::readonly_to_pad_key(&roid))?;
    }
    store.remove(&keys::pad_to_readonly_key(pad_id))?;
    store.remove(&keys::pad_key(pad_id))?;

    for key in store.find_keys(&keys::revs_pattern(pad_id))? {
        store.remove(&key)?;
    }
    for key in store.find_keys(&keys::chat_pattern(pad_id))? {
        store.remove(&key)?;
    }

    Ok(())
}

fn lookup_readonly_id<S: KeyValueStore>(store: &S, pad_id: &str) -> Result<Option<String>> {
    Ok(store
        .get(&keys::pad_to_readonly_key(pad_id))?
        .and_then(|v| match v {
            Value::String(roid) => Some(roid),
            _ => None,
        }))
}
