//! Orphan cascade sweep: find pads still reachable through a
//! `readonly2pad:` alias whose `mypads:pad:` claim record is gone, and erase
//! their whole dependent record set.

use crate::commands::cascade;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, SweepError};
use crate::keys;
use crate::store::KeyValueStore;
use serde_json::Value;

pub fn run<S: KeyValueStore>(store: &mut S, dry_run: bool) -> Result<CmdResult> {
    // When the host allows anonymous pads, a pad without a mypads:pad record
    // is expected, not an orphan. Running under that configuration would
    // destroy live pads, so anything other than a strict `false` refuses.
    match store.get(keys::ALLOW_ETHERPADS_CONF)? {
        Some(Value::Bool(false)) => {}
        _ => return Err(SweepError::AnonymousPadsAllowed),
    }

    let mut result = CmdResult::default();

    let alias_keys = store.find_keys(&keys::readonly_pattern())?;
    result.add_message(CmdMessage::info(format!(
        "Scanning {} readonly alias(es)",
        alias_keys.len()
    )));

    for alias_key in alias_keys {
        result.checked += 1;

        let Some(roid) = keys::readonly_id_from_key(&alias_key) else {
            continue;
        };
        let roid = roid.to_string();

        let pad_id = match store.get(&alias_key)? {
            Some(Value::String(pid)) => pid,
            _ => {
                result.add_message(CmdMessage::warning(format!(
                    "Skipping {}: value is not a pad id",
                    alias_key
                )));
                continue;
            }
        };

        // The claim record is the single source of truth for "alive".
        if store.get(&keys::mypads_pad_key(&pad_id))?.is_some() {
            continue;
        }

        result.removed += 1;
        result.add_message(CmdMessage::success(format!(
            "Orphaned pad {} (readonly {}){}",
            pad_id,
            roid,
            if dry_run { " (dry run, kept)" } else { " erased" }
        )));

        if !dry_run {
            cascade::delete_pad_records(store, &pad_id, Some(&roid))?;
        }
    }

    Ok(result)
}
