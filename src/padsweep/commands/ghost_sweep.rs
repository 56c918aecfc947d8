//! Ghost-pad-in-group sweep: drop pad ids from group records when no
//! `mypads:pad:` record backs them anymore.
//!
//! This sweep only edits the reference lists. It never deletes pad records
//! or their dependents; a group may reference pads owned elsewhere, so the
//! orphan sweep and the job queue are the only paths that erase pad data.

use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, SweepError};
use crate::keys;
use crate::model::Group;
use crate::store::KeyValueStore;

pub fn run<S: KeyValueStore>(store: &mut S, dry_run: bool) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let group_keys = store.find_keys(&keys::group_pattern())?;
    result.add_message(CmdMessage::info(format!(
        "Scanning {} group(s)",
        group_keys.len()
    )));

    for group_key in group_keys {
        let raw = store
            .get(&group_key)?
            .ok_or_else(|| SweepError::Store(format!("{} vanished mid-scan", group_key)))?;
        let Some(mut group) = Group::from_value(&raw) else {
            result.add_message(CmdMessage::warning(format!(
                "Skipping {}: not a group record",
                group_key
            )));
            continue;
        };

        if group.pads.is_empty() {
            continue;
        }

        // Existence is probed the way the application probes it: a findKeys
        // on the exact key, non-empty means the pad is claimed.
        let mut kept = Vec::with_capacity(group.pads.len());
        for pad_id in &group.pads {
            result.checked += 1;
            if !store.find_keys(&keys::mypads_pad_key(pad_id))?.is_empty() {
                kept.push(pad_id.clone());
            }
        }

        let dangling = group.pads.len() - kept.len();
        if dangling == 0 {
            continue;
        }

        result.removed += dangling;
        result.add_message(CmdMessage::success(format!(
            "{}: {} dangling pad reference(s){}",
            group_key,
            dangling,
            if dry_run { " (dry run, not removed)" } else { " removed" }
        )));

        if !dry_run {
            group.pads = kept;
            store.set(&group_key, group.to_value())?;
        }
    }

    Ok(result)
}
