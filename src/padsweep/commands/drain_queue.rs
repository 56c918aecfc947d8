//! Deletion job-queue drain.
//!
//! The application layer enqueues work by writing a bare
//! `mypads:jobqueue:deletePad:<pid>` marker; this loop polls for markers and
//! performs the cascade, removing the marker only after every dependent
//! record is gone. Jobs run strictly sequentially. A store error aborts the
//! whole process: a stuck job blocks the queue until an operator looks at
//! it, which beats silently dropping or endlessly retrying it.

use crate::commands::cascade;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::keys;
use crate::store::KeyValueStore;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct DrainOptions {
    /// Process the current backlog once and return instead of looping.
    pub oneshot: bool,
    /// Sleep between polls when the queue is empty.
    pub idle_interval: Duration,
}

impl Default for DrainOptions {
    fn default() -> Self {
        Self {
            oneshot: false,
            idle_interval: Duration::from_millis(1000),
        }
    }
}

/// One poll cycle: enumerate pending jobs and process them in order.
pub fn process_backlog<S: KeyValueStore>(store: &mut S) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    for job_key in store.find_keys(&keys::job_pattern())? {
        let Some(pad_id) = keys::pad_id_from_job_key(&job_key) else {
            continue;
        };
        let pad_id = pad_id.to_string();

        result.checked += 1;
        cascade::delete_pad_records(store, &pad_id, None)?;

        // The marker goes last: if anything above failed we want the job to
        // still be visible to the next run.
        store.remove(&job_key)?;
        result.removed += 1;
        result.add_message(CmdMessage::success(format!("Deleted pad {}", pad_id)));
    }

    Ok(result)
}

/// The drain loop: poll, process, idle-backoff only after an empty poll.
///
/// `cancelled` is checked between poll cycles; setting it (typically from a
/// Ctrl-C handler) ends the loop after the batch in flight completes, so a
/// cascade is never abandoned halfway by the shutdown path itself.
/// `on_batch` fires after every productive batch; the CLI uses it for
/// progress output.
pub fn run<S, F>(
    store: &mut S,
    opts: &DrainOptions,
    cancelled: &AtomicBool,
    mut on_batch: F,
) -> Result<CmdResult>
where
    S: KeyValueStore,
    F: FnMut(&CmdResult),
{
    let mut total = CmdResult::default();

    loop {
        let batch = process_backlog(store)?;
        let productive = batch.checked > 0;
        if productive {
            on_batch(&batch);
        }
        total.checked += batch.checked;
        total.removed += batch.removed;

        if opts.oneshot {
            break;
        }
        if cancelled.load(Ordering::Relaxed) {
            break;
        }
        if !productive {
            std::thread::sleep(opts.idle_interval);
            if cancelled.load(Ordering::Relaxed) {
                break;
            }
        }
    }

    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::{RecordingStore, StoreFixture};

    fn opts_oneshot() -> DrainOptions {
        DrainOptions {
            oneshot: true,
            idle_interval: Duration::from_millis(1),
        }
    }

    #[test]
    fn oneshot_drains_job_and_marker() {
        let fixture = StoreFixture::new()
            .with_pad_records("42", "r.42")
            .with_deletion_job("42");
        let mut store = fixture.store;
        let cancelled = AtomicBool::new(false);

        let result = run(&mut store, &opts_oneshot(), &cancelled, |_| {}).unwrap();

        assert_eq!(result.removed, 1);
        assert!(store.get("mypads:jobqueue:deletePad:42").unwrap().is_none());
        assert_eq!(store.find_keys("pad:42*").unwrap(), Vec::<String>::new());
        assert!(store.get("readonly2pad:r.42").unwrap().is_none());
    }

    #[test]
    fn oneshot_on_empty_queue_does_nothing() {
        let mut store = RecordingStore::new(StoreFixture::new().store);
        let cancelled = AtomicBool::new(false);

        let result = run(&mut store, &opts_oneshot(), &cancelled, |_| {}).unwrap();

        assert_eq!(result.checked, 0);
        assert!(store.mutations().is_empty());
    }

    #[test]
    fn jobs_without_dependents_still_consume_the_marker() {
        let fixture = StoreFixture::new().with_deletion_job("already-gone");
        let mut store = fixture.store;

        let result = process_backlog(&mut store).unwrap();

        assert_eq!(result.removed, 1);
        assert!(store.find_keys("mypads:jobqueue:*").unwrap().is_empty());
    }

    #[test]
    fn batch_is_processed_in_key_order() {
        let fixture = StoreFixture::new()
            .with_pad_records("a", "r.a")
            .with_deletion_job("a")
            .with_pad_records("b", "r.b")
            .with_deletion_job("b");
        let mut store = fixture.store;

        let result = process_backlog(&mut store).unwrap();

        assert_eq!(result.checked, 2);
        assert_eq!(result.removed, 2);
        assert!(store.find_keys("pad:*").unwrap().is_empty());
    }

    #[test]
    fn pre_cancelled_loop_exits_after_one_poll() {
        let fixture = StoreFixture::new()
            .with_pad_records("a", "r.a")
            .with_deletion_job("a");
        let mut store = fixture.store;
        let cancelled = AtomicBool::new(true);

        let opts = DrainOptions {
            oneshot: false,
            idle_interval: Duration::from_millis(1),
        };
        let mut batches = 0;
        let result = run(&mut store, &opts, &cancelled, |_| batches += 1).unwrap();

        // The batch already in flight completes before the loop honours the
        // cancellation.
        assert_eq!(result.removed, 1);
        assert_eq!(batches, 1);
    }
}
