//! # API Facade
//!
//! Thin entry point over the command layer, generic over the storage
//! backend. Its one real responsibility beyond dispatch is the store
//! lifecycle: [`SweepApi::open`] runs `init` before handing the facade out,
//! and [`SweepApi::close`] consumes it and runs `shutdown`, so a caller
//! cannot issue an operation against an unopened store or shut down twice.

use crate::commands;
use crate::commands::drain_queue::DrainOptions;
use crate::error::Result;
use crate::store::KeyValueStore;
use std::sync::atomic::AtomicBool;

pub struct SweepApi<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> SweepApi<S> {
    /// Open the store and wrap it.
    pub fn open(mut store: S) -> Result<Self> {
        store.init()?;
        Ok(Self { store })
    }

    pub fn ghost_sweep(&mut self, dry_run: bool) -> Result<commands::CmdResult> {
        commands::ghost_sweep::run(&mut self.store, dry_run)
    }

    pub fn orphan_sweep(&mut self, dry_run: bool) -> Result<commands::CmdResult> {
        commands::orphan_sweep::run(&mut self.store, dry_run)
    }

    pub fn drain_queue<F: FnMut(&commands::CmdResult)>(
        &mut self,
        opts: &DrainOptions,
        cancelled: &AtomicBool,
        on_batch: F,
    ) -> Result<commands::CmdResult> {
        commands::drain_queue::run(&mut self.store, opts, cancelled, on_batch)
    }

    /// Shut the store down. Consumes the facade; must run on every exit
    /// path, including after a failed sweep.
    pub fn close(mut self) -> Result<()> {
        self.store.shutdown()
    }
}

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};
