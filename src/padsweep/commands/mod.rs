//! # Command Layer
//!
//! One module per sweep, all pure business logic: each `run` takes a
//! `&mut S: KeyValueStore`, walks the namespace sequentially (one store
//! operation in flight at a time), and returns a [`CmdResult`] with tallies
//! and messages. Nothing here writes to the terminal or exits the process;
//! that belongs to `main.rs`.
//!
//! Failure policy is fail-fast everywhere: the first store error propagates
//! out and ends the run. There is no retry and no rollback; every cascade
//! step is remove-if-present, so a rerun finishes whatever an interrupted
//! run left behind.

pub mod cascade;
pub mod drain_queue;
pub mod ghost_sweep;
pub mod orphan_sweep;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Outcome of one sweep run. `checked` is the number of candidates examined
/// (dangling references, readonly aliases, queued jobs); `removed` is how
/// many of them were acted on (or would have been, under dry-run).
#[derive(Debug, Default)]
pub struct CmdResult {
    pub checked: usize,
    pub removed: usize,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }
}
