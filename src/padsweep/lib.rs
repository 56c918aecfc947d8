//! # Padsweep Architecture
//!
//! Padsweep is a maintenance tool for the flat key-value namespace a
//! MyPads-style pad manager shares with its host editor. Deletions across
//! that namespace are not transactional: a crash between two removes can
//! leave revisions without a pad, aliases without a target, or group records
//! pointing at pads that no longer exist. Padsweep walks the namespace and
//! repairs those violations.
//!
//! Three sweeps, one engine:
//!
//! - **ghosts**: drop pad ids from group records when no `mypads:pad:`
//!   record backs them (edits references only, never deletes pad data)
//! - **orphans**: follow `readonly2pad:` aliases to pads whose `mypads:pad:`
//!   claim is gone and erase their whole dependent record set
//! - **queue**: drain `mypads:jobqueue:deletePad:` markers, running the same
//!   cascade per job and consuming the marker last
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (args.rs, wired by main.rs)                      │
//! │  - Parses arguments, formats output, handles exit codes     │
//! │  - The ONLY place that knows about stdout/stderr            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over the sweeps                              │
//! │  - Owns the store init-once / shutdown-once lifecycle       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Sweep logic, pure and sequential                         │
//! │  - Returns structured CmdResult tallies, no terminal I/O    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract KeyValueStore trait                             │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Failure Discipline
//!
//! Every store error is fatal and ends the run; there is no retry anywhere.
//! Resumability comes from ordering and idempotence instead: cascades delete
//! aliases before the records they alias, every step is remove-if-present,
//! and the queue consumes a job marker only after all of the job's work is
//! done. A run killed at any point is simply finished by the next run.
//!
//! ## Module Overview
//!
//! - [`api`]: the facade and store lifecycle
//! - [`commands`]: the three sweeps plus the shared cascade
//! - [`keys`]: the key-naming conventions, spelled out exactly once
//! - [`model`]: the group record shape
//! - [`settings`]: the `-s/--settings` JSON file
//! - [`store`]: the KeyValueStore trait and its backends
//! - [`error`]: error types
//! - `args`: clap argument definitions for the binary (not part of the lib
//!   API)

pub mod api;
pub mod commands;
pub mod error;
pub mod keys;
pub mod model;
pub mod settings;
pub mod store;
