use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "padsweep")]
#[command(about = "Maintenance sweeps for a MyPads key-value namespace", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to a JSON settings file with store connection parameters
    #[arg(short, long, global = true)]
    pub settings: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Remove dangling pad references from group records
    Ghosts {
        /// Report what would be removed without writing anything
        #[arg(short = 'n', long)]
        dryrun: bool,
    },

    /// Cascade-delete pads whose MyPads record is gone but whose host
    /// records linger
    Orphans {
        /// Report what would be deleted without writing anything
        #[arg(short = 'n', long)]
        dryrun: bool,
    },

    /// Drain the pad-deletion job queue
    Queue {
        /// Suppress per-batch progress output
        #[arg(short, long)]
        quiet: bool,

        /// Process the current backlog once and exit instead of looping
        #[arg(short, long)]
        oneshot: bool,
    },
}
