use clap::Parser;
use colored::*;
use padsweep::api::{CmdMessage, CmdResult, MessageLevel, SweepApi};
use padsweep::commands::drain_queue::DrainOptions;
use padsweep::error::Result;
use padsweep::settings::SweepSettings;
use padsweep::store::fs::FileStore;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Settings problems surface before the store is ever opened.
    let settings = match &cli.settings {
        Some(path) => SweepSettings::load(path)?,
        None => SweepSettings::default(),
    };
    let db_file = settings.db_file_or_default()?;

    let mut api = SweepApi::open(FileStore::new(db_file))?;

    let outcome = match &cli.command {
        Commands::Ghosts { dryrun } => api.ghost_sweep(*dryrun).map(|result| {
            print_messages(&result.messages);
            print_tally(
                &result,
                "pad reference(s)",
                "dangling reference(s)",
                *dryrun,
            );
        }),
        Commands::Orphans { dryrun } => api.orphan_sweep(*dryrun).map(|result| {
            print_messages(&result.messages);
            print_tally(&result, "readonly alias(es)", "orphaned pad(s)", *dryrun);
        }),
        Commands::Queue { quiet, oneshot } => {
            let opts = DrainOptions {
                oneshot: *oneshot,
                idle_interval: Duration::from_millis(settings.idle_interval_ms),
            };

            let cancelled = Arc::new(AtomicBool::new(false));
            let flag = cancelled.clone();
            ctrlc::set_handler(move || flag.store(true, Ordering::Relaxed))
                .expect("Could not install Ctrl-C handler");

            let quiet = *quiet;
            api.drain_queue(&opts, &cancelled, |batch| {
                if !quiet {
                    print_messages(&batch.messages);
                }
            })
            .map(|result| {
                if !quiet {
                    print_tally(&result, "queued job(s)", "pad(s)", false);
                }
            })
        }
    };

    // The store shuts down on every exit path, sweep failure included.
    let closed = api.close();
    outcome?;
    closed?;
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

fn print_tally(result: &CmdResult, checked_noun: &str, removed_noun: &str, dry_run: bool) {
    let action = if dry_run { "found (dry run)" } else { "removed" };
    println!(
        "Checked {} {}; {} {} {}.",
        result.checked, checked_noun, result.removed, removed_noun, action
    );
}
