//! Contact Book - Main Entry Point
//!
//! Runs the interactive command loop. The actual implementation is in the
//! `contact_book` library.

use anyhow::{Context, Result};
use clap::Parser;
use contact_book::ContactBookHandler;
use contact_book::logging::{DEFAULT_LOG_LEVEL, init_logging};
use contact_book::session::run_session;
use contact_book::storage::DEFAULT_FILE_NAME;
use std::io;
use std::path::PathBuf;
use tracing::debug;

/// Contact Book - phone numbers, birthdays and upcoming birthday reminders
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the address book file
    #[arg(short, long, env = "CONTACT_BOOK_FILE", default_value = DEFAULT_FILE_NAME)]
    file: PathBuf,

    /// Log level used when RUST_LOG is not set (e.g. warn, info, debug)
    #[arg(long, default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args.log_level)?;

    let mut handler = ContactBookHandler::new(&args.file)
        .with_context(|| format!("Failed to open address book {}", args.file.display()))?;

    let session = run_session(&mut handler, io::stdin().lock(), io::stdout());
    debug!(?session, "session finished");

    // Save before reporting a console failure so no change is lost
    handler
        .save()
        .with_context(|| format!("Failed to save address book {}", args.file.display()))?;
    session.context("Console input/output failed")?;
    Ok(())
}
