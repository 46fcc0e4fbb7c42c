//! # Margo sensor workload
//!
//! Entry point packaged into the OCI image and started by the process
//! supervisor.
//!
//! ## Usage
//!
//! ```bash
//! margo-workload [--log-level <level>] [--log-format <pretty|compact|json>]
//! ```
//!
//! No argument is required. Standard output carries the banner and the five
//! readings; diagnostics, when enabled, go to standard error. The process
//! exits with status 0 once the completion banner is written and with a
//! non-zero status if standard output or the clock fails first.

#![warn(missing_docs)]

use std::{env, io};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use margo_logging::{init_tracing, LogFormat, LogLevel, LOG_FORMAT_ENV, LOG_LEVEL_ENV};
use margo_workload::Workload;
use tracing::{error, info, warn};

/// Margo sensor workload CLI arguments
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Verbosity of diagnostics written to standard error
    /// (trace, debug, info, warn, error, critical). Falls back to
    /// `MARGO_LOG_LEVEL`, then warn.
    #[arg(long)]
    log_level: Option<LogLevel>,

    /// Layout of diagnostic records (pretty, compact, json). Falls back to
    /// `RUST_LOG_FORMAT`, then compact.
    #[arg(long)]
    log_format: Option<LogFormat>,
}

impl Args {
    /// Flags win; environment values that do not parse fall back to the
    /// defaults so a stray variable never blocks the run.
    fn log_level(&self) -> LogLevel {
        self.log_level.unwrap_or_else(|| {
            env::var(LOG_LEVEL_ENV)
                .map_or_else(|_| LogLevel::default(), |raw| LogLevel::from_string_or_default(&raw))
        })
    }

    fn log_format(&self) -> LogFormat {
        self.log_format.unwrap_or_else(|| {
            env::var(LOG_FORMAT_ENV)
                .map_or_else(|_| LogFormat::default(), |raw| LogFormat::from_string_or_default(&raw))
        })
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Diagnostics are optional; the readings are not.
    if let Err(e) = init_tracing(args.log_level(), args.log_format()) {
        warn!(code = e.code, "Continuing without the requested logging: {}", e);
    }

    let started = Instant::now();
    let mut workload = Workload::standard();
    let config = *workload.config();
    info!(
        readings = config.reading_count,
        interval_ms = config.reading_interval.as_millis() as u64,
        "Starting sensor workload"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let summary = match workload.run(&mut out) {
        Ok(summary) => summary,
        Err(e) => {
            error!(
                category = e.category.as_str(),
                code = e.code,
                "Sensor workload aborted: {}",
                e
            );
            return Err(e).context("Sensor workload did not complete");
        }
    };

    info!(
        readings = summary.readings.len(),
        pauses = summary.pauses,
        first_timestamp = ?summary.first_timestamp(),
        last_timestamp = ?summary.last_timestamp(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "Sensor workload completed"
    );

    Ok(())
}
