//! Installs the process-wide `tracing` subscriber.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::format::FmtSpan;

use crate::{Error, LogFormat, LogLevel, Result};

/// Environment variable whose directives, when set, replace the level
/// chosen on the command line
pub const LOG_FILTER_ENV: &str = "RUST_LOG";

/// Environment fallback for the `--log-level` flag
pub const LOG_LEVEL_ENV: &str = "MARGO_LOG_LEVEL";

/// Environment fallback for the `--log-format` flag
pub const LOG_FORMAT_ENV: &str = "RUST_LOG_FORMAT";

/// Initialize the tracing system for logging
///
/// Records go to standard error in the requested `format`. The filter comes
/// from [`LOG_FILTER_ENV`] when it is set, non-empty and valid, otherwise
/// from `level`. Invalid directives are reported as a warning once the
/// subscriber is up.
///
/// # Errors
///
/// Returns [`Error::SUBSCRIBER_ALREADY_SET`] if a global subscriber was
/// installed earlier in this process.
pub fn init_tracing(level: LogLevel, format: LogFormat) -> Result<()> {
    let overrides = std::env::var(LOG_FILTER_ENV).ok();
    let (filter, rejected) = resolve_filter(level, overrides.as_deref());

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_span_events(FmtSpan::CLOSE)
        .with_target(true);

    let installed = match format {
        LogFormat::Pretty => builder
            .pretty()
            .with_file(true)
            .with_line_number(true)
            .try_init(),
        LogFormat::Compact => builder.compact().with_ansi(false).try_init(),
        LogFormat::Json => builder.json().with_ansi(false).try_init(),
    };
    installed.map_err(|_| Error::SUBSCRIBER_ALREADY_SET)?;

    if let Some(err) = rejected {
        tracing::warn!(
            variable = LOG_FILTER_ENV,
            directives = overrides.as_deref().unwrap_or_default(),
            fallback = level.as_str(),
            "Ignoring log filter: {}",
            err
        );
    }
    Ok(())
}

/// Pick the event filter, falling back to `level` when the override
/// directives do not parse. The rejection is handed back for reporting.
fn resolve_filter(level: LogLevel, directives: Option<&str>) -> (EnvFilter, Option<Error>) {
    match build_filter(level, directives) {
        Ok(filter) => (filter, None),
        Err(err) => (level_filter(level), Some(err)),
    }
}

/// Build the event filter from optional override directives and a fallback
/// level.
fn build_filter(level: LogLevel, directives: Option<&str>) -> Result<EnvFilter> {
    let directives = match directives {
        Some(raw) if !raw.trim().is_empty() => raw,
        _ => level.as_filter_directive(),
    };
    EnvFilter::try_new(directives).map_err(|_| Error::INVALID_LOG_FILTER)
}

fn level_filter(level: LogLevel) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(level.to_tracing_level()).into())
        .parse_lossy("")
}
