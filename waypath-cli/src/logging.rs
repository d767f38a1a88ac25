//! Logging initialisation for the waypath CLI.
//!
//! Installs a global `tracing` subscriber writing to stderr, optionally as
//! JSON, and bridges the `log` facade. Stage spans are reported on close so
//! each pipeline step logs its duration.

use std::{env, sync::OnceLock};

use thiserror::Error;
use tracing_log::LogTracer;
use tracing_subscriber::{
    EnvFilter, Layer, fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt,
};

/// Environment variable selecting `human` or `json` log output.
pub const LOG_FORMAT_ENV: &str = "WAYPATH_LOG_FORMAT";

static INITIALISED: OnceLock<()> = OnceLock::new();

/// Log output formats.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines.
    Human,
    /// One JSON object per line.
    Json,
}

/// What [`init_logging`] ended up doing.
#[derive(Debug)]
pub enum LoggingOutcome {
    /// The subscriber was installed, or had been by an earlier call.
    Installed,
    /// Another global subscriber was already present and was kept.
    AlreadyConfigured(tracing_subscriber::util::TryInitError),
}

/// Errors raised while initialising structured logging.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// Environment variable contained invalid UTF-8 data.
    #[error("environment variable `{name}` contained invalid UTF-8: {source}")]
    InvalidUnicode {
        /// Name of the offending environment variable.
        name: &'static str,
        /// Underlying parse failure.
        #[source]
        source: env::VarError,
    },
    /// Unsupported log format requested via [`LOG_FORMAT_ENV`].
    #[error("unsupported log format `{provided}`; expected `human` or `json`")]
    UnsupportedFormat {
        /// Raw value supplied by the user.
        provided: String,
    },
}

/// Installs global structured logging unless this process already did.
///
/// The level comes from `RUST_LOG` and defaults to `info`.
///
/// # Errors
/// Returns [`LoggingError`] when [`LOG_FORMAT_ENV`] is not valid Unicode or
/// names an unknown format.
pub fn init_logging() -> Result<LoggingOutcome, LoggingError> {
    if INITIALISED.get().is_some() {
        return Ok(LoggingOutcome::Installed);
    }

    let format = match env::var(LOG_FORMAT_ENV) {
        Ok(raw) => parse_log_format(&raw)?,
        Err(env::VarError::NotPresent) => LogFormat::Human,
        Err(source @ env::VarError::NotUnicode(_)) => {
            return Err(LoggingError::InvalidUnicode {
                name: LOG_FORMAT_ENV,
                source,
            });
        }
    };

    let outcome = match install_subscriber(format) {
        Ok(()) => LoggingOutcome::Installed,
        Err(err) => LoggingOutcome::AlreadyConfigured(err),
    };
    INITIALISED.get_or_init(|| ());
    Ok(outcome)
}

fn install_subscriber(format: LogFormat) -> Result<(), tracing_subscriber::util::TryInitError> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_span_events(FmtSpan::CLOSE)
        .with_writer(std::io::stderr);
    let fmt_layer = match format {
        LogFormat::Human => fmt_layer.boxed(),
        LogFormat::Json => fmt_layer
            .json()
            .with_current_span(true)
            .with_span_list(true)
            .boxed(),
    };

    // Best effort: another logger may already own the `log` slot.
    let _ = LogTracer::init();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
}

fn parse_log_format(raw: &str) -> Result<LogFormat, LoggingError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "human" => Ok(LogFormat::Human),
        "json" => Ok(LogFormat::Json),
        other => Err(LoggingError::UnsupportedFormat {
            provided: other.to_owned(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case("human", LogFormat::Human)]
    #[case("HUMAN", LogFormat::Human)]
    #[case(" json ", LogFormat::Json)]
    fn parse_log_format_accepts_supported_values(#[case] raw: &str, #[case] expected: LogFormat) {
        let format = parse_log_format(raw).expect("format must parse");
        assert_eq!(format, expected);
    }

    #[test]
    fn parse_log_format_rejects_unknown_values() {
        let err = parse_log_format("xml").expect_err("xml is not supported");
        match err {
            LoggingError::UnsupportedFormat { provided } => assert_eq!(provided, "xml"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn init_logging_is_idempotent() {
        init_logging().expect("logging must initialise");
        let second = init_logging().expect("subsequent calls must be no-ops");
        assert!(matches!(second, LoggingOutcome::Installed));
    }
}
