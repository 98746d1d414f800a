//! Logging for the Tubefind server process.
//!
//! Requests and provider calls are logged to stderr at the level picked on the
//! command line. Every start also truncates a run log under `logs/` that keeps
//! Tubefind's own events at trace level, so a failed search can be inspected
//! after the fact.

use std::fs::{File, create_dir_all};
use std::path::{Path, PathBuf};

use tracing::{Level, Subscriber};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};

/// File name of the per-run log, overwritten on every start.
pub const LAST_RUN_LOG_FILE: &str = "tubefind-last-run.log";

/// Run log filter: everything from Tubefind, connection chatter from the HTTP stack capped.
const RUN_LOG_FILTER: &str = "trace,hyper=debug,hyper_util=debug,reqwest=debug,h2=info";

/// Installs the global subscriber: a console layer plus the run log.
///
/// `RUST_LOG` (including one set in `.env`, if loaded beforehand) overrides
/// `console_level` for the console only. `logs_dir` defaults to `./logs`.
///
/// # Errors
///
/// - `Box<dyn std::error::Error>` - If the run log cannot be created or a
///   global subscriber is already installed
pub fn init_tracing(
    console_level: Level,
    logs_dir: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let (run_log_path, run_log) = open_run_log(logs_dir.unwrap_or_else(|| Path::new("logs")))?;

    tracing_subscriber::registry()
        .with(console_layer(console_level))
        .with(run_log_layer(run_log))
        .try_init()?;

    tracing::info!(
        console = %console_level,
        run_log = %run_log_path.display(),
        "Tubefind logging started"
    );

    Ok(())
}

fn open_run_log(logs_dir: &Path) -> std::io::Result<(PathBuf, File)> {
    create_dir_all(logs_dir)?;
    let path = logs_dir.join(LAST_RUN_LOG_FILE);
    let file = File::create(&path)?;
    Ok((path, file))
}

fn console_layer<S>(level: Level) -> impl Layer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.to_string()));

    fmt::layer()
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_filter(filter)
}

fn run_log_layer<S>(file: File) -> impl Layer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fmt::layer()
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .with_ansi(false)
        .with_writer(file)
        .with_filter(EnvFilter::new(RUN_LOG_FILTER))
}

/// CLI log levels for user control
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CliLogLevel {
    /// Only error messages
    Error,
    /// Warning and error messages
    Warn,
    /// Informational, warning, and error messages
    Info,
    /// Debug, informational, warning, and error messages
    Debug,
    /// All messages including detailed tracing
    Trace,
}

impl CliLogLevel {
    /// Converts CLI log level to tracing Level enum.
    ///
    /// # Examples
    /// ```
    /// use tubefind_core::tracing_setup::CliLogLevel;
    ///
    /// let level = CliLogLevel::Info.as_tracing_level();
    /// assert_eq!(level, tracing::Level::INFO);
    /// ```
    pub fn as_tracing_level(self) -> Level {
        match self {
            CliLogLevel::Error => Level::ERROR,
            CliLogLevel::Warn => Level::WARN,
            CliLogLevel::Info => Level::INFO,
            CliLogLevel::Debug => Level::DEBUG,
            CliLogLevel::Trace => Level::TRACE,
        }
    }
}

impl std::fmt::Display for CliLogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliLogLevel::Error => write!(f, "error"),
            CliLogLevel::Warn => write!(f, "warn"),
            CliLogLevel::Info => write!(f, "info"),
            CliLogLevel::Debug => write!(f, "debug"),
            CliLogLevel::Trace => write!(f, "trace"),
        }
    }
}
