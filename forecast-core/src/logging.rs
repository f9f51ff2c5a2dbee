//! `tracing` subscriber setup shared by binaries built on this crate.

use tracing::{Level, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Verbosity level for log output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Errors only.
    Quiet,
    /// Warnings and errors.
    #[default]
    Normal,
    /// Debug and above.
    Verbose,
    /// Everything.
    Trace,
}

impl Verbosity {
    pub fn to_level(&self) -> Level {
        match self {
            Self::Quiet => Level::ERROR,
            Self::Normal => Level::WARN,
            Self::Verbose => Level::DEBUG,
            Self::Trace => Level::TRACE,
        }
    }

    /// Map `-q` / repeated `-v` flags onto a verbosity.
    pub fn from_flags(quiet: bool, verbose: u8) -> Self {
        match (quiet, verbose) {
            (true, _) => Self::Quiet,
            (false, 0) => Self::Normal,
            (false, 1) => Self::Verbose,
            (false, _) => Self::Trace,
        }
    }
}

/// Filter chosen by [`build_filter`], plus any directives it had to skip.
#[derive(Debug)]
pub struct FilterSelection {
    pub filter: EnvFilter,
    /// Directives that failed to parse, with the parse error.
    pub rejected: Vec<(String, String)>,
}

/// Pick the log filter: `env` first, then `directive`, then `verbosity`.
///
/// Blank values count as unset. An unparsable `env` or `directive` is skipped
/// and recorded in `rejected`.
pub fn build_filter(
    verbosity: Verbosity,
    directive: Option<&str>,
    env: Option<&str>,
) -> FilterSelection {
    let mut rejected = Vec::new();

    for candidate in [env, directive].into_iter().flatten().filter(|c| !c.trim().is_empty()) {
        match EnvFilter::try_new(candidate) {
            Ok(filter) => return FilterSelection { filter, rejected },
            Err(err) => rejected.push((candidate.to_string(), err.to_string())),
        }
    }

    FilterSelection { filter: EnvFilter::new(verbosity.to_level().to_string()), rejected }
}

/// Install the global subscriber, writing to stderr.
///
/// Filter precedence: `RUST_LOG`, then `directive`, then `verbosity`.
/// Skipped directives are reported as warnings once the subscriber is up.
/// Calling this again after a subscriber is installed does nothing.
pub fn init_logging(verbosity: Verbosity, directive: Option<&str>) {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let FilterSelection { filter, rejected } = build_filter(verbosity, directive, env.as_deref());

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
        .try_init();

    for (directive, error) in rejected {
        warn!(%directive, %error, "ignoring invalid log filter");
    }
}
