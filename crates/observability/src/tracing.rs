//! Tracing/logging initialization.

use ::tracing::Dispatch;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;

use crate::config::{LogConfig, LogFormat};

const FALLBACK_FILTER: &str = "info";

/// Configuration values that were rejected while building the subscriber.
///
/// They can only be reported once a subscriber is active, so building and
/// reporting are separate steps.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fallbacks {
    /// Rejected filter directive and the parse error.
    pub filter: Option<(String, String)>,
    /// Unrecognized format value.
    pub format: Option<String>,
}

impl Fallbacks {
    pub fn is_empty(&self) -> bool {
        self.filter.is_none() && self.format.is_none()
    }

    /// Emit one warning per rejected value to the current subscriber.
    pub fn report(&self) {
        if let Some((directive, error)) = &self.filter {
            ::tracing::warn!(
                directive = %directive,
                error = %error,
                "invalid log filter; using info"
            );
        }
        if let Some(raw) = &self.format {
            ::tracing::warn!(value = %raw, "unknown log format; using json");
        }
    }
}

/// Build the fmt subscriber for `config` without installing it.
pub fn build<W>(config: &LogConfig, make_writer: W) -> (Dispatch, Fallbacks)
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let mut fallbacks = Fallbacks {
        filter: None,
        format: config.unknown_format.clone(),
    };

    let filter = match EnvFilter::try_new(&config.filter) {
        Ok(filter) => filter,
        Err(err) => {
            fallbacks.filter = Some((config.filter.clone(), err.to_string()));
            EnvFilter::new(FALLBACK_FILTER)
        }
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .with_writer(make_writer);

    let dispatch = match config.format {
        LogFormat::Json => Dispatch::new(builder.json().finish()),
        LogFormat::Pretty => Dispatch::new(builder.pretty().finish()),
    };

    (dispatch, fallbacks)
}

/// Initialize tracing/logging for the process from the environment.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init() {
    init_with(&LogConfig::from_env());
}

/// Initialize tracing/logging with an explicit configuration.
///
/// Returns `false` when a global subscriber was already installed. Rejected
/// configuration values are reported as warnings once the subscriber is up.
pub fn init_with(config: &LogConfig) -> bool {
    let (dispatch, fallbacks) = build(config, std::io::stdout);

    let installed = ::tracing::dispatcher::set_global_default(dispatch).is_ok();
    if installed {
        fallbacks.report();
    }

    installed
}
