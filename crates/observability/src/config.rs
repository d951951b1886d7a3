//! Logging configuration read from the environment.

/// Env var holding the `EnvFilter` directive.
pub const FILTER_VAR: &str = "RUST_LOG";

/// Env var selecting the output format (`json` or `pretty`).
pub const FORMAT_VAR: &str = "TALLYCART_LOG_FORMAT";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
}

impl LogFormat {
    fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            "pretty" => Some(Self::Pretty),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub filter: String,
    pub format: LogFormat,
    /// Raw format value that was not recognized; reported once logging is up.
    pub unknown_format: Option<String>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            format: LogFormat::Json,
            unknown_format: None,
        }
    }
}

impl LogConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup (tests inject a map here).
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(filter) = lookup(FILTER_VAR).filter(|f| !f.trim().is_empty()) {
            config.filter = filter;
        }

        if let Some(raw) = lookup(FORMAT_VAR) {
            match LogFormat::parse(&raw) {
                Some(format) => config.format = format,
                None => config.unknown_format = Some(raw),
            }
        }

        config
    }
}
