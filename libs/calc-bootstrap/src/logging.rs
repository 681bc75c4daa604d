//! Logging initialization.
//!
//! Installs a single `tracing-subscriber` registry with an `EnvFilter` and a
//! `fmt` layer writing to stderr, so stdout stays free for program output.
//! `RUST_LOG`, when set, takes precedence over the configured level.

use std::io::IsTerminal;

use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Output format of log lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Logging section of a process configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// Filter directive, e.g. `info` or `info,h2=warn`.
    pub level: String,
    pub format: LogFormat,
    /// Colored output for the text format; only honored when stderr is a terminal.
    pub ansi: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            format: LogFormat::Text,
            ansi: true,
        }
    }
}

/// Filter directive after applying `-v` flags (-v info, -vv debug, -vvv trace).
///
/// The flags only ever raise verbosity: the global level becomes the more
/// verbose of the configured one and the requested one. Per-target
/// directives such as `h2=warn` are kept as configured.
fn filter_directive(cfg: &LoggingConfig, verbose: u8) -> String {
    let requested = match verbose {
        0 => return cfg.level.clone(),
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    let mut has_global = false;
    let mut directives: Vec<String> = cfg
        .level
        .split(',')
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .map(|d| match d.parse::<LevelFilter>() {
            Ok(level) => {
                has_global = true;
                level.max(requested).to_string().to_ascii_lowercase()
            }
            Err(_) => d.to_owned(),
        })
        .collect();

    if !has_global {
        directives.insert(0, requested.to_string().to_ascii_lowercase());
    }
    directives.join(",")
}

/// Color is written only when enabled and stderr is an interactive terminal.
fn use_ansi(enabled: bool, stderr_is_terminal: bool) -> bool {
    enabled && stderr_is_terminal
}

/// Install the global `tracing` subscriber.
///
/// # Errors
/// Returns an error if the filter directive is invalid or a global subscriber
/// is already installed.
pub fn init_logging(cfg: &LoggingConfig, verbose: u8) -> anyhow::Result<()> {
    let directive = filter_directive(cfg, verbose);
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&directive)?,
    };

    let fmt_layer = fmt::layer().with_writer(std::io::stderr);
    let registry = tracing_subscriber::registry().with(filter);

    match cfg.format {
        LogFormat::Text => registry
            .with(fmt_layer.with_ansi(use_ansi(cfg.ansi, std::io::stderr().is_terminal())))
            .try_init()?,
        LogFormat::Json => registry.with(fmt_layer.json()).try_init()?,
    }

    tracing::debug!(filter = %directive, format = ?cfg.format, "Logging initialized");
    Ok(())
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let cfg = LoggingConfig::default();
        assert_eq!(cfg.level, "info");
        assert_eq!(cfg.format, LogFormat::Text);
    }

    fn with_level(level: &str) -> LoggingConfig {
        LoggingConfig {
            level: level.to_owned(),
            ..LoggingConfig::default()
        }
    }

    #[test]
    fn test_verbosity_raises_level() {
        let cfg = with_level("warn");
        assert_eq!(filter_directive(&cfg, 0), "warn");
        assert_eq!(filter_directive(&cfg, 1), "info");
        assert_eq!(filter_directive(&cfg, 2), "debug");
        assert_eq!(filter_directive(&cfg, 9), "trace");
    }

    #[test]
    fn test_verbosity_never_lowers_level() {
        let cfg = with_level("debug");
        assert_eq!(filter_directive(&cfg, 1), "debug");
        assert_eq!(filter_directive(&cfg, 2), "debug");
        assert_eq!(filter_directive(&cfg, 3), "trace");
    }

    #[test]
    fn test_verbosity_keeps_target_directives() {
        let cfg = with_level("info,h2=warn,tower=warn");
        assert_eq!(filter_directive(&cfg, 2), "debug,h2=warn,tower=warn");

        let cfg = with_level("h2=warn");
        assert_eq!(filter_directive(&cfg, 1), "info,h2=warn");
        assert_eq!(filter_directive(&cfg, 0), "h2=warn");
    }

    #[test]
    fn test_ansi_requires_terminal() {
        assert!(use_ansi(true, true));
        assert!(!use_ansi(true, false), "piped stderr gets no escape codes");
        assert!(!use_ansi(false, true));
    }

    #[test]
    fn test_format_deserializes_lowercase() {
        let cfg: LoggingConfig =
            serde_saphyr::from_str("level: debug\nformat: json\n").expect("valid yaml");
        assert_eq!(cfg.format, LogFormat::Json);
        assert_eq!(cfg.level, "debug");
        assert!(cfg.ansi, "unset fields fall back to defaults");
    }
}
