#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Bootstrap helpers for calculator processes
//!
//! - [`config`]: layered configuration loading (defaults, YAML, environment)
//! - [`logging`]: `tracing` subscriber initialization
//! - [`signals`]: cancelling a token on Ctrl+C / SIGTERM

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

pub mod config;
pub mod logging;
pub mod signals;

pub use config::{ConfigError, load_layered, to_yaml};
pub use logging::{LogFormat, LoggingConfig, init_logging};
pub use signals::cancel_on_shutdown;
