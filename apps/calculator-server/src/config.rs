use std::path::Path;

use calc_bootstrap::{ConfigError, LoggingConfig, load_layered};
use calculator::CalculatorServerConfig;
use serde::{Deserialize, Serialize};

/// Prefix of environment variables that override configuration keys,
/// e.g. `CALC__CALCULATOR__MAX_WORKERS=4`.
pub const ENV_PREFIX: &str = "CALC__";

/// Effective configuration of the server process.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub calculator: CalculatorServerConfig,
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Layered config: defaults -> YAML (if provided) -> env (`CALC__*`).
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        load_layered(path, ENV_PREFIX)
    }

    /// Apply command-line overrides on top of the loaded configuration.
    pub fn apply_cli_overrides(&mut self, listen_addr: Option<&str>, max_workers: Option<usize>) {
        if let Some(addr) = listen_addr {
            addr.clone_into(&mut self.calculator.listen_addr);
        }
        if let Some(workers) = max_workers {
            self.calculator.max_workers = workers;
        }
    }
}
