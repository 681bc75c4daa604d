use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};

use serde::{Deserialize, Serialize};
use tokio::sync::Semaphore;

/// Listen address used when none is configured.
pub const DEFAULT_LISTEN_ADDR: SocketAddr =
    SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::UNSPECIFIED, 50051));

/// Worker pool size used when none is configured.
pub const DEFAULT_MAX_WORKERS: usize = 10;

/// Configuration for the calculator server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CalculatorServerConfig {
    /// `host:port` to listen on; port `0` picks an ephemeral port.
    pub listen_addr: String,

    /// Maximum number of handlers executing at the same time.
    pub max_workers: usize,
}

impl Default for CalculatorServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: DEFAULT_LISTEN_ADDR.to_string(),
            max_workers: DEFAULT_MAX_WORKERS,
        }
    }
}

impl CalculatorServerConfig {
    /// Configuration listening on `listen_addr` with default pool size.
    #[must_use]
    pub fn with_listen_addr(listen_addr: impl Into<String>) -> Self {
        Self {
            listen_addr: listen_addr.into(),
            ..Default::default()
        }
    }

    /// Check values that deserialize fine but cannot be served.
    ///
    /// # Errors
    /// Returns an error if `max_workers` is zero or above what the pool can
    /// hold, or if `listen_addr` is empty.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.max_workers == 0 {
            anyhow::bail!("max_workers must be at least 1");
        }
        if self.max_workers > Semaphore::MAX_PERMITS {
            anyhow::bail!(
                "max_workers must be at most {}, got {}",
                Semaphore::MAX_PERMITS,
                self.max_workers
            );
        }
        if self.listen_addr.trim().is_empty() {
            anyhow::bail!("listen_addr must not be empty");
        }
        Ok(())
    }
}
