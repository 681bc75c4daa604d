//! gRPC client transport configuration and call helpers.
//!
//! This module provides:
//! - Configurable connect timeout and per-call deadline
//! - HTTP/2 keepalive settings for connection health
//! - Lazy channel construction (no I/O happens until the first call)
//! - A deadline guard around unary calls
//!
//! **Note:** nothing here retries. A failed call is returned to the caller as-is.

use std::future::Future;
use std::time::Duration;

use tonic::Status;
use tonic::transport::{Channel, Endpoint};
use tracing::Instrument;

fn duration_to_u64_ms(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

/// Configuration for the gRPC client transport stack.
#[derive(Debug, Clone)]
#[must_use]
pub struct GrpcClientConfig {
    /// Timeout for establishing the connection (applied on first use).
    pub connect_timeout: Duration,

    /// Deadline for an individual RPC call, see [`call_with_deadline`].
    pub rpc_timeout: Duration,

    /// Service name for tracing.
    pub service_name: &'static str,

    /// Emit connection events at debug level.
    pub enable_tracing: bool,
}

impl Default for GrpcClientConfig {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            rpc_timeout: Duration::from_secs(5),
            service_name: "grpc_client",
            enable_tracing: true,
        }
    }
}

impl GrpcClientConfig {
    /// Create a new configuration with the given service name.
    pub fn new(service_name: &'static str) -> Self {
        Self {
            service_name,
            ..Default::default()
        }
    }

    /// Set the connect timeout.
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Set the per-call deadline.
    pub fn with_rpc_timeout(mut self, timeout: Duration) -> Self {
        self.rpc_timeout = timeout;
        self
    }

    /// Disable tracing.
    pub fn without_tracing(mut self) -> Self {
        self.enable_tracing = false;
        self
    }
}

/// Turn a `host:port` target into an endpoint URI.
///
/// Targets that already carry a scheme are returned unchanged; plain
/// `host:port` targets get `http://`.
#[must_use]
pub fn endpoint_uri(target: &str) -> String {
    let target = target.trim();
    if target.contains("://") {
        target.to_owned()
    } else {
        format!("http://{target}")
    }
}

/// Build a tonic `Endpoint` with connect timeout and keepalive settings.
///
/// No transport-level request timeout is set: deadlines are enforced per call
/// by [`call_with_deadline`] so that expiry is always reported as
/// `DEADLINE_EXCEEDED`.
fn build_endpoint(
    uri: String,
    cfg: &GrpcClientConfig,
) -> Result<Endpoint, tonic::transport::Error> {
    let endpoint = Endpoint::from_shared(uri)?
        .connect_timeout(cfg.connect_timeout)
        .tcp_keepalive(Some(Duration::from_secs(30)))
        .http2_keep_alive_interval(Duration::from_secs(30))
        .keep_alive_timeout(Duration::from_secs(10));

    Ok(endpoint)
}

/// Create a lazily connected client for `target`.
///
/// The TCP connection is established on the first call, so an unreachable
/// server surfaces as an `UNAVAILABLE` status from that call rather than
/// here. Must be called from within a Tokio runtime.
///
/// # Errors
/// Returns an error if `target` is not a valid URI.
pub fn connect_lazy<TClient>(
    target: &str,
    cfg: &GrpcClientConfig,
) -> Result<TClient, tonic::transport::Error>
where
    TClient: From<Channel>,
{
    let uri = endpoint_uri(target);
    let _span = tracing::debug_span!("grpc_connect", service = cfg.service_name, uri = %uri)
        .entered();

    let channel = build_endpoint(uri, cfg)?.connect_lazy();

    if cfg.enable_tracing {
        tracing::debug!(
            service_name = cfg.service_name,
            connect_timeout_ms = duration_to_u64_ms(cfg.connect_timeout),
            "gRPC channel created, connection deferred to first call"
        );
    }

    Ok(TClient::from(channel))
}

/// Run a unary call, giving up once `deadline` has elapsed.
///
/// When the deadline fires the in-flight call is dropped (which resets the
/// HTTP/2 stream) and `DEADLINE_EXCEEDED` is returned. Statuses produced by
/// the call itself are passed through untouched.
///
/// # Errors
/// Returns the call's own `Status`, or `DEADLINE_EXCEEDED` on expiry.
pub async fn call_with_deadline<T, F>(
    method: &'static str,
    deadline: Duration,
    call: F,
) -> Result<T, Status>
where
    F: Future<Output = Result<T, Status>>,
{
    let deadline_ms = duration_to_u64_ms(deadline);
    let span = tracing::debug_span!("grpc_call", method, deadline_ms);

    async move {
        match tokio::time::timeout(deadline, call).await {
            Ok(result) => result,
            Err(_elapsed) => {
                tracing::warn!(method, deadline_ms, "gRPC call exceeded its deadline");
                Err(Status::deadline_exceeded(format!(
                    "{method}: deadline of {deadline_ms}ms exceeded"
                )))
            }
        }
    }
    .instrument(span)
    .await
}
