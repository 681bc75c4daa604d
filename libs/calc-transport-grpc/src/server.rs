//! TCP serving helpers for tonic routes.
//!
//! Binding and serving are split so a caller can learn the actual bound
//! address (port `0` picks an ephemeral port) and fail fast on bind errors
//! before any request is accepted.

use anyhow::Context;
use tokio::net::TcpListener;
use tokio_stream::wrappers::TcpListenerStream;
use tokio_util::sync::CancellationToken;
use tonic::service::Routes;
use tonic::transport::Server;

/// Bind a TCP listener on `listen_addr` (`host:port`).
///
/// # Errors
/// Returns an error if the address cannot be resolved or is already in use.
pub async fn bind_tcp(listen_addr: &str) -> anyhow::Result<TcpListener> {
    let listener = TcpListener::bind(listen_addr)
        .await
        .with_context(|| format!("failed to bind gRPC listener on '{listen_addr}'"))?;
    let bound_addr = listener.local_addr()?;
    tracing::debug!(%bound_addr, transport = "tcp", "gRPC listener bound");
    Ok(listener)
}

/// Serve `routes` on an already bound listener until `cancel` fires.
///
/// Connections are accepted concurrently. Once `cancel` is triggered the
/// server stops accepting and returns after in-flight connections drain.
///
/// # Errors
/// Returns an error if the server fails while running.
pub async fn serve_routes(
    listener: TcpListener,
    routes: Routes,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let bound_addr = listener.local_addr()?;
    tracing::info!(%bound_addr, transport = "tcp", "gRPC server listening");

    let incoming = TcpListenerStream::new(listener);
    Server::builder()
        .add_routes(routes)
        .serve_with_incoming_shutdown(incoming, async move {
            cancel.cancelled().await;
        })
        .await
        .context("gRPC server terminated with an error")?;

    tracing::info!(%bound_addr, "gRPC server stopped");
    Ok(())
}
