//! Server lifecycle: bind, then serve until cancelled.

use std::net::SocketAddr;
use std::sync::Arc;

use calc_transport_grpc::server::{bind_tcp, serve_routes};
use calculator_sdk::{CalculatorServer, SERVICE_NAME};
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tonic::service::RoutesBuilder;
use tonic_health::ServingStatus;

use crate::api::grpc::{CalculatorServiceImpl, WorkerPool};
use crate::config::CalculatorServerConfig;
use crate::domain::CalculatorHandler;

/// A calculator server whose listening socket is bound but not yet serving.
pub struct BoundServer {
    listener: TcpListener,
    local_addr: SocketAddr,
    pool: WorkerPool,
}

/// Validate `cfg` and bind its listen address.
///
/// Binding happens here, before any handler is registered, so an address that
/// is already in use fails startup immediately.
///
/// # Errors
/// Returns an error if the configuration is invalid or the address cannot be
/// bound.
pub async fn bind(cfg: &CalculatorServerConfig) -> anyhow::Result<BoundServer> {
    cfg.validate()?;

    let listener = bind_tcp(&cfg.listen_addr).await?;
    let local_addr = listener.local_addr()?;
    tracing::info!(%local_addr, max_workers = cfg.max_workers, "Calculator server bound");

    Ok(BoundServer {
        listener,
        local_addr,
        pool: WorkerPool::new(cfg.max_workers),
    })
}

impl BoundServer {
    /// Actual bound address (resolves port `0`).
    #[must_use]
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Register `handler` and serve calls until `cancel` fires.
    ///
    /// The standard `grpc.health.v1.Health` service is registered alongside
    /// and reports `SERVING` for the whole server and for the calculator.
    ///
    /// # Errors
    /// Returns an error if the gRPC server fails while running.
    pub async fn serve<H: CalculatorHandler>(
        self,
        handler: Arc<H>,
        cancel: CancellationToken,
    ) -> anyhow::Result<()> {
        let svc = CalculatorServer::new(CalculatorServiceImpl::new(handler, self.pool));

        let (health_reporter, health_svc) = tonic_health::server::health_reporter();
        health_reporter
            .set_service_status(SERVICE_NAME, ServingStatus::Serving)
            .await;

        let mut routes = RoutesBuilder::default();
        routes.add_service(svc);
        routes.add_service(health_svc);

        serve_routes(self.listener, routes.routes(), cancel).await
    }
}
