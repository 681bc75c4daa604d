//! gRPC Server implementation for calculator
//!
//! Decodes calls, hands them to the `CalculatorHandler` through the worker
//! pool, and encodes the handler's result as the response.

use std::sync::Arc;

use tonic::{Request, Response, Status};

use calculator_sdk::{AddRequest, AddResponse, Calculator, Empty, Method};

use super::WorkerPool;
use crate::domain::{CalculatorHandler, Service};

/// gRPC service implementation that wraps a `CalculatorHandler`.
pub struct CalculatorServiceImpl<H = Service> {
    handler: Arc<H>,
    pool: WorkerPool,
}

impl<H> Clone for CalculatorServiceImpl<H> {
    fn clone(&self) -> Self {
        Self {
            handler: Arc::clone(&self.handler),
            pool: self.pool.clone(),
        }
    }
}

impl<H: CalculatorHandler> CalculatorServiceImpl<H> {
    /// Create a new service implementation dispatching to `handler` on `pool`.
    #[must_use]
    pub fn new(handler: Arc<H>, pool: WorkerPool) -> Self {
        Self { handler, pool }
    }
}

#[tonic::async_trait]
impl<H: CalculatorHandler> Calculator for CalculatorServiceImpl<H> {
    async fn add(&self, request: Request<AddRequest>) -> Result<Response<AddResponse>, Status> {
        let AddRequest { a, b } = request.into_inner();

        let handler = Arc::clone(&self.handler);
        let result = self.pool.run(Method::Add, move || handler.add(a, b)).await?;

        Ok(Response::new(AddResponse { result }))
    }

    async fn ping(&self, _request: Request<Empty>) -> Result<Response<Empty>, Status> {
        let handler = Arc::clone(&self.handler);
        self.pool.run(Method::Ping, move || handler.ping()).await?;

        Ok(Response::new(Empty {}))
    }
}
