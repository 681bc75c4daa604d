//! gRPC client implementation of `CalculatorClientV1`

use std::time::Duration;

use async_trait::async_trait;
use calc_transport_grpc::client::{GrpcClientConfig, call_with_deadline, connect_lazy};
use tonic::transport::Channel;

use crate::Method;
use crate::api::{CalculatorClientV1, CalculatorError};
use crate::proto::calculator_client::CalculatorClient;
use crate::proto::{AddRequest, Empty};

/// gRPC client for the calculator service.
///
/// Owns a lazily connected channel: nothing touches the network until the
/// first call, and dropping the client closes the connection. Every call is
/// bounded by the configured deadline.
#[derive(Clone)]
pub struct CalculatorGrpcClient {
    inner: CalculatorClient<Channel>,
    deadline: Duration,
}

impl CalculatorGrpcClient {
    /// Create a client for `target` (`host:port` or a full URI).
    ///
    /// The per-call deadline is taken from `cfg.rpc_timeout`.
    ///
    /// # Errors
    /// Returns [`CalculatorError::InvalidTarget`] if `target` is not a valid URI.
    pub fn connect_lazy(target: &str, cfg: &GrpcClientConfig) -> Result<Self, CalculatorError> {
        let channel: Channel =
            connect_lazy(target, cfg).map_err(|e| CalculatorError::InvalidTarget {
                target: target.to_owned(),
                message: e.to_string(),
            })?;

        Ok(Self {
            inner: CalculatorClient::new(channel),
            deadline: cfg.rpc_timeout,
        })
    }

    /// Deadline applied to each call.
    #[must_use]
    pub fn deadline(&self) -> Duration {
        self.deadline
    }
}

#[async_trait]
impl CalculatorClientV1 for CalculatorGrpcClient {
    async fn add(&self, a: f64, b: f64) -> Result<f64, CalculatorError> {
        let mut client = self.inner.clone();

        let response = call_with_deadline(
            Method::Add.path(),
            self.deadline,
            client.add(AddRequest { a, b }),
        )
        .await?;

        Ok(response.into_inner().result)
    }

    async fn ping(&self) -> Result<(), CalculatorError> {
        let mut client = self.inner.clone();

        call_with_deadline(Method::Ping.path(), self.deadline, client.ping(Empty {})).await?;

        Ok(())
    }
}
