//! Calculator API trait and types
//!
//! Contract trait and error taxonomy for calling the calculator service.

use async_trait::async_trait;
use tonic::{Code, Status};

/// Calculator API trait
///
/// Every call is unary and independent; implementations keep no state
/// between calls.
#[async_trait]
pub trait CalculatorClientV1: Send + Sync {
    /// Add two numbers and return the sum (IEEE-754, no validation).
    async fn add(&self, a: f64, b: f64) -> Result<f64, CalculatorError>;

    /// Liveness probe.
    async fn ping(&self) -> Result<(), CalculatorError>;
}

/// Error type for Calculator operations
#[derive(thiserror::Error, Debug)]
pub enum CalculatorError {
    #[error("invalid target '{target}': {message}")]
    InvalidTarget { target: String, message: String },

    #[error("calculator service unavailable: {0}")]
    Unavailable(String),

    #[error("deadline exceeded: {0}")]
    DeadlineExceeded(String),

    #[error("gRPC transport error ({code:?}): {message}")]
    Transport { code: Code, message: String },
}

impl CalculatorError {
    /// gRPC status code this error corresponds to.
    #[must_use]
    pub fn code(&self) -> Code {
        match self {
            CalculatorError::InvalidTarget { .. } => Code::InvalidArgument,
            CalculatorError::Unavailable(_) => Code::Unavailable,
            CalculatorError::DeadlineExceeded(_) => Code::DeadlineExceeded,
            CalculatorError::Transport { code, .. } => *code,
        }
    }
}

/// Connection failures that tonic reports without a specific code.
fn is_connect_failure(status: &Status) -> bool {
    std::error::Error::source(status)
        .is_some_and(|e| e.downcast_ref::<tonic::transport::Error>().is_some())
}

impl From<Status> for CalculatorError {
    fn from(status: Status) -> Self {
        let message = status.message().to_owned();
        match status.code() {
            Code::Unavailable => CalculatorError::Unavailable(message),
            Code::DeadlineExceeded => CalculatorError::DeadlineExceeded(message),
            Code::Unknown if is_connect_failure(&status) => CalculatorError::Unavailable(message),
            code => CalculatorError::Transport { code, message },
        }
    }
}
