#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Calculator SDK
//!
//! This crate provides everything needed to talk to the calculator service:
//! - Service contract: protobuf messages and generated stubs ([`proto`])
//! - Method table ([`Method`])
//! - API trait ([`CalculatorClientV1`]) and error taxonomy ([`CalculatorError`])
//! - gRPC client ([`CalculatorGrpcClient`])
//!
//! ## Usage
//!
//! ```ignore
//! use calculator_sdk::{CalculatorClientV1, CalculatorGrpcClient, GrpcClientConfig};
//!
//! let cfg = GrpcClientConfig::new("calculator").with_rpc_timeout(Duration::from_secs(5));
//! let client = CalculatorGrpcClient::connect_lazy("localhost:50051", &cfg)?;
//! let sum = client.add(3.5, 2.5).await?;
//! ```

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

// === API TRAIT AND TYPES ===
mod api;
pub use api::{CalculatorClientV1, CalculatorError};

mod method;
pub use method::Method;

// === CLIENT ===
mod client;
pub use calc_transport_grpc::client::GrpcClientConfig;
pub use client::CalculatorGrpcClient;

// === GRPC PROTO STUBS ===
pub mod proto;

// Re-export proto types needed by server
pub use proto::calculator_server::{Calculator, CalculatorServer};
pub use proto::{AddRequest, AddResponse, Empty};

/// Fully qualified gRPC service name.
pub const SERVICE_NAME: &str = "demo.calculator.Calculator";

/// Address the client targets when none is given.
pub const DEFAULT_TARGET: &str = "localhost:50051";
