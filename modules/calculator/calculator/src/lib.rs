#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Calculator Module
//!
//! Server side of the `demo.calculator.Calculator` gRPC service.
//!
//! ## Architecture
//!
//! - `domain/service.rs` - Core business logic behind the `CalculatorHandler` seam
//! - `api/grpc/server.rs` - gRPC service implementation
//! - `api/grpc/pool.rs` - Fixed-size worker pool handlers run on
//! - `runner.rs` - Bind and serve lifecycle
//!
//! Clients should use the `calculator-sdk` crate.

// === CONFIGURATION ===
mod config;
pub use config::{CalculatorServerConfig, DEFAULT_LISTEN_ADDR, DEFAULT_MAX_WORKERS};

// === LIFECYCLE ===
mod runner;
pub use runner::{BoundServer, bind};

// === INTERNAL MODULES ===
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod domain;

pub use api::grpc::{CalculatorServiceImpl, WorkerPool};
pub use domain::{CalculatorHandler, Service};
