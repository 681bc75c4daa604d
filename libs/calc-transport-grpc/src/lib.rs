#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

//! gRPC transport helpers shared by the calculator client and server.
//!
//! - [`client`]: lazily connected channels and the per-call deadline guard
//! - [`server`]: TCP binding and serving tonic routes until shutdown

pub mod client;
pub mod server;

pub use client::{GrpcClientConfig, call_with_deadline, connect_lazy, endpoint_uri};
pub use server::{bind_tcp, serve_routes};
