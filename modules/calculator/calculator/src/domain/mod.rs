//! Domain layer for calculator module
//!
//! Contains the handler seam and the business logic behind it.

pub mod handler;
pub mod service;

pub use handler::CalculatorHandler;
pub use service::Service;
