//! gRPC API layer: service implementation and the worker pool it dispatches to.

pub mod pool;
pub mod server;

pub use pool::WorkerPool;
pub use server::CalculatorServiceImpl;
