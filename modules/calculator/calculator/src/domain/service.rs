//! Domain service for calculator
//!
//! Contains the core business logic for calculator operations.

use tracing::{debug, trace};

use super::CalculatorHandler;

/// Domain service that performs calculator operations.
///
/// Stateless: no call observes or affects another. Inputs are not
/// validated; non-finite values flow through IEEE-754 arithmetic.
#[derive(Clone, Copy, Debug, Default)]
pub struct Service;

impl Service {
    /// Create a new service.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl CalculatorHandler for Service {
    fn add(&self, a: f64, b: f64) -> f64 {
        debug!(a, b, "performing addition");
        a + b
    }

    fn ping(&self) {
        trace!("ping");
    }
}
