/// Synchronous handlers behind the calculator's gRPC methods.
///
/// One function per method of the service contract. Handlers run on the
/// server's worker pool, so they may block briefly; a panic inside a handler
/// fails only the call that triggered it.
pub trait CalculatorHandler: Send + Sync + 'static {
    /// `Add`: return `a + b`.
    fn add(&self, a: f64, b: f64) -> f64;

    /// `Ping`: liveness probe, no computation.
    fn ping(&self) {}
}
