use thiserror::Error;

/// Construction-time validation failures for bodies.
///
/// A non-positive mass makes the equations of motion meaningless, so it
/// is rejected here and never deferred to integration time.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BodyError {
    #[error("mass must be a positive finite number of kilograms, got {0}")]
    NonPositiveMass(f64),
    #[error("{0} has a non-finite component")]
    NonFiniteVector(&'static str),
}

/// Failures raised by `integrate`.
///
/// None of these are retried internally: re-running a diverged
/// integration with identical inputs reproduces the same failure.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum IntegrationError {
    /// The requested evaluation grid is empty, not strictly increasing,
    /// or extends outside the integration span.
    #[error("evaluation times must be strictly increasing within the requested span")]
    BadTimeGrid,
    /// The state vector picked up a non-finite component, typically from
    /// two bodies approaching coincidence and unbounded acceleration.
    #[error("integration produced a non-finite state near t = {time} s")]
    NonFiniteState { time: f64 },
    /// The error-controlled step size collapsed, meaning the solution
    /// has a singularity inside the span.
    #[error("step size underflowed near t = {time} s")]
    StepSizeUnderflow { time: f64 },
    /// The solver ran out of its step budget before reaching the end of
    /// the span.
    #[error("exceeded the budget of {max_steps} integration steps")]
    StepLimitExceeded { max_steps: usize },
}
