use thiserror::Error;

/// Core error type shared across payfield crates.
#[derive(Debug, Error)]
pub enum Error {
    /// The field schema registry violates internal invariants.
    #[error("invalid schema: {0}")]
    InvalidSchema(String),
}

/// Convenience alias for results returned by payfield crates.
pub type Result<T> = std::result::Result<T, Error>;
