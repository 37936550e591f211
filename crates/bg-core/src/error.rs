use thiserror::Error;

/// Errors originating from the core module.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CoreError {
    /// Invalid configuration value or structure.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// A negative value was given while the policy rejects them.
    #[error("negative magnitude: {value} (use --negatives zero|abs to accept it)")]
    NegativeMagnitude {
        /// The offending input value.
        value: i64,
    },

    /// Value does not fit a `Magnitude`.
    #[error("magnitude out of range: {value}")]
    MagnitudeOverflow {
        /// The offending input value.
        value: i64,
    },
}
