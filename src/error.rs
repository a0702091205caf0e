use thiserror::Error;

/// Fatal errors surfaced before or during a simulation run. Skipped regions
/// and dropped fragments are expected sampling outcomes, not errors, and
/// never appear here.
#[derive(Debug, Error)]
pub enum SimError {
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("unsupported input: {0}")]
    Format(String),
}
