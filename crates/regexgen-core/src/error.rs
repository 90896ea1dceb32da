use thiserror::Error;

/// Core error type shared across regexgen crates.
#[derive(Debug, Error)]
pub enum Error {
    /// The operation tree violates structural invariants.
    #[error("invalid tree: {0}")]
    InvalidTree(String),
    /// The tree names an opcode outside the supported set.
    #[error("unsupported opcode: {0}")]
    UnsupportedOpcode(String),
    /// Tree JSON could not be decoded.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias for results returned by regexgen crates.
pub type Result<T> = std::result::Result<T, Error>;
