use thiserror::Error;

use regexgen_core::Error as CoreError;

/// Errors emitted while generating strings.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("pattern syntax error: {0}")]
    PatternSyntax(#[from] regex_syntax::ast::Error),
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(String),
    #[error("unresolved reference to group {0}")]
    UnresolvedReference(u32),
    #[error("reference to unknown group name {0:?}")]
    UnknownGroupName(String),
    #[error("empty alphabet: {0}")]
    EmptyAlphabet(String),
    #[error("invalid tree: {0}")]
    InvalidTree(CoreError),
    #[error("invalid options: {0}")]
    InvalidOptions(String),
    #[error("generated value {value:?} does not match pattern {pattern:?}")]
    NoMatch { pattern: String, value: String },
    #[error("regex error: {0}")]
    Regex(#[from] regex::Error),
}

impl From<CoreError> for GenerationError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::UnsupportedOpcode(opcode) => GenerationError::UnsupportedOperation(opcode),
            other => GenerationError::InvalidTree(other),
        }
    }
}

/// Result type for generation operations.
pub type Result<T> = std::result::Result<T, GenerationError>;
