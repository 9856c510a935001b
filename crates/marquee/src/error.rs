#![forbid(unsafe_code)]

use thiserror::Error;

/// Result alias for engine construction.
pub type Result<T> = std::result::Result<T, SelectError>;

/// The only recognized failure: the container could not be resolved at
/// construction. Every other edge case (empty candidate list, out-of-range
/// index, missing callback) is a silent no-op.
#[derive(Debug, Error)]
pub enum SelectError {
    #[error("container element not found: {target}")]
    ContainerNotFound { target: String },
}
