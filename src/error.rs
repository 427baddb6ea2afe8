use thiserror::Error;

/// Errors reported by buffers, views and the convolution operators.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvError {
    #[error("incorrect output shape for 1D convolution: expected {expected}, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },

    #[error("index {index} out of bounds for length {len}")]
    OutOfBounds { index: usize, len: usize },

    #[error("invalid range {start}..{end} for length {len}")]
    InvalidRange { start: usize, end: usize, len: usize },

    #[error("kernel of length {kernel} does not fit into input of length {input}")]
    KernelTooLong { kernel: usize, input: usize },

    #[error("kernel is empty")]
    EmptyKernel,

    #[error("alignment modulus must be positive, got {0}")]
    InvalidAlignment(usize),

    #[error("dispatch path {path} cannot service a kernel of length {kernel}")]
    PathMismatch { path: &'static str, kernel: usize },
}

pub type Result<T, E = ConvError> = std::result::Result<T, E>;
