use thiserror::Error;

/// Top-level error type for the spikefield generator.
#[derive(Debug, Error)]
pub enum SpikefieldError {
    #[error(transparent)]
    Export(#[from] ExportError),
}

/// Errors related to mesh serialization.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("triangle index {index} is out of bounds ({vertex_count} vertices)")]
    IndexOutOfBounds { index: u32, vertex_count: usize },

    #[error("failed to write mesh: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for results using [`SpikefieldError`].
pub type Result<T> = std::result::Result<T, SpikefieldError>;
