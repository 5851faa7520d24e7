//! Texta error types

/// Texta error types
#[derive(Debug, thiserror::Error)]
pub enum TextaError {
    /// Requested classifier id is not in the supported table.
    ///
    /// The only error the analysis path surfaces: everything else a
    /// classifier can do wrong (malformed output, missing prediction,
    /// unrecognized label text) degrades to a neutral default instead.
    #[error("model not available: {0}")]
    ModelNotAvailable(String),

    // Data errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for Texta operations
pub type Result<T> = std::result::Result<T, TextaError>;
