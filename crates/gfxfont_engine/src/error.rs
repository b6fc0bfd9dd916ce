//! Unified error types for gfxfont_engine

use thiserror::Error;

/// Main error type for font editing and export operations
#[derive(Debug, Error)]
pub enum FontError {
    // === Model Contract Errors ===
    #[error("Pixel ({x}, {y}) of {ch:?} is outside the font")]
    OutOfRange { ch: char, x: i32, y: i32 },

    #[error("No glyph for code {code} in the current range")]
    NotFound { code: u32 },

    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("Glyph is {actual_width}x{actual_height}, font is {expected_width}x{expected_height}")]
    DimensionMismatch {
        expected_width: i32,
        expected_height: i32,
        actual_width: i32,
        actual_height: i32,
    },

    #[error("Invalid glyph pattern: {message}")]
    InvalidPattern { message: String },

    // === Export Errors ===
    #[error("Font does not fit the GFX format: {message}")]
    ExceedsFormatLimits { message: String },

    // === Persistence Errors ===
    #[error("Malformed font data: {message}")]
    MalformedBlob { message: String },

    #[error("Failed to serialize font data: {message}")]
    Serialize { message: String },

    // === I/O Errors ===
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for gfxfont_engine operations
pub type Result<T> = std::result::Result<T, FontError>;

// === Convenience constructors ===
impl FontError {
    /// Create an invalid configuration error
    pub fn invalid_configuration(message: impl Into<String>) -> Self {
        Self::InvalidConfiguration { message: message.into() }
    }

    /// Create a malformed blob error
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedBlob { message: message.into() }
    }

    /// Create a format limit error
    pub fn exceeds_limits(message: impl Into<String>) -> Self {
        Self::ExceedsFormatLimits { message: message.into() }
    }
}
