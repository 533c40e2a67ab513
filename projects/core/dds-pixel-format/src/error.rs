//! Error types for pixel format decoding.

use thiserror::Error;

/// Result type for pixel format decoding.
pub type PixelFormatResult<T> = Result<T, PixelFormatError>;

/// Errors that abort decoding of a pixel format block.
///
/// Anything that can be represented as data (such as an unexpected declared
/// size) is reported through [`PixelFormatAdvisory`] instead.
///
/// [`PixelFormatAdvisory`]: crate::pixel_format::PixelFormatAdvisory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PixelFormatError {
    /// Fewer than 32 bytes are available at the requested offset.
    #[error("Input too short for pixel format at offset {offset}: required {required} bytes, got {actual} bytes")]
    Truncated {
        offset: usize,
        required: usize,
        actual: usize,
    },
}
