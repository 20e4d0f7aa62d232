//! Error types for sigmatch.

use thiserror::Error;

/// Result alias for sigmatch operations.
pub type SigMatchResult<T> = std::result::Result<T, SigMatchError>;

/// Errors that can occur when building signatures or scanning a corpus.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SigMatchError {
    /// A signature grid has zero width or height.
    #[error("invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
    /// The sample count does not equal `width * height`.
    #[error("sample count mismatch: needed {needed}, got {got}")]
    LengthMismatch { needed: usize, got: usize },
    /// The corpus holds no record under this name.
    #[error("unknown record: {name}")]
    UnknownRecord { name: String },
    /// The corpus failed to resolve a name for another reason.
    #[error("lookup of {name} failed: {reason}")]
    Lookup { name: String, reason: String },
    /// A record with this name is already stored.
    #[error("duplicate record: {name}")]
    DuplicateRecord { name: String },
    /// Record names must be non-empty.
    #[error("record name is empty")]
    EmptyName,
    /// Image decoding or encoding failed.
    #[error("image io error: {reason}")]
    ImageIo { reason: String },
}
