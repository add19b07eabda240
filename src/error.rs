//! Error types for the rendering engine and its collaborators

use thiserror::Error;

/// Result type alias for blockprint operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while editing, storing or exporting templates.
///
/// Rendering itself never fails: malformed block data falls back through
/// style resolution and problems surface as [`crate::render::RenderWarning`]s.
#[derive(Error, Debug)]
pub enum Error {
    /// A dimension without a resolvable unit, or a value out of range for its unit
    #[error("Invalid dimension: {0}")]
    InvalidDimension(String),

    /// No block with the given id exists in the template
    #[error("Block not found: {0}")]
    BlockNotFound(String),

    /// An edit carried content of a different kind than the block it targets
    #[error("Block kind mismatch: expected {expected}, found {found}")]
    KindMismatch { expected: String, found: String },

    /// Two blocks share an id
    #[error("Duplicate block id: {0}")]
    DuplicateBlockId(String),

    /// A list operation addressed a position past the end of the block list
    #[error("Index {index} out of range for {len} blocks")]
    IndexOutOfRange { index: usize, len: usize },

    /// Invalid resize gesture transition
    #[error("Gesture error: {0}")]
    Gesture(String),

    /// Key-value or template store failure
    #[error("Store error: {0}")]
    Store(String),

    /// Every clipboard strategy failed
    #[error("Clipboard write failed: {0}")]
    Clipboard(String),

    /// JSON (de)serialization failure
    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Filesystem failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
