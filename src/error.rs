//! Error types for the image viewer application.

use thiserror::Error;

/// Why an image could not be put on screen.
///
/// The `Display` output is the underlying message only; callers add the
/// user-facing prefix.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The path handed to the loader was empty.
    #[error("ファイルパスが空です")]
    EmptyPath,
    /// Reading the file failed (missing, permission denied, ...).
    #[error("{0}")]
    Io(#[from] std::io::Error),
    /// The bytes were read but are not a decodable image.
    #[error("{0}")]
    Decode(#[from] image::ImageError),
}

/// Type alias for Results in this application.
pub type Result<T> = std::result::Result<T, LoadError>;
