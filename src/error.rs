// SPDX-License-Identifier: MPL-2.0
//! Crate-level error types.

use std::fmt;

/// Errors surfaced by the fallible crate APIs (configuration persistence).
///
/// Media load failures never travel through this type: they stay on the
/// item as [`LoadState::Failed`](crate::domain::LoadState) carrying a
/// [`MediaError`], and the lightbox renders an error state instead of
/// propagating.
#[derive(Debug, Clone)]
pub enum Error {
    Config(String),
}

/// Errors that can occur while loading or decoding a media item.
///
/// Produced by the embedding shell (via
/// [`NavigationController::notify_media_failed`](crate::controller::NavigationController::notify_media_failed))
/// or by the controller itself when a decode completion carries invalid data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaError {
    /// The decoded dimensions are invalid (zero on either axis).
    InvalidDimensions {
        /// The width that was reported.
        width: u32,
        /// The height that was reported.
        height: u32,
    },

    /// The media data is corrupted or cannot be decoded.
    DecodeFailed(String),

    /// The media source could not be found (e.g., broken URL).
    NotFound,

    /// The source could not be read (network or file I/O).
    Io(String),
}

impl fmt::Display for MediaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaError::InvalidDimensions { width, height } => {
                write!(f, "Invalid dimensions: {width}x{height}")
            }
            MediaError::DecodeFailed(msg) => write!(f, "Decoding failed: {msg}"),
            MediaError::NotFound => write!(f, "Media source not found"),
            MediaError::Io(msg) => write!(f, "I/O error: {msg}"),
        }
    }
}

impl std::error::Error for MediaError {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Config Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
