//! Error types for the presentation core.
//!
//! Upstream data never produces an error here: malformed text, unknown
//! control bytes and events for closed conversations are all absorbed.
//! What remains are the edges that can genuinely fail, namely building a
//! configuration and handing events to a controller that no longer exists.

use thiserror::Error;

/// Convenience type alias for Results using [`ViewError`].
pub type Result<T, E = ViewError> = std::result::Result<T, E>;

/// Top-level errors.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ViewError {
    /// The configuration could not be built.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// An event could not be queued.
    #[error("dispatch error: {0}")]
    Dispatch(#[from] DispatchError),
}

/// Errors encountered while building a [`ViewConfig`](crate::config::ViewConfig).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    /// The fallback encoding label is not known to `encoding_rs`.
    #[error("unknown encoding label: {0}")]
    UnknownEncoding(String),

    /// A palette override did not contain exactly 16 entries.
    #[error("palette must have 16 entries, got {0}")]
    PaletteLength(usize),

    /// A palette entry was not of the form `#rrggbb`.
    #[error("invalid palette entry {index}: {value}")]
    InvalidColor {
        /// Position of the entry in the palette.
        index: usize,
        /// The raw entry.
        value: String,
    },

    /// The TOML document could not be decoded.
    #[error("invalid config document: {0}")]
    Toml(String),
}

/// Errors encountered when queueing events for the owning context.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum DispatchError {
    /// The receiving controller has been dropped.
    #[error("event queue closed")]
    Closed,
}
