//! Error types for the extraction layer.
//!
//! The split matters here: only [`ExtractError::InvalidConfig`] ever
//! escapes [`Extractor::extract`](crate::Extractor::extract). The
//! document-level failures are folded into
//! [`ExtractionResult::error`](crate::ExtractionResult) as human-readable
//! messages, so a batch of N documents always yields exactly N results and
//! one unreadable file never aborts its neighbours.

use canonical::ConfigError;
use thiserror::Error;

/// Failure reported by a collaborator reader.
///
/// Carries the reader's message verbatim (corrupt file, unsupported
/// encoding, password protection); the extractor records it against the
/// document that caused it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct SourceError(pub String);

impl SourceError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Errors produced while extracting tags from one document.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ExtractError {
    /// The caller's segment config has no enabled segments. Rejected before
    /// any reader runs; with nothing selected every key would collapse to
    /// the empty string.
    #[error("invalid segment config: {0}")]
    InvalidConfig(#[from] ConfigError),

    /// Neither extension nor content type maps to an extraction strategy.
    #[error("unsupported document type: {0}")]
    UnsupportedType(String),

    /// A collaborator reader failed for this document. Fatal to a
    /// comparison only when the reference document is the one affected.
    #[error("could not read document: {0}")]
    Read(#[from] SourceError),
}
