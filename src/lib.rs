//! Workspace umbrella crate for TFM document comparison.
//!
//! This crate stitches together tag extraction and matrix building so callers
//! can go from raw project documents to a cross-document presence matrix with
//! a single API entry point. The member crates stay usable on their own:
//! `canonical` for tag normalization and keying, `extract` for pulling tag
//! tokens out of documents, `compare` for building the matrix.

pub use canonical::{
    CanonicalCode, ConfigError, KEY_DELIMITER, ParsedTag, SegmentConfig, SystemGroup,
    compare_codes, comparison_key, group_by_system, normalize_tag, resolve_tag, sort_codes,
};
pub use compare::{
    CompareError, CompareMetrics, ComparisonMatrix, DocumentPresence, MatrixEntry, build_matrix,
    set_compare_metrics,
};
pub use extract::{
    Cell, DelimitedTableSource, DocumentKind, ExtractError, ExtractionEntry, ExtractionResult,
    Extractor, RawDocument, RawToken, SourceError, TableSource, TextSource, TokenLocation,
    Utf8TextSource, classify,
};

use std::error::Error;
use std::fmt;

use tracing::info;

/// Errors that can occur while running documents through the full pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineError {
    /// The comparison set was empty. A matrix of the reference document
    /// against nothing answers no review question, so the facade refuses to
    /// build one.
    EmptyComparisonSet,
    Extract(ExtractError),
    Compare(CompareError),
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineError::EmptyComparisonSet => {
                write!(f, "comparison requires at least one comparison document")
            }
            PipelineError::Extract(err) => write!(f, "extraction failure: {err}"),
            PipelineError::Compare(err) => write!(f, "comparison failure: {err}"),
        }
    }
}

impl Error for PipelineError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            PipelineError::Extract(err) => Some(err),
            PipelineError::Compare(err) => Some(err),
            PipelineError::EmptyComparisonSet => None,
        }
    }
}

impl From<ExtractError> for PipelineError {
    fn from(value: ExtractError) -> Self {
        PipelineError::Extract(value)
    }
}

impl From<CompareError> for PipelineError {
    fn from(value: CompareError) -> Self {
        PipelineError::Compare(value)
    }
}

/// Extract tags from a batch of documents with one shared configuration.
///
/// Returns one [`ExtractionResult`] per input document, in input order.
/// Unreadable documents surface inside their result rather than failing the
/// batch; only an invalid [`SegmentConfig`] is an error here, and it is
/// rejected before any document is touched.
pub fn extract_documents(
    extractor: &Extractor,
    documents: &[RawDocument],
    cfg: &SegmentConfig,
) -> Result<Vec<ExtractionResult>, ExtractError> {
    cfg.validate()?;
    documents
        .iter()
        .map(|doc| extractor.extract(doc, cfg))
        .collect()
}

/// Run extraction over a reference document and its comparison set, then
/// build the presence matrix.
///
/// Comparison documents that cannot be read stay listed in the matrix with
/// all-false presence. A reference document that cannot be read aborts with
/// [`PipelineError::Compare`], and an empty comparison set is rejected up
/// front.
pub fn compare_documents(
    extractor: &Extractor,
    main: &RawDocument,
    others: &[RawDocument],
    cfg: &SegmentConfig,
) -> Result<ComparisonMatrix, PipelineError> {
    if others.is_empty() {
        return Err(PipelineError::EmptyComparisonSet);
    }

    let main_result = extractor.extract(main, cfg)?;
    let other_results = others
        .iter()
        .map(|doc| extractor.extract(doc, cfg))
        .collect::<Result<Vec<_>, _>>()?;

    let matrix = build_matrix(&main_result, &other_results)?;
    info!(
        main_file_name = %matrix.main_file_name,
        document_count = others.len() + 1,
        entry_count = matrix.entries.len(),
        "comparison_complete"
    );
    Ok(matrix)
}
