//! TFM Extraction Layer
//!
//! This is where documents enter the comparison pipeline. We take raw bytes
//! plus a filename, pull every tag token out of the content, and hand back
//! keyed entries the matrix builder can work with.
//!
//! ## What we do here
//!
//! - **Classify documents** - Extension first, content-type hint second.
//!   Text-bearing documents are scanned as one flattened stream, tabular
//!   ones cell by cell.
//! - **Scan for tags** - One compiled pattern owns the tag shape
//!   (`=3601.009-JVZ0025` and friends). Everything it finds becomes a raw
//!   token with its location.
//! - **Normalize and key** - Tokens run through the canonical layer; the
//!   malformed ones are dropped and counted, never fatal.
//! - **Isolate failures** - A reader that cannot decode one document marks
//!   that document's result and nothing else. A batch of N in is N out.
//! - **Log everything** - Structured logs via tracing for debugging
//!   extraction in production.
//!
//! ## Main entry point
//!
//! Build an [`Extractor`] around your readers (or [`Extractor::in_memory`]
//! for the built-ins), then call [`Extractor::extract`] per document.
//!
//! ## Example
//!
//! ```
//! use canonical::SegmentConfig;
//! use extract::{Extractor, RawDocument};
//!
//! let extractor = Extractor::in_memory();
//! let doc = RawDocument::new(
//!     "plan.txt",
//!     b"Ventil =3601.009-JVZ0025 ved aggregat".to_vec(),
//! );
//! let result = extractor.extract(&doc, &SegmentConfig::full_tag()).unwrap();
//!
//! assert_eq!(result.entries.len(), 1);
//! assert_eq!(result.entries[0].key, "3601.009|JVZ0025");
//! assert_eq!(result.error, None);
//! ```

use std::time::Instant;

use tracing::{Level, debug, info, warn};

use canonical::{SegmentConfig, comparison_key, normalize_tag};

mod error;
mod pattern;
mod sources;
mod types;

pub use crate::error::{ExtractError, SourceError};
pub use crate::sources::{DelimitedTableSource, TableSource, TextSource, Utf8TextSource};
pub use crate::types::{
    Cell, DocumentKind, ExtractionEntry, ExtractionResult, RawDocument, RawToken, TokenLocation,
    classify,
};

/// Pulls tag tokens out of documents via collaborator readers.
pub struct Extractor {
    text: Box<dyn TextSource>,
    table: Box<dyn TableSource>,
}

impl Extractor {
    pub fn new(text: Box<dyn TextSource>, table: Box<dyn TableSource>) -> Self {
        Self { text, table }
    }

    /// Extractor over the built-in readers: UTF-8 text plus
    /// delimiter-split cells. Enough for plain-text and delimited
    /// documents, and for deterministic tests.
    pub fn in_memory() -> Self {
        Self::new(
            Box::new(Utf8TextSource),
            Box::new(DelimitedTableSource::default()),
        )
    }

    /// Extracts every tag from one document.
    ///
    /// The only error that propagates is [`ExtractError::InvalidConfig`];
    /// everything document-level (unknown kind, reader failure) lands in
    /// [`ExtractionResult::error`] so batch callers get one result per
    /// document, always.
    pub fn extract(
        &self,
        doc: &RawDocument,
        cfg: &SegmentConfig,
    ) -> Result<ExtractionResult, ExtractError> {
        let start = Instant::now();
        if let Err(err) = cfg.validate() {
            let elapsed_micros = start.elapsed().as_micros();
            warn!(file_name = %doc.file_name, error = %err, elapsed_micros, "extract_failure");
            return Err(ExtractError::InvalidConfig(err));
        }

        let span = tracing::span!(
            Level::INFO,
            "extract.extract",
            file_name = %doc.file_name
        );
        let _guard = span.enter();

        match self.extract_inner(doc, cfg) {
            Ok((entries, dropped)) => {
                let elapsed_micros = start.elapsed().as_micros();
                info!(
                    file_name = %doc.file_name,
                    entries = entries.len(),
                    dropped,
                    elapsed_micros,
                    "extract_success"
                );
                Ok(ExtractionResult {
                    file_name: doc.file_name.clone(),
                    entries,
                    error: None,
                })
            }
            Err(err) => {
                let elapsed_micros = start.elapsed().as_micros();
                warn!(
                    file_name = %doc.file_name,
                    error = %err,
                    elapsed_micros,
                    "extract_document_failed"
                );
                Ok(ExtractionResult::failed(
                    doc.file_name.clone(),
                    err.to_string(),
                ))
            }
        }
    }

    /// Core extraction: classify, read, scan, key.
    fn extract_inner(
        &self,
        doc: &RawDocument,
        cfg: &SegmentConfig,
    ) -> Result<(Vec<ExtractionEntry>, usize), ExtractError> {
        let kind = doc
            .kind()
            .ok_or_else(|| ExtractError::UnsupportedType(doc.file_name.clone()))?;

        let mut entries = Vec::new();
        let mut dropped = 0usize;
        match kind {
            DocumentKind::TextBearing => {
                let text = self.text.extract_text(&doc.bytes)?;
                for (start, end, raw) in pattern::scan_text(&text) {
                    push_entry(
                        raw,
                        TokenLocation::Text { start, end },
                        cfg,
                        &mut entries,
                        &mut dropped,
                    );
                }
            }
            DocumentKind::Tabular => {
                let cells = self.table.read_cells(&doc.bytes)?;
                for cell in &cells {
                    for (_, _, raw) in pattern::scan_text(&cell.text) {
                        push_entry(
                            raw,
                            TokenLocation::Cell {
                                reference: cell.reference.clone(),
                            },
                            cfg,
                            &mut entries,
                            &mut dropped,
                        );
                    }
                }
            }
        }
        Ok((entries, dropped))
    }
}

/// Normalizes one raw match and appends the keyed entry. Malformed tokens
/// bump the drop counter instead.
fn push_entry(
    raw: &str,
    location: TokenLocation,
    cfg: &SegmentConfig,
    entries: &mut Vec<ExtractionEntry>,
    dropped: &mut usize,
) {
    match normalize_tag(raw) {
        Some(code) => entries.push(ExtractionEntry {
            key: comparison_key(&code, cfg),
            token: RawToken {
                text: raw.to_string(),
                location,
            },
        }),
        None => {
            *dropped += 1;
            debug!(token = raw, "malformed_token_dropped");
        }
    }
}
