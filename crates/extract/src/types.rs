//! Core types shared across the extraction layer.

use serde::{Deserialize, Serialize};

/// An input document handed to the extractor: raw bytes plus the naming
/// metadata the upload layer knows about.
///
/// The extractor never touches the filesystem; whoever owns the upload
/// (request handler, batch job) reads the bytes and builds one of these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawDocument {
    pub file_name: String,
    /// MIME hint from the upload layer. Consulted only when the extension
    /// does not identify the document kind.
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl RawDocument {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: None,
            bytes,
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// The extraction strategy this document classifies into, if any.
    pub fn kind(&self) -> Option<DocumentKind> {
        classify(&self.file_name, self.content_type.as_deref())
    }
}

/// The two extraction strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentKind {
    /// One flattened text stream, scanned as a single block (PDF text
    /// layer, plain text).
    TextBearing,
    /// Cell values scanned one by one (spreadsheets, delimited exports).
    Tabular,
}

/// Classifies a document by filename extension, falling back to the
/// content-type hint. `None` means no strategy applies; the extractor
/// reports that as a per-document failure rather than guessing.
pub fn classify(file_name: &str, content_type: Option<&str>) -> Option<DocumentKind> {
    let extension = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase());
    match extension.as_deref() {
        Some("pdf" | "txt") => return Some(DocumentKind::TextBearing),
        Some("xlsx" | "xlsm" | "xls" | "csv") => return Some(DocumentKind::Tabular),
        _ => {}
    }
    match content_type {
        Some("application/pdf" | "text/plain") => Some(DocumentKind::TextBearing),
        Some(
            "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
            | "application/vnd.ms-excel"
            | "text/csv",
        ) => Some(DocumentKind::Tabular),
        _ => None,
    }
}

/// Where a raw token was found. Opaque to the comparison core; carried
/// through so a UI can highlight the original occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenLocation {
    /// Byte offsets into the flattened text stream.
    Text { start: usize, end: usize },
    /// Cell reference as reported by the table reader (e.g. `B7`).
    Cell { reference: String },
}

/// A tag string exactly as found in a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawToken {
    pub text: String,
    pub location: TokenLocation,
}

/// One extracted occurrence: the comparison key it normalized to, plus the
/// raw token that produced it. Many tokens may map to one key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionEntry {
    pub key: String,
    pub token: RawToken,
}

/// Per-document extraction outcome.
///
/// `error` set means the document could not be read; `entries` is then
/// empty and the document contributes nothing to a comparison, but it is
/// still reported so a batch of N documents yields exactly N results.
/// Zero entries with no error is a valid outcome: the document simply
/// contains no tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub file_name: String,
    pub entries: Vec<ExtractionEntry>,
    pub error: Option<String>,
}

impl ExtractionResult {
    /// Result for a document whose reader failed.
    pub fn failed(file_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            entries: Vec::new(),
            error: Some(message.into()),
        }
    }

    pub fn is_failed(&self) -> bool {
        self.error.is_some()
    }

    /// The comparison keys in this result, scan order, duplicates included.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.key.as_str())
    }
}

/// One non-empty cell from a tabular document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    /// Spreadsheet-style reference (`B7`), used as the token location.
    pub reference: String,
    pub text: String,
}
