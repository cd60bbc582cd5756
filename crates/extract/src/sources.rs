//! Collaborator seams for document decoding.
//!
//! Real PDF rendering and spreadsheet I/O live outside this crate. The
//! extractor only asks two questions: "give me this document's text" and
//! "give me this document's cells". Anything that can answer is a source.
//!
//! The built-in implementations cover the trivial encodings (UTF-8 text,
//! delimiter-separated cells). They double as deterministic fixtures in
//! tests, the same way an in-memory backend stands in for a real store.

use crate::error::SourceError;
use crate::types::Cell;

/// Text extraction collaborator (e.g. a PDF text-layer service).
pub trait TextSource: Send + Sync {
    /// Returns the document's flattened text stream.
    fn extract_text(&self, bytes: &[u8]) -> Result<String, SourceError>;
}

/// Spreadsheet reading collaborator.
pub trait TableSource: Send + Sync {
    /// Returns every non-empty cell with its reference, reading order.
    fn read_cells(&self, bytes: &[u8]) -> Result<Vec<Cell>, SourceError>;
}

/// Treats the document bytes as UTF-8 text.
///
/// Serves plain-text documents directly and deterministic fixtures in
/// tests, where the fixture text is simply the document bytes.
#[derive(Debug, Default, Clone, Copy)]
pub struct Utf8TextSource;

impl TextSource for Utf8TextSource {
    fn extract_text(&self, bytes: &[u8]) -> Result<String, SourceError> {
        String::from_utf8(bytes.to_vec())
            .map_err(|err| SourceError::new(format!("document is not valid UTF-8: {err}")))
    }
}

/// Splits UTF-8 content into cells on line breaks and a delimiter.
///
/// Covers delimiter-separated exports (`;` by default, the common export
/// delimiter in this domain) and in-memory fixtures. Real spreadsheet
/// formats stay behind an external [`TableSource`].
#[derive(Debug, Clone, Copy)]
pub struct DelimitedTableSource {
    pub delimiter: char,
}

impl Default for DelimitedTableSource {
    fn default() -> Self {
        Self { delimiter: ';' }
    }
}

impl TableSource for DelimitedTableSource {
    fn read_cells(&self, bytes: &[u8]) -> Result<Vec<Cell>, SourceError> {
        let text = String::from_utf8(bytes.to_vec())
            .map_err(|err| SourceError::new(format!("document is not valid UTF-8: {err}")))?;
        let mut cells = Vec::new();
        for (row, line) in text.lines().enumerate() {
            for (column, value) in line.split(self.delimiter).enumerate() {
                let value = value.trim();
                if value.is_empty() {
                    continue;
                }
                cells.push(Cell {
                    reference: cell_reference(row, column),
                    text: value.to_string(),
                });
            }
        }
        Ok(cells)
    }
}

/// Spreadsheet-style reference for a zero-based row/column pair (`B7`).
fn cell_reference(row: usize, column: usize) -> String {
    let mut letters = String::new();
    let mut c = column;
    loop {
        letters.insert(0, (b'A' + (c % 26) as u8) as char);
        if c < 26 {
            break;
        }
        c = c / 26 - 1;
    }
    format!("{}{}", letters, row + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utf8_source_round_trips_text() {
        let text = Utf8TextSource
            .extract_text("=3601.009-A".as_bytes())
            .expect("valid utf-8");
        assert_eq!(text, "=3601.009-A");
    }

    #[test]
    fn utf8_source_rejects_invalid_bytes() {
        let err = Utf8TextSource
            .extract_text(&[0xff, 0xfe])
            .expect_err("invalid utf-8");
        assert!(err.0.contains("UTF-8"));
    }

    #[test]
    fn delimited_source_splits_rows_and_columns() {
        let cells = DelimitedTableSource::default()
            .read_cells(b"Komponent;Tag\nVifte;=3601.009-JVZ0025")
            .expect("valid content");
        let refs: Vec<&str> = cells.iter().map(|c| c.reference.as_str()).collect();
        assert_eq!(refs, vec!["A1", "B1", "A2", "B2"]);
        assert_eq!(cells[3].text, "=3601.009-JVZ0025");
    }

    #[test]
    fn delimited_source_skips_empty_cells() {
        let cells = DelimitedTableSource::default()
            .read_cells(b";3601.010-B\n\n ; ")
            .expect("valid content");
        assert_eq!(cells.len(), 1);
        assert_eq!(cells[0].reference, "B1");
    }

    #[test]
    fn cell_references_extend_past_z() {
        assert_eq!(cell_reference(0, 0), "A1");
        assert_eq!(cell_reference(6, 1), "B7");
        assert_eq!(cell_reference(0, 25), "Z1");
        assert_eq!(cell_reference(0, 26), "AA1");
        assert_eq!(cell_reference(0, 27), "AB1");
    }
}
