use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Presence of one comparison key in one named document.
///
/// Kept as a named pair rather than a map entry so serialized matrices list
/// documents in a stable order: reference first, then the comparison set as
/// given by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentPresence {
    /// Document the flag refers to.
    pub file_name: String,
    /// Whether the key occurred in that document.
    pub present: bool,
}

/// One row of the matrix: a comparison key, where it came from, and which
/// documents carry it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatrixEntry {
    /// The comparison key this row describes.
    pub key: String,
    /// Documents whose tokens produced this key, deduplicated, in the order
    /// the documents were scanned. The reference document comes first when it
    /// contains the key.
    pub source_documents: Vec<String>,
    /// One flag per document in scan order, reference document first.
    /// Documents whose extraction failed are listed with `present: false`,
    /// never omitted.
    pub presence: Vec<DocumentPresence>,
}

impl MatrixEntry {
    /// Presence flag for a named document. `false` for names the matrix does
    /// not know about.
    pub fn present_in(&self, file_name: &str) -> bool {
        self.presence
            .iter()
            .any(|p| p.file_name == file_name && p.present)
    }
}

/// Cross-document presence matrix for one reference document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonMatrix {
    /// The reference document.
    pub main_file_name: String,
    /// The comparison set, in the order the caller supplied it. Does not
    /// include the reference document.
    pub file_names: Vec<String>,
    /// Matrix rows in natural key order.
    pub entries: Vec<MatrixEntry>,
}

impl ComparisonMatrix {
    /// Row for a given key, if any document produced it.
    pub fn entry(&self, key: &str) -> Option<&MatrixEntry> {
        self.entries.iter().find(|e| e.key == key)
    }
}

/// Errors from matrix building.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CompareError {
    /// The reference document's extraction failed. Without a readable
    /// reference there is nothing meaningful to compare against.
    #[error("cannot read reference document {file_name}: {message}")]
    ReferenceUnreadable {
        /// The reference document.
        file_name: String,
        /// The extraction error, verbatim.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry() -> MatrixEntry {
        MatrixEntry {
            key: "3601.009".to_string(),
            source_documents: vec!["hoveddokument.pdf".to_string()],
            presence: vec![
                DocumentPresence {
                    file_name: "hoveddokument.pdf".to_string(),
                    present: true,
                },
                DocumentPresence {
                    file_name: "ventilasjon.xlsx".to_string(),
                    present: false,
                },
            ],
        }
    }

    #[test]
    fn present_in_reads_the_flag() {
        let entry = entry();
        assert!(entry.present_in("hoveddokument.pdf"));
        assert!(!entry.present_in("ventilasjon.xlsx"));
        assert!(!entry.present_in("unknown.pdf"));
    }

    #[test]
    fn presence_serializes_in_document_order() {
        let json = serde_json::to_string(&entry()).expect("entry serializes");
        assert_eq!(
            json,
            "{\"key\":\"3601.009\",\
             \"source_documents\":[\"hoveddokument.pdf\"],\
             \"presence\":[\
             {\"file_name\":\"hoveddokument.pdf\",\"present\":true},\
             {\"file_name\":\"ventilasjon.xlsx\",\"present\":false}]}"
        );
    }

    #[test]
    fn matrix_round_trips_through_serde() {
        let matrix = ComparisonMatrix {
            main_file_name: "hoveddokument.pdf".to_string(),
            file_names: vec!["ventilasjon.xlsx".to_string()],
            entries: vec![entry()],
        };
        let json = serde_json::to_string(&matrix).expect("matrix serializes");
        let back: ComparisonMatrix = serde_json::from_str(&json).expect("matrix deserializes");
        assert_eq!(back, matrix);
    }
}
