use std::collections::HashSet;
use std::time::Instant;

use canonical::compare_codes;
use extract::ExtractionResult;

use crate::metrics::metrics_recorder;
use crate::types::{CompareError, ComparisonMatrix, DocumentPresence, MatrixEntry};


/// Builds the presence matrix for one reference document against a set of
/// comparison documents.
///
/// Fails only when the reference extraction itself failed; comparison
/// documents whose extraction failed stay listed in the matrix with
/// `present: false` everywhere. An empty comparison set is fine and yields a
/// reference-only matrix, as is a reference with zero entries.
pub fn build_matrix(
    main: &ExtractionResult,
    others: &[ExtractionResult],
) -> Result<ComparisonMatrix, CompareError> {
    let start = Instant::now();

    if let Some(message) = &main.error {
        return Err(CompareError::ReferenceUnreadable {
            file_name: main.file_name.clone(),
            message: message.clone(),
        });
    }

    // Scan order is fixed: reference first, then comparisons as given. It
    // decides first-seen key order, source order, and presence order alike.
    let documents: Vec<&ExtractionResult> = std::iter::once(main).chain(others.iter()).collect();

    let key_sets: Vec<HashSet<&str>> = documents.iter().map(|doc| doc.keys().collect()).collect();

    let mut seen: HashSet<&str> = HashSet::new();
    let mut keys: Vec<&str> = Vec::new();
    for doc in &documents {
        for key in doc.keys() {
            if seen.insert(key) {
                keys.push(key);
            }
        }
    }

    let mut entries: Vec<MatrixEntry> = keys
        .into_iter()
        .map(|key| {
            let source_documents = documents
                .iter()
                .zip(&key_sets)
                .filter(|(_, keys)| keys.contains(key))
                .map(|(doc, _)| doc.file_name.clone())
                .collect();
            let presence = documents
                .iter()
                .zip(&key_sets)
                .map(|(doc, keys)| DocumentPresence {
                    file_name: doc.file_name.clone(),
                    present: keys.contains(key),
                })
                .collect();
            MatrixEntry {
                key: key.to_string(),
                source_documents,
                presence,
            }
        })
        .collect();

    // Stable sort: keys that tie numerically keep their first-seen order.
    entries.sort_by(|a, b| compare_codes(&a.key, &b.key));

    let matrix = ComparisonMatrix {
        main_file_name: main.file_name.clone(),
        file_names: others.iter().map(|doc| doc.file_name.clone()).collect(),
        entries,
    };

    let latency = start.elapsed();
    if let Some(recorder) = metrics_recorder() {
        recorder.record_compare(
            &matrix.main_file_name,
            documents.len(),
            matrix.entries.len(),
            latency,
        );
    }

    Ok(matrix)
}
