use tfm::{
    CompareError, ExtractError, Extractor, PipelineError, RawDocument, SegmentConfig,
    compare_documents, extract_documents,
};

fn text_document(file_name: &str, content: &str) -> RawDocument {
    RawDocument::new(file_name, content.as_bytes().to_vec())
}

#[test]
fn unreadable_reference_aborts_the_comparison() {
    let extractor = Extractor::in_memory();
    let cfg = SegmentConfig::default();

    // Invalid UTF-8 in a text document makes the reference extraction fail.
    let main = RawDocument::new("hoveddokument.txt", vec![0xff, 0xfe, 0x00, 0x01]);
    let other = text_document("ventilasjon.txt", "3601.009-JVZ0025");

    let result = compare_documents(&extractor, &main, &[other], &cfg);
    match result {
        Err(PipelineError::Compare(CompareError::ReferenceUnreadable { file_name, .. })) => {
            assert_eq!(file_name, "hoveddokument.txt");
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn unreadable_comparison_document_stays_in_the_matrix() {
    let extractor = Extractor::in_memory();
    let cfg = SegmentConfig::default();

    let main = text_document("hoveddokument.txt", "=3601.009-JVZ0025");
    let broken = RawDocument::new("roer.txt", vec![0xff, 0xfe]);

    let matrix =
        compare_documents(&extractor, &main, &[broken], &cfg).expect("pipeline should succeed");

    assert_eq!(matrix.file_names, vec!["roer.txt"]);
    let entry = matrix.entry("3601.009|JVZ0025").expect("reference key");
    assert!(entry.present_in("hoveddokument.txt"));
    assert!(!entry.present_in("roer.txt"));
    assert!(!entry.source_documents.iter().any(|name| name == "roer.txt"));
}

#[test]
fn unsupported_document_type_lands_in_its_result() {
    let extractor = Extractor::in_memory();
    let cfg = SegmentConfig::default();

    let word_document = RawDocument::new("beskrivelse.docx", b"PK\x03\x04".to_vec());
    let results =
        extract_documents(&extractor, &[word_document], &cfg).expect("config is valid");

    assert_eq!(results.len(), 1);
    assert!(results[0].is_failed());
    let message = results[0].error.as_deref().unwrap_or_default();
    assert!(message.contains("unsupported document type"));
}

#[test]
fn all_segments_disabled_is_rejected_up_front() {
    let extractor = Extractor::in_memory();
    let cfg = SegmentConfig {
        byggnr: false,
        system: false,
        komponent: false,
        typekode: false,
    };
    let main = text_document("hoveddokument.txt", "=3601.009-JVZ0025");
    let other = text_document("ventilasjon.txt", "3601.009-JVZ0025");

    let result = compare_documents(&extractor, &main, &[other], &cfg);
    assert!(matches!(
        result,
        Err(PipelineError::Extract(ExtractError::InvalidConfig(_)))
    ));
}

#[test]
fn empty_comparison_set_is_rejected() {
    let extractor = Extractor::in_memory();
    let cfg = SegmentConfig::default();
    let main = text_document("hoveddokument.txt", "=3601.009-JVZ0025");

    let result = compare_documents(&extractor, &main, &[], &cfg);
    assert!(matches!(result, Err(PipelineError::EmptyComparisonSet)));

    let err = result.expect_err("empty comparison set");
    assert!(err.to_string().contains("at least one comparison document"));
}

#[test]
fn documents_without_tags_compare_cleanly() {
    let extractor = Extractor::in_memory();
    let cfg = SegmentConfig::default();

    let main = text_document("hoveddokument.txt", "Generelle krav til utfoerelse.");
    let other = text_document("ventilasjon.txt", "Ingen merkede komponenter.");

    let matrix =
        compare_documents(&extractor, &main, &[other], &cfg).expect("pipeline should succeed");
    assert!(matrix.entries.is_empty());
    assert_eq!(matrix.file_names, vec!["ventilasjon.txt"]);
}

#[test]
fn malformed_tokens_are_dropped_not_fatal() {
    let extractor = Extractor::in_memory();
    let cfg = SegmentConfig::default();

    // Number-only fragments look tag-like to the scanner but fail the tag
    // grammar; they are dropped while the real tag survives.
    let main = text_document("hoveddokument.txt", "=3601.009-JVZ0025 999.1 12.5");
    let results = extract_documents(&extractor, &[main], &cfg).expect("config is valid");

    assert!(!results[0].is_failed());
    let keys: Vec<&str> = results[0].keys().collect();
    assert_eq!(keys, vec!["3601.009|JVZ0025"]);
}
