use std::io::Write;

use lexis::{AnalysisConfig, IngestConfig, IngestError, PipelineError, TextEncoding, analyze_file};
use tempfile::NamedTempFile;

fn temp_file(bytes: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(bytes).expect("write");
    file
}

#[test]
fn missing_file_returns_ingest_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("assente.txt");

    let result = analyze_file(&path, &AnalysisConfig::default());
    match result {
        Err(PipelineError::Ingest(err)) => {
            assert!(err.is_not_found());
            assert!(err.to_string().contains("assente.txt"));
        }
        other => panic!("expected ingest error, got {other:?}"),
    }
}

#[test]
fn invalid_utf8_returns_decoding_error() {
    // "perch\xE9" is Latin-1, not UTF-8.
    let file = temp_file(b"perch\xE9 no");
    let result = analyze_file(file.path(), &AnalysisConfig::default());
    assert!(matches!(
        result,
        Err(PipelineError::Ingest(IngestError::InvalidEncoding {
            encoding: TextEncoding::Utf8,
            offset: 5,
            ..
        }))
    ));
}

#[test]
fn same_bytes_succeed_as_latin1() {
    let file = temp_file(b"Perch\xE9 PERCH\xC9 no");
    let cfg = AnalysisConfig {
        ingest: IngestConfig::with_encoding(TextEncoding::Latin1),
        ..Default::default()
    };
    let analysis = analyze_file(file.path(), &cfg).expect("latin-1 decodes");
    assert_eq!(analysis.frequencies.count("perché"), 2);
}

#[test]
fn empty_file_is_not_an_error() {
    let file = temp_file(b"");
    let analysis = analyze_file(file.path(), &AnalysisConfig::default()).expect("empty is fine");
    assert!(analysis.report.top_terms.is_empty());
    assert!(analysis.report.render_text().starts_with("Le 5 parole più frequenti:\n\n"));
}

#[test]
fn zero_top_n_rejected_before_loading() {
    let dir = tempfile::tempdir().expect("temp dir");
    let cfg = AnalysisConfig {
        top_n: 0,
        ..Default::default()
    };
    // The file does not exist; config validation must fail first.
    let result = analyze_file(dir.path().join("assente.txt"), &cfg);
    assert_eq!(result.unwrap_err(), PipelineError::ZeroTopN);
}

#[test]
fn oversized_input_rejected() {
    let file = temp_file(b"sapere sapere sapere");
    let cfg = AnalysisConfig {
        ingest: IngestConfig {
            max_input_bytes: Some(5),
            ..Default::default()
        },
        ..Default::default()
    };
    assert!(matches!(
        analyze_file(file.path(), &cfg),
        Err(PipelineError::Ingest(IngestError::InputTooLarge { .. }))
    ));
}
