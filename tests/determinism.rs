use std::io::Write;

use lexis::{AnalysisConfig, ConceptMap, StopwordSet, analyze_file, analyze_text};
use tempfile::NamedTempFile;

const TEXT: &str = "Zeta alfa beta. Alfa zeta gamma; beta delta, zeta! Alfa beta gamma delta.";

#[test]
fn same_input_gives_byte_identical_reports() {
    let cfg = AnalysisConfig::default();
    let first = analyze_text(TEXT, &cfg).report.render_text();
    for _ in 0..20 {
        assert_eq!(analyze_text(TEXT, &cfg).report.render_text(), first);
    }
}

#[test]
fn file_and_memory_paths_agree() {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(TEXT.as_bytes()).expect("write");

    let cfg = AnalysisConfig::default();
    let from_file = analyze_file(file.path(), &cfg).expect("analyzes");
    let from_memory = analyze_text(TEXT, &cfg);

    assert_eq!(from_file.report, from_memory.report);
    assert_eq!(from_file.canonical, from_memory.canonical);
}

#[test]
fn ties_follow_first_appearance() {
    // zeta, alfa, beta each occur 3 times; gamma and delta twice.
    let analysis = analyze_text(TEXT, &AnalysisConfig::default());
    let terms: Vec<(&str, usize)> = analysis
        .report
        .top_terms
        .iter()
        .map(|t| (t.term.as_str(), t.count))
        .collect();
    assert_eq!(
        terms,
        vec![
            ("zeta", 3),
            ("alfa", 3),
            ("beta", 3),
            ("gamma", 2),
            ("delta", 2)
        ]
    );
}

#[test]
fn concept_section_is_independent_of_text() {
    let cfg = AnalysisConfig::default();
    let concept_section = |text: &str| {
        let rendered = analyze_text(text, &cfg).report.render_text();
        let start = rendered
            .find("Associazioni concettuali:")
            .expect("concept header present");
        rendered[start..].to_string()
    };

    let reference = concept_section("");
    for text in [TEXT, "il la lo e o", "filosofia filosofia sapere", "qualcosa d'altro"] {
        assert_eq!(concept_section(text), reference);
    }
}

#[test]
fn stopword_and_concept_overrides_are_honored() {
    let cfg = AnalysisConfig {
        stopwords: StopwordSet::from_words(["zeta", "alfa"]),
        concepts: ConceptMap::empty(),
        top_n: 2,
        ..Default::default()
    };
    let analysis = analyze_text(TEXT, &cfg);
    assert_eq!(
        analysis.report.render_text(),
        "Le 2 parole più frequenti:\n- beta: 3\n- gamma: 2\n\nAssociazioni concettuali:\n"
    );
}
