// tests/integration/end_to_end.rs
use chandas::cli::{Args, build_config};
use chandas_core::{Weight, run_with_config};
use clap::Parser;

use crate::common::{SAMPLE_POEM, TempWorkspace};

#[test]
fn several_documents_keep_their_order() {
    let ws = TempWorkspace::new("chandas_e2e");
    let first = ws.file("first.txt", SAMPLE_POEM);
    let second = ws.file("second", "ಸ್ತ್ರೀ ಶಕ್ತಿ। ಅಂತಃಕರಣ");
    let out = ws.path().join("out.json");

    let args = Args::parse_from([
        "chandas",
        first.to_str().unwrap(),
        second.to_str().unwrap(),
        "-o",
        out.to_str().unwrap(),
    ]);
    let reports = run_with_config(&build_config(&args).unwrap()).unwrap();

    assert_eq!(reports.len(), 2);
    assert!(reports[0].name.ends_with("first.txt"));
    assert!(reports[1].name.ends_with("second"));

    let prosody = reports[1].prosody.as_ref().unwrap();
    let weights: Vec<Weight> = prosody.lines()[0].syllables().iter().map(|s| s.weight()).collect();
    // ಸ್ತ್ರೀ ಶ ಕ್ತಿ ಅಂ ತಃ ಕ ರ ಣ
    assert_eq!(
        weights,
        vec![
            Weight::Guru,
            Weight::Guru,
            Weight::Laghu,
            Weight::Guru,
            Weight::Guru,
            Weight::Laghu,
            Weight::Laghu,
            Weight::Laghu,
        ]
    );
    assert_eq!(prosody.lines()[0].pattern(), "G G L\nG G L L L");
}

#[test]
fn bom_prefixed_file_is_read_cleanly() {
    let ws = TempWorkspace::new("chandas_bom");
    let mut bytes = vec![0xEF, 0xBB, 0xBF];
    bytes.extend_from_slice("ಕಾ ಮ".as_bytes());
    let poem = ws.file("bom.txt", bytes);
    let out = ws.path().join("out.txt");

    let args = Args::parse_from(["chandas", poem.to_str().unwrap(), "-o", out.to_str().unwrap()]);
    let reports = run_with_config(&build_config(&args).unwrap()).unwrap();

    let line = &reports[0].prosody.as_ref().unwrap().lines()[0];
    assert_eq!(line.original_text(), "ಕಾ ಮ");
    assert_eq!(line.pattern(), "G L");
}

#[test]
fn smaller_ngram_limits_are_honoured() {
    let ws = TempWorkspace::new("chandas_limits");
    let poem = ws.file("poem.txt", "ಅ ಬ ಕ ಡ ಅ ಬ ಕ ಡ");
    let out = ws.path().join("out.txt");

    let args = Args::parse_from([
        "chandas",
        poem.to_str().unwrap(),
        "--max-ngram",
        "2",
        "--top-ngrams",
        "1",
        "--top-unigrams",
        "3",
        "-o",
        out.to_str().unwrap(),
    ]);
    let reports = run_with_config(&build_config(&args).unwrap()).unwrap();
    let stats = reports[0].statistics.as_ref().unwrap();

    assert_eq!(stats.n_gram_frequencies().len(), 2);
    assert_eq!(stats.n_grams(1).len(), 3);
    assert_eq!(stats.n_grams(2).len(), 1);
    assert_eq!(stats.n_grams(2)[0].phrase, "ಅ ಬ");
    assert_eq!(stats.n_grams(2)[0].count, 2);
}
