// tests/integration/output_formats.rs
use chandas::cli::{Args, build_config};
use chandas_core::run_with_config;
use clap::Parser;

use crate::common::{SAMPLE_POEM, TempWorkspace};

fn render(format: &str, mode: &str) -> String {
    let ws = TempWorkspace::new("chandas_fmt");
    let poem = ws.file("poem.txt", SAMPLE_POEM);
    let out = ws.path().join("report.out");

    let args = Args::parse_from([
        "chandas",
        poem.to_str().unwrap(),
        "--format",
        format,
        "--mode",
        mode,
        "-o",
        out.to_str().unwrap(),
    ]);
    run_with_config(&build_config(&args).unwrap()).unwrap();
    ws.read("report.out")
}

#[test]
fn text_report_follows_export_layout() {
    let text = render("text", "prosody");
    assert!(text.starts_with("LaghuGuru Analysis Report\n=========================\n\nLine 1: "));
    assert!(text.ends_with("--- Summary ---\nTotal Laghu (ಲ): 16\nTotal Guru (ಗು): 6\n"));
}

#[test]
fn markdown_report_has_all_sections() {
    let md = render("markdown", "both");
    for heading in ["### Prosody", "#### Words", "### Statistics", "#### Character frequency", "#### 1-grams", "#### 8-grams"] {
        assert!(md.contains(heading), "missing {heading}");
    }
    assert!(!md.contains("#### 9-grams"));
}

#[test]
fn json_stats_only() {
    let json: serde_json::Value = serde_json::from_str(&render("json", "stats")).unwrap();
    let doc = &json["documents"][0];
    assert!(doc.get("prosody").is_none());
    assert_eq!(doc["statistics"]["averageWordsPerSentence"], 8.0);
    assert_eq!(doc["statistics"]["characterFrequency"][0]["character"], "ಂ");
}
