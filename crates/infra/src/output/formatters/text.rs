// crates/infra/src/output/formatters/text.rs
use std::io::Write;

use chandas_domain::{PoemAnalysis, TextStatsAnalysis};
use chandas_ports::report::DocumentReport;
use chandas_shared_kernel::Result;

/// Plain-text report, one block per document.
pub fn output_text(reports: &[DocumentReport], out: &mut impl Write) -> Result<()> {
    let titled = reports.len() > 1;
    for (i, report) in reports.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        if titled {
            writeln!(out, "### {} ###\n", report.name)?;
        }
        if let Some(prosody) = &report.prosody {
            write_prosody(prosody, out)?;
        }
        if let Some(stats) = &report.statistics {
            if report.prosody.is_some() {
                writeln!(out)?;
            }
            write_statistics(stats, out)?;
        }
    }
    Ok(())
}

fn write_prosody(analysis: &PoemAnalysis, out: &mut impl Write) -> Result<()> {
    writeln!(out, "LaghuGuru Analysis Report")?;
    writeln!(out, "=========================\n")?;
    for line in analysis.lines() {
        writeln!(out, "Line {}: {}", line.index(), line.original_text())?;
        writeln!(out, "Pattern: {}\n", line.pattern())?;
    }
    writeln!(out, "--- Summary ---")?;
    writeln!(out, "Total Laghu (ಲ): {}", analysis.total_laghu())?;
    writeln!(out, "Total Guru (ಗು): {}", analysis.total_guru())?;
    Ok(())
}

fn write_statistics(stats: &TextStatsAnalysis, out: &mut impl Write) -> Result<()> {
    writeln!(out, "Text Statistics Report")?;
    writeln!(out, "======================\n")?;
    writeln!(out, "Total Words: {}", stats.total_words())?;
    writeln!(out, "Total Sentences: {}", stats.total_sentences())?;
    writeln!(out, "Average Words per Sentence: {}", stats.average_words_per_sentence())?;
    writeln!(out, "Average Word Length: {}", stats.average_word_length())?;

    if !stats.character_frequency().is_empty() {
        writeln!(out, "\n--- Character Frequency ---")?;
        for entry in stats.character_frequency() {
            writeln!(out, "{}: {}", entry.character, entry.count)?;
        }
    }

    for (n, table) in stats.n_gram_frequencies() {
        writeln!(out, "\n--- {n}-gram Frequency ---")?;
        for (rank, ngram) in table.iter().enumerate() {
            writeln!(out, "{}. {} ({})", rank + 1, ngram.phrase, ngram.count)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use chandas_domain::{analyze_prosody, analyze_statistics};

    use super::*;

    fn render(reports: &[DocumentReport]) -> String {
        let mut buf = Vec::new();
        output_text(reports, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn prosody_block_matches_export_layout() {
        let report = DocumentReport {
            name: "poem.txt".into(),
            prosody: Some(analyze_prosody("ಕಾ ಮ\n\nನದಿ")),
            statistics: None,
        };
        let expected = "LaghuGuru Analysis Report\n\
                        =========================\n\n\
                        Line 1: ಕಾ ಮ\n\
                        Pattern: G L\n\n\
                        Line 2: ನದಿ\n\
                        Pattern: L L\n\n\
                        --- Summary ---\n\
                        Total Laghu (ಲ): 3\n\
                        Total Guru (ಗು): 1\n";
        assert_eq!(render(&[report]), expected);
    }

    #[test]
    fn statistics_block_lists_tables() {
        let report = DocumentReport {
            name: "poem.txt".into(),
            prosody: None,
            statistics: Some(analyze_statistics("ಅ ಅ ಬ ಅ")),
        };
        let text = render(&[report]);
        assert!(text.contains("Total Words: 4\n"));
        assert!(text.contains("Total Sentences: 1\n"));
        assert!(text.contains("Average Words per Sentence: 4.00\n"));
        assert!(text.contains("--- Character Frequency ---\nಅ: 3\nಬ: 1\n"));
        assert!(text.contains("--- 1-gram Frequency ---\n1. ಅ (3)\n2. ಬ (1)\n"));
        assert!(text.contains("--- 4-gram Frequency ---\n1. ಅ ಅ ಬ ಅ (1)\n"));
        assert!(!text.contains("5-gram"));
        assert!(!text.contains("LaghuGuru"));
    }

    #[test]
    fn several_documents_get_titles() {
        let report = |name: &str| DocumentReport {
            name: name.into(),
            prosody: Some(analyze_prosody("ಕ")),
            statistics: None,
        };
        let text = render(&[report("a.txt"), report("b.txt")]);
        assert!(text.starts_with("### a.txt ###\n\n"));
        assert!(text.contains("\n### b.txt ###\n\n"));
    }
}
