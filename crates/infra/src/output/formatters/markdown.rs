// crates/infra/src/output/formatters/markdown.rs
use std::io::Write;

use chandas_domain::{PoemAnalysis, TextStatsAnalysis};
use chandas_ports::report::DocumentReport;
use chandas_shared_kernel::Result;

pub fn output_markdown(reports: &[DocumentReport], out: &mut impl Write) -> Result<()> {
    for (i, report) in reports.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        writeln!(out, "## {}", cell(&report.name))?;
        if let Some(prosody) = &report.prosody {
            write_prosody(prosody, out)?;
        }
        if let Some(stats) = &report.statistics {
            write_statistics(stats, out)?;
        }
    }
    Ok(())
}

/// Escapes pipes and turns line breaks into `<br>` so a value fits one cell.
fn cell(value: &str) -> String {
    value.replace('|', "\\|").replace('\n', "<br>")
}

fn write_prosody(analysis: &PoemAnalysis, out: &mut impl Write) -> Result<()> {
    writeln!(out, "\n### Prosody\n")?;
    writeln!(out, "| LINE | TEXT | PATTERN |\n|---:|:---|:---|")?;
    for line in analysis.lines() {
        writeln!(out, "| {} | {} | {} |", line.index(), cell(line.original_text()), cell(line.pattern()))?;
    }

    writeln!(out, "\n- Total Laghu (ಲ): {}", analysis.total_laghu())?;
    writeln!(out, "- Total Guru (ಗು): {}", analysis.total_guru())?;

    if analysis.is_empty() {
        return Ok(());
    }
    writeln!(out, "\n#### Words\n")?;
    writeln!(out, "| LINE | WORD | SYLLABLES | PATTERN |\n|---:|:---|:---|:---|")?;
    for line in analysis.lines() {
        for word in line.words() {
            let syllables: Vec<&str> = word.syllables().iter().map(|s| s.text()).collect();
            writeln!(
                out,
                "| {} | {} | {} | {} |",
                line.index(),
                cell(word.source_text()),
                cell(&syllables.join(" · ")),
                word.pattern()
            )?;
        }
    }
    Ok(())
}

fn write_statistics(stats: &TextStatsAnalysis, out: &mut impl Write) -> Result<()> {
    writeln!(out, "\n### Statistics\n")?;
    writeln!(out, "| METRIC | VALUE |\n|:---|---:|")?;
    writeln!(out, "| Total words | {} |", stats.total_words())?;
    writeln!(out, "| Total sentences | {} |", stats.total_sentences())?;
    writeln!(out, "| Average words per sentence | {} |", stats.average_words_per_sentence())?;
    writeln!(out, "| Average word length | {} |", stats.average_word_length())?;

    if !stats.character_frequency().is_empty() {
        writeln!(out, "\n#### Character frequency\n")?;
        writeln!(out, "| CHAR | COUNT |\n|:---:|---:|")?;
        for entry in stats.character_frequency() {
            writeln!(out, "| {} | {} |", entry.character, entry.count)?;
        }
    }

    for (n, table) in stats.n_gram_frequencies() {
        writeln!(out, "\n#### {n}-grams\n")?;
        writeln!(out, "| PHRASE | COUNT |\n|:---|---:|")?;
        for ngram in table {
            writeln!(out, "| {} | {} |", cell(&ngram.phrase), ngram.count)?;
        }
    }
    Ok(())
}
