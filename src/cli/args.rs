// src/cli/args.rs
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};

use super::value_enum::{CliAnalysisMode, CliOutputFormat};

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "chandas",
    version = crate::VERSION,
    about = "ಕನ್ನಡ ಛಂದಸ್ಸು: Laghu/Guru prosody and text statistics for Kannada verse",
    long_about = "Splits Kannada verse into syllables, marks each syllable Laghu (L) or Guru (G), \
                  and reports per-line patterns together with word, sentence, character and \
                  n-gram statistics.\n\nReads .txt, .pdf and .docx files, or standard input when \
                  no file (or `-`) is given."
)]
pub struct Args {
    /// Documents to analyse (.txt, .pdf, .docx); `-` reads standard input
    #[arg(value_hint = ValueHint::FilePath)]
    pub inputs: Vec<PathBuf>,

    /// Report format
    #[arg(long, short = 'f', value_enum, default_value = "text", help_heading = "Output")]
    pub format: CliOutputFormat,

    /// Write the report to this file instead of stdout
    #[arg(long, short = 'o', value_hint = ValueHint::FilePath, help_heading = "Output")]
    pub output: Option<PathBuf>,

    /// Which analyses to run
    #[arg(long, value_enum, default_value = "both", help_heading = "Analysis")]
    pub mode: CliAnalysisMode,

    /// Re-wrap verse lines wider than N graphemes before prosody analysis (0 = off)
    #[arg(long, value_name = "N", default_value_t = 0, help_heading = "Analysis")]
    pub wrap: usize,

    /// Fail instead of warning when a document is mostly non-Kannada text
    #[arg(long, help_heading = "Analysis")]
    pub strict_script: bool,

    /// Largest phrase size for n-gram tables (1-15)
    #[arg(long, value_name = "N", default_value_t = chandas_core::MAX_NGRAM, help_heading = "Statistics")]
    pub max_ngram: usize,

    /// Entries kept in the single-word frequency table
    #[arg(long, value_name = "K", default_value_t = 20, help_heading = "Statistics")]
    pub top_unigrams: usize,

    /// Entries kept in each multi-word phrase table
    #[arg(long, value_name = "K", default_value_t = 10, help_heading = "Statistics")]
    pub top_ngrams: usize,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, help_heading = "Logging")]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose", help_heading = "Logging")]
    pub quiet: bool,
}

impl Args {
    pub fn log_level(&self) -> log::LevelFilter {
        if self.quiet {
            return log::LevelFilter::Error;
        }
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}
