// src/cli/value_enum.rs
use chandas_core::{AnalysisMode, OutputFormat};
use clap::ValueEnum;

#[derive(Clone, Copy, Debug, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CliOutputFormat {
    Text,
    #[value(alias = "md")]
    Markdown,
    Json,
    #[value(alias = "yml")]
    Yaml,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(value: CliOutputFormat) -> Self {
        match value {
            CliOutputFormat::Text => OutputFormat::Text,
            CliOutputFormat::Markdown => OutputFormat::Markdown,
            CliOutputFormat::Json => OutputFormat::Json,
            CliOutputFormat::Yaml => OutputFormat::Yaml,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CliAnalysisMode {
    Prosody,
    Stats,
    Both,
}

impl From<CliAnalysisMode> for AnalysisMode {
    fn from(value: CliAnalysisMode) -> Self {
        match value {
            CliAnalysisMode::Prosody => AnalysisMode::Prosody,
            CliAnalysisMode::Stats => AnalysisMode::Stats,
            CliAnalysisMode::Both => AnalysisMode::Both,
        }
    }
}
