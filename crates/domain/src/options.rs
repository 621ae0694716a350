// crates/domain/src/options.rs
use std::{fmt, str::FromStr};

/// Report formats understood by the output layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Markdown,
    Json,
    Yaml,
}

/// Which of the two analyses a run performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnalysisMode {
    Prosody,
    Stats,
    #[default]
    Both,
}

impl AnalysisMode {
    pub const fn includes_prosody(self) -> bool {
        matches!(self, Self::Prosody | Self::Both)
    }

    pub const fn includes_statistics(self) -> bool {
        matches!(self, Self::Stats | Self::Both)
    }
}

/// What to do when an input document is mostly non-Kannada text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GarblePolicy {
    /// Log a warning and analyse anyway.
    #[default]
    Warn,
    /// Fail the document.
    Reject,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "markdown" | "md" => Ok(Self::Markdown),
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            other => Err(format!("Unknown output format: {other}")),
        }
    }
}

impl FromStr for AnalysisMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "prosody" => Ok(Self::Prosody),
            "stats" | "statistics" => Ok(Self::Stats),
            "both" => Ok(Self::Both),
            other => Err(format!("Unknown analysis mode: {other}")),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Text => "text",
            Self::Markdown => "markdown",
            Self::Json => "json",
            Self::Yaml => "yaml",
        };
        f.write_str(name)
    }
}
