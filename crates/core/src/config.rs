// crates/core/src/config.rs
use std::path::PathBuf;

use chandas_domain::{AnalysisMode, GarblePolicy, NGramLimits, OutputFormat};
use chandas_ports::extraction::DocumentSource;
use chandas_usecase::AnalysisPlan;
use derive_builder::Builder;

/// Fully resolved settings for one run.
#[derive(Debug, Clone, Default, Builder)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct Config {
    /// Input documents; empty means standard input.
    #[builder(default)]
    pub inputs: Vec<PathBuf>,
    #[builder(default)]
    pub format: OutputFormat,
    #[builder(default)]
    pub mode: AnalysisMode,
    /// Reflow width in graphemes, `0` disables.
    #[builder(default)]
    pub wrap_width: usize,
    #[builder(default)]
    pub garble_policy: GarblePolicy,
    #[builder(default)]
    pub output: Option<PathBuf>,
    #[builder(default)]
    pub limits: NGramLimits,
}

impl ConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        if let Some(limits) = &self.limits {
            limits.validate().map_err(|e| e.to_string())?;
        }
        Ok(())
    }
}

impl Config {
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    pub fn sources(&self) -> Vec<DocumentSource> {
        if self.inputs.is_empty() {
            return vec![DocumentSource::Stdin];
        }
        self.inputs.iter().cloned().map(DocumentSource::from_arg).collect()
    }

    pub fn plan(&self) -> AnalysisPlan {
        AnalysisPlan { sources: self.sources(), mode: self.mode, limits: self.limits }
    }
}
