// crates/usecase/src/dto.rs
use chandas_domain::{AnalysisMode, NGramLimits};
use chandas_ports::extraction::DocumentSource;

/// Input parameters for one run.
#[derive(Debug, Clone, Default)]
pub struct AnalysisPlan {
    pub sources: Vec<DocumentSource>,
    pub mode: AnalysisMode,
    pub limits: NGramLimits,
}
