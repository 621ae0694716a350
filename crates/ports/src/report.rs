// crates/ports/src/report.rs
use chandas_domain::{PoemAnalysis, TextStatsAnalysis};
use chandas_shared_kernel::Result;
use serde::Serialize;

/// Everything computed for one input document.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentReport {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prosody: Option<PoemAnalysis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statistics: Option<TextStatsAnalysis>,
}

/// Port for publishing finished reports.
pub trait ReportSink: Send + Sync {
    fn publish(&self, reports: &[DocumentReport]) -> Result<()>;
}
