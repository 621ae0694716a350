// crates/core/src/bootstrap.rs
use chandas_infra::{DocumentExtractor, GraphemeReflow, OutputTarget, ReportEmitter};
use chandas_ports::report::DocumentReport;
use chandas_shared_kernel::Result;
use chandas_usecase::AnalyzeDocuments;

use crate::config::Config;

/// Wires the adapters selected by `config` and runs the analysis.
///
/// The reports are returned as well as published, for callers that want
/// to inspect them.
pub fn run_with_config(config: &Config) -> Result<Vec<DocumentReport>> {
    let extractor = DocumentExtractor::new(config.garble_policy);
    let reflow = GraphemeReflow::new(config.wrap_width);
    let emitter = ReportEmitter::new(config.format, OutputTarget::from_path(config.output.clone()));

    log::debug!(
        "mode={:?} format={} wrap={} inputs={}",
        config.mode,
        config.format,
        config.wrap_width,
        config.inputs.len()
    );
    AnalyzeDocuments::new(&extractor, &reflow, &emitter).run(&config.plan())
}
