// crates/infra/src/output.rs
pub mod formatters;
mod writer;

use std::io::Write;

use chandas_domain::OutputFormat;
use chandas_ports::report::{DocumentReport, ReportSink};
use chandas_shared_kernel::Result;
use formatters::{output_json, output_markdown, output_text, output_yaml};
pub use writer::OutputTarget;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Render `reports` in `format` into `out`.
pub fn render(format: OutputFormat, reports: &[DocumentReport], out: &mut impl Write) -> Result<()> {
    match format {
        OutputFormat::Text => output_text(reports, out),
        OutputFormat::Markdown => output_markdown(reports, out),
        OutputFormat::Json => output_json(reports, out),
        OutputFormat::Yaml => output_yaml(reports, out),
    }
}

/// [`ReportSink`] that renders the whole batch and hands it to an [`OutputTarget`].
#[derive(Debug, Clone)]
pub struct ReportEmitter {
    format: OutputFormat,
    target: OutputTarget,
}

impl ReportEmitter {
    pub fn new(format: OutputFormat, target: OutputTarget) -> Self {
        Self { format, target }
    }
}

impl ReportSink for ReportEmitter {
    fn publish(&self, reports: &[DocumentReport]) -> Result<()> {
        let mut buf = Vec::new();
        render(self.format, reports, &mut buf)?;
        log::debug!("rendered {} bytes of {} output", buf.len(), self.format);
        self.target.deliver(&buf)
    }
}
