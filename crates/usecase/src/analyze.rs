// crates/usecase/src/analyze.rs
use chandas_domain::{AnalysisMode, NGramLimits, analyze_prosody, analyze_statistics_with};
use chandas_ports::{
    extraction::{DocumentSource, DocumentTextExtractor},
    layout::TextReflow,
    report::{DocumentReport, ReportSink},
};
use chandas_shared_kernel::{ApplicationError, ChandasError, Result};

use crate::dto::AnalysisPlan;

pub struct AnalyzeDocuments<'a> {
    extractor: &'a dyn DocumentTextExtractor,
    reflow: &'a dyn TextReflow,
    sink: &'a dyn ReportSink,
}

impl<'a> AnalyzeDocuments<'a> {
    pub fn new(
        extractor: &'a dyn DocumentTextExtractor,
        reflow: &'a dyn TextReflow,
        sink: &'a dyn ReportSink,
    ) -> Self {
        Self { extractor, reflow, sink }
    }

    /// Analyses every source in order and publishes the reports in one batch.
    ///
    /// The first failing document aborts the run; nothing is published then.
    pub fn run(&self, plan: &AnalysisPlan) -> Result<Vec<DocumentReport>> {
        if plan.sources.is_empty() {
            return Err(ApplicationError::NoInput.into());
        }
        plan.limits.validate()?;

        let reports = plan
            .sources
            .iter()
            .map(|source| self.analyze_one(source, plan))
            .collect::<Result<Vec<_>>>()?;

        self.sink.publish(&reports).map_err(|e| ApplicationError::ReportFailed {
            reason: e.to_string(),
            source: Some(Box::new(e)),
        })?;
        Ok(reports)
    }

    fn analyze_one(&self, source: &DocumentSource, plan: &AnalysisPlan) -> Result<DocumentReport> {
        let document = self.extractor.extract(source).map_err(|e| extraction_failed(source, e))?;
        log::info!("analysing {} ({} bytes)", document.name, document.text.len());

        let verse = plan.mode.includes_prosody().then(|| self.reflow.reflow(&document.text));
        let (prosody, statistics) = run_analyses(plan.mode, verse.as_deref(), &document.text, &plan.limits);

        Ok(DocumentReport { name: document.name, prosody, statistics })
    }
}

fn extraction_failed(source: &DocumentSource, err: ChandasError) -> ChandasError {
    ApplicationError::ExtractionFailed {
        source_name: source.to_string(),
        reason: err.to_string(),
        source: Some(Box::new(err)),
    }
    .into()
}

type Analyses = (Option<chandas_domain::PoemAnalysis>, Option<chandas_domain::TextStatsAnalysis>);

#[cfg(feature = "parallel")]
fn run_analyses(mode: AnalysisMode, verse: Option<&str>, text: &str, limits: &NGramLimits) -> Analyses {
    rayon::join(
        || verse.map(analyze_prosody),
        || mode.includes_statistics().then(|| analyze_statistics_with(text, limits)),
    )
}

#[cfg(not(feature = "parallel"))]
fn run_analyses(mode: AnalysisMode, verse: Option<&str>, text: &str, limits: &NGramLimits) -> Analyses {
    (verse.map(analyze_prosody), mode.includes_statistics().then(|| analyze_statistics_with(text, limits)))
}
