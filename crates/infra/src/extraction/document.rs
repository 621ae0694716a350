// crates/infra/src/extraction/document.rs
use std::fmt;

use chandas_domain::GarblePolicy;
use chandas_ports::extraction::{DocumentSource, DocumentTextExtractor, ExtractedDocument};
use chandas_shared_kernel::{ErrorContext, InfraResult, InfrastructureError, Result};

use super::{docx, pdf, plain_text, script_density};
use crate::persistence::FileReader;

/// Document container, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    PlainText,
    Pdf,
    Docx,
}

impl DocumentFormat {
    /// Stdin and files without an extension are plain text.
    pub fn detect(source: &DocumentSource) -> InfraResult<Self> {
        let DocumentSource::File(path) = source else {
            return Ok(Self::PlainText);
        };
        let Some(ext) = path.extension() else {
            return Ok(Self::PlainText);
        };
        match ext.to_string_lossy().to_ascii_lowercase().as_str() {
            "txt" | "text" => Ok(Self::PlainText),
            "pdf" => Ok(Self::Pdf),
            "docx" => Ok(Self::Docx),
            other => Err(InfrastructureError::UnsupportedFormat {
                path: path.clone(),
                extension: other.to_string(),
            }),
        }
    }

    fn decode(self, bytes: &[u8]) -> InfraResult<String> {
        match self {
            Self::PlainText => Ok(plain_text::decode_text(bytes)),
            Self::Pdf => pdf::extract_text(bytes),
            Self::Docx => docx::extract_text(bytes),
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::PlainText => "text",
            Self::Pdf => "PDF",
            Self::Docx => "DOCX",
        })
    }
}

/// Reads `.txt`, `.pdf` and `.docx` files and stdin.
///
/// PDF text that looks garbled is always rejected; the other formats follow
/// the configured [`GarblePolicy`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentExtractor {
    policy: GarblePolicy,
}

impl DocumentExtractor {
    pub const fn new(policy: GarblePolicy) -> Self {
        Self { policy }
    }

    fn read(source: &DocumentSource) -> InfraResult<Vec<u8>> {
        match source {
            DocumentSource::Stdin => FileReader::read_stdin(),
            DocumentSource::File(path) => FileReader::read_all(path),
        }
    }

    const fn policy_for(&self, format: DocumentFormat) -> GarblePolicy {
        match format {
            DocumentFormat::Pdf => GarblePolicy::Reject,
            DocumentFormat::PlainText | DocumentFormat::Docx => self.policy,
        }
    }

    fn screen(source: &DocumentSource, text: &str, policy: GarblePolicy) -> InfraResult<()> {
        let Some(percent) = script_density::garbled_percent(text) else {
            return Ok(());
        };
        match policy {
            GarblePolicy::Warn => {
                log::warn!("{source}: only {percent:.1}% Kannada characters, results may be meaningless");
                Ok(())
            }
            GarblePolicy::Reject => Err(InfrastructureError::GarbledText { path: source.path(), percent }),
        }
    }
}

impl DocumentTextExtractor for DocumentExtractor {
    fn extract(&self, source: &DocumentSource) -> Result<ExtractedDocument> {
        let format = DocumentFormat::detect(source)?;
        let bytes = Self::read(source)?;
        let text = format.decode(&bytes).with_context(|| format!("reading {source} as {format}"))?;
        Self::screen(source, &text, self.policy_for(format))?;
        log::debug!("extracted {} chars of {format} from {source}", text.chars().count());
        Ok(ExtractedDocument { name: source.to_string(), text })
    }
}
