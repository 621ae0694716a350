// crates/infra/src/extraction/docx.rs
use chandas_shared_kernel::{InfraResult, InfrastructureError};

/// Raw text of the body paragraphs, one line per paragraph.
#[cfg(feature = "documents")]
pub fn extract_text(bytes: &[u8]) -> InfraResult<String> {
    use docx_rs::{DocumentChild, ParagraphChild, RunChild};

    let docx = docx_rs::read_docx(bytes).map_err(|e| parse_error(e.to_string()))?;

    let mut text = String::new();
    for child in &docx.document.children {
        let DocumentChild::Paragraph(paragraph) = child else {
            continue;
        };
        for run_child in &paragraph.children {
            let ParagraphChild::Run(run) = run_child else {
                continue;
            };
            for piece in &run.children {
                match piece {
                    RunChild::Text(t) => text.push_str(&t.text),
                    RunChild::Tab(_) => text.push('\t'),
                    RunChild::Break(_) => text.push('\n'),
                    _ => {}
                }
            }
        }
        text.push('\n');
    }
    Ok(text)
}

#[cfg(not(feature = "documents"))]
pub fn extract_text(_bytes: &[u8]) -> InfraResult<String> {
    Err(parse_error("DOCX support requires the `documents` feature"))
}

fn parse_error(details: impl Into<String>) -> InfrastructureError {
    InfrastructureError::DocumentParse { format: "DOCX".to_string(), details: details.into() }
}

/// A `.docx` with one paragraph per entry of `paragraphs`.
#[cfg(all(test, feature = "documents"))]
pub(crate) fn paragraphs_fixture(paragraphs: &[&str]) -> Vec<u8> {
    use docx_rs::{Docx, Paragraph, Run};

    let docx = paragraphs.iter().fold(Docx::new(), |docx, text| {
        docx.add_paragraph(Paragraph::new().add_run(Run::new().add_text(*text)))
    });
    let mut cursor = std::io::Cursor::new(Vec::new());
    docx.build().pack(&mut cursor).expect("docx packs");
    cursor.into_inner()
}
