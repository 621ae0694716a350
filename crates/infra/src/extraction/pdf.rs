// crates/infra/src/extraction/pdf.rs
use chandas_shared_kernel::{InfraResult, InfrastructureError};

/// Text of every page, pages joined with `\n`.
#[cfg(feature = "documents")]
pub fn extract_text(bytes: &[u8]) -> InfraResult<String> {
    use std::panic::{self, AssertUnwindSafe};

    // pdf-extract panics on some malformed font tables.
    let pages = panic::catch_unwind(AssertUnwindSafe(|| pdf_extract::extract_text_from_mem_by_pages(bytes)))
        .map_err(|_| parse_error("the PDF parser aborted on malformed input"))?
        .map_err(|e| parse_error(e.to_string()))?;
    Ok(pages.join("\n"))
}

#[cfg(not(feature = "documents"))]
pub fn extract_text(_bytes: &[u8]) -> InfraResult<String> {
    Err(parse_error("PDF support requires the `documents` feature"))
}

fn parse_error(details: impl Into<String>) -> InfrastructureError {
    InfrastructureError::DocumentParse { format: "PDF".to_string(), details: details.into() }
}

/// Single-page PDF showing `text` in Helvetica.
#[cfg(all(test, feature = "documents"))]
pub(crate) fn single_page_fixture(text: &str) -> Vec<u8> {
    let content = format!("BT /F1 24 Tf 72 720 Td ({text}) Tj ET");
    let objects = [
        "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
        "<< /Type /Pages /Kids [3 0 R] /Count 1 >>".to_string(),
        "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] /Contents 4 0 R \
         /Resources << /Font << /F1 5 0 R >> >> >>"
            .to_string(),
        format!("<< /Length {} >>\nstream\n{content}\nendstream", content.len()),
        "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica >>".to_string(),
    ];

    let mut pdf = b"%PDF-1.4\n".to_vec();
    let mut offsets = Vec::with_capacity(objects.len());
    for (i, body) in objects.iter().enumerate() {
        offsets.push(pdf.len());
        pdf.extend_from_slice(format!("{} 0 obj\n{body}\nendobj\n", i + 1).as_bytes());
    }

    let xref_at = pdf.len();
    let mut tail = format!("xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1);
    for offset in offsets {
        tail.push_str(&format!("{offset:010} 00000 n \n"));
    }
    tail.push_str(&format!(
        "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{xref_at}\n%%EOF\n",
        objects.len() + 1
    ));
    pdf.extend_from_slice(tail.as_bytes());
    pdf
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corrupt_pdf_is_a_parse_error() {
        let err = extract_text(b"%PDF-1.7").unwrap_err();
        assert!(matches!(err, InfrastructureError::DocumentParse { ref format, .. } if format == "PDF"));
    }

    #[cfg(feature = "documents")]
    #[test]
    fn extracts_page_text() {
        let text = extract_text(&single_page_fixture("Hello world")).unwrap();
        assert_eq!(text.split_whitespace().collect::<Vec<_>>(), ["Hello", "world"]);
    }
}
