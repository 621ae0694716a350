// crates/infra/src/output/formatters/structured.rs
use std::io::Write;

use chandas_ports::report::DocumentReport;
use chandas_shared_kernel::Result;
#[cfg(not(feature = "yaml"))]
use chandas_shared_kernel::InfrastructureError;
use serde::Serialize;

use crate::output::VERSION;

#[derive(Serialize)]
struct StructuredOutput<'a> {
    version: &'static str,
    documents: &'a [DocumentReport],
}

pub fn output_json(reports: &[DocumentReport], out: &mut impl Write) -> Result<()> {
    let output = StructuredOutput { version: VERSION, documents: reports };
    serde_json::to_writer_pretty(&mut *out, &output)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(feature = "yaml")]
pub fn output_yaml(reports: &[DocumentReport], out: &mut impl Write) -> Result<()> {
    let output = StructuredOutput { version: VERSION, documents: reports };
    let yaml = serde_yaml::to_string(&output)?;
    write!(out, "{yaml}")?;
    Ok(())
}

#[cfg(not(feature = "yaml"))]
pub fn output_yaml(_reports: &[DocumentReport], _out: &mut impl Write) -> Result<()> {
    Err(InfrastructureError::SerializationError {
        format: "YAML".to_string(),
        details: "this build does not include the `yaml` feature".to_string(),
    }
    .into())
}

#[cfg(test)]
mod tests {
    use chandas_domain::{analyze_prosody, analyze_statistics};
    use serde_json::Value;

    use super::*;

    fn report() -> DocumentReport {
        DocumentReport {
            name: "poem.txt".into(),
            prosody: Some(analyze_prosody("ನದಿ ತೀರದಲಿ")),
            statistics: Some(analyze_statistics("ನದಿ ತೀರದಲಿ")),
        }
    }

    #[test]
    fn json_carries_version_and_both_analyses() {
        let mut buf = Vec::new();
        output_json(&[report()], &mut buf).unwrap();
        let json: Value = serde_json::from_slice(&buf).unwrap();

        assert_eq!(json["version"], VERSION);
        let doc = &json["documents"][0];
        assert_eq!(doc["prosody"]["lines"][0]["pattern"], "L L G L L L");
        assert_eq!(doc["prosody"]["totalLaghu"], 5);
        assert_eq!(doc["statistics"]["totalWords"], 2);
        assert_eq!(doc["statistics"]["characterFrequency"][0]["character"], "ತ");
    }

    #[test]
    fn json_omits_skipped_analysis() {
        let mut only_stats = report();
        only_stats.prosody = None;
        let mut buf = Vec::new();
        output_json(&[only_stats], &mut buf).unwrap();
        let json: Value = serde_json::from_slice(&buf).unwrap();
        assert!(json["documents"][0].get("prosody").is_none());
    }

    #[cfg(feature = "yaml")]
    #[test]
    fn yaml_uses_same_shape() {
        let mut buf = Vec::new();
        output_yaml(&[report()], &mut buf).unwrap();
        let yaml = String::from_utf8(buf).unwrap();
        assert!(yaml.contains("documents:"));
        assert!(yaml.contains("totalGuru: 1"));
    }

    #[cfg(not(feature = "yaml"))]
    #[test]
    fn yaml_without_feature_is_an_error() {
        let mut buf = Vec::new();
        assert!(output_yaml(&[report()], &mut buf).is_err());
        assert!(buf.is_empty());
    }
}
