use crate::document::Document;
use crate::error::Result;

/// Probes the strict JSON dialect first, then the YAML superset.
///
/// Both probes are attempted in this order even though YAML alone would
/// accept every JSON document; a JSON success never reaches the YAML
/// probe. The last probe's failure is reported when neither succeeds.
pub(crate) fn parse_document(input: &str) -> Result<Document> {
    match probe_json(input) {
        Ok(document) => Ok(document),
        Err(_) => probe_yaml(input),
    }
}

fn probe_json(input: &str) -> Result<Document> {
    let value: serde_json::Value = serde_json::from_str(input)?;
    Document::from_json(value)
}

fn probe_yaml(input: &str) -> Result<Document> {
    let value: serde_yaml::Value = serde_yaml::from_str(input)?;
    Document::from_yaml(value)
}
