mod document;
mod error;
mod legacy;
mod normalize;
mod pairs;
mod scalar;
mod structured;

pub use crate::pairs::{Parameter, Tag};
pub use crate::scalar::{is_url, parse_arns, parse_capabilities, parse_number, parse_string};

use crate::pairs::CanonicalPair;

/// Parse tag overrides given as JSON or YAML into canonical `Tag` records.
///
/// Empty or unparseable input yields `None`; already-canonical input passes
/// through unchanged.
///
/// # Examples
/// ```
/// use cfn_overrides::parse_tags;
///
/// let tags = parse_tags(r#"{"env":"prod"}"#).unwrap();
/// assert_eq!(tags[0].key, "env");
/// assert_eq!(tags[0].value, "prod");
/// ```
pub fn parse_tags(raw: &str) -> Option<Vec<Tag>> {
    parse_structured(raw)
}

/// Parse parameter overrides into canonical `Parameter` records.
///
/// Legacy `key=value` syntax is detected first; anything else goes through
/// the JSON and YAML probes. Empty or unparseable input yields `None`.
///
/// # Examples
/// ```
/// use cfn_overrides::parse_parameters;
///
/// let parameters = parse_parameters("Instances=2,Size=large").unwrap();
/// assert_eq!(parameters[0].parameter_key, "Instances");
/// assert_eq!(parameters[1].parameter_value, "large");
/// ```
pub fn parse_parameters(raw: &str) -> Option<Vec<Parameter>> {
    if legacy::looks_like_legacy(raw) {
        let pairs = legacy::parse_legacy(raw)
            .into_iter()
            .map(|(key, value)| Parameter {
                parameter_key: key,
                parameter_value: value,
            })
            .collect();
        return Some(pairs);
    }
    parse_structured(raw)
}

fn parse_structured<P: CanonicalPair>(raw: &str) -> Option<Vec<P>> {
    let document = structured::parse_document(raw).ok()?;
    normalize::normalize(document).ok()?
}
