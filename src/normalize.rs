use crate::document::{Document, Element};
use crate::error::{ParseError, Result};
use crate::pairs::CanonicalPair;

/// Normalizes a parsed document into the canonical pair sequence.
///
/// Mappings emit one pair per field. Sequences pass through when every
/// element already carries both canonical field names with non-empty
/// values; otherwise each element must be a single-field mapping and is
/// converted field-name-to-key. Entries are never reordered.
pub(crate) fn normalize<P: CanonicalPair>(document: Document) -> Result<Option<Vec<P>>> {
    match document {
        Document::Absent => Ok(None),
        Document::Mapping(fields) => Ok(Some(
            fields
                .into_iter()
                .map(|(key, value)| P::new(key, value))
                .collect(),
        )),
        Document::Sequence(elements) => {
            if elements.iter().all(|e| canonical_fields::<P>(e).is_some()) {
                return Ok(Some(
                    elements
                        .iter()
                        .filter_map(|e| canonical_fields::<P>(e))
                        .map(|(key, value)| P::new(key.to_string(), value.to_string()))
                        .collect(),
                ));
            }
            let pairs = elements
                .into_iter()
                .map(convert_element)
                .collect::<Result<Vec<P>>>()?;
            Ok(Some(pairs))
        }
    }
}

/// The element's canonical fields, when both are present and non-empty.
fn canonical_fields<P: CanonicalPair>(element: &Element) -> Option<(&str, &str)> {
    let Element::Mapping(fields) = element else {
        return None;
    };
    let key = fields.get(P::KEY_FIELD)?;
    let value = fields.get(P::VALUE_FIELD)?;
    if key.is_empty() || value.is_empty() {
        return None;
    }
    Some((key, value))
}

fn convert_element<P: CanonicalPair>(element: Element) -> Result<P> {
    let Element::Mapping(fields) = element else {
        return Err(ParseError::ScalarElement);
    };
    let mut fields = fields.into_iter();
    match (fields.next(), fields.next()) {
        (Some((key, value)), None) => Ok(P::new(key, value)),
        _ => Err(ParseError::AmbiguousElement),
    }
}
