use serde::{Deserialize, Serialize};

/// Tag record in the field shape the deployment API expects.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Tag {
    pub key: String,
    pub value: String,
}

/// Parameter record in the field shape the deployment API expects.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Parameter {
    pub parameter_key: String,
    pub parameter_value: String,
}

/// Context-dependent wire names of a canonical record's two fields.
pub(crate) trait CanonicalPair {
    const KEY_FIELD: &'static str;
    const VALUE_FIELD: &'static str;

    fn new(key: String, value: String) -> Self;
}

impl CanonicalPair for Tag {
    const KEY_FIELD: &'static str = "Key";
    const VALUE_FIELD: &'static str = "Value";

    fn new(key: String, value: String) -> Self {
        Tag { key, value }
    }
}

impl CanonicalPair for Parameter {
    const KEY_FIELD: &'static str = "ParameterKey";
    const VALUE_FIELD: &'static str = "ParameterValue";

    fn new(key: String, value: String) -> Self {
        Parameter {
            parameter_key: key,
            parameter_value: value,
        }
    }
}
