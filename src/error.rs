use thiserror::Error;

/// Failure modes of the dialect probes and the shape normalizer.
///
/// These never cross the crate boundary: every public entry point maps
/// them to an absent result.
#[derive(Debug, Error)]
pub(crate) enum ParseError {
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("yaml: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("unsupported scalar at document root")]
    ScalarRoot,

    #[error("unsupported nested value under key {0:?}")]
    NestedValue(String),

    #[error("unsupported non-scalar mapping key")]
    NonScalarKey,

    #[error("unsupported nested sequence element")]
    NestedSequence,

    #[error("sequence element is not a key/value mapping")]
    ScalarElement,

    #[error("sequence element does not carry exactly one field")]
    AmbiguousElement,
}

pub(crate) type Result<T> = std::result::Result<T, ParseError>;
