use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The stored style profile guiding generation.
///
/// Only `voice` and `formats.brief` have meaning to the service; every
/// other key in the document is carried through untouched so a replace
/// round-trips byte-for-byte at the JSON level.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrandDna {
    /// Free-form style guidance, embedded verbatim into the prompt.
    pub voice: Value,
    pub formats: BrandFormats,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrandFormats {
    /// Response schema handed to the generative API; constrains the shape
    /// of the returned brief.
    pub brief: Value,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
