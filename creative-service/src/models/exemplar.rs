use chrono::Utc;
use serde::{Deserialize, Serialize};

/// A stored sample ad used as a style reference during generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exemplar {
    /// Epoch milliseconds at creation. Ids are not guaranteed unique under
    /// rapid appends; the list is append-only and never keyed by id.
    pub id: i64,
    pub text: String,
}

impl Exemplar {
    pub fn new(text: String) -> Self {
        Self {
            id: Utc::now().timestamp_millis(),
            text,
        }
    }
}
