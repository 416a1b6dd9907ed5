#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::Deserialize;

/// One uploaded text as listed by the backend.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TextRef {
    /// Opaque identifier; compared by string equality everywhere.
    pub id: String,
    /// Full text content, used for entry labels and tooltips.
    pub text_str: String,
    /// Word count reported by the backend; absent on older deployments.
    #[serde(default)]
    pub length: Option<u64>,
}

/// Response body of a text upload.
///
/// Only the identifier matters to the client; other payload fields are
/// ignored and a missing identifier is tolerated.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct UploadReceipt {
    #[serde(default)]
    pub id: Option<String>,
}

/// A single table row: column name to value, in document order.
///
/// Rows are schema-less on purpose. Rendering enumerates values in the
/// row's own key iteration order, which matches the JSON document order.
pub type Row = serde_json::Map<String, serde_json::Value>;
