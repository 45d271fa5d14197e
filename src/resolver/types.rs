use serde::{Deserialize, Serialize};

/// A single selectable chromatographic column.
///
/// Serialized field names (`label`, `id`, `isDefault`) are the output
/// contract consumed by the matching tool's parameter UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnEntry {
    /// Human-readable name shown to the end user
    pub label: String,

    /// The value the matching tool will store and match against.
    ///
    /// PeakForest assigns opaque codes; for in-house reference tables the
    /// identifier is the column name itself.
    pub id: String,

    /// True for exactly one entry per non-empty list, the first one
    /// encountered in source order. Used to pre-select a UI default.
    pub is_default: bool,
}

/// An ordered sequence of [`ColumnEntry`] values.
///
/// Order is significant: it reflects source enumeration order, and the
/// first entry carries the default flag.
pub type ColumnList = Vec<ColumnEntry>;

impl ColumnEntry {
    /// Create an entry whose identifier doubles as its label, as produced
    /// by the in-house backend.
    pub fn from_name(name: &str, is_default: bool) -> Self {
        Self {
            label: name.to_string(),
            id: name.to_string(),
            is_default,
        }
    }
}
