use serde::{Deserialize, Serialize};

/// A cell value as delivered by (and written back to) a data-entry host.
///
/// The serialized form uses an explicit `{type, value}` layout so host
/// adapters on the far side of an IPC boundary can decode values without
/// guessing at untagged overlaps.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum CellValue {
    /// An unset cell.
    #[default]
    Empty,
    /// Plain text.
    Text(String),
    /// IEEE 754 double precision number.
    Number(f64),
    /// Boolean, the storage behind checkbox widgets.
    Boolean(bool),
}

impl CellValue {
    /// Whether the value reads as a blank cell.
    ///
    /// Hosts hand unset cells to automations as the empty string, so the
    /// test is strict: [`CellValue::Empty`] and zero-length text are blank,
    /// while whitespace-only text, `Number(0.0)`, and `Boolean(false)` all
    /// count as populated. No trimming, no coercion.
    pub fn is_blank(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(s) => s.is_empty(),
            CellValue::Number(_) | CellValue::Boolean(_) => false,
        }
    }

    /// Whether the value is exactly [`CellValue::Empty`].
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Boolean(b)
    }
}
