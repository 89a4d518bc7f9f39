use serde::{Deserialize, Serialize};

/// A dropdown data-validation rule restricting a cell to a closed set of
/// text values.
///
/// The rule is advisory at this layer: [`Sheet`](crate::Sheet) stores it,
/// shifts it with row edits, and reports it back, but never rejects a write,
/// matching hosts where automations write straight through validation. The
/// dropdown UI and any enforcement belong to the host.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumConstraint {
    /// Values the dropdown offers, in display order.
    pub allowed: Vec<String>,
}

impl EnumConstraint {
    pub fn new<I, S>(allowed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        EnumConstraint {
            allowed: allowed.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether `value` is one of the allowed entries. Exact string match,
    /// no trimming or case folding.
    pub fn allows(&self, value: &str) -> bool {
        self.allowed.iter().any(|v| v == value)
    }
}
