use rowmark_model::{CellValue, GridError, TableAccess};

/// Review mark meaning "approved".
pub const APPROVED_MARK: &str = "✔️";
/// Review mark meaning "rejected".
pub const REJECTED_MARK: &str = "❌";
/// Review mark meaning "not yet reviewed"; the default on completion.
pub const PENDING_MARK: &str = "❓";

/// Dropdown indicator configuration: the closed set of marks a reviewer can
/// pick from, and the mark written whenever a row (re)fills.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DropdownSpec {
    pub choices: Vec<String>,
    pub pending: String,
}

impl DropdownSpec {
    /// The reviewer-mark dropdown: approve, reject, or pending, defaulting
    /// to pending.
    pub fn review_marks() -> Self {
        DropdownSpec {
            choices: vec![
                APPROVED_MARK.to_string(),
                REJECTED_MARK.to_string(),
                PENDING_MARK.to_string(),
            ],
            pending: PENDING_MARK.to_string(),
        }
    }
}

/// The status indicator kept in the cell just past a row's data span.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Indicator {
    /// A checkbox widget whose presence tracks completeness.
    Checkbox,
    /// A constrained dropdown reset to its pending mark on every fill and
    /// removed entirely while the row has blanks.
    Dropdown(DropdownSpec),
}

impl Indicator {
    /// Synchronizes the indicator cell at (`row`, `col`) with the row's
    /// completeness.
    ///
    /// The dropdown arm overwrites whatever mark a reviewer picked each
    /// time the row evaluates filled: a re-filled row is a changed row, so
    /// it goes back to pending. The mutation is always the full pair of
    /// constraint and value, never one without the other.
    pub fn apply<T>(&self, table: &mut T, row: u32, col: u32, filled: bool) -> Result<(), GridError>
    where
        T: TableAccess + ?Sized,
    {
        match self {
            Indicator::Checkbox => table.set_checkbox(row, col, filled),
            Indicator::Dropdown(spec) => {
                if filled {
                    table.set_enum_constraint(
                        row,
                        col,
                        spec.choices.clone(),
                        Some(spec.pending.clone()),
                    )
                } else {
                    table.clear_constraint(row, col)?;
                    table.write_cell(row, col, CellValue::Empty)
                }
            }
        }
    }
}
