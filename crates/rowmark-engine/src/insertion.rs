use std::collections::HashSet;

/// Where (and whether) a completed row triggers a blank-row insertion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RowInsertion {
    /// Insert only when the fixed anchor row fills. The blank row takes the
    /// anchor's index and the completed entry shifts down one.
    AboveAnchor(u32),
    /// Insert above whichever data row filled, wherever it sits.
    AboveFilledRow,
}

impl RowInsertion {
    /// Whether a row with the given completeness should trigger an
    /// insertion. Position is the only other input; the policy never looks
    /// at the table.
    pub fn triggers_for(&self, row: u32, filled: bool) -> bool {
        filled
            && match self {
                RowInsertion::AboveAnchor(anchor) => row == *anchor,
                RowInsertion::AboveFilledRow => true,
            }
    }
}

/// Whether a row that keeps evaluating filled keeps triggering insertions.
///
/// `OnEveryFill` is the historical behavior: editing a completed row's cell
/// to a different non-blank value counts as a fresh completion and inserts
/// again. `OncePerRow` suppresses the repeats by remembering, per
/// automation instance, which physical rows already triggered.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Reinsertion {
    #[default]
    OnEveryFill,
    OncePerRow,
}

/// Rows that already triggered an insertion, tracked across row shifts.
///
/// Entries are physical row indices, so every recorded insertion shifts the
/// entries at or below the insertion point down one; the ledger keeps
/// pointing at the same rows after they move.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RowLedger {
    rows: HashSet<u32>,
}

impl RowLedger {
    pub fn contains(&self, row: u32) -> bool {
        self.rows.contains(&row)
    }

    /// Records that an insertion landed above `row`: existing entries at or
    /// below `row` shift down one, then the row that triggered (now living
    /// at `row + 1`) is marked.
    pub fn record_insertion(&mut self, row: u32) {
        self.rows = self
            .rows
            .iter()
            .map(|&r| if r >= row { r + 1 } else { r })
            .collect();
        self.rows.insert(row + 1);
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
