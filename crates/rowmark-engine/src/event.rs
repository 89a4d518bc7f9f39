use serde::{Deserialize, Serialize};

/// One cell-edit notification from the host.
///
/// Hosts deliver an event per user mutation with the 1-based coordinates of
/// the edited cell. The engine consumes the event within a single
/// invocation and never retains it; the edited value itself is not part of
/// the event because completeness is always re-read from the table.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellEdit {
    /// 1-based row of the edited cell.
    pub row: u32,
    /// 1-based column of the edited cell.
    pub col: u32,
}

impl CellEdit {
    pub const fn new(row: u32, col: u32) -> Self {
        CellEdit { row, col }
    }
}
