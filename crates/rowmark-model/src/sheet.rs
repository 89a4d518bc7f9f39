use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::address::{CellCoord, CellKey, MAX_COLS, MAX_ROWS};
use crate::validation::EnumConstraint;
use crate::value::CellValue;

/// Faults surfaced by table operations.
///
/// Automations never catch these: a fault aborts the current edit
/// invocation, leaving the table exactly as the failed call found it. There
/// is no rollback of earlier writes; the next qualifying edit re-derives
/// state and corrects the indicator.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("cell (row {row}, col {col}) is outside the sheet bounds")]
    CellOutOfBounds { row: u32, col: u32 },
    #[error("row {row} is not a valid insertion point")]
    RowOutOfBounds { row: u32 },
}

/// One stored cell: a value plus an opaque formatting token.
///
/// `style_id = 0` means default (unformatted). The grid does not interpret
/// styles; it only stores, shifts, and clears them.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    #[serde(default)]
    pub value: CellValue,
    #[serde(default)]
    pub style_id: u32,
}

impl Cell {
    pub fn new(value: CellValue) -> Self {
        Cell { value, style_id: 0 }
    }

    /// Whether the cell carries no observable state and should be pruned
    /// from the sparse map rather than stored.
    pub fn is_truly_empty(&self) -> bool {
        self.value.is_empty() && self.style_id == 0
    }
}

/// An in-memory data-entry grid.
///
/// `Sheet` is the reference implementation of
/// [`TableAccess`](crate::TableAccess): hosts that own their data embed it
/// directly, and tests substitute it for a live surface. Cell values,
/// checkbox widgets, and dropdown constraints live in separate sparse
/// layers, the way hosts keep widgets and data validation beside the value
/// grid rather than inside it.
///
/// Reads of unset cells are total (they report empty/absent); mutations are
/// bounds-checked and return [`GridError`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sheet {
    row_count: u32,
    col_count: u32,
    #[serde(default)]
    cells: BTreeMap<CellKey, Cell>,
    #[serde(default)]
    checkboxes: BTreeSet<CellKey>,
    #[serde(default)]
    constraints: BTreeMap<CellKey, EnumConstraint>,
}

impl Sheet {
    /// Creates an empty grid of the given dimensions. Panics if either
    /// dimension is zero or beyond the host ceiling.
    pub fn new(row_count: u32, col_count: u32) -> Self {
        assert!(
            row_count >= 1 && row_count <= MAX_ROWS,
            "row count {row_count} out of host bounds"
        );
        assert!(
            col_count >= 1 && col_count <= MAX_COLS,
            "col count {col_count} out of host bounds"
        );
        Sheet {
            row_count,
            col_count,
            cells: BTreeMap::new(),
            checkboxes: BTreeSet::new(),
            constraints: BTreeMap::new(),
        }
    }

    pub fn row_count(&self) -> u32 {
        self.row_count
    }

    pub fn col_count(&self) -> u32 {
        self.col_count
    }

    /// Number of cells occupying slots in the sparse value map.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// The value at `coord`. Unset cells read as [`CellValue::Empty`], as do
    /// coordinates outside the grid; bounds are enforced on mutation and on
    /// the capability surface, not on plain reads.
    pub fn value(&self, coord: CellCoord) -> CellValue {
        match self.key_if_in_bounds(coord) {
            Some(key) => self
                .cells
                .get(&key)
                .map(|cell| cell.value.clone())
                .unwrap_or_default(),
            None => CellValue::Empty,
        }
    }

    /// The formatting token at `coord`, `0` when unset.
    pub fn style_id(&self, coord: CellCoord) -> u32 {
        match self.key_if_in_bounds(coord) {
            Some(key) => self.cells.get(&key).map(|cell| cell.style_id).unwrap_or(0),
            None => 0,
        }
    }

    pub fn has_checkbox(&self, coord: CellCoord) -> bool {
        match self.key_if_in_bounds(coord) {
            Some(key) => self.checkboxes.contains(&key),
            None => false,
        }
    }

    pub fn constraint(&self, coord: CellCoord) -> Option<&EnumConstraint> {
        self.constraints.get(&self.key_if_in_bounds(coord)?)
    }

    pub fn set_value(&mut self, coord: CellCoord, value: CellValue) -> Result<(), GridError> {
        let key = self.checked_key(coord)?;
        match self.cells.get_mut(&key) {
            Some(cell) => {
                cell.value = value;
                if cell.is_truly_empty() {
                    self.cells.remove(&key);
                }
            }
            None => {
                let cell = Cell::new(value);
                // Empty writes to unset cells must not allocate slots.
                if !cell.is_truly_empty() {
                    self.cells.insert(key, cell);
                }
            }
        }
        Ok(())
    }

    pub fn set_style_id(&mut self, coord: CellCoord, style_id: u32) -> Result<(), GridError> {
        let key = self.checked_key(coord)?;
        match self.cells.get_mut(&key) {
            Some(cell) => {
                cell.style_id = style_id;
                if cell.is_truly_empty() {
                    self.cells.remove(&key);
                }
            }
            None => {
                if style_id != 0 {
                    self.cells.insert(
                        key,
                        Cell {
                            value: CellValue::Empty,
                            style_id,
                        },
                    );
                }
            }
        }
        Ok(())
    }

    /// Installs a checkbox widget. Idempotent; the cell value is untouched.
    pub fn insert_checkbox(&mut self, coord: CellCoord) -> Result<(), GridError> {
        let key = self.checked_key(coord)?;
        self.checkboxes.insert(key);
        Ok(())
    }

    /// Removes a checkbox widget if present. Idempotent.
    pub fn remove_checkbox(&mut self, coord: CellCoord) -> Result<(), GridError> {
        let key = self.checked_key(coord)?;
        self.checkboxes.remove(&key);
        Ok(())
    }

    /// Installs (or replaces) a dropdown constraint. The cell value is
    /// untouched, even if it falls outside the allowed set.
    pub fn set_constraint(
        &mut self,
        coord: CellCoord,
        rule: EnumConstraint,
    ) -> Result<(), GridError> {
        let key = self.checked_key(coord)?;
        self.constraints.insert(key, rule);
        Ok(())
    }

    /// Removes any dropdown constraint. Idempotent; the cell value is left
    /// in place.
    pub fn remove_constraint(&mut self, coord: CellCoord) -> Result<(), GridError> {
        let key = self.checked_key(coord)?;
        self.constraints.remove(&key);
        Ok(())
    }

    /// Inserts a blank row immediately above `row`. Everything at `row` and
    /// below shifts down one: values, formatting, checkboxes, constraints.
    ///
    /// The host surface this grid mirrors additionally copies the *widget*
    /// layers of the displaced row into the freshly inserted one (checkbox
    /// presence and dropdown constraints, never values or formatting), and
    /// the grid reproduces that so automations can be exercised against the
    /// propagation they correct for.
    pub fn insert_row_before(&mut self, row: u32) -> Result<(), GridError> {
        if row == 0 || row > self.row_count || self.row_count == MAX_ROWS {
            return Err(GridError::RowOutOfBounds { row });
        }

        self.cells = std::mem::take(&mut self.cells)
            .into_iter()
            .map(|(key, cell)| (shift_key_down(key, row), cell))
            .collect();
        self.checkboxes = std::mem::take(&mut self.checkboxes)
            .into_iter()
            .map(|key| shift_key_down(key, row))
            .collect();
        self.constraints = std::mem::take(&mut self.constraints)
            .into_iter()
            .map(|(key, rule)| (shift_key_down(key, row), rule))
            .collect();
        self.row_count += 1;

        // Host propagation: the displaced row's widgets reappear in the new
        // blank row.
        let displaced = row + 1;
        let (lo, hi) = self.row_key_span(displaced);
        let inherited_boxes: Vec<u32> = self
            .checkboxes
            .range(lo..=hi)
            .map(|key| key.col())
            .collect();
        for col in inherited_boxes {
            self.checkboxes.insert(CellKey::new(row, col));
        }
        let inherited_rules: Vec<(u32, EnumConstraint)> = self
            .constraints
            .range(lo..=hi)
            .map(|(key, rule)| (key.col(), rule.clone()))
            .collect();
        for (col, rule) in inherited_rules {
            self.constraints.insert(CellKey::new(row, col), rule);
        }

        Ok(())
    }

    pub(crate) fn check_cell(&self, row: u32, col: u32) -> Result<(), GridError> {
        if row == 0 || col == 0 || row > self.row_count || col > self.col_count {
            return Err(GridError::CellOutOfBounds { row, col });
        }
        Ok(())
    }

    /// Validates a contiguous same-row span of `count` cells starting at
    /// `start_col`, before any mutation touches it.
    pub(crate) fn check_span(&self, row: u32, start_col: u32, count: u32) -> Result<(), GridError> {
        self.check_cell(row, start_col)?;
        let remaining = self.col_count - start_col + 1;
        if count > remaining {
            return Err(GridError::CellOutOfBounds {
                row,
                col: start_col.saturating_add(count - 1),
            });
        }
        Ok(())
    }

    fn checked_key(&self, coord: CellCoord) -> Result<CellKey, GridError> {
        self.check_cell(coord.row, coord.col)?;
        Ok(CellKey::from(coord))
    }

    fn key_if_in_bounds(&self, coord: CellCoord) -> Option<CellKey> {
        self.check_cell(coord.row, coord.col).ok()?;
        Some(CellKey::from(coord))
    }

    fn row_key_span(&self, row: u32) -> (CellKey, CellKey) {
        (CellKey::new(row, 1), CellKey::new(row, self.col_count))
    }
}

fn shift_key_down(key: CellKey, from_row: u32) -> CellKey {
    if key.row() >= from_row {
        CellKey::new(key.row() + 1, key.col())
    } else {
        key
    }
}
