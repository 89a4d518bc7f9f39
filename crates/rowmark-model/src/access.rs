use crate::address::CellCoord;
use crate::sheet::{GridError, Sheet};
use crate::validation::EnumConstraint;
use crate::value::CellValue;

/// The table capability a row automation consumes.
///
/// Hosts hand this interface to the engine instead of an ambient global
/// sheet: anything that can read a row span and mutate cells, widgets, and
/// rows can back it, and tests substitute the in-memory [`Sheet`]. All
/// coordinates are 1-based. Every operation can fault with [`GridError`];
/// callers propagate faults without retrying or rolling back.
///
/// The trait is object safe, so adapters may be handed around as
/// `&mut dyn TableAccess`.
pub trait TableAccess {
    /// Reads `count` contiguous cells of `row` starting at `start_col`.
    /// Unset cells read as [`CellValue::Empty`].
    fn read_cells(&self, row: u32, start_col: u32, count: u32)
        -> Result<Vec<CellValue>, GridError>;

    /// Writes one cell's value. Writing [`CellValue::Empty`] blanks the
    /// cell.
    fn write_cell(&mut self, row: u32, col: u32, value: CellValue) -> Result<(), GridError>;

    /// Installs (`true`) or removes (`false`) a checkbox widget. Idempotent
    /// in both directions.
    fn set_checkbox(&mut self, row: u32, col: u32, present: bool) -> Result<(), GridError>;

    /// Constrains a cell to a closed set of dropdown values, optionally
    /// writing its current value in the same mutation. Replaces any
    /// existing constraint.
    fn set_enum_constraint(
        &mut self,
        row: u32,
        col: u32,
        allowed: Vec<String>,
        current: Option<String>,
    ) -> Result<(), GridError>;

    /// Removes any dropdown constraint from a cell, leaving its value in
    /// place.
    fn clear_constraint(&mut self, row: u32, col: u32) -> Result<(), GridError>;

    /// Resets formatting on `count` contiguous cells of `row` starting at
    /// `start_col`. Values are untouched.
    fn clear_formatting(&mut self, row: u32, start_col: u32, count: u32)
        -> Result<(), GridError>;

    /// Inserts a blank row immediately above `row`; `row` and everything
    /// below shift down by one.
    fn insert_blank_row_before(&mut self, row: u32) -> Result<(), GridError>;
}

impl TableAccess for Sheet {
    fn read_cells(
        &self,
        row: u32,
        start_col: u32,
        count: u32,
    ) -> Result<Vec<CellValue>, GridError> {
        self.check_span(row, start_col, count)?;
        Ok((0..count)
            .map(|i| self.value(CellCoord::new(row, start_col + i)))
            .collect())
    }

    fn write_cell(&mut self, row: u32, col: u32, value: CellValue) -> Result<(), GridError> {
        self.set_value(CellCoord::new(row, col), value)
    }

    fn set_checkbox(&mut self, row: u32, col: u32, present: bool) -> Result<(), GridError> {
        let coord = CellCoord::new(row, col);
        if present {
            self.insert_checkbox(coord)
        } else {
            self.remove_checkbox(coord)
        }
    }

    fn set_enum_constraint(
        &mut self,
        row: u32,
        col: u32,
        allowed: Vec<String>,
        current: Option<String>,
    ) -> Result<(), GridError> {
        let coord = CellCoord::new(row, col);
        self.set_constraint(coord, EnumConstraint::new(allowed))?;
        if let Some(value) = current {
            self.set_value(coord, CellValue::Text(value))?;
        }
        Ok(())
    }

    fn clear_constraint(&mut self, row: u32, col: u32) -> Result<(), GridError> {
        self.remove_constraint(CellCoord::new(row, col))
    }

    fn clear_formatting(
        &mut self,
        row: u32,
        start_col: u32,
        count: u32,
    ) -> Result<(), GridError> {
        self.check_span(row, start_col, count)?;
        for i in 0..count {
            self.set_style_id(CellCoord::new(row, start_col + i), 0)?;
        }
        Ok(())
    }

    fn insert_blank_row_before(&mut self, row: u32) -> Result<(), GridError> {
        self.insert_row_before(row)
    }
}
