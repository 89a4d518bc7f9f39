use log::{debug, trace};
use rowmark_model::{CellValue, GridError, TableAccess};

use crate::event::CellEdit;
use crate::filled::is_row_filled;
use crate::indicator::{DropdownSpec, Indicator};
use crate::insertion::{Reinsertion, RowInsertion, RowLedger};

/// The header row. Rows at or above it never hold entries.
pub const HEADER_ROW: u32 = 1;

/// The row immediately under the header, where new entries are typed.
pub const ENTRY_ROW: u32 = 2;

/// Which edits wake the automation at all.
///
/// An edit must land inside the data span (columns `1..=data_span`) *and*
/// on a watched row; everything else is inert, including edits to the
/// indicator column itself. The guard looks only at coordinates, never at
/// the table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EditGuard {
    /// Any row below the header.
    AnyDataRow,
    /// Exactly one designated row.
    OnlyRow(u32),
}

impl EditGuard {
    pub fn admits(&self, edit: CellEdit, data_span: u32) -> bool {
        if edit.col > data_span {
            return false;
        }
        match self {
            EditGuard::AnyDataRow => edit.row > HEADER_ROW,
            EditGuard::OnlyRow(row) => edit.row == *row,
        }
    }
}

/// Full configuration of one automation instance.
///
/// The two stock workflows ship as presets
/// ([`checkbox_tracker`](AutomationConfig::checkbox_tracker) and
/// [`review_queue`](AutomationConfig::review_queue)); custom mixes are
/// built by filling the fields directly.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AutomationConfig {
    /// Width of the span checked for completeness, columns `1..=data_span`.
    pub data_span: u32,
    pub guard: EditGuard,
    pub indicator: Indicator,
    pub insertion: RowInsertion,
    pub reinsertion: Reinsertion,
}

impl AutomationConfig {
    /// Three data columns with a checkbox in column 4. Every data row keeps
    /// its checkbox in sync with completeness; completing the entry row
    /// additionally rolls a fresh blank row in above it.
    pub fn checkbox_tracker() -> Self {
        AutomationConfig {
            data_span: 3,
            guard: EditGuard::AnyDataRow,
            indicator: Indicator::Checkbox,
            insertion: RowInsertion::AboveAnchor(ENTRY_ROW),
            reinsertion: Reinsertion::OnEveryFill,
        }
    }

    /// Four data columns with a reviewer dropdown in column 5, reset to the
    /// pending mark on every completion. Only the entry row is watched;
    /// completing it pushes the entry down under a fresh blank row.
    pub fn review_queue() -> Self {
        AutomationConfig {
            data_span: 4,
            guard: EditGuard::OnlyRow(ENTRY_ROW),
            indicator: Indicator::Dropdown(DropdownSpec::review_marks()),
            insertion: RowInsertion::AboveFilledRow,
            reinsertion: Reinsertion::OnEveryFill,
        }
    }

    /// Column holding the status indicator, immediately after the data
    /// span.
    pub fn indicator_col(&self) -> u32 {
        self.data_span + 1
    }
}

/// The edit-driven automation a host registers as its edit callback.
///
/// One instance serves one sheet. The host calls
/// [`handle_edit`](Automation::handle_edit) for every cell mutation; edits
/// outside the guard return immediately. Under the default
/// [`Reinsertion::OnEveryFill`] policy the instance keeps no state between
/// calls; with [`Reinsertion::OncePerRow`] it carries the row ledger.
#[derive(Clone, Debug)]
pub struct Automation {
    config: AutomationConfig,
    ledger: RowLedger,
}

impl Automation {
    pub fn new(config: AutomationConfig) -> Self {
        Automation {
            config,
            ledger: RowLedger::default(),
        }
    }

    /// Checkbox-tracker preset; see
    /// [`AutomationConfig::checkbox_tracker`].
    pub fn checkbox_tracker() -> Self {
        Automation::new(AutomationConfig::checkbox_tracker())
    }

    /// Review-queue preset; see [`AutomationConfig::review_queue`].
    pub fn review_queue() -> Self {
        Automation::new(AutomationConfig::review_queue())
    }

    pub fn config(&self) -> &AutomationConfig {
        &self.config
    }

    /// Handles one cell edit: refreshes the edited row's indicator, then
    /// inserts a blank row if the insertion policy asks for one.
    ///
    /// Completeness is derived freshly before each of the two steps, never
    /// carried over, because the indicator step itself writes to the table.
    /// A fault from the capability aborts the invocation where it happened;
    /// earlier writes stand, and the next qualifying edit re-derives and
    /// corrects indicator state.
    pub fn handle_edit<T>(&mut self, edit: CellEdit, table: &mut T) -> Result<(), GridError>
    where
        T: TableAccess + ?Sized,
    {
        if !self.config.guard.admits(edit, self.config.data_span) {
            trace!(
                "edit at (row {}, col {}) is outside the watched region",
                edit.row,
                edit.col
            );
            return Ok(());
        }

        let filled = is_row_filled(table, edit.row, self.config.data_span)?;
        self.config
            .indicator
            .apply(table, edit.row, self.config.indicator_col(), filled)?;

        let filled = is_row_filled(table, edit.row, self.config.data_span)?;
        self.maybe_insert(table, edit.row, filled)
    }

    fn maybe_insert<T>(&mut self, table: &mut T, row: u32, filled: bool) -> Result<(), GridError>
    where
        T: TableAccess + ?Sized,
    {
        if !self.config.insertion.triggers_for(row, filled) {
            return Ok(());
        }
        if self.config.reinsertion == Reinsertion::OncePerRow && self.ledger.contains(row) {
            debug!("row {row} already triggered an insertion, skipping");
            return Ok(());
        }

        // The completed entry sheds its ad-hoc formatting before it moves
        // down, so the archive of entries stays uniform.
        table.clear_formatting(row, 1, self.config.data_span)?;
        table.insert_blank_row_before(row)?;

        // The surface propagates widget layers into the inserted row; hand
        // it back clean so the fresh entry row carries no indicator state.
        let indicator_col = self.config.indicator_col();
        match &self.config.indicator {
            Indicator::Checkbox => table.set_checkbox(row, indicator_col, false)?,
            Indicator::Dropdown(_) => {
                table.clear_constraint(row, indicator_col)?;
                table.write_cell(row, indicator_col, CellValue::Empty)?;
            }
        }

        if self.config.reinsertion == Reinsertion::OncePerRow {
            self.ledger.record_insertion(row);
        }
        debug!("inserted a blank row before row {row}");
        Ok(())
    }
}
