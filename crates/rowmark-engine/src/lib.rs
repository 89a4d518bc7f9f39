#![forbid(unsafe_code)]

//! Edit-driven row completion for tabular data-entry surfaces.
//!
//! The engine watches host cell edits and keeps two things in sync with a
//! row's completeness: a status indicator in the column just past the data
//! span, and, when a completed entry calls for it, a fresh blank row rolled
//! in above. Hosts register one [`Automation`] per sheet and forward every
//! edit event:
//!
//! ```
//! use rowmark_engine::{Automation, CellEdit};
//! use rowmark_model::{CellValue, Sheet, TableAccess};
//!
//! let mut sheet = Sheet::new(50, 8);
//! let mut automation = Automation::checkbox_tracker();
//!
//! // The host applies the user's edit, then notifies the automation.
//! sheet.write_cell(3, 1, CellValue::from("north"))?;
//! automation.handle_edit(CellEdit::new(3, 1), &mut sheet)?;
//! # Ok::<(), rowmark_model::GridError>(())
//! ```
//!
//! Rendering, persistence, and event delivery belong to the host; the
//! engine reaches the table only through [`rowmark_model::TableAccess`].

mod dispatch;
mod event;
mod filled;
mod indicator;
mod insertion;

pub use dispatch::{Automation, AutomationConfig, EditGuard, ENTRY_ROW, HEADER_ROW};
pub use event::CellEdit;
pub use filled::is_row_filled;
pub use indicator::{
    DropdownSpec, Indicator, APPROVED_MARK, PENDING_MARK, REJECTED_MARK,
};
pub use insertion::{Reinsertion, RowInsertion, RowLedger};
