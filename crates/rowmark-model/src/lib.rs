//! Data model for edit-driven row automations.
//!
//! The crate defines the vocabulary shared by engines and hosts:
//!
//! - [`CellValue`], [`CellCoord`], and the packed [`CellKey`] map key
//! - [`EnumConstraint`], the dropdown data-validation rule
//! - [`TableAccess`], the capability automations consume
//! - [`Sheet`], an in-memory grid implementing the capability, used by
//!   embedding hosts and as the substitutable fake in tests
//!
//! Everything here is serde-serializable so sheets and values survive an
//! IPC or snapshot boundary as plain JSON.

mod access;
mod address;
mod sheet;
mod validation;
mod value;

pub use access::TableAccess;
pub use address::{CellCoord, CellKey, MAX_COLS, MAX_ROWS};
pub use sheet::{Cell, GridError, Sheet};
pub use validation::EnumConstraint;
pub use value::CellValue;
