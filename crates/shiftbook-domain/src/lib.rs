//! shiftbook-domain
//!
//! Pure domain models for the shift ledger (TimeEntry, Totals, ViewMode, NumericInputPolicy).
//! No I/O, no CLI, no storage. Only data types and core enums.

pub mod common;
pub mod entry;
pub mod input;
pub mod totals;
pub mod view;

pub use common::*;
pub use entry::*;
pub use input::*;
pub use totals::*;
pub use view::*;
