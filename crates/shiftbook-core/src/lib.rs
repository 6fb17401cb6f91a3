//! shiftbook-core
//!
//! The entry ledger and the logic around it.
//! Depends on shiftbook-domain. No CLI, no terminal I/O, no direct file access:
//! persistence goes through the [`storage::EntryStore`] port.

pub mod error;
pub mod input;
pub mod ledger;
pub mod storage;
pub mod time;
pub mod views;

pub use error::CoreError;
pub use input::*;
pub use ledger::EntryLedger;
pub use storage::{EntryStore, MemoryEntryStore};
pub use time::Clock;
pub use views::*;

#[cfg(test)]
mod tests;
