#![doc(test(attr(deny(warnings))))]

//! Shiftbook records work shifts (company, hours, hourly wage) in a persisted
//! ledger and presents them as a list, a graph, a calendar and running totals.
//!
//! The ledger itself lives in `shiftbook-core`; this crate wires it to JSON
//! storage, user configuration and the terminal front end.

pub mod cli;
pub mod errors;
pub mod utils;

pub use shiftbook_config as config;
pub use shiftbook_core as ledger;
pub use shiftbook_domain as domain;
pub use shiftbook_storage_json as storage;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Shiftbook tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
        super::init();
    }
}
