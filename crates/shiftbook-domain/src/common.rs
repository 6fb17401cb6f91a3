//! Shared traits and serde helpers for ledger primitives.

use serde::{Deserialize, Deserializer};

/// Exposes a stable identifier for entities stored in the ledger.
pub trait Identifiable {
    type Id;

    fn id(&self) -> &Self::Id;
}

/// Supplies a common contract for retrieving numeric amounts.
pub trait Amounted {
    fn amount(&self) -> f64;
}

/// Converts an entity into a user-facing display label.
pub trait Displayable {
    fn display_label(&self) -> String;
}

/// Reads a JSON number, mapping `null` back to `NaN`.
///
/// `serde_json` writes non-finite floats as `null`, so entries recorded from
/// unparseable input would otherwise fail to load again.
pub fn f64_or_nan<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<f64>::deserialize(deserializer)?;
    Ok(value.unwrap_or(f64::NAN))
}

// Re-export common dependencies so consumers can rely on this module as a façade.
pub use chrono;
pub use serde;
pub use uuid;
