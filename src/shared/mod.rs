//! Geteilte Konfigurationstypen.
//!
//! Enthält die unveränderliche Zeichen-Konfiguration, die dem Handler beim
//! Erstellen übergeben wird — keine globalen Default-Objekte.

pub mod options;

pub use options::DrawOptions;
pub use options::{PREVIEW_LENGTH_M, SNAP_TOLERANCE_M};
