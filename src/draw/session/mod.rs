//! Zeichen-Session: Zustand und Übergänge der Zustandsmaschine.
//!
//! Aufgeteilt in:
//! - `state`     — Struct, Konstruktor, Render-Handle-Verwaltung
//! - `lifecycle` — Eingabe-Übergänge (Klick, Mausbewegung, Distanz, Löschen)
//! - `closure`   — Finalisierung mit orthogonaler Schließ-Ecke

mod closure;
mod lifecycle;
mod state;

pub use state::DrawingSession;
