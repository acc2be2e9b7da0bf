//! Orthogonales Polygon-Zeichnen: Zustandsmaschine und Handler.
//!
//! Die [`DrawingSession`] hält den Zeichen-Zustand (Vertices, Phase,
//! letzte Peilung, Previews) und erzeugt pro Eingabe reine
//! [`SessionEffect`]-Daten; der [`OrthoDrawHandler`] besitzt die Session,
//! verteilt [`DrawIntent`](crate::events::DrawIntent)s und emittiert
//! [`DrawEvent`](crate::events::DrawEvent)s über den Bus.

pub mod handler;
pub mod session;

pub use handler::OrthoDrawHandler;
pub use session::DrawingSession;

use crate::core::{DistanceLabel, GeoPoint};

// ── Typen ────────────────────────────────────────────────────────

/// Phase der Zeichen-Zustandsmaschine.
///
/// Phase plus Vertex-Anzahl bestimmen zusammen, welche Eingaben wirken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawPhase {
    /// Wartet auf den ersten Punkt
    Waiting,
    /// Wartet auf die Richtung des ersten Segments
    AwaitingDirection,
    /// Wartet auf die Distanz-Eingabe
    AwaitingDistance,
    /// Wartet auf weitere orthogonale Segmente
    Orthogonal,
}

/// Ergebnis eines Session-Übergangs — reine Daten, keine Event-Emission.
///
/// Der Handler übersetzt Effekte in [`DrawEvent`](crate::events::DrawEvent)s.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEffect {
    /// Kein nach außen sichtbarer Effekt
    None,
    /// Distanz-Eingabe anfordern
    PromptOpened { at: GeoPoint, can_finish: bool },
    /// Distanz-Eingabe schließen (Segment committet oder Vertex gelöscht)
    PromptClosed,
    /// Polygon fertiggestellt; Session ist abgeräumt
    Completed {
        vertices: Vec<GeoPoint>,
        labels: Vec<DistanceLabel>,
    },
    /// Session ohne Ergebnis verworfen (Finalisierung mit < 2 Vertices)
    Discarded,
}
