use crate::core::{DistanceLabel, GeoPoint};

/// Vom Engine emittierte Events.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawEvent {
    /// Zeichenmodus aktiviert, neue Session angelegt
    Enabled,
    /// Zeichenmodus deaktiviert, Session verworfen
    Disabled,
    /// Fertiges Polygon: Vertex-Folge plus alle Distanz-Labels.
    /// Der Host materialisiert daraus die permanente Form.
    PolygonCreated {
        vertices: Vec<GeoPoint>,
        labels: Vec<DistanceLabel>,
    },
    /// Distanz-Eingabe angefordert.
    /// `can_finish` spiegelt, ob die Finalisierung bereits zulässig ist
    /// (mindestens 3 committete Vertices).
    DistancePromptRequested { at: GeoPoint, can_finish: bool },
    /// Distanz-Eingabe geschlossen (Segment committet oder Vertex gelöscht)
    DistancePromptClosed,
}

impl DrawEvent {
    /// Event-Art für die Subscription-Zuordnung.
    pub fn kind(&self) -> DrawEventKind {
        match self {
            DrawEvent::Enabled => DrawEventKind::Enabled,
            DrawEvent::Disabled => DrawEventKind::Disabled,
            DrawEvent::PolygonCreated { .. } => DrawEventKind::PolygonCreated,
            DrawEvent::DistancePromptRequested { .. } => DrawEventKind::DistancePromptRequested,
            DrawEvent::DistancePromptClosed => DrawEventKind::DistancePromptClosed,
        }
    }
}

/// Event-Arten für Subscribe/Unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrawEventKind {
    Enabled,
    Disabled,
    PolygonCreated,
    DistancePromptRequested,
    DistancePromptClosed,
}
