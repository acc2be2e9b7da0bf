use crate::core::GeoPoint;

/// Eingaben aus der Host-Eingabeschicht.
///
/// Der Host mappt seine Pointer-, Tasten- und Eingabefeld-Events auf diese
/// Intents; welche davon wirken, entscheidet die aktuelle Phase der Session.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawIntent {
    /// Klick auf die Kartenfläche (bereits in geografische Koordinaten umgerechnet)
    MapClicked { point: GeoPoint },
    /// Mausbewegung über der Kartenfläche
    MouseMoved { point: GeoPoint },
    /// Positive Distanz aus dem Eingabe-Prompt bestätigt
    DistanceSubmitted { meters: f64 },
    /// Klick auf den Start-Snap-Marker (erzwungene Finalisierung)
    SnapMarkerClicked,
    /// Finalisierung angefordert (Finish-Button im Prompt)
    FinishRequested,
    /// Letzten Vertex löschen (Backspace/Delete beim Host)
    DeleteLastVertexRequested,
    /// Zeichnung abbrechen (Escape beim Host)
    CancelRequested,
}
