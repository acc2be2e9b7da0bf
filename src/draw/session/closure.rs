//! Finalisierung: Auflösung der orthogonalen Schließ-Ecke.

use super::state::DrawingSession;
use crate::core::{DistanceLabel, GeoPoint, bearing, intersect_paths, normalize_bearing};
use crate::draw::SessionEffect;
use crate::host::{DistanceMeasure, DrawRenderer};

impl DrawingSession {
    /// Finalisiert die Zeichnung.
    ///
    /// Unter 2 Vertices wird die Session kommentarlos verworfen. Ist der
    /// Rand bereits geschlossen (letzter == erster Vertex), wird die Liste
    /// unverändert emittiert. Andernfalls wird höchstens eine synthetische
    /// Ecke eingefügt: der Schnittpunkt eines ±90°-Pfads vom letzten Vertex
    /// mit dem Pfad vom Startvertex entlang der letzten Segment-Peilung.
    pub fn finish(
        &mut self,
        measure: &dyn DistanceMeasure,
        renderer: &mut dyn DrawRenderer,
    ) -> SessionEffect {
        if self.vertices.len() < 2 {
            log::info!("Finalisierung ohne Geometrie — Session verworfen");
            self.teardown(renderer);
            return SessionEffect::Discarded;
        }

        let first = self.vertices[0];
        let last = self.vertices[self.vertices.len() - 1];

        if last == first {
            // Rand bereits geschlossen — nichts einzufügen
            let effect = SessionEffect::Completed {
                vertices: self.vertices.clone(),
                labels: self.labels.clone(),
            };
            self.teardown(renderer);
            return effect;
        }

        let prev = self.vertices[self.vertices.len() - 2];
        let closing_bearing = bearing(prev, last);

        if let Some(corner) = resolve_closing_corner(last, first, closing_bearing, measure) {
            // Labels für die beiden Schließ-Segmente (gemessene Distanzen)
            self.labels.push(DistanceLabel {
                start: last,
                end: corner,
                distance_m: measure.distance(last, corner),
                bearing_deg: bearing(last, corner),
            });
            self.labels.push(DistanceLabel {
                start: corner,
                end: first,
                distance_m: measure.distance(corner, first),
                bearing_deg: bearing(corner, first),
            });
            self.vertices.push(corner);
        }
        // Beide Kandidaten ungültig: gerader Abschluss ohne Ecke

        let effect = SessionEffect::Completed {
            vertices: self.vertices.clone(),
            labels: self.labels.clone(),
        };
        self.teardown(renderer);
        effect
    }

    /// Finalisiert nach einem Snap auf den Startvertex.
    ///
    /// Der Rand schließt direkt vom letzten committeten Vertex auf den
    /// Startvertex; es wird kein zusätzlicher Punkt eingefügt, nur ein
    /// Label für das Schließ-Segment ergänzt.
    pub(crate) fn finish_snapped(
        &mut self,
        measure: &dyn DistanceMeasure,
        renderer: &mut dyn DrawRenderer,
    ) -> SessionEffect {
        let first = self.vertices[0];
        let last = self.vertices[self.vertices.len() - 1];
        if last != first {
            self.labels.push(DistanceLabel {
                start: last,
                end: first,
                distance_m: measure.distance(last, first),
                bearing_deg: bearing(last, first),
            });
        }
        let effect = SessionEffect::Completed {
            vertices: self.vertices.clone(),
            labels: self.labels.clone(),
        };
        self.teardown(renderer);
        effect
    }
}

/// Wählt die Schließ-Ecke aus den beiden ±90°-Kandidaten.
///
/// Sind beide Schnittpunkte gültig, gewinnt der kürzere Gesamt-Schließweg
/// (letzter Vertex → Ecke → Startvertex); ist nur einer gültig, wird er
/// genommen; sind beide ungültig, gibt es keine Ecke.
pub(super) fn resolve_closing_corner(
    last: GeoPoint,
    first: GeoPoint,
    closing_bearing: f64,
    measure: &dyn DistanceMeasure,
) -> Option<GeoPoint> {
    let left_turn = normalize_bearing(closing_bearing - 90.0);
    let right_turn = normalize_bearing(closing_bearing + 90.0);

    let left_hit = intersect_paths(last, left_turn, first, closing_bearing);
    let right_hit = intersect_paths(last, right_turn, first, closing_bearing);

    match (left_hit, right_hit) {
        (Some(l), Some(r)) => {
            let left_len = measure.distance(last, l) + measure.distance(l, first);
            let right_len = measure.distance(last, r) + measure.distance(r, first);
            Some(if left_len < right_len { l } else { r })
        }
        (Some(l), None) => Some(l),
        (None, Some(r)) => Some(r),
        (None, None) => None,
    }
}
