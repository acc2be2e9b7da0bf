//! Eingabe-Übergänge der Zeichen-Session.

use super::state::DrawingSession;
use crate::core::{DistanceLabel, GeoPoint, angle_difference, bearing, destination_point,
    normalize_bearing};
use crate::draw::{DrawPhase, SessionEffect};
use crate::host::{DistanceMeasure, DrawRenderer};

impl DrawingSession {
    /// Verarbeitet einen Klick auf die Kartenfläche gemäß Phasentabelle.
    pub fn on_map_click(
        &mut self,
        point: GeoPoint,
        renderer: &mut dyn DrawRenderer,
    ) -> SessionEffect {
        match self.phase {
            DrawPhase::Waiting => {
                self.vertices.push(point);
                // Start-Snap-Marker auf dem ersten Vertex anlegen
                if self.snap_marker.is_none() {
                    self.snap_marker =
                        Some(renderer.add_marker(point, &self.options.snap_marker_style));
                }
                self.phase = DrawPhase::AwaitingDirection;
                SessionEffect::None
            }
            DrawPhase::AwaitingDirection => {
                // Richtung kommt aus der Mausposition, nicht aus dem Klickpunkt
                let Some(mouse) = self.mouse_position else {
                    return SessionEffect::None;
                };
                let Some(&last) = self.vertices.last() else {
                    return SessionEffect::None;
                };
                self.last_bearing = Some(bearing(last, mouse));
                self.phase = DrawPhase::AwaitingDistance;
                self.open_distance_prompt(point, renderer)
            }
            DrawPhase::AwaitingDistance => {
                // Prompt offen — Klicks auf die Karte wirken nicht
                SessionEffect::None
            }
            DrawPhase::Orthogonal => {
                let Some(&last) = self.vertices.last() else {
                    return SessionEffect::None;
                };
                let Some(prev_bearing) = self.last_bearing else {
                    return SessionEffect::None;
                };
                // Der Klick wählt den näher liegenden der beiden 90°-Kandidaten
                let click_bearing = bearing(last, point);
                let left = normalize_bearing(prev_bearing - 90.0);
                let right = normalize_bearing(prev_bearing + 90.0);
                let left_diff = angle_difference(click_bearing, left).abs();
                let right_diff = angle_difference(click_bearing, right).abs();
                self.last_bearing = Some(if left_diff < right_diff { left } else { right });
                self.phase = DrawPhase::AwaitingDistance;
                self.open_distance_prompt(point, renderer)
            }
        }
    }

    /// Aktualisiert die Mausposition und die phasenabhängige Vorschau.
    pub fn on_mouse_move(&mut self, point: GeoPoint, renderer: &mut dyn DrawRenderer) {
        self.mouse_position = Some(point);
        match self.phase {
            DrawPhase::AwaitingDirection => self.show_direction_preview(renderer),
            DrawPhase::Orthogonal => self.show_orthogonal_previews(renderer),
            _ => {}
        }
    }

    /// Verarbeitet eine bestätigte Distanz-Eingabe.
    ///
    /// Ungültige Werte (nicht endlich, ≤ 0) werden ignoriert; der Prompt
    /// bleibt offen. Liegt der neue Punkt innerhalb der Snap-Toleranz zum
    /// Startvertex, wird statt des Anhängens finalisiert.
    pub fn submit_distance(
        &mut self,
        meters: f64,
        measure: &dyn DistanceMeasure,
        renderer: &mut dyn DrawRenderer,
    ) -> SessionEffect {
        if self.phase != DrawPhase::AwaitingDistance {
            log::debug!("Distanz-Eingabe außerhalb der Distanz-Phase ignoriert");
            return SessionEffect::None;
        }
        if !meters.is_finite() || meters <= 0.0 {
            log::debug!("Ungültige Distanz ignoriert: {meters}");
            return SessionEffect::None;
        }
        let Some(segment_bearing) = self.last_bearing else {
            return SessionEffect::None;
        };
        let Some(&last) = self.vertices.last() else {
            return SessionEffect::None;
        };

        let new_point = destination_point(last, segment_bearing, meters);

        // Snap auf den Startvertex schließt das Polygon automatisch,
        // ohne den berechneten Punkt noch anzuhängen
        if self.vertices.len() >= 2
            && measure.distance(new_point, self.vertices[0]) <= self.options.snap_tolerance_m
        {
            return self.finish_snapped(measure, renderer);
        }

        self.vertices.push(new_point);
        self.push_label(
            DistanceLabel {
                start: last,
                end: new_point,
                distance_m: meters,
                bearing_deg: segment_bearing,
            },
            renderer,
        );
        self.sync_active_polyline(renderer);

        // Snap-Marker wieder anlegen, falls er durch Löschen verschwunden war
        if self.vertices.len() >= 2 && self.snap_marker.is_none() {
            self.snap_marker =
                Some(renderer.add_marker(self.vertices[0], &self.options.snap_marker_style));
        }

        self.phase = DrawPhase::Orthogonal;
        SessionEffect::PromptClosed
    }

    /// Löscht den letzten Vertex samt zugehörigem Label.
    ///
    /// Phase und letzte Peilung werden aus der verkürzten Vertex-Liste neu
    /// bestimmt; unter 2 Vertices verschwindet der Snap-Marker.
    pub fn delete_last_vertex(&mut self, renderer: &mut dyn DrawRenderer) -> SessionEffect {
        if self.vertices.is_empty() {
            return SessionEffect::None;
        }
        self.vertices.pop();
        self.pop_label(renderer);

        if self.vertices.len() < 2
            && let Some(handle) = self.snap_marker.take()
        {
            renderer.remove(handle);
        }

        self.clear_previews(renderer);
        let effect = if self.phase == DrawPhase::AwaitingDistance {
            SessionEffect::PromptClosed
        } else {
            SessionEffect::None
        };

        match self.vertices.len() {
            0 => {
                self.phase = DrawPhase::Waiting;
                self.last_bearing = None;
            }
            1 => {
                self.phase = DrawPhase::AwaitingDirection;
                self.last_bearing = None;
            }
            n => {
                self.phase = DrawPhase::Orthogonal;
                self.last_bearing = Some(bearing(self.vertices[n - 2], self.vertices[n - 1]));
            }
        }
        self.sync_active_polyline(renderer);
        effect
    }

    // ── Previews ────────────────────────────────────────────────

    /// Ein Strahl vom letzten Vertex in Richtung Mauszeiger (feste Länge).
    fn show_direction_preview(&mut self, renderer: &mut dyn DrawRenderer) {
        self.clear_previews(renderer);
        let (Some(&last), Some(mouse)) = (self.vertices.last(), self.mouse_position) else {
            return;
        };
        if mouse == last {
            // Zeiger exakt auf dem Vertex — keine definierte Richtung
            return;
        }
        let ray = bearing(last, mouse);
        let tip = destination_point(last, ray, self.options.preview_length_m);
        self.preview_line = Some(renderer.add_polyline(&[last, tip], &self.options.preview_style));
    }

    /// Beide 90°-Kandidatenstrahlen, unabhängig von der Zeigerposition.
    fn show_orthogonal_previews(&mut self, renderer: &mut dyn DrawRenderer) {
        self.clear_previews(renderer);
        let (Some(&last), Some(prev_bearing)) = (self.vertices.last(), self.last_bearing) else {
            return;
        };
        let left_tip = destination_point(
            last,
            normalize_bearing(prev_bearing - 90.0),
            self.options.preview_length_m,
        );
        let right_tip = destination_point(
            last,
            normalize_bearing(prev_bearing + 90.0),
            self.options.preview_length_m,
        );
        self.left_preview_line =
            Some(renderer.add_polyline(&[last, left_tip], &self.options.left_preview_style));
        self.right_preview_line =
            Some(renderer.add_polyline(&[last, right_tip], &self.options.right_preview_style));
    }

    /// Prompt öffnen: Previews räumen, Polyline abgleichen, Effekt melden.
    fn open_distance_prompt(
        &mut self,
        at: GeoPoint,
        renderer: &mut dyn DrawRenderer,
    ) -> SessionEffect {
        self.clear_previews(renderer);
        self.sync_active_polyline(renderer);
        SessionEffect::PromptOpened {
            at,
            can_finish: self.vertices.len() >= 3,
        }
    }
}
