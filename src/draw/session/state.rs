//! State-Definitionen und Render-Handle-Verwaltung der Zeichen-Session.

use super::super::DrawPhase;
use crate::core::{DistanceLabel, GeoPoint};
use crate::host::{DrawRenderer, RenderHandle};
use crate::shared::DrawOptions;

/// Zustand einer laufenden Polygon-Zeichnung.
///
/// Eine Session existiert pro aktiviertem Handler; sie besitzt alle
/// temporären Render-Handles exklusiv und gibt sie auf jedem Exit-Pfad
/// wieder frei.
pub struct DrawingSession {
    /// Unveränderliche Konfiguration (Snap-Toleranz, Preview-Länge, Styles)
    pub(crate) options: DrawOptions,
    /// Committete Vertices in Polygon-Randreihenfolge
    pub(crate) vertices: Vec<GeoPoint>,
    /// Distanz-Labels der committeten Segmente
    pub(crate) labels: Vec<DistanceLabel>,
    /// Render-Handles parallel zu `labels`
    pub(crate) label_handles: Vec<RenderHandle>,
    /// Aktuelle Phase
    pub(crate) phase: DrawPhase,
    /// Peilung des zuletzt committeten Segments (Grad [0, 360))
    pub(crate) last_bearing: Option<f64>,
    /// Letzte bekannte Mausposition
    pub(crate) mouse_position: Option<GeoPoint>,
    /// Handle der aktiven Polyline (ab 2 Vertices)
    pub(crate) active_polyline: Option<RenderHandle>,
    /// Handle des Start-Snap-Markers
    pub(crate) snap_marker: Option<RenderHandle>,
    /// Handle des Richtungs-Vorschaustrahls
    pub(crate) preview_line: Option<RenderHandle>,
    /// Handle des linken Orthogonal-Vorschaustrahls
    pub(crate) left_preview_line: Option<RenderHandle>,
    /// Handle des rechten Orthogonal-Vorschaustrahls
    pub(crate) right_preview_line: Option<RenderHandle>,
}

impl DrawingSession {
    /// Erstellt eine frische Session mit leerer Vertex-Liste.
    pub fn new(options: DrawOptions) -> Self {
        Self {
            options,
            vertices: Vec::new(),
            labels: Vec::new(),
            label_handles: Vec::new(),
            phase: DrawPhase::Waiting,
            last_bearing: None,
            mouse_position: None,
            active_polyline: None,
            snap_marker: None,
            preview_line: None,
            left_preview_line: None,
            right_preview_line: None,
        }
    }

    // ── Accessoren ──────────────────────────────────────────────

    /// Aktuelle Phase.
    pub fn phase(&self) -> DrawPhase {
        self.phase
    }

    /// Committete Vertices in Randreihenfolge.
    pub fn vertices(&self) -> &[GeoPoint] {
        &self.vertices
    }

    /// Distanz-Labels der committeten Segmente.
    pub fn labels(&self) -> &[DistanceLabel] {
        &self.labels
    }

    /// Peilung des zuletzt committeten Segments.
    pub fn last_bearing(&self) -> Option<f64> {
        self.last_bearing
    }

    // ── Render-Handle-Verwaltung ────────────────────────────────

    /// Entfernt alle Vorschaustrahlen.
    pub(crate) fn clear_previews(&mut self, renderer: &mut dyn DrawRenderer) {
        for handle in [
            self.preview_line.take(),
            self.left_preview_line.take(),
            self.right_preview_line.take(),
        ]
        .into_iter()
        .flatten()
        {
            renderer.remove(handle);
        }
    }

    /// Gleicht die aktive Polyline mit der Vertex-Liste ab.
    ///
    /// Ab 2 Vertices wird sie angelegt bzw. aktualisiert, darunter entfernt.
    pub(crate) fn sync_active_polyline(&mut self, renderer: &mut dyn DrawRenderer) {
        if self.vertices.len() >= 2 {
            match self.active_polyline {
                Some(handle) => renderer.update_polyline(handle, &self.vertices),
                None => {
                    self.active_polyline =
                        Some(renderer.add_polyline(&self.vertices, &self.options.polyline_style));
                }
            }
        } else if let Some(handle) = self.active_polyline.take() {
            renderer.remove(handle);
        }
    }

    /// Fügt ein Distanz-Label samt Render-Handle hinzu.
    pub(crate) fn push_label(&mut self, label: DistanceLabel, renderer: &mut dyn DrawRenderer) {
        let handle = renderer.add_label(&label, &self.options.label_style);
        self.labels.push(label);
        self.label_handles.push(handle);
    }

    /// Entfernt das letzte Distanz-Label samt Render-Handle (falls vorhanden).
    pub(crate) fn pop_label(&mut self, renderer: &mut dyn DrawRenderer) {
        if self.labels.pop().is_some()
            && let Some(handle) = self.label_handles.pop()
        {
            renderer.remove(handle);
        }
    }

    /// Gibt sämtliche Render-Handles der Session frei.
    pub(crate) fn teardown(&mut self, renderer: &mut dyn DrawRenderer) {
        renderer.remove_all();
        self.active_polyline = None;
        self.snap_marker = None;
        self.preview_line = None;
        self.left_preview_line = None;
        self.right_preview_line = None;
        self.label_handles.clear();
    }
}
