//! Zentrale Konfiguration des Zeichen-Engines.
//!
//! `DrawOptions` enthält alle beim Erstellen des Handlers festgelegten
//! Werte. Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Geometrie ───────────────────────────────────────────────────────

/// Snap-Toleranz in Metern: berechnete Punkte innerhalb dieser Distanz zum
/// Startvertex lösen die automatische Finalisierung aus.
pub const SNAP_TOLERANCE_M: f64 = 10.0;
/// Länge der Vorschau-Strahlen in Metern.
pub const PREVIEW_LENGTH_M: f64 = 50.0;

// ── Style-Tokens ────────────────────────────────────────────────────
// Opak für den Kern; der Host-Renderer übersetzt sie in konkrete Styles.

/// Token für die aktive (unfertige) Polyline.
pub const STYLE_ACTIVE_POLYLINE: &str = "ortho-active-polyline";
/// Token für das fertige Polygon.
pub const STYLE_POLYGON: &str = "ortho-polygon";
/// Token für den Richtungs-Vorschaustrahl.
pub const STYLE_PREVIEW: &str = "ortho-preview";
/// Token für den linken Orthogonal-Vorschaustrahl.
pub const STYLE_PREVIEW_LEFT: &str = "ortho-preview-left";
/// Token für den rechten Orthogonal-Vorschaustrahl.
pub const STYLE_PREVIEW_RIGHT: &str = "ortho-preview-right";
/// Token für den Start-Snap-Marker.
pub const STYLE_SNAP_MARKER: &str = "ortho-snap-marker";
/// Token für Distanz-Labels.
pub const STYLE_DISTANCE_LABEL: &str = "ortho-distance-label";

// ── Optionen (serialisierbar) ───────────────────────────────────────

/// Unveränderliche Zeichen-Konfiguration.
/// Wird dem Handler beim Erstellen übergeben; optional als TOML ladbar.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DrawOptions {
    // ── Geometrie ───────────────────────────────────────────────
    /// Snap-Toleranz in Metern (Host-Messung via `DistanceMeasure`)
    pub snap_tolerance_m: f64,
    /// Länge der Vorschau-Strahlen in Metern
    pub preview_length_m: f64,

    // ── Styles ──────────────────────────────────────────────────
    /// Style-Token der aktiven Polyline
    pub polyline_style: String,
    /// Style-Token des fertigen Polygons (vom Host beim Materialisieren verwendet)
    pub polygon_style: String,
    /// Style-Token des Richtungs-Vorschaustrahls
    pub preview_style: String,
    /// Style-Token des linken Orthogonal-Vorschaustrahls
    pub left_preview_style: String,
    /// Style-Token des rechten Orthogonal-Vorschaustrahls
    pub right_preview_style: String,
    /// Style-Token des Start-Snap-Markers
    pub snap_marker_style: String,
    /// Style-Token der Distanz-Labels
    pub label_style: String,
}

impl Default for DrawOptions {
    fn default() -> Self {
        Self {
            snap_tolerance_m: SNAP_TOLERANCE_M,
            preview_length_m: PREVIEW_LENGTH_M,
            polyline_style: STYLE_ACTIVE_POLYLINE.to_string(),
            polygon_style: STYLE_POLYGON.to_string(),
            preview_style: STYLE_PREVIEW.to_string(),
            left_preview_style: STYLE_PREVIEW_LEFT.to_string(),
            right_preview_style: STYLE_PREVIEW_RIGHT.to_string(),
            snap_marker_style: STYLE_SNAP_MARKER.to_string(),
            label_style: STYLE_DISTANCE_LABEL.to_string(),
        }
    }
}

impl DrawOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Zeichen-Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Zeichen-Optionen gespeichert nach: {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_consts() {
        let opts = DrawOptions::default();
        assert_eq!(opts.snap_tolerance_m, SNAP_TOLERANCE_M);
        assert_eq!(opts.preview_length_m, PREVIEW_LENGTH_M);
        assert_eq!(opts.snap_marker_style, STYLE_SNAP_MARKER);
    }

    #[test]
    fn test_toml_round_trip() {
        let mut opts = DrawOptions::default();
        opts.snap_tolerance_m = 25.0;
        opts.preview_style = "custom-preview".to_string();

        let toml_str = toml::to_string_pretty(&opts).expect("Serialisierung erwartet");
        let restored: DrawOptions = toml::from_str(&toml_str).expect("Deserialisierung erwartet");
        assert_eq!(restored, opts);
    }
}
