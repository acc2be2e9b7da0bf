//! Koordinatenanzeige: formatiert Kartenpositionen in einer Ziel-Projektion.
//!
//! Ohne eigene Projektion werden Breite/Länge unprojiziert angezeigt; eine
//! injizierte [`Projection`] liefert stattdessen x/y im Ziel-CRS.

use glam::DVec2;

use crate::core::GeoPoint;

/// Projektion eines geographischen Punkts in ein Ziel-Koordinatensystem.
pub trait Projection {
    fn project(&self, point: GeoPoint) -> DVec2;
}

/// Benutzerdefinierter Formatter für einen einzelnen Achsenwert.
pub type AxisFormatter = Box<dyn Fn(f64) -> String>;

/// Anzeige-Konfiguration für die Koordinatenausgabe.
pub struct CoordDisplay {
    /// Text vor dem Wertepaar.
    pub prefix: String,
    /// Trenner zwischen den beiden Werten.
    pub separator: String,
    /// Platzhalter, solange keine Position vorliegt.
    pub empty_string: String,
    /// x/Länge zuerst statt y/Breite.
    pub lng_first: bool,
    /// Nachkommastellen der Standard-Rundung.
    pub num_digits: u32,
    /// Optionaler Formatter für die x-Achse (Länge).
    pub lng_formatter: Option<AxisFormatter>,
    /// Optionaler Formatter für die y-Achse (Breite).
    pub lat_formatter: Option<AxisFormatter>,
    /// Ziel-Projektion; `None` zeigt Breite/Länge unprojiziert.
    pub projection: Option<Box<dyn Projection>>,
}

impl Default for CoordDisplay {
    fn default() -> Self {
        Self {
            prefix: String::new(),
            separator: " | ".to_string(),
            empty_string: "Mouse over the map".to_string(),
            lng_first: false,
            num_digits: 5,
            lng_formatter: None,
            lat_formatter: None,
            projection: None,
        }
    }
}

impl CoordDisplay {
    /// Platzhaltertext für den Zustand ohne Zeigerposition.
    pub fn placeholder(&self) -> &str {
        &self.empty_string
    }

    /// Formatiert einen Punkt als Anzeigezeile.
    pub fn format(&self, point: GeoPoint) -> String {
        // Ohne Projektion: x = Länge, y = Breite
        let projected = match &self.projection {
            Some(projection) => projection.project(point),
            None => DVec2::new(point.lng, point.lat),
        };

        let x = match &self.lng_formatter {
            Some(f) => f(projected.x),
            None => format_num(projected.x, self.num_digits),
        };
        let y = match &self.lat_formatter {
            Some(f) => f(projected.y),
            None => format_num(projected.y, self.num_digits),
        };

        let value = if self.lng_first {
            format!("{x}{}{y}", self.separator)
        } else {
            format!("{y}{}{x}", self.separator)
        };
        if self.prefix.is_empty() {
            value
        } else {
            format!("{} {value}", self.prefix)
        }
    }
}

/// Rundet auf `digits` Nachkommastellen, ohne angehängte Nullen.
fn format_num(value: f64, digits: u32) -> String {
    let factor = 10f64.powi(digits as i32);
    ((value * factor).round() / factor).to_string()
}

// ── Tests ────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    /// Verdoppelnde Dummy-Projektion.
    struct Doubling;

    impl Projection for Doubling {
        fn project(&self, point: GeoPoint) -> DVec2 {
            DVec2::new(point.lng * 2.0, point.lat * 2.0)
        }
    }

    #[test]
    fn test_default_format_is_lat_then_lng() {
        let display = CoordDisplay::default();
        let s = display.format(GeoPoint::new(48.137154, 11.576124));
        assert_eq!(s, "48.13715 | 11.57612");
    }

    #[test]
    fn test_lng_first_swaps_axis_order() {
        let display = CoordDisplay {
            lng_first: true,
            ..Default::default()
        };
        let s = display.format(GeoPoint::new(48.0, 11.5));
        assert_eq!(s, "11.5 | 48");
    }

    #[test]
    fn test_prefix_and_custom_separator() {
        let display = CoordDisplay {
            prefix: "WGS84".to_string(),
            separator: ", ".to_string(),
            ..Default::default()
        };
        let s = display.format(GeoPoint::new(1.0, 2.0));
        assert_eq!(s, "WGS84 1, 2");
    }

    #[test]
    fn test_injected_projection_replaces_lat_lng() {
        let display = CoordDisplay {
            projection: Some(Box::new(Doubling)),
            ..Default::default()
        };
        let s = display.format(GeoPoint::new(10.0, 20.0));
        assert_eq!(s, "20 | 40");
    }

    #[test]
    fn test_axis_formatters_override_rounding() {
        let display = CoordDisplay {
            lat_formatter: Some(Box::new(|v| format!("{v:.1}°N"))),
            lng_formatter: Some(Box::new(|v| format!("{v:.1}°E"))),
            ..Default::default()
        };
        let s = display.format(GeoPoint::new(48.137154, 11.576124));
        assert_eq!(s, "48.1°N | 11.6°E");
    }

    #[test]
    fn test_placeholder_text() {
        let display = CoordDisplay::default();
        assert_eq!(display.placeholder(), "Mouse over the map");
    }
}
