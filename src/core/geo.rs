//! Geografische Wertetypen: `GeoPoint` und `DistanceLabel`.

use serde::{Deserialize, Serialize};

/// Geografische Koordinate in Grad (WGS84-Breite/-Länge).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Breitengrad in Grad (positiv = Nord)
    pub lat: f64,
    /// Längengrad in Grad (positiv = Ost)
    pub lng: f64,
}

impl GeoPoint {
    /// Erstellt einen neuen `GeoPoint` aus Breite/Länge in Grad.
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Arithmetischer Mittelpunkt zweier Koordinaten.
    ///
    /// Für Label-Platzierung ausreichend — bei den kurzen Segmenten eines
    /// gezeichneten Polygons ist der Fehler gegenüber dem echten
    /// Großkreis-Mittelpunkt vernachlässigbar.
    pub fn midpoint(self, other: GeoPoint) -> GeoPoint {
        GeoPoint::new((self.lat + other.lat) / 2.0, (self.lng + other.lng) / 2.0)
    }
}

/// Beschreibung eines Distanz-Labels an einem Polygon-Segment.
///
/// Reine Daten — der Host materialisiert daraus einen Marker.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceLabel {
    /// Segment-Startpunkt
    pub start: GeoPoint,
    /// Segment-Endpunkt
    pub end: GeoPoint,
    /// Segmentlänge in Metern
    pub distance_m: f64,
    /// Segment-Peilung in Grad [0, 360)
    pub bearing_deg: f64,
}

impl DistanceLabel {
    /// Ankerpunkt des Labels (Segment-Mittelpunkt).
    pub fn anchor(&self) -> GeoPoint {
        self.start.midpoint(self.end)
    }

    /// Rotationswinkel des Label-Texts in Grad.
    ///
    /// Der Text läuft parallel zum Segment; bei Peilungen zwischen 90° und
    /// 270° wird um 180° gedreht, damit er nie auf dem Kopf steht.
    pub fn rotation_deg(&self) -> f64 {
        let mut angle = self.bearing_deg - 90.0;
        if self.bearing_deg > 90.0 && self.bearing_deg < 270.0 {
            angle += 180.0;
        }
        angle
    }

    /// Anzeigetext des Labels.
    pub fn text(&self) -> String {
        format!("{:.2} m", self.distance_m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_midpoint() {
        let mid = GeoPoint::new(0.0, 0.0).midpoint(GeoPoint::new(2.0, 4.0));
        assert_eq!(mid, GeoPoint::new(1.0, 2.0));
    }

    #[test]
    fn test_label_rotation_upright() {
        let label = DistanceLabel {
            start: GeoPoint::new(0.0, 0.0),
            end: GeoPoint::new(0.0, 0.001),
            distance_m: 111.0,
            bearing_deg: 90.0,
        };
        // Ost-Segment: Text horizontal
        assert_eq!(label.rotation_deg(), 0.0);
    }

    #[test]
    fn test_label_rotation_flipped_for_southward_bearing() {
        let label = DistanceLabel {
            start: GeoPoint::new(0.001, 0.0),
            end: GeoPoint::new(0.0, 0.0),
            distance_m: 111.0,
            bearing_deg: 180.0,
        };
        // Süd-Segment: um 180° gedreht, damit der Text lesbar bleibt
        assert_eq!(label.rotation_deg(), 270.0);
    }

    #[test]
    fn test_label_text_two_decimals() {
        let label = DistanceLabel {
            start: GeoPoint::new(0.0, 0.0),
            end: GeoPoint::new(0.0, 0.001),
            distance_m: 123.456,
            bearing_deg: 90.0,
        };
        assert_eq!(label.text(), "123.46 m");
    }
}
