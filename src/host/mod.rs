//! Host-Schnittstellen: Distanzmessung und Rendering.
//!
//! Der Engine-Kern kennt keine Karten-Bibliothek. Alles Sichtbare läuft über
//! [`DrawRenderer`], alle Distanzvergleiche über [`DistanceMeasure`] —
//! der Host implementiert beide gegen seine Karten-API.

use crate::core::{DistanceLabel, GeoPoint, haversine_distance};

/// Distanzmessung zwischen zwei geografischen Punkten in Metern.
///
/// Wird für die Snap-Toleranz-Prüfung und den Vergleich der beiden
/// Schließ-Kandidaten verwendet. Hosts mit eigener Projektion (z.B.
/// planare Karten-Distanz) implementieren den Trait selbst.
pub trait DistanceMeasure {
    /// Distanz zwischen `a` und `b` in Metern.
    fn distance(&self, a: GeoPoint, b: GeoPoint) -> f64;
}

/// Standard-Messung auf der Kugel (Haversine).
#[derive(Debug, Clone, Copy, Default)]
pub struct SphericalMeasure;

impl DistanceMeasure for SphericalMeasure {
    fn distance(&self, a: GeoPoint, b: GeoPoint) -> f64 {
        haversine_distance(a, b)
    }
}

/// Opakes Handle auf ein vom Host erzeugtes Render-Objekt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RenderHandle(pub u64);

/// Rendering-Schnittstelle für die temporären Zeichen-Artefakte.
///
/// Alle Handles gehören exklusiv der aktiven Session und werden auf jedem
/// Exit-Pfad (Finalisierung, Abbruch, Ersetzung durch neuere Preview)
/// wieder freigegeben. Style-Tokens sind für den Kern opak und kommen aus
/// [`DrawOptions`](crate::shared::DrawOptions).
pub trait DrawRenderer {
    /// Erzeugt eine Polyline aus einer geordneten Punktfolge.
    fn add_polyline(&mut self, points: &[GeoPoint], style: &str) -> RenderHandle;

    /// Ersetzt die Punktfolge einer bestehenden Polyline.
    fn update_polyline(&mut self, handle: RenderHandle, points: &[GeoPoint]);

    /// Erzeugt einen Punkt-Marker (z.B. Start-Snap-Marker).
    fn add_marker(&mut self, at: GeoPoint, style: &str) -> RenderHandle;

    /// Erzeugt ein Distanz-Label aus seiner Beschreibung.
    fn add_label(&mut self, label: &DistanceLabel, style: &str) -> RenderHandle;

    /// Entfernt ein einzelnes Render-Objekt.
    fn remove(&mut self, handle: RenderHandle);

    /// Entfernt alle Objekte der Zeichen-Gruppe (Session-Teardown).
    fn remove_all(&mut self);
}
