//! Sphärische Geodäsie: Peilung, Zielpunkt, Winkeldifferenz,
//! Großkreis-Schnittpunkt.
//!
//! Alle öffentlichen Ein- und Ausgaben in Grad, intern wird in Radiant
//! gerechnet. Alle Funktionen sind frei von Seiteneffekten; nur
//! [`intersect_paths`] kennt ein definiertes "kein Ergebnis" (`None`).

use super::GeoPoint;
use std::f64::consts::{PI, TAU};

/// Mittlerer Erdradius in Metern (Kugelmodell).
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Normalisiert eine Peilung auf [0, 360).
pub fn normalize_bearing(deg: f64) -> f64 {
    ((deg % 360.0) + 360.0) % 360.0
}

/// Anfangspeilung des Großkreises von `p1` nach `p2` in Grad [0, 360).
///
/// Für `p1 == p2` (Pfad der Länge null) ist das Ergebnis nicht definiert.
pub fn bearing(p1: GeoPoint, p2: GeoPoint) -> f64 {
    let phi1 = p1.lat.to_radians();
    let phi2 = p2.lat.to_radians();
    let dlam = (p2.lng - p1.lng).to_radians();

    let y = dlam.sin() * phi2.cos();
    let x = phi1.cos() * phi2.sin() - phi1.sin() * phi2.cos() * dlam.cos();
    normalize_bearing(y.atan2(x).to_degrees())
}

/// Zielpunkt vom `origin` aus entlang `bearing_deg` nach `distance_m` Metern
/// (direktes geodätisches Problem auf der Kugel).
///
/// `distance_m == 0` liefert den Ursprung (bis auf Gleitkomma-Rundung).
pub fn destination_point(origin: GeoPoint, bearing_deg: f64, distance_m: f64) -> GeoPoint {
    let delta = distance_m / EARTH_RADIUS_M;
    let theta = bearing_deg.to_radians();
    let phi1 = origin.lat.to_radians();
    let lam1 = origin.lng.to_radians();

    let phi2 = (phi1.sin() * delta.cos() + phi1.cos() * delta.sin() * theta.cos()).asin();
    let lam2 = lam1
        + (theta.sin() * delta.sin() * phi1.cos()).atan2(delta.cos() - phi1.sin() * phi2.sin());

    GeoPoint::new(phi2.to_degrees(), lam2.to_degrees())
}

/// Vorzeichenbehaftete kürzeste Winkeldifferenz `a1 − a2` in [-180, 180].
pub fn angle_difference(a1: f64, a2: f64) -> f64 {
    let mut diff = a1 - a2;
    while diff > 180.0 {
        diff -= 360.0;
    }
    while diff < -180.0 {
        diff += 360.0;
    }
    diff
}

/// Sphärische Haversine-Distanz zwischen zwei Punkten in Metern.
///
/// Standard-Messung, wenn der Host keine eigene Projektion mitbringt.
pub fn haversine_distance(a: GeoPoint, b: GeoPoint) -> f64 {
    let phi1 = a.lat.to_radians();
    let phi2 = b.lat.to_radians();
    let dphi = (b.lat - a.lat).to_radians();
    let dlam = (b.lng - a.lng).to_radians();

    let h = (dphi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (dlam / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_M * h.sqrt().asin()
}

/// Schnittpunkt zweier Großkreis-Pfade, jeweils definiert durch Startpunkt
/// und Anfangspeilung.
///
/// `None` wenn die Startpunkte zusammenfallen, die Pfade parallel bzw.
/// antiparallel verlaufen (beide Richtungs-Sinus null) oder divergieren
/// (Richtungs-Sinus mit entgegengesetztem Vorzeichen). Die Länge des
/// Ergebnisses wird auf 8 Nachkommastellen (Radiant) gerundet, um
/// trigonometrisches Rundungsrauschen zu unterdrücken.
pub fn intersect_paths(
    p1: GeoPoint,
    bearing1: f64,
    p2: GeoPoint,
    bearing2: f64,
) -> Option<GeoPoint> {
    let phi1 = p1.lat.to_radians();
    let lam1 = p1.lng.to_radians();
    let phi2 = p2.lat.to_radians();
    let lam2 = p2.lng.to_radians();
    let theta13 = bearing1.to_radians();
    let theta23 = bearing2.to_radians();
    let dphi = phi2 - phi1;
    let dlam = lam2 - lam1;

    // Winkeldistanz p1 → p2
    let delta12 = 2.0
        * ((dphi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (dlam / 2.0).sin().powi(2))
            .sqrt()
            .asin();
    if delta12 == 0.0 {
        return None;
    }

    // Anfangs-/Endpeilung der Verbindungslinie p1 → p2
    let mut theta_a =
        ((phi2.sin() - phi1.sin() * delta12.cos()) / (delta12.sin() * phi1.cos())).acos();
    if theta_a.is_nan() {
        // Rundungsartefakt bei kollinearen Punkten
        theta_a = 0.0;
    }
    let theta_b =
        ((phi1.sin() - phi2.sin() * delta12.cos()) / (delta12.sin() * phi2.cos())).acos();

    let theta12 = if (lam2 - lam1).sin() > 0.0 {
        theta_a
    } else {
        TAU - theta_a
    };
    let theta21 = if (lam2 - lam1).sin() > 0.0 {
        TAU - theta_b
    } else {
        theta_b
    };

    // Innenwinkel an p1 und p2
    let alpha1 = ((theta13 - theta12 + PI) % TAU) - PI;
    let alpha2 = ((theta21 - theta23 + PI) % TAU) - PI;

    if alpha1.sin() == 0.0 && alpha2.sin() == 0.0 {
        return None;
    }
    if alpha1.sin() * alpha2.sin() < 0.0 {
        return None;
    }

    let alpha3 =
        (-alpha1.cos() * alpha2.cos() + alpha1.sin() * alpha2.sin() * delta12.cos()).acos();
    let delta13 = (delta12.sin() * alpha1.sin() * alpha2.sin())
        .atan2(alpha2.cos() + alpha1.cos() * alpha3.cos());
    let phi3 = (phi1.sin() * delta13.cos() + phi1.cos() * delta13.sin() * theta13.cos()).asin();
    let dlam13 = (theta13.sin() * delta13.sin() * phi1.cos())
        .atan2(delta13.cos() - phi1.sin() * phi3.sin());

    let lam3 = ((lam1 + dlam13) * 1e8).round() / 1e8;

    Some(GeoPoint::new(phi3.to_degrees(), lam3.to_degrees()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn assert_close(a: f64, b: f64, eps: f64) {
        let diff = (a - b).abs();
        assert!(diff <= eps, "expected {a} ~= {b} (diff {diff})");
    }

    #[test]
    fn test_bearing_cardinal_directions() {
        let origin = GeoPoint::new(0.0, 0.0);
        assert_close(bearing(origin, GeoPoint::new(1.0, 0.0)), 0.0, 1e-9);
        assert_close(bearing(origin, GeoPoint::new(0.0, 1.0)), 90.0, 1e-9);
        assert_close(bearing(origin, GeoPoint::new(-1.0, 0.0)), 180.0, 1e-9);
        assert_close(bearing(origin, GeoPoint::new(0.0, -1.0)), 270.0, 1e-9);
    }

    #[test]
    fn test_bearing_range_for_distinct_points() {
        let p1 = GeoPoint::new(48.137, 11.575);
        for (lat, lng) in [(52.52, 13.405), (40.71, -74.0), (-33.87, 151.21)] {
            let b = bearing(p1, GeoPoint::new(lat, lng));
            assert!((0.0..360.0).contains(&b), "bearing {b} out of range");
        }
    }

    #[test]
    fn test_destination_zero_distance_returns_origin() {
        let origin = GeoPoint::new(48.137, 11.575);
        let dest = destination_point(origin, 123.0, 0.0);
        assert_close(dest.lat, origin.lat, 1e-12);
        assert_close(dest.lng, origin.lng, 1e-12);
    }

    #[test]
    fn test_destination_round_trip_distance_and_bearing() {
        let origin = GeoPoint::new(48.137, 11.575);
        for b in [0.0, 45.0, 90.0, 133.7, 270.0] {
            for d in [10.0, 100.0, 5_000.0] {
                let dest = destination_point(origin, b, d);
                // Distanz auf 1 cm genau
                assert_close(haversine_distance(origin, dest), d, 0.01);
                assert_close(bearing(origin, dest), b, 1e-4);
            }
        }
    }

    #[test]
    fn test_angle_difference_properties() {
        for a in [0.0, 13.0, 90.0, 359.0] {
            assert_close(angle_difference(a, a), 0.0, 1e-12);
        }
        assert_close(angle_difference(350.0, 10.0), -20.0, 1e-12);
        assert_close(angle_difference(10.0, 350.0), 20.0, 1e-12);
        for (a1, a2) in [(10.0, 200.0), (355.0, 5.0), (90.0, 271.0)] {
            let d = angle_difference(a1, a2);
            assert!((-180.0..=180.0).contains(&d));
            assert_close(d, -angle_difference(a2, a1), 1e-12);
        }
    }

    #[test]
    fn test_intersect_coincident_start_points_is_none() {
        let p = GeoPoint::new(10.0, 20.0);
        assert!(intersect_paths(p, 0.0, p, 90.0).is_none());
    }

    #[test]
    fn test_intersect_parallel_paths_is_none() {
        // Beide Pfade laufen auf demselben Meridian nach Norden
        let p1 = GeoPoint::new(0.0, 0.0);
        let p2 = GeoPoint::new(1.0, 0.0);
        assert!(intersect_paths(p1, 0.0, p2, 0.0).is_none());
    }

    #[test]
    fn test_intersect_known_crossing() {
        // Referenzfall aus der sphärischen Navigationsliteratur
        let p1 = GeoPoint::new(51.8853, 0.2545);
        let p2 = GeoPoint::new(49.0034, 2.5735);
        let hit = intersect_paths(p1, 108.547, p2, 32.435).expect("Schnittpunkt erwartet");
        assert_relative_eq!(hit.lat, 50.9078, epsilon = 1e-3);
        assert_relative_eq!(hit.lng, 4.5084, epsilon = 1e-3);
    }

    #[test]
    fn test_intersect_returns_near_crossing_not_antipode() {
        // Westwärts von (0.0009, 0.0009) trifft den nordwärts laufenden
        // Meridian des Ursprungs bei (0.0009, 0) — nicht am Gegenpunkt
        let p1 = GeoPoint::new(0.0009, 0.0009);
        let p2 = GeoPoint::new(0.0, 0.0);
        let hit = intersect_paths(p1, 270.0, p2, 0.0).expect("Schnittpunkt erwartet");
        assert_relative_eq!(hit.lat, 0.0009, epsilon = 1e-6);
        assert_relative_eq!(hit.lng, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_intersect_orthogonal_closing_corner() {
        // Südwärts vom Nordost-Punkt trifft Ostwärts vom Ursprung nahe (0, lng)
        let last = GeoPoint::new(0.0009, 0.0009);
        let first = GeoPoint::new(0.0, 0.0);
        let hit = intersect_paths(last, 180.0, first, 90.0).expect("Schnittpunkt erwartet");
        assert_relative_eq!(hit.lat, 0.0, epsilon = 1e-6);
        assert_relative_eq!(hit.lng, 0.0009, epsilon = 1e-6);
    }
}
