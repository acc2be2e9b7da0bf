//! Core-Domänentypen und Geodäsie.
//!
//! Dieses Modul definiert die geometrische Basis des Zeichen-Engines:
//! - GeoPoint: geografische Koordinate in Grad
//! - DistanceLabel: Distanz-Label-Beschreibung an einem Segment
//! - geodesy: reine sphärische Geodäsie-Funktionen

pub mod geo;
pub mod geodesy;

pub use geo::{DistanceLabel, GeoPoint};
pub use geodesy::{
    EARTH_RADIUS_M, angle_difference, bearing, destination_point, haversine_distance,
    intersect_paths, normalize_bearing,
};
