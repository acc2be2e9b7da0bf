//! Ortho Draw Engine.
//! Interaktives Zeichnen orthogonaler Polygone auf Karten: sphärische
//! Geodäsie, Phasen-Zustandsmaschine und Event-Schnittstelle zum Host.

pub mod coord;
pub mod core;
pub mod draw;
pub mod events;
pub mod host;
pub mod shared;

pub use coord::{CoordDisplay, Projection};
pub use core::{
    DistanceLabel, GeoPoint, angle_difference, bearing, destination_point, haversine_distance,
    intersect_paths, normalize_bearing,
};
pub use draw::{DrawPhase, DrawingSession, OrthoDrawHandler, SessionEffect};
pub use events::{DrawEvent, DrawEventKind, DrawIntent, EventBus, SubscriptionId};
pub use host::{DistanceMeasure, DrawRenderer, RenderHandle, SphericalMeasure};
pub use shared::DrawOptions;
