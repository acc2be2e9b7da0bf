//! DrawIntent- und DrawEvent-Typen plus Subscription-Bus.
//!
//! Intents sind Eingaben aus der Host-Eingabeschicht ohne eigene
//! Mutationslogik; Events sind die vom Engine emittierten Signale.

mod bus;
mod event;
mod intent;

pub use bus::{EventBus, SubscriptionId};
pub use event::{DrawEvent, DrawEventKind};
pub use intent::DrawIntent;
