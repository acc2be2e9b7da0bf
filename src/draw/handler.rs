//! Handler für das orthogonale Polygon-Zeichnen.
//!
//! Besitzt die aktive [`DrawingSession`], verteilt eingehende
//! [`DrawIntent`]s auf die Session-Übergänge und übersetzt deren
//! [`SessionEffect`]s in [`DrawEvent`]s auf dem Bus.

use super::session::DrawingSession;
use super::SessionEffect;
use crate::events::{DrawEvent, DrawIntent, EventBus};
use crate::host::{DistanceMeasure, DrawRenderer};
use crate::shared::DrawOptions;

/// Zeichen-Handler: eine Session pro Aktivierung.
pub struct OrthoDrawHandler {
    options: DrawOptions,
    bus: EventBus,
    session: Option<DrawingSession>,
}

impl OrthoDrawHandler {
    /// Erstellt einen Handler mit der übergebenen Konfiguration.
    pub fn new(options: DrawOptions) -> Self {
        Self {
            options,
            bus: EventBus::new(),
            session: None,
        }
    }

    /// Event-Bus für Subscribe/Unsubscribe.
    pub fn events_mut(&mut self) -> &mut EventBus {
        &mut self.bus
    }

    /// Aktive Konfiguration.
    pub fn options(&self) -> &DrawOptions {
        &self.options
    }

    /// `true` solange eine Session existiert.
    pub fn enabled(&self) -> bool {
        self.session.is_some()
    }

    /// Lesezugriff auf die laufende Session (z.B. für Status-Anzeigen).
    pub fn session(&self) -> Option<&DrawingSession> {
        self.session.as_ref()
    }

    /// Aktiviert den Zeichenmodus mit einer frischen Session.
    ///
    /// Eine eventuell laufende Session wird vorher abgeräumt.
    pub fn enable(&mut self, renderer: &mut dyn DrawRenderer) {
        if let Some(mut old) = self.session.take() {
            old.teardown(renderer);
        }
        self.session = Some(DrawingSession::new(self.options.clone()));
        log::info!("Ortho-Zeichenmodus aktiviert");
        self.bus.emit(&DrawEvent::Enabled);
    }

    /// Deaktiviert den Zeichenmodus und verwirft die Session.
    ///
    /// Nach der Rückkehr hält die Session keine Render-Handles mehr;
    /// später eintreffende Eingaben wirken nicht.
    pub fn disable(&mut self, renderer: &mut dyn DrawRenderer) {
        let Some(mut session) = self.session.take() else {
            return;
        };
        session.teardown(renderer);
        log::info!("Ortho-Zeichenmodus deaktiviert");
        self.bus.emit(&DrawEvent::Disabled);
    }

    /// Verarbeitet einen Intent aus der Host-Eingabeschicht.
    ///
    /// Ohne aktive Session wirken Intents nicht.
    pub fn handle_intent(
        &mut self,
        intent: DrawIntent,
        measure: &dyn DistanceMeasure,
        renderer: &mut dyn DrawRenderer,
    ) {
        if self.session.is_none() {
            return;
        }
        if intent == DrawIntent::CancelRequested {
            self.disable(renderer);
            return;
        }

        let effect = {
            // Session existiert (oben geprüft)
            let Some(session) = self.session.as_mut() else {
                return;
            };
            match intent {
                DrawIntent::MapClicked { point } => session.on_map_click(point, renderer),
                DrawIntent::MouseMoved { point } => {
                    session.on_mouse_move(point, renderer);
                    SessionEffect::None
                }
                DrawIntent::DistanceSubmitted { meters } => {
                    session.submit_distance(meters, measure, renderer)
                }
                DrawIntent::SnapMarkerClicked | DrawIntent::FinishRequested => {
                    session.finish(measure, renderer)
                }
                DrawIntent::DeleteLastVertexRequested => session.delete_last_vertex(renderer),
                DrawIntent::CancelRequested => SessionEffect::None,
            }
        };

        self.apply_effect(effect);
    }

    /// Übersetzt einen Session-Effekt in Bus-Events.
    fn apply_effect(&mut self, effect: SessionEffect) {
        match effect {
            SessionEffect::None => {}
            SessionEffect::PromptOpened { at, can_finish } => {
                self.bus
                    .emit(&DrawEvent::DistancePromptRequested { at, can_finish });
            }
            SessionEffect::PromptClosed => {
                self.bus.emit(&DrawEvent::DistancePromptClosed);
            }
            SessionEffect::Completed { vertices, labels } => {
                log::info!("Polygon fertiggestellt: {} Vertices", vertices.len());
                self.bus.emit(&DrawEvent::PolygonCreated { vertices, labels });
                self.session = None;
                self.bus.emit(&DrawEvent::Disabled);
            }
            SessionEffect::Discarded => {
                self.session = None;
                self.bus.emit(&DrawEvent::Disabled);
            }
        }
    }
}
