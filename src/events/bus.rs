use super::{DrawEvent, DrawEventKind};

/// Handle auf eine registrierte Subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Subscription-Registry für [`DrawEvent`]s.
///
/// Einfacher Zustandshalter ohne Vererbung: Callbacks werden pro Event-Art
/// registriert und bei `emit` synchron in Registrierungsreihenfolge
/// aufgerufen.
#[derive(Default)]
pub struct EventBus {
    next_id: u64,
    subscribers: Vec<Subscriber>,
}

struct Subscriber {
    id: SubscriptionId,
    kind: DrawEventKind,
    callback: Box<dyn Fn(&DrawEvent)>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registriert einen Callback für eine Event-Art.
    pub fn subscribe(
        &mut self,
        kind: DrawEventKind,
        callback: impl Fn(&DrawEvent) + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push(Subscriber {
            id,
            kind,
            callback: Box::new(callback),
        });
        id
    }

    /// Entfernt eine Subscription. Gibt `false` zurück wenn unbekannt.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|s| s.id != id);
        self.subscribers.len() != before
    }

    /// Liefert das Event synchron an alle passenden Subscriber aus.
    pub fn emit(&self, event: &DrawEvent) {
        let kind = event.kind();
        for sub in self.subscribers.iter().filter(|s| s.kind == kind) {
            (sub.callback)(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_subscriber_receives_only_matching_kind() {
        let mut bus = EventBus::new();
        let received = Rc::new(RefCell::new(Vec::new()));

        let sink = Rc::clone(&received);
        bus.subscribe(DrawEventKind::Enabled, move |e| {
            sink.borrow_mut().push(e.clone());
        });

        bus.emit(&DrawEvent::Enabled);
        bus.emit(&DrawEvent::Disabled);

        assert_eq!(received.borrow().len(), 1);
        assert_eq!(received.borrow()[0], DrawEvent::Enabled);
    }

    #[test]
    fn test_unsubscribe_stops_delivery() {
        let mut bus = EventBus::new();
        let count = Rc::new(RefCell::new(0));

        let sink = Rc::clone(&count);
        let id = bus.subscribe(DrawEventKind::Disabled, move |_| {
            *sink.borrow_mut() += 1;
        });

        bus.emit(&DrawEvent::Disabled);
        assert!(bus.unsubscribe(id));
        bus.emit(&DrawEvent::Disabled);

        assert_eq!(*count.borrow(), 1);
        // Doppeltes Unsubscribe ist ein No-op
        assert!(!bus.unsubscribe(id));
    }

    #[test]
    fn test_multiple_subscribers_same_kind() {
        let mut bus = EventBus::new();
        let count = Rc::new(RefCell::new(0));

        for _ in 0..3 {
            let sink = Rc::clone(&count);
            bus.subscribe(DrawEventKind::Enabled, move |_| {
                *sink.borrow_mut() += 1;
            });
        }

        bus.emit(&DrawEvent::Enabled);
        assert_eq!(*count.borrow(), 3);
    }
}
