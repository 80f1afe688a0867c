//! Notification bus with scoped subscriptions
//!
//! Stands in for the host editor's observer registry. Subscribing returns a
//! [`Subscription`] guard; dropping the guard unsubscribes, so a subscriber
//! can never outlive its own teardown.

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use tracing::{debug, trace, warn};

use super::events::{EventKind, HostEvent};

pub type Handler = Rc<RefCell<dyn FnMut(&HostEvent<'_>)>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

struct Entry {
    id: SubscriptionId,
    kind: EventKind,
    handler: Handler,
}

#[derive(Default)]
struct Registry {
    next_id: u64,
    entries: Vec<Entry>,
}

impl Registry {
    fn is_subscribed(&self, id: SubscriptionId) -> bool {
        self.entries.iter().any(|entry| entry.id == id)
    }
}

/// Single-threaded publish/subscribe channel for [`HostEvent`]s
#[derive(Clone, Default)]
pub struct NotificationBus {
    registry: Rc<RefCell<Registry>>,
}

impl NotificationBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&self, kind: EventKind, handler: F) -> Subscription
    where
        F: FnMut(&HostEvent<'_>) + 'static,
    {
        let mut registry = self.registry.borrow_mut();
        let id = SubscriptionId(registry.next_id);
        registry.next_id += 1;
        registry.entries.push(Entry {
            id,
            kind,
            handler: Rc::new(RefCell::new(handler)),
        });
        trace!("Subscribed {:?} to {:?}", id, kind);

        Subscription {
            id,
            kind,
            registry: Rc::downgrade(&self.registry),
        }
    }

    /// Deliver `event` to every subscriber of its kind.
    ///
    /// Handlers may subscribe or unsubscribe while the event is dispatched;
    /// a handler removed mid-dispatch is not called. Returns the number of
    /// handlers that ran.
    pub fn publish(&self, event: &HostEvent<'_>) -> usize {
        let targets: Vec<(SubscriptionId, Handler)> = self
            .registry
            .borrow()
            .entries
            .iter()
            .filter(|entry| entry.kind == event.kind)
            .map(|entry| (entry.id, Rc::clone(&entry.handler)))
            .collect();

        let mut delivered = 0;
        for (id, handler) in targets {
            if !self.registry.borrow().is_subscribed(id) {
                continue;
            }
            match handler.try_borrow_mut() {
                Ok(mut handler) => {
                    (&mut *handler)(event);
                    delivered += 1;
                }
                Err(_) => warn!("Skipping re-entrant delivery of {:?} to {:?}", event.kind, id),
            }
        }
        delivered
    }

    pub fn subscriber_count(&self, kind: EventKind) -> usize {
        self.registry
            .borrow()
            .entries
            .iter()
            .filter(|entry| entry.kind == kind)
            .count()
    }
}

/// Live subscription; unsubscribes when dropped
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    id: SubscriptionId,
    kind: EventKind,
    registry: Weak<RefCell<Registry>>,
}

impl Subscription {
    pub fn id(&self) -> SubscriptionId {
        self.id
    }

    pub fn kind(&self) -> EventKind {
        self.kind
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let Some(registry) = self.registry.upgrade() else {
            return;
        };
        // Drop the handler after releasing the borrow; its captures may
        // own further subscriptions.
        let removed = {
            let mut registry = registry.borrow_mut();
            let index = registry.entries.iter().position(|entry| entry.id == self.id);
            index.map(|index| registry.entries.remove(index))
        };
        if removed.is_some() {
            debug!("Unsubscribed {:?} from {:?}", self.id, self.kind);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::systems::events::ViewId;
    use std::cell::Cell;

    #[test]
    fn delivers_only_matching_kind() {
        let bus = NotificationBus::new();
        let hits = Rc::new(Cell::new(0));
        let counter = Rc::clone(&hits);
        let _sub = bus.subscribe(EventKind::PointerUp, move |_| counter.set(counter.get() + 1));

        assert_eq!(bus.publish(&HostEvent::new(EventKind::PointerUp, ViewId(1))), 1);
        assert_eq!(bus.publish(&HostEvent::new(EventKind::KeyPress, ViewId(1))), 0);
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn dropping_subscription_unsubscribes() {
        let bus = NotificationBus::new();
        let sub = bus.subscribe(EventKind::KeyPress, |_| {});
        assert_eq!(bus.subscriber_count(EventKind::KeyPress), 1);

        drop(sub);
        assert_eq!(bus.subscriber_count(EventKind::KeyPress), 0);
        assert_eq!(bus.publish(&HostEvent::new(EventKind::KeyPress, ViewId(1))), 0);
    }

    #[test]
    fn subscription_outliving_bus_is_harmless() {
        let bus = NotificationBus::new();
        let sub = bus.subscribe(EventKind::KeyPress, |_| {});
        drop(bus);
        drop(sub);
    }

    #[test]
    fn handler_unsubscribed_mid_dispatch_is_skipped() {
        let bus = NotificationBus::new();
        let second_ran = Rc::new(Cell::new(false));
        let slot: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));

        let victim = Rc::clone(&slot);
        let _first = bus.subscribe(EventKind::ViewClosed, move |_| {
            victim.borrow_mut().take();
        });
        let flag = Rc::clone(&second_ran);
        *slot.borrow_mut() = Some(bus.subscribe(EventKind::ViewClosed, move |_| flag.set(true)));

        assert_eq!(bus.publish(&HostEvent::view_closed(ViewId(3))), 1);
        assert!(!second_ran.get());
        assert_eq!(bus.subscriber_count(EventKind::ViewClosed), 1);
    }

    #[test]
    fn handler_may_subscribe_during_dispatch() {
        let bus = NotificationBus::new();
        let created: Rc<RefCell<Vec<Subscription>>> = Rc::new(RefCell::new(Vec::new()));

        let inner_bus = bus.clone();
        let store = Rc::clone(&created);
        let _sub = bus.subscribe(EventKind::ViewOpened, move |_| {
            store
                .borrow_mut()
                .push(inner_bus.subscribe(EventKind::PointerDrag, |_| {}));
        });

        bus.publish(&HostEvent::view_opened(ViewId(1)));
        assert_eq!(bus.subscriber_count(EventKind::PointerDrag), 1);
    }
}
