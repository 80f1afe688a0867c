//! Extension lifecycle
//!
//! Watches for glyph views opening and closing. Each opened view gets its
//! own [`DisplayAdapter`]; closing the view drops the adapter, which in turn
//! releases all of its subscriptions.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use tracing::{debug, info, warn};

use super::display_adapter::{DisplayAdapter, WidgetHost};
use super::events::{EventKind, HostEvent, ViewId};
use super::notifications::{NotificationBus, Subscription};
use crate::core::config::ShowDistSettings;

struct ExtensionState {
    bus: NotificationBus,
    host: Box<dyn WidgetHost>,
    settings: ShowDistSettings,
    adapters: HashMap<ViewId, DisplayAdapter>,
}

impl ExtensionState {
    fn view_opened(&mut self, view: ViewId) {
        if self.adapters.contains_key(&view) {
            warn!("{:?} opened twice; keeping the existing display", view);
            return;
        }
        let adapter = DisplayAdapter::attach(&self.bus, self.host.as_mut(), view, &self.settings);
        self.adapters.insert(view, adapter);
        debug!("Showing distances in {:?}", view);
    }

    fn view_closed(&mut self, view: ViewId) {
        if self.adapters.remove(&view).is_some() {
            debug!("Stopped showing distances in {:?}", view);
        }
    }
}

/// Top-level extension object, alive for as long as the host keeps it
pub struct ShowDistExtension {
    state: Rc<RefCell<ExtensionState>>,
    _subscriptions: Vec<Subscription>,
}

impl ShowDistExtension {
    pub fn new(bus: &NotificationBus, host: Box<dyn WidgetHost>, settings: ShowDistSettings) -> Self {
        let state = Rc::new(RefCell::new(ExtensionState {
            bus: bus.clone(),
            host,
            settings,
            adapters: HashMap::new(),
        }));

        let opened = {
            let state = Rc::clone(&state);
            bus.subscribe(EventKind::ViewOpened, move |event: &HostEvent<'_>| {
                state.borrow_mut().view_opened(event.view)
            })
        };
        let closed = {
            let state = Rc::clone(&state);
            bus.subscribe(EventKind::ViewClosed, move |event: &HostEvent<'_>| {
                state.borrow_mut().view_closed(event.view)
            })
        };

        info!("Distance display extension started");
        Self {
            state,
            _subscriptions: vec![opened, closed],
        }
    }

    /// Views that currently have a display
    pub fn views(&self) -> Vec<ViewId> {
        let mut views: Vec<_> = self.state.borrow().adapters.keys().copied().collect();
        views.sort();
        views
    }

    /// Text currently shown in `view`
    pub fn text_for(&self, view: ViewId) -> Option<String> {
        self.state.borrow().adapters.get(&view).map(DisplayAdapter::text)
    }
}

impl Drop for ShowDistExtension {
    fn drop(&mut self) {
        // Adapters hold subscriptions of their own; release them with the
        // extension rather than waiting for every view to close.
        let adapters = std::mem::take(&mut self.state.borrow_mut().adapters);
        drop(adapters);
        info!("Distance display extension stopped");
    }
}
