//! Display adapter
//!
//! One adapter per glyph view. It owns the view's text widget, listens for
//! selection related notifications and rewrites the widget text after each
//! one. Notifications from other views are ignored.

use std::cell::RefCell;
use std::rc::Rc;
use tracing::{debug, trace};

use super::events::{EventKind, HostEvent, ViewId};
use super::notifications::{NotificationBus, Subscription};
use crate::core::config::{ShowDistSettings, WidgetFrame};
use crate::core::state::GlyphData;
use crate::editing::selection::Selection;
use crate::ui::panes::format_selection;

/// Text sink provided by the host, e.g. a small label in the glyph view
pub trait TextDisplay {
    fn set_text(&mut self, text: &str);
}

/// Host side of widget placement
pub trait WidgetHost {
    /// Place a text widget in `view` at `frame` and hand out its sink
    fn add_text_widget(&mut self, view: ViewId, frame: WidgetFrame) -> Box<dyn TextDisplay>;

    /// Whether `view` currently shows rulers
    fn rulers_visible(&self, _view: ViewId) -> bool {
        false
    }
}

struct AdapterState {
    view: ViewId,
    display: Box<dyn TextDisplay>,
    text: String,
}

impl AdapterState {
    fn handle(&mut self, event: &HostEvent<'_>) {
        if event.view != self.view {
            trace!("{:?}: ignoring {:?} from {:?}", self.view, event.kind, event.view);
            return;
        }
        self.update_info(event.glyph, event.selection);
    }

    fn update_info(&mut self, glyph: Option<&GlyphData>, selection: Option<&Selection>) {
        let text = match (glyph, selection) {
            (Some(glyph), Some(selection)) => format_selection(glyph, selection),
            _ => String::new(),
        };
        self.display.set_text(&text);
        self.text = text;
    }
}

/// Keeps a view's distance widget in sync with its selection
pub struct DisplayAdapter {
    view: ViewId,
    state: Rc<RefCell<AdapterState>>,
    // Released on drop, which unsubscribes every handler.
    subscriptions: Vec<Subscription>,
}

impl DisplayAdapter {
    /// Subscribe to selection updates for `view`, writing into `display`
    pub fn new(bus: &NotificationBus, view: ViewId, display: Box<dyn TextDisplay>) -> Self {
        let state = Rc::new(RefCell::new(AdapterState {
            view,
            display,
            text: String::new(),
        }));

        let subscriptions = EventKind::SELECTION_UPDATES
            .iter()
            .map(|&kind| {
                let state = Rc::clone(&state);
                bus.subscribe(kind, move |event| state.borrow_mut().handle(event))
            })
            .collect();

        debug!("Display adapter attached to {:?}", view);
        Self {
            view,
            state,
            subscriptions,
        }
    }

    /// Create the widget through `host` and attach an adapter to it
    pub fn attach(
        bus: &NotificationBus,
        host: &mut dyn WidgetHost,
        view: ViewId,
        settings: &ShowDistSettings,
    ) -> Self {
        let frame = settings.widget_frame_for(host.rulers_visible(view));
        let display = host.add_text_widget(view, frame);
        Self::new(bus, view, display)
    }

    pub fn view(&self) -> ViewId {
        self.view
    }

    /// Text most recently pushed to the widget
    pub fn text(&self) -> String {
        self.state.borrow().text.clone()
    }

    /// Recompute the text without waiting for a notification
    pub fn update_info(&self, glyph: Option<&GlyphData>, selection: Option<&Selection>) {
        self.state.borrow_mut().update_info(glyph, selection);
    }

    pub fn subscription_count(&self) -> usize {
        self.subscriptions.len()
    }
}

impl Drop for DisplayAdapter {
    fn drop(&mut self) {
        debug!("Display adapter detached from {:?}", self.view);
    }
}
