//! Host editor notifications
//!
//! Every event names the glyph view it originated from. Events that carry
//! outline data borrow the host's glyph and selection for the duration of
//! the dispatch only.

use crate::core::state::GlyphData;
use crate::editing::selection::Selection;

/// Identity of a glyph view in the host editor
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ViewId(pub u64);

/// Kinds of notification the host can emit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    SelectionChanged,
    /// Mouse released after a click or drag
    PointerUp,
    /// Pointer dragged; points may be moving
    PointerDrag,
    /// Key press such as select-all
    KeyPress,
    /// The view switched to another glyph
    GlyphChanged,
    ViewOpened,
    ViewClosed,
}

impl EventKind {
    /// Events after which the selection text must be recomputed
    pub const SELECTION_UPDATES: [EventKind; 5] = [
        EventKind::SelectionChanged,
        EventKind::PointerUp,
        EventKind::PointerDrag,
        EventKind::KeyPress,
        EventKind::GlyphChanged,
    ];
}

/// A notification as delivered by the host
#[derive(Debug, Clone, Copy)]
pub struct HostEvent<'a> {
    pub kind: EventKind,
    pub view: ViewId,
    pub glyph: Option<&'a GlyphData>,
    pub selection: Option<&'a Selection>,
}

impl<'a> HostEvent<'a> {
    pub fn new(kind: EventKind, view: ViewId) -> Self {
        Self {
            kind,
            view,
            glyph: None,
            selection: None,
        }
    }

    pub fn selection_changed(view: ViewId, glyph: &'a GlyphData, selection: &'a Selection) -> Self {
        Self::new(EventKind::SelectionChanged, view).with_glyph(glyph, selection)
    }

    pub fn view_opened(view: ViewId) -> Self {
        Self::new(EventKind::ViewOpened, view)
    }

    pub fn view_closed(view: ViewId) -> Self {
        Self::new(EventKind::ViewClosed, view)
    }

    pub fn with_glyph(mut self, glyph: &'a GlyphData, selection: &'a Selection) -> Self {
        self.glyph = Some(glyph);
        self.selection = Some(selection);
        self
    }
}
