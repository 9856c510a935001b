#![forbid(unsafe_code)]

//! Named callback slots for engine lifecycle events.
//!
//! Each slot holds at most one handler; installing a handler for a kind
//! replaces the previous one. Handlers receive an owned payload snapshot,
//! so they cannot observe (or mutate) engine internals mid-dispatch.

use marquee_core::geometry::Point;
use marquee_core::host::ElementId;

/// The named lifecycle events a handler can subscribe to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// A drag session started.
    Start,
    /// A candidate was admitted to the selection.
    Select,
    /// A drag session ended.
    End,
    /// The selection was cleared.
    Clear,
    /// A candidate was admitted via keyboard navigation.
    KeyboardSelect,
    /// A touch sequence began.
    TouchStart,
    /// A touch sequence ended.
    TouchEnd,
    /// A native drag started over a candidate.
    DragStart,
    /// A native drag over a candidate ended.
    DragEnd,
}

/// Payload delivered to callback handlers.
///
/// `selected` sequences follow candidate registry order.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectEvent {
    Start {
        position: Point,
    },
    Select {
        id: ElementId,
        index: usize,
        selected: Vec<ElementId>,
    },
    End {
        selected: Vec<ElementId>,
    },
    Clear,
    KeyboardSelect {
        id: ElementId,
        index: usize,
        selected: Vec<ElementId>,
    },
    TouchStart {
        position: Point,
    },
    TouchEnd {
        position: Point,
    },
    DragStart {
        id: ElementId,
    },
    DragEnd {
        id: ElementId,
    },
}

impl SelectEvent {
    /// The slot this payload dispatches to.
    #[must_use]
    pub const fn kind(&self) -> EventKind {
        match self {
            Self::Start { .. } => EventKind::Start,
            Self::Select { .. } => EventKind::Select,
            Self::End { .. } => EventKind::End,
            Self::Clear => EventKind::Clear,
            Self::KeyboardSelect { .. } => EventKind::KeyboardSelect,
            Self::TouchStart { .. } => EventKind::TouchStart,
            Self::TouchEnd { .. } => EventKind::TouchEnd,
            Self::DragStart { .. } => EventKind::DragStart,
            Self::DragEnd { .. } => EventKind::DragEnd,
        }
    }
}

/// A boxed callback handler.
pub type Handler = Box<dyn FnMut(&SelectEvent)>;

/// The full set of callback slots.
#[derive(Default)]
pub struct Callbacks {
    on_start: Option<Handler>,
    on_select: Option<Handler>,
    on_end: Option<Handler>,
    on_clear: Option<Handler>,
    on_keyboard_select: Option<Handler>,
    on_touch_start: Option<Handler>,
    on_touch_end: Option<Handler>,
    on_drag_start: Option<Handler>,
    on_drag_end: Option<Handler>,
}

impl Callbacks {
    /// Create an empty callback set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Install (or replace) the handler for `kind`.
    pub fn set(&mut self, kind: EventKind, handler: Handler) {
        *self.slot_mut(kind) = Some(handler);
    }

    /// Dispatch a payload to its slot, if a handler is installed.
    pub fn emit(&mut self, event: &SelectEvent) {
        if let Some(handler) = self.slot_mut(event.kind()) {
            handler(event);
        }
    }

    fn slot_mut(&mut self, kind: EventKind) -> &mut Option<Handler> {
        match kind {
            EventKind::Start => &mut self.on_start,
            EventKind::Select => &mut self.on_select,
            EventKind::End => &mut self.on_end,
            EventKind::Clear => &mut self.on_clear,
            EventKind::KeyboardSelect => &mut self.on_keyboard_select,
            EventKind::TouchStart => &mut self.on_touch_start,
            EventKind::TouchEnd => &mut self.on_touch_end,
            EventKind::DragStart => &mut self.on_drag_start,
            EventKind::DragEnd => &mut self.on_drag_end,
        }
    }

    fn installed(&self) -> Vec<&'static str> {
        let slots: [(&'static str, bool); 9] = [
            ("start", self.on_start.is_some()),
            ("select", self.on_select.is_some()),
            ("end", self.on_end.is_some()),
            ("clear", self.on_clear.is_some()),
            ("keyboardSelect", self.on_keyboard_select.is_some()),
            ("touchStart", self.on_touch_start.is_some()),
            ("touchEnd", self.on_touch_end.is_some()),
            ("dragStart", self.on_drag_start.is_some()),
            ("dragEnd", self.on_drag_end.is_some()),
        ];
        slots
            .into_iter()
            .filter_map(|(name, set)| set.then_some(name))
            .collect()
    }
}

impl std::fmt::Debug for Callbacks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Callbacks")
            .field("installed", &self.installed())
            .finish()
    }
}
