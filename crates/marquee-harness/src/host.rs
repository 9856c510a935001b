#![forbid(unsafe_code)]

//! Scripted [`TestHost`] and layout fixtures.

use std::cell::RefCell;
use std::rc::Rc;

use ahash::AHashSet;

use marquee_core::geometry::{BoundingBox, Point, Rect};
use marquee_core::host::{
    ContainerTarget, Element, ElementHost, ElementId, ListenTarget, ListenerId, ListenerKind,
};

/// A recorded listener registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListenerRecord {
    pub id: ListenerId,
    pub target: ListenTarget,
    pub kind: ListenerKind,
}

/// Recorded indicator state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IndicatorState {
    pub created: bool,
    pub visible: bool,
    pub rect: Option<Rect>,
    pub removed: bool,
    pub style: Vec<(String, String)>,
}

#[derive(Debug, Default)]
struct HostState {
    resolvable: bool,
    candidates: Vec<Element>,
    origin: Point,
    scroll: Point,
    viewport_height: f32,
    next_listener: u64,
    active: Vec<ListenerRecord>,
    removed: Vec<ListenerId>,
    indicator: IndicatorState,
    hidden: AHashSet<ElementId>,
    draggable: AHashSet<ElementId>,
    queried_selectors: Vec<String>,
}

/// Deterministic host with shared, inspectable state.
///
/// Clones share state: keep one clone in the test and hand another to the
/// engine.
#[derive(Debug, Clone)]
pub struct TestHost {
    inner: Rc<RefCell<HostState>>,
}

impl Default for TestHost {
    fn default() -> Self {
        Self::new()
    }
}

impl TestHost {
    /// A resolvable host with no candidates and a 600px viewport.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(HostState {
                resolvable: true,
                viewport_height: 600.0,
                ..HostState::default()
            })),
        }
    }

    /// A host whose container resolution always fails.
    #[must_use]
    pub fn unresolvable() -> Self {
        let host = Self::new();
        host.inner.borrow_mut().resolvable = false;
        host
    }

    /// A host pre-populated with stacked row candidates (see [`rows`]).
    #[must_use]
    pub fn with_rows(count: u64, row_height: f32, box_height: f32) -> Self {
        let host = Self::new();
        host.inner.borrow_mut().candidates = rows(count, row_height, box_height);
        host
    }

    /// Append a candidate element.
    pub fn push_element(&self, element: Element) {
        self.inner.borrow_mut().candidates.push(element);
    }

    /// Replace the candidate list (takes effect on the next refresh).
    pub fn set_candidates(&self, candidates: Vec<Element>) {
        self.inner.borrow_mut().candidates = candidates;
    }

    /// Set the container origin in client coordinates.
    pub fn set_origin(&self, origin: Point) {
        self.inner.borrow_mut().origin = origin;
    }

    /// Set the current scroll offset.
    pub fn set_scroll(&self, scroll: Point) {
        self.inner.borrow_mut().scroll = scroll;
    }

    /// Set the viewport height.
    pub fn set_viewport_height(&self, height: f32) {
        self.inner.borrow_mut().viewport_height = height;
    }

    /// Snapshot of the indicator state.
    #[must_use]
    pub fn indicator(&self) -> IndicatorState {
        self.inner.borrow().indicator.clone()
    }

    /// Currently registered listeners.
    #[must_use]
    pub fn active_listeners(&self) -> Vec<ListenerRecord> {
        self.inner.borrow().active.clone()
    }

    /// Number of currently registered listeners.
    #[must_use]
    pub fn active_listener_count(&self) -> usize {
        self.inner.borrow().active.len()
    }

    /// Listener handles that have been released.
    #[must_use]
    pub fn removed_listeners(&self) -> Vec<ListenerId> {
        self.inner.borrow().removed.clone()
    }

    /// Whether the candidate is currently hidden by the engine.
    #[must_use]
    pub fn is_hidden(&self, id: ElementId) -> bool {
        self.inner.borrow().hidden.contains(&id)
    }

    /// Whether the candidate is currently marked draggable.
    #[must_use]
    pub fn is_draggable(&self, id: ElementId) -> bool {
        self.inner.borrow().draggable.contains(&id)
    }

    /// Every selector the engine has queried, in order.
    #[must_use]
    pub fn queried_selectors(&self) -> Vec<String> {
        self.inner.borrow().queried_selectors.clone()
    }
}

impl ElementHost for TestHost {
    fn resolve_container(&mut self, _target: &ContainerTarget) -> bool {
        self.inner.borrow().resolvable
    }

    fn query_candidates(&mut self, selector: &str) -> Vec<Element> {
        let mut state = self.inner.borrow_mut();
        state.queried_selectors.push(selector.to_string());
        state.candidates.clone()
    }

    fn container_origin(&self) -> Point {
        self.inner.borrow().origin
    }

    fn scroll_offset(&self) -> Point {
        self.inner.borrow().scroll
    }

    fn viewport_height(&self) -> f32 {
        self.inner.borrow().viewport_height
    }

    fn listen(&mut self, target: ListenTarget, kind: ListenerKind) -> ListenerId {
        let mut state = self.inner.borrow_mut();
        let id = ListenerId(state.next_listener);
        state.next_listener += 1;
        state.active.push(ListenerRecord { id, target, kind });
        id
    }

    fn unlisten(&mut self, listener: ListenerId) {
        let mut state = self.inner.borrow_mut();
        state.active.retain(|record| record.id != listener);
        state.removed.push(listener);
    }

    fn create_indicator(&mut self, style: &[(String, String)]) {
        let mut state = self.inner.borrow_mut();
        state.indicator.created = true;
        state.indicator.style = style.to_vec();
    }

    fn show_indicator(&mut self) {
        self.inner.borrow_mut().indicator.visible = true;
    }

    fn move_indicator(&mut self, rect: Rect) {
        self.inner.borrow_mut().indicator.rect = Some(rect);
    }

    fn hide_indicator(&mut self) {
        self.inner.borrow_mut().indicator.visible = false;
    }

    fn remove_indicator(&mut self) {
        let mut state = self.inner.borrow_mut();
        state.indicator.visible = false;
        state.indicator.removed = true;
    }

    fn set_candidate_visible(&mut self, id: ElementId, visible: bool) {
        let mut state = self.inner.borrow_mut();
        if visible {
            state.hidden.remove(&id);
        } else {
            state.hidden.insert(id);
        }
    }

    fn set_candidate_draggable(&mut self, id: ElementId, draggable: bool) {
        let mut state = self.inner.borrow_mut();
        if draggable {
            state.draggable.insert(id);
        } else {
            state.draggable.remove(&id);
        }
    }
}

/// Stacked row candidates: element `i` has id `i` and bounds
/// `(0, i*row_height) .. (100, i*row_height + box_height)`.
#[must_use]
pub fn rows(count: u64, row_height: f32, box_height: f32) -> Vec<Element> {
    (0..count)
        .map(|i| {
            let top = i as f32 * row_height;
            Element::new(
                ElementId(i),
                BoundingBox::new(0.0, top, 100.0, top + box_height),
            )
        })
        .collect()
}
