#![forbid(unsafe_code)]

//! The selection engine.
//!
//! [`SelectEngine`] owns the configuration, the candidate registry, the
//! selection set, and the ephemeral drag/touch sessions, and drives them
//! from normalized input events. Every input source (pointer drag,
//! keyboard navigation, touch, programmatic API) funnels through the same
//! selection primitives, so invariants hold uniformly: membership is
//! unique, admissions respect the selectability predicate, and the
//! selection materializes in registry order.
//!
//! # Invariants
//!
//! 1. At most one drag session exists at a time; a press is only honored
//!    from the idle state.
//! 2. Every listener handle acquired from the host is recorded and
//!    released on [`destroy`](SelectEngine::destroy); teardown is
//!    idempotent.
//! 3. Removal from the selection during live intersection fires no
//!    callback; only admissions do. This asymmetry is deliberate.

mod dnd;
mod keyboard;
mod pointer;
mod touch;

use ahash::AHashSet;
use web_time::Instant;

use marquee_core::event::Event;
use marquee_core::geometry::{Point, Rect};
use marquee_core::host::{Element, ElementHost, ElementId, ListenTarget, ListenerId, ListenerKind};

use crate::callbacks::{EventKind, Handler, SelectEvent};
use crate::drag::{DragSession, TouchSession};
use crate::error::{Result, SelectError};
use crate::options::{Options, SelectabilityFn};
use crate::registry::{Registry, visible_window};
use crate::selection::SelectionSet;

/// Which input path admitted a candidate. Keyboard-originated admissions
/// additionally fire the keyboard-select callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AdmitOrigin {
    Pointer,
    Keyboard,
    Programmatic,
}

/// Listener handles grouped by input source for symmetric teardown.
#[derive(Debug, Default)]
struct Listeners {
    pointer: Vec<ListenerId>,
    keyboard: Vec<ListenerId>,
    touch: Vec<ListenerId>,
    drag: Vec<ListenerId>,
    scroll: Vec<ListenerId>,
}

impl Listeners {
    fn drain_all(&mut self) -> Vec<ListenerId> {
        let mut all = Vec::new();
        all.append(&mut self.pointer);
        all.append(&mut self.keyboard);
        all.append(&mut self.touch);
        all.append(&mut self.drag);
        all.append(&mut self.scroll);
        all
    }
}

/// Rubber-band multi-selection engine over a host element tree.
///
/// Construct with [`SelectEngine::new`]; feed input through
/// [`process`](SelectEngine::process) or the per-source handlers. All
/// mutating methods return `&mut Self` for call chaining.
pub struct SelectEngine<H: ElementHost> {
    host: H,
    options: Options,
    enabled: bool,
    destroyed: bool,
    registry: Registry,
    selection: SelectionSet,
    drag: Option<DragSession>,
    touch: Option<TouchSession>,
    cursor: Option<usize>,
    dragged: AHashSet<ElementId>,
    listeners: Listeners,
}

impl<H: ElementHost> std::fmt::Debug for SelectEngine<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectEngine")
            .field("enabled", &self.enabled)
            .field("dragging", &self.drag.is_some())
            .field("candidates", &self.registry.len())
            .field("selected_count", &self.selection.len())
            .field("cursor", &self.cursor)
            .finish()
    }
}

impl<H: ElementHost> SelectEngine<H> {
    /// Build an engine over `host` with the given options.
    ///
    /// Resolves the container, creates the indicator element, registers
    /// input listeners for the enabled sources, and takes the initial
    /// candidate snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`SelectError::ContainerNotFound`] if the container target
    /// matches no element. No partial engine is returned.
    pub fn new(mut host: H, options: Options) -> Result<Self> {
        if !host.resolve_container(&options.container) {
            return Err(SelectError::ContainerNotFound {
                target: options.container.to_string(),
            });
        }
        host.create_indicator(&options.style);

        let auto_start = options.auto_start;
        let mut engine = Self {
            host,
            options,
            enabled: false,
            destroyed: false,
            registry: Registry::new(),
            selection: SelectionSet::new(),
            drag: None,
            touch: None,
            cursor: None,
            dragged: AHashSet::new(),
            listeners: Listeners::default(),
        };

        engine.attach_pointer_listeners();
        if engine.options.keyboard {
            engine.attach_keyboard_listeners();
        }
        if engine.options.touch {
            engine.attach_touch_listeners();
        }
        engine.refresh();
        if engine.options.drag {
            engine.attach_drag_listeners();
            engine.mark_all_draggable(true);
        }
        if engine.options.virtual_scrolling {
            engine.attach_scroll_listener();
            engine.apply_virtual_window();
        }
        if auto_start {
            engine.enabled = true;
        }
        Ok(engine)
    }

    /// Dispatch a normalized input event to the matching handler.
    ///
    /// `now` is only consulted for touch tap classification; passing a
    /// monotonic "current" instant is always correct.
    pub fn process(&mut self, event: &Event, now: Instant) {
        match event {
            Event::Pointer(pointer) => self.handle_pointer(pointer),
            Event::Key(key) => self.handle_key(key),
            Event::Touch(touch) => self.handle_touch(touch, now),
            Event::NativeDrag(drag) => self.handle_native_drag(drag),
            Event::Scroll => self.handle_scroll(),
        }
    }

    /// React to a container scroll: recompute the virtual-scrolling window.
    pub fn handle_scroll(&mut self) {
        if self.options.virtual_scrolling {
            self.apply_virtual_window();
        }
    }

    // -----------------------------------------------------------------
    // Public API
    // -----------------------------------------------------------------

    /// Start reacting to input.
    pub fn enable(&mut self) -> &mut Self {
        if !self.destroyed {
            self.enabled = true;
        }
        self
    }

    /// Stop reacting to input. Cancels any active drag session without an
    /// end callback and hides the indicator.
    pub fn disable(&mut self) -> &mut Self {
        self.enabled = false;
        if self.drag.take().is_some() {
            self.host.hide_indicator();
        }
        self.touch = None;
        self
    }

    /// Whether the engine currently reacts to input.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Whether a drag session is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// The selected candidates in registry order.
    #[must_use]
    pub fn selected(&self) -> Vec<ElementId> {
        self.selection.ordered(&self.registry)
    }

    /// The selected registry indices in registry order.
    #[must_use]
    pub fn selected_indices(&self) -> Vec<usize> {
        self.selection.ordered_indices(&self.registry)
    }

    /// The given attribute of every selected candidate, in registry order.
    #[must_use]
    pub fn selected_attribute_values(&self, name: &str) -> Vec<Option<String>> {
        self.registry
            .iter()
            .filter(|(_, el)| self.selection.contains(el.id))
            .map(|(_, el)| el.attribute(name).map(ToOwned::to_owned))
            .collect()
    }

    /// The keyboard cursor, if any candidate has been navigated to.
    #[must_use]
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// Number of registered candidates.
    #[must_use]
    pub fn candidate_count(&self) -> usize {
        self.registry.len()
    }

    /// The active virtual-scrolling window, if enabled.
    #[must_use]
    pub fn visible_window(&self) -> Option<(usize, usize)> {
        self.registry.visible_window()
    }

    /// Borrow the host (useful for inspecting recorded side effects in
    /// tests and embeddings).
    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Empty the selection and reset the keyboard cursor.
    ///
    /// The clear callback fires unconditionally, even when the selection
    /// was already empty.
    pub fn clear_selection(&mut self) -> &mut Self {
        self.selection.clear();
        self.cursor = None;
        #[cfg(feature = "tracing")]
        self.log_selection("clear");
        self.emit(SelectEvent::Clear);
        self
    }

    /// Re-query the host for candidates, replacing the registry wholesale.
    ///
    /// Call after any structural change the engine should react to; the
    /// engine does not observe the host on its own.
    pub fn refresh(&mut self) -> &mut Self {
        let elements = self.host.query_candidates(&self.options.selectable);
        self.registry.replace(elements);
        if self.options.virtual_scrolling {
            self.apply_virtual_window();
        }
        self
    }

    /// Install (or replace) the callback handler for `kind`.
    pub fn on(&mut self, kind: EventKind, handler: Handler) -> &mut Self {
        self.options.callbacks.set(kind, handler);
        self
    }

    /// Clear, then select every selectable candidate.
    pub fn select_all(&mut self) -> &mut Self {
        self.select_all_internal(AdmitOrigin::Programmatic);
        self
    }

    /// Clear, then select the candidate at `index`. No-op for an
    /// out-of-range index or an unselectable candidate.
    pub fn select_by_index(&mut self, index: usize) -> &mut Self {
        self.select_index_internal(index, true, AdmitOrigin::Programmatic);
        self
    }

    /// Additively select every selectable candidate between `i` and `j`,
    /// inclusive of both endpoints regardless of order.
    pub fn select_range(&mut self, i: usize, j: usize) -> &mut Self {
        self.select_range_internal(i, j, AdmitOrigin::Programmatic);
        self
    }

    /// Clear, then select every listed index (invalid entries skipped).
    pub fn select_by_indices(&mut self, indices: &[usize]) -> &mut Self {
        self.clear_selection();
        for &index in indices {
            self.select_index_internal(index, false, AdmitOrigin::Programmatic);
        }
        self
    }

    /// Clear, then select every selectable candidate whose attribute
    /// `name` equals `value`.
    pub fn select_by_attribute(&mut self, name: &str, value: &str) -> &mut Self {
        self.clear_selection();
        let picks = self.collect_selectable(|el| el.attribute(name) == Some(value));
        for (id, index) in picks {
            self.admit(id, index, AdmitOrigin::Programmatic);
        }
        self
    }

    /// Clear, then select every selectable candidate carrying `class`.
    pub fn select_by_class(&mut self, class: &str) -> &mut Self {
        self.clear_selection();
        let picks = self.collect_selectable(|el| el.has_class(class));
        for (id, index) in picks {
            self.admit(id, index, AdmitOrigin::Programmatic);
        }
        self
    }

    /// Replace the selection with its complement over the registered
    /// candidates. Complement members are still vetted by the
    /// selectability predicate. Fires no callbacks.
    pub fn invert_selection(&mut self) -> &mut Self {
        let complement: AHashSet<ElementId> = self
            .registry
            .iter()
            .filter(|(_, el)| !self.selection.contains(el.id) && self.is_selectable(el))
            .map(|(_, el)| el.id)
            .collect();
        self.selection.replace(complement);
        #[cfg(feature = "tracing")]
        self.log_selection("invert");
        self
    }

    /// Enable keyboard navigation.
    pub fn enable_keyboard(&mut self) -> &mut Self {
        if !self.options.keyboard {
            self.options.keyboard = true;
            self.attach_keyboard_listeners();
        }
        self
    }

    /// Disable keyboard navigation.
    pub fn disable_keyboard(&mut self) -> &mut Self {
        self.options.keyboard = false;
        let handles: Vec<_> = self.listeners.keyboard.drain(..).collect();
        for id in handles {
            self.host.unlisten(id);
        }
        self
    }

    /// Enable touch input.
    pub fn enable_touch(&mut self) -> &mut Self {
        if !self.options.touch {
            self.options.touch = true;
            self.attach_touch_listeners();
        }
        self
    }

    /// Disable touch input and drop any in-flight touch session.
    pub fn disable_touch(&mut self) -> &mut Self {
        self.options.touch = false;
        self.touch = None;
        let handles: Vec<_> = self.listeners.touch.drain(..).collect();
        for id in handles {
            self.host.unlisten(id);
        }
        self
    }

    /// Enable native drag-and-drop marking and flag every candidate as
    /// draggable.
    pub fn enable_drag(&mut self) -> &mut Self {
        if !self.options.drag {
            self.options.drag = true;
            self.attach_drag_listeners();
        }
        self.mark_all_draggable(true);
        self
    }

    /// Disable native drag-and-drop marking and unflag every candidate.
    pub fn disable_drag(&mut self) -> &mut Self {
        self.options.drag = false;
        let handles: Vec<_> = self.listeners.drag.drain(..).collect();
        for id in handles {
            self.host.unlisten(id);
        }
        self.mark_all_draggable(false);
        self
    }

    /// Enable the virtual-scrolling visibility window with the given
    /// fixed per-item height.
    pub fn enable_virtual_scrolling(&mut self, item_height: f32) -> &mut Self {
        self.options.virtual_scrolling = true;
        self.options.virtual_item_height = item_height;
        self.attach_scroll_listener();
        self.apply_virtual_window();
        self
    }

    /// Disable virtual scrolling and restore every candidate's visibility.
    pub fn disable_virtual_scrolling(&mut self) -> &mut Self {
        self.options.virtual_scrolling = false;
        let handles: Vec<_> = self.listeners.scroll.drain(..).collect();
        for id in handles {
            self.host.unlisten(id);
        }
        self.registry.set_visible_window(None);
        let ids: Vec<ElementId> = self.registry.iter().map(|(_, el)| el.id).collect();
        for id in ids {
            self.host.set_candidate_visible(id, true);
        }
        self
    }

    /// Replace the selectability predicate. Applies to future admissions
    /// only; current members are not re-vetted.
    pub fn set_selectability_predicate(&mut self, predicate: SelectabilityFn) -> &mut Self {
        self.options.selectability = Some(predicate);
        self
    }

    /// Release every listener and the indicator element. Safe to call
    /// multiple times.
    pub fn destroy(&mut self) {
        if self.destroyed {
            return;
        }
        self.disable();
        let handles = self.listeners.drain_all();
        for id in handles {
            self.host.unlisten(id);
        }
        self.host.remove_indicator();
        self.selection.clear();
        self.registry.clear();
        self.dragged.clear();
        self.cursor = None;
        self.destroyed = true;
    }

    // -----------------------------------------------------------------
    // Selection primitives (shared by every input source)
    // -----------------------------------------------------------------

    pub(crate) fn emit(&mut self, event: SelectEvent) {
        self.options.callbacks.emit(&event);
    }

    pub(crate) fn is_selectable(&self, element: &Element) -> bool {
        self.options
            .selectability
            .as_ref()
            .is_none_or(|predicate| predicate(element))
    }

    /// Admit a candidate, firing the select callback (and the
    /// keyboard-select callback for keyboard-originated admissions).
    /// No-op if already selected.
    pub(crate) fn admit(&mut self, id: ElementId, index: usize, origin: AdmitOrigin) {
        if !self.selection.insert(id) {
            return;
        }
        #[cfg(feature = "tracing")]
        self.log_selection("admit");
        let selected = self.selection.ordered(&self.registry);
        self.emit(SelectEvent::Select {
            id,
            index,
            selected: selected.clone(),
        });
        if origin == AdmitOrigin::Keyboard {
            self.emit(SelectEvent::KeyboardSelect {
                id,
                index,
                selected,
            });
        }
    }

    /// Toggle membership of a registered candidate. Removal is silent;
    /// admission is vetted by the selectability predicate.
    pub(crate) fn toggle(&mut self, id: ElementId, origin: AdmitOrigin) {
        if self.selection.remove(id) {
            #[cfg(feature = "tracing")]
            self.log_selection("toggle_off");
            return;
        }
        let Some(index) = self.registry.index_of(id) else {
            return;
        };
        let selectable = self
            .registry
            .get(index)
            .is_some_and(|el| self.is_selectable(el));
        if selectable {
            self.admit(id, index, origin);
        }
    }

    /// Admit every selectable candidate in `[min(i, j), max(i, j)]`,
    /// additively. The range is clipped to the registry, so out-of-range
    /// endpoints cost nothing.
    pub(crate) fn select_range_internal(&mut self, i: usize, j: usize, origin: AdmitOrigin) {
        let Some(last) = self.registry.len().checked_sub(1) else {
            return;
        };
        let (lo, hi) = (i.min(j), i.max(j).min(last));
        let picks: Vec<(ElementId, usize)> = (lo..=hi)
            .filter_map(|index| {
                self.registry
                    .get(index)
                    .filter(|el| self.is_selectable(el))
                    .map(|el| (el.id, index))
            })
            .collect();
        for (id, index) in picks {
            self.admit(id, index, origin);
        }
    }

    /// Select the candidate at `index`, optionally clearing first, and
    /// move the keyboard cursor there. Range and selectability are
    /// checked before any clearing happens.
    pub(crate) fn select_index_internal(
        &mut self,
        index: usize,
        clear_first: bool,
        origin: AdmitOrigin,
    ) {
        let id = match self.registry.get(index) {
            Some(el) if self.is_selectable(el) => el.id,
            _ => return,
        };
        if clear_first {
            self.clear_selection();
        }
        self.admit(id, index, origin);
        self.cursor = Some(index);
    }

    pub(crate) fn select_all_internal(&mut self, origin: AdmitOrigin) {
        self.clear_selection();
        let picks = self.collect_selectable(|_| true);
        for (id, index) in picks {
            self.admit(id, index, origin);
        }
    }

    fn collect_selectable(&self, filter: impl Fn(&Element) -> bool) -> Vec<(ElementId, usize)> {
        self.registry
            .iter()
            .filter(|(_, el)| filter(el) && self.is_selectable(el))
            .map(|(index, el)| (el.id, index))
            .collect()
    }

    // -----------------------------------------------------------------
    // Geometry helpers
    // -----------------------------------------------------------------

    /// Convert a client-coordinate point to container-relative space.
    pub(crate) fn to_relative(&self, position: Point) -> Point {
        let origin = self.host.container_origin();
        let scroll = self.host.scroll_offset();
        Point::new(
            position.x - origin.x + scroll.x,
            position.y - origin.y + scroll.y,
        )
    }

    /// Hit-test a container-relative point against the full candidate
    /// list (not the visible-only subset), in registry order.
    pub(crate) fn hit_test(&self, relative: Point) -> Option<(ElementId, usize)> {
        self.registry
            .iter()
            .find(|(_, el)| el.bounds.contains(relative))
            .map(|(index, el)| (el.id, index))
    }

    /// Run the intersection evaluator for one drag frame.
    ///
    /// Tests every visible candidate's box against the rectangle (both in
    /// container-relative space); admits intersecting selectable
    /// candidates and silently evicts selected candidates that no longer
    /// intersect.
    pub(crate) fn evaluate(&mut self, rect: Rect, origin: AdmitOrigin) {
        let rect_box = rect.as_box();

        let mut admitted = Vec::new();
        let mut evicted = Vec::new();
        for (index, el) in self.registry.iter() {
            if !self.registry.is_visible(index) {
                continue;
            }
            if rect_box.intersects(&el.bounds) {
                if !self.selection.contains(el.id) && self.is_selectable(el) {
                    admitted.push((el.id, index));
                }
            } else if self.selection.contains(el.id) {
                evicted.push(el.id);
            }
        }
        for id in evicted {
            self.selection.remove(id);
        }
        for (id, index) in admitted {
            self.admit(id, index, origin);
        }
    }

    // -----------------------------------------------------------------
    // Listener and visibility plumbing
    // -----------------------------------------------------------------

    fn attach_pointer_listeners(&mut self) {
        // Move/up track the global surface so drags keep working outside
        // the container bounds.
        let down = self.host.listen(ListenTarget::Container, ListenerKind::PointerDown);
        let moved = self.host.listen(ListenTarget::Global, ListenerKind::PointerMove);
        let up = self.host.listen(ListenTarget::Global, ListenerKind::PointerUp);
        self.listeners.pointer.extend([down, moved, up]);
    }

    fn attach_keyboard_listeners(&mut self) {
        let down = self.host.listen(ListenTarget::Container, ListenerKind::KeyDown);
        let up = self.host.listen(ListenTarget::Container, ListenerKind::KeyUp);
        self.listeners.keyboard.extend([down, up]);
    }

    fn attach_touch_listeners(&mut self) {
        let start = self.host.listen(ListenTarget::Container, ListenerKind::TouchStart);
        let moved = self.host.listen(ListenTarget::Container, ListenerKind::TouchMove);
        let end = self.host.listen(ListenTarget::Container, ListenerKind::TouchEnd);
        self.listeners.touch.extend([start, moved, end]);
    }

    fn attach_drag_listeners(&mut self) {
        let start = self.host.listen(ListenTarget::Container, ListenerKind::DragStart);
        let end = self.host.listen(ListenTarget::Container, ListenerKind::DragEnd);
        self.listeners.drag.extend([start, end]);
    }

    fn attach_scroll_listener(&mut self) {
        if self.listeners.scroll.is_empty() {
            let id = self.host.listen(ListenTarget::Container, ListenerKind::Scroll);
            self.listeners.scroll.push(id);
        }
    }

    fn mark_all_draggable(&mut self, draggable: bool) {
        let ids: Vec<ElementId> = self.registry.iter().map(|(_, el)| el.id).collect();
        for id in ids {
            self.host.set_candidate_draggable(id, draggable);
        }
    }

    /// Recompute the visible window from current scroll metrics and push
    /// per-candidate visibility to the host.
    pub(crate) fn apply_virtual_window(&mut self) {
        let window = visible_window(
            self.host.scroll_offset().y,
            self.host.viewport_height(),
            self.options.virtual_item_height,
        );
        self.registry.set_visible_window(Some(window));
        let updates: Vec<(ElementId, bool)> = self
            .registry
            .iter()
            .map(|(index, el)| (el.id, self.registry.is_visible(index)))
            .collect();
        for (id, visible) in updates {
            self.host.set_candidate_visible(id, visible);
        }
    }

    #[cfg(feature = "tracing")]
    fn log_selection(&self, action: &str) {
        tracing::debug!(
            message = "marquee.selection",
            action,
            selected_count = self.selection.len(),
            cursor = ?self.cursor,
            dragging = self.drag.is_some(),
        );
    }
}
