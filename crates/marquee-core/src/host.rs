#![forbid(unsafe_code)]

//! The host seam: how the engine reaches its surrounding UI environment.
//!
//! The engine never touches a real element tree. Everything environmental
//! goes through [`ElementHost`]: resolving the container, querying
//! candidate elements, reading scroll metrics, registering input
//! listeners, and drawing the drag indicator. A production integration
//! implements this trait over its element tree; tests use the
//! deterministic host in `marquee-harness`.
//!
//! # Invariants
//!
//! 1. `query_candidates` returns elements in document order; the engine
//!    treats that order as the candidate index ordering.
//! 2. Candidate bounds are container-relative (stable under scrolling).
//!    Pointer and touch positions arrive in client coordinates; the
//!    engine converts them by subtracting `container_origin` and adding
//!    `scroll_offset` before testing against candidate boxes.
//! 3. `listen` returns an opaque handle; passing it to `unlisten` exactly
//!    once removes the registration. The engine records every handle it
//!    acquires and releases all of them on teardown.

use ahash::AHashMap;

use crate::geometry::{BoundingBox, Point, Rect};

/// Opaque, stable identity of a host element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub u64);

/// A snapshot of a candidate element taken at query time.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    /// Stable host identity.
    pub id: ElementId,

    /// Bounding box in container-relative coordinates.
    pub bounds: BoundingBox,

    /// Attributes visible to attribute-based selection.
    pub attributes: AHashMap<String, String>,

    /// Class names visible to class-based selection.
    pub classes: Vec<String>,
}

impl Element {
    /// Create an element with the given id and bounds and no metadata.
    #[must_use]
    pub fn new(id: ElementId, bounds: BoundingBox) -> Self {
        Self {
            id,
            bounds,
            attributes: AHashMap::new(),
            classes: Vec::new(),
        }
    }

    /// Add an attribute.
    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Add a class name.
    #[must_use]
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    /// Look up an attribute value.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Check class membership.
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

/// How the engine's container is identified at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContainerTarget {
    /// Resolve through a host selector query.
    Selector(String),

    /// A directly supplied element.
    Element(ElementId),
}

impl std::fmt::Display for ContainerTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Selector(sel) => write!(f, "{sel}"),
            Self::Element(id) => write!(f, "element #{}", id.0),
        }
    }
}

/// Which surface a listener attaches to.
///
/// Move/up listeners attach to the global surface rather than the
/// container so an in-progress drag keeps tracking when the pointer
/// leaves the container bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenTarget {
    /// The resolved container element.
    Container,

    /// The environment's global pointer-tracking surface.
    Global,
}

/// The kind of input listener to register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenerKind {
    PointerDown,
    PointerMove,
    PointerUp,
    KeyDown,
    KeyUp,
    TouchStart,
    TouchMove,
    TouchEnd,
    DragStart,
    DragEnd,
    Scroll,
}

/// Opaque handle for a registered listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

/// The engine's view of its UI environment.
///
/// All methods are infallible except container resolution; a UI
/// convenience widget treats environmental hiccups as no-ops rather than
/// recoverable errors.
pub trait ElementHost {
    /// Resolve the container. Returns `false` if the target matches no
    /// element, which aborts engine construction.
    fn resolve_container(&mut self, target: &ContainerTarget) -> bool;

    /// Query the container for candidate elements matching `selector`,
    /// in document order.
    fn query_candidates(&mut self, selector: &str) -> Vec<Element>;

    /// The container's origin in client coordinates.
    fn container_origin(&self) -> Point;

    /// The container's current scroll offset.
    fn scroll_offset(&self) -> Point;

    /// The container's viewport height (visible, not scrolled, extent).
    fn viewport_height(&self) -> f32;

    /// Register an input listener, returning an opaque handle.
    fn listen(&mut self, target: ListenTarget, kind: ListenerKind) -> ListenerId;

    /// Remove a previously registered listener.
    fn unlisten(&mut self, listener: ListenerId);

    /// Create the drag indicator element from a pass-through style bag.
    /// The indicator starts hidden.
    fn create_indicator(&mut self, style: &[(String, String)]);

    /// Show the drag indicator.
    fn show_indicator(&mut self);

    /// Move/resize the drag indicator (container-relative coordinates).
    fn move_indicator(&mut self, rect: Rect);

    /// Hide the drag indicator.
    fn hide_indicator(&mut self);

    /// Remove the drag indicator element entirely.
    fn remove_indicator(&mut self);

    /// Show or hide a candidate (virtual-scrolling visibility window).
    fn set_candidate_visible(&mut self, id: ElementId, visible: bool);

    /// Mark or unmark a candidate as natively draggable.
    fn set_candidate_draggable(&mut self, id: ElementId, draggable: bool);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_metadata_lookup() {
        let el = Element::new(ElementId(7), BoundingBox::new(0.0, 0.0, 10.0, 10.0))
            .with_attribute("data-group", "alpha")
            .with_class("row")
            .with_class("odd");
        assert_eq!(el.attribute("data-group"), Some("alpha"));
        assert_eq!(el.attribute("missing"), None);
        assert!(el.has_class("odd"));
        assert!(!el.has_class("even"));
    }

    #[test]
    fn container_target_display() {
        assert_eq!(
            ContainerTarget::Selector("#mselect".into()).to_string(),
            "#mselect"
        );
        assert_eq!(
            ContainerTarget::Element(ElementId(3)).to_string(),
            "element #3"
        );
    }
}
