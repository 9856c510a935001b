#![forbid(unsafe_code)]

//! Candidate registry.
//!
//! Holds the ordered list of selectable elements, rebuilt wholesale on
//! every refresh (no incremental diffing), and the optional visible index
//! window used by virtual scrolling. The registry does not observe the
//! host; callers refresh it after any structural change they want the
//! engine to react to.

use ahash::AHashMap;

use marquee_core::host::{Element, ElementId};

/// The ordered candidate list plus the virtual-scrolling window.
#[derive(Debug, Default)]
pub struct Registry {
    elements: Vec<Element>,
    index_by_id: AHashMap<ElementId, usize>,
    /// Inclusive visible index window; `None` means no virtualization.
    visible_window: Option<(usize, usize)>,
}

impl Registry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the candidate list. Idempotent for an unchanged host tree.
    pub fn replace(&mut self, elements: Vec<Element>) {
        self.index_by_id = elements
            .iter()
            .enumerate()
            .map(|(index, el)| (el.id, index))
            .collect();
        self.elements = elements;
    }

    /// Number of registered candidates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether the registry holds no candidates.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// The candidate at `index`, if in range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Element> {
        self.elements.get(index)
    }

    /// The registry index of a candidate id, if registered.
    #[must_use]
    pub fn index_of(&self, id: ElementId) -> Option<usize> {
        self.index_by_id.get(&id).copied()
    }

    /// Iterate candidates in registry order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Element)> {
        self.elements.iter().enumerate()
    }

    /// Set or clear the inclusive visible index window.
    pub fn set_visible_window(&mut self, window: Option<(usize, usize)>) {
        self.visible_window = window;
    }

    /// The current visible window, if virtualization is active.
    #[must_use]
    pub fn visible_window(&self) -> Option<(usize, usize)> {
        self.visible_window
    }

    /// Whether the candidate at `index` falls inside the visible window.
    /// Always true when no window is set.
    #[must_use]
    pub fn is_visible(&self, index: usize) -> bool {
        match self.visible_window {
            Some((start, end)) => index >= start && index <= end,
            None => true,
        }
    }

    /// Drop all candidates and the visible window.
    pub fn clear(&mut self) {
        self.elements.clear();
        self.index_by_id.clear();
        self.visible_window = None;
    }
}

/// Compute the inclusive visible index window for fixed-height items.
///
/// `start` is the first row whose extent reaches the viewport top; `end`
/// is the last row that starts above the viewport bottom. This is coarse
/// fixed-height virtualization: it assumes uniform item height and does
/// not reflow for variable-height content.
#[must_use]
pub fn visible_window(scroll_top: f32, viewport_height: f32, item_height: f32) -> (usize, usize) {
    if item_height <= 0.0 {
        return (0, usize::MAX);
    }
    let scroll_top = scroll_top.max(0.0);
    let start = (scroll_top / item_height).floor() as usize;
    let end = (((scroll_top + viewport_height.max(0.0)) / item_height).ceil() as usize)
        .saturating_sub(1);
    (start, end.max(start))
}
