#![forbid(unsafe_code)]

//! The authoritative "currently selected" collection.
//!
//! Membership is unique and unordered; ordered materialization follows
//! candidate registry order. Ids whose elements have been dropped from the
//! registry stay in the set until cleared but are excluded from ordered
//! materialization, matching the registry-order contract.

use ahash::AHashSet;

use marquee_core::host::ElementId;

use crate::registry::Registry;

/// Set of currently selected candidate ids.
#[derive(Debug, Default)]
pub struct SelectionSet {
    items: AHashSet<ElementId>,
}

impl SelectionSet {
    /// Create an empty selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an id. Returns true if it was newly added.
    pub fn insert(&mut self, id: ElementId) -> bool {
        self.items.insert(id)
    }

    /// Remove an id. Returns true if it was present.
    pub fn remove(&mut self, id: ElementId) -> bool {
        self.items.remove(&id)
    }

    /// Membership test.
    #[must_use]
    pub fn contains(&self, id: ElementId) -> bool {
        self.items.contains(&id)
    }

    /// Number of selected ids (including any not currently registered).
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Remove everything.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Replace the membership wholesale.
    pub fn replace(&mut self, items: AHashSet<ElementId>) {
        self.items = items;
    }

    /// Materialize the selection in registry order.
    #[must_use]
    pub fn ordered(&self, registry: &Registry) -> Vec<ElementId> {
        registry
            .iter()
            .filter(|(_, el)| self.items.contains(&el.id))
            .map(|(_, el)| el.id)
            .collect()
    }

    /// Materialize the selected registry indices in registry order.
    #[must_use]
    pub fn ordered_indices(&self, registry: &Registry) -> Vec<usize> {
        registry
            .iter()
            .filter(|(_, el)| self.items.contains(&el.id))
            .map(|(index, _)| index)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use marquee_core::geometry::BoundingBox;
    use marquee_core::host::Element;

    fn registry_of(ids: &[u64]) -> Registry {
        let mut registry = Registry::new();
        registry.replace(
            ids.iter()
                .map(|&id| Element::new(ElementId(id), BoundingBox::default()))
                .collect(),
        );
        registry
    }

    #[test]
    fn insert_is_duplicate_free() {
        let mut set = SelectionSet::new();
        assert!(set.insert(ElementId(1)));
        assert!(!set.insert(ElementId(1)));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn ordered_follows_registry_order() {
        let registry = registry_of(&[30, 10, 20]);
        let mut set = SelectionSet::new();
        set.insert(ElementId(20));
        set.insert(ElementId(30));
        assert_eq!(set.ordered(&registry), vec![ElementId(30), ElementId(20)]);
        assert_eq!(set.ordered_indices(&registry), vec![0, 2]);
    }

    #[test]
    fn ordered_skips_unregistered_ids() {
        let registry = registry_of(&[1, 2]);
        let mut set = SelectionSet::new();
        set.insert(ElementId(2));
        set.insert(ElementId(99));
        assert_eq!(set.ordered(&registry), vec![ElementId(2)]);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn remove_then_contains() {
        let mut set = SelectionSet::new();
        set.insert(ElementId(4));
        assert!(set.remove(ElementId(4)));
        assert!(!set.remove(ElementId(4)));
        assert!(!set.contains(ElementId(4)));
    }
}
