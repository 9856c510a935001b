#![forbid(unsafe_code)]

//! Native drag-and-drop adapter.
//!
//! Marks candidates as "being dragged" and fires the dragStart/dragEnd
//! callbacks. Orthogonal to selection: never touches the selected set.

use marquee_core::event::{NativeDragEvent, NativeDragPhase};
use marquee_core::host::ElementHost;

use crate::callbacks::SelectEvent;
use crate::engine::SelectEngine;

impl<H: ElementHost> SelectEngine<H> {
    /// Handle a native drag-and-drop event.
    pub fn handle_native_drag(&mut self, event: &NativeDragEvent) {
        if !self.enabled || !self.options.drag {
            return;
        }
        match event.phase {
            NativeDragPhase::Start => {
                if self.registry.index_of(event.target).is_some()
                    && self.dragged.insert(event.target)
                {
                    self.host.set_candidate_draggable(event.target, true);
                    self.emit(SelectEvent::DragStart { id: event.target });
                }
            }
            NativeDragPhase::End => {
                if self.dragged.remove(&event.target) {
                    self.emit(SelectEvent::DragEnd { id: event.target });
                }
            }
        }
    }

    /// Whether the candidate is currently marked as being dragged.
    #[must_use]
    pub fn is_dragged(&self, id: marquee_core::host::ElementId) -> bool {
        self.dragged.contains(&id)
    }
}
