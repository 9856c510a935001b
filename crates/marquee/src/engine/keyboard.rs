#![forbid(unsafe_code)]

//! Keyboard navigator.
//!
//! Bindings: ctrl+`a` selects all, `Escape` clears, arrows move the
//! cursor clamped to the candidate range, shift+arrow extends a range
//! from the previous cursor, ctrl+arrow moves the cursor without touching
//! the selection, `Space` toggles at the cursor.

use marquee_core::event::{KeyCode, KeyEvent, KeyEventKind, Modifiers};
use marquee_core::host::ElementHost;

use crate::engine::{AdmitOrigin, SelectEngine};

impl<H: ElementHost> SelectEngine<H> {
    /// Handle a keyboard event.
    pub fn handle_key(&mut self, event: &KeyEvent) {
        if !self.enabled || !self.options.keyboard {
            return;
        }
        if event.kind != KeyEventKind::Press {
            return;
        }
        match event.code {
            KeyCode::Char('a') if event.ctrl() => {
                self.select_all_internal(AdmitOrigin::Keyboard);
            }
            KeyCode::Escape => {
                self.clear_selection();
            }
            KeyCode::Up | KeyCode::Left => self.move_cursor(-1, event.modifiers),
            KeyCode::Down | KeyCode::Right => self.move_cursor(1, event.modifiers),
            KeyCode::Char(' ') => {
                if let Some(index) = self.cursor
                    && let Some(el) = self.registry.get(index)
                {
                    let id = el.id;
                    self.toggle(id, AdmitOrigin::Keyboard);
                }
            }
            _ => {}
        }
    }

    /// Move the cursor by one position, clamped to `[0, count-1]`.
    ///
    /// A cursor of "none" behaves as one before the first candidate, so
    /// the first arrow press lands on index 0. The cursor only updates
    /// when the computed index differs from the current one.
    fn move_cursor(&mut self, delta: isize, modifiers: Modifiers) {
        let count = self.registry.len();
        if count == 0 {
            return;
        }
        let current = self.cursor.map_or(-1, |c| c as isize);
        let target = (current + delta).clamp(0, count as isize - 1);
        if target == current {
            return;
        }
        let target = target as usize;

        if modifiers.contains(Modifiers::SHIFT) && current >= 0 {
            self.select_range_internal(current as usize, target, AdmitOrigin::Keyboard);
        } else if modifiers.contains(Modifiers::CTRL) {
            // Cursor motion only; selection untouched.
        } else {
            self.select_index_internal(target, true, AdmitOrigin::Keyboard);
        }
        self.cursor = Some(target);
    }
}
