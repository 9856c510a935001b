#![forbid(unsafe_code)]

//! Canonical input event types.
//!
//! The engine consumes these normalized events regardless of which UI
//! environment produced them. All events derive `Clone` and `PartialEq`
//! for use in tests and pattern matching.
//!
//! # Design Notes
//!
//! - Pointer and touch positions are client coordinates (the engine
//!   converts to container-relative space itself, using the host's
//!   container origin and scroll offset).
//! - `Modifiers` use bitflags for easy combination.
//! - Touch events carry no timestamp; handlers that classify taps take an
//!   explicit `now` argument instead.

use bitflags::bitflags;

use crate::geometry::Point;
use crate::host::ElementId;

/// Canonical input event.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// A pointer (mouse) event.
    Pointer(PointerEvent),

    /// A keyboard event.
    Key(KeyEvent),

    /// A touch event.
    Touch(TouchEvent),

    /// A native drag-and-drop event over a candidate element.
    NativeDrag(NativeDragEvent),

    /// The container was scrolled.
    Scroll,
}

bitflags! {
    /// Modifier keys held during a pointer or key event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// No modifiers.
        const NONE  = 0b0000;
        /// Shift key.
        const SHIFT = 0b0001;
        /// Alt/Option key.
        const ALT   = 0b0010;
        /// Control key.
        const CTRL  = 0b0100;
        /// Super/Meta/Command key.
        const SUPER = 0b1000;
    }
}

impl Default for Modifiers {
    fn default() -> Self {
        Self::NONE
    }
}

/// A pointer (mouse) event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// The type of pointer event.
    pub kind: PointerEventKind,

    /// Position in client coordinates.
    pub position: Point,

    /// Modifier keys held during the event.
    pub modifiers: Modifiers,
}

impl PointerEvent {
    /// Create a new pointer event.
    #[must_use]
    pub const fn new(kind: PointerEventKind, x: f32, y: f32) -> Self {
        Self {
            kind,
            position: Point::new(x, y),
            modifiers: Modifiers::NONE,
        }
    }

    /// Create a pointer event with modifiers.
    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Primary-button press shorthand.
    #[must_use]
    pub const fn down(x: f32, y: f32) -> Self {
        Self::new(PointerEventKind::Down(PointerButton::Primary), x, y)
    }

    /// Pointer move shorthand.
    #[must_use]
    pub const fn moved(x: f32, y: f32) -> Self {
        Self::new(PointerEventKind::Move, x, y)
    }

    /// Primary-button release shorthand.
    #[must_use]
    pub const fn up(x: f32, y: f32) -> Self {
        Self::new(PointerEventKind::Up(PointerButton::Primary), x, y)
    }
}

/// The type of pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerEventKind {
    /// Button pressed down.
    Down(PointerButton),

    /// Pointer moved (with or without a button held).
    Move,

    /// Button released.
    Up(PointerButton),
}

/// Pointer button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// The primary (usually left) button. Only this button starts a drag.
    Primary,

    /// The secondary (usually right) button.
    Secondary,

    /// The auxiliary (usually middle) button.
    Auxiliary,
}

/// A keyboard event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    /// The key that was pressed.
    pub code: KeyCode,

    /// Modifier keys held during the event.
    pub modifiers: Modifiers,

    /// Press or release.
    pub kind: KeyEventKind,
}

impl KeyEvent {
    /// Create a new key press with no modifiers.
    #[must_use]
    pub const fn new(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: Modifiers::NONE,
            kind: KeyEventKind::Press,
        }
    }

    /// Create a key event with modifiers.
    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Create a key event with a specific kind.
    #[must_use]
    pub const fn with_kind(mut self, kind: KeyEventKind) -> Self {
        self.kind = kind;
        self
    }

    /// Check if Ctrl modifier is held.
    #[must_use]
    pub const fn ctrl(&self) -> bool {
        self.modifiers.contains(Modifiers::CTRL)
    }

    /// Check if Shift modifier is held.
    #[must_use]
    pub const fn shift(&self) -> bool {
        self.modifiers.contains(Modifiers::SHIFT)
    }
}

/// Key codes relevant to selection handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A regular character key.
    Char(char),

    /// Enter/Return key.
    Enter,

    /// Escape key.
    Escape,

    /// Tab key.
    Tab,

    /// Up arrow key.
    Up,

    /// Down arrow key.
    Down,

    /// Left arrow key.
    Left,

    /// Right arrow key.
    Right,

    /// Home key.
    Home,

    /// End key.
    End,
}

/// The type of key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KeyEventKind {
    /// Key was pressed.
    #[default]
    Press,

    /// Key was released.
    Release,
}

/// A touch event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchEvent {
    /// The phase of the touch sequence.
    pub phase: TouchPhase,

    /// Position of the (first) touch point in client coordinates.
    pub position: Point,
}

impl TouchEvent {
    /// Create a new touch event.
    #[must_use]
    pub const fn new(phase: TouchPhase, x: f32, y: f32) -> Self {
        Self {
            phase,
            position: Point::new(x, y),
        }
    }
}

/// The phase of a touch sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TouchPhase {
    /// First contact.
    Start,

    /// Contact moved.
    Move,

    /// Contact lifted. The position is the release point.
    End,
}

/// A native drag-and-drop event targeting a specific element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NativeDragEvent {
    /// The phase of the native drag.
    pub phase: NativeDragPhase,

    /// The element under the drag.
    pub target: ElementId,
}

impl NativeDragEvent {
    /// Create a new native drag event.
    #[must_use]
    pub const fn new(phase: NativeDragPhase, target: ElementId) -> Self {
        Self { phase, target }
    }
}

/// The phase of a native drag-and-drop interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NativeDragPhase {
    /// Drag started over the target.
    Start,

    /// Drag ended.
    End,
}
