#![forbid(unsafe_code)]

//! Core: input events, geometry, and the host seam for the marquee engine.
//!
//! # Role
//! `marquee-core` is the vocabulary layer. It owns the normalized input
//! event types (pointer, key, touch, native drag), the floating-point
//! geometry used for rectangle/box intersection, and the [`ElementHost`]
//! trait through which the engine reaches its surrounding UI environment.
//!
//! # How it fits in the system
//! The engine (`marquee`) consumes `marquee-core::Event` values and calls
//! back into an [`ElementHost`] for candidate discovery, listener
//! registration, and indicator drawing. The test harness
//! (`marquee-harness`) provides a deterministic host implementation so the
//! engine can be driven without any real UI toolkit.
//!
//! [`ElementHost`]: host::ElementHost

pub mod event;
pub mod geometry;
pub mod host;

pub use event::{
    Event, KeyCode, KeyEvent, KeyEventKind, Modifiers, NativeDragEvent, NativeDragPhase,
    PointerButton, PointerEvent, PointerEventKind, TouchEvent, TouchPhase,
};
pub use geometry::{BoundingBox, Point, Rect};
pub use host::{ContainerTarget, Element, ElementHost, ElementId, ListenTarget, ListenerId, ListenerKind};
