#![forbid(unsafe_code)]

//! Test harness for the marquee engine.
//!
//! [`TestHost`] is a deterministic, fully scripted implementation of the
//! `ElementHost` seam. It records every side effect the engine produces
//! (listener registrations, indicator operations, visibility and
//! draggable toggles) so tests can assert on them, and it shares its
//! state behind an `Rc` so a test can keep a handle for inspection and
//! scroll manipulation after handing the host to the engine.

pub mod host;

pub use host::{IndicatorState, ListenerRecord, TestHost, rows};
