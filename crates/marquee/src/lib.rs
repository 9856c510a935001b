#![forbid(unsafe_code)]

//! Rubber-band (drag-rectangle) multi-selection engine.
//!
//! # Role
//! `marquee` tracks a pointer-drawn rectangle against a dynamic set of
//! candidate elements and maintains a consistent "currently selected" set
//! across mouse, touch, keyboard, and programmatic input. The surrounding
//! UI environment is reached exclusively through the
//! [`ElementHost`](marquee_core::host::ElementHost) seam defined in
//! `marquee-core`.
//!
//! # Primary responsibilities
//! - **SelectEngine**: the single concrete engine type; construction,
//!   public API, and per-source event handlers.
//! - **Registry**: the ordered candidate list and the virtual-scrolling
//!   visibility window.
//! - **SelectionSet**: unique membership, materialized in registry order.
//! - **Options / Callbacks**: flat configuration bag and named lifecycle
//!   callback slots.
//!
//! # Example
//! ```no_run
//! use marquee::{Options, SelectEngine};
//! use marquee_core::host::ContainerTarget;
//! # fn host() -> marquee_harness::TestHost { marquee_harness::TestHost::new() }
//!
//! let mut engine = SelectEngine::new(
//!     host(),
//!     Options::new()
//!         .container(ContainerTarget::Selector("#files".into()))
//!         .selectable(".file-row")
//!         .auto_start(true),
//! )?;
//! engine.select_by_index(0).refresh();
//! # Ok::<(), marquee::SelectError>(())
//! ```

pub mod callbacks;
pub mod drag;
pub mod engine;
pub mod error;
pub mod options;
pub mod registry;
pub mod selection;

pub use callbacks::{EventKind, Handler, SelectEvent};
pub use engine::SelectEngine;
pub use error::{Result, SelectError};
pub use options::{Options, SelectabilityFn};
pub use registry::Registry;
pub use selection::SelectionSet;
