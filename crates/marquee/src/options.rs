#![forbid(unsafe_code)]

//! Engine configuration.
//!
//! [`Options`] is a flat bag merged over documented defaults via builder
//! methods. The style bag is pass-through: the engine hands it to the host
//! verbatim when creating the indicator element and never interprets it.

use web_time::Duration;

use marquee_core::host::{ContainerTarget, Element};

use crate::callbacks::{Callbacks, EventKind, Handler};

/// Caller-supplied predicate deciding whether a candidate may be admitted
/// to the selection.
pub type SelectabilityFn = Box<dyn Fn(&Element) -> bool>;

/// Thresholds and defaults for the selection engine.
pub struct Options {
    /// How to resolve the container (default: selector `#mselect`).
    pub container: ContainerTarget,
    /// Selector for candidate elements within the container (default: `*`).
    pub selectable: String,
    /// Pass-through style bag for the indicator element.
    pub style: Vec<(String, String)>,
    /// Whether drags accumulate onto the existing selection (default: true).
    /// When false, pressing to start a drag clears the selection first.
    pub multi_select: bool,
    /// Enable the engine immediately at construction (default: false).
    pub auto_start: bool,
    /// Enable keyboard navigation (default: true).
    pub keyboard: bool,
    /// Enable touch input (default: true).
    pub touch: bool,
    /// Enable native drag-and-drop marking (default: false).
    pub drag: bool,
    /// Enable the virtual-scrolling visibility window (default: false).
    pub virtual_scrolling: bool,
    /// Fixed per-item height for virtual scrolling (default: 50.0).
    pub virtual_item_height: f32,
    /// Maximum per-axis movement for a touch tap (default: 10.0).
    pub tap_max_distance: f32,
    /// Maximum duration for a touch tap (default: 300ms).
    pub tap_timeout: Duration,
    /// Optional selectability predicate (default: everything selectable).
    pub selectability: Option<SelectabilityFn>,
    /// Named callback slots.
    pub callbacks: Callbacks,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            container: ContainerTarget::Selector("#mselect".to_string()),
            selectable: "*".to_string(),
            style: default_indicator_style(),
            multi_select: true,
            auto_start: false,
            keyboard: true,
            touch: true,
            drag: false,
            virtual_scrolling: false,
            virtual_item_height: 50.0,
            tap_max_distance: 10.0,
            tap_timeout: Duration::from_millis(300),
            selectability: None,
            callbacks: Callbacks::new(),
        }
    }
}

impl Options {
    /// Create options with all defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the container target.
    #[must_use]
    pub fn container(mut self, target: ContainerTarget) -> Self {
        self.container = target;
        self
    }

    /// Set the candidate selector.
    #[must_use]
    pub fn selectable(mut self, selector: impl Into<String>) -> Self {
        self.selectable = selector.into();
        self
    }

    /// Replace the indicator style bag.
    #[must_use]
    pub fn style(mut self, style: Vec<(String, String)>) -> Self {
        self.style = style;
        self
    }

    /// Set the multi-select flag.
    #[must_use]
    pub fn multi_select(mut self, multi: bool) -> Self {
        self.multi_select = multi;
        self
    }

    /// Enable the engine at construction.
    #[must_use]
    pub fn auto_start(mut self, auto: bool) -> Self {
        self.auto_start = auto;
        self
    }

    /// Enable or disable keyboard navigation.
    #[must_use]
    pub fn keyboard(mut self, enabled: bool) -> Self {
        self.keyboard = enabled;
        self
    }

    /// Enable or disable touch input.
    #[must_use]
    pub fn touch(mut self, enabled: bool) -> Self {
        self.touch = enabled;
        self
    }

    /// Enable or disable native drag-and-drop marking.
    #[must_use]
    pub fn drag(mut self, enabled: bool) -> Self {
        self.drag = enabled;
        self
    }

    /// Enable virtual scrolling with the given item height.
    #[must_use]
    pub fn virtual_scrolling(mut self, item_height: f32) -> Self {
        self.virtual_scrolling = true;
        self.virtual_item_height = item_height;
        self
    }

    /// Set the selectability predicate.
    #[must_use]
    pub fn selectability(mut self, predicate: SelectabilityFn) -> Self {
        self.selectability = Some(predicate);
        self
    }

    /// Install a callback handler for `kind`.
    #[must_use]
    pub fn on(mut self, kind: EventKind, handler: Handler) -> Self {
        self.callbacks.set(kind, handler);
        self
    }
}

impl std::fmt::Debug for Options {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Options")
            .field("container", &self.container)
            .field("selectable", &self.selectable)
            .field("multi_select", &self.multi_select)
            .field("auto_start", &self.auto_start)
            .field("keyboard", &self.keyboard)
            .field("touch", &self.touch)
            .field("drag", &self.drag)
            .field("virtual_scrolling", &self.virtual_scrolling)
            .field("virtual_item_height", &self.virtual_item_height)
            .field("has_selectability", &self.selectability.is_some())
            .field("callbacks", &self.callbacks)
            .finish()
    }
}

/// The documented default look of the indicator element.
fn default_indicator_style() -> Vec<(String, String)> {
    [
        ("position", "absolute"),
        ("opacity", "0.25"),
        ("display", "block"),
        ("border", "1px solid #00bfff"),
        ("background", "rgba(135, 206, 250, 0.3)"),
        ("z-index", "9999"),
        ("pointer-events", "none"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documentation() {
        let options = Options::default();
        assert_eq!(
            options.container,
            ContainerTarget::Selector("#mselect".into())
        );
        assert_eq!(options.selectable, "*");
        assert!(options.multi_select);
        assert!(!options.auto_start);
        assert!(options.keyboard);
        assert!(options.touch);
        assert!(!options.drag);
        assert!(!options.virtual_scrolling);
        assert_eq!(options.virtual_item_height, 50.0);
        assert_eq!(options.tap_max_distance, 10.0);
        assert_eq!(options.tap_timeout, Duration::from_millis(300));
        assert!(options.selectability.is_none());
    }

    #[test]
    fn builder_overrides_defaults() {
        let options = Options::new()
            .selectable(".item")
            .multi_select(false)
            .virtual_scrolling(32.0)
            .drag(true);
        assert_eq!(options.selectable, ".item");
        assert!(!options.multi_select);
        assert!(options.virtual_scrolling);
        assert_eq!(options.virtual_item_height, 32.0);
        assert!(options.drag);
    }
}
