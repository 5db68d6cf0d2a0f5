//! The seam between navigation components and a document.
//!
//! Components never reach for a global `window` or `document`. They receive a
//! `PageHost` explicitly, which is implemented by the in-memory page
//! ([`crate::page::StaticPage`]) and, with the `wasm` feature, by the browser.

use crate::error::NavError;
use crate::menu::NavEntry;

/// A section element as found in the document, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawSection {
    pub id: Option<String>,
    pub label: Option<String>,
}

impl RawSection {
    pub fn new(id: &str, label: &str) -> Self {
        Self {
            id: Some(id.to_string()),
            label: Some(label.to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    Instant,
    /// Eased animation. Hosts with a native smooth scroll may ignore the duration.
    Smooth { duration_ms: u32 },
}

/// The primary activation of a navigation link (a click, usually).
pub trait LinkActivation {
    fn prevent_default(&mut self);
}

/// Document operations needed by the menu builder, highlighter and scroller.
pub trait PageHost {
    /// Every element with `tag`, in document order, with its `id` and `label_attribute`.
    fn section_elements(&self, tag: &str, label_attribute: &str) -> Vec<RawSection>;

    /// Replace the contents of the container with one `<li><a>` per entry.
    fn replace_menu(
        &mut self,
        container_id: &str,
        entries: &[NavEntry],
        link_class: &str,
    ) -> Result<(), NavError>;

    /// Distance in CSS pixels from the viewport top to the element's top edge.
    /// Negative once the element has scrolled above the viewport.
    fn viewport_top(&self, id: &str) -> Option<f64>;

    /// Document-absolute top edge of the element (`offsetTop`).
    fn offset_top(&self, id: &str) -> Option<f64>;

    fn set_class(&mut self, id: &str, class: &str, present: bool);

    /// Replace the element's inline style.
    fn set_inline_style(&mut self, id: &str, css: &str);

    fn scroll_to(&mut self, top: f64, behavior: ScrollBehavior);
}

/// Activation record for hosts without a real event object.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ClickEvent {
    pub default_prevented: bool,
}

impl LinkActivation for ClickEvent {
    fn prevent_default(&mut self) {
        self.default_prevented = true;
    }
}
