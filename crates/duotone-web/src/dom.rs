//! Live-DOM document surface.

use duotone::{DocumentSurface, Theme};

/// The element id the toggle control is looked up by.
pub const TOGGLE_ID: &str = "theme-toggle";

/// The attribute on the root element that CSS selectors key off of.
const THEME_ATTR: &str = "data-theme";

/// The accessibility pressed flag on the toggle control.
const PRESSED_ATTR: &str = "aria-pressed";

/// [`DocumentSurface`] over the browser document.
///
/// Elements are looked up per operation, so a toggle control added or
/// removed after load is picked up naturally. A missing window, document,
/// or control degrades every write to a no-op.
#[derive(Debug, Clone, Copy, Default)]
pub struct Dom;

impl Dom {
    pub fn new() -> Self {
        Self
    }

    fn document(&self) -> Option<web_sys::Document> {
        web_sys::window().and_then(|window| window.document())
    }

    fn root(&self) -> Option<web_sys::Element> {
        self.document().and_then(|doc| doc.document_element())
    }

    fn toggle(&self) -> Option<web_sys::Element> {
        self.document().and_then(|doc| doc.get_element_by_id(TOGGLE_ID))
    }
}

impl DocumentSurface for Dom {
    fn theme_attribute(&self) -> Option<String> {
        self.root().and_then(|root| root.get_attribute(THEME_ATTR))
    }

    fn set_theme_attribute(&mut self, theme: Theme) {
        if let Some(root) = self.root() {
            let _ = root.set_attribute(THEME_ATTR, theme.as_str());
        }
    }

    fn has_toggle(&self) -> bool {
        self.toggle().is_some()
    }

    fn set_toggle_state(&mut self, label: &str, pressed: bool) {
        if let Some(control) = self.toggle() {
            control.set_text_content(Some(label));
            let _ = control.set_attribute(PRESSED_ATTR, if pressed { "true" } else { "false" });
        }
    }
}
