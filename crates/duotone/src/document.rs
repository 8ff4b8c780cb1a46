//! The document seam: theme attribute and toggle control.
//!
//! Two pieces of the page belong to this system. The root element's theme
//! attribute is what CSS keys off of; it doubles as a fallback theme source
//! at initialization. The toggle control is the button a user clicks; it is
//! optional, and every write to it is skipped when it is absent.
//!
//! [`MemoryDocument`] is the recording implementation used by the core's
//! own tests. The web crate implements the trait over the live DOM.

use crate::theme::Theme;

/// The page surface the controller reads and writes.
pub trait DocumentSurface {
    /// The raw value of the root element's theme attribute, if set.
    ///
    /// Returned unnormalized; normalization is the controller's job.
    fn theme_attribute(&self) -> Option<String>;

    /// Writes `theme` to the root element's theme attribute.
    fn set_theme_attribute(&mut self, theme: Theme);

    /// Whether the toggle control exists in the document.
    fn has_toggle(&self) -> bool;

    /// Updates the toggle control's text label and pressed flag.
    ///
    /// Implementations must treat a missing control as a no-op rather than
    /// an error.
    fn set_toggle_state(&mut self, label: &str, pressed: bool);
}

/// What the toggle control currently shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToggleState {
    /// The control's text label.
    pub label: String,
    /// The accessibility pressed flag (`true` when dark is active).
    pub pressed: bool,
}

/// In-memory [`DocumentSurface`] that records every write.
///
/// Built with a toggle control by default; [`MemoryDocument::bare`] models
/// a page without one.
#[derive(Debug)]
pub struct MemoryDocument {
    attribute: Option<String>,
    toggle: Option<ToggleState>,
}

impl MemoryDocument {
    /// A document with no theme attribute and a toggle control present.
    pub fn new() -> Self {
        Self {
            attribute: None,
            toggle: Some(ToggleState::default()),
        }
    }

    /// A document without a toggle control.
    pub fn bare() -> Self {
        Self {
            attribute: None,
            toggle: None,
        }
    }

    /// Seeds the theme attribute, builder style.
    pub fn with_attribute(mut self, value: &str) -> Self {
        self.attribute = Some(value.to_string());
        self
    }

    /// The current attribute value, for assertions.
    pub fn attribute(&self) -> Option<&str> {
        self.attribute.as_deref()
    }

    /// The toggle control's recorded state, if the control exists.
    pub fn toggle(&self) -> Option<&ToggleState> {
        self.toggle.as_ref()
    }
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentSurface for MemoryDocument {
    fn theme_attribute(&self) -> Option<String> {
        self.attribute.clone()
    }

    fn set_theme_attribute(&mut self, theme: Theme) {
        self.attribute = Some(theme.as_str().to_string());
    }

    fn has_toggle(&self) -> bool {
        self.toggle.is_some()
    }

    fn set_toggle_state(&mut self, label: &str, pressed: bool) {
        if let Some(toggle) = self.toggle.as_mut() {
            toggle.label = label.to_string();
            toggle.pressed = pressed;
        }
    }
}
