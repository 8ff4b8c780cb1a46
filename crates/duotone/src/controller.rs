//! The controller that keeps theme, preference, and page consistent.
//!
//! [`ThemeController`] owns the two seams and implements the whole state
//! machine: two states (light, dark), transitions only via [`toggle`],
//! initial state decided by the storage → attribute → default priority.
//!
//! ```rust
//! use duotone::{MemoryDocument, MemoryStore, Theme, ThemeController};
//!
//! let mut controller = ThemeController::new(MemoryStore::new(), MemoryDocument::new());
//! assert_eq!(controller.initialize(), Theme::Light);
//! assert_eq!(controller.toggle(), Theme::Dark);
//! assert_eq!(controller.document().attribute(), Some("dark"));
//! ```
//!
//! [`toggle`]: ThemeController::toggle

use tracing::warn;

use crate::document::DocumentSurface;
use crate::store::{PreferenceStore, STORAGE_KEY};
use crate::theme::Theme;

/// The toggle control's text for each direction.
///
/// The label always names the theme a click would switch *to*: while the
/// page is light the control offers dark, and vice versa. Hosts replace the
/// defaults to localize.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleLabels {
    /// Shown while dark is active.
    pub to_light: String,
    /// Shown while light is active.
    pub to_dark: String,
}

impl Default for ToggleLabels {
    fn default() -> Self {
        Self {
            to_light: "Switch to light theme".to_string(),
            to_dark: "Switch to dark theme".to_string(),
        }
    }
}

/// Keeps the theme, the persisted preference, the document attribute, and
/// the toggle control mutually consistent.
pub struct ThemeController<S, D> {
    store: S,
    document: D,
    labels: ToggleLabels,
}

impl<S: PreferenceStore, D: DocumentSurface> ThemeController<S, D> {
    /// A controller over the given seams, with the default English labels.
    pub fn new(store: S, document: D) -> Self {
        Self {
            store,
            document,
            labels: ToggleLabels::default(),
        }
    }

    /// Replaces the toggle labels, builder style.
    pub fn with_labels(mut self, labels: ToggleLabels) -> Self {
        self.labels = labels;
        self
    }

    /// Applies a theme to the page.
    ///
    /// Accepts anything that normalizes to a [`Theme`] — a raw attribute
    /// string, an `Option`, or a `Theme` itself; invalid input becomes
    /// [`Theme::Light`], never an error. Writes the theme attribute and,
    /// when the toggle control is present, its label and pressed flag.
    /// Returns the normalized theme.
    pub fn apply(&mut self, requested: impl Into<Theme>) -> Theme {
        let theme = requested.into();
        self.document.set_theme_attribute(theme);
        if self.document.has_toggle() {
            let label = if theme.is_dark() {
                &self.labels.to_light
            } else {
                &self.labels.to_dark
            };
            self.document.set_toggle_state(label, theme.is_dark());
        }
        theme
    }

    /// Picks the initial theme and applies it. Runs once, at page ready.
    ///
    /// Priority: persisted preference, then an existing document attribute,
    /// then light. A storage read failure is logged and counts as "no
    /// preference".
    pub fn initialize(&mut self) -> Theme {
        let stored = match self.store.get(STORAGE_KEY) {
            Ok(value) => value,
            Err(err) => {
                warn!(%err, "could not read the theme preference");
                None
            }
        };
        let initial = stored.or_else(|| self.document.theme_attribute());
        self.apply(Theme::from(initial.as_deref()))
    }

    /// Flips the theme: the click handler's body.
    ///
    /// Reads the current document attribute, flips it, persists the new
    /// value, and applies it. A storage write failure is logged and does
    /// not block the visual change. Returns the new theme.
    pub fn toggle(&mut self) -> Theme {
        let next = self.current().toggled();
        if let Err(err) = self.store.set(STORAGE_KEY, next.as_str()) {
            warn!(%err, "could not persist the theme preference");
        }
        self.apply(next)
    }

    /// The active theme, read back from the document attribute.
    pub fn current(&self) -> Theme {
        Theme::from(self.document.theme_attribute().as_deref())
    }

    /// The storage seam, for inspection in tests.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The document seam, for inspection in tests.
    pub fn document(&self) -> &D {
        &self.document
    }
}
