//! # Duotone — persistent light/dark theme state
//!
//! `duotone` keeps a page's binary light/dark theme synchronized between
//! three places:
//!
//! - a **persisted preference** (key-value storage under the key `"theme"`),
//! - the **document theme attribute** (`data-theme` on the root element,
//!   the hook CSS selectors key off of),
//! - an optional **toggle control** (text label plus `aria-pressed` flag).
//!
//! The core is deliberately environment-free: storage and document are
//! trait seams ([`PreferenceStore`], [`DocumentSurface`]) with in-memory
//! implementations, so the whole state machine runs and tests natively.
//! The companion `duotone-web` crate binds the seams to `localStorage` and
//! the live DOM and wires the click handler.
//!
//! ## Quick Start
//!
//! ```rust
//! use duotone::{MemoryDocument, MemoryStore, Theme, ThemeController};
//!
//! let mut controller = ThemeController::new(MemoryStore::new(), MemoryDocument::new());
//!
//! // Nothing stored, no attribute: the page comes up light.
//! assert_eq!(controller.initialize(), Theme::Light);
//!
//! // A click flips the theme and persists the choice.
//! assert_eq!(controller.toggle(), Theme::Dark);
//! assert_eq!(controller.document().attribute(), Some("dark"));
//! ```
//!
//! ## Normalization
//!
//! Every theme value entering the system is normalized: the literal
//! `"dark"` means [`Theme::Dark`], anything else means [`Theme::Light`].
//! There is no invalid input and no rejection path.
//!
//! ## Initial theme priority
//!
//! [`ThemeController::initialize`] picks the first available source:
//! persisted preference, then an existing document attribute, then light.

mod controller;
mod document;
mod error;
mod store;
mod theme;

pub use controller::{ThemeController, ToggleLabels};
pub use document::{DocumentSurface, MemoryDocument, ToggleState};
pub use error::StoreError;
pub use store::{MemoryStore, PreferenceStore, STORAGE_KEY};
pub use theme::Theme;
