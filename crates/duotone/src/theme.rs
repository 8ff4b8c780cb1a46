//! The binary theme value and its normalization rules.
//!
//! A page is either light or dark; there is no third state. Every value
//! that reaches this type from the outside world (persisted storage, the
//! document attribute, caller input) passes through the same normalization:
//! the literal string `"dark"` means [`Theme::Dark`], anything else —
//! unknown strings, the empty string, an absent value — means
//! [`Theme::Light`].
//!
//! ```rust
//! use duotone::Theme;
//!
//! assert_eq!(Theme::from("dark"), Theme::Dark);
//! assert_eq!(Theme::from("Dark"), Theme::Light);
//! assert_eq!(Theme::from(None), Theme::Light);
//! assert_eq!(Theme::Dark.toggled(), Theme::Light);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// The page's visual mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light mode (light background, dark text). The default.
    #[default]
    Light,
    /// Dark mode (dark background, light text).
    Dark,
}

impl Theme {
    /// The lowercase name, as stored and as written to `data-theme`.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// The other theme.
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Whether this is [`Theme::Dark`]. Drives the toggle's pressed flag.
    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

impl From<&str> for Theme {
    /// Normalizes an arbitrary string. Only the exact literal `"dark"`
    /// produces [`Theme::Dark`].
    fn from(value: &str) -> Self {
        if value == "dark" {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

impl From<Option<&str>> for Theme {
    /// An absent value normalizes to [`Theme::Light`].
    fn from(value: Option<&str>) -> Self {
        value.map_or(Theme::Light, Theme::from)
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn only_the_dark_literal_is_dark() {
        assert_eq!(Theme::from("dark"), Theme::Dark);
        assert_eq!(Theme::from("light"), Theme::Light);
        assert_eq!(Theme::from(""), Theme::Light);
        assert_eq!(Theme::from("DARK"), Theme::Light);
        assert_eq!(Theme::from("dark "), Theme::Light);
        assert_eq!(Theme::from("darkness"), Theme::Light);
        assert_eq!(Theme::from(None), Theme::Light);
        assert_eq!(Theme::from(Some("dark")), Theme::Dark);
    }

    #[test]
    fn toggling_flips_and_round_trips() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }

    #[test]
    fn string_form_matches_the_stored_values() {
        assert_eq!(Theme::Light.as_str(), "light");
        assert_eq!(Theme::Dark.as_str(), "dark");
        assert_eq!(Theme::Light.to_string(), "light");
        assert_eq!(Theme::default(), Theme::Light);
    }

    #[test]
    fn serde_uses_the_lowercase_names() {
        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
        assert_eq!(
            serde_json::from_str::<Theme>("\"light\"").unwrap(),
            Theme::Light
        );
    }

    proptest! {
        #[test]
        fn normalization_is_total_and_binary(input in ".*") {
            let theme = Theme::from(input.as_str());
            prop_assert!(theme == Theme::Light || theme == Theme::Dark);
            prop_assert_eq!(theme == Theme::Dark, input == "dark");
        }

        #[test]
        fn normalization_round_trips_through_the_string_form(input in ".*") {
            let theme = Theme::from(input.as_str());
            prop_assert_eq!(Theme::from(theme.as_str()), theme);
        }
    }
}
