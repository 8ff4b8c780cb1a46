//! End-to-end walk through the theme lifecycle: first visit, two clicks,
//! and a reload that picks the persisted choice back up.

use duotone::{MemoryDocument, MemoryStore, PreferenceStore, Theme, ThemeController, STORAGE_KEY};

#[test]
fn first_visit_then_two_clicks() {
    // First visit: nothing stored, no attribute on the page.
    let mut controller = ThemeController::new(MemoryStore::new(), MemoryDocument::new());
    controller.initialize();

    assert_eq!(controller.document().attribute(), Some("light"));
    let toggle = controller.document().toggle().unwrap();
    assert_eq!(toggle.label, "Switch to dark theme");
    assert!(!toggle.pressed);
    assert_eq!(controller.store().get(STORAGE_KEY).unwrap(), None);

    // First click: dark, persisted.
    assert_eq!(controller.toggle(), Theme::Dark);
    assert_eq!(controller.document().attribute(), Some("dark"));
    assert_eq!(
        controller.store().get(STORAGE_KEY).unwrap().as_deref(),
        Some("dark")
    );
    let toggle = controller.document().toggle().unwrap();
    assert_eq!(toggle.label, "Switch to light theme");
    assert!(toggle.pressed);

    // Second click: back to light, persisted again.
    assert_eq!(controller.toggle(), Theme::Light);
    assert_eq!(controller.document().attribute(), Some("light"));
    assert_eq!(
        controller.store().get(STORAGE_KEY).unwrap().as_deref(),
        Some("light")
    );
}

#[test]
fn reload_restores_the_persisted_choice() {
    // A fresh page whose markup says light, but whose visitor chose dark
    // on a previous visit.
    let store = MemoryStore::new().with(STORAGE_KEY, "dark");
    let document = MemoryDocument::new().with_attribute("light");

    let mut controller = ThemeController::new(store, document);
    assert_eq!(controller.initialize(), Theme::Dark);
    assert_eq!(controller.document().attribute(), Some("dark"));
    assert!(controller.document().toggle().unwrap().pressed);
}

#[test]
fn markup_default_is_honored_when_nothing_is_stored() {
    let document = MemoryDocument::new().with_attribute("dark");
    let mut controller = ThemeController::new(MemoryStore::new(), document);

    assert_eq!(controller.initialize(), Theme::Dark);
    // Initialization applies but does not persist; only a click does.
    assert_eq!(controller.store().get(STORAGE_KEY).unwrap(), None);
}
