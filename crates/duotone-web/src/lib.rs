//! # Duotone web bindings
//!
//! Connects the [`duotone`] controller to a real page: the preference lives
//! in `localStorage`, the theme attribute on `document.documentElement`,
//! and the toggle control is the element with id `theme-toggle`.
//!
//! Loading the wasm module is all the wiring a page needs —
//! [`boot`] runs automatically via `#[wasm_bindgen(start)]`, waits for
//! `DOMContentLoaded` if the document is still parsing, applies the initial
//! theme, and attaches the click handler. Pages that manage their own
//! startup can call the pieces directly:
//!
//! ```rust,ignore
//! use duotone::ThemeController;
//! use duotone_web::{Dom, LocalStorage};
//!
//! let mut controller = ThemeController::new(LocalStorage::new(), Dom::new());
//! controller.initialize();
//! ```

mod dom;
mod storage;

use std::cell::RefCell;
use std::rc::Rc;

use duotone::ThemeController;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::JsCast;

pub use dom::{Dom, TOGGLE_ID};
pub use storage::LocalStorage;

/// Module entry point: wires the theme controller to the page.
///
/// If the document is still parsing, the wiring is deferred to
/// `DOMContentLoaded`; otherwise it runs immediately. Without a window or
/// document (non-browser host) this does nothing.
#[wasm_bindgen(start)]
pub fn boot() {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };

    if document.ready_state() == "loading" {
        let on_ready =
            Closure::wrap(Box::new(move |_: web_sys::Event| wire()) as Box<dyn FnMut(_)>);
        let _ = document
            .add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref());
        on_ready.forget();
    } else {
        wire();
    }
}

/// Builds the controller, applies the initial theme, and attaches the
/// click handler to the toggle control (when one exists).
fn wire() {
    let controller = Rc::new(RefCell::new(ThemeController::new(
        LocalStorage::new(),
        Dom::new(),
    )));
    controller.borrow_mut().initialize();

    let Some(control) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(TOGGLE_ID))
    else {
        return;
    };

    let handler = {
        let controller = Rc::clone(&controller);
        Closure::wrap(Box::new(move |_: web_sys::Event| {
            controller.borrow_mut().toggle();
        }) as Box<dyn FnMut(_)>)
    };
    let _ = control.add_event_listener_with_callback("click", handler.as_ref().unchecked_ref());

    // The control lives as long as the page; leak the closure so the
    // listener stays valid.
    handler.forget();
}
