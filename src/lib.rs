use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::JsCast;

pub mod preference;
mod theme;
mod toggle;

pub use theme::{Theme, UnknownTheme};
pub use toggle::ThemeToggle;

// set up the toggle once the document can take it
#[wasm_bindgen(start)]
pub fn start() {
    let document = gloo_utils::document();

    if document.ready_state() == "loading" {
        let init = Closure::once(|| ThemeToggle::new().install());
        document
            .add_event_listener_with_callback("DOMContentLoaded", init.as_ref().unchecked_ref())
            .unwrap();
        init.forget();
    } else {
        ThemeToggle::new().install();
    }
}
