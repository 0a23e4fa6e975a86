use std::cell::Cell;
use std::rc::Rc;

use gloo_console::error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlButtonElement, MediaQueryListEvent, MouseEvent};

use crate::preference;
use crate::theme::Theme;

const TOGGLE_CLASS: &str = "theme-toggle";
const ICON_CLASS: &str = "theme-toggle__icon";
const LABEL_CLASS: &str = "theme-toggle__label";
const THEME_ATTRIBUTE: &str = "data-theme";

/// The one interactive control that changes the page theme.
///
/// Clones share the current theme and the DOM handles, so a clone moved
/// into a listener closure observes the same state as the original.
#[derive(Clone)]
pub struct ThemeToggle {
    theme: Rc<Cell<Theme>>,
    button: HtmlButtonElement,
    icon: Element,
    label: Element,
}

impl ThemeToggle {
    /// Build the toggle button detached from the document.
    pub fn new() -> Self {
        let document = gloo_utils::document();

        let button: HtmlButtonElement = document
            .create_element("button")
            .unwrap()
            .dyn_into()
            .unwrap();
        button.set_type("button");
        button.set_class_name(TOGGLE_CLASS);
        button.set_title("Toggle theme");
        button.set_attribute("aria-pressed", "false").unwrap();

        let icon = document.create_element("span").unwrap();
        icon.set_class_name(ICON_CLASS);
        icon.set_attribute("aria-hidden", "true").unwrap();
        button.append_child(&icon).unwrap();

        let label = document.create_element("span").unwrap();
        label.set_class_name(LABEL_CLASS);
        button.append_child(&label).unwrap();

        Self {
            theme: Rc::new(Cell::new(Theme::Light)),
            button,
            icon,
            label,
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme.get()
    }

    pub fn button(&self) -> &HtmlButtonElement {
        &self.button
    }

    /// Render `theme` on the document root and the control, and record it
    /// as the current theme.
    pub fn apply(&self, theme: Theme) {
        gloo_utils::document_element()
            .set_attribute(THEME_ATTRIBUTE, theme.as_str())
            .unwrap();

        let pressed = if theme.is_dark() { "true" } else { "false" };
        self.button.set_attribute("aria-pressed", pressed).unwrap();
        self.icon.set_text_content(Some(theme.icon()));
        self.label.set_text_content(Some(theme.label()));

        self.theme.set(theme);
    }

    /// Flip the current theme, persist it as the explicit choice and
    /// re-render.
    pub fn flip(&self) {
        let flipped = self.theme.get().flipped();
        preference::save(flipped);
        self.apply(flipped);
    }

    /// React to an OS color-scheme change. A saved choice wins; without
    /// one, follow the OS signal but do not persist it.
    pub fn follow_system(&self, dark: bool) {
        if preference::saved().is_some() {
            return;
        }

        self.apply(Theme::from_dark(dark));
    }

    /// Append the control to the document body, render the initial theme
    /// and leave the click and media-query listeners registered for the
    /// lifetime of the page.
    pub fn install(self) {
        gloo_utils::body().append_child(&self.button).unwrap();
        self.apply(preference::initial_theme());

        let toggle = self.clone();
        let on_click = Closure::wrap(Box::new(move |_: MouseEvent| {
            toggle.flip();
        }) as Box<dyn FnMut(_)>);
        self.button
            .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
            .unwrap();
        on_click.forget();

        // browsers without the media query get no OS-following behavior
        if let Some(query) = preference::dark_scheme_query() {
            let toggle = self.clone();
            let on_change = Closure::wrap(Box::new(move |event: MediaQueryListEvent| {
                toggle.follow_system(event.matches());
            }) as Box<dyn FnMut(_)>);
            if query
                .add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref())
                .is_err()
            {
                error!("Error subscribing to color scheme changes");
            }
            on_change.forget();
        }
    }
}

impl Default for ThemeToggle {
    fn default() -> Self {
        Self::new()
    }
}
