use gloo_console::error;
use web_sys::MediaQueryList;

use crate::theme::Theme;

pub const STORAGE_KEY: &str = "theme";

const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

fn local_storage() -> Option<web_sys::Storage> {
    gloo_utils::window().local_storage().ok().flatten()
}

/// The user's explicit choice, if one was saved and still parses.
pub fn saved() -> Option<Theme> {
    local_storage()
        .and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten())
        .and_then(|value| value.parse().ok())
}

pub fn save(theme: Theme) {
    let stored = local_storage().map(|storage| storage.set_item(STORAGE_KEY, theme.as_str()));

    if !matches!(stored, Some(Ok(()))) {
        error!("Error saving theme preference");
    }
}

/// The OS color-scheme signal, when the browser exposes it.
pub fn dark_scheme_query() -> Option<MediaQueryList> {
    gloo_utils::window()
        .match_media(DARK_SCHEME_QUERY)
        .ok()
        .flatten()
}

pub fn system_theme() -> Theme {
    Theme::from_dark(dark_scheme_query().map(|query| query.matches()) == Some(true))
}

/// Saved preference when present, the OS preference otherwise.
pub fn initial_theme() -> Theme {
    saved().unwrap_or_else(system_theme)
}
