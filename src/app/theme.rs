use codee::string::FromToStringCodec;
use leptos::prelude::*;
use leptos_use::{storage::use_local_storage, use_preferred_dark};

use crate::theme::{Theme, DARK_CLASS, THEME_STORAGE_KEY};

#[derive(Clone, Copy)]
pub struct ThemeController {
    theme: Memo<Theme>,
    set_stored: WriteSignal<String>,
}

impl ThemeController {
    pub fn theme(&self) -> Theme {
        self.theme.get()
    }

    /// Flips the theme and persists it; the root class follows.
    pub fn toggle(&self) {
        let next = self.theme.get_untracked().toggled();
        self.set_stored.set(next.to_string());
    }
}

/// Resolves the initial theme, keeps the document root class in sync and
/// provides the controller as context.
///
/// When local storage is unavailable the stored signal stays in memory, so
/// the preference lasts for the session only.
pub fn use_theme() -> ThemeController {
    let (stored, set_stored, _) = use_local_storage::<String, FromToStringCodec>(THEME_STORAGE_KEY);
    let prefers_dark = use_preferred_dark();

    let theme = Memo::new(move |_| {
        stored.with(|s| Theme::resolve(Some(s.as_str()), Some(prefers_dark.get())))
    });

    Effect::new(move |_| {
        let dark = theme.get().is_dark();
        let Some(root) = document().document_element() else {
            return;
        };
        if let Err(err) = root.class_list().toggle_with_force(DARK_CLASS, dark) {
            log::warn!("couldn't apply theme: {err:?}");
        }
    });

    let controller = ThemeController { theme, set_stored };
    provide_context(controller);
    controller
}

pub fn use_theme_controller() -> ThemeController {
    expect_context::<ThemeController>()
}
