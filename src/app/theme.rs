use codee::string::FromToStringCodec;
use leptos::prelude::*;
use leptos_use::{storage::use_local_storage, use_preferred_dark};

use crate::theme::{Theme, ThemeController, ThemeStore, THEME_KEY};

/// `localStorage` through leptos-use signals.
#[derive(Debug, Clone, Copy)]
struct LocalStorageStore {
    stored: Signal<String>,
    set_stored: WriteSignal<String>,
}

impl ThemeStore for LocalStorageStore {
    fn load(&self) -> Option<Theme> {
        self.stored.get_untracked().parse().ok()
    }

    fn save(&mut self, theme: Theme) {
        self.set_stored.set(theme.to_string());
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ThemeContext {
    controller: StoredValue<Option<ThemeController<LocalStorageStore>>>,
    theme: RwSignal<Option<Theme>>,
}

impl ThemeContext {
    /// Active theme; light until the browser has resolved the real one.
    pub fn theme(&self) -> Theme {
        self.theme.get().unwrap_or_default()
    }

    pub fn toggle(&self) {
        let next = self
            .controller
            .try_update_value(|c| c.as_mut().map(|c| c.toggle()))
            .flatten();
        if let Some(next) = next {
            log::debug!("theme set to {next}");
            self.theme.set(Some(next));
        }
    }
}

pub fn use_theme() -> ThemeContext {
    expect_context::<ThemeContext>()
}

fn apply_theme(theme: Theme) {
    if let Some(root) = document().document_element() {
        root.set_class_name(theme.as_str());
    }
}

#[component]
pub fn ThemeProvider(children: Children) -> impl IntoView {
    let (stored, set_stored, _) = use_local_storage::<String, FromToStringCodec>(THEME_KEY);
    let prefers_dark = use_preferred_dark();
    let ctx = ThemeContext {
        controller: StoredValue::new(None),
        theme: RwSignal::new(None),
    };

    // resolve once on mount; the head script has already painted this theme
    Effect::new(move |_| {
        let controller = ThemeController::init(
            LocalStorageStore { stored, set_stored },
            Some(prefers_dark.get_untracked()),
        );
        ctx.theme.set(Some(controller.theme()));
        ctx.controller.set_value(Some(controller));
    });

    Effect::new(move |_| {
        if let Some(theme) = ctx.theme.get() {
            apply_theme(theme);
        }
    });

    provide_context(ctx);
    children()
}
