use leptos::prelude::*;
use leptos_router::{components::*, hooks::use_location};
use leptos_use::use_window_scroll;

use super::theme::use_theme;
use crate::content::SITE;
use crate::motion::{ScrollSample, ScrollWatcher, Visibility};
use crate::theme::Theme;

const NAV_ITEMS: [(&str, &str); 4] = [
    ("/", "Home"),
    ("/projects", "Projects"),
    ("/skills", "Skills"),
    ("/resume", "Resume"),
];

fn viewport_height() -> f64 {
    window()
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or_default()
}

fn document_height() -> f64 {
    document()
        .document_element()
        .map(|el| f64::from(el.scroll_height()))
        .unwrap_or_default()
}

#[component]
pub fn Header() -> impl IntoView {
    let motion = &SITE.motion;
    let watcher = StoredValue::new(ScrollWatcher::new(
        motion.header_hide_offset,
        motion.bottom_nav_footer_threshold,
    ));
    let (visibility, set_visibility) = signal(Visibility::default());
    let pathname = use_location().pathname;
    let (_, scroll_y) = use_window_scroll();

    Effect::watch(
        move || pathname.get(),
        move |path, _, _| {
            let pinned = path == "/";
            if let Some(v) = watcher.try_update_value(|w| {
                w.set_pinned(pinned);
                w.visibility()
            }) {
                set_visibility.set(v);
            }
        },
        true,
    );

    Effect::new(move |_| {
        let y = scroll_y.get();
        let sample = ScrollSample {
            y,
            viewport_height: viewport_height(),
            document_height: document_height(),
        };
        let next = watcher
            .try_update_value(|w| {
                w.start(y);
                w.observe(sample)
            })
            .flatten();
        if let Some(v) = next {
            if v != visibility.get_untracked() {
                set_visibility.set(v);
            }
        }
    });

    on_cleanup(move || {
        watcher.try_update_value(|w| w.cancel());
    });

    let is_active = move |href: &str| pathname.with(|p| p == href);
    let (first, last) = SITE
        .profile
        .name
        .split_once(' ')
        .unwrap_or((SITE.profile.name.as_str(), ""));

    view! {
        <header class=move || {
            let shown = if visibility.get().header {
                "translate-y-0 opacity-100"
            } else {
                "-translate-y-full opacity-0"
            };
            format!(
                "hidden md:block fixed top-0 inset-x-0 z-50 backdrop-blur bg-background/80 border-b border-muted/20 transition-all duration-300 {shown}",
            )
        }>
            <div class="max-w-6xl mx-auto px-4 lg:px-8 h-16 flex items-center justify-between">
                <A href="/" attr:class="text-xl font-bold tracking-tight">
                    {first}
                    <span class="text-primary">{last}</span>
                </A>
                <nav class="flex items-center gap-1">
                    {NAV_ITEMS
                        .into_iter()
                        .map(|(href, label)| {
                            view! {
                                <A
                                    href=href
                                    attr:class=move || {
                                        if is_active(href) {
                                            "px-3 py-2 rounded-md text-sm font-medium bg-primary/10 text-primary"
                                        } else {
                                            "px-3 py-2 rounded-md text-sm font-medium hover:bg-muted/20"
                                        }
                                    }
                                >
                                    {label}
                                </A>
                            }
                        })
                        .collect_view()}
                    <ThemeToggle />
                </nav>
            </div>
        </header>

        // mobile top bar
        <div class="md:hidden fixed top-0 inset-x-0 z-50 h-14 px-4 flex items-center justify-between backdrop-blur bg-background/80 border-b border-muted/20">
            <A href="/" attr:class="text-lg font-bold">
                {first}
                <span class="text-primary">{last}</span>
            </A>
            <ThemeToggle />
        </div>

        <nav class=move || {
            let shown = if visibility.get().bottom_nav {
                "translate-y-0"
            } else {
                "translate-y-full"
            };
            format!(
                "md:hidden fixed bottom-0 inset-x-0 z-50 grid grid-cols-4 bg-background/95 border-t border-muted/20 transition-transform duration-300 {shown}",
            )
        }>
            {NAV_ITEMS
                .into_iter()
                .map(|(href, label)| {
                    view! {
                        <A
                            href=href
                            attr:class=move || {
                                if is_active(href) {
                                    "py-3 text-center text-xs font-medium text-primary"
                                } else {
                                    "py-3 text-center text-xs font-medium"
                                }
                            }
                        >
                            {label}
                        </A>
                    }
                })
                .collect_view()}
        </nav>
    }
}

#[component]
fn ThemeToggle() -> impl IntoView {
    let theme = use_theme();
    view! {
        <button
            type="button"
            class="ml-2 p-2 rounded-full hover:bg-muted/20"
            aria-label="Toggle theme"
            on:click=move |_| theme.toggle()
        >
            {move || match theme.theme() {
                Theme::Light => "☾",
                Theme::Dark => "☀",
            }}
        </button>
    }
}
