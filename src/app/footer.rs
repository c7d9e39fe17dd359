use chrono::{DateTime, Datelike};
use leptos::prelude::*;

use crate::content::SITE;

fn build_year() -> Option<i32> {
    DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .ok()
        .map(|t| t.year())
}

#[component]
pub fn Footer() -> impl IntoView {
    let year = build_year().map(|y| format!("© {y} ")).unwrap_or_else(|| "© ".to_string());
    view! {
        <footer class="mt-16 mb-16 md:mb-0 border-t border-muted/20">
            <div class="max-w-6xl mx-auto px-4 lg:px-8 py-8 flex flex-col md:flex-row items-center justify-between gap-4 text-sm">
                <p>{year} {SITE.profile.name.clone()} " • All rights reserved"</p>
                <ul class="flex gap-4">
                    {SITE
                        .socials
                        .iter()
                        .map(|s| {
                            let external = s.is_external();
                            view! {
                                <li>
                                    <a
                                        href=s.href.clone()
                                        target=external.then_some("_blank")
                                        rel=external.then_some("noopener noreferrer")
                                        class="hover:text-primary"
                                    >
                                        {s.label.clone()}
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
        </footer>
    }
}
