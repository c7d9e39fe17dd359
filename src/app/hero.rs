use leptos::prelude::*;
use leptos_use::{use_interval_fn, use_media_query};

use super::REDUCED_MOTION_QUERY;
use crate::content::SITE;
use crate::motion::Rotator;

#[component]
pub fn Hero() -> impl IntoView {
    let profile = &SITE.profile;
    let roles = SITE.roles.clone();
    let rotator = StoredValue::new(Rotator::new(roles.len()));
    let (index, set_index) = signal(0_usize);
    let reduced = use_media_query(REDUCED_MOTION_QUERY);

    let _ = use_interval_fn(
        move || {
            if let Some(Some(i)) = rotator.try_update_value(|r| r.advance()) {
                set_index.set(i);
            }
        },
        SITE.motion.role_interval_ms,
    );

    // reduced motion leaves the current role in place for good
    Effect::new(move |_| {
        let reduced = reduced.get();
        rotator.update_value(|r| {
            if reduced {
                r.cancel();
            } else {
                r.start();
            }
        });
    });

    on_cleanup(move || {
        rotator.try_update_value(|r| r.cancel());
    });

    let role = move || roles.get(index.get()).cloned().unwrap_or_default();

    view! {
        <section class="max-w-6xl mx-auto w-full px-4 lg:px-8 py-16 md:py-24 flex flex-col-reverse md:flex-row items-center gap-10">
            <div class="flex-1 space-y-6 text-center md:text-left">
                <span class="inline-block px-3 py-1 rounded-full text-xs font-medium bg-primary/10 text-primary">
                    {profile.location.clone()}
                </span>
                <h1 class="text-4xl md:text-6xl font-bold tracking-tight">
                    "Hi, I'm " <span class="text-primary">{profile.name.clone()}</span>
                </h1>
                <p class="text-xl md:text-2xl font-medium h-8" aria-live="polite">
                    {role}
                </p>
                <p class="max-w-xl text-base leading-relaxed">{profile.tagline.clone()}</p>
                <div class="flex flex-wrap gap-3 justify-center md:justify-start">
                    <a
                        href="#projects"
                        class="px-5 py-2.5 rounded-lg bg-primary text-background font-medium hover:opacity-90"
                    >
                        "View Projects"
                    </a>
                    <a
                        href=profile.resume_path.clone()
                        download=profile.resume_file_name.clone()
                        class="px-5 py-2.5 rounded-lg border border-primary text-primary font-medium hover:bg-primary/10"
                    >
                        "Download Resume"
                    </a>
                </div>
                <ul class="flex gap-4 justify-center md:justify-start text-sm">
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
            <img
                src=profile.avatar.clone()
                alt=profile.name.clone()
                class="w-48 h-48 md:w-72 md:h-72 rounded-full object-cover shadow-2xl ring-4 ring-primary/20"
            />
        </section>
    }
}
