use leptos::prelude::*;
use leptos_meta::Title;

use crate::content::SITE;

#[component]
pub fn ResumePage() -> impl IntoView {
    let profile = &SITE.profile;
    view! {
        <Title text="Resume" />
        <div class="grid max-w-4xl mx-auto w-full px-4 lg:px-8 py-12">
            <h1 class="font-bold text-3xl text-center mb-8">"Resume"</h1>
            <div
                id="resume"
                class="grid grid-cols-1 md:grid-cols-3 gap-8 p-8 leading-snug shadow-2xl rounded-lg border border-muted/20"
            >
                <div class="space-y-4 text-center">
                    <img
                        src=profile.avatar.clone()
                        alt=profile.name.clone()
                        class="w-32 h-32 mx-auto rounded-full object-cover"
                    />
                    <h2 class="text-2xl font-bold">{profile.name.clone()}</h2>
                    <p class="text-primary font-medium">{profile.headline.clone()}</p>
                    <p class="text-sm">{profile.location.clone()}</p>
                </div>
                <div class="col-span-2 space-y-6">
                    <section>
                        <h3 class="mb-2 border-b pb-0.5 font-bold">"Highlights"</h3>
                        <ul class="grid sm:grid-cols-2 gap-2">
                            {SITE
                                .resume_highlights
                                .iter()
                                .map(|h| {
                                    view! {
                                        <li class="p-3 rounded-lg bg-primary/5 text-sm font-medium">
                                            {h.clone()}
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </section>
                    <div class="flex flex-wrap gap-3">
                        <a
                            href=profile.resume_path.clone()
                            download=profile.resume_file_name.clone()
                            class="px-5 py-2.5 rounded-lg bg-primary text-background font-medium hover:opacity-90"
                        >
                            "Download PDF"
                        </a>
                        <a
                            href=profile.linkedin.clone()
                            target="_blank"
                            rel="noreferrer"
                            class="px-5 py-2.5 rounded-lg border border-primary text-primary font-medium hover:bg-primary/10"
                        >
                            "View LinkedIn"
                        </a>
                    </div>
                </div>
            </div>
        </div>
    }
}
