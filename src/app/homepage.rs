use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use super::{
    contact::Contact, hero::Hero, loading::LoadingScreen, marquee::Marquee, LoadingGate,
};
use crate::content::SITE;

#[component]
pub fn HomePage() -> impl IntoView {
    let gate = expect_context::<LoadingGate>();
    let on_complete = Callback::new(move |_: ()| {
        if gate.mark_done() {
            log::info!("intro finished");
        }
    });

    view! {
        <Title text="Home" />
        <Show
            when=move || gate.is_done()
            fallback=move || view! { <LoadingScreen on_complete /> }
        >
            <Hero />
            <About />
            <Experience />
            <FeaturedProjects />
            <Contact />
        </Show>
    }
}

#[component]
fn About() -> impl IntoView {
    let profile = &SITE.profile;
    view! {
        <section id="about" class="max-w-6xl mx-auto w-full px-4 lg:px-8 py-16">
            <h2 class="text-3xl font-bold mb-8">"About Me"</h2>
            <div class="grid md:grid-cols-2 gap-10">
                <div class="space-y-4">
                    {profile
                        .about
                        .iter()
                        .map(|p| view! { <p class="text-base leading-relaxed">{p.clone()}</p> })
                        .collect_view()}
                </div>
                <div class="grid sm:grid-cols-2 gap-4">
                    {profile
                        .focus
                        .iter()
                        .map(|f| {
                            view! {
                                <div class="p-4 rounded-xl border border-muted/20 hover:border-primary/40 transition-colors">
                                    <h3 class="font-bold mb-1">{f.title.clone()}</h3>
                                    <p class="text-sm">{f.detail.clone()}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn Experience() -> impl IntoView {
    view! {
        <section id="experience" class="max-w-6xl mx-auto w-full px-4 lg:px-8 py-16">
            <h2 class="text-3xl font-bold mb-8">"Experience"</h2>
            <ol class="relative border-l border-muted/30 space-y-10 ml-2">
                {SITE
                    .experience
                    .iter()
                    .map(|e| {
                        view! {
                            <li class="ml-6">
                                <span class=if e.current {
                                    "absolute -left-1.5 w-3 h-3 rounded-full bg-primary"
                                } else {
                                    "absolute -left-1.5 w-3 h-3 rounded-full bg-muted"
                                } />
                                <div class="flex flex-wrap items-baseline justify-between gap-2">
                                    <h3 class="text-lg font-bold">
                                        {e.title.clone()} " · "
                                        <span class="text-primary">{e.company.clone()}</span>
                                    </h3>
                                    <span class="text-sm font-mono">{e.period.clone()}</span>
                                </div>
                                <p class="text-sm mb-2">{e.location.clone()}</p>
                                <ul class="list-disc ml-5 space-y-1 text-sm">
                                    {e
                                        .highlights
                                        .iter()
                                        .map(|h| view! { <li>{h.clone()}</li> })
                                        .collect_view()}
                                </ul>
                            </li>
                        }
                    })
                    .collect_view()}
            </ol>
        </section>
    }
}

#[component]
fn FeaturedProjects() -> impl IntoView {
    view! {
        <section id="projects" class="w-full py-16">
            <div class="max-w-6xl mx-auto px-4 lg:px-8 mb-6 flex items-end justify-between">
                <div>
                    <h2 class="text-3xl font-bold">"Featured Projects"</h2>
                    <p class="text-sm mt-1">"Hover or tap a card to pause."</p>
                </div>
                <A href="/projects" attr:class="text-sm font-medium text-primary hover:underline">
                    "View all →"
                </A>
            </div>
            <Marquee items=SITE.featured() speed=SITE.motion.marquee_speed />
        </section>
    }
}
