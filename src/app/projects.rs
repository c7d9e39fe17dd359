use leptos::prelude::*;
use leptos_meta::Title;

use crate::content::{CatalogItem, SITE};

#[component]
pub fn ProjectsPage() -> impl IntoView {
    view! {
        <Title text="Projects" />
        <div class="max-w-6xl mx-auto w-full px-4 lg:px-8 py-12">
            <h1 class="text-3xl md:text-4xl font-bold mb-2">"Projects"</h1>
            <p class="mb-10 text-base">"Things I've built, shipped, and learned from."</p>
            <div class="grid gap-8 md:grid-cols-2">
                {SITE
                    .projects
                    .iter()
                    .cloned()
                    .map(|item| view! { <ProjectCard item /> })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn ProjectCard(item: CatalogItem) -> impl IntoView {
    let CatalogItem {
        id,
        title,
        image,
        live_demo,
        source,
        tech,
        blurb,
        featured,
    } = item;
    view! {
        <article
            id=id
            class="scroll-mt-24 rounded-xl border border-muted/20 overflow-hidden shadow-sm target:ring-2 target:ring-primary"
        >
            <img src=image alt=title.clone() loading="lazy" class="h-52 w-full object-cover" />
            <div class="p-6 space-y-3">
                <div class="flex items-center gap-2">
                    <h2 class="text-xl font-bold">{title}</h2>
                    {featured
                        .then(|| {
                            view! {
                                <span class="text-xs px-2 py-0.5 rounded-full bg-primary/10 text-primary">
                                    "Featured"
                                </span>
                            }
                        })}
                </div>
                <p class="text-sm leading-relaxed">{blurb}</p>
                <ul class="flex flex-wrap gap-1">
                    {tech
                        .into_iter()
                        .map(|t| {
                            view! { <li class="text-xs px-2 py-0.5 rounded-full border border-muted/30">{t}</li> }
                        })
                        .collect_view()}
                </ul>
                <div class="flex gap-4 pt-2 text-sm font-medium">
                    {live_demo
                        .map(|href| {
                            view! {
                                <a href=href target="_blank" rel="noopener noreferrer" class="text-primary hover:underline">
                                    "Live Demo"
                                </a>
                            }
                        })}
                    <a href=source target="_blank" rel="noopener noreferrer" class="hover:underline">
                        "Source"
                    </a>
                </div>
            </div>
        </article>
    }
}
