use leptos::prelude::*;
use leptos_meta::Title;

use crate::content::SITE;

#[component]
pub fn SkillsPage() -> impl IntoView {
    let skills = &SITE.skills;
    view! {
        <Title text="Skills" />
        <div class="max-w-6xl mx-auto w-full px-4 lg:px-8 py-12">
            <h1 class="text-3xl md:text-4xl font-bold mb-10">"Skills"</h1>
            <div class="grid grid-cols-2 md:grid-cols-4 gap-4 mb-12">
                {skills
                    .stats
                    .iter()
                    .map(|s| {
                        view! {
                            <div class="p-4 rounded-xl border border-muted/20 text-center">
                                <div class="text-3xl font-bold text-primary">{s.value.clone()}</div>
                                <div class="text-sm font-medium">{s.label.clone()}</div>
                                {s.hint.clone().map(|h| view! { <div class="text-xs opacity-70">{h}</div> })}
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="grid md:grid-cols-2 gap-8">
                {skills
                    .sections
                    .iter()
                    .map(|section| {
                        view! {
                            <section class="p-6 rounded-xl border border-muted/20">
                                <h2 class="text-xl font-bold mb-4">{section.title.clone()}</h2>
                                <ul class="space-y-3">
                                    {section
                                        .items
                                        .iter()
                                        .map(|skill| {
                                            let level = skill.level;
                                            view! {
                                                <li>
                                                    <div class="flex justify-between text-sm mb-1">
                                                        <span>{skill.name.clone()}</span>
                                                        <span class="font-mono">{format!("{level}%")}</span>
                                                    </div>
                                                    <div class="h-2 rounded-full bg-muted/20 overflow-hidden">
                                                        <div
                                                            class="h-full rounded-full bg-primary"
                                                            style:width=format!("{level}%")
                                                        />
                                                    </div>
                                                </li>
                                            }
                                        })
                                        .collect_view()}
                                </ul>
                            </section>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
