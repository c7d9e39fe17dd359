mod contact;
mod footer;
mod header;
mod hero;
mod homepage;
mod loading;
mod marquee;
mod projects;
mod resume;
mod skills;
mod theme;

use footer::Footer;
use header::Header;
use homepage::HomePage;
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};
use projects::ProjectsPage;
use resume::ResumePage;
use skills::SkillsPage;
use theme::ThemeProvider;

use crate::content::SITE;
use crate::motion::CompletionLatch;
use crate::theme::boot_script;

pub(crate) const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                // must run before first paint
                <script inner_html=boot_script()></script>
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="icon" type="image/svg+xml" href="/favicon.svg" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="antialiased bg-background text-foreground overflow-x-hidden">
                <App />
            </body>
        </html>
    }
}

/// Records that the intro loading screen has finished, for the lifetime of
/// the page. Coming back to `/` never replays it.
#[derive(Debug, Clone, Copy)]
pub struct LoadingGate(RwSignal<CompletionLatch>);

impl LoadingGate {
    fn new() -> Self {
        Self(RwSignal::new(CompletionLatch::default()))
    }

    pub fn is_done(&self) -> bool {
        self.0.with(CompletionLatch::is_done)
    }

    /// Returns `true` only for the call that flipped the gate.
    pub fn mark_done(&self) -> bool {
        if self.0.with_untracked(CompletionLatch::is_done) {
            return false;
        }
        self.0.try_update(CompletionLatch::mark).unwrap_or(false)
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_context(LoadingGate::new());

    let name = SITE.profile.name.clone();
    let description = format!("{} | {}", SITE.profile.headline, SITE.profile.tagline);

    view! {
        <Title formatter=move |title| format!("{name} - {title}") />
        <Meta name="description" content=description />

        <ThemeProvider>
            <Router>
                <Header />
                // spacer for the fixed desktop header
                <div class="h-14 md:h-16" />
                <main class="flex flex-col flex-grow w-full">
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=path!("/") view=HomePage />
                        <Route path=path!("/projects") view=ProjectsPage />
                        <Route path=path!("/skills") view=SkillsPage />
                        <Route path=path!("/resume") view=ResumePage />
                    </Routes>
                </main>
                <Footer />
            </Router>
        </ThemeProvider>
    }
}
