use leptos::prelude::*;
use leptos_use::{use_media_query, use_raf_fn, utils::Pausable, UseRafFnCallbackArgs};

use super::REDUCED_MOTION_QUERY;
use crate::content::SITE;
use crate::motion::{tween::ring_dash_offset, LoadingFrame, LoadingPhase, LoadingProgress};

const RING_RADIUS: f64 = 52.0;

#[component]
pub fn LoadingScreen(#[prop(into)] on_complete: Callback<()>) -> impl IntoView {
    let motion = &SITE.motion;
    let messages = SITE.loading_messages.clone();
    let progress = StoredValue::new(LoadingProgress::new(
        motion.loading_duration_secs(),
        motion.loading_exit_secs(),
        messages.len(),
    ));
    let (frame, set_frame) = signal(LoadingFrame {
        percent: 0,
        message_index: (!messages.is_empty()).then_some(0),
        phase: LoadingPhase::Idle,
        completed: false,
    });
    let reduced = use_media_query(REDUCED_MOTION_QUERY);

    let Pausable { pause, .. } = use_raf_fn(move |args: UseRafFnCallbackArgs| {
        let now = args.timestamp / 1000.0;
        let next = progress.try_update_value(|p| {
            if p.start(now) {
                log::debug!("loading screen started");
            }
            if reduced.get_untracked() {
                p.finish_now(now);
            }
            p.sample(now)
        });
        let Some(next) = next else {
            return;
        };
        set_frame.set(next);
        if next.completed {
            log::debug!("loading screen complete");
            on_complete.run(());
        }
    });

    Effect::new(move |_| {
        if frame.with(|f| matches!(f.phase, LoadingPhase::Complete | LoadingPhase::Stopped)) {
            pause();
        }
    });

    on_cleanup(move || {
        progress.try_update_value(|p| p.cancel());
    });

    let circumference = std::f64::consts::TAU * RING_RADIUS;
    let ticker = SITE.ticker.clone();

    view! {
        <div
            class=move || {
                let fade = if frame.with(|f| f.phase == LoadingPhase::Finishing) {
                    "opacity-0"
                } else {
                    "opacity-100"
                };
                format!(
                    "fixed inset-0 z-[100] flex flex-col items-center justify-center gap-8 bg-background transition-opacity duration-500 {fade}",
                )
            }
            role="status"
            aria-live="polite"
        >
            <div class="relative w-32 h-32">
                <svg class="w-full h-full -rotate-90" viewBox="0 0 120 120">
                    <circle
                        cx="60"
                        cy="60"
                        r=RING_RADIUS
                        fill="none"
                        stroke-width="6"
                        class="stroke-muted/20"
                    />
                    <circle
                        cx="60"
                        cy="60"
                        r=RING_RADIUS
                        fill="none"
                        stroke-width="6"
                        stroke-linecap="round"
                        class="stroke-primary"
                        stroke-dasharray=circumference
                        stroke-dashoffset=move || ring_dash_offset(RING_RADIUS, frame.get().percent)
                    />
                </svg>
                <span class="absolute inset-0 flex items-center justify-center text-2xl font-bold tabular-nums">
                    {move || format!("{}%", frame.get().percent)}
                </span>
            </div>
            <div class="w-64 h-1 rounded-full bg-muted/20 overflow-hidden">
                <div
                    class="h-full bg-primary"
                    style:width=move || format!("{}%", frame.get().percent)
                />
            </div>
            <p class="text-sm font-mono">
                {move || {
                    frame
                        .get()
                        .message_index
                        .and_then(|i| messages.get(i).cloned())
                        .unwrap_or_default()
                }}
            </p>
            <div class="absolute bottom-8 inset-x-0 overflow-hidden">
                <div class="flex justify-center gap-6 text-xs uppercase tracking-widest whitespace-nowrap opacity-60">
                    {ticker.into_iter().map(|t| view! { <span>{t}</span> }).collect_view()}
                </div>
            </div>
        </div>
    }
}
