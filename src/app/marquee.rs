use leptos::{ev, html, prelude::*};
use leptos_router::{hooks::use_navigate, NavigateOptions};
use leptos_use::{
    use_element_size, use_media_query, use_raf_fn, utils::Pausable, UseElementSizeReturn,
    UseRafFnCallbackArgs,
};

use super::REDUCED_MOTION_QUERY;
use crate::content::CatalogItem;
use crate::motion::{loop_items, MarqueeState, Measure};

/// Endless horizontal strip of catalog cards.
///
/// The track holds the items twice; one copy's width is scrolled per loop
/// and the offset snaps back to 0 at the seam, so the wrap is invisible.
/// Hover, touch and keyboard focus pause the strip in place.
#[component]
pub fn Marquee(items: Vec<CatalogItem>, speed: f64) -> impl IntoView {
    let state = match MarqueeState::for_items(items.len(), speed) {
        Ok(Some(state)) => Some(state),
        // nothing to show, and no animation driver either
        Ok(None) => return ().into_any(),
        Err(e) => {
            log::warn!("marquee will not animate: {e}");
            None
        }
    };
    let state = StoredValue::new(state);
    let track_ref = NodeRef::<html::Div>::new();
    let (offset, set_offset) = signal(0.0_f64);
    // seconds, from the most recent animation frame
    let last_frame = StoredValue::new(0.0_f64);
    let reduced = use_media_query(REDUCED_MOTION_QUERY);

    let Pausable { pause, resume, .. } = use_raf_fn(move |args: UseRafFnCallbackArgs| {
        let now = args.timestamp / 1000.0;
        last_frame.try_update_value(|t| *t = now);
        let next = state
            .try_update_value(|s| {
                let s = s.as_mut()?;
                if s.is_measured() {
                    // paused or static: the offset on screen is already right
                    return s.is_animating().then(|| s.offset_at(now));
                }
                // trailing padding matches the gap, so half is exactly one copy
                let width = track_ref
                    .get_untracked()
                    .map(|el| f64::from(el.scroll_width()) / 2.0)
                    .unwrap_or_default();
                match s.measure(width, now) {
                    Measure::Deferred => None,
                    Measure::Ready { duration } => {
                        log::debug!(
                            "marquee measured {:.0}px, {duration:.2}s per loop",
                            s.track_width().unwrap_or_default()
                        );
                        Some(s.offset_at(now))
                    }
                }
            })
            .flatten();
        if let Some(x) = next {
            if x != offset.get_untracked() {
                set_offset.set(x);
            }
        }
    });

    Effect::new(move |_| {
        let reduced = reduced.get();
        let now = last_frame.get_value();
        state.update_value(|s| {
            if let Some(s) = s.as_mut() {
                s.set_reduced_motion(reduced, now);
                if !reduced {
                    // frames were not sampled while reduced; start clean
                    s.invalidate();
                }
            }
        });
        if reduced {
            pause();
            set_offset.set(0.0);
        } else {
            resume();
        }
    });

    let UseElementSizeReturn { width, .. } = use_element_size(track_ref);
    Effect::watch(
        move || width.get(),
        move |w, _, _| {
            log::debug!("marquee track resized to {w}px");
            state.try_update_value(|s| {
                if let Some(s) = s.as_mut() {
                    s.invalidate();
                }
            });
        },
        false,
    );

    let hold = move || {
        let now = last_frame.get_value();
        state.try_update_value(|s| {
            if let Some(s) = s.as_mut() {
                s.pause(now);
            }
        });
    };
    let release = move || {
        let now = last_frame.get_value();
        state.try_update_value(|s| {
            if let Some(s) = s.as_mut() {
                s.resume(now);
            }
        });
    };

    let copy_len = items.len();
    let cards = loop_items(&items)
        .into_iter()
        .enumerate()
        .map(|(i, item)| view! { <MarqueeCard item duplicate={i >= copy_len} /> })
        .collect_view();

    view! {
        <div
            class="relative overflow-hidden py-4 touch-pan-y"
            on:mouseenter=move |_| hold()
            on:mouseleave=move |_| release()
            on:touchstart=move |ev: ev::TouchEvent| {
                ev.stop_propagation();
                hold();
            }
            on:touchend=move |_| release()
            on:touchcancel=move |_| release()
            on:focusin=move |_| hold()
            on:focusout=move |_| release()
        >
            <div class="pointer-events-none absolute inset-y-0 left-0 w-12 z-10 bg-gradient-to-r from-background" />
            <div class="pointer-events-none absolute inset-y-0 right-0 w-12 z-10 bg-gradient-to-l from-background" />
            <div
                node_ref=track_ref
                class="flex w-max gap-6 pr-6 will-change-transform"
                style:transform=move || format!("translate3d({}px, 0, 0)", offset.get())
            >
                {cards}
            </div>
        </div>
    }
    .into_any()
}

#[component]
fn MarqueeCard(item: CatalogItem, duplicate: bool) -> impl IntoView {
    let navigate = use_navigate();
    let detail = format!("/projects#{}", item.id);
    let open = move || navigate(&detail, NavigateOptions::default());
    let open_on_key = open.clone();
    let tab_index = if duplicate { "-1" } else { "0" };
    let CatalogItem {
        title,
        image,
        live_demo,
        source,
        tech,
        blurb,
        ..
    } = item;

    view! {
        <article
            role="link"
            tabindex=tab_index
            aria-hidden=duplicate.then_some("true")
            class="group w-72 md:w-80 shrink-0 cursor-pointer rounded-xl border border-muted/20 bg-background shadow-sm hover:shadow-lg transition-shadow overflow-hidden"
            on:click=move |_| open()
            on:keydown=move |ev: ev::KeyboardEvent| {
                if ev.key() == "Enter" {
                    open_on_key();
                }
            }
        >
            <img
                src=image
                alt=title.clone()
                loading="lazy"
                class="h-40 w-full object-cover group-hover:scale-105 transition-transform"
            />
            <div class="p-4 space-y-2">
                <h3 class="font-bold text-lg">{title}</h3>
                <p class="text-sm line-clamp-2">{blurb}</p>
                <ul class="flex flex-wrap gap-1">
                    {tech
                        .into_iter()
                        .map(|t| {
                            view! {
                                <li class="text-xs px-2 py-0.5 rounded-full bg-primary/10 text-primary">
                                    {t}
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
                <div class="flex gap-4 pt-2 text-sm font-medium">
                    {live_demo
                        .map(|href| {
                            view! {
                                <a
                                    href=href
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    tabindex=tab_index
                                    class="text-primary hover:underline"
                                    on:click=|ev| ev.stop_propagation()
                                >
                                    "Live Demo"
                                </a>
                            }
                        })}
                    <a
                        href=source
                        target="_blank"
                        rel="noopener noreferrer"
                        tabindex=tab_index
                        class="hover:underline"
                        on:click=|ev| ev.stop_propagation()
                    >
                        "Source"
                    </a>
                </div>
            </div>
        </article>
    }
}
