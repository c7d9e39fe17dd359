use leptos::{html, prelude::*};
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use crate::contact::{ContactError, ContactForm, ContactMessage, SubmitState};
use crate::content::SITE;

fn input_value(node: NodeRef<html::Input>) -> String {
    node.get_untracked().map(|el| el.value()).unwrap_or_default()
}

#[component]
pub fn Contact() -> impl IntoView {
    let motion = &SITE.motion;
    let name_ref = NodeRef::<html::Input>::new();
    let email_ref = NodeRef::<html::Input>::new();
    let subject_ref = NodeRef::<html::Input>::new();
    let message_ref = NodeRef::<html::Textarea>::new();
    let form = StoredValue::new(ContactForm::default());
    let (state, set_state) = signal(SubmitState::Idle);
    let (error, set_error) = signal(None::<ContactError>);

    let UseTimeoutFnReturn {
        start: start_dismiss,
        ..
    } = use_timeout_fn(
        move |_: ()| {
            if let Some(next) = form.try_update_value(|f| {
                f.dismiss();
                f.state()
            }) {
                set_state.set(next);
            }
        },
        motion.contact_sent_ms as f64,
    );

    let UseTimeoutFnReturn {
        start: start_send, ..
    } = use_timeout_fn(
        move |_: ()| {
            if form.try_update_value(|f| f.complete()) == Some(true) {
                log::info!("contact message sent");
                set_state.set(SubmitState::Sent);
                start_dismiss(());
            }
        },
        motion.contact_submit_delay_ms as f64,
    );

    let email = SITE.profile.email.clone();

    view! {
        <section id="contact" class="max-w-3xl mx-auto w-full px-4 lg:px-8 py-16">
            <h2 class="text-3xl font-bold mb-2">"Get In Touch"</h2>
            <p class="mb-8 text-base">
                "Have a project in mind or just want to say hi? Drop a note or email "
                <a href=format!("mailto:{email}") class="text-primary hover:underline">
                    {email.clone()}
                </a>
                "."
            </p>
            <form
                class="grid gap-4"
                novalidate=true
                on:submit=move |ev| {
                    ev.prevent_default();
                    let msg = ContactMessage {
                        name: input_value(name_ref),
                        email: input_value(email_ref),
                        subject: input_value(subject_ref),
                        message: message_ref
                            .get_untracked()
                            .map(|el| el.value())
                            .unwrap_or_default(),
                    };
                    match form.try_update_value(|f| f.begin(&msg)) {
                        Some(Ok(())) => {
                            set_error.set(None);
                            set_state.set(SubmitState::Submitting);
                            start_send(());
                        }
                        Some(Err(e)) => {
                            log::debug!("contact form rejected: {e}");
                            set_error.set(Some(e));
                        }
                        None => {}
                    }
                }
            >
                <div class="grid sm:grid-cols-2 gap-4">
                    <input
                        node_ref=name_ref
                        type="text"
                        name="name"
                        placeholder="Your name"
                        class="px-4 py-2 rounded-lg border border-muted/30 bg-background focus:outline-none focus:ring-2 focus:ring-primary"
                    />
                    <input
                        node_ref=email_ref
                        type="email"
                        name="email"
                        placeholder="you@example.com"
                        class="px-4 py-2 rounded-lg border border-muted/30 bg-background focus:outline-none focus:ring-2 focus:ring-primary"
                    />
                </div>
                <input
                    node_ref=subject_ref
                    type="text"
                    name="subject"
                    placeholder="Subject"
                    class="px-4 py-2 rounded-lg border border-muted/30 bg-background focus:outline-none focus:ring-2 focus:ring-primary"
                />
                <textarea
                    node_ref=message_ref
                    name="message"
                    rows="5"
                    placeholder="Your message"
                    class="px-4 py-2 rounded-lg border border-muted/30 bg-background focus:outline-none focus:ring-2 focus:ring-primary"
                />
                {move || {
                    error
                        .get()
                        .map(|e| view! { <p class="text-sm text-red" role="alert">{e.to_string()}</p> })
                }}
                <button
                    type="submit"
                    class="justify-self-start px-6 py-2.5 rounded-lg bg-primary text-background font-medium disabled:opacity-60"
                    disabled=move || state.get() == SubmitState::Submitting
                >
                    {move || match state.get() {
                        SubmitState::Idle => "Send Message",
                        SubmitState::Submitting => "Sending…",
                        SubmitState::Sent => "Sent!",
                    }}
                </button>
                <Show when=move || state.get() == SubmitState::Sent>
                    <p class="text-sm text-green" role="status">
                        "Thanks! Your message is on its way."
                    </p>
                </Show>
            </form>
        </section>
    }
}
