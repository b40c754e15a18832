use std::time::Duration;

use leptos::{
    either::Either,
    ev::{Event, SubmitEvent},
    prelude::*,
    task::spawn_local,
};
use leptos_meta::Title;

use super::{
    footer::Footer,
    ui::{Button, ButtonSize, GlowCard, GlowColor},
};
use crate::{
    contact::{ContactConfig, ContactForm, ContactTransport, Field, HttpTransport, SubmissionState},
    data::DEVELOPER,
};

const INPUT_CLASS: &str = "w-full px-4 py-3 bg-black/50 border rounded-xl text-white placeholder-gray-500 transition-all duration-300 focus:outline-none focus:ring-2 backdrop-blur-sm disabled:opacity-60";

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <Title text="Contact" />
        <section class="w-full bg-gradient-to-b from-black via-gray-900 to-black">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-12">
                <div class="text-center mb-12">
                    <h2 class="text-5xl font-bold mb-6">
                        <span class="text-white">"Get In"</span>
                        " "
                        <span class="bg-gradient-to-r from-cyan-400 to-green-500 bg-clip-text text-transparent">
                            "Touch"
                        </span>
                    </h2>
                    <p class="text-xl text-gray-400 max-w-3xl mx-auto leading-relaxed">
                        "Ready to start your next project? Let's create something amazing together!"
                    </p>
                </div>
                <div class="grid lg:grid-cols-2 gap-12">
                    <ContactInfo />
                    <ContactFormCard />
                </div>
            </div>
        </section>
        <Footer />
    }
}

#[component]
fn ContactInfo() -> impl IntoView {
    let items = [
        ("Email", DEVELOPER.email, Some(format!("mailto:{}", DEVELOPER.email)), GlowColor::Cyan),
        ("Phone", DEVELOPER.phone, Some(format!("tel:{}", DEVELOPER.phone)), GlowColor::Green),
        ("Location", DEVELOPER.location, None, GlowColor::Purple),
    ];

    view! {
        <div class="space-y-6">
            <h3 class="text-2xl font-bold text-white">"Let's Connect"</h3>
            <p class="text-gray-300 leading-relaxed">
                "I'm currently open to new opportunities and would love to hear about your project."
            </p>
            {items
                .into_iter()
                .map(|(label, value, href, glow)| {
                    view! {
                        <GlowCard glow class="p-6">
                            <h4 class="text-white font-semibold">{label}</h4>
                            {match href {
                                Some(href) => {
                                    Either::Left(
                                        view! {
                                            <a href=href class=format!("{} hover:underline", glow.text_class())>
                                                {value}
                                            </a>
                                        },
                                    )
                                }
                                None => Either::Right(view! { <p class="text-gray-300">{value}</p> }),
                            }}
                        </GlowCard>
                    }
                })
                .collect_view()}
            <GlowCard class="p-6">
                <h4 class="text-white font-semibold mb-2">"Quick Response Guarantee"</h4>
                <p class="text-gray-300 text-sm leading-relaxed">
                    "I typically respond to all inquiries within 24 hours."
                </p>
            </GlowCard>
        </div>
    }
}

#[component]
fn ContactFormCard() -> impl IntoView {
    let config = StoredValue::new(use_context::<ContactConfig>().unwrap_or_default());
    let form = RwSignal::new(ContactForm::new());
    let pending_reset = StoredValue::new(None::<TimeoutHandle>);

    // a form that is gone must not be reset by an old timer
    on_cleanup(move || {
        if let Some(Some(handle)) = pending_reset.try_get_value() {
            handle.clear();
        }
    });

    let schedule_reset = move |delay: Duration| {
        if let Some(Some(old)) = pending_reset.try_get_value() {
            old.clear();
        }
        match set_timeout_with_handle(
            move || {
                form.try_update(ContactForm::reset_after_success);
            },
            delay,
        ) {
            Ok(handle) => {
                pending_reset.try_set_value(Some(handle));
            }
            Err(_) => log::error!("Couldn't schedule contact form reset"),
        }
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(payload) = form.try_update(ContactForm::begin_submit).flatten() else {
            return;
        };
        let transport = config.with_value(HttpTransport::new);
        let delay = config.with_value(|c| c.success_reset_delay);
        spawn_local(async move {
            let outcome = transport.submit(&payload).await;
            // try_update is a no-op if the form was unmounted meanwhile
            let sent = form.try_update(|f| {
                f.complete_submit(outcome);
                f.state == SubmissionState::Success
            });
            if sent == Some(true) {
                schedule_reset(delay);
            }
        });
    };

    let is_success = Memo::new(move |_| form.with(|f| f.state == SubmissionState::Success));
    let is_submitting = Memo::new(move |_| form.with(|f| f.state.is_submitting()));
    let banner = Memo::new(move |_| form.with(|f| f.state.error_message().map(str::to_string)));

    view! {
        <GlowCard glow=GlowColor::Green class="p-8 relative overflow-hidden">
            {move || {
                if is_success.get() {
                    Either::Left(
                        view! {
                            <div class="text-center py-12">
                                <div class="w-16 h-16 bg-gradient-to-r from-green-400 to-emerald-500 rounded-full flex items-center justify-center mx-auto mb-6 animate-pulse text-black text-3xl">
                                    "✓"
                                </div>
                                <h3 class="text-2xl font-bold text-white mb-4">
                                    "Message Sent Successfully!"
                                </h3>
                                <p class="text-gray-300 leading-relaxed">
                                    "Thank you for reaching out! I'll get back to you within 24 hours."
                                </p>
                            </div>
                        },
                    )
                } else {
                    Either::Right(
                        view! {
                            <form on:submit=on_submit class="space-y-6" novalidate=true>
                                <div class="grid md:grid-cols-2 gap-4">
                                    <FormField form field=Field::Name />
                                    <FormField form field=Field::Email input_type="email" />
                                </div>
                                <FormField form field=Field::Subject />
                                <FormField form field=Field::Description multiline=true />
                                {move || {
                                    banner
                                        .get()
                                        .map(|message| {
                                            view! {
                                                <div
                                                    role="alert"
                                                    class="px-4 py-3 rounded-xl border border-red-500/50 bg-red-500/10 text-red-400 text-sm"
                                                >
                                                    {message}
                                                </div>
                                            }
                                        })
                                }}
                                <Button
                                    kind="submit"
                                    size=ButtonSize::Lg
                                    class="w-full"
                                    disabled=is_submitting
                                >
                                    {move || {
                                        if is_submitting.get() { "Sending Message..." } else { "Send Message" }
                                    }}
                                </Button>
                            </form>
                        },
                    )
                }
            }}
        </GlowCard>
    }
}

#[component]
fn FormField(
    form: RwSignal<ContactForm>,
    field: Field,
    #[prop(optional)] multiline: bool,
    #[prop(default = "text")] input_type: &'static str,
) -> impl IntoView {
    let value = move || form.with(|f| f.fields.get(field).to_string());
    let error = Memo::new(move |_| form.with(|f| f.errors.get(field).map(str::to_string)));
    let disabled = move || form.with(|f| f.state.is_submitting());
    let on_input = move |ev: Event| {
        form.update(|f| f.on_field_change(field, event_target_value(&ev)));
    };
    let class = move || {
        if error.get().is_some() {
            format!("{INPUT_CLASS} border-red-500 focus:ring-red-500/50")
        } else {
            format!("{INPUT_CLASS} border-gray-700 hover:border-gray-600 focus:border-cyan-400 focus:ring-cyan-400/50")
        }
    };

    view! {
        <div class="space-y-2">
            <label for=field.as_str() class="block text-sm font-medium text-gray-300">
                {field.label()}
            </label>
            {if multiline {
                Either::Left(
                    view! {
                        <textarea
                            id=field.as_str()
                            name=field.as_str()
                            rows="4"
                            placeholder=field.placeholder()
                            class=move || format!("{} resize-none", class())
                            prop:value=value
                            on:input=on_input
                            disabled=disabled
                        ></textarea>
                    },
                )
            } else {
                Either::Right(
                    view! {
                        <input
                            type=input_type
                            id=field.as_str()
                            name=field.as_str()
                            placeholder=field.placeholder()
                            class=class
                            prop:value=value
                            on:input=on_input
                            disabled=disabled
                        />
                    },
                )
            }}
            {move || {
                error.get().map(|message| view! { <p class="text-sm text-red-400">{message}</p> })
            }}
        </div>
    }
}
