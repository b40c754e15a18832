use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::{hooks::use_navigate, NavigateOptions};

use super::ui::{button_class, ButtonSize, ButtonVariant, GlowCard, GlowColor};
use crate::{data::SERVICES, section::Section};

#[component]
pub fn Services() -> impl IntoView {
    let navigate = use_navigate();

    view! {
        <Title text="Services" />
        <section class="w-full bg-gradient-to-b from-black via-gray-900 to-black">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-12">
                <div class="text-center mb-12">
                    <h2 class="text-5xl font-bold mb-6">
                        <span class="text-white">"My"</span>
                        " "
                        <span class="bg-gradient-to-r from-green-400 to-cyan-500 bg-clip-text text-transparent">
                            "Services"
                        </span>
                    </h2>
                    <p class="text-xl text-gray-400 max-w-3xl mx-auto leading-relaxed">
                        "From a single landing page to a complete platform, here is how I can help."
                    </p>
                </div>
                <div class="grid md:grid-cols-3 gap-8">
                    {SERVICES
                        .iter()
                        .enumerate()
                        .map(|(i, service)| {
                            let glow = GlowColor::nth(i);
                            view! {
                                <GlowCard glow class="p-8 space-y-4">
                                    <div class=format!("text-sm font-mono {}", glow.text_class())>
                                        {format!("<{}/>", service.icon)}
                                    </div>
                                    <h3 class="text-xl font-bold text-white">{service.title}</h3>
                                    <p class="text-gray-400 leading-relaxed text-sm">
                                        {service.description}
                                    </p>
                                    <ul class="space-y-2 text-sm text-gray-300">
                                        {service
                                            .features
                                            .iter()
                                            .map(|feature| {
                                                view! {
                                                    <li class="flex items-center gap-2">
                                                        <span class=glow.text_class()>"✓"</span>
                                                        {*feature}
                                                    </li>
                                                }
                                            })
                                            .collect_view()}
                                    </ul>
                                </GlowCard>
                            }
                        })
                        .collect_view()}
                </div>
                <GlowCard class="mt-12 p-8 text-center space-y-4">
                    <h3 class="text-2xl font-bold text-white">"Ready to Start Your Project?"</h3>
                    <p class="text-lg text-gray-300 max-w-2xl mx-auto leading-relaxed">
                        "Tell me what you have in mind and I'll get back to you within 24 hours."
                    </p>
                    <button
                        class=button_class(ButtonVariant::Primary, ButtonSize::Lg)
                        on:click=move |_| navigate(Section::Contact.path(), NavigateOptions::default())
                    >
                        "Let's Talk"
                    </button>
                </GlowCard>
            </div>
        </section>
    }
}
