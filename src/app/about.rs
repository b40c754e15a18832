use leptos::prelude::*;
use leptos_meta::Title;

use super::ui::{GlowCard, GlowColor};
use crate::data::{skills_by_category, DEVELOPER, STATS};

#[component]
pub fn About() -> impl IntoView {
    let facts = [
        ("Location", DEVELOPER.location.to_string()),
        ("Experience", format!("{}+ years", STATS.years_experience)),
        ("Clients", format!("{}+ satisfied", STATS.clients_satisfied)),
        ("Focus", "Full-stack & AI".to_string()),
    ];

    view! {
        <Title text="About" />
        <section class="w-full bg-gradient-to-b from-black via-gray-900 to-black">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-12 grid lg:grid-cols-2 gap-16 items-start">
                <div class="space-y-8">
                    <h2 class="text-5xl font-bold">
                        <span class="text-white">"About"</span>
                        " "
                        <span class="bg-gradient-to-r from-cyan-400 to-green-400 bg-clip-text text-transparent">
                            "Me"
                        </span>
                    </h2>
                    <div class="space-y-4 text-lg text-gray-300 leading-relaxed">
                        <p>{DEVELOPER.description}</p>
                        <p>
                            "I enjoy turning ideas into products: from the first sketch of an interface to the API and database behind it."
                        </p>
                        <p>
                            "When I'm not coding I'm usually learning a new tool, contributing to side projects or exploring how AI can make everyday software smarter."
                        </p>
                    </div>
                    <div class="grid grid-cols-2 gap-4">
                        {facts
                            .into_iter()
                            .map(|(label, value)| {
                                view! {
                                    <GlowCard class="p-4">
                                        <h4 class="text-cyan-400 font-semibold mb-2 text-sm uppercase tracking-wider">
                                            {label}
                                        </h4>
                                        <p class="text-white font-medium">{value}</p>
                                    </GlowCard>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
                <div class="space-y-8">
                    <h3 class="text-3xl font-bold text-white">"Technical Arsenal"</h3>
                    {skills_by_category()
                        .into_iter()
                        .enumerate()
                        .map(|(i, (category, skills))| {
                            let glow = GlowColor::nth(i);
                            view! {
                                <GlowCard glow class="p-6">
                                    <h4 class=format!("text-xl font-semibold mb-4 {}", glow.text_class())>
                                        {category.to_string()}
                                    </h4>
                                    <div class="space-y-3">
                                        {skills
                                            .into_iter()
                                            .map(|skill| {
                                                view! {
                                                    <div>
                                                        <div class="flex justify-between text-sm mb-1">
                                                            <span class="text-gray-300">{skill.name}</span>
                                                            <span class="text-gray-500">
                                                                {format!("{}%", skill.level)}
                                                            </span>
                                                        </div>
                                                        <div class="h-2 bg-gray-800 rounded-full overflow-hidden">
                                                            <div
                                                                class="h-full bg-gradient-to-r from-cyan-400 to-green-500 rounded-full transition-all duration-1000"
                                                                style:width=format!("{}%", skill.level)
                                                            ></div>
                                                        </div>
                                                    </div>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                </GlowCard>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
