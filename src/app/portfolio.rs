use leptos::prelude::*;
use leptos_meta::Title;

use super::ui::{GlowCard, GlowColor};
use crate::data::{filter_projects, ProjectFilter};

#[component]
pub fn Portfolio() -> impl IntoView {
    let (filter, set_filter) = signal(ProjectFilter::All);

    view! {
        <Title text="Portfolio" />
        <section class="w-full bg-gradient-to-b from-black via-gray-900 to-black">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-12">
                <div class="text-center mb-8">
                    <h2 class="text-5xl font-bold mb-6">
                        <span class="text-white">"My"</span>
                        " "
                        <span class="bg-gradient-to-r from-purple-400 to-pink-500 bg-clip-text text-transparent">
                            "Portfolio"
                        </span>
                    </h2>
                    <p class="text-xl text-gray-400 max-w-3xl mx-auto leading-relaxed">
                        "Explore my latest projects that showcase creativity, technical expertise, and attention to detail."
                    </p>
                </div>
                <div class="flex flex-wrap justify-center gap-4 mb-8">
                    {ProjectFilter::ALL
                        .into_iter()
                        .map(|f| {
                            view! {
                                <button
                                    class=move || {
                                        if filter.get() == f {
                                            "px-6 py-2 rounded-full font-medium text-sm capitalize bg-gradient-to-r from-purple-400 to-pink-500 text-black"
                                        } else {
                                            "px-6 py-2 rounded-full font-medium text-sm capitalize bg-gray-800/50 text-gray-300 hover:text-white border border-gray-700/50"
                                        }
                                    }
                                    on:click=move |_| set_filter.set(f)
                                >
                                    {f.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                {move || {
                    let projects = filter_projects(filter.get());
                    if projects.is_empty() {
                        return view! {
                            <p class="text-center text-gray-500">"No projects in this category yet."</p>
                        }
                            .into_any();
                    }
                    view! {
                        <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6 pb-8">
                            {projects
                                .into_iter()
                                .map(|project| {
                                    view! {
                                        <GlowCard glow=GlowColor::Purple class="group overflow-hidden">
                                            <img
                                                src=project.image
                                                alt=project.title
                                                class="w-full h-48 object-cover group-hover:scale-105 transition-transform duration-500"
                                            />
                                            <div class="p-6 space-y-3">
                                                <span class="text-xs uppercase tracking-wider text-purple-400">
                                                    {project.category.as_str()}
                                                </span>
                                                <h3 class="text-xl font-bold text-white">{project.title}</h3>
                                                <p class="text-gray-400 text-sm leading-relaxed">
                                                    {project.description}
                                                </p>
                                                <div class="flex flex-wrap gap-2">
                                                    {project
                                                        .technologies
                                                        .iter()
                                                        .map(|tech| {
                                                            view! {
                                                                <span class="px-2 py-1 bg-gray-800 rounded text-xs text-gray-300">
                                                                    {*tech}
                                                                </span>
                                                            }
                                                        })
                                                        .collect_view()}
                                                </div>
                                                <div class="flex gap-4 pt-2 text-sm">
                                                    {project
                                                        .live_url
                                                        .map(|url| {
                                                            view! {
                                                                <a href=url target="_blank" rel="noopener noreferrer" class="text-cyan-400 hover:text-cyan-300">
                                                                    "Live Demo"
                                                                </a>
                                                            }
                                                        })}
                                                    {project
                                                        .github_url
                                                        .map(|url| {
                                                            view! {
                                                                <a href=url target="_blank" rel="noopener noreferrer" class="text-gray-300 hover:text-white">
                                                                    "Source"
                                                                </a>
                                                            }
                                                        })}
                                                </div>
                                            </div>
                                        </GlowCard>
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                        .into_any()
                }}
            </div>
        </section>
    }
}
