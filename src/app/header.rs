use leptos::prelude::*;
use leptos_router::{components::*, hooks::use_location};

use crate::{data::DEVELOPER, section::Section};

#[component]
pub fn Header() -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);
    let location = use_location();
    let current = Memo::new(move |_| Section::from_path(&location.pathname.get()));

    view! {
        <header class="fixed top-0 left-0 right-0 z-40 bg-black/80 backdrop-blur-xl border-b border-gray-800/50">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between h-20">
                    <A href="/" attr:class="text-2xl font-black tracking-tight">
                        <span class="bg-gradient-to-r from-cyan-400 to-green-500 bg-clip-text text-transparent">
                            {DEVELOPER.name}
                        </span>
                    </A>
                    <div class="hidden md:flex items-center space-x-3 px-4 py-2 bg-gray-800/50 rounded-full border border-gray-700/50">
                        <div class="w-2 h-2 bg-cyan-400 rounded-full animate-pulse"></div>
                        <span class="text-sm text-gray-300">{move || current.get().label()}</span>
                    </div>
                    <button
                        class="relative p-3 text-gray-400 hover:text-white rounded-xl hover:bg-gray-800/50 z-50"
                        aria-label="Toggle navigation"
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        <span class="block w-6 text-2xl leading-none">
                            {move || if menu_open.get() { "✕" } else { "☰" }}
                        </span>
                    </button>
                </div>
            </div>
        </header>
        <div class=move || {
            if menu_open.get() {
                "fixed inset-0 z-30 bg-black/95 backdrop-blur-2xl flex items-center justify-center transition-opacity duration-500 opacity-100"
            } else {
                "fixed inset-0 z-30 bg-black/95 flex items-center justify-center transition-opacity duration-500 opacity-0 invisible pointer-events-none"
            }
        }>
            <nav>
                <ul class="space-y-6 text-center">
                    {Section::ALL
                        .into_iter()
                        .map(|section| {
                            view! {
                                <li on:click=move |_| set_menu_open.set(false)>
                                    <A
                                        href=section.path()
                                        attr:class=move || {
                                            if current.get() == section {
                                                "text-4xl font-bold text-cyan-400"
                                            } else {
                                                "text-4xl font-bold text-gray-300 hover:text-white transition-colors"
                                            }
                                        }
                                    >
                                        {section.label()}
                                    </A>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
                <div class="flex justify-center gap-6 mt-12 text-gray-400">
                    <a href=DEVELOPER.social.github target="_blank" rel="noopener noreferrer" class="hover:text-white">
                        "GitHub"
                    </a>
                    <a href=DEVELOPER.social.linkedin target="_blank" rel="noopener noreferrer" class="hover:text-white">
                        "LinkedIn"
                    </a>
                    <a href=DEVELOPER.social.twitter target="_blank" rel="noopener noreferrer" class="hover:text-white">
                        "Twitter"
                    </a>
                </div>
            </nav>
        </div>
    }
}
