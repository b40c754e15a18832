use leptos::prelude::*;
use leptos_router::components::*;

use crate::data::DEVELOPER;

const BUILD_YEAR: &str = env!("BUILD_YEAR");

#[component]
pub fn Footer() -> impl IntoView {
    let social = [
        ("GitHub", DEVELOPER.social.github.to_string()),
        ("LinkedIn", DEVELOPER.social.linkedin.to_string()),
        ("Twitter", DEVELOPER.social.twitter.to_string()),
        ("Email", format!("mailto:{}", DEVELOPER.email)),
    ];

    view! {
        <footer class="w-full border-t border-gray-800/50 bg-black">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-12 grid md:grid-cols-3 gap-8 items-center">
                <div class="space-y-2">
                    <h3 class="text-xl font-bold text-white">{DEVELOPER.name}</h3>
                    <p class="text-gray-400 text-sm">{DEVELOPER.title}</p>
                    <p class="text-gray-500 text-sm">{DEVELOPER.location}</p>
                </div>
                <div class="flex justify-center gap-6">
                    {social
                        .into_iter()
                        .map(|(label, href)| {
                            view! {
                                <a
                                    href=href
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="text-gray-400 hover:text-cyan-400 transition-colors"
                                >
                                    {label}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="md:text-right space-y-2">
                    <h3 class="text-xl font-bold text-white">"Ready to work together?"</h3>
                    <p class="text-gray-400">"Let's create something amazing!"</p>
                    <A href="/" attr:class="text-sm text-cyan-400 hover:text-cyan-300">
                        "Back to top"
                    </A>
                </div>
            </div>
            <div class="border-t border-gray-800/50 py-6 text-center text-gray-500 text-sm">
                {format!("© {BUILD_YEAR} {}. Made with Rust and Leptos.", DEVELOPER.name)}
            </div>
        </footer>
    }
}
