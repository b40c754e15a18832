use std::time::Duration;

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::*;

use super::ui::{button_class, ButtonSize, ButtonVariant};
use crate::data::{counter_finished, counter_frame, DEVELOPER, STATS};

const COUNTER_FRAMES: u32 = 60;
const COUNTER_TICK: Duration = Duration::from_millis(25);

#[component]
pub fn Hero() -> impl IntoView {
    let (frame, set_frame) = signal(0u32);
    let ticker = StoredValue::new(None::<IntervalHandle>);

    // effects only run in the browser, so the server renders zeros
    Effect::new(move |_| {
        match set_interval_with_handle(
            move || {
                if !counter_finished(frame.get_untracked(), COUNTER_FRAMES) {
                    set_frame.update(|f| *f += 1);
                }
                if counter_finished(frame.get_untracked(), COUNTER_FRAMES) {
                    if let Some(Some(handle)) = ticker.try_get_value() {
                        handle.clear();
                    }
                }
            },
            COUNTER_TICK,
        ) {
            Ok(handle) => {
                ticker.set_value(Some(handle));
                on_cleanup(move || handle.clear());
            }
            Err(_) => log::error!("Couldn't start stats counter"),
        }
    });

    let stats = [
        (STATS.projects_completed, "Projects Completed"),
        (STATS.years_experience, "Years Experience"),
        (STATS.technologies_mastered, "Technologies"),
    ];

    view! {
        <Title text="Home" />
        <section class="min-h-[calc(100vh-5rem)] w-full flex items-center justify-center relative overflow-hidden bg-gradient-to-br from-black via-gray-900 to-black">
            <div class="max-w-5xl mx-auto px-4 sm:px-6 lg:px-8 text-center relative z-10 space-y-8">
                <div class="inline-flex items-center space-x-2 px-4 py-2 bg-gray-800/50 rounded-full border border-gray-700/50 text-sm text-gray-300">
                    <span class="w-2 h-2 bg-green-400 rounded-full animate-pulse"></span>
                    <span>"Available for new projects"</span>
                </div>
                <h1 class="text-6xl md:text-8xl font-black leading-none">
                    <span class="bg-gradient-to-r from-cyan-400 via-green-400 to-cyan-400 bg-clip-text text-transparent">
                        {DEVELOPER.name}
                    </span>
                </h1>
                <h2 class="text-3xl md:text-4xl text-gray-300 font-light">{DEVELOPER.title}</h2>
                <p class="text-xl text-gray-400 leading-relaxed max-w-3xl mx-auto">
                    {DEVELOPER.description}
                </p>
                <div class="flex flex-col sm:flex-row gap-4 justify-center">
                    <A
                        href="/contact"
                        attr:class=button_class(ButtonVariant::Primary, ButtonSize::Lg)
                    >
                        "Get In Touch"
                    </A>
                    <a
                        href=DEVELOPER.resume
                        download=""
                        class=button_class(ButtonVariant::Outline, ButtonSize::Lg)
                    >
                        "Download Resume"
                    </a>
                </div>
                <div class="grid grid-cols-3 gap-8 pt-8 max-w-2xl mx-auto">
                    {stats
                        .into_iter()
                        .map(|(target, label)| {
                            view! {
                                <div class="text-center">
                                    <div class="text-4xl font-bold text-cyan-400">
                                        {move || counter_frame(target, frame.get(), COUNTER_FRAMES)}
                                        "+"
                                    </div>
                                    <div class="text-sm text-gray-400 mt-1">{label}</div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
