mod about;
mod contact;
mod footer;
mod header;
mod hero;
mod portfolio;
mod services;
mod ui;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::{contact::ContactConfig, data::DEVELOPER};

use about::About;
use contact::ContactPage;
use header::Header;
use hero::Hero;
use portfolio::Portfolio;
use services::Services;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <meta name="description" content=DEVELOPER.description />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans bg-black text-white">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let config = ContactConfig::from_build_env().unwrap_or_else(|err| {
        log::error!("Invalid contact configuration, falling back to defaults: {err}");
        ContactConfig::default()
    });
    provide_context(config);

    view! {
        <Title formatter=|title| format!("{} - {title}", DEVELOPER.name) />

        <Router>
            <div class="min-h-screen w-full bg-black text-white relative">
                <Header />
                <main class="w-full pt-20">
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=path!("/") view=Hero />
                        <Route path=path!("/about") view=About />
                        <Route path=path!("/portfolio") view=Portfolio />
                        <Route path=path!("/services") view=Services />
                        <Route path=path!("/contact") view=ContactPage />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}
