mod about;
mod contact;
mod hero;
mod navigation;
mod pointer;
mod projects;
mod reveal;
mod toast;
pub mod typing;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::site::{build_year, FAVICON_HREF, OWNER};
use about::About;
use contact::Contact;
use hero::Hero;
use navigation::Navigation;
use pointer::provide_pointer;
use projects::Projects;
use toast::{provide_toaster, ToastViewport};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" class="scroll-smooth">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="icon" type="image/svg+xml" href=FAVICON_HREF />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <MetaTags />
            </head>
            <body class="bg-background text-text-primary">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title formatter=|title| format!("{OWNER} - {title}") />
        <Meta name="description" content="Portfolio of a full stack developer" />

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=Portfolio />
            </Routes>
        </Router>
    }
}

#[component]
fn Portfolio() -> impl IntoView {
    provide_toaster();
    provide_pointer();

    view! {
        <Title text="Portfolio" />
        <div class="min-h-screen bg-background">
            <Navigation />
            <main>
                <section id="home">
                    <Hero />
                </section>
                <About />
                <Projects />
                <Contact />
            </main>
            <Footer />
            <ToastViewport />
        </div>
    }
}

#[component]
fn Footer() -> impl IntoView {
    let year = build_year().map(|y| y.to_string()).unwrap_or_default();
    view! {
        <footer class="py-8 px-6 border-t border-border bg-surface/30">
            <div class="max-w-7xl mx-auto">
                <div class="flex flex-col md:flex-row justify-between items-center">
                    <div class="text-text-secondary mb-4 md:mb-0">
                        {format!("© {year} {OWNER}. All rights reserved.")}
                    </div>
                    <div class="text-text-secondary">"Built with ❤️ using Rust & Leptos"</div>
                </div>
            </div>
        </footer>
    }
}

/// Scrolls the page to the section with the given element id.
pub(crate) fn scroll_to_section(id: &str) {
    match document().get_element_by_id(id) {
        Some(el) => el.scroll_into_view_with_bool(true),
        None => log::warn!("no section with id {id}"),
    }
}
