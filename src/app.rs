mod about;
mod contact;
mod experience;
mod footer;
mod header;
mod hero;
mod navigation;
mod projects;
mod theme;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::site::{BUILD, DEVICON_STYLESHEET, FAVICON, SITE};

use about::About;
use contact::Contact;
use experience::Experience;
use footer::Footer;
use header::Header;
use hero::Hero;
use projects::Projects;

pub use contact::send_message;
pub use navigation::NavController;
pub use theme::ThemeController;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    let analytics = BUILD.analytics_id().map(|id| {
        let loader = format!("https://www.googletagmanager.com/gtag/js?id={}", id);
        let init = format!(
            "window.dataLayer = window.dataLayer || [];\
             function gtag(){{dataLayer.push(arguments);}}\
             gtag('js', new Date());\
             gtag('config', '{}');",
            id
        );
        view! {
            <script defer="defer" src=loader></script>
            <script inner_html=init></script>
        }
    });

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="light dark" />
                <link rel="icon" type="image/svg+xml" href=FAVICON />
                <link rel="stylesheet" href=DEVICON_STYLESHEET />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                {analytics}
                <MetaTags />
            </head>
            <body class="font-sans">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    theme::use_theme();
    navigation::use_navigation(SITE.section_ids());

    view! {
        <Title text=BUILD.title />
        <SeoMeta />

        <Router base=BUILD.router_base()>
            <div class="min-h-screen bg-white dark:bg-gray-900 text-gray-900 dark:text-gray-100 transition-colors duration-200">
                <Header />
                <main class="pt-16">
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=path!("/") view=HomePage />
                    </Routes>
                </main>
                <Footer />
            </div>
        </Router>
    }
}

#[component]
fn SeoMeta() -> impl IntoView {
    let seo = &SITE.seo;
    let keywords = seo.keywords.join(", ");
    view! {
        <Meta name="description" content=seo.description />
        <Meta name="keywords" content=keywords />
        <Meta name="author" content=seo.author />
        <Meta property="og:title" content=BUILD.title />
        <Meta property="og:description" content=seo.description />
        <Meta property="og:image" content=seo.image />
        <Meta property="og:url" content=seo.url />
        <Meta name="twitter:card" content="summary_large_image" />
        <Meta name="twitter:creator" content=seo.twitter />
    }
}

/// The whole page: every navigable section, in order.
#[component]
fn HomePage() -> impl IntoView {
    Effect::new(move |_| {
        window().scroll_to_with_x_and_y(0.0, 0.0);
    });

    view! {
        <Hero />
        <About />
        <Experience />
        <Projects />
        <Contact />
    }
}
