use leptos::prelude::*;

use crate::site::SITE;

use super::navigation::use_nav;

#[component]
pub fn Hero() -> impl IntoView {
    let nav = use_nav();

    view! {
        <section
            id="home"
            class="relative min-h-screen flex flex-col items-center justify-center overflow-hidden bg-gradient-to-br from-gray-900 via-purple-900 to-gray-900 text-white"
        >
            <div class="container mx-auto px-6 text-center relative z-10">
                <span class="inline-block px-4 py-2 mb-6 text-sm font-medium text-purple-300 bg-purple-900/30 rounded-full border border-purple-500/30">
                    {SITE.availability}
                </span>
                <h1 class="text-5xl md:text-7xl font-bold mb-6">
                    "Hi, I'm "
                    <span class="bg-clip-text text-transparent bg-gradient-to-r from-blue-400 to-purple-500">
                        {SITE.name}
                    </span>
                </h1>
                <h2 class="text-2xl md:text-3xl font-semibold text-gray-300 mb-6">{SITE.title}</h2>
                <p class="text-lg text-gray-400 max-w-3xl mx-auto mb-10 leading-relaxed">
                    {SITE.description}
                </p>
                <div class="flex flex-col sm:flex-row items-center justify-center gap-4 mb-12">
                    <button
                        class="px-8 py-3 bg-gradient-to-r from-blue-600 to-purple-600 rounded-full font-medium hover:shadow-lg hover:shadow-purple-500/30 transition-all duration-300"
                        on:click=move |_| nav.navigate_to("projects")
                    >
                        "View my work"
                    </button>
                    <button
                        class="px-8 py-3 border border-gray-500 rounded-full font-medium hover:bg-white/10 transition-all duration-300"
                        on:click=move |_| nav.navigate_to("contact")
                    >
                        "Contact me"
                    </button>
                </div>
                <SocialLinks layout="flex justify-center gap-6 text-2xl text-gray-400" />
            </div>
            <button
                class="absolute bottom-10 left-1/2 -translate-x-1/2 text-gray-400 hover:text-white animate-bounce"
                aria-label="Scroll to about"
                on:click=move |_| nav.navigate_to("about")
            >
                "↓"
            </button>
        </section>
    }
}

/// Icon links to every configured social profile.
#[component]
pub fn SocialLinks(layout: &'static str) -> impl IntoView {
    view! {
        <div class=layout>
            {SITE
                .social
                .iter()
                .map(|link| {
                    view! {
                        <a
                            href=link.url
                            target="_blank"
                            rel="noopener noreferrer"
                            class="inline-flex items-center gap-2 hover:text-white transition-colors"
                            title=link.network.label()
                        >
                            <i class=link.network.icon_class() aria-hidden="true"></i>
                            <span class="text-sm">{link.network.label()}</span>
                        </a>
                    }
                })
                .collect_view()}
        </div>
    }
}
