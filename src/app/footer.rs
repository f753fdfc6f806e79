use leptos::prelude::*;

use crate::site::{BUILD, SITE};

use super::{hero::SocialLinks, navigation::use_nav};

#[component]
pub fn Footer() -> impl IntoView {
    let nav = use_nav();
    let copyright = match BUILD.build_year() {
        Some(year) => format!("© {year} {}. All rights reserved.", SITE.name),
        None => format!("© {}. All rights reserved.", SITE.name),
    };

    view! {
        <footer class="bg-gray-900 text-gray-300 pt-16 pb-8">
            <div class="container mx-auto px-6">
                <div class="grid md:grid-cols-3 gap-12 mb-12">
                    <div>
                        <h3 class="text-2xl font-bold text-white mb-2">{SITE.name}</h3>
                        <p class="text-gray-400 mb-6">{SITE.title}</p>
                        <SocialLinks layout="flex gap-4 text-xl text-gray-400" />
                    </div>
                    <div>
                        <h4 class="text-lg font-semibold text-white mb-4">"Quick Links"</h4>
                        <ul class="space-y-2">
                            {SITE
                                .nav_links
                                .iter()
                                .map(|link| {
                                    view! {
                                        <li>
                                            <button
                                                class="hover:text-white transition-colors"
                                                on:click=move |_| nav.navigate_to(link.section)
                                            >
                                                {link.label}
                                            </button>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>
                    <div>
                        <h4 class="text-lg font-semibold text-white mb-4">"Contact"</h4>
                        <ul class="space-y-2">
                            <li>
                                <a href=SITE.mailto_href() class="hover:text-white transition-colors">
                                    {SITE.email}
                                </a>
                            </li>
                            <li>
                                <a href=SITE.phone_href() class="hover:text-white transition-colors">
                                    {SITE.phone}
                                </a>
                            </li>
                            <li>{SITE.location}</li>
                        </ul>
                    </div>
                </div>
                <div class="border-t border-gray-800 pt-8 flex flex-col md:flex-row items-center justify-between gap-4 text-sm text-gray-500">
                    <p>{copyright}</p>
                    <button
                        class="hover:text-white transition-colors"
                        on:click=move |_| nav.navigate_to("home")
                    >
                        "Back to top ↑"
                    </button>
                </div>
            </div>
        </footer>
    }
}
