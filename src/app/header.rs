use leptos::{either::*, prelude::*};

use crate::site::{NavLink, SITE};

use super::{navigation::use_nav, theme::use_theme_controller};

#[component]
pub fn Header() -> impl IntoView {
    let nav = use_nav();

    view! {
        <header class=move || {
            if nav.is_scrolled() {
                "fixed top-0 w-full z-50 bg-white/90 dark:bg-gray-900/90 backdrop-blur-sm shadow-md border-b border-gray-100 dark:border-gray-800 transition-all duration-300"
            } else {
                "fixed top-0 w-full z-50 bg-white/80 dark:bg-gray-900/80 backdrop-blur-sm border-b border-transparent transition-all duration-300"
            }
        }>
            <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between h-16">
                    <a
                        href="#home"
                        class="text-xl font-bold bg-clip-text text-transparent bg-gradient-to-r from-blue-600 to-purple-600"
                        on:click=move |ev| {
                            ev.prevent_default();
                            nav.navigate_to("home");
                        }
                    >
                        {SITE.first_name()}
                    </a>

                    <nav class="hidden md:flex items-center space-x-8">
                        {SITE
                            .nav_links
                            .iter()
                            .map(|link| view! { <DesktopLink link /> })
                            .collect_view()}
                        <ThemeToggle />
                        <a
                            href="#contact"
                            class="px-4 py-2 bg-blue-600 text-white text-sm font-medium rounded-md hover:bg-blue-700 transition-colors"
                            on:click=move |ev| {
                                ev.prevent_default();
                                nav.navigate_to("contact");
                            }
                        >
                            "Contact Me"
                        </a>
                    </nav>

                    <div class="flex md:hidden items-center space-x-4">
                        <ThemeToggle />
                        <button
                            class="p-2 rounded-md text-gray-600 hover:text-gray-900 dark:text-gray-300 dark:hover:text-white focus:outline-none"
                            aria-label="Toggle menu"
                            aria-expanded=move || nav.is_menu_open().to_string()
                            on:click=move |_| nav.toggle_menu()
                        >
                            <span class="text-2xl leading-none">
                                {move || if nav.is_menu_open() { "✕" } else { "☰" }}
                            </span>
                        </button>
                    </div>
                </div>
            </div>
            <MobileMenu />
        </header>
    }
}

#[component]
fn DesktopLink(link: &'static NavLink) -> impl IntoView {
    let nav = use_nav();
    let href = format!("#{}", link.section);
    view! {
        <a
            href=href
            class=move || {
                if nav.is_active(link.section) {
                    "px-3 py-2 text-sm font-medium rounded-md transition-colors text-blue-600 dark:text-blue-400"
                } else {
                    "px-3 py-2 text-sm font-medium rounded-md transition-colors text-gray-600 hover:text-gray-900 dark:text-gray-300 dark:hover:text-white"
                }
            }
            aria-current=move || nav.is_active(link.section).then_some("location")
            on:click=move |ev| {
                ev.prevent_default();
                nav.navigate_to(link.section);
            }
        >
            {link.label}
        </a>
    }
}

#[component]
fn MobileMenu() -> impl IntoView {
    let nav = use_nav();

    move || {
        if !nav.is_menu_open() {
            return Either::Left(());
        }
        Either::Right(
            view! {
                <div class="md:hidden overflow-hidden">
                    <div class="px-2 pt-2 pb-3 space-y-1 sm:px-3 border-t border-gray-100 dark:border-gray-800 bg-white dark:bg-gray-900">
                        {SITE
                            .nav_links
                            .iter()
                            .map(|link| {
                                view! {
                                    <button
                                        class=move || {
                                            if nav.is_active(link.section) {
                                                "block w-full text-left px-3 py-2 rounded-md text-base font-medium bg-blue-50 text-blue-600 dark:bg-gray-800 dark:text-blue-400"
                                            } else {
                                                "block w-full text-left px-3 py-2 rounded-md text-base font-medium text-gray-600 hover:bg-gray-50 dark:text-gray-300 dark:hover:bg-gray-800"
                                            }
                                        }
                                        on:click=move |_| nav.navigate_to(link.section)
                                    >
                                        {link.label}
                                    </button>
                                }
                            })
                            .collect_view()}
                        <button
                            class="block w-full text-center px-3 py-2 rounded-md text-base font-medium bg-blue-600 text-white hover:bg-blue-700 transition-colors mt-2"
                            on:click=move |_| nav.navigate_to("contact")
                        >
                            "Contact Me"
                        </button>
                    </div>
                </div>
            },
        )
    }
}

#[component]
fn ThemeToggle() -> impl IntoView {
    let theme = use_theme_controller();
    view! {
        <button
            class="p-2 rounded-full text-gray-600 hover:text-gray-900 dark:text-gray-300 dark:hover:text-white transition-colors"
            aria-label=move || theme.theme().toggle_label()
            on:click=move |_| theme.toggle()
        >
            {move || if theme.theme().is_dark() { "☀" } else { "☾" }}
        </button>
    }
}
