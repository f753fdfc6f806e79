use leptos::{either::*, ev, prelude::*};
use leptos_use::{use_event_listener, use_window};

use crate::{
    portfolio::{filter_projects, project_categories, ALL_PROJECTS},
    site::{Project, SITE},
};

use super::navigation::{use_nav, NavController};

/// Project currently shown in the detail modal.
#[derive(Clone, Copy)]
struct Selection {
    selected: RwSignal<Option<&'static Project>>,
    nav: NavController,
}

impl Selection {
    fn open(&self, project: &'static Project) {
        self.selected.set(Some(project));
        self.nav.set_overlay_open(true);
    }

    fn close(&self) {
        if self.selected.get_untracked().is_none() {
            return;
        }
        self.selected.set(None);
        self.nav.set_overlay_open(false);
    }
}

#[component]
pub fn Projects() -> impl IntoView {
    let selection = Selection {
        selected: RwSignal::new(None),
        nav: use_nav(),
    };
    let (category, set_category) = signal(ALL_PROJECTS);

    let _ = use_event_listener(use_window(), ev::keydown, move |ev| {
        if ev.key() == "Escape" {
            selection.close();
        }
    });
    // a modal torn down with the page must not leave the body locked
    on_cleanup(move || selection.nav.set_overlay_open(false));

    view! {
        <section id="projects" class="relative py-24 bg-gradient-to-br from-gray-50 to-white dark:from-gray-900 dark:to-gray-800">
            <div class="container mx-auto px-6">
                <div class="text-center mb-12">
                    <h2 class="text-4xl md:text-5xl font-bold mb-6">"Projects"</h2>
                    <div class="w-20 h-1 bg-gradient-to-r from-purple-500 to-blue-500 mx-auto"></div>
                </div>
                <div class="flex flex-wrap justify-center gap-3 mb-12">
                    {project_categories(SITE.projects)
                        .into_iter()
                        .map(|option| {
                            view! {
                                <button
                                    class=move || {
                                        if category.get() == option {
                                            "px-4 py-2 rounded-full text-sm font-medium bg-blue-600 text-white"
                                        } else {
                                            "px-4 py-2 rounded-full text-sm font-medium bg-gray-100 dark:bg-gray-800 text-gray-600 dark:text-gray-300 hover:bg-gray-200 dark:hover:bg-gray-700"
                                        }
                                    }
                                    on:click=move |_| set_category.set(option)
                                >
                                    {option}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {move || {
                        filter_projects(SITE.projects, category.get())
                            .into_iter()
                            .map(|project| view! { <ProjectCard project selection /> })
                            .collect_view()
                    }}
                </div>
            </div>
            <ProjectModal selection />
        </section>
    }
}

#[component]
fn ProjectCard(project: &'static Project, selection: Selection) -> impl IntoView {
    view! {
        <article class="group rounded-2xl overflow-hidden bg-white dark:bg-gray-800 border border-gray-200 dark:border-gray-700 hover:shadow-xl transition-shadow">
            <button
                class="block w-full text-left"
                aria-label=format!("Show details for {}", project.title)
                on:click=move |_| selection.open(project)
            >
                <img
                    src=project.image_src()
                    alt=project.title
                    loading="lazy"
                    class="w-full h-48 object-cover group-hover:scale-105 transition-transform duration-300"
                />
                <div class="p-6">
                    <h3 class="text-xl font-semibold mb-2">{project.title}</h3>
                    <p class="text-sm text-gray-600 dark:text-gray-300 mb-4">{project.summary}</p>
                    <Tags tags=project.tags />
                </div>
            </button>
        </article>
    }
}

#[component]
fn Tags(tags: &'static [&'static str]) -> impl IntoView {
    view! {
        <div class="flex flex-wrap gap-2">
            {tags
                .iter()
                .map(|tag| {
                    view! {
                        <span class="px-2 py-1 text-xs rounded bg-purple-500/10 text-purple-600 dark:text-purple-300">
                            {*tag}
                        </span>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn ProjectModal(selection: Selection) -> impl IntoView {
    move || {
        let Some(project) = selection.selected.get() else {
            return Either::Left(());
        };
        Either::Right(view! {
            <div
                class="fixed inset-0 z-[60] flex items-center justify-center p-4 bg-black/70"
                role="dialog"
                aria-modal="true"
                aria-label=project.title
                on:click=move |_| selection.close()
            >
                <div
                    class="relative max-w-2xl w-full max-h-[90vh] overflow-y-auto rounded-2xl bg-white dark:bg-gray-900 shadow-2xl"
                    on:click=|ev| ev.stop_propagation()
                >
                    <button
                        class="absolute top-4 right-4 w-9 h-9 rounded-full bg-black/50 text-white hover:bg-black/70"
                        aria-label="Close"
                        on:click=move |_| selection.close()
                    >
                        "✕"
                    </button>
                    <img src=project.image_src() alt=project.title class="w-full h-64 object-cover" />
                    <div class="p-8">
                        <h3 class="text-2xl font-bold mb-4">{project.title}</h3>
                        <p class="text-gray-600 dark:text-gray-300 mb-4">{project.summary}</p>
                        <ul class="list-disc list-inside space-y-2 mb-6 text-gray-600 dark:text-gray-300">
                            {project
                                .details
                                .iter()
                                .map(|line| view! { <li>{*line}</li> })
                                .collect_view()}
                        </ul>
                        <Tags tags=project.tags />
                        <div class="flex gap-4 mt-8">
                            {project
                                .repo_url
                                .map(|url| view! { <ExternalLink url label="Source code" /> })}
                            {project
                                .live_url
                                .map(|url| view! { <ExternalLink url label="Live demo" /> })}
                        </div>
                    </div>
                </div>
            </div>
        })
    }
}

#[component]
fn ExternalLink(url: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <a
            href=url
            target="_blank"
            rel="noopener noreferrer"
            class="px-5 py-2 rounded-full text-sm font-medium bg-blue-600 text-white hover:bg-blue-700 transition-colors"
        >
            {label}
        </a>
    }
}
