use leptos::prelude::*;

use crate::{
    portfolio::{timeline, TimelineEntry, TimelineFilter, TimelineKind},
    site::SITE,
};

#[component]
pub fn Experience() -> impl IntoView {
    let entries = StoredValue::new(timeline(SITE.experience, SITE.education));
    let (filter, set_filter) = signal(TimelineFilter::All);

    view! {
        <section id="experience" class="relative py-24 bg-white dark:bg-gray-900">
            <div class="container mx-auto px-6">
                <div class="text-center mb-12">
                    <h2 class="text-4xl md:text-5xl font-bold mb-6">"Experience"</h2>
                    <div class="w-20 h-1 bg-gradient-to-r from-purple-500 to-blue-500 mx-auto"></div>
                </div>
                <div class="flex justify-center gap-3 mb-12" role="tablist">
                    {TimelineFilter::ALL
                        .into_iter()
                        .map(|option| {
                            view! {
                                <button
                                    role="tab"
                                    aria-selected=move || (filter.get() == option).to_string()
                                    class=move || {
                                        if filter.get() == option {
                                            "px-5 py-2 rounded-full text-sm font-medium bg-blue-600 text-white"
                                        } else {
                                            "px-5 py-2 rounded-full text-sm font-medium bg-gray-100 dark:bg-gray-800 text-gray-600 dark:text-gray-300 hover:bg-gray-200 dark:hover:bg-gray-700"
                                        }
                                    }
                                    on:click=move |_| set_filter.set(option)
                                >
                                    {option.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <ol class="relative max-w-3xl mx-auto border-l-2 border-purple-500/30">
                    {move || {
                        let current = filter.get();
                        entries
                            .get_value()
                            .into_iter()
                            .filter(|entry| current.matches(entry.kind))
                            .map(|entry| view! { <TimelineItem entry /> })
                            .collect_view()
                    }}
                </ol>
            </div>
        </section>
    }
}

#[component]
fn TimelineItem(entry: TimelineEntry) -> impl IntoView {
    let badge = match entry.kind {
        TimelineKind::Work => "Work",
        TimelineKind::Education => "Education",
    };
    let place = match entry.location {
        Some(location) => format!("{} · {}", entry.organization, location),
        None => entry.organization.to_string(),
    };

    view! {
        <li class="mb-12 ml-8">
            <span class="absolute -left-[9px] w-4 h-4 rounded-full bg-gradient-to-r from-blue-500 to-purple-500"></span>
            <div class="p-6 rounded-2xl bg-gray-50 dark:bg-gray-800/50 border border-gray-200 dark:border-gray-700/50">
                <div class="flex flex-wrap items-center justify-between gap-2 mb-2">
                    <span class="text-xs uppercase tracking-wide text-purple-600 dark:text-purple-300">
                        {badge}
                    </span>
                    <time class="text-sm text-gray-500 dark:text-gray-400">
                        {entry.period.to_string()}
                    </time>
                </div>
                <h3 class="text-xl font-semibold">{entry.title}</h3>
                <p class="text-gray-600 dark:text-gray-300 mb-4">{place}</p>
                <ul class="list-disc list-inside space-y-1 text-sm text-gray-600 dark:text-gray-300">
                    {entry
                        .highlights
                        .iter()
                        .map(|line| view! { <li>{*line}</li> })
                        .collect_view()}
                </ul>
                <div class="flex flex-wrap gap-2 mt-4">
                    {entry
                        .tags
                        .iter()
                        .map(|tag| {
                            view! {
                                <span class="px-2 py-1 text-xs rounded bg-blue-500/10 text-blue-600 dark:text-blue-300">
                                    {*tag}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </li>
    }
}
