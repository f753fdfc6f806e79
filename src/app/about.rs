use leptos::prelude::*;

use crate::{portfolio::skill_categories, site::SITE};

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="relative py-24 bg-gradient-to-br from-gray-50 to-white dark:from-gray-900 dark:to-gray-800">
            <div class="container mx-auto px-6">
                <div class="text-center mb-16">
                    <h2 class="text-4xl md:text-5xl font-bold mb-6">"About Me"</h2>
                    <div class="w-20 h-1 bg-gradient-to-r from-purple-500 to-blue-500 mx-auto mb-8"></div>
                    <p class="text-xl text-gray-600 dark:text-gray-300 max-w-3xl mx-auto">
                        {SITE.description}
                    </p>
                </div>
                <div class="grid lg:grid-cols-3 gap-12">
                    <PersonalInfo />
                    <div class="lg:col-span-2">
                        <Skills />
                    </div>
                </div>
                <div class="grid md:grid-cols-3 gap-8 mt-16">
                    <SoftSkills />
                    <Certifications />
                    <Hobbies />
                </div>
            </div>
        </section>
    }
}

#[component]
fn PersonalInfo() -> impl IntoView {
    let rows = [
        ("Name", SITE.name),
        ("Age", SITE.age),
        ("Location", SITE.location),
        ("Email", SITE.email),
        ("Phone", SITE.phone),
    ];
    view! {
        <div class="p-6 rounded-2xl bg-white dark:bg-gray-800/50 border border-gray-200 dark:border-gray-700/50">
            <h3 class="text-xl font-semibold mb-4">"Personal Info"</h3>
            <dl class="space-y-3 text-sm">
                {rows
                    .into_iter()
                    .map(|(label, value)| {
                        view! {
                            <div class="flex justify-between gap-4">
                                <dt class="font-medium text-gray-500 dark:text-gray-400">{label}</dt>
                                <dd class="text-right">{value}</dd>
                            </div>
                        }
                    })
                    .collect_view()}
            </dl>
        </div>
    }
}

#[component]
fn Skills() -> impl IntoView {
    let categories = StoredValue::new(skill_categories(&SITE.skills));
    let (active, set_active) = signal("frontend");

    view! {
        <div>
            <div class="flex flex-wrap gap-3 mb-8" role="tablist">
                {categories
                    .get_value()
                    .into_iter()
                    .map(|category| {
                        let id = category.id;
                        view! {
                            <button
                                role="tab"
                                aria-selected=move || (active.get() == id).to_string()
                                class=move || {
                                    if active.get() == id {
                                        "px-4 py-2 rounded-full text-sm font-medium bg-purple-500/20 text-purple-600 dark:text-purple-300 border border-purple-500/30"
                                    } else {
                                        "px-4 py-2 rounded-full text-sm font-medium bg-gray-100 dark:bg-gray-800 text-gray-600 dark:text-gray-300 hover:bg-gray-200 dark:hover:bg-gray-700"
                                    }
                                }
                                on:click=move |_| set_active.set(id)
                            >
                                {category.label}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="flex flex-wrap gap-3">
                {move || {
                    let id = active.get();
                    categories
                        .with_value(|all| {
                            all.iter().find(|c| c.id == id).map(|c| c.items.clone())
                        })
                        .unwrap_or_default()
                        .into_iter()
                        .map(|skill| {
                            view! {
                                <span class="px-4 py-2 rounded-lg bg-white dark:bg-gray-800 border border-gray-200 dark:border-gray-700 text-sm">
                                    {skill}
                                </span>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}

#[component]
fn SoftSkills() -> impl IntoView {
    view! {
        <div>
            <h3 class="text-xl font-semibold mb-4">"Soft Skills"</h3>
            <ul class="space-y-2">
                {SITE
                    .skills
                    .soft_skills
                    .iter()
                    .map(|skill| view! { <li>"✓ " {*skill}</li> })
                    .collect_view()}
            </ul>
        </div>
    }
}

#[component]
fn Certifications() -> impl IntoView {
    view! {
        <div>
            <h3 class="text-xl font-semibold mb-4">"Certifications"</h3>
            <ul class="space-y-3">
                {SITE
                    .certifications
                    .iter()
                    .map(|cert| {
                        view! {
                            <li>
                                <p class="font-medium">{cert.name}</p>
                                <p class="text-sm text-gray-500 dark:text-gray-400">
                                    {format!("{} · {}", cert.issuer, cert.year)}
                                </p>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}

#[component]
fn Hobbies() -> impl IntoView {
    view! {
        <div>
            <h3 class="text-xl font-semibold mb-4">"Hobbies"</h3>
            <div class="flex flex-wrap gap-2">
                {SITE
                    .hobbies
                    .iter()
                    .map(|hobby| {
                        view! {
                            <span class="px-3 py-1 rounded-full text-sm bg-blue-500/10 text-blue-600 dark:text-blue-300">
                                {*hobby}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
