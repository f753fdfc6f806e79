use leptos::{either::*, prelude::*, server_fn::codec::Json, task::spawn_local};

use crate::{
    contact::{
        BannerKind, ContactError, ContactField, ContactForm, ContactFormState, Submission,
        BANNER_DURATION,
    },
    site::{opens_in_new_tab, SITE},
};

use super::hero::SocialLinks;

/// Validates the message again and hands it to the configured email service.
#[server(input = Json)]
pub async fn send_message(form: ContactForm) -> Result<(), ServerFnError> {
    form.validate().map_err(|e| ServerFnError::new(e.to_string()))?;
    let delivery = crate::delivery::shared().map_err(|e| {
        tracing::error!("contact form submitted without delivery configured: {e}");
        ServerFnError::new(e.to_string())
    })?;
    delivery.send(&form).await.map_err(|e| {
        tracing::warn!("couldn't deliver contact message: {e}");
        ServerFnError::new(e.to_string())
    })?;
    tracing::info!("delivered contact message from {}", form.email);
    Ok(())
}

fn expire_later(state: RwSignal<ContactFormState>, id: u64) {
    set_timeout(
        move || {
            state.maybe_update(|s| s.expire_banner(id));
        },
        BANNER_DURATION,
    );
}

#[component]
pub fn Contact() -> impl IntoView {
    let state = RwSignal::new(ContactFormState::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut submission = Submission::Busy;
        state.update(|s| submission = s.begin_submit());
        match submission {
            Submission::Send(form) => spawn_local(async move {
                let outcome = send_message(form)
                    .await
                    .map_err(|e| ContactError::Delivery(e.to_string()));
                if let Err(err) = &outcome {
                    log::warn!("contact submission failed: {err}");
                }
                let mut id = 0;
                state.update(|s| id = s.finish(outcome));
                expire_later(state, id);
            }),
            Submission::Rejected(id) => expire_later(state, id),
            Submission::Busy => {}
        }
    };

    view! {
        <section id="contact" class="relative py-24 bg-white dark:bg-gray-900">
            <div class="container mx-auto px-6">
                <div class="text-center mb-16">
                    <h2 class="text-4xl md:text-5xl font-bold mb-6">"Get In Touch"</h2>
                    <div class="w-20 h-1 bg-gradient-to-r from-purple-500 to-blue-500 mx-auto mb-8"></div>
                    <p class="text-xl text-gray-600 dark:text-gray-300 max-w-2xl mx-auto">
                        "Have a project in mind or just want to say hello? My inbox is open."
                    </p>
                </div>
                <div class="grid lg:grid-cols-2 gap-12 max-w-6xl mx-auto">
                    <div class="space-y-6">
                        <InfoCard label="Email" value=SITE.email href=SITE.mailto_href() />
                        <InfoCard label="Phone" value=SITE.phone href=SITE.phone_href() />
                        <InfoCard label="Location" value=SITE.location href=SITE.maps_url.to_string() />
                        <SocialLinks layout="flex gap-6 text-2xl text-gray-500 dark:text-gray-400 pt-4" />
                    </div>
                    <form class="space-y-6" on:submit=on_submit>
                        <div class="grid sm:grid-cols-2 gap-6">
                            <TextInput state field=ContactField::Name label="Your name" kind="text" />
                            <TextInput state field=ContactField::Email label="Your email" kind="email" />
                        </div>
                        <TextInput state field=ContactField::Subject label="Subject" kind="text" />
                        <div>
                            <label for="contact-message" class="block text-sm font-medium mb-2">
                                "Message"
                            </label>
                            <textarea
                                id="contact-message"
                                name="message"
                                rows="6"
                                required=true
                                class="w-full px-4 py-3 rounded-lg bg-gray-50 dark:bg-gray-800 border border-gray-200 dark:border-gray-700 focus:outline-none focus:ring-2 focus:ring-purple-500"
                                prop:value=move || state.with(|s| s.form.message.clone())
                                on:input=move |ev| {
                                    state.update(|s| s.form.set(ContactField::Message, event_target_value(&ev)))
                                }
                            ></textarea>
                        </div>
                        <button
                            type="submit"
                            class="w-full px-8 py-3 bg-gradient-to-r from-blue-600 to-purple-600 text-white rounded-full font-medium disabled:opacity-60 disabled:cursor-not-allowed"
                            prop:disabled=move || state.with(|s| s.is_submitting())
                        >
                            {move || {
                                if state.with(|s| s.is_submitting()) { "Sending..." } else { "Send message" }
                            }}
                        </button>
                        <StatusBanner state />
                    </form>
                </div>
            </div>
        </section>
    }
}

#[component]
fn InfoCard(label: &'static str, value: &'static str, href: String) -> impl IntoView {
    let new_tab = opens_in_new_tab(&href);
    view! {
        <a
            href=href
            target=new_tab.then_some("_blank")
            rel=new_tab.then_some("noopener noreferrer")
            class="block p-6 rounded-2xl bg-gray-50 dark:bg-gray-800/50 border border-gray-200 dark:border-gray-700/50 hover:border-purple-500/50 transition-colors"
        >
            <p class="text-sm text-gray-500 dark:text-gray-400">{label}</p>
            <p class="text-lg font-medium">{value}</p>
        </a>
    }
}

#[component]
fn TextInput(
    state: RwSignal<ContactFormState>,
    field: ContactField,
    label: &'static str,
    kind: &'static str,
) -> impl IntoView {
    let id = format!("contact-{}", field.as_str());
    view! {
        <div>
            <label for=id.clone() class="block text-sm font-medium mb-2">
                {label}
            </label>
            <input
                id=id
                name=field.as_str()
                type=kind
                required=true
                class="w-full px-4 py-3 rounded-lg bg-gray-50 dark:bg-gray-800 border border-gray-200 dark:border-gray-700 focus:outline-none focus:ring-2 focus:ring-purple-500"
                prop:value=move || state.with(|s| s.form.get(field).to_string())
                on:input=move |ev| state.update(|s| s.form.set(field, event_target_value(&ev)))
            />
        </div>
    }
}

#[component]
fn StatusBanner(state: RwSignal<ContactFormState>) -> impl IntoView {
    move || {
        let Some((kind, message)) = state.with(|s| s.banner().map(|b| (b.kind, b.message.clone())))
        else {
            return Either::Left(());
        };
        let class = match kind {
            BannerKind::Success => {
                "p-4 rounded-lg text-sm bg-green-500/10 text-green-700 dark:text-green-300 border border-green-500/30"
            }
            BannerKind::Failure => {
                "p-4 rounded-lg text-sm bg-red-500/10 text-red-700 dark:text-red-300 border border-red-500/30"
            }
        };
        Either::Right(view! {
            <div class=class role="status">
                {message}
            </div>
        })
    }
}
