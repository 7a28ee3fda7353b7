//! Teacher settings: profile fields and avatar.

use leptos::prelude::*;

use crate::net::error::ApiError;
use crate::net::settings::{AVATAR_EXTENSIONS, fetch_settings, replace_settings};
use crate::net::types::Settings;
use crate::query::cache::{QueryKey, QueryOptions, QueryStatus};
use crate::query::client::{run_mutation, use_query, use_query_client};
use crate::state::settings::{EDITABLE_FIELDS, SettingsState, avatar_url};
use crate::util::lifetime::Lifetime;

#[component]
pub fn SettingsPage() -> impl IntoView {
    let client = use_query_client();
    let lifetime = Lifetime::scoped();
    let settings = use_query::<Settings, _, _>(QueryKey::Settings, QueryOptions::default(), Signal::stored(true), fetch_settings);
    let form = RwSignal::new(SettingsState::default());
    let saving = RwSignal::new(false);
    let uploading = RwSignal::new(false);

    Effect::new(move || {
        if let Some(doc) = settings.data() {
            form.update(|f| f.sync(&doc));
        }
    });

    let save_lifetime = lifetime.clone();
    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(doc) = form.try_update(SettingsState::begin_save).flatten() else {
            return;
        };
        let lifetime = save_lifetime.clone();
        run_mutation(
            client,
            saving,
            Vec::new(),
            async move { replace_settings(&doc).await },
            move |result: Result<Settings, ApiError>| {
                if let Ok(saved) = &result {
                    client.set_data(&QueryKey::Settings, saved);
                }
                if lifetime.is_alive() {
                    form.update(|f| f.finish_save(result));
                }
            },
        );
    };

    let on_avatar = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let input: web_sys::HtmlInputElement = event_target(&ev);
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            input.set_value("");
            match form.try_update(|f| f.begin_upload(&file.name())) {
                Some(Ok(())) => {}
                Some(Err(reason)) => {
                    log::warn!("avatar rejected: {reason}");
                    return;
                }
                None => return,
            }
            let lifetime = lifetime.clone();
            run_mutation(
                client,
                uploading,
                vec![QueryKey::Settings],
                crate::net::settings::upload_avatar(file),
                move |result| {
                    let doc = if lifetime.is_alive() {
                        form.try_update(|f| f.finish_upload(result)).flatten()
                    } else {
                        result.ok().map(|upload| upload.settings)
                    };
                    if let Some(doc) = doc {
                        client.set_data(&QueryKey::Settings, &doc);
                    }
                },
            );
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (ev, &lifetime, uploading);
    };

    let load_failed = move || settings.status() == QueryStatus::Error && settings.data().is_none();
    let accept = AVATAR_EXTENSIONS.join(",");

    view! {
        <div class="settings-page">
            <div class="settings-page__header">
                <h2>"Settings"</h2>
                <p>"Manage your profile and account"</p>
            </div>

            <Show when=load_failed>
                <p class="settings-page__error">"Failed to load settings"</p>
            </Show>

            <section class="settings-page__avatar">
                {move || match form.with(|f| avatar_url(&f.draft)) {
                    Some(url) => view! { <img class="settings-page__avatar-img" src=url alt="Avatar" /> }.into_any(),
                    None => view! { <div class="settings-page__avatar-img settings-page__avatar-img--empty"></div> }.into_any(),
                }}
                <label class="btn">
                    {move || if uploading.get() { "Uploading..." } else { "Change avatar" }}
                    <input type="file" accept=accept hidden on:change=on_avatar />
                </label>
            </section>

            <form class="settings-page__form" on:submit=on_save>
                {EDITABLE_FIELDS
                    .into_iter()
                    .map(|(key, label)| {
                        view! {
                            <label class="settings-page__field">
                                <span>{label}</span>
                                <input
                                    type="text"
                                    prop:value=move || form.with(|f| f.field(key))
                                    on:input=move |ev| form.update(|f| f.set_field(key, event_target_value(&ev)))
                                />
                            </label>
                        }
                    })
                    .collect_view()}
                <label class="settings-page__field">
                    <span>"Email"</span>
                    <input type="email" readonly prop:value=move || form.with(|f| f.field("email")) />
                </label>

                <Show when=move || form.with(|f| f.error.is_some())>
                    <p class="settings-page__error">{move || form.with(|f| f.error.clone().unwrap_or_default())}</p>
                </Show>

                <button type="submit" class="btn btn--primary" disabled=move || saving.get()>
                    {move || if saving.get() { "Saving..." } else { "Save changes" }}
                </button>
            </form>
        </div>
    }
}
