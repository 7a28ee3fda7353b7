//! Read-only profile of one student, addressed by id.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::profile_card::ProfileCard;
use crate::net::students::fetch_student_profile;
use crate::net::types::StudentProfile;
use crate::query::cache::{QueryKey, QueryOptions};
use crate::query::client::use_query;
use crate::state::profile::{EMPTY_TEXT, LOADING_TEXT, ProfileView};

/// `/student/:id/profile`. A new id mounts a fresh query under its own key.
#[component]
pub fn StudentDetailPage() -> impl IntoView {
    let params = use_params_map();
    move || {
        let student_id = params.read().get("id").unwrap_or_default();
        view! { <StudentDetail student_id=student_id /> }
    }
}

#[component]
fn StudentDetail(student_id: String) -> impl IntoView {
    let fetch_id = student_id.clone();
    let profile = use_query::<StudentProfile, _, _>(
        QueryKey::StudentProfile(student_id),
        QueryOptions::default(),
        Signal::stored(true),
        move || {
            let id = fetch_id.clone();
            async move { fetch_student_profile(&id).await }
        },
    );

    move || match ProfileView::from_query(profile.status(), profile.error().as_ref(), profile.data()) {
        ProfileView::Loading => view! { <div class="profile-page__status">{LOADING_TEXT}</div> }.into_any(),
        ProfileView::Error(message) => {
            view! { <div class="profile-page__status profile-page__status--error">{message}</div> }.into_any()
        }
        ProfileView::Empty => view! { <div class="profile-page__status">{EMPTY_TEXT}</div> }.into_any(),
        ProfileView::Ready(data) => view! {
            <div class="profile-page">
                <div class="profile-page__header">
                    <h2>"Student profile"</h2>
                </div>
                <ProfileCard profile=data />
            </div>
        }
        .into_any(),
    }
}
