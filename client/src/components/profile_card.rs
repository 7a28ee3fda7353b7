//! Identity card shared by the student's own profile and the detail page.

use leptos::prelude::*;

use crate::net::types::StudentProfile;
use crate::state::profile::ProfileDetails;

/// Name, roll number and enrollment facts. The avatar is clickable only when
/// `on_avatar` is set.
#[component]
pub fn ProfileCard(
    profile: StudentProfile,
    #[prop(optional)] on_avatar: Option<Callback<leptos::ev::MouseEvent>>,
) -> impl IntoView {
    let details = ProfileDetails(&profile);
    let (name, roll, year, branch, email) = (details.name(), details.roll(), details.year(), details.branch(), details.email());
    let image = profile.image_url.clone().unwrap_or_default();
    let avatar_class =
        if on_avatar.is_some() { "profile-card__avatar profile-card__avatar--editable" } else { "profile-card__avatar" };

    view! {
        <div class="profile-card">
            <div
                class=avatar_class
                on:click=move |ev| {
                    if let Some(on_avatar) = on_avatar {
                        on_avatar.run(ev);
                    }
                }
            >
                <img src=image alt="Profile" />
            </div>
            <div class="profile-card__info">
                <h3>{name}</h3>
                <span class="profile-card__badge">"Roll no: " {roll}</span>
                <div class="profile-card__facts">
                    <span>"Year: " <strong>{year}</strong></span>
                    <span>"Branch: " <strong>{branch}</strong></span>
                    <span>"Email: " <strong>{email}</strong></span>
                </div>
            </div>
        </div>
    }
}
