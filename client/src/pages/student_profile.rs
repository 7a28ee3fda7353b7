//! Student profile: personal details, face image, attendance, subjects.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything shown here comes from three cached queries. Mutations never
//! edit cached data directly; they invalidate keys and the mounted queries
//! refetch, so the face image shown after an upload is whatever URL the
//! server now reports.

use leptos::prelude::*;

use crate::components::profile_card::ProfileCard;
use crate::components::subject_attendance_card::SubjectAttendanceCard;
use crate::net::students::{add_subject, fetch_available_subjects, fetch_my_profile, fetch_my_subjects, remove_subject};
use crate::net::types::{AvailableSubject, StudentProfile, Subject};
use crate::query::cache::{QueryKey, QueryOptions};
use crate::query::client::{run_mutation, use_query, use_query_client};
use crate::state::profile::{
    AttendanceSummary, EMPTY_TEXT, LOADING_TEXT, ProfileMutation, ProfileView, bar_width, delete_subject_prompt,
    percentage_label,
};
use crate::util::dialog;
use crate::util::lifetime::Lifetime;

#[component]
pub fn StudentProfilePage() -> impl IntoView {
    let client = use_query_client();
    let lifetime = Lifetime::scoped();
    let add_open = RwSignal::new(false);

    let profile = use_query::<StudentProfile, _, _>(
        QueryKey::MyStudentProfile,
        QueryOptions::default().with_retry(0),
        Signal::stored(true),
        fetch_my_profile,
    );
    let subjects = use_query::<Vec<Subject>, _, _>(
        QueryKey::MySubjects,
        QueryOptions::default(),
        Signal::stored(true),
        fetch_my_subjects,
    );
    let available = use_query::<Vec<AvailableSubject>, _, _>(
        QueryKey::AvailableSubjects,
        QueryOptions::default(),
        add_open.into(),
        fetch_available_subjects,
    );

    let uploading = RwSignal::new(false);
    let adding = RwSignal::new(false);
    let removing = RwSignal::new(false);
    let file_ref = NodeRef::<leptos::html::Input>::new();

    let open_picker = move |_: leptos::ev::MouseEvent| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(input) = file_ref.get() {
                input.click();
            }
        }
    };

    let on_file = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let input: web_sys::HtmlInputElement = event_target(&ev);
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            input.set_value("");
            run_mutation(
                client,
                uploading,
                ProfileMutation::UploadFaceImage.invalidates().to_vec(),
                crate::net::students::upload_face_image(file),
                |_| {},
            );
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (ev, client, uploading);
    };

    let on_add = Callback::new(move |subject_id: String| {
        let lifetime = lifetime.clone();
        run_mutation(
            client,
            adding,
            ProfileMutation::AddSubject.invalidates().to_vec(),
            add_subject(subject_id),
            move |result| {
                if result.is_ok() && lifetime.is_alive() {
                    add_open.set(false);
                }
            },
        );
    });

    let on_remove = Callback::new(move |subject: Subject| {
        if !dialog::confirm(&delete_subject_prompt(&subject.name)) {
            return;
        }
        run_mutation(
            client,
            removing,
            ProfileMutation::RemoveSubject.invalidates().to_vec(),
            remove_subject(subject.id),
            |_| {},
        );
    });

    let page_view = move || {
        ProfileView::resolve(profile.status(), subjects.status(), profile.error().as_ref(), profile.data())
    };

    move || match page_view() {
        ProfileView::Loading => view! { <div class="profile-page__status">{LOADING_TEXT}</div> }.into_any(),
        ProfileView::Error(message) => {
            view! { <div class="profile-page__status profile-page__status--error">{message}</div> }.into_any()
        }
        ProfileView::Empty => view! { <div class="profile-page__status">{EMPTY_TEXT}</div> }.into_any(),
        ProfileView::Ready(data) => {
            let subject_list = subjects.data().unwrap_or_default();
            let summary = AttendanceSummary::from_subjects(&subject_list);
            view! {
                <div class="profile-page">
                    <div class="profile-page__header">
                        <h2>"Profile"</h2>
                        <p>"Upload your face image and review your details"</p>
                    </div>

                    <ProfileCard profile=data.clone() on_avatar=Callback::new(open_picker) />

                    <input
                        type="file"
                        accept="image/*"
                        hidden
                        node_ref=file_ref
                        on:change=on_file
                    />

                    <FaceImageCard image_url=data.image_url.clone() uploading=uploading on_pick=open_picker />

                    <SummaryCard summary=summary />

                    <Show when=move || add_open.get()>
                        <div class="dialog-backdrop" on:click=move |_| add_open.set(false)>
                            <div class="dialog dialog--subjects" on:click=move |ev| ev.stop_propagation()>
                                <h3>"Add Subject"</h3>
                                <Show when=move || available.is_fetching()>
                                    <p class="dialog__status">{LOADING_TEXT}</p>
                                </Show>
                                {move || {
                                    available
                                        .data()
                                        .unwrap_or_default()
                                        .into_iter()
                                        .map(|subject| {
                                            let id = subject.id.clone();
                                            view! {
                                                <button
                                                    class="btn dialog__option"
                                                    disabled=move || adding.get()
                                                    on:click=move |_| on_add.run(id.clone())
                                                >
                                                    {subject.name}
                                                </button>
                                            }
                                        })
                                        .collect_view()
                                }}
                                <button class="btn btn--link" on:click=move |_| add_open.set(false)>
                                    "Cancel"
                                </button>
                            </div>
                        </div>
                    </Show>

                    <section class="profile-page__subjects">
                        <div class="profile-page__subjects-header">
                            <div>
                                <h4>"Subjects"</h4>
                                <p>"Keep your current subjects up to date for accurate attendance reports."</p>
                            </div>
                            <button class="btn" on:click=move |_| add_open.set(true)>
                                "+ Add subject"
                            </button>
                        </div>
                        {if subject_list.is_empty() {
                            view! {
                                <div class="profile-page__subjects-empty">
                                    <p>"No subjects enrolled yet."</p>
                                    <button class="btn btn--link" on:click=move |_| add_open.set(true)>
                                        "Enroll in a subject"
                                    </button>
                                </div>
                            }
                            .into_any()
                        } else {
                            view! {
                                <div class="profile-page__subject-grid">
                                    {subject_list
                                        .into_iter()
                                        .map(|subject| view! { <SubjectAttendanceCard subject=subject on_delete=on_remove /> })
                                        .collect_view()}
                                </div>
                            }
                            .into_any()
                        }}
                    </section>
                </div>
            }
            .into_any()
        }
    }
}

#[component]
fn FaceImageCard<F>(image_url: Option<String>, uploading: RwSignal<bool>, on_pick: F) -> impl IntoView
where
    F: Fn(leptos::ev::MouseEvent) + Clone + Send + Sync + 'static,
{
    let action = move || if uploading.get() { "Uploading..." } else { "Upload photo" };

    view! {
        <div class="face-card">
            <div class="face-card__text">
                <h4>"Face image for attendance"</h4>
                <p>"Upload a clear, high-quality photo. This will be used for face recognition during attendance."</p>
            </div>
            {match image_url {
                Some(url) => view! {
                    <div class="face-card__preview">
                        <img src=url alt="Face preview" />
                        <button class="btn btn--link" on:click=on_pick>"Replace photo"</button>
                    </div>
                }
                .into_any(),
                None => view! { <button class="btn" on:click=on_pick>{action}</button> }.into_any(),
            }}
            <p class="face-card__tips">
                "Tips: Use good lighting, look straight at the camera, avoid masks, caps, or filters."
            </p>
        </div>
    }
}

#[component]
fn SummaryCard(summary: AttendanceSummary) -> impl IntoView {
    let tone = if summary.on_track() { "ok" } else { "low" };

    view! {
        <div class="summary-card">
            <div class="summary-card__header">
                <h4>"Attendance summary"</h4>
                <span class="summary-card__badge">"This semester"</span>
            </div>
            <div class="summary-card__overall">
                <span>"Overall percentage"</span>
                <strong>{percentage_label(summary.percentage)}</strong>
            </div>
            <div class="summary-card__bar">
                <div class=format!("summary-card__bar-fill summary-card__bar-fill--{tone}") style=bar_width(summary.percentage)></div>
            </div>
            <div class="summary-card__counts">
                <div>
                    <p>"Classes attended"</p>
                    <strong>{summary.attended}</strong>
                </div>
                <div>
                    <p>"Total conducted"</p>
                    <strong>{summary.total}</strong>
                </div>
            </div>
            <div class=format!("summary-card__status summary-card__status--{tone}")>{summary.status_text()}</div>
        </div>
    }
}
