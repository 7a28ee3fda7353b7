//! Card showing one enrolled subject's attendance.

use leptos::prelude::*;

use crate::net::types::Subject;
use crate::state::profile::{bar_width, is_on_track, percentage_label, subject_percentage};

/// Subject attendance card with a remove action. `on_delete` receives the
/// subject; confirmation is the caller's job.
#[component]
pub fn SubjectAttendanceCard(subject: Subject, on_delete: Callback<Subject>) -> impl IntoView {
    let percentage = subject_percentage(&subject);
    let bar_class = if is_on_track(percentage) {
        "subject-card__bar-fill subject-card__bar-fill--ok"
    } else {
        "subject-card__bar-fill subject-card__bar-fill--low"
    };
    let counts = format!("{} / {} classes", subject.attended, subject.total);
    let name = subject.name.clone();

    view! {
        <div class="subject-card">
            <div class="subject-card__header">
                <h5>{name}</h5>
                <button
                    class="btn btn--danger subject-card__remove"
                    title="Remove subject"
                    on:click=move |_| on_delete.run(subject.clone())
                >
                    "Remove"
                </button>
            </div>
            <div class="subject-card__stats">
                <span class="subject-card__percentage">{percentage_label(percentage)}</span>
                <span class="subject-card__counts">{counts}</span>
            </div>
            <div class="subject-card__bar">
                <div class=bar_class style=bar_width(percentage)></div>
            </div>
        </div>
    }
}
