//! Teacher dashboard: landing route with quick links and the exam-days modal.

use leptos::prelude::*;

use crate::components::exam_days_modal::ExamDaysModal;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let show_exams = RwSignal::new(false);
    let on_close = Callback::new(move |()| show_exams.set(false));

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <div>
                    <h2>"Dashboard"</h2>
                    <p>"Today's classes, schedule and announcements"</p>
                </div>
                <button class="btn btn--primary" on:click=move |_| show_exams.set(true)>
                    "Exam days"
                </button>
            </header>

            <div class="dashboard-page__cards">
                <a class="dashboard-card" href="/broadcast">
                    <h3>"Broadcast"</h3>
                    <p>"Send announcements to a class or the whole school."</p>
                </a>
                <a class="dashboard-card" href="/settings">
                    <h3>"Settings"</h3>
                    <p>"Update your profile details and avatar."</p>
                </a>
                <a class="dashboard-card" href="/student/profile">
                    <h3>"Student profile"</h3>
                    <p>"Face image, subjects and attendance summary."</p>
                </a>
            </div>

            <Show when=move || show_exams.get()>
                <ExamDaysModal on_close=on_close />
            </Show>
        </div>
    }
}
