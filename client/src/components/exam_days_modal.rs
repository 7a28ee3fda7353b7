//! Modal for managing exam days on the teacher's schedule.
//!
//! SYSTEM CONTEXT
//! ==============
//! Opened from the dashboard. The list is fetched on mount and kept locally;
//! create/update responses are merged into it and deletes remove rows only
//! after the server confirms. Responses that arrive after the modal closes
//! are dropped via the component lifetime token.

use leptos::prelude::*;

use crate::net::types::Exam;
use crate::state::exams::{DELETE_CONFIRM, ExamDaysState, ExamSubmit};
use crate::util::dates::{month_tile, weekday_year};
use crate::util::lifetime::Lifetime;

#[component]
pub fn ExamDaysModal(on_close: Callback<()>) -> impl IntoView {
    let state = RwSignal::new(ExamDaysState::default());
    let lifetime = Lifetime::scoped();

    #[cfg(feature = "hydrate")]
    {
        let lifetime = lifetime.clone();
        leptos::task::spawn_local(async move {
            let result = crate::net::schedule::list_exams().await;
            if let Err(err) = &result {
                log::error!("failed to fetch exams: {err}");
            }
            if lifetime.is_alive() {
                state.update(|s| s.finish_load(result));
            }
        });
    }

    let submit_lifetime = lifetime.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(submit) = state.try_update(ExamDaysState::begin_submit).flatten() else {
            return;
        };
        run_submit(state, submit, submit_lifetime.clone());
    };

    let on_delete = Callback::new(move |id: String| {
        let confirmed = crate::util::dialog::confirm(DELETE_CONFIRM);
        let Some(id) = ExamDaysState::delete_target(&id, confirmed) else {
            return;
        };
        run_delete(state, id, lifetime.clone());
    });

    let on_edit = Callback::new(move |exam: Exam| state.update(|s| s.start_edit(&exam)));
    let on_cancel_edit = move |_| state.update(ExamDaysState::cancel_edit);
    let on_backdrop = move |_| on_close.run(());
    let on_close_click = move |_| on_close.run(());
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    };

    let editing = move || state.with(ExamDaysState::is_editing);

    view! {
        <div class="dialog-backdrop" on:click=on_backdrop>
            <div
                class="dialog dialog--exams"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
                tabindex="0"
            >
                <div class="dialog__header">
                    <div>
                        <h2>"Exam Days"</h2>
                        <p class="dialog__subtitle">"Manage exam schedule and holidays"</p>
                    </div>
                    <button class="btn dialog__close" on:click=on_close_click title="Close">
                        "✕"
                    </button>
                </div>

                <form class="exam-form" on:submit=on_submit>
                    <div class="exam-form__header">
                        <h3>{move || if editing() { "Edit Exam Day" } else { "Add New Exam Day" }}</h3>
                        <Show when=editing>
                            <button type="button" class="btn btn--link" on:click=on_cancel_edit>
                                "Cancel Edit"
                            </button>
                        </Show>
                    </div>
                    <label class="exam-form__field">
                        <span>"Date"</span>
                        <input
                            type="date"
                            name="date"
                            required
                            prop:value=move || state.with(|s| s.form.date.clone())
                            on:input=move |ev| state.update(|s| s.set_date(event_target_value(&ev)))
                        />
                    </label>
                    <label class="exam-form__field">
                        <span>"Exam Name"</span>
                        <input
                            type="text"
                            name="name"
                            required
                            placeholder="e.g. Midterm Physics"
                            prop:value=move || state.with(|s| s.form.name.clone())
                            on:input=move |ev| state.update(|s| s.set_name(event_target_value(&ev)))
                        />
                    </label>
                    <div class="exam-form__actions">
                        <button
                            type="submit"
                            class="btn btn--primary"
                            disabled=move || state.with(|s| s.submitting)
                        >
                            {move || match (state.with(|s| s.submitting), editing()) {
                                (true, _) => "Saving...",
                                (false, true) => "Update Exam",
                                (false, false) => "Add Exam",
                            }}
                        </button>
                    </div>
                </form>

                <Show when=move || state.with(|s| s.error.is_some())>
                    <p class="dialog__error">{move || state.with(|s| s.error.clone().unwrap_or_default())}</p>
                </Show>

                <h3 class="exam-list__title">"Upcoming Exams"</h3>
                <Show
                    when=move || !state.with(|s| s.loading)
                    fallback=move || view! { <p class="exam-list__loading">"Loading..."</p> }
                >
                    <Show
                        when=move || state.with(|s| !s.exams.is_empty())
                        fallback=move || view! { <p class="exam-list__empty">"No exams scheduled yet."</p> }
                    >
                        <ul class="exam-list">
                            {move || {
                                let editing_id = state.with(|s| s.editing_id.clone());
                                state
                                    .get()
                                    .exams
                                    .into_iter()
                                    .map(|exam| {
                                        let selected = editing_id.as_deref() == Some(exam.id.as_str());
                                        view! {
                                            <ExamRow exam=exam selected=selected on_edit=on_edit on_delete=on_delete />
                                        }
                                    })
                                    .collect_view()
                            }}
                        </ul>
                    </Show>
                </Show>

                <p class="dialog__footnote">
                    "Classes on these days will be automatically hidden from the schedule."
                </p>
            </div>
        </div>
    }
}

#[component]
fn ExamRow(exam: Exam, selected: bool, on_edit: Callback<Exam>, on_delete: Callback<String>) -> impl IntoView {
    let date = exam.calendar_date();
    let month = date.map_or_else(|| "--".to_owned(), month_tile);
    let day = date.map_or_else(|| "--".to_owned(), |d| d.day().to_string());
    let caption = date.map_or_else(|| exam.date.clone(), weekday_year);
    let id = exam.id.clone();
    let name = exam.name.clone();
    let row_class = if selected { "exam-row exam-row--editing" } else { "exam-row" };

    view! {
        <li class=row_class>
            <div class="exam-row__tile">
                <span class="exam-row__month">{month}</span>
                <span class="exam-row__day">{day}</span>
            </div>
            <div class="exam-row__body">
                <h4>{name}</h4>
                <p>{caption}</p>
            </div>
            <div class="exam-row__actions">
                <button class="btn" title="Edit" on:click=move |_| on_edit.run(exam.clone())>
                    "Edit"
                </button>
                <button class="btn btn--danger" title="Delete" on:click=move |_| on_delete.run(id.clone())>
                    "Delete"
                </button>
            </div>
        </li>
    }
}

fn run_submit(state: RwSignal<ExamDaysState>, submit: ExamSubmit, lifetime: Lifetime) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        use crate::net::schedule::{create_exam, update_exam};

        let result = match submit {
            ExamSubmit::Create(input) => create_exam(&input).await,
            ExamSubmit::Update { id, input } => update_exam(&id, &input).await,
        };
        if let Err(err) = &result {
            log::error!("failed to save exam: {err}");
        }
        if lifetime.is_alive() {
            state.update(|s| s.finish_submit(result));
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (submit, lifetime);
        state.update(|s| s.finish_submit(Err(crate::net::error::ApiError::Unavailable)));
    }
}

fn run_delete(state: RwSignal<ExamDaysState>, id: String, lifetime: Lifetime) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = crate::net::schedule::delete_exam(&id).await;
        if let Err(err) = &result {
            log::error!("failed to delete exam {id}: {err}");
        }
        if !lifetime.is_alive() {
            return;
        }
        if let Some(alert) = state.try_update(|s| s.finish_delete(&id, result)).flatten() {
            crate::util::dialog::alert(alert);
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (state, id, lifetime);
    }
}
