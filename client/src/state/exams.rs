//! Exam-days modal state.
//!
//! DESIGN
//! ======
//! The modal has three orthogonal facets: list loading (`Loading → Loaded`),
//! form mode (`Idle ↔ Editing`) and submission (`Idle → Submitting → Idle`,
//! with an error banner on failure). Each transition is a method on
//! `ExamDaysState`; the component only performs the I/O between a `begin_*`
//! and the matching `finish_*`.
//!
//! The list is a snapshot of the last successful fetch plus local merges of
//! mutation responses; nothing is removed or replaced optimistically.

#[cfg(test)]
#[path = "exams_test.rs"]
mod exams_test;

use crate::net::error::ApiError;
use crate::net::types::{Exam, ExamInput};

pub const LOAD_ERROR: &str = "Failed to load exam days.";
pub const SAVE_ERROR: &str = "Failed to save exam. Please try again.";
pub const DELETE_CONFIRM: &str = "Are you sure you want to delete this exam day?";
pub const DELETE_ERROR: &str = "Failed to delete exam.";

/// Sort newest first by calendar date. Stable: equal dates keep their
/// relative order. Unparseable dates sort after all valid ones.
pub fn sort_exams(exams: &mut [Exam]) {
    exams.sort_by(|a, b| b.calendar_date().cmp(&a.calendar_date()));
}

/// Request the component must issue after `begin_submit`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExamSubmit {
    Create(ExamInput),
    Update { id: String, input: ExamInput },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExamDaysState {
    pub exams: Vec<Exam>,
    pub loading: bool,
    pub form: ExamInput,
    pub editing_id: Option<String>,
    pub submitting: bool,
    pub error: Option<String>,
}

impl Default for ExamDaysState {
    fn default() -> Self {
        Self {
            exams: Vec::new(),
            loading: true,
            form: ExamInput::default(),
            editing_id: None,
            submitting: false,
            error: None,
        }
    }
}

impl ExamDaysState {
    pub fn is_editing(&self) -> bool {
        self.editing_id.is_some()
    }

    /// Both fields are required.
    pub fn form_is_complete(&self) -> bool {
        !self.form.date.is_empty() && !self.form.name.is_empty()
    }

    /// Apply a list response. Failures keep the current list.
    pub fn finish_load(&mut self, result: Result<Vec<Exam>, ApiError>) {
        match result {
            Ok(mut exams) => {
                sort_exams(&mut exams);
                self.exams = exams;
            }
            Err(_) => self.error = Some(LOAD_ERROR.to_owned()),
        }
        self.loading = false;
    }

    pub fn set_date(&mut self, date: String) {
        self.form.date = date;
    }

    pub fn set_name(&mut self, name: String) {
        self.form.name = name;
    }

    /// Load `exam` into the form and enter edit mode.
    pub fn start_edit(&mut self, exam: &Exam) {
        self.form = ExamInput { date: exam.date_input_value(), name: exam.name.clone() };
        self.editing_id = Some(exam.id.clone());
    }

    pub fn cancel_edit(&mut self) {
        self.form = ExamInput::default();
        self.editing_id = None;
        self.error = None;
    }

    /// Validate and enter `Submitting`. Returns `None` (and changes nothing)
    /// when the form is incomplete or a submission is already in flight.
    pub fn begin_submit(&mut self) -> Option<ExamSubmit> {
        if self.submitting || !self.form_is_complete() {
            return None;
        }
        self.submitting = true;
        self.error = None;
        let input = self.form.clone();
        Some(match &self.editing_id {
            Some(id) => ExamSubmit::Update { id: id.clone(), input },
            None => ExamSubmit::Create(input),
        })
    }

    /// Merge the saved record, or keep the form and show the error banner.
    /// `submitting` is cleared either way.
    pub fn finish_submit(&mut self, result: Result<Exam, ApiError>) {
        match result {
            Ok(saved) => {
                match &self.editing_id {
                    Some(id) => {
                        for exam in &mut self.exams {
                            if &exam.id == id {
                                *exam = saved.clone();
                            }
                        }
                    }
                    None => self.exams.push(saved),
                }
                sort_exams(&mut self.exams);
                self.form = ExamInput::default();
                self.editing_id = None;
            }
            Err(_) => self.error = Some(SAVE_ERROR.to_owned()),
        }
        self.submitting = false;
    }

    /// Gate a delete on the user's answer to `DELETE_CONFIRM`. Returns the id
    /// to delete, or `None` when the user declined.
    pub fn delete_target(id: &str, confirmed: bool) -> Option<String> {
        confirmed.then(|| id.to_owned())
    }

    /// Remove the row on success. On failure the list is untouched and the
    /// alert text to show is returned.
    pub fn finish_delete(&mut self, id: &str, result: Result<(), ApiError>) -> Option<&'static str> {
        match result {
            Ok(()) => {
                self.exams.retain(|exam| exam.id != id);
                None
            }
            Err(_) => Some(DELETE_ERROR),
        }
    }
}
