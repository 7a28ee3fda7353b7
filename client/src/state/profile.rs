//! Student profile page: attendance metrics, mutation plans, render states.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page reads three cached queries (`MyStudentProfile`, `MySubjects`,
//! `AvailableSubjects`) and performs three mutations. Which keys each
//! mutation invalidates is decided here so the plan is testable without a
//! browser.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use crate::net::error::ApiError;
use crate::net::types::{StudentProfile, Subject};
use crate::query::cache::{QueryKey, QueryStatus};

/// Attendance percentage at or above which a student is on track.
pub const ON_TRACK_THRESHOLD: f64 = 75.0;

pub const LOADING_TEXT: &str = "Loading Profile...";
pub const EMPTY_TEXT: &str = "No Profile found..";

// =============================================================================
// Mutations
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProfileMutation {
    UploadFaceImage,
    AddSubject,
    RemoveSubject,
}

impl ProfileMutation {
    /// Keys marked stale when this mutation succeeds.
    pub fn invalidates(self) -> &'static [QueryKey] {
        const PROFILE: &[QueryKey] = &[QueryKey::MyStudentProfile];
        const PROFILE_AND_SUBJECTS: &[QueryKey] = &[QueryKey::MyStudentProfile, QueryKey::MySubjects];
        match self {
            Self::UploadFaceImage => PROFILE,
            Self::AddSubject | Self::RemoveSubject => PROFILE_AND_SUBJECTS,
        }
    }
}

pub fn delete_subject_prompt(name: &str) -> String {
    format!("Delete subject {name}?")
}

// =============================================================================
// Attendance
// =============================================================================

/// `attended / total * 100`, or 0 when nothing has been conducted.
#[allow(clippy::cast_precision_loss)]
pub fn attendance_percentage(attended: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    attended as f64 / total as f64 * 100.0
}

pub fn is_on_track(percentage: f64) -> bool {
    percentage >= ON_TRACK_THRESHOLD
}

/// One decimal place, e.g. `75.0%`.
pub fn percentage_label(percentage: f64) -> String {
    format!("{percentage:.1}%")
}

/// CSS width for a progress bar, clamped to 100%.
pub fn bar_width(percentage: f64) -> String {
    format!("width: {}%", percentage.clamp(0.0, 100.0))
}

/// Weighted attendance over all enrolled subjects.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AttendanceSummary {
    pub attended: u64,
    pub total: u64,
    pub percentage: f64,
}

impl AttendanceSummary {
    pub fn from_subjects(subjects: &[Subject]) -> Self {
        let attended = subjects.iter().map(|s| u64::from(s.attended)).sum();
        let total = subjects.iter().map(|s| u64::from(s.total)).sum();
        Self { attended, total, percentage: attendance_percentage(attended, total) }
    }

    pub fn on_track(&self) -> bool {
        is_on_track(self.percentage)
    }

    pub fn status_text(&self) -> &'static str {
        if self.on_track() { "On track for finals" } else { "Attendance low" }
    }
}

/// Per-subject percentage shown on each subject card.
pub fn subject_percentage(subject: &Subject) -> f64 {
    attendance_percentage(u64::from(subject.attended), u64::from(subject.total))
}

// =============================================================================
// Render state
// =============================================================================

/// What the profile page shows, in priority order.
#[derive(Clone, Debug, PartialEq)]
pub enum ProfileView {
    Loading,
    Error(String),
    Empty,
    Ready(StudentProfile),
}

impl ProfileView {
    /// Either query still loading wins, then a profile error, then absence.
    /// A query that has not started yet counts as loading.
    pub fn resolve(
        profile_status: QueryStatus,
        subjects_status: QueryStatus,
        error: Option<&ApiError>,
        profile: Option<StudentProfile>,
    ) -> Self {
        if is_pending(subjects_status) {
            return Self::Loading;
        }
        Self::from_query(profile_status, error, profile)
    }

    /// A single profile query, as shown on a student's detail page.
    pub fn from_query(status: QueryStatus, error: Option<&ApiError>, profile: Option<StudentProfile>) -> Self {
        if is_pending(status) {
            return Self::Loading;
        }
        if status == QueryStatus::Error {
            let detail = error.map(ApiError::user_message).filter(|m| !m.is_empty());
            return Self::Error(profile_error_text(detail.as_deref()));
        }
        match profile {
            Some(profile) => Self::Ready(profile),
            None => Self::Empty,
        }
    }
}

fn is_pending(status: QueryStatus) -> bool {
    matches!(status, QueryStatus::Idle | QueryStatus::Loading)
}

pub fn profile_error_text(detail: Option<&str>) -> String {
    format!("Error loading profile: {}", detail.unwrap_or("Please login"))
}

/// Display fallbacks for sparse profile documents.
pub struct ProfileDetails<'a>(pub &'a StudentProfile);

impl ProfileDetails<'_> {
    pub fn name(&self) -> String {
        self.0.name.clone().unwrap_or_else(|| "John".to_owned())
    }

    pub fn roll(&self) -> String {
        self.0.roll.clone().unwrap_or_else(|| "21CS045".to_owned())
    }

    pub fn year(&self) -> String {
        self.0.year.clone().unwrap_or_else(|| "1st".to_owned())
    }

    pub fn branch(&self) -> String {
        self.0.branch.as_deref().unwrap_or_default().to_uppercase()
    }

    pub fn email(&self) -> String {
        self.0.email.clone().unwrap_or_else(|| "student@example.edu".to_owned())
    }
}
