//! Student profile, subject enrollment and face-image accessors.
//!
//! All `me` routes resolve the student from the session cookie.

#[cfg(test)]
#[path = "students_test.rs"]
mod students_test;

use super::api::{Body, Method, request};
use super::error::ApiError;
use super::types::{AvailableSubject, EnrollRequest, StudentProfile, Subject};

pub(crate) const MY_PROFILE_PATH: &str = "/students/me/profile";
pub(crate) const MY_SUBJECTS_PATH: &str = "/students/me/subjects";
pub(crate) const AVAILABLE_SUBJECTS_PATH: &str = "/students/me/subjects/available";
pub(crate) const FACE_IMAGE_PATH: &str = "/students/me/face-image";

pub(crate) fn student_profile_path(student_id: &str) -> String {
    format!("/students/{student_id}/profile")
}

pub(crate) fn my_subject_path(subject_id: &str) -> String {
    format!("{MY_SUBJECTS_PATH}/{subject_id}")
}

/// `GET /students/{id}/profile`.
///
/// # Errors
///
/// Propagates any `ApiError` from the request.
pub async fn fetch_student_profile(student_id: &str) -> Result<StudentProfile, ApiError> {
    request(Method::Get, &student_profile_path(student_id), Body::Empty).await
}

/// `GET /students/me/profile` for the signed-in student.
///
/// # Errors
///
/// Returns `Http { status: 403 }` for non-student sessions and 404 when no
/// profile exists.
pub async fn fetch_my_profile() -> Result<StudentProfile, ApiError> {
    request(Method::Get, MY_PROFILE_PATH, Body::Empty).await
}

/// `GET /students/me/subjects`.
///
/// # Errors
///
/// Propagates any `ApiError` from the request.
pub async fn fetch_my_subjects() -> Result<Vec<Subject>, ApiError> {
    request(Method::Get, MY_SUBJECTS_PATH, Body::Empty).await
}

/// `GET /students/me/subjects/available`.
///
/// # Errors
///
/// Propagates any `ApiError` from the request.
pub async fn fetch_available_subjects() -> Result<Vec<AvailableSubject>, ApiError> {
    request(Method::Get, AVAILABLE_SUBJECTS_PATH, Body::Empty).await
}

/// `POST /students/me/subjects` with `{subject_id}`.
///
/// # Errors
///
/// Propagates any `ApiError` from the request.
pub async fn add_subject(subject_id: String) -> Result<serde_json::Value, ApiError> {
    request(Method::Post, MY_SUBJECTS_PATH, Body::json(&EnrollRequest { subject_id })?).await
}

/// `DELETE /students/me/subjects/{id}`.
///
/// # Errors
///
/// Propagates any `ApiError` from the request.
pub async fn remove_subject(subject_id: String) -> Result<serde_json::Value, ApiError> {
    request(Method::Delete, &my_subject_path(&subject_id), Body::Empty).await
}

/// `POST /students/me/face-image` as multipart field `file`.
///
/// # Errors
///
/// Returns `Network` if the form cannot be built, otherwise propagates the
/// request error.
#[cfg(feature = "hydrate")]
pub async fn upload_face_image(file: web_sys::File) -> Result<serde_json::Value, ApiError> {
    let form = super::api::file_form(&file)?;
    request(Method::Post, FACE_IMAGE_PATH, Body::Multipart(form)).await
}
