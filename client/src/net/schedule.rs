//! Exam-day CRUD against `/api/schedule/exams`.

#[cfg(test)]
#[path = "schedule_test.rs"]
mod schedule_test;

use super::api::{Body, Method, request};
use super::error::ApiError;
use super::types::{Exam, ExamInput};

pub(crate) const EXAMS_PATH: &str = "/api/schedule/exams";

pub(crate) fn exam_path(id: &str) -> String {
    format!("{EXAMS_PATH}/{id}")
}

/// `GET /api/schedule/exams` in server order.
///
/// # Errors
///
/// Propagates any `ApiError` from the request.
pub async fn list_exams() -> Result<Vec<Exam>, ApiError> {
    request(Method::Get, EXAMS_PATH, Body::Empty).await
}

/// `POST /api/schedule/exams`; returns the stored record.
///
/// # Errors
///
/// Propagates any `ApiError` from the request.
pub async fn create_exam(input: &ExamInput) -> Result<Exam, ApiError> {
    request(Method::Post, EXAMS_PATH, Body::json(input)?).await
}

/// `PUT /api/schedule/exams/{id}`; returns the stored record.
///
/// # Errors
///
/// Propagates any `ApiError` from the request.
pub async fn update_exam(id: &str, input: &ExamInput) -> Result<Exam, ApiError> {
    request(Method::Put, &exam_path(id), Body::json(input)?).await
}

/// `DELETE /api/schedule/exams/{id}`. The confirmation body is discarded.
///
/// # Errors
///
/// Propagates any `ApiError` from the request.
pub async fn delete_exam(id: &str) -> Result<(), ApiError> {
    let _: serde_json::Value = request(Method::Delete, &exam_path(id), Body::Empty).await?;
    Ok(())
}
