//! Wire DTOs for the attendance backend.
//!
//! DESIGN
//! ======
//! The backend is loosely typed (Mongo documents behind FastAPI), so decoding
//! is lenient where the server is known to vary: ids may arrive as `_id`,
//! counters may be missing or float-encoded, and `year`/`roll` may be numbers.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use time::Date;
use time::macros::format_description;

/// Exam day on a teacher's schedule.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exam {
    pub id: String,
    /// `YYYY-MM-DD`, or a full ISO timestamp from older records.
    pub date: String,
    pub name: String,
}

impl Exam {
    /// Calendar date, ignoring any time-of-day suffix.
    pub fn calendar_date(&self) -> Option<Date> {
        parse_calendar_date(&self.date)
    }

    /// Value suitable for an `<input type="date">`.
    pub fn date_input_value(&self) -> String {
        self.date.split('T').next().unwrap_or_default().to_owned()
    }
}

/// Create/update payload for an exam day.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExamInput {
    pub date: String,
    pub name: String,
}

/// Parse the leading `YYYY-MM-DD` of a date or timestamp string.
pub fn parse_calendar_date(raw: &str) -> Option<Date> {
    let day = raw.trim().split('T').next()?;
    Date::parse(day, format_description!("[year]-[month]-[day]")).ok()
}

/// Student profile as returned by `/students/{id}/profile`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "StudentProfileWire")]
pub struct StudentProfile {
    pub id: Option<String>,
    pub name: Option<String>,
    pub roll: Option<String>,
    pub year: Option<String>,
    pub branch: Option<String>,
    pub email: Option<String>,
    pub image_url: Option<String>,
}

#[derive(Deserialize)]
struct StudentProfileWire {
    #[serde(flatten)]
    ids: DocumentIds,
    #[serde(default)]
    name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_string_from_scalar")]
    roll: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_string_from_scalar")]
    year: Option<String>,
    #[serde(default)]
    branch: Option<String>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    image_url: Option<String>,
}

impl From<StudentProfileWire> for StudentProfile {
    fn from(wire: StudentProfileWire) -> Self {
        Self {
            id: wire.ids.resolve(),
            name: wire.name,
            roll: wire.roll,
            year: wire.year,
            branch: wire.branch,
            email: wire.email,
            image_url: wire.image_url,
        }
    }
}

/// A subject the student is enrolled in, with server-computed counters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SubjectWire")]
pub struct Subject {
    pub id: String,
    pub name: String,
    pub attended: u32,
    pub total: u32,
}

#[derive(Deserialize)]
struct SubjectWire {
    #[serde(flatten)]
    ids: DocumentIds,
    #[serde(default)]
    name: String,
    #[serde(default, deserialize_with = "deserialize_count")]
    attended: u32,
    #[serde(default, deserialize_with = "deserialize_count")]
    total: u32,
}

impl TryFrom<SubjectWire> for Subject {
    type Error = MissingId;

    fn try_from(wire: SubjectWire) -> Result<Self, Self::Error> {
        let id = wire.ids.resolve().ok_or(MissingId)?;
        Ok(Self { id, name: wire.name, attended: wire.attended, total: wire.total })
    }
}

/// A subject offered for enrollment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "AvailableSubjectWire")]
pub struct AvailableSubject {
    pub id: String,
    pub name: String,
}

#[derive(Deserialize)]
struct AvailableSubjectWire {
    #[serde(flatten)]
    ids: DocumentIds,
    #[serde(default)]
    name: String,
}

impl TryFrom<AvailableSubjectWire> for AvailableSubject {
    type Error = MissingId;

    fn try_from(wire: AvailableSubjectWire) -> Result<Self, Self::Error> {
        let id = wire.ids.resolve().ok_or(MissingId)?;
        Ok(Self { id, name: wire.name })
    }
}

/// Signed-in user as returned by `/api/auth/me`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

impl CurrentUser {
    /// Name, else email; blank values count as missing.
    pub fn label(&self) -> Option<&str> {
        [self.name.as_deref(), self.email.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|s| !s.is_empty())
    }
}

/// Document identifiers. Mongo-backed routes send `_id`, some send `id`,
/// and some send both; `id` wins when both are present.
#[derive(Deserialize)]
struct DocumentIds {
    #[serde(default, deserialize_with = "deserialize_opt_string_from_scalar")]
    id: Option<String>,
    #[serde(default, rename = "_id", deserialize_with = "deserialize_opt_string_from_scalar")]
    mongo_id: Option<String>,
}

impl DocumentIds {
    fn resolve(self) -> Option<String> {
        self.id.filter(|id| !id.is_empty()).or(self.mongo_id).filter(|id| !id.is_empty())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("document has neither `id` nor `_id`")]
pub struct MissingId;

/// Body for `POST /students/me/subjects`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EnrollRequest {
    pub subject_id: String,
}

/// Response of `POST /api/settings/upload-avatar`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AvatarUpload {
    #[serde(rename = "avatarUrl")]
    pub avatar_url: String,
    #[serde(default)]
    pub settings: serde_json::Value,
}

/// Free-form teacher settings document, replaced wholesale on update.
pub type Settings = serde_json::Value;

fn deserialize_opt_string_from_scalar<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Null => Ok(None),
        serde_json::Value::String(s) => Ok(Some(s)),
        serde_json::Value::Number(n) => Ok(Some(n.to_string())),
        serde_json::Value::Bool(b) => Ok(Some(b.to_string())),
        _ => Err(D::Error::custom("expected string or number")),
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn deserialize_count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Null => Ok(0),
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_u64() {
                return u32::try_from(int).map_err(|_| D::Error::custom(format!("count {int} out of range")));
            }
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= 0.0
                && float <= f64::from(u32::MAX)
            {
                return Ok(float as u32);
            }
            Err(D::Error::custom("expected non-negative integer count"))
        }
        _ => Err(D::Error::custom("expected number")),
    }
}
