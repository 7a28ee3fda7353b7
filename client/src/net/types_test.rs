use super::*;
use time::Month;

#[test]
fn exam_calendar_date_accepts_plain_and_timestamp_forms() {
    let plain = Exam { id: "e1".to_owned(), date: "2025-03-14".to_owned(), name: "Midterm".to_owned() };
    let stamped = Exam { id: "e2".to_owned(), date: "2025-03-14T00:00:00".to_owned(), name: "Midterm".to_owned() };
    let date = plain.calendar_date().unwrap();
    assert_eq!((date.year(), date.month(), date.day()), (2025, Month::March, 14));
    assert_eq!(stamped.calendar_date(), plain.calendar_date());
}

#[test]
fn exam_calendar_date_rejects_garbage() {
    let exam = Exam { id: "e1".to_owned(), date: "next tuesday".to_owned(), name: "Quiz".to_owned() };
    assert_eq!(exam.calendar_date(), None);
    assert_eq!(parse_calendar_date(""), None);
}

#[test]
fn exam_date_input_value_strips_time() {
    let exam = Exam { id: "e1".to_owned(), date: "2025-12-01T09:30:00Z".to_owned(), name: "Final".to_owned() };
    assert_eq!(exam.date_input_value(), "2025-12-01");
}

#[test]
fn profile_accepts_mongo_id_and_numeric_year() {
    let profile: StudentProfile = serde_json::from_value(serde_json::json!({
        "_id": "665f",
        "name": "Asha",
        "roll": 45,
        "year": 2,
        "branch": "cse",
        "email": "asha@example.edu",
        "image_url": "/static/faces/665f.jpg"
    }))
    .unwrap();
    assert_eq!(profile.id.as_deref(), Some("665f"));
    assert_eq!(profile.roll.as_deref(), Some("45"));
    assert_eq!(profile.year.as_deref(), Some("2"));
    assert_eq!(profile.image_url.as_deref(), Some("/static/faces/665f.jpg"));
}

#[test]
fn profile_tolerates_missing_fields() {
    let profile: StudentProfile = serde_json::from_value(serde_json::json!({ "name": "Ravi" })).unwrap();
    assert_eq!(profile.name.as_deref(), Some("Ravi"));
    assert_eq!(profile.image_url, None);
    assert_eq!(profile.year, None);
}

#[test]
fn subject_counters_default_to_zero() {
    let subject: Subject = serde_json::from_value(serde_json::json!({ "_id": "s1", "name": "Physics" })).unwrap();
    assert_eq!(subject.id, "s1");
    assert_eq!((subject.attended, subject.total), (0, 0));

    let nulls: Subject =
        serde_json::from_value(serde_json::json!({ "id": "s2", "name": "Maths", "attended": null, "total": null }))
            .unwrap();
    assert_eq!((nulls.attended, nulls.total), (0, 0));
}

#[test]
fn subject_counters_accept_integral_floats() {
    let subject: Subject =
        serde_json::from_value(serde_json::json!({ "id": "s1", "name": "Physics", "attended": 30.0, "total": 40 }))
            .unwrap();
    assert_eq!((subject.attended, subject.total), (30, 40));
}

#[test]
fn subject_counters_reject_negative_or_fractional_values() {
    let negative = serde_json::from_value::<Subject>(serde_json::json!({ "id": "s1", "attended": -1 }));
    let fractional = serde_json::from_value::<Subject>(serde_json::json!({ "id": "s1", "total": 2.5 }));
    assert!(negative.is_err());
    assert!(fractional.is_err());
}

#[test]
fn avatar_upload_reads_camel_case_url() {
    let upload: AvatarUpload = serde_json::from_value(serde_json::json!({
        "avatarUrl": "/static/avatars/u1_1700000000.png",
        "settings": { "profile": { "avatarUrl": "/static/avatars/u1_1700000000.png" } }
    }))
    .unwrap();
    assert_eq!(upload.avatar_url, "/static/avatars/u1_1700000000.png");
    assert_eq!(upload.settings["profile"]["avatarUrl"], "/static/avatars/u1_1700000000.png");
}

#[test]
fn enroll_request_serializes_subject_id() {
    let body = serde_json::to_value(EnrollRequest { subject_id: "s9".to_owned() }).unwrap();
    assert_eq!(body, serde_json::json!({ "subject_id": "s9" }));
}

#[test]
fn documents_with_both_id_keys_decode() {
    let subject: Subject = serde_json::from_value(serde_json::json!({
        "id": "s1", "_id": "s1", "name": "Physics", "attended": 3, "total": 4
    }))
    .unwrap();
    assert_eq!(subject.id, "s1");
    assert_eq!((subject.attended, subject.total), (3, 4));

    let offered: AvailableSubject =
        serde_json::from_value(serde_json::json!({ "id": "m1", "_id": "665f0001", "name": "Maths" })).unwrap();
    assert_eq!(offered.id, "m1");

    let profile: StudentProfile =
        serde_json::from_value(serde_json::json!({ "id": "", "_id": "665f", "name": "Asha" })).unwrap();
    assert_eq!(profile.id.as_deref(), Some("665f"));
}

#[test]
fn subject_without_any_id_is_rejected() {
    assert!(serde_json::from_value::<Subject>(serde_json::json!({ "name": "Physics" })).is_err());
    assert!(serde_json::from_value::<AvailableSubject>(serde_json::json!({ "name": "Maths" })).is_err());
}

#[test]
fn cached_subjects_decode_after_reserialization() {
    let subject: Subject = serde_json::from_value(serde_json::json!({ "_id": "s1", "name": "Physics" })).unwrap();
    let cached = serde_json::to_value(&subject).unwrap();
    assert_eq!(serde_json::from_value::<Subject>(cached).unwrap(), subject);
}

#[test]
fn current_user_label_prefers_name_then_email() {
    let named = CurrentUser { name: Some("R. Iyer".to_owned()), email: Some("r@example.edu".to_owned()), role: None };
    let blank = CurrentUser { name: Some("  ".to_owned()), email: Some("r@example.edu".to_owned()), role: None };
    assert_eq!(named.label(), Some("R. Iyer"));
    assert_eq!(blank.label(), Some("r@example.edu"));
    assert_eq!(CurrentUser::default().label(), None);
}
