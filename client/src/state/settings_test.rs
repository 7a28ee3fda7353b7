use serde_json::json;

use super::*;

fn server_doc() -> Settings {
    json!({
        "theme": "dark",
        "profile": {
            "name": "R. Iyer",
            "email": "iyer@school.edu",
            "phone": "555-0100",
            "department": "Physics",
            "avatarUrl": "/static/avatars/old.png"
        }
    })
}

fn loaded() -> SettingsState {
    let mut state = SettingsState::default();
    state.sync(&server_doc());
    state
}

// =============================================================
// Reading and editing
// =============================================================

#[test]
fn reads_known_profile_fields() {
    let state = loaded();
    assert_eq!(state.field("name"), "R. Iyer");
    assert_eq!(state.field("email"), "iyer@school.edu");
    assert_eq!(avatar_url(&state.draft).as_deref(), Some("/static/avatars/old.png"));
}

#[test]
fn missing_or_non_string_fields_read_empty() {
    let doc = json!({ "profile": { "phone": 5550100 } });
    assert_eq!(profile_field(&doc, "phone"), "");
    assert_eq!(profile_field(&json!(null), "name"), "");
    assert_eq!(avatar_url(&json!({})), None);
}

#[test]
fn editing_preserves_unknown_keys() {
    let mut state = loaded();
    state.set_field("department", "Chemistry".to_owned());
    assert!(state.dirty);
    assert_eq!(state.draft["theme"], "dark");
    assert_eq!(state.draft["profile"]["email"], "iyer@school.edu");
    assert_eq!(state.field("department"), "Chemistry");
}

#[test]
fn editing_empty_document_creates_profile() {
    let mut state = SettingsState::default();
    state.set_field("name", "New Teacher".to_owned());
    assert_eq!(state.draft, json!({ "profile": { "name": "New Teacher" } }));
}

#[test]
fn sync_does_not_clobber_edits() {
    let mut state = loaded();
    state.set_field("phone", "555-0199".to_owned());
    state.sync(&server_doc());
    assert_eq!(state.field("phone"), "555-0199");
}

// =============================================================
// Saving
// =============================================================

#[test]
fn save_sends_whole_draft() {
    let mut state = loaded();
    state.set_field("name", "Dr. R. Iyer".to_owned());
    let payload = state.begin_save().unwrap();
    assert_eq!(payload["theme"], "dark");
    assert_eq!(payload["profile"]["name"], "Dr. R. Iyer");
    assert_eq!(state.begin_save(), None);
}

#[test]
fn successful_save_adopts_server_echo() {
    let mut state = loaded();
    state.set_field("name", "Dr. R. Iyer".to_owned());
    state.begin_save();
    let mut echo = server_doc();
    echo["profile"]["name"] = json!("Dr. R. Iyer");
    state.finish_save(Ok(echo.clone()));
    assert_eq!(state.draft, echo);
    assert!(!state.dirty);
    assert!(!state.saving);
}

#[test]
fn failed_save_keeps_draft() {
    let mut state = loaded();
    state.set_field("name", "Dr. R. Iyer".to_owned());
    state.begin_save();
    state.finish_save(Err(ApiError::Network("offline".to_owned())));
    assert_eq!(state.field("name"), "Dr. R. Iyer");
    assert!(state.dirty);
    assert_eq!(state.error.as_deref(), Some(SAVE_ERROR));
}

// =============================================================
// Avatar upload
// =============================================================

#[test]
fn unsupported_avatar_is_rejected_before_upload() {
    let mut state = loaded();
    assert_eq!(state.begin_upload("scan.gif"), Err("Unsupported file type"));
    assert!(!state.uploading);
    assert_eq!(state.error.as_deref(), Some("Unsupported file type"));
}

#[test]
fn upload_adopts_returned_settings() {
    let mut state = loaded();
    state.begin_upload("me.PNG").unwrap();
    assert!(state.uploading);

    let mut settings = server_doc();
    settings["profile"]["avatarUrl"] = json!("/static/avatars/t1_1700000000.png");
    let cached = state.finish_upload(Ok(AvatarUpload {
        avatar_url: "/static/avatars/t1_1700000000.png".to_owned(),
        settings: settings.clone(),
    }));

    assert_eq!(cached, Some(settings));
    assert_eq!(avatar_url(&state.draft).as_deref(), Some("/static/avatars/t1_1700000000.png"));
    assert!(!state.uploading);
}

#[test]
fn upload_during_edit_keeps_unsaved_fields() {
    let mut state = loaded();
    state.set_field("phone", "555-0199".to_owned());
    state.begin_upload("me.jpg").unwrap();
    state.finish_upload(Ok(AvatarUpload { avatar_url: "/static/avatars/new.jpg".to_owned(), settings: server_doc() }));
    assert_eq!(state.field("phone"), "555-0199");
    assert_eq!(state.field("avatarUrl"), "/static/avatars/new.jpg");
}

#[test]
fn failed_upload_surfaces_server_reason() {
    let mut state = loaded();
    state.begin_upload("me.jpg").unwrap();
    let result = state.finish_upload(Err(ApiError::Http { status: 400, message: "Unsupported file type".to_owned() }));
    assert_eq!(result, None);
    assert_eq!(state.error.as_deref(), Some("Unsupported file type"));

    state.begin_upload("me.jpg").unwrap();
    state.finish_upload(Err(ApiError::Http { status: 500, message: "boom".to_owned() }));
    assert_eq!(state.error.as_deref(), Some(UPLOAD_ERROR));
}
