use super::*;

#[test]
fn display_name_prefers_name_then_email() {
    let named = StoredUser { name: Some("R. Iyer".to_owned()), email: Some("iyer@school.edu".to_owned()) };
    let email_only = StoredUser { name: None, email: Some("iyer@school.edu".to_owned()) };
    assert_eq!(StoredUser::display_name(Some(&named)), "R. Iyer");
    assert_eq!(StoredUser::display_name(Some(&email_only)), "iyer@school.edu");
}

#[test]
fn display_name_falls_back_to_guest() {
    let blank = StoredUser { name: Some("  ".to_owned()), email: None };
    assert_eq!(StoredUser::display_name(None), "Guest");
    assert_eq!(StoredUser::display_name(Some(&blank)), "Guest");
}

#[test]
fn malformed_user_json_reads_as_absent() {
    assert_eq!(parse_json::<StoredUser>("{not json"), None);
    let parsed: StoredUser = parse_json(r#"{"name":"Asha","role":"teacher"}"#).unwrap();
    assert_eq!(parsed.name.as_deref(), Some("Asha"));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn load_user_is_none_outside_browser() {
    assert_eq!(load_user(), None);
}
