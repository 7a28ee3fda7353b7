use super::*;

#[test]
fn current_user_is_served_under_api_prefix() {
    assert!(CURRENT_USER_PATH.starts_with("/api/"));
    assert_eq!(CURRENT_USER_PATH, "/api/auth/me");
}
