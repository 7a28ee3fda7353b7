use super::*;

#[test]
fn student_profile_path_embeds_id() {
    assert_eq!(student_profile_path("665f"), "/students/665f/profile");
}

#[test]
fn my_subject_path_embeds_subject_id() {
    assert_eq!(my_subject_path("s-42"), "/students/me/subjects/s-42");
}

#[test]
fn me_routes_share_students_prefix() {
    for path in [MY_PROFILE_PATH, MY_SUBJECTS_PATH, AVAILABLE_SUBJECTS_PATH, FACE_IMAGE_PATH] {
        assert!(path.starts_with("/students/me/"), "{path}");
    }
}
