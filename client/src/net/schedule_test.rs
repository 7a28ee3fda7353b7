use super::*;

#[test]
fn exam_path_appends_id() {
    assert_eq!(exam_path("3f2a"), "/api/schedule/exams/3f2a");
}

#[test]
fn exams_collection_path_is_stable() {
    assert_eq!(EXAMS_PATH, "/api/schedule/exams");
}
