use super::*;

#[test]
fn avatar_validation_accepts_known_image_extensions() {
    for name in ["me.jpg", "me.JPEG", "photo.png", "scan.final.webp"] {
        assert_eq!(validate_avatar_file_name(name), Ok(()), "{name}");
    }
}

#[test]
fn avatar_validation_rejects_other_files() {
    for name in ["notes.pdf", "archive.tar.gz", "noextension", "image.jpg.exe"] {
        assert_eq!(validate_avatar_file_name(name), Err("Unsupported file type"), "{name}");
    }
}

#[test]
fn upload_route_lives_under_settings() {
    assert!(AVATAR_UPLOAD_PATH.starts_with(SETTINGS_PATH));
}
