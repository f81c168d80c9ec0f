pub const DOCX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

pub const ALLOWED_CONTENT_TYPES: [&str; 4] =
    [DOCX_CONTENT_TYPE, "image/jpeg", "image/png", "image/gif"];

/// Exact match against the upload allow-list. Parameters such as
/// `; charset=...` are not stripped.
pub fn is_allowed_content_type(content_type: &str) -> bool {
    ALLOWED_CONTENT_TYPES.contains(&content_type)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_docx_and_three_image_types() {
        assert!(is_allowed_content_type(DOCX_CONTENT_TYPE));
        assert!(is_allowed_content_type("image/jpeg"));
        assert!(is_allowed_content_type("image/png"));
        assert!(is_allowed_content_type("image/gif"));
    }

    #[test]
    fn rejects_everything_else() {
        assert!(!is_allowed_content_type("application/pdf"));
        assert!(!is_allowed_content_type("image/webp"));
        assert!(!is_allowed_content_type("IMAGE/PNG"));
        assert!(!is_allowed_content_type(""));
    }
}
