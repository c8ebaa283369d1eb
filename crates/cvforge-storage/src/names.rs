//! Object naming scheme for resume PDFs and uploaded media.

use uuid::Uuid;

/// Build the object name for a generated resume PDF.
///
/// The candidate's full name with spaces stripped, plus the first five
/// characters of the resume ID so that two resumes for the same name
/// do not collide.
pub fn resume_pdf(full_name: &str, resume_id: Uuid) -> String {
    let compact: String = full_name.split_whitespace().collect();
    let id = resume_id.to_string();
    format!("{compact}{}.pdf", &id[..5])
}

/// Build the object key for an uploaded avatar.
pub fn avatar(file_id: Uuid, extension: &str) -> String {
    format!("avatars/{file_id}.{extension}")
}

/// Build the object key for an uploaded resume photo.
pub fn resume_photo(file_id: Uuid, extension: &str) -> String {
    format!("photos/{file_id}.{extension}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resume_pdf_strips_spaces() {
        let id = Uuid::parse_str("abcde123-0000-0000-0000-000000000000").unwrap();
        assert_eq!(resume_pdf("Jane Mary Doe", id), "JaneMaryDoeabcde.pdf");
    }

    #[test]
    fn test_media_keys_have_prefixes() {
        let id = Uuid::nil();
        assert!(avatar(id, "png").starts_with("avatars/"));
        assert!(resume_photo(id, "jpg").starts_with("photos/"));
        assert!(avatar(id, "png").ends_with(".png"));
    }
}
