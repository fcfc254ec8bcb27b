use std::path::{Path, PathBuf};

use crate::errors::AppError;

/// Only PDF uploads are screened; everything else is skipped.
pub const ALLOWED_EXTENSIONS: &[&str] = &["pdf"];

/// True when the filename's extension (case-insensitive) is allowed.
pub fn is_allowed(filename: &str) -> bool {
    Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            ALLOWED_EXTENSIONS
                .iter()
                .any(|allowed| ext.eq_ignore_ascii_case(allowed))
        })
        .unwrap_or(false)
}

/// Final path component of a client-supplied filename. `None` for names that
/// would not land inside the upload directory (empty, `..`, root).
pub fn safe_file_name(filename: &str) -> Option<String> {
    // Browsers on Windows may send backslash-separated paths.
    let normalized = filename.replace('\\', "/");
    Path::new(&normalized)
        .file_name()
        .and_then(|name| name.to_str())
        .filter(|name| !name.trim().is_empty())
        .map(String::from)
}

/// Creates the upload directory if it does not exist yet.
pub async fn ensure_upload_dir(dir: &Path) -> Result<(), AppError> {
    tokio::fs::create_dir_all(dir).await?;
    Ok(())
}

/// Writes the upload under its base name, overwriting any file with the same name.
pub async fn save_upload(dir: &Path, filename: &str, bytes: &[u8]) -> Result<PathBuf, AppError> {
    let name = safe_file_name(filename)
        .ok_or_else(|| AppError::Validation(format!("Invalid upload filename '{filename}'")))?;
    let path = dir.join(name);
    tokio::fs::write(&path, bytes).await?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_allowed() {
        assert!(is_allowed("cv.pdf"));
        assert!(is_allowed("CV.PDF"));
        assert!(is_allowed("my.resume.Pdf"));
        assert!(!is_allowed("cv.docx"));
        assert!(!is_allowed("pdf"));
        assert!(!is_allowed("cv.pdf.exe"));
        assert!(!is_allowed(""));
    }

    #[test]
    fn test_safe_file_name_strips_directories() {
        assert_eq!(safe_file_name("cv.pdf").as_deref(), Some("cv.pdf"));
        assert_eq!(safe_file_name("../../etc/cv.pdf").as_deref(), Some("cv.pdf"));
        assert_eq!(safe_file_name("C:\\Users\\me\\cv.pdf").as_deref(), Some("cv.pdf"));
        assert_eq!(safe_file_name(".."), None);
        assert_eq!(safe_file_name("/"), None);
        assert_eq!(safe_file_name(""), None);
    }

    #[tokio::test]
    async fn test_save_overwrites_same_name() {
        let dir = tempfile::tempdir().unwrap();

        let first = save_upload(dir.path(), "cv.pdf", b"first").await.unwrap();
        let second = save_upload(dir.path(), "cv.pdf", b"second").await.unwrap();

        assert_eq!(first, second);
        assert_eq!(tokio::fs::read(&second).await.unwrap(), b"second");
    }

    #[tokio::test]
    async fn test_save_stays_inside_upload_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = save_upload(dir.path(), "../escape.pdf", b"x").await.unwrap();
        assert_eq!(path, dir.path().join("escape.pdf"));
    }

    #[tokio::test]
    async fn test_ensure_upload_dir_creates_nested_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("uploads");
        ensure_upload_dir(&nested).await.unwrap();
        ensure_upload_dir(&nested).await.unwrap();
        assert!(nested.is_dir());
    }
}
