//! Client-side validation for the upload widget.
//!
//! Validation runs at intake time, before anything touches the network:
//! oversized or unsupported files never enter the pending set, and a URL
//! submission is blocked unless the text parses as an absolute URL.

use thiserror::Error;

/// Maximum accepted file size (100 MiB).
pub const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// MIME types the ingestion service accepts. Files whose browser-reported
/// type is not listed are still accepted when the filename ends in
/// `.txt`/`.md`, since browsers frequently leave those types blank.
pub const ACCEPTED_FILE_TYPES: [&str; 5] = [
    "application/pdf",
    "text/plain",
    "text/markdown",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    "application/msword",
];

/// Why a file was excluded from the pending set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RejectReason {
    #[error("File size exceeds the maximum limit of 100 MB")]
    TooLarge,
    #[error("File type not supported. Supported formats include PDF, TXT, DOCX, and MD.")]
    UnsupportedType,
}

/// Validates one file at intake time.
pub fn validate_file(name: &str, size: u64, content_type: &str) -> Result<(), RejectReason> {
    if size > MAX_FILE_SIZE {
        return Err(RejectReason::TooLarge);
    }
    let accepted_type = ACCEPTED_FILE_TYPES.contains(&content_type);
    let accepted_extension = name.ends_with(".txt") || name.ends_with(".md");
    if !accepted_type && !accepted_extension {
        return Err(RejectReason::UnsupportedType);
    }
    Ok(())
}

/// One aggregate message naming every rejected file with its reason.
pub fn rejection_summary(rejected: &[(String, RejectReason)]) -> String {
    let details = rejected
        .iter()
        .map(|(name, reason)| format!("{name} ({reason})"))
        .collect::<Vec<_>>()
        .join(", ");
    format!("{} file(s) cannot be uploaded: {details}", rejected.len())
}

/// Whether the text parses as a well-formed absolute URL.
pub fn is_valid_url(text: &str) -> bool {
    url::Url::parse(text).is_ok()
}

/// Human-readable file size, 1024-based, with trailing zeros trimmed
/// (`"100 MB"`, `"1.5 KB"`).
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];
    let exponent = (((bytes as f64).ln() / 1024_f64.ln()).floor() as usize).min(UNITS.len() - 1);
    let value = bytes as f64 / 1024_f64.powi(exponent as i32);
    let rounded = format!("{value:.2}");
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    format!("{} {}", trimmed, UNITS[exponent])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oversized_file_is_rejected_with_size_reason() {
        let result = validate_file("big.pdf", MAX_FILE_SIZE + 1, "application/pdf");
        assert_eq!(result, Err(RejectReason::TooLarge));
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("maximum limit of 100 MB"));
    }

    #[test]
    fn file_at_exact_limit_is_accepted() {
        assert_eq!(
            validate_file("edge.pdf", MAX_FILE_SIZE, "application/pdf"),
            Ok(())
        );
    }

    #[test]
    fn unsupported_type_is_rejected() {
        let result = validate_file("archive.zip", 10, "application/zip");
        assert_eq!(result, Err(RejectReason::UnsupportedType));
    }

    #[test]
    fn extension_rescues_unknown_mime_type() {
        assert_eq!(validate_file("notes.txt", 10, ""), Ok(()));
        assert_eq!(validate_file("readme.md", 10, "application/unknown"), Ok(()));
    }

    #[test]
    fn size_limit_applies_before_type_check() {
        // An oversized .txt still fails, and with the size reason.
        let result = validate_file("huge.txt", MAX_FILE_SIZE * 2, "text/plain");
        assert_eq!(result, Err(RejectReason::TooLarge));
    }

    #[test]
    fn accepted_word_documents() {
        assert_eq!(
            validate_file("a.doc", 10, "application/msword"),
            Ok(())
        );
        assert_eq!(
            validate_file(
                "b.docx",
                10,
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            ),
            Ok(())
        );
    }

    #[test]
    fn summary_names_every_reject() {
        let rejected = vec![
            ("big.pdf".to_string(), RejectReason::TooLarge),
            ("archive.zip".to_string(), RejectReason::UnsupportedType),
        ];
        let summary = rejection_summary(&rejected);
        assert!(summary.starts_with("2 file(s) cannot be uploaded: "));
        assert!(summary.contains("big.pdf (File size exceeds"));
        assert!(summary.contains("archive.zip (File type not supported"));
    }

    #[test]
    fn url_validation_requires_absolute_urls() {
        assert!(is_valid_url("https://example.com/doc.pdf"));
        assert!(is_valid_url("http://localhost:8000"));
        assert!(!is_valid_url("not a url"));
        assert!(!is_valid_url("/relative/path"));
        assert!(!is_valid_url(""));
    }

    #[test]
    fn file_sizes_format_like_the_picker() {
        assert_eq!(format_file_size(0), "0 Bytes");
        assert_eq!(format_file_size(512), "512 Bytes");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(MAX_FILE_SIZE), "100 MB");
        assert_eq!(format_file_size(5 * 1024 * 1024 * 1024), "5 GB");
    }
}
