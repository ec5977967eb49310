//! Error category classification

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Error category classification based on error code ranges
///
/// Categories are determined by the leading digit of the error code:
/// - 0xxx: General errors
/// - 2xxx: Content and locale errors
/// - 3xxx: Chapter directory errors
/// - 4xxx: Lead-capture submission errors
/// - 9xxx: System errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// General errors (0xxx)
    General,
    /// Content and locale errors (2xxx)
    Content,
    /// Chapter directory errors (3xxx)
    Directory,
    /// Lead-capture submission errors (4xxx)
    Submission,
    /// System errors (9xxx)
    System,
}

impl ErrorCategory {
    /// Determine category from error code value
    pub fn from_code(code: u16) -> Self {
        match code {
            0..2000 => Self::General,
            2000..3000 => Self::Content,
            3000..4000 => Self::Directory,
            4000..5000 => Self::Submission,
            _ => Self::System,
        }
    }

    /// Get the string name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Content => "content",
            Self::Directory => "directory",
            Self::Submission => "submission",
            Self::System => "system",
        }
    }
}

impl ErrorCode {
    /// Get the category for this error code
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_code() {
        assert_eq!(ErrorCategory::from_code(0), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(7), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(999), ErrorCategory::General);

        assert_eq!(ErrorCategory::from_code(2001), ErrorCategory::Content);
        assert_eq!(ErrorCategory::from_code(2999), ErrorCategory::Content);

        assert_eq!(ErrorCategory::from_code(3001), ErrorCategory::Directory);
        assert_eq!(ErrorCategory::from_code(4001), ErrorCategory::Submission);
        assert_eq!(ErrorCategory::from_code(9001), ErrorCategory::System);
        assert_eq!(ErrorCategory::from_code(10000), ErrorCategory::System);
    }

    #[test]
    fn test_error_code_category() {
        assert_eq!(ErrorCode::Success.category(), ErrorCategory::General);
        assert_eq!(
            ErrorCode::ValidationFailed.category(),
            ErrorCategory::General
        );
        assert_eq!(
            ErrorCode::LocaleNotSupported.category(),
            ErrorCategory::Content
        );
        assert_eq!(
            ErrorCode::MessageKeyMissing.category(),
            ErrorCategory::Content
        );
        assert_eq!(
            ErrorCode::ChapterNotFound.category(),
            ErrorCategory::Directory
        );
        assert_eq!(
            ErrorCode::SubmissionFailed.category(),
            ErrorCategory::Submission
        );
        assert_eq!(ErrorCode::StoreError.category(), ErrorCategory::System);
        assert_eq!(ErrorCode::InternalError.category(), ErrorCategory::System);
    }

    #[test]
    fn test_category_name() {
        assert_eq!(ErrorCategory::General.name(), "general");
        assert_eq!(ErrorCategory::Content.name(), "content");
        assert_eq!(ErrorCategory::Directory.name(), "directory");
        assert_eq!(ErrorCategory::Submission.name(), "submission");
        assert_eq!(ErrorCategory::System.name(), "system");
    }

    #[test]
    fn test_category_serialize() {
        let category = ErrorCategory::Content;
        let json = serde_json::to_string(&category).unwrap();
        assert_eq!(json, "\"content\"");

        let category = ErrorCategory::Submission;
        let json = serde_json::to_string(&category).unwrap();
        assert_eq!(json, "\"submission\"");
    }

    #[test]
    fn test_category_deserialize() {
        let category: ErrorCategory = serde_json::from_str("\"content\"").unwrap();
        assert_eq!(category, ErrorCategory::Content);

        let category: ErrorCategory = serde_json::from_str("\"system\"").unwrap();
        assert_eq!(category, ErrorCategory::System);
    }
}
