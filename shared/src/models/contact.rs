//! Contact Message Model

use serde::{Deserialize, Serialize};

/// Routing category for an inbound contact message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactCategory {
    General,
    Membership,
    Chapter,
    Partnership,
    Press,
    Other,
}

impl Default for ContactCategory {
    fn default() -> Self {
        Self::General
    }
}

/// Contact message payload (insert only)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    pub subject: String,
    #[serde(default)]
    pub category: ContactCategory,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_language: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_serde() {
        let json = serde_json::to_string(&ContactCategory::Press).unwrap();
        assert_eq!(json, "\"press\"");

        let c: ContactCategory = serde_json::from_str("\"partnership\"").unwrap();
        assert_eq!(c, ContactCategory::Partnership);
    }

    #[test]
    fn test_category_defaults_to_general() {
        let json = r#"{
            "name": "Lena Weber",
            "email": "lena@example.org",
            "subject": "Question about chapters",
            "message": "How do I get involved?"
        }"#;

        let msg: ContactMessage = serde_json::from_str(json).unwrap();
        assert_eq!(msg.category, ContactCategory::General);
        assert!(msg.country_code.is_none());
    }
}
