//! Newsletter Subscription Model

use serde::{Deserialize, Serialize};

/// Newsletter subscription payload
///
/// Only the email is required. No dedup is enforced at this layer;
/// uniqueness is the store's responsibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsletterSubscription {
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topics: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_subscription() {
        let json = r#"{"email": "sun@example.org"}"#;
        let sub: NewsletterSubscription = serde_json::from_str(json).unwrap();
        assert_eq!(sub.email, "sun@example.org");
        assert!(sub.name.is_none());
        assert!(sub.topics.is_none());
    }

    #[test]
    fn test_serialize_skips_none() {
        let sub = NewsletterSubscription {
            email: "sun@example.org".to_string(),
            name: None,
            country_code: Some("JP".to_string()),
            preferred_language: Some("ja".to_string()),
            topics: None,
        };

        let json = serde_json::to_string(&sub).unwrap();
        assert!(!json.contains("\"name\""));
        assert!(!json.contains("topics"));
        assert!(json.contains("\"country_code\":\"JP\""));
    }
}
