//! Mailto link construction for application submissions
//!
//! Applications are accepted through the store write and, in parallel,
//! as a pre-addressed email. These builders are pure: they construct the
//! `mailto:` URI from the payload and never touch the network, so the
//! email channel works regardless of backend reachability.

use shared::models::{ChapterApplication, PartnershipApplication};

const CHAPTERS_MAILBOX: &str = "chapters@happysociety.international";
const PARTNERS_MAILBOX: &str = "partners@happysociety.international";

/// Build the chapter-application email link
pub fn chapter_application(application: &ChapterApplication) -> String {
    let subject = format!("Chapter Application: {}", application.country_name_en);
    let body = format!(
        "Country: {}\nContact: {}\nEmail: {}\n\nDescription:\n{}",
        application.country_name_en,
        application.leader_name,
        application.contact_email,
        application.description_en.as_deref().unwrap_or(""),
    );
    link(CHAPTERS_MAILBOX, &subject, &body)
}

/// Build the partnership-application email link
pub fn partnership_application(application: &PartnershipApplication) -> String {
    let subject = format!("Partnership Application: {}", application.organization_name);
    let body = format!(
        "Organization: {}\nType: {}\nCountry: {}\nContact: {}\nEmail: {}\nWebsite: {}\n\nDescription:\n{}",
        application.organization_name,
        application.organization_type.as_str(),
        application.country_code,
        application.contact_person.as_deref().unwrap_or(""),
        application.contact_email,
        application.website_url.as_deref().unwrap_or(""),
        application.description.as_deref().unwrap_or(""),
    );
    link(PARTNERS_MAILBOX, &subject, &body)
}

fn link(mailbox: &str, subject: &str, body: &str) -> String {
    format!(
        "mailto:{}?subject={}&body={}",
        mailbox,
        urlencoding::encode(subject),
        urlencoding::encode(body),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::OrganizationType;

    fn chapter_payload() -> ChapterApplication {
        ChapterApplication {
            country_code: "JP".to_string(),
            country_name_en: "Japan".to_string(),
            country_name_native: Some("日本".to_string()),
            contact_email: "lead@example.jp".to_string(),
            leader_name: "Aoi Tanaka".to_string(),
            description_en: Some("Organizing in Tokyo\nand Osaka".to_string()),
        }
    }

    #[test]
    fn test_chapter_link_addressing() {
        let link = chapter_application(&chapter_payload());
        assert!(link.starts_with("mailto:chapters@happysociety.international?subject="));
        assert!(link.contains("subject=Chapter%20Application%3A%20Japan"));
    }

    #[test]
    fn test_chapter_link_body_lines() {
        let link = chapter_application(&chapter_payload());
        let body = link.split("&body=").nth(1).unwrap();
        assert!(body.contains("Country%3A%20Japan%0AContact%3A%20Aoi%20Tanaka"));
        // Newlines inside the free-text description survive as %0A
        assert!(body.contains("Organizing%20in%20Tokyo%0Aand%20Osaka"));
    }

    #[test]
    fn test_chapter_link_empty_description() {
        let mut payload = chapter_payload();
        payload.description_en = None;
        let link = chapter_application(&payload);
        assert!(link.ends_with("Description%3A%0A"));
    }

    #[test]
    fn test_partnership_link() {
        let application = PartnershipApplication {
            organization_name: "Global Unions Federation".to_string(),
            organization_type: OrganizationType::Union,
            country_code: "DE".to_string(),
            website_url: Some("https://unions.example".to_string()),
            contact_email: "contact@unions.example".to_string(),
            contact_person: Some("Sam Weber".to_string()),
            description: None,
            partnership_level: Default::default(),
            logo_url: None,
            social_links: Default::default(),
            member_count: None,
        };
        let link = partnership_application(&application);
        assert!(link.starts_with("mailto:partners@happysociety.international?"));
        assert!(link.contains("subject=Partnership%20Application%3A%20Global%20Unions%20Federation"));
        assert!(link.contains("Type%3A%20union"));
        assert!(link.contains("Website%3A%20https%3A%2F%2Funions.example"));
    }
}
