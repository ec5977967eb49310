//! Member Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Membership tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MembershipType {
    Supporter,
    Member,
    Organizer,
    Leader,
}

impl Default for MembershipType {
    fn default() -> Self {
        Self::Supporter
    }
}

/// Member lifecycle status (store defaults new members to `pending`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberStatus {
    Pending,
    Active,
    Inactive,
    Suspended,
}

impl Default for MemberStatus {
    fn default() -> Self {
        Self::Pending
    }
}

/// Member entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Member {
    pub id: String,
    pub user_id: Option<String>,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub country_code: String,
    pub chapter_id: Option<String>,
    pub preferred_language: String,
    pub membership_type: MembershipType,
    pub status: MemberStatus,
    pub bio: Option<String>,
    pub interests: Option<Vec<String>>,
    pub skills: Option<Vec<String>>,
    pub wants_newsletter: bool,
    pub wants_event_updates: bool,
    pub joined_at: DateTime<Utc>,
}

/// Registration payload (id, status and joined_at are store-assigned)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberRegistration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub country_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chapter_id: Option<String>,
    pub preferred_language: String,
    #[serde(default)]
    pub membership_type: MembershipType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interests: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
    #[serde(default)]
    pub wants_newsletter: bool,
    #[serde(default)]
    pub wants_event_updates: bool,
}
