//! Chapter Model

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Chapter lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChapterStatus {
    Forming,
    Established,
    Active,
    Inactive,
}

impl ChapterStatus {
    /// Fixed display rank: active first, inactive last
    pub const fn rank(&self) -> u8 {
        match self {
            Self::Active => 0,
            Self::Established => 1,
            Self::Forming => 2,
            Self::Inactive => 3,
        }
    }

    /// Established and active chapters are presented together
    pub const fn is_established_like(&self) -> bool {
        matches!(self, Self::Established | Self::Active)
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Forming => "forming",
            Self::Established => "established",
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }
}

impl Default for ChapterStatus {
    fn default() -> Self {
        Self::Forming
    }
}

/// Chapter entity (country-level organizational unit)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chapter {
    pub id: String,
    /// Two-letter country code; natural uniqueness key and flag source
    pub country_code: String,
    pub country_name_en: String,
    pub country_name_native: Option<String>,
    pub status: ChapterStatus,
    pub founded_at: Option<NaiveDate>,
    pub website_url: Option<String>,
    pub contact_email: Option<String>,
    pub description_en: Option<String>,
    pub description_native: Option<String>,
    pub member_count: i64,
    pub leader_name: Option<String>,
    #[serde(default)]
    pub social_links: HashMap<String, String>,
    pub created_at: DateTime<Utc>,
}

/// Chapter application payload (store defaults status to `forming`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChapterApplication {
    pub country_code: String,
    pub country_name_en: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_name_native: Option<String>,
    pub contact_email: String,
    pub leader_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description_en: Option<String>,
}
