//! Partner Model

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Kind of partnering organization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrganizationType {
    PoliticalParty,
    Union,
    Ngo,
    CivilSociety,
    Academic,
    Other,
}

impl OrganizationType {
    /// Wire name, matching the store's enum values
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::PoliticalParty => "political_party",
            Self::Union => "union",
            Self::Ngo => "ngo",
            Self::CivilSociety => "civil_society",
            Self::Academic => "academic",
            Self::Other => "other",
        }
    }
}

/// Depth of the partnership
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartnershipLevel {
    Affiliate,
    Partner,
    Ally,
    Founding,
}

impl Default for PartnershipLevel {
    fn default() -> Self {
        Self::Affiliate
    }
}

/// Partner lifecycle status (store defaults new partners to `pending`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartnerStatus {
    Pending,
    Approved,
    Active,
    Inactive,
}

impl PartnerStatus {
    /// Approved and active partners appear in the public listing
    pub const fn is_listed(&self) -> bool {
        matches!(self, Self::Approved | Self::Active)
    }
}

/// Partner organization entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Partner {
    pub id: String,
    pub organization_name: String,
    pub organization_type: OrganizationType,
    pub country_code: String,
    pub website_url: Option<String>,
    pub contact_email: String,
    pub contact_person: Option<String>,
    pub description: Option<String>,
    pub partnership_level: PartnershipLevel,
    pub status: PartnerStatus,
    pub logo_url: Option<String>,
    #[serde(default)]
    pub social_links: HashMap<String, String>,
    pub member_count: Option<i64>,
}

/// Partnership application payload (id and status are store-assigned)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartnershipApplication {
    pub organization_name: String,
    pub organization_type: OrganizationType,
    pub country_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website_url: Option<String>,
    pub contact_email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_person: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// New applications start at the entry level unless stated
    #[serde(default)]
    pub partnership_level: PartnershipLevel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub social_links: HashMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub member_count: Option<i64>,
}
