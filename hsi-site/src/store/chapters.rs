use chrono::{NaiveDate, Utc};
use shared::models::{Chapter, ChapterApplication, ChapterStatus};
use std::collections::HashMap;

use super::{StoreClient, StoreError};

/// Synthetic founding-chapter record served when the store is unreachable,
/// so the directory always renders something.
pub fn fallback_chapter() -> Chapter {
    Chapter {
        id: "1".to_string(),
        country_code: "KR".to_string(),
        country_name_en: "South Korea".to_string(),
        country_name_native: Some("대한민국".to_string()),
        status: ChapterStatus::Established,
        founded_at: NaiveDate::from_ymd_opt(2024, 1, 1),
        website_url: Some("https://happysociety.kr".to_string()),
        contact_email: None,
        description_en: Some(
            "The birthplace of the Happy Society movement, leading the way \
             for progressive politics in East Asia."
                .to_string(),
        ),
        description_native: None,
        member_count: 10_000,
        leader_name: None,
        social_links: HashMap::new(),
        created_at: Utc::now(),
    }
}

/// List every chapter, most-established first.
///
/// Chapters are fetched oldest-first and stable-sorted by status rank, so
/// within a status group older chapters keep their position. This read
/// never fails: any store error is swallowed and the founding-chapter
/// fallback is returned instead.
pub async fn list(store: &StoreClient) -> Vec<Chapter> {
    match fetch_sorted(store).await {
        Ok(chapters) => chapters,
        Err(e) => {
            tracing::warn!(error = %e, "Chapter list unavailable, serving fallback");
            vec![fallback_chapter()]
        }
    }
}

async fn fetch_sorted(store: &StoreClient) -> Result<Vec<Chapter>, StoreError> {
    let mut chapters: Vec<Chapter> = store
        .select("chapters", &[("order", "created_at.asc")])
        .await?;
    chapters.sort_by_key(|c| c.status.rank());
    Ok(chapters)
}

/// Find a single chapter by its two-letter country code.
///
/// Unlike [`list`], store errors propagate to the caller.
pub async fn find_by_country(
    store: &StoreClient,
    country_code: &str,
) -> Result<Option<Chapter>, StoreError> {
    let filter = format!("eq.{country_code}");
    let rows: Vec<Chapter> = store
        .select("chapters", &[("country_code", filter.as_str()), ("limit", "1")])
        .await?;
    Ok(rows.into_iter().next())
}

/// Record a new chapter application
pub async fn apply(
    store: &StoreClient,
    application: &ChapterApplication,
) -> Result<(), StoreError> {
    store.insert("chapters", application).await
}
