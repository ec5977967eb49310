//! Chapter directory API handlers
//!
//! GET  /api/chapters                 — directory view (established + forming)
//! GET  /api/chapters/{country_code}  — single chapter lookup
//! POST /api/chapters/apply           — chapter application (store write + mailto)

use axum::extract::{Path, Query, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{Value, json};
use shared::models::{Chapter, ChapterApplication};
use shared::{ApiResponse, AppError, ErrorCode};

use crate::content::directory;
use crate::content::flags::country_flag;
use crate::error::ServiceError;
use crate::i18n::{Locale, MessageCatalog, MessageError};
use crate::mailto;
use crate::state::AppState;
use crate::store;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/chapters", get(list_chapters))
        .route("/api/chapters/apply", post(apply))
        .route("/api/chapters/{country_code}", get(get_chapter))
}

// ── Request / Response types ──

#[derive(Deserialize)]
pub struct DirectoryQuery {
    pub locale: Option<String>,
}

// ── Helpers ──

fn parse_locale(param: Option<&str>) -> Result<Locale, AppError> {
    match param {
        None => Ok(Locale::DEFAULT),
        Some(code) => {
            Locale::from_code(code).ok_or_else(|| AppError::locale_not_supported(code))
        }
    }
}

fn valid_country_code(code: &str) -> bool {
    code.len() == 2 && code.bytes().all(|b| b.is_ascii_alphabetic())
}

fn directory_labels(catalog: &MessageCatalog, locale: Locale) -> Result<Value, MessageError> {
    Ok(json!({
        "title": catalog.text(locale, "chapters.title")?,
        "subtitle": catalog.text(locale, "chapters.subtitle")?,
        "established": catalog.text(locale, "chapters.established")?,
        "forming": catalog.text(locale, "chapters.forming")?,
        "start_chapter": catalog.text(locale, "chapters.startChapter")?,
        "start_chapter_desc": catalog.text(locale, "chapters.startChapterDesc")?,
        "learn_how": catalog.text(locale, "chapters.learnHow")?,
    }))
}

fn established_card(chapter: &Chapter, status_label: &str) -> Value {
    json!({
        "country_code": chapter.country_code,
        "country_name": chapter.country_name_en,
        "country_name_native": chapter.country_name_native,
        "flag": country_flag(&chapter.country_code),
        "status": chapter.status,
        "status_label": status_label,
        "description": chapter.description_en,
        "member_count": chapter.member_count,
        "website_url": chapter.website_url,
    })
}

// ── GET /api/chapters ──

pub async fn list_chapters(
    State(state): State<AppState>,
    Query(query): Query<DirectoryQuery>,
) -> Result<ApiResponse<Value>, ServiceError> {
    let locale = parse_locale(query.locale.as_deref())?;

    let chapters = store::chapters::list(&state.store).await;
    let total = chapters.len();
    let split = directory::partition(chapters);

    let status_label = state.catalog.text(locale, "chapters.established")?;
    let established: Vec<Value> = split
        .established
        .iter()
        .map(|chapter| established_card(chapter, status_label))
        .collect();
    let forming = directory::forming_entries(&split.forming);

    Ok(ApiResponse::success(json!({
        "locale": locale,
        "labels": directory_labels(&state.catalog, locale)?,
        "established": established,
        "forming": forming,
        "total": total,
    })))
}

// ── GET /api/chapters/{country_code} ──

pub async fn get_chapter(
    State(state): State<AppState>,
    Path(country_code): Path<String>,
) -> Result<ApiResponse<Value>, ServiceError> {
    let code = country_code.trim().to_ascii_uppercase();
    if !valid_country_code(&code) {
        return Err(AppError::with_message(
            ErrorCode::CountryCodeInvalid,
            format!("'{country_code}' is not a two-letter country code"),
        )
        .into());
    }

    match store::chapters::find_by_country(&state.store, &code).await? {
        Some(chapter) => {
            let flag = country_flag(&chapter.country_code);
            Ok(ApiResponse::success(json!({
                "chapter": chapter,
                "flag": flag,
            })))
        }
        None => Err(AppError::chapter_not_found(code).into()),
    }
}

// ── POST /api/chapters/apply ──

pub async fn apply(
    State(state): State<AppState>,
    Json(mut req): Json<ChapterApplication>,
) -> Result<ApiResponse<Value>, ServiceError> {
    req.country_code = req.country_code.trim().to_ascii_uppercase();
    req.contact_email = req.contact_email.trim().to_lowercase();

    // Validate
    if !valid_country_code(&req.country_code) {
        return Err(AppError::with_message(
            ErrorCode::CountryCodeInvalid,
            "country_code must be a two-letter code",
        )
        .into());
    }
    if req.country_name_en.trim().is_empty() {
        return Err(AppError::required_field("country_name_en").into());
    }
    if req.leader_name.trim().is_empty() {
        return Err(AppError::required_field("leader_name").into());
    }
    if req.contact_email.is_empty() || !req.contact_email.contains('@') {
        return Err(AppError::invalid_email().into());
    }

    // The email channel works even when the store write does not, so the
    // link is included in the failure response as well.
    let email_link = mailto::chapter_application(&req);

    if let Err(e) = store::chapters::apply(&state.store, &req).await {
        tracing::error!(error = %e, "Chapter application write failed");
        return Err(AppError::submission_failed()
            .with_detail("mailto", email_link)
            .into());
    }

    Ok(ApiResponse::success_with_message(
        "Your application has been submitted. We'll be in touch.",
        json!({ "mailto": email_link }),
    ))
}
