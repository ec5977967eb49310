//! Content API handlers
//!
//! GET /api/locales              — locale metadata for the language switcher
//! GET /api/pages/{locale}/{page} — localized page payload

use axum::extract::{Path, State};
use axum::{Router, routing::get};
use serde_json::{Value, json};
use shared::{ApiResponse, AppError};

use crate::content::pages;
use crate::error::ServiceError;
use crate::i18n::Locale;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/locales", get(list_locales))
        .route("/api/pages/{locale}/{page}", get(get_page))
}

// ── GET /api/locales ──

pub async fn list_locales() -> ApiResponse<Value> {
    let locales: Vec<Value> = Locale::ALL
        .iter()
        .map(|locale| {
            json!({
                "code": locale.code(),
                "native_name": locale.native_name(),
                "flag": locale.flag(),
                "default": *locale == Locale::DEFAULT,
            })
        })
        .collect();

    ApiResponse::success(json!({
        "locales": locales,
        "default": Locale::DEFAULT.code(),
    }))
}

// ── GET /api/pages/{locale}/{page} ──

pub async fn get_page(
    State(state): State<AppState>,
    Path((locale, page)): Path<(String, String)>,
) -> Result<ApiResponse<Value>, ServiceError> {
    let Some(locale) = Locale::from_code(&locale) else {
        return Err(AppError::locale_not_supported(locale).into());
    };

    let payload = match pages::build(&state.catalog, locale, &page) {
        Some(result) => result?,
        None => return Err(AppError::page_not_found(page.as_str()).into()),
    };

    Ok(ApiResponse::success(payload))
}
