//! Membership API handlers
//!
//! POST /api/newsletter — newsletter subscription
//! POST /api/join       — member registration

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use shared::models::{MemberRegistration, NewsletterSubscription};
use shared::{ApiResponse, AppError};

use crate::error::ServiceError;
use crate::i18n::Locale;
use crate::state::AppState;
use crate::store;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/newsletter", post(subscribe_newsletter))
        .route("/api/join", post(register_member))
}

// ── POST /api/newsletter ──

pub async fn subscribe_newsletter(
    State(state): State<AppState>,
    Json(mut req): Json<NewsletterSubscription>,
) -> Result<ApiResponse<()>, ServiceError> {
    req.email = req.email.trim().to_lowercase();

    if req.email.is_empty() || !req.email.contains('@') {
        return Err(AppError::invalid_email().into());
    }
    if let Some(code) = &req.country_code {
        req.country_code = Some(code.trim().to_ascii_uppercase());
    }

    if let Err(e) = store::newsletter::subscribe(&state.store, &req).await {
        tracing::error!(error = %e, "Newsletter subscription write failed");
        return Err(AppError::submission_failed().into());
    }

    Ok(ApiResponse::ok_with_message(
        "Welcome to the movement! You'll receive updates soon.",
    ))
}

// ── POST /api/join ──

pub async fn register_member(
    State(state): State<AppState>,
    Json(mut req): Json<MemberRegistration>,
) -> Result<ApiResponse<()>, ServiceError> {
    req.email = req.email.trim().to_lowercase();
    req.country_code = req.country_code.trim().to_ascii_uppercase();

    // Validate
    if req.first_name.trim().is_empty() {
        return Err(AppError::required_field("first_name").into());
    }
    if req.last_name.trim().is_empty() {
        return Err(AppError::required_field("last_name").into());
    }
    if req.email.is_empty() || !req.email.contains('@') {
        return Err(AppError::invalid_email().into());
    }
    if req.country_code.len() != 2 || !req.country_code.bytes().all(|b| b.is_ascii_alphabetic())
    {
        return Err(AppError::validation("country_code must be a two-letter code").into());
    }

    // Store the canonical language code, not whatever tag the client sent
    match Locale::from_code(&req.preferred_language) {
        Some(locale) => req.preferred_language = locale.code().to_string(),
        None => {
            return Err(AppError::validation(format!(
                "preferred_language '{}' is not a supported locale",
                req.preferred_language
            ))
            .into());
        }
    }

    if let Err(e) = store::members::register(&state.store, &req).await {
        tracing::error!(error = %e, "Member registration write failed");
        return Err(AppError::submission_failed().into());
    }

    Ok(ApiResponse::ok_with_message(
        "Welcome to the movement! You'll receive updates soon.",
    ))
}
