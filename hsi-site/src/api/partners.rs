//! Partner API handlers
//!
//! GET  /api/partners       — partner organizations cleared for display
//! POST /api/partners/apply — partnership application (store write + mailto)

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{Value, json};
use shared::models::{Partner, PartnershipApplication};
use shared::{ApiResponse, AppError, ErrorCode};

use crate::error::ServiceError;
use crate::mailto;
use crate::state::AppState;
use crate::store;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/partners", get(list_partners))
        .route("/api/partners/apply", post(apply))
}

// ── GET /api/partners ──

pub async fn list_partners(
    State(state): State<AppState>,
) -> Result<ApiResponse<Vec<Partner>>, ServiceError> {
    let partners = store::partners::list_active(&state.store).await?;
    Ok(ApiResponse::success(partners))
}

// ── POST /api/partners/apply ──

pub async fn apply(
    State(state): State<AppState>,
    Json(mut req): Json<PartnershipApplication>,
) -> Result<ApiResponse<Value>, ServiceError> {
    req.country_code = req.country_code.trim().to_ascii_uppercase();
    req.contact_email = req.contact_email.trim().to_lowercase();

    // Validate
    if req.organization_name.trim().is_empty() {
        return Err(AppError::required_field("organization_name").into());
    }
    if req.country_code.len() != 2 || !req.country_code.bytes().all(|b| b.is_ascii_alphabetic())
    {
        return Err(AppError::with_message(
            ErrorCode::CountryCodeInvalid,
            "country_code must be a two-letter code",
        )
        .into());
    }
    if req.contact_email.is_empty() || !req.contact_email.contains('@') {
        return Err(AppError::invalid_email().into());
    }

    let email_link = mailto::partnership_application(&req);

    if let Err(e) = store::partners::apply(&state.store, &req).await {
        tracing::error!(error = %e, "Partnership application write failed");
        return Err(AppError::submission_failed()
            .with_detail("mailto", email_link)
            .into());
    }

    Ok(ApiResponse::success_with_message(
        "Thank you for your interest. We'll review and contact you.",
        json!({ "mailto": email_link }),
    ))
}
