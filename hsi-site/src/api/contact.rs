//! Contact form API handler
//!
//! POST /api/contact — contact-form message

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use shared::models::ContactMessage;
use shared::{ApiResponse, AppError};

use crate::error::ServiceError;
use crate::state::AppState;
use crate::store;

pub fn router() -> Router<AppState> {
    Router::new().route("/api/contact", post(submit_contact))
}

// ── POST /api/contact ──

pub async fn submit_contact(
    State(state): State<AppState>,
    Json(mut req): Json<ContactMessage>,
) -> Result<ApiResponse<()>, ServiceError> {
    req.email = req.email.trim().to_lowercase();

    // Validate
    if req.name.trim().is_empty() {
        return Err(AppError::required_field("name").into());
    }
    if req.email.is_empty() || !req.email.contains('@') {
        return Err(AppError::invalid_email().into());
    }
    if req.subject.trim().is_empty() {
        return Err(AppError::required_field("subject").into());
    }
    if req.message.trim().is_empty() {
        return Err(AppError::required_field("message").into());
    }
    if let Some(code) = &req.country_code {
        req.country_code = Some(code.trim().to_ascii_uppercase());
    }

    if let Err(e) = store::contacts::submit(&state.store, &req).await {
        tracing::error!(error = %e, "Contact message write failed");
        return Err(AppError::submission_failed().into());
    }

    Ok(ApiResponse::ok_with_message("Thank you! We'll get back to you."))
}
