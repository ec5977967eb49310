//! Unified service-layer error type for hsi-site
//!
//! `ServiceError` bridges the gap between store-layer errors (`StoreError`),
//! catalog lookup errors (`MessageError`) and the API-layer error (`AppError`).
//! It enables `?` propagation without manual
//! `.map_err(|e| { tracing::error!(...); AppError::new(...) })` boilerplate.

use axum::response::IntoResponse;
use shared::{AppError, ErrorCode};

use crate::i18n::MessageError;
use crate::store::StoreError;

/// Service-layer error — only two variants, keeps things simple.
///
/// - `Store`: hosted store errors (auto-logged, mapped to StoreError)
/// - `App`: Business-rule errors (transparent pass-through to client)
#[derive(Debug)]
pub enum ServiceError {
    /// Hosted store request failed (network, timeout, rejected write)
    Store(StoreError),
    /// Business-rule error (already an AppError with the correct ErrorCode)
    App(AppError),
}

impl From<StoreError> for ServiceError {
    fn from(e: StoreError) -> Self {
        ServiceError::Store(e)
    }
}

impl From<AppError> for ServiceError {
    fn from(e: AppError) -> Self {
        ServiceError::App(e)
    }
}

impl From<MessageError> for ServiceError {
    fn from(e: MessageError) -> Self {
        let app_err = match &e {
            MessageError::Missing { locale, key } => {
                AppError::missing_message(locale.code(), key.clone())
            }
            MessageError::Kind { locale, key, expected } => {
                AppError::with_message(ErrorCode::MessageKindMismatch, e.to_string())
                    .with_detail("locale", locale.code())
                    .with_detail("key", key.clone())
                    .with_detail("expected", *expected)
            }
        };
        ServiceError::App(app_err)
    }
}

impl From<ServiceError> for AppError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::App(app_err) => app_err,
            ServiceError::Store(store_err) => {
                tracing::error!(error = %store_err, "Hosted store error");
                AppError::new(ErrorCode::StoreError)
            }
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> axum::response::Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

/// Convenience type alias for service-layer results
pub type ServiceResult<T> = Result<T, ServiceError>;
