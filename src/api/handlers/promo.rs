use axum::{extract::State, http::StatusCode, response::{IntoResponse, Response}, Json};
use crate::api::dtos::requests::{CreatePromoRequest, ValidatePromoRequest};
use crate::domain::models::promo_code::{PromoCode, PROMO_TYPE_FIXED, PROMO_TYPE_PERCENTAGE};
use crate::error::AppError;
use crate::state::AppState;
use chrono::Utc;
use serde_json::json;
use std::sync::Arc;
use tracing::info;

pub async fn create_promo(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreatePromoRequest>,
) -> Result<impl IntoResponse, AppError> {
    let (Some(code), Some(kind), Some(value)) = (payload.code, payload.kind, payload.value) else {
        return Err(AppError::Validation("Missing required fields".into()));
    };

    if kind != PROMO_TYPE_PERCENTAGE && kind != PROMO_TYPE_FIXED {
        return Err(AppError::Validation(
            "Type must be 'percentage' or 'fixed'".into(),
        ));
    }

    let promo = PromoCode::new(code, kind, value, payload.expires_at);
    let created = state.promo_repo.create(&promo).await?;
    info!("Created promo code: {}", created.code);

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Promo code created successfully",
            "data": created
        })),
    ))
}

/// Informational check used by the client before checkout. Stricter than the
/// booking path, which silently ignores bad codes.
pub async fn validate_promo(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<ValidatePromoRequest>,
) -> Result<Response, AppError> {
    let Some(code) = payload.code else {
        return Err(AppError::Validation("Promo code is required".into()));
    };

    let Some(promo) = state.promo_repo.find_by_code(&code).await? else {
        return Ok((
            StatusCode::NOT_FOUND,
            Json(json!({ "message": "Invalid promo code", "valid": false })),
        )
            .into_response());
    };

    if promo.is_expired(Utc::now()) {
        return Ok((
            StatusCode::BAD_REQUEST,
            Json(json!({ "message": "Promo code has expired", "valid": false })),
        )
            .into_response());
    }

    Ok(Json(json!({
        "message": "Promo code is valid",
        "valid": true,
        "data": promo
    }))
    .into_response())
}
