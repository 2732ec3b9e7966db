use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use crate::api::dtos::requests::{parse_timestamp, CreateBookingRequest};
use crate::domain::models::booking::{Booking, NewBookingParams};
use crate::domain::services::pricing;
use crate::error::AppError;
use crate::state::AppState;
use chrono::Utc;
use serde_json::json;
use std::sync::Arc;
use tracing::info;

pub async fn create_booking(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateBookingRequest>,
) -> Result<impl IntoResponse, AppError> {
    let (
        Some(start_date),
        Some(end_date),
        Some(experience_id),
        Some(name),
        Some(email),
        Some(slot_id),
        Some(quantity),
    ) = (
        payload.start_date,
        payload.end_date,
        payload.experience_id,
        payload.name,
        payload.email,
        payload.slot_id,
        payload.quantity,
    ) else {
        return Err(AppError::Validation("Missing required fields".into()));
    };

    if quantity < 1 {
        return Err(AppError::Validation("Quantity must be at least 1".into()));
    }

    let start_date = parse_timestamp(&start_date)?;
    let end_date = parse_timestamp(&end_date)?;

    let experience = state
        .experience_repo
        .find_by_id(&experience_id)
        .await?
        .ok_or(AppError::NotFound("Experience not found".into()))?;

    state
        .slot_repo
        .find_by_id(&slot_id)
        .await?
        .ok_or(AppError::NotFound("Slot not found".into()))?;

    let base_price = experience.price * quantity;

    // An unknown or expired code is ignored, never rejected; the booking
    // still records whatever code the customer typed.
    let promo = match &payload.promo_code {
        Some(code) => state.promo_repo.find_by_code(code).await?,
        None => None,
    };
    let total_price = pricing::total_price(base_price, promo.as_ref(), Utc::now());

    let booking = Booking::new(NewBookingParams {
        experience_id,
        slot_id,
        name,
        email,
        quantity,
        promo_code: payload.promo_code,
        total_price,
        start_date,
        end_date,
    });

    // The repo claims the seats and inserts the row in one transaction; a
    // full slot comes back as CapacityExceeded.
    let created = state.booking_repo.create(&booking).await?;
    info!(
        "Booking confirmed: {} for experience {} (quantity {}, total {})",
        created.id, created.experience_id, created.quantity, created.total_price
    );

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Booking created successfully",
            "data": created
        })),
    ))
}
