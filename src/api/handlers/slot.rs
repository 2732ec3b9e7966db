use axum::{extract::{Query, State}, http::StatusCode, response::IntoResponse, Json};
use crate::api::dtos::requests::{parse_timestamp, CreateSlotRequest, SlotQuery};
use crate::api::dtos::responses::SlotWithExperience;
use crate::domain::models::{experience::Experience, slot::Slot};
use crate::error::AppError;
use crate::state::AppState;
use serde_json::json;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::info;

pub async fn create_slot(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateSlotRequest>,
) -> Result<impl IntoResponse, AppError> {
    let (Some(experience_id), Some(date), Some(time), Some(capacity)) = (
        payload.experience_id,
        payload.date,
        payload.time,
        payload.capacity,
    ) else {
        return Err(AppError::Validation("Missing required fields".into()));
    };

    let date = parse_timestamp(&date)?;
    let time = parse_timestamp(&time)?;
    let booked_count = payload.booked_count.unwrap_or(0);

    let slot = Slot::new(experience_id, date, time, capacity, booked_count);
    let created = state.slot_repo.create(&slot).await?;
    info!("Created slot {} for experience {}", created.id, created.experience_id);

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Slot created successfully",
            "data": created
        })),
    ))
}

pub async fn list_slots(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SlotQuery>,
) -> Result<impl IntoResponse, AppError> {
    let slots = state.slot_repo.list(query.experience_id.as_deref()).await?;

    let experiences: HashMap<String, Experience> = state
        .experience_repo
        .list()
        .await?
        .into_iter()
        .map(|experience| (experience.id.clone(), experience))
        .collect();

    let data: Vec<SlotWithExperience> = slots
        .into_iter()
        .filter_map(|slot| {
            experiences
                .get(&slot.experience_id)
                .cloned()
                .map(|experience| SlotWithExperience { slot, experience })
        })
        .collect();

    Ok(Json(json!({
        "message": "Slots fetched successfully",
        "data": data
    })))
}
