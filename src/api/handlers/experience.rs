use axum::{extract::{Path, State}, http::StatusCode, response::IntoResponse, Json};
use crate::api::dtos::requests::CreateExperienceRequest;
use crate::api::dtos::responses::{ExperienceDetail, ExperienceWithSlots};
use crate::domain::models::{experience::Experience, slot::Slot};
use crate::error::AppError;
use crate::state::AppState;
use serde_json::json;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::info;

pub async fn create_experience(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateExperienceRequest>,
) -> Result<impl IntoResponse, AppError> {
    let (Some(image_url), Some(title), Some(city), Some(description), Some(about), Some(price)) = (
        payload.image_url,
        payload.title,
        payload.city,
        payload.description,
        payload.about,
        payload.price,
    ) else {
        return Err(AppError::Validation("Missing required fields".into()));
    };

    let experience = Experience::new(image_url, title, city, description, about, price);
    let created = state.experience_repo.create(&experience).await?;
    info!("Created experience: {} ({})", created.title, created.id);

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Experience created successfully",
            "data": created
        })),
    ))
}

pub async fn list_experiences(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let experiences = state.experience_repo.list().await?;

    let mut slots_by_experience: HashMap<String, Vec<Slot>> = HashMap::new();
    for slot in state.slot_repo.list(None).await? {
        slots_by_experience
            .entry(slot.experience_id.clone())
            .or_default()
            .push(slot);
    }

    let exp: Vec<ExperienceWithSlots> = experiences
        .into_iter()
        .map(|experience| {
            let slot = slots_by_experience.remove(&experience.id).unwrap_or_default();
            ExperienceWithSlots { experience, slot }
        })
        .collect();

    Ok(Json(json!({
        "message": "Experiences fetched successfully",
        "exp": exp
    })))
}

pub async fn get_experience(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let experience = state
        .experience_repo
        .find_by_id(&id)
        .await?
        .ok_or(AppError::NotFound("Experience not found".into()))?;

    let slot = state.slot_repo.list_by_experience(&id).await?;
    let bookings = state.booking_repo.list_by_experience(&id).await?;

    Ok(Json(json!({
        "message": "Experience fetched successfully",
        "exp": ExperienceDetail { experience, slot, bookings }
    })))
}

// GET /experience/ with an empty id segment. The route predates the 404
// convention and answers 403; clients depend on it.
pub async fn get_experience_missing_id() -> Result<(), AppError> {
    Err(AppError::Forbidden("all fields required".into()))
}
