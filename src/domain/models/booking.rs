use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A committed booking. Never updated or deleted.
///
/// The `Email` and `TotalPrice` wire names are part of the published API
/// contract and are kept as-is.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    pub experience_id: String,
    pub slot_id: String,
    pub name: String,
    #[serde(rename = "Email")]
    pub email: String,
    pub quantity: i64,
    pub promo_code: Option<String>,
    #[serde(rename = "TotalPrice")]
    pub total_price: i64,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

pub struct NewBookingParams {
    pub experience_id: String,
    pub slot_id: String,
    pub name: String,
    pub email: String,
    pub quantity: i64,
    pub promo_code: Option<String>,
    pub total_price: i64,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}

impl Booking {
    pub fn new(params: NewBookingParams) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            experience_id: params.experience_id,
            slot_id: params.slot_id,
            name: params.name,
            email: params.email,
            quantity: params.quantity,
            promo_code: params.promo_code,
            total_price: params.total_price,
            start_date: params.start_date,
            end_date: params.end_date,
            created_at: Utc::now(),
        }
    }
}
