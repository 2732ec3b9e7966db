use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A time slot owned by one experience. `booked_count` is only ever mutated
/// by booking creation, which claims seats with a conditional update so that
/// `booked_count <= capacity` holds after every commit.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Slot {
    pub id: String,
    pub experience_id: String,
    pub date: DateTime<Utc>,
    pub time: DateTime<Utc>,
    pub capacity: i64,
    pub booked_count: i64,
}

impl Slot {
    pub fn new(
        experience_id: String,
        date: DateTime<Utc>,
        time: DateTime<Utc>,
        capacity: i64,
        booked_count: i64,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            experience_id,
            date,
            time,
            capacity,
            booked_count,
        }
    }
}
