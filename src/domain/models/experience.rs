use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A bookable experience in the catalog. Immutable once created.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub id: String,
    pub image_url: String,
    pub title: String,
    pub city: String,
    pub description: String,
    pub about: String,
    pub price: i64,
    pub created_at: DateTime<Utc>,
}

impl Experience {
    pub fn new(
        image_url: String,
        title: String,
        city: String,
        description: String,
        about: String,
        price: i64,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            image_url,
            title,
            city,
            description,
            about,
            price,
            created_at: Utc::now(),
        }
    }
}
