use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

pub const PROMO_TYPE_PERCENTAGE: &str = "percentage";
pub const PROMO_TYPE_FIXED: &str = "fixed";

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PromoCode {
    pub id: String,
    pub code: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub value: i64,
    pub expires_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl PromoCode {
    pub fn new(code: String, kind: String, value: i64, expires_at: Option<DateTime<Utc>>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            code,
            kind,
            value,
            expires_at,
            created_at: Utc::now(),
        }
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|t| t < now)
    }
}
