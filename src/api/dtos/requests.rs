use crate::error::AppError;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Deserializer};

/// Missing fields and empty strings are both "absent"; handlers reject them
/// with a single "Missing required fields" response, matching the published
/// API contract.
fn de_opt_str<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum IntOrString {
    Int(i64),
    Float(f64),
    Str(String),
}

/// Integer fields arrive as JSON numbers or numeric strings; both coerce.
/// Unparseable values come back as `None` and fail field validation.
fn de_opt_int<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<IntOrString>::deserialize(deserializer)?;
    Ok(match value {
        None => None,
        Some(IntOrString::Int(n)) => Some(n),
        Some(IntOrString::Float(f)) => Some(f as i64),
        Some(IntOrString::Str(s)) => s.trim().parse::<i64>().ok(),
    })
}

/// Accepts RFC 3339 or a bare `YYYY-MM-DD` (midnight UTC).
pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, AppError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        if let Some(dt) = date.and_hms_opt(0, 0, 0) {
            return Ok(Utc.from_utc_datetime(&dt));
        }
    }
    Err(AppError::Validation("Invalid date format".into()))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateExperienceRequest {
    #[serde(default, deserialize_with = "de_opt_str")]
    pub image_url: Option<String>,
    #[serde(default, deserialize_with = "de_opt_str")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "de_opt_str")]
    pub city: Option<String>,
    #[serde(default, deserialize_with = "de_opt_str")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "de_opt_str")]
    pub about: Option<String>,
    #[serde(default, deserialize_with = "de_opt_int")]
    pub price: Option<i64>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSlotRequest {
    #[serde(default, deserialize_with = "de_opt_str")]
    pub experience_id: Option<String>,
    #[serde(default, deserialize_with = "de_opt_str")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "de_opt_str")]
    pub time: Option<String>,
    #[serde(default, deserialize_with = "de_opt_int")]
    pub capacity: Option<i64>,
    #[serde(default, deserialize_with = "de_opt_int")]
    pub booked_count: Option<i64>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotQuery {
    pub experience_id: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    #[serde(default, deserialize_with = "de_opt_str")]
    pub start_date: Option<String>,
    #[serde(default, deserialize_with = "de_opt_str")]
    pub end_date: Option<String>,
    #[serde(default, deserialize_with = "de_opt_str")]
    pub experience_id: Option<String>,
    #[serde(default, deserialize_with = "de_opt_str")]
    pub name: Option<String>,
    #[serde(rename = "Email", default, deserialize_with = "de_opt_str")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "de_opt_str")]
    pub slot_id: Option<String>,
    #[serde(default, deserialize_with = "de_opt_str")]
    pub promo_code: Option<String>,
    #[serde(default, deserialize_with = "de_opt_int")]
    pub quantity: Option<i64>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePromoRequest {
    #[serde(default, deserialize_with = "de_opt_str")]
    pub code: Option<String>,
    #[serde(rename = "type", default, deserialize_with = "de_opt_str")]
    pub kind: Option<String>,
    #[serde(default, deserialize_with = "de_opt_int")]
    pub value: Option<i64>,
    pub expires_at: Option<DateTime<Utc>>,
}

#[derive(Deserialize)]
pub struct ValidatePromoRequest {
    #[serde(default, deserialize_with = "de_opt_str")]
    pub code: Option<String>,
}
