use crate::domain::models::{booking::Booking, experience::Experience, slot::Slot};
use serde::Serialize;

/// Catalog entry: an experience with its slots nested under the `slot` key,
/// as the client expects.
#[derive(Serialize)]
pub struct ExperienceWithSlots {
    #[serde(flatten)]
    pub experience: Experience,
    pub slot: Vec<Slot>,
}

#[derive(Serialize)]
pub struct ExperienceDetail {
    #[serde(flatten)]
    pub experience: Experience,
    pub slot: Vec<Slot>,
    pub bookings: Vec<Booking>,
}

#[derive(Serialize)]
pub struct SlotWithExperience {
    #[serde(flatten)]
    pub slot: Slot,
    pub experience: Experience,
}
