use crate::domain::models::{
    booking::Booking, experience::Experience, promo_code::PromoCode, slot::Slot,
};
use crate::error::AppError;
use async_trait::async_trait;

#[async_trait]
pub trait ExperienceRepository: Send + Sync {
    async fn create(&self, experience: &Experience) -> Result<Experience, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Experience>, AppError>;
    async fn list(&self) -> Result<Vec<Experience>, AppError>;
}

#[async_trait]
pub trait SlotRepository: Send + Sync {
    async fn create(&self, slot: &Slot) -> Result<Slot, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Slot>, AppError>;
    async fn list(&self, experience_id: Option<&str>) -> Result<Vec<Slot>, AppError>;
    async fn list_by_experience(&self, experience_id: &str) -> Result<Vec<Slot>, AppError>;
}

#[async_trait]
pub trait PromoCodeRepository: Send + Sync {
    async fn create(&self, promo: &PromoCode) -> Result<PromoCode, AppError>;
    async fn find_by_code(&self, code: &str) -> Result<Option<PromoCode>, AppError>;
}

#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Persists the booking and claims its seats in one transaction.
    ///
    /// The seat claim is a conditional update on the slot row; when the
    /// requested quantity does not fit, the transaction rolls back and
    /// `CapacityExceeded` is returned. Concurrent bookings against the same
    /// slot therefore cannot oversell it.
    async fn create(&self, booking: &Booking) -> Result<Booking, AppError>;
    async fn list_by_experience(&self, experience_id: &str) -> Result<Vec<Booking>, AppError>;
}
