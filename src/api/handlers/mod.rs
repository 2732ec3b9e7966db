pub mod booking;
pub mod experience;
pub mod health;
pub mod promo;
pub mod slot;
