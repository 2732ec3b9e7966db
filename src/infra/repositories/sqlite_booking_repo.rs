use crate::domain::{models::booking::Booking, ports::BookingRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteBookingRepo {
    pool: SqlitePool,
}

impl SqliteBookingRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookingRepository for SqliteBookingRepo {
    async fn create(&self, booking: &Booking) -> Result<Booking, AppError> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        // Seat claim and insert share the transaction: either both commit or
        // neither does. The WHERE clause is the capacity authority; a stale
        // pre-read in the handler cannot oversell past it.
        let claimed = sqlx::query(
            "UPDATE slots SET booked_count = booked_count + ? WHERE id = ? AND booked_count + ? <= capacity"
        )
            .bind(booking.quantity).bind(&booking.slot_id).bind(booking.quantity)
            .execute(&mut *tx).await.map_err(AppError::Database)?;
        if claimed.rows_affected() == 0 {
            return Err(AppError::CapacityExceeded("Not enough slots available".to_string()));
        }

        let created = sqlx::query_as::<_, Booking>(
            "INSERT INTO bookings (id, experience_id, slot_id, name, email, quantity, promo_code, total_price, start_date, end_date, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
             RETURNING *"
        )
            .bind(&booking.id).bind(&booking.experience_id).bind(&booking.slot_id)
            .bind(&booking.name).bind(&booking.email).bind(booking.quantity)
            .bind(&booking.promo_code).bind(booking.total_price)
            .bind(booking.start_date).bind(booking.end_date).bind(booking.created_at)
            .fetch_one(&mut *tx).await.map_err(AppError::Database)?;

        tx.commit().await.map_err(AppError::Database)?;
        Ok(created)
    }

    async fn list_by_experience(&self, experience_id: &str) -> Result<Vec<Booking>, AppError> {
        sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE experience_id = ? ORDER BY created_at ASC")
            .bind(experience_id)
            .fetch_all(&self.pool).await.map_err(AppError::Database)
    }
}
