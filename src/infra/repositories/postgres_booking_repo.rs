use crate::domain::{models::booking::Booking, ports::BookingRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PostgresBookingRepo {
    pool: PgPool,
}

impl PostgresBookingRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookingRepository for PostgresBookingRepo {
    async fn create(&self, booking: &Booking) -> Result<Booking, AppError> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        // Conditional update takes a row lock on the slot; concurrent claims
        // against the same slot serialize here.
        let claimed = sqlx::query(
            "UPDATE slots SET booked_count = booked_count + $1 WHERE id = $2 AND booked_count + $1 <= capacity"
        )
            .bind(booking.quantity).bind(&booking.slot_id)
            .execute(&mut *tx).await.map_err(AppError::Database)?;
        if claimed.rows_affected() == 0 {
            return Err(AppError::CapacityExceeded("Not enough slots available".to_string()));
        }

        let created = sqlx::query_as::<_, Booking>(
            "INSERT INTO bookings (id, experience_id, slot_id, name, email, quantity, promo_code, total_price, start_date, end_date, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
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
        sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE experience_id = $1 ORDER BY created_at ASC")
            .bind(experience_id)
            .fetch_all(&self.pool).await.map_err(AppError::Database)
    }
}
