use crate::domain::{models::slot::Slot, ports::SlotRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteSlotRepo {
    pool: SqlitePool,
}

impl SqliteSlotRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SlotRepository for SqliteSlotRepo {
    async fn create(&self, slot: &Slot) -> Result<Slot, AppError> {
        sqlx::query_as::<_, Slot>(
            "INSERT INTO slots (id, experience_id, date, time, capacity, booked_count)
             VALUES (?, ?, ?, ?, ?, ?)
             RETURNING *"
        )
            .bind(&slot.id).bind(&slot.experience_id).bind(slot.date).bind(slot.time)
            .bind(slot.capacity).bind(slot.booked_count)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Slot>, AppError> {
        sqlx::query_as::<_, Slot>("SELECT * FROM slots WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool).await.map_err(AppError::Database)
    }

    async fn list(&self, experience_id: Option<&str>) -> Result<Vec<Slot>, AppError> {
        match experience_id {
            Some(experience_id) => self.list_by_experience(experience_id).await,
            None => sqlx::query_as::<_, Slot>("SELECT * FROM slots ORDER BY date ASC")
                .fetch_all(&self.pool).await.map_err(AppError::Database),
        }
    }

    async fn list_by_experience(&self, experience_id: &str) -> Result<Vec<Slot>, AppError> {
        sqlx::query_as::<_, Slot>("SELECT * FROM slots WHERE experience_id = ? ORDER BY date ASC")
            .bind(experience_id)
            .fetch_all(&self.pool).await.map_err(AppError::Database)
    }
}
