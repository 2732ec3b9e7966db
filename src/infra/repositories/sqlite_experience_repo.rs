use crate::domain::{models::experience::Experience, ports::ExperienceRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteExperienceRepo {
    pool: SqlitePool,
}

impl SqliteExperienceRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ExperienceRepository for SqliteExperienceRepo {
    async fn create(&self, experience: &Experience) -> Result<Experience, AppError> {
        sqlx::query_as::<_, Experience>(
            "INSERT INTO experiences (id, image_url, title, city, description, about, price, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)
             RETURNING *"
        )
            .bind(&experience.id).bind(&experience.image_url).bind(&experience.title).bind(&experience.city)
            .bind(&experience.description).bind(&experience.about).bind(experience.price).bind(experience.created_at)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Experience>, AppError> {
        sqlx::query_as::<_, Experience>("SELECT * FROM experiences WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool).await.map_err(AppError::Database)
    }

    async fn list(&self) -> Result<Vec<Experience>, AppError> {
        sqlx::query_as::<_, Experience>("SELECT * FROM experiences ORDER BY created_at ASC")
            .fetch_all(&self.pool).await.map_err(AppError::Database)
    }
}
