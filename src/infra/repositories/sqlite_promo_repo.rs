use crate::domain::{models::promo_code::PromoCode, ports::PromoCodeRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqlitePromoRepo {
    pool: SqlitePool,
}

impl SqlitePromoRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PromoCodeRepository for SqlitePromoRepo {
    async fn create(&self, promo: &PromoCode) -> Result<PromoCode, AppError> {
        sqlx::query_as::<_, PromoCode>(
            "INSERT INTO promo_codes (id, code, kind, value, expires_at, created_at)
             VALUES (?, ?, ?, ?, ?, ?)
             RETURNING *"
        )
            .bind(&promo.id).bind(&promo.code).bind(&promo.kind).bind(promo.value)
            .bind(promo.expires_at).bind(promo.created_at)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<PromoCode>, AppError> {
        sqlx::query_as::<_, PromoCode>("SELECT * FROM promo_codes WHERE code = ?")
            .bind(code)
            .fetch_optional(&self.pool).await.map_err(AppError::Database)
    }
}
