use experience_backend::{
    api::router::create_router,
    config::Config,
    infra::repositories::{
        sqlite_booking_repo::SqliteBookingRepo,
        sqlite_experience_repo::SqliteExperienceRepo,
        sqlite_promo_repo::SqlitePromoRepo,
        sqlite_slot_repo::SqliteSlotRepo,
    },
    state::AppState,
};
use axum::{
    body::Body,
    http::{header, Request},
    response::Response,
    Router,
};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub pool: Pool<Sqlite>,
    pub db_filename: String,
}

impl TestApp {
    pub async fn new() -> Self {
        let db_filename = format!("test_{}.db", Uuid::new_v4());
        let db_url = format!("sqlite://{}?mode=rwc", db_filename);

        let connection_options = SqliteConnectOptions::from_str(&db_url)
            .unwrap()
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(Duration::from_secs(5));

        let pool = SqlitePoolOptions::new()
            .connect_with(connection_options)
            .await
            .expect("Failed to connect to test db");

        sqlx::migrate!("./migrations/sqlite")
            .run(&pool)
            .await
            .expect("Failed to migrate test db");

        let config = Config {
            database_url: db_url.clone(),
            port: 0,
        };

        let state = Arc::new(AppState {
            config,
            experience_repo: Arc::new(SqliteExperienceRepo::new(pool.clone())),
            slot_repo: Arc::new(SqliteSlotRepo::new(pool.clone())),
            promo_repo: Arc::new(SqlitePromoRepo::new(pool.clone())),
            booking_repo: Arc::new(SqliteBookingRepo::new(pool.clone())),
        });

        let router = create_router(state);

        Self {
            router,
            pool,
            db_filename,
        }
    }

    pub async fn post(&self, uri: &str, payload: Value) -> Response {
        self.router
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(payload.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    pub async fn get(&self, uri: &str) -> Response {
        self.router
            .clone()
            .oneshot(Request::builder().method("GET").uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }
}

#[allow(dead_code)]
pub async fn parse_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.db_filename);
        let _ = std::fs::remove_file(format!("{}-wal", self.db_filename));
        let _ = std::fs::remove_file(format!("{}-shm", self.db_filename));
    }
}
