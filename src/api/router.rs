use axum::{
    body::Body,
    extract::Request,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use crate::state::AppState;
use crate::api::handlers::{booking, experience, health, promo, slot};
use tower_http::{
    classify::ServerErrorsFailureClass,
    cors::CorsLayer,
    trace::TraceLayer,
};
use tracing::{error, info, info_span, Span};
use uuid::Uuid;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health_check))

        // Catalog
        .route("/experience", post(experience::create_experience).get(experience::list_experiences))
        .route("/experience/", get(experience::get_experience_missing_id))
        .route("/experience/{id}", get(experience::get_experience))

        // Slots
        .route("/slot", post(slot::create_slot).get(slot::list_slots))

        // Checkout
        .route("/booking", post(booking::create_booking))
        .route("/promo", post(promo::create_promo))
        .route("/promo/validate", post(promo::validate_promo))

        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = Uuid::new_v4().to_string();
                    info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = ?request.method(),
                        uri = ?request.uri(),
                        version = ?request.version(),
                    )
                })
                .on_request(|request: &Request<Body>, _span: &Span| {
                    info!("started processing request: {} {}", request.method(), request.uri().path());
                })
                .on_response(|response: &axum::http::Response<Body>, latency: Duration, _span: &Span| {
                    info!(
                        status = response.status().as_u16(),
                        latency_ms = latency.as_millis(),
                        "finished processing request"
                    );
                })
                .on_failure(|error: ServerErrorsFailureClass, _latency: Duration, _span: &Span| {
                    error!("request failed: {:?}", error);
                })
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}
