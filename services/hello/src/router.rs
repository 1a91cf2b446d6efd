use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use hello_core::cors::{CorsConfig, cors_layer};
use hello_core::health::{healthz, readyz};
use hello_core::middleware::{propagate_request_id_layer, request_id_layer};

use crate::handlers::{greeting::get_greeting, hello::hello};

pub fn build_router(cors: &CorsConfig) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Greetings
        .route("/", get(hello))
        .route("/greeting", get(get_greeting))
        .layer(cors_layer(cors))
        .layer(TraceLayer::new_for_http())
        .layer(propagate_request_id_layer())
        .layer(request_id_layer())
}
