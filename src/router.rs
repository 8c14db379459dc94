use axum::{
    Router,
    http::{
        HeaderValue, Method,
        header::{AUTHORIZATION, CONTENT_TYPE},
    },
    routing::{get, post},
};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::db::DirectoryStorage;
use crate::handlers::{
    accreditations::list_accreditations_handler,
    contact::submit_contact_handler,
    health::health_handler,
    providers::{get_provider_handler, list_providers_handler},
    sync::wordpress_sync_handler,
};

/// Shared per-router state. Handlers receive storage explicitly through it.
#[derive(Clone)]
pub struct DirectoryState {
    pub storage: DirectoryStorage,
}

impl DirectoryState {
    pub fn new(storage: DirectoryStorage) -> Self {
        Self { storage }
    }
}

fn api_router() -> Router<DirectoryState> {
    Router::new()
        .route("/providers", get(list_providers_handler))
        .route("/providers/{id}", get(get_provider_handler))
        .route("/contact", post(submit_contact_handler))
        .route("/accreditations", get(list_accreditations_handler))
        .route("/sync/wordpress", post(wordpress_sync_handler))
}

/// CORS for the configured browser origins; unparsable entries are skipped.
pub fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|o| HeaderValue::from_str(o).ok())
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
}

pub fn directory_router(state: DirectoryState, allowed_origins: &[String]) -> Router {
    Router::new()
        .route("/", get(health_handler))
        .nest("/api", api_router())
        .with_state(state)
        .layer(cors_layer(allowed_origins))
        .layer(TraceLayer::new_for_http())
}
