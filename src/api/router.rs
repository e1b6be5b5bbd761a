use super::handlers::*;
use super::protocol::*;
use super::service::StringService;

use axum::{Extension, Router, routing::get};
use std::sync::Arc;

/// Builds the HTTP router with `service` shared across all handlers.
pub fn build_router(service: Arc<StringService>) -> Router {
    Router::new()
        .route(
            ENDPOINT_STRINGS,
            get(handle_filter_strings).post(handle_create_string),
        )
        .route(
            ENDPOINT_NATURAL_LANGUAGE,
            get(handle_natural_language_filter).delete(handle_delete_natural_language_segment),
        )
        .route(
            ENDPOINT_STRING_BY_VALUE,
            get(handle_get_string).delete(handle_delete_string),
        )
        .route(ENDPOINT_HEALTH, get(handle_health))
        .layer(Extension(service))
}
