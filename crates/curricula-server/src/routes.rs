//! Route definitions.

use std::sync::Arc;

use axum::routing::{delete, get, post};
use axum::Router;

use curricula_engine::ResolutionEngine;

use crate::handlers::{self, AppState};

/// Create the API router.
///
/// # Arguments
/// * `engine` - The resolution engine; admin routes write to its store
pub fn create_router(engine: Arc<ResolutionEngine>) -> Router {
    let state = Arc::new(AppState::new(engine));

    Router::new()
        // Health
        .route("/health", get(handlers::health))
        .route("/api/v1/health", get(handlers::health))
        // Resolution
        .route("/api/v1/standards", get(handlers::resolve_standards))
        .route("/api/v1/standards/lesson", get(handlers::standards_for_lesson))
        // District custom standards
        .route("/api/v1/districts/:district_id/standards", post(handlers::create_district_standard))
        .route("/api/v1/district-standards/:id", delete(handlers::delete_district_standard))
        // School overrides
        .route("/api/v1/schools/:school_id/overrides", post(handlers::create_school_override))
        .route("/api/v1/school-overrides/:id", delete(handlers::delete_school_override))
        // State overrides
        .route("/api/v1/states/:state/overrides", post(handlers::create_state_override))
        .route("/api/v1/state-overrides/:id", delete(handlers::delete_state_override))
        // State
        .with_state(state)
}
