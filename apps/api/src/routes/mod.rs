pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post, put},
    Router,
};

use crate::development::handlers as development;
use crate::recruiting::handlers as recruiting;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = DefaultBodyLimit::max(state.config.max_upload_bytes);

    Router::new()
        .route("/health", get(health::health_handler))
        // Recruiting
        .route(
            "/api/v1/recruiting/sessions",
            post(recruiting::handle_create_session),
        )
        .route(
            "/api/v1/recruiting/sessions/:id",
            get(recruiting::handle_get_session),
        )
        .route(
            "/api/v1/recruiting/sessions/:id/reset",
            post(recruiting::handle_reset_session),
        )
        .route(
            "/api/v1/recruiting/sessions/:id/job",
            put(recruiting::handle_replace_job),
        )
        .route(
            "/api/v1/recruiting/sessions/:id/job/items",
            post(recruiting::handle_edit_job_item),
        )
        .route(
            "/api/v1/recruiting/sessions/:id/job/save",
            post(recruiting::handle_save_job),
        )
        .route(
            "/api/v1/recruiting/sessions/:id/candidates",
            post(recruiting::handle_add_candidate),
        )
        .route(
            "/api/v1/recruiting/sessions/:id/candidates/upload",
            post(recruiting::handle_upload_candidate),
        )
        .route(
            "/api/v1/recruiting/sessions/:id/candidates/demo",
            post(recruiting::handle_generate_demo_candidates),
        )
        .route(
            "/api/v1/recruiting/sessions/:id/candidates/:candidate_id/select",
            post(recruiting::handle_toggle_selection),
        )
        .route(
            "/api/v1/recruiting/sessions/:id/results",
            get(recruiting::handle_get_results),
        )
        // Career development
        .route(
            "/api/v1/development/sessions",
            post(development::handle_create_session),
        )
        .route(
            "/api/v1/development/sessions/:id",
            get(development::handle_get_session),
        )
        .route(
            "/api/v1/development/sessions/:id/analyze",
            post(development::handle_analyze),
        )
        .route(
            "/api/v1/development/sessions/:id/upload",
            post(development::handle_upload),
        )
        .route(
            "/api/v1/development/sessions/:id/demo",
            post(development::handle_demo),
        )
        .route(
            "/api/v1/development/sessions/:id/reset",
            post(development::handle_reset),
        )
        .layer(body_limit)
        .with_state(state)
}
