pub mod health;

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::applications::handlers as applications;
use crate::scoring::handlers as scoring;
use crate::state::AppState;
use crate::verification::handlers as verification;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Application lifecycle
        .route(
            "/api/v1/applications",
            post(applications::handle_create_application)
                .get(applications::handle_list_applications),
        )
        .route(
            "/api/v1/applications/:id",
            get(applications::handle_get_application),
        )
        .route(
            "/api/v1/applications/:id/status",
            patch(applications::handle_update_status),
        )
        // Verification
        .route(
            "/api/v1/applications/:id/verify",
            post(verification::handle_verify_claims),
        )
        .route(
            "/api/v1/applications/:id/background",
            post(verification::handle_background_check),
        )
        // Scoring
        .route(
            "/api/v1/applications/:id/score",
            post(scoring::handle_score_application),
        )
        .with_state(state)
}
