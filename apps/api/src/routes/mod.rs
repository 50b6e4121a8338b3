pub mod health;
pub mod profile;

use axum::{
    routing::{get, post},
    Router,
};

use crate::auth;
use crate::domain_switch;
use crate::quiz;
use crate::resume;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::welcome_handler))
        .route("/health", get(health::health_handler))
        // Accounts & sessions
        .route("/register", post(auth::handle_register))
        .route("/login", post(auth::handle_login))
        .route("/logout", post(auth::handle_logout))
        .route("/profile", get(profile::handle_get_profile))
        // Pipelines
        .route("/resume/", post(resume::handlers::handle_upload_resume))
        .route("/domain_switch", post(domain_switch::handle_domain_switch))
        .route("/mock_interview", post(quiz::handle_mock_interview))
        .with_state(state)
}
