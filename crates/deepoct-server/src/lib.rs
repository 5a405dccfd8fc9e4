//! deepoct-server
//!
//! HTTP API for the OCT dashboard: sessions, patients, stored analyses,
//! biomarker form layouts and vision-model assistance.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};

use state::AppState;

/// The full application router. Everything outside the public block sits
/// behind the session guard.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let protected = Router::new()
        .route("/auth/logout", post(routes::auth::logout))
        .route("/auth/me", get(routes::auth::me))
        .route(
            "/patients",
            get(routes::patients::list_patients).post(routes::patients::create_patient),
        )
        .route(
            "/patients/{id}",
            get(routes::patients::get_patient).put(routes::patients::update_patient),
        )
        .route(
            "/patients/{id}/analyses",
            get(routes::analyses::list_analyses).post(routes::analyses::save_analysis),
        )
        .route(
            "/patients/{id}/analyses/latest",
            get(routes::analyses::latest_analysis),
        )
        .route("/analysis", post(routes::analysis::analyze))
        .route("/analysis/report", post(routes::analysis::report))
        .route("/analysis/plan", post(routes::analysis::plan))
        .route_layer(axum_mw::from_fn_with_state(
            state.clone(),
            middleware::auth::require_auth,
        ));

    Router::new()
        // Public
        .route("/health", get(routes::health::health_check))
        .route("/auth/login", post(routes::auth::login))
        .route("/forms/biomarkers", get(routes::forms::biomarker_layout))
        .route(
            "/forms/biomarkers/{id}",
            get(routes::forms::get_section_detail),
        )
        .route("/forms/validate", post(routes::forms::validate_slots))
        .merge(protected)
        .layer(axum_mw::from_fn(middleware::audit::audit_log))
        .layer(cors)
        .with_state(state)
}
