use axum::extract::State;
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};

use deepoct_auth::flows::authenticate;
use deepoct_core::models::user::UserSummary;

use crate::error::{ApiError, LOGIN_PATH};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

pub const MISSING_CREDENTIALS: &str = "Veuillez saisir un identifiant et un mot de passe.";
pub const BAD_CREDENTIALS: &str = "Identifiant ou mot de passe incorrect.";
pub const LOGIN_SUCCEEDED: &str = "Connexion réussie !";
pub const DASHBOARD_PATH: &str = "/dashboard";

#[derive(Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    identifiant: String,
    #[serde(default)]
    password: String,
}

#[derive(Serialize)]
pub struct LoginResponse {
    token: String,
    user: UserSummary,
    message: &'static str,
    redirect: &'static str,
}

#[derive(Serialize)]
pub struct LogoutResponse {
    redirect: &'static str,
}

pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let identifiant = req.identifiant.trim().to_string();
    if identifiant.is_empty() || req.password.is_empty() {
        return Err(ApiError::BadRequest(MISSING_CREDENTIALS.to_string()));
    }

    // Password hashing blocks; run it on the blocking pool.
    let users = state.users.clone();
    let user = tokio::task::spawn_blocking(move || {
        authenticate(users.as_ref(), &identifiant, &req.password)
    })
    .await??
    .ok_or_else(|| ApiError::Unauthorized(BAD_CREDENTIALS.to_string()))?;

    let summary = user.summary();
    let token = state.sessions.issue(&summary)?;

    Ok(Json(LoginResponse {
        token,
        user: summary,
        message: LOGIN_SUCCEEDED,
        redirect: DASHBOARD_PATH,
    }))
}

/// Sessions are stateless tokens; the client drops its token and goes home.
pub async fn logout(Extension(user): Extension<AuthUser>) -> Json<LogoutResponse> {
    tracing::info!(identifiant = %user.identifiant, "logout");
    Json(LogoutResponse {
        redirect: LOGIN_PATH,
    })
}

pub async fn me(Extension(user): Extension<AuthUser>) -> Json<UserSummary> {
    Json(user.summary())
}
