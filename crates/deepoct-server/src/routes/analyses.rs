use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::{Extension, Json};

use deepoct_core::models::analysis::StoredAnalysis;
use deepoct_forms::binder::{FormValues, reconstruct};

use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::routes::patients::owned_patient;
use crate::state::AppState;

pub async fn list_analyses(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
) -> Result<Json<Vec<StoredAnalysis>>, ApiError> {
    owned_patient(&state, &user, &id)?;
    Ok(Json(state.analyses.list_analyses(&id)?))
}

/// Save the form as the clinician left it.
pub async fn save_analysis(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
    Json(form): Json<FormValues>,
) -> Result<(StatusCode, Json<StoredAnalysis>), ApiError> {
    owned_patient(&state, &user, &id)?;
    let stored = state.analyses.save_analysis(&id, reconstruct(&form))?;
    Ok((StatusCode::CREATED, Json(stored)))
}

pub async fn latest_analysis(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
) -> Result<Json<StoredAnalysis>, ApiError> {
    owned_patient(&state, &user, &id)?;
    state
        .analyses
        .latest_analysis(&id)?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("aucune analyse pour le patient : {id}")))
}
