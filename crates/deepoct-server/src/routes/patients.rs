use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::{Extension, Json};
use serde::Serialize;

use deepoct_core::models::patient::{Patient, PatientForm};

use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

#[derive(Serialize)]
pub struct PatientCreated {
    id: String,
    patient: Patient,
    message: String,
}

pub async fn list_patients(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<Vec<Patient>>, ApiError> {
    Ok(Json(state.patients.list_patients_for_doctor(&user.identifiant)?))
}

pub async fn create_patient(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(form): Json<PatientForm>,
) -> Result<(StatusCode, Json<PatientCreated>), ApiError> {
    let patient = form.into_patient(&user.identifiant)?;
    state.patients.add_patient(patient.clone())?;

    Ok((
        StatusCode::CREATED,
        Json(PatientCreated {
            id: patient.id(),
            message: format!("Patient {} {} ajouté avec succès !", patient.nom, patient.prenom),
            patient,
        }),
    ))
}

pub async fn get_patient(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
) -> Result<Json<Patient>, ApiError> {
    Ok(Json(owned_patient(&state, &user, &id)?))
}

pub async fn update_patient(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
    Json(form): Json<PatientForm>,
) -> Result<Json<Patient>, ApiError> {
    owned_patient(&state, &user, &id)?;
    let patient = form.into_patient(&user.identifiant)?;
    state.patients.update_patient(&id, patient.clone())?;
    Ok(Json(patient))
}

/// Fetch a patient the current doctor owns. Other doctors' patients are
/// reported as missing.
pub(crate) fn owned_patient(
    state: &AppState,
    user: &AuthUser,
    id: &str,
) -> Result<Patient, ApiError> {
    state
        .patients
        .get_patient(id)?
        .filter(|p| p.doctor == user.identifiant)
        .ok_or_else(|| ApiError::NotFound(format!("patient introuvable : {id}")))
}
