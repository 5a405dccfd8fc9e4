//! Vision-model analysis, report and therapeutic plan.
//!
//! Completion calls block, so each one runs under `spawn_blocking`.

use axum::extract::State;
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};

use deepoct_core::models::biomarkers::AnalysisResult;
use deepoct_forms::binder::{
    ClinicianInputs, FormValues, apply_clinician, bind, reconstruct, slots, validate,
};
use deepoct_forms::layout::FormWarning;
use deepoct_gpt::report::Narrative;

use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::routes::patients::owned_patient;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct AnalyzeRequest {
    /// Uploaded image as a data URL.
    image: String,
    /// Current bridging and detachment selections, kept as-is.
    #[serde(default)]
    clinician: ClinicianInputs,
}

#[derive(Serialize)]
pub struct FormSlot {
    id: String,
    value: String,
}

#[derive(Serialize)]
pub struct AnalyzeResponse {
    analysis: AnalysisResult,
    form: FormValues,
    slots: Vec<FormSlot>,
    warnings: Vec<FormWarning>,
}

#[derive(Deserialize)]
pub struct ReportRequest {
    #[serde(default)]
    form: FormValues,
}

#[derive(Deserialize)]
pub struct PlanRequest {
    #[serde(default)]
    form: FormValues,
    /// Paragraphs of the report shown to the clinician.
    #[serde(default)]
    report: Vec<String>,
    #[serde(default)]
    patient_id: Option<String>,
}

pub async fn analyze(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    if req.image.trim().is_empty() {
        return Err(ApiError::BadRequest("aucune image fournie".to_string()));
    }

    let requestor = state.requestor.clone();
    let image = req.image;
    let mut analysis = tokio::task::spawn_blocking(move || requestor.analyze(&image)).await?;
    apply_clinician(&mut analysis, &req.clinician);

    let form = bind(&analysis, &req.clinician);
    let warnings = validate(&form);
    let slots = slots(&form)
        .into_iter()
        .map(|(id, value)| FormSlot { id, value })
        .collect();

    Ok(Json(AnalyzeResponse {
        analysis,
        form,
        slots,
        warnings,
    }))
}

pub async fn report(
    State(state): State<AppState>,
    Json(req): Json<ReportRequest>,
) -> Result<Json<Narrative>, ApiError> {
    let analysis = reconstruct(&req.form);
    let reports = state.reports.clone();
    let narrative =
        tokio::task::spawn_blocking(move || reports.synthesize_report(&analysis)).await?;
    Ok(Json(narrative))
}

pub async fn plan(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(req): Json<PlanRequest>,
) -> Result<Json<Narrative>, ApiError> {
    let patient = match req.patient_id.as_deref().filter(|id| !id.is_empty()) {
        Some(id) => Some(owned_patient(&state, &user, id)?),
        None => None,
    };

    let analysis = reconstruct(&req.form);
    let report_text = req.report.join("\n");
    let reports = state.reports.clone();
    let narrative = tokio::task::spawn_blocking(move || {
        reports.therapeutic_plan(&analysis, &report_text, patient.as_ref())
    })
    .await?;
    Ok(Json(narrative))
}
