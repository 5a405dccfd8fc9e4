//! Narrative report and therapeutic plan.
//!
//! Both are free text from the model, split into paragraphs. Failures never
//! surface as errors: the caller gets a fixed French message instead.

use std::sync::Arc;

use serde::Serialize;
use tracing::{info, warn};

use deepoct_core::models::biomarkers::{AnalysisResult, BiomarkerRecord};
use deepoct_core::models::patient::Patient;

use crate::client::{ChatMessage, CompletionClient, CompletionRequest};
use crate::error::GptError;
use crate::prompts;

const REPORT_MAX_TOKENS: u32 = 500;
const PLAN_MAX_TOKENS: u32 = 1000;
const NARRATIVE_TEMPERATURE: f64 = 0.2;

/// Generated text plus its non-empty lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Narrative {
    pub text: String,
    pub paragraphs: Vec<String>,
}

impl Narrative {
    pub fn from_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let paragraphs = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();
        Self { text, paragraphs }
    }
}

/// Flattened view of one eye used by the synthesis prompt.
#[derive(Debug, Clone, Serialize)]
pub struct ReportEyeData<'a> {
    pub dril: &'a str,
    pub oedeme: &'a str,
    pub nb_logette: &'a str,
    pub taille_logette: &'a str,
    pub localisation: &'a str,
    pub mle: &'a str,
    pub ze: &'a str,
    pub points: &'a str,
    pub briding: &'a str,
    pub decollement: &'a str,
    pub epaisseur_retinienne: &'a str,
}

impl<'a> From<&'a BiomarkerRecord> for ReportEyeData<'a> {
    fn from(record: &'a BiomarkerRecord) -> Self {
        Self {
            dril: &record.dril.status,
            oedeme: &record.oedeme.status,
            nb_logette: &record.oedeme.nb_logette,
            taille_logette: &record.oedeme.taille,
            localisation: &record.oedeme.localisation,
            mle: &record.mle,
            ze: &record.ze,
            points: &record.points_hyperreflectifs.status,
            briding: &record.briding,
            decollement: &record.decollement,
            epaisseur_retinienne: &record.epaisseur_retinienne.central,
        }
    }
}

#[derive(Clone)]
pub struct ReportGenerator {
    client: Option<Arc<dyn CompletionClient>>,
    model: String,
}

impl ReportGenerator {
    pub fn new(client: Option<Arc<dyn CompletionClient>>, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }

    /// Short synthesis of both eyes, right eye (OD) first.
    pub fn synthesize_report(&self, analysis: &AnalysisResult) -> Narrative {
        let Some(client) = &self.client else {
            info!("no completion client configured, report unavailable");
            return Narrative::from_text(prompts::NO_CLIENT_REPORT);
        };

        info!(model = %self.model, "generating synthesis report");
        let text = report_prompt_for(analysis).and_then(|prompt| {
            client.complete(&self.request(prompts::REPORT_SYSTEM_PROMPT, prompt, REPORT_MAX_TOKENS))
        });

        match text {
            Ok(text) => Narrative::from_text(text),
            Err(e) => {
                warn!(error = %e, "report generation failed");
                Narrative::from_text(prompts::REPORT_FAILED)
            }
        }
    }

    /// Treatment plan and prognosis built on an existing report.
    ///
    /// With a patient, the prompt states whether they already received IVT.
    pub fn therapeutic_plan(
        &self,
        analysis: &AnalysisResult,
        report_text: &str,
        patient: Option<&Patient>,
    ) -> Narrative {
        let Some(client) = &self.client else {
            info!("no completion client configured, therapeutic plan unavailable");
            return Narrative::from_text(prompts::NO_CLIENT_PLAN);
        };

        info!(model = %self.model, with_patient = patient.is_some(), "generating therapeutic plan");
        let text = plan_prompt_for(analysis, report_text, patient).and_then(|prompt| {
            client.complete(&self.request(prompts::PLAN_SYSTEM_PROMPT, prompt, PLAN_MAX_TOKENS))
        });

        match text {
            Ok(text) => Narrative::from_text(text),
            Err(e) => {
                warn!(error = %e, "therapeutic plan generation failed");
                Narrative::from_text(prompts::PLAN_FAILED)
            }
        }
    }

    fn request(&self, system: &str, prompt: String, max_tokens: u32) -> CompletionRequest {
        CompletionRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage::system(system), ChatMessage::user(prompt)],
            max_tokens,
            temperature: NARRATIVE_TEMPERATURE,
        }
    }
}

pub fn report_prompt_for(analysis: &AnalysisResult) -> Result<String, GptError> {
    let right = serde_json::to_string_pretty(&ReportEyeData::from(&analysis.right_eye))?;
    let left = serde_json::to_string_pretty(&ReportEyeData::from(&analysis.left_eye))?;
    Ok(prompts::report_prompt(&right, &left))
}

pub fn plan_prompt_for(
    analysis: &AnalysisResult,
    report_text: &str,
    patient: Option<&Patient>,
) -> Result<String, GptError> {
    let ivt_info = patient
        .map(|p| prompts::ivt_line(p.has_received_ivt()))
        .unwrap_or_default();
    let right = serde_json::to_string_pretty(&analysis.right_eye)?;
    let left = serde_json::to_string_pretty(&analysis.left_eye)?;
    Ok(prompts::plan_prompt(report_text, &ivt_info, &right, &left))
}
