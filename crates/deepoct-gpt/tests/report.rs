use std::sync::{Arc, Mutex};

use deepoct_core::models::biomarkers::AnalysisResult;
use deepoct_core::models::patient::{IvtStatus, Patient};
use deepoct_gpt::client::{CompletionClient, CompletionRequest, MessageContent};
use deepoct_gpt::error::GptError;
use deepoct_gpt::prompts;
use deepoct_gpt::report::{Narrative, ReportGenerator, report_prompt_for};

struct CannedClient {
    reply: &'static str,
    prompts: Mutex<Vec<(String, u32)>>,
}

impl CompletionClient for CannedClient {
    fn complete(&self, request: &CompletionRequest) -> Result<String, GptError> {
        let user_text = match &request.messages[1].content {
            MessageContent::Text(text) => text.clone(),
            MessageContent::Parts(_) => String::new(),
        };
        self.prompts
            .lock()
            .unwrap()
            .push((user_text, request.max_tokens));
        Ok(self.reply.to_string())
    }
}

struct FailingClient;

impl CompletionClient for FailingClient {
    fn complete(&self, _request: &CompletionRequest) -> Result<String, GptError> {
        Err(GptError::ResponseParse("empty choices".to_string()))
    }
}

fn canned(reply: &'static str) -> Arc<CannedClient> {
    Arc::new(CannedClient {
        reply,
        prompts: Mutex::new(Vec::new()),
    })
}

fn patient(ivt: IvtStatus) -> Patient {
    Patient {
        nom: "Tazi".into(),
        prenom: "Mohammed".into(),
        ivt_recu: ivt,
        doctor: "Elamri_Ayoub".into(),
        ..Patient::default()
    }
}

#[test]
fn narrative_drops_blank_lines() {
    let narrative = Narrative::from_text("Au total:\n\n  OD : absence d'oedème.  \n\nOG : idem.\n");
    assert_eq!(narrative.paragraphs, vec!["Au total:", "OD : absence d'oedème.", "OG : idem."]);
}

#[test]
fn missing_client_returns_fixed_messages() {
    let generator = ReportGenerator::new(None, "gpt-4o");
    let analysis = AnalysisResult::default();

    assert_eq!(generator.synthesize_report(&analysis).text, prompts::NO_CLIENT_REPORT);
    assert_eq!(
        generator.therapeutic_plan(&analysis, "rapport", None).text,
        prompts::NO_CLIENT_PLAN
    );
}

#[test]
fn client_failure_returns_apology() {
    let generator = ReportGenerator::new(Some(Arc::new(FailingClient)), "gpt-4o");
    let analysis = AnalysisResult::default();

    assert_eq!(generator.synthesize_report(&analysis).paragraphs, vec![prompts::REPORT_FAILED]);
    assert_eq!(
        generator.therapeutic_plan(&analysis, "rapport", None).paragraphs,
        vec![prompts::PLAN_FAILED]
    );
}

#[test]
fn report_prompt_lists_right_eye_first() {
    let mut analysis = AnalysisResult::default();
    analysis.right_eye.briding = "Présent".into();
    analysis.right_eye.epaisseur_retinienne.central = "412".into();
    analysis.left_eye.epaisseur_retinienne.central = "250".into();

    let prompt = report_prompt_for(&analysis).unwrap();
    let od = prompt.find("Données pour l'OD").unwrap();
    let og = prompt.find("Données pour l'OG").unwrap();
    assert!(od < og);
    assert!(prompt[od..og].contains("\"epaisseur_retinienne\": \"412\""));
    assert!(prompt[od..og].contains("\"briding\": \"Présent\""));
    assert!(prompt[og..].contains("\"epaisseur_retinienne\": \"250\""));
    assert!(prompt.contains("\"taille_logette\""));
}

#[test]
fn report_uses_model_reply() {
    let client = canned("Au total, l'oct maculaire met en évidence:\nOD : absence d'oedème.");
    let generator = ReportGenerator::new(Some(client.clone()), "gpt-4o");

    let report = generator.synthesize_report(&AnalysisResult::default());
    assert_eq!(report.paragraphs.len(), 2);
    assert_eq!(client.prompts.lock().unwrap()[0].1, 500);
}

#[test]
fn plan_prompt_states_ivt_history() {
    let client = canned("Plan thérapeutique:\n- 3 IVT");
    let generator = ReportGenerator::new(Some(client.clone()), "gpt-4o");
    let analysis = AnalysisResult::default();

    generator.therapeutic_plan(&analysis, "Synthèse OD/OG", Some(&patient(IvtStatus::Oui)));
    generator.therapeutic_plan(&analysis, "Synthèse OD/OG", Some(&patient(IvtStatus::Non)));
    generator.therapeutic_plan(&analysis, "Synthèse OD/OG", None);

    let seen = client.prompts.lock().unwrap();
    assert!(seen[0].0.contains("Ce patient a déjà reçu des IVT."));
    assert!(seen[1].0.contains("Ce patient a jamais reçu des IVT."));
    assert!(!seen[2].0.contains("Information importante"));
    assert!(seen.iter().all(|(prompt, tokens)| prompt.contains("Synthèse OD/OG") && *tokens == 1000));
}
