use std::sync::Arc;

use tracing::{info, warn};

use deepoct_auth::flows::seed_users;
use deepoct_auth::jwt::SessionKeys;
use deepoct_gpt::analyze::AnalysisRequestor;
use deepoct_gpt::client::CompletionClient;
use deepoct_gpt::openai::{OpenAiClient, OpenAiConfig};
use deepoct_gpt::report::ReportGenerator;
use deepoct_store::memory::InMemoryStore;
use deepoct_store::repository::{AnalysisRepository, PatientRepository, UserRepository};
use deepoct_store::seed::default_patients;

use crate::config::ServerConfig;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub patients: Arc<dyn PatientRepository>,
    pub analyses: Arc<dyn AnalysisRepository>,
    pub sessions: SessionKeys,
    pub requestor: AnalysisRequestor,
    pub reports: ReportGenerator,
}

impl AppState {
    /// State backed by one in-memory store for all repositories.
    pub fn in_memory(
        store: Arc<InMemoryStore>,
        sessions: SessionKeys,
        client: Option<Arc<dyn CompletionClient>>,
        model: &str,
    ) -> Self {
        Self {
            users: store.clone(),
            patients: store.clone(),
            analyses: store,
            sessions,
            requestor: AnalysisRequestor::new(client.clone(), model),
            reports: ReportGenerator::new(client, model),
        }
    }

    /// Seed the store and build the completion client from `config`.
    pub fn from_config(config: &ServerConfig) -> eyre::Result<Self> {
        let users = seed_users(
            &config.seed_doctor_password,
            &config.seed_admin_password,
            config.password_iterations,
        );
        let store = Arc::new(InMemoryStore::new(users, default_patients()));

        let client: Option<Arc<dyn CompletionClient>> = match &config.openai_api_key {
            Some(key) => {
                let client = OpenAiClient::new(OpenAiConfig {
                    api_key: key.clone(),
                    base_url: config.openai_base_url.clone(),
                    timeout: config.openai_timeout,
                })?;
                info!(model = %config.model, "vision model enabled");
                Some(Arc::new(client))
            }
            None => {
                warn!("OPENAI_API_KEY not set, analyses will use default values");
                None
            }
        };

        let sessions = SessionKeys::new(config.secret_key.as_bytes(), config.session_ttl_secs);
        Ok(Self::in_memory(store, sessions, client, &config.model))
    }
}
