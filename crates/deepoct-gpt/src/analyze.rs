use std::sync::Arc;

use tracing::{debug, info, warn};

use deepoct_core::models::biomarkers::AnalysisResult;

use crate::client::{ChatMessage, CompletionClient, CompletionRequest, ContentPart};
use crate::image::encode_image_contents;
use crate::normalize::normalize_response;
use crate::prompts::{ANALYSIS_PROMPT, ANALYSIS_SYSTEM_PROMPT};

pub const DEFAULT_MODEL: &str = "gpt-4o";
const ANALYSIS_MAX_TOKENS: u32 = 1500;
const ANALYSIS_TEMPERATURE: f64 = 0.1;

/// What the requestor got back for one image.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisReply {
    /// Raw reply text, still to be normalized.
    Completion(String),
    /// No client, or the call failed.
    Fallback(AnalysisResult),
}

impl AnalysisReply {
    pub fn into_result(self) -> AnalysisResult {
        match self {
            AnalysisReply::Completion(text) => normalize_response(&text),
            AnalysisReply::Fallback(result) => result,
        }
    }
}

/// Sends OCT images to the vision model.
#[derive(Clone)]
pub struct AnalysisRequestor {
    client: Option<Arc<dyn CompletionClient>>,
    model: String,
}

impl AnalysisRequestor {
    pub fn new(client: Option<Arc<dyn CompletionClient>>, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }

    pub fn has_client(&self) -> bool {
        self.client.is_some()
    }

    /// The chat request for one base64 image payload.
    pub fn build_request(&self, image_base64: &str) -> CompletionRequest {
        CompletionRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage::system(ANALYSIS_SYSTEM_PROMPT),
                ChatMessage::user_parts(vec![
                    ContentPart::text(ANALYSIS_PROMPT),
                    ContentPart::jpeg_base64(image_base64),
                ]),
            ],
            max_tokens: ANALYSIS_MAX_TOKENS,
            temperature: ANALYSIS_TEMPERATURE,
        }
    }

    /// Ask the model about one image. Falls back to the default analysis when
    /// there is no client or the call fails.
    pub fn request(&self, image_base64: &str) -> AnalysisReply {
        let Some(client) = &self.client else {
            info!("no completion client configured, using default analysis");
            return AnalysisReply::Fallback(AnalysisResult::default());
        };

        info!(model = %self.model, payload_len = image_base64.len(), "requesting OCT analysis");
        match client.complete(&self.build_request(image_base64)) {
            Ok(text) => {
                debug!(reply = %text, "raw analysis reply");
                AnalysisReply::Completion(text)
            }
            Err(e) => {
                warn!(error = %e, "analysis request failed, using default analysis");
                AnalysisReply::Fallback(AnalysisResult::default())
            }
        }
    }

    /// Encode, request and normalize in one step.
    pub fn analyze(&self, data_url: &str) -> AnalysisResult {
        self.request(encode_image_contents(data_url)).into_result()
    }
}
