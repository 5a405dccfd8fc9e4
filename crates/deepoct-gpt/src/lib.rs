//! deepoct-gpt
//!
//! Vision-model assistance for OCT analysis: the completion client seam,
//! image payload handling, the analysis request, normalization of the model's
//! reply into an [`AnalysisResult`](deepoct_core::models::biomarkers::AnalysisResult),
//! and the narrative report and therapeutic plan.

pub mod analyze;
pub mod client;
pub mod error;
pub mod image;
pub mod normalize;
pub mod openai;
pub mod prompts;
pub mod report;
