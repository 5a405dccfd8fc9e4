use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::biomarkers::AnalysisResult;

/// An analysis saved against a patient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct StoredAnalysis {
    pub timestamp: jiff::Timestamp,
    pub data: AnalysisResult,
}
