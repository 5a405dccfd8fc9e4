use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

use deepoct_core::models::biomarkers::Eye;

use crate::binder::EyeFormValues;

/// How a field is entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum FieldKind {
    /// Radio group or select over `options`.
    Choice,
    /// Free text. `options`, when present, are suggestions.
    Text,
}

/// Who fills a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum FieldSource {
    /// Pre-filled from the model's analysis, editable by the clinician.
    Model,
    /// Never proposed by the model.
    Clinician,
}

/// Show a field only while another field of the same eye holds a value.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ShownWhen {
    pub field: String,
    pub equals: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FieldDefinition {
    /// Slot key; the control id is `{key}-{left|right}`.
    pub key: String,
    pub label: String,
    pub kind: FieldKind,
    pub options: Vec<String>,
    pub source: FieldSource,
    pub placeholder: Option<String>,
    pub shown_when: Option<ShownWhen>,
}

impl FieldDefinition {
    pub fn choice(key: &str, label: &str, options: &[&str], source: FieldSource) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            kind: FieldKind::Choice,
            options: options.iter().map(|o| o.to_string()).collect(),
            source,
            placeholder: None,
            shown_when: None,
        }
    }

    pub fn text(key: &str, label: &str, placeholder: &str) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            kind: FieldKind::Text,
            options: Vec::new(),
            source: FieldSource::Model,
            placeholder: Some(placeholder.to_string()),
            shown_when: None,
        }
    }

    pub fn with_suggestions(mut self, suggestions: &[&str]) -> Self {
        self.options = suggestions.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn shown_when(mut self, field: &str, equals: &str) -> Self {
        self.shown_when = Some(ShownWhen {
            field: field.to_string(),
            equals: equals.to_string(),
        });
        self
    }

    pub fn slot_id(&self, eye: Eye) -> String {
        format!("{}-{}", self.key, eye.side())
    }

    /// Whether the field is visible for the given eye values.
    pub fn is_shown(&self, values: &EyeFormValues) -> bool {
        match &self.shown_when {
            Some(condition) => values.get(&condition.field) == Some(condition.equals.as_str()),
            None => true,
        }
    }
}

/// Heading of an eye column.
pub fn eye_heading(eye: Eye) -> &'static str {
    match eye {
        Eye::Right => "Œil Droit",
        Eye::Left => "Œil Gauche",
    }
}

/// A value outside a field's expected options.
#[derive(Debug, Clone, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct FormWarning {
    pub slot_id: String,
    pub value: String,
    pub message: String,
}
