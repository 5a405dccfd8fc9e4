use std::collections::BTreeMap;

use axum::Json;
use axum::extract::Path;
use serde::Serialize;

use deepoct_core::models::biomarkers::Eye;
use deepoct_forms::binder::{FormValues, validate};
use deepoct_forms::error::FormError;
use deepoct_forms::layout::{FieldDefinition, FormWarning, eye_heading};
use deepoct_forms::{BiomarkerSection, all_sections, get_section};

use crate::error::ApiError;

#[derive(Serialize)]
pub struct EyeColumn {
    eye: Eye,
    heading: &'static str,
}

#[derive(Serialize)]
pub struct SectionDetail {
    id: String,
    label: String,
    fields: Vec<FieldDefinition>,
}

#[derive(Serialize)]
pub struct FormLayout {
    eyes: Vec<EyeColumn>,
    sections: Vec<SectionDetail>,
}

fn detail(section: &dyn BiomarkerSection) -> SectionDetail {
    SectionDetail {
        id: section.id().to_string(),
        label: section.label().to_string(),
        fields: section.fields().to_vec(),
    }
}

/// Both eye columns with every section, in display order.
pub async fn biomarker_layout() -> Json<FormLayout> {
    Json(FormLayout {
        eyes: Eye::BOTH
            .into_iter()
            .map(|eye| EyeColumn {
                eye,
                heading: eye_heading(eye),
            })
            .collect(),
        sections: all_sections().iter().map(|s| detail(s.as_ref())).collect(),
    })
}

pub async fn get_section_detail(Path(id): Path<String>) -> Result<Json<SectionDetail>, ApiError> {
    let section = get_section(&id).ok_or(FormError::UnknownSection(id))?;
    Ok(Json(detail(section.as_ref())))
}

/// Check slot values (`{"mle-left": "…"}`) against the section options.
pub async fn validate_slots(
    Json(slots): Json<BTreeMap<String, String>>,
) -> Result<Json<Vec<FormWarning>>, ApiError> {
    let form = FormValues::from_slots(slots)?;
    Ok(Json(validate(&form)))
}
