//! deepoct-forms
//!
//! Biomarker form layouts and the binder between analysis records and the
//! per-eye form slots. Pure data, no network access.

pub mod binder;
pub mod error;
pub mod layout;
pub mod sections;

use deepoct_core::models::biomarkers::Eye;

use binder::EyeFormValues;
use layout::{FieldDefinition, FormWarning};

/// A titled group of form fields, rendered once per eye.
pub trait BiomarkerSection: Send + Sync {
    /// Unique identifier for this section (e.g., "kyste").
    fn id(&self) -> &str;

    /// Heading shown above the section (e.g., "Kyste intrarétinien").
    fn label(&self) -> &str;

    fn fields(&self) -> &[FieldDefinition];

    /// Warn about values outside each field's options.
    ///
    /// Empty values and fields hidden by their condition are skipped. Warnings
    /// never block: out-of-vocabulary values are legal.
    fn validate_values(&self, eye: Eye, values: &EyeFormValues) -> Vec<FormWarning> {
        let mut warnings = Vec::new();
        for field in self.fields() {
            if field.options.is_empty() || !field.is_shown(values) {
                continue;
            }
            let Some(value) = values.get(&field.key) else {
                continue;
            };
            if !value.is_empty() && !field.options.iter().any(|o| o == value) {
                warnings.push(FormWarning {
                    slot_id: field.slot_id(eye),
                    value: value.to_string(),
                    message: format!(
                        "{}: « {} » ne fait pas partie des valeurs attendues ({})",
                        field.label,
                        value,
                        field.options.join(", "),
                    ),
                });
            }
        }
        warnings
    }
}

/// All sections, in display order.
pub fn all_sections() -> Vec<Box<dyn BiomarkerSection>> {
    vec![
        Box::new(sections::dril::DrilSection),
        Box::new(sections::kyste::KysteSection),
        Box::new(sections::ponts::PontsSection),
        Box::new(sections::membranes::MembranesSection),
        Box::new(sections::points::PointsSection),
        Box::new(sections::decollement::DecollementSection),
        Box::new(sections::epaisseur::EpaisseurSection),
    ]
}

/// Look up a section by ID.
pub fn get_section(id: &str) -> Option<Box<dyn BiomarkerSection>> {
    all_sections().into_iter().find(|s| s.id() == id)
}
