use deepoct_core::vocab::clinician;

use crate::BiomarkerSection;
use crate::layout::{FieldDefinition, FieldSource};

/// Serous retinal detachment, assessed by the clinician only.
pub struct DecollementSection;

impl BiomarkerSection for DecollementSection {
    fn id(&self) -> &str {
        "decollement"
    }

    fn label(&self) -> &str {
        "Décollement Séreux Rétinien"
    }

    fn fields(&self) -> &[FieldDefinition] {
        static FIELDS: std::sync::LazyLock<Vec<FieldDefinition>> = std::sync::LazyLock::new(|| {
            vec![FieldDefinition::choice(
                "decollement",
                "Décollement Séreux Rétinien",
                &[clinician::PRESENT, clinician::ABSENT],
                FieldSource::Clinician,
            )]
        });
        &FIELDS
    }
}
