use deepoct_core::vocab::clinician;

use crate::BiomarkerSection;
use crate::layout::{FieldDefinition, FieldSource};

/// Retinal bridging, assessed by the clinician only.
pub struct PontsSection;

impl BiomarkerSection for PontsSection {
    fn id(&self) -> &str {
        "ponts"
    }

    fn label(&self) -> &str {
        "Ponts Rétiniens"
    }

    fn fields(&self) -> &[FieldDefinition] {
        static FIELDS: std::sync::LazyLock<Vec<FieldDefinition>> = std::sync::LazyLock::new(|| {
            vec![FieldDefinition::choice(
                "briding",
                "Ponts Rétiniens",
                &[clinician::PRESENT, clinician::ABSENT],
                FieldSource::Clinician,
            )]
        });
        &FIELDS
    }
}
