use deepoct_core::vocab::dril;

use crate::BiomarkerSection;
use crate::layout::{FieldDefinition, FieldSource};

/// DRIL: disorganization of retinal inner layers.
pub struct DrilSection;

impl BiomarkerSection for DrilSection {
    fn id(&self) -> &str {
        "dril"
    }

    fn label(&self) -> &str {
        "DRIL"
    }

    fn fields(&self) -> &[FieldDefinition] {
        static FIELDS: std::sync::LazyLock<Vec<FieldDefinition>> = std::sync::LazyLock::new(|| {
            vec![FieldDefinition::choice(
                "dril",
                "DRIL",
                &[dril::PRESENT, dril::ABSENT],
                FieldSource::Model,
            )]
        });
        &FIELDS
    }
}
