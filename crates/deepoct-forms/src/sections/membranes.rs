use deepoct_core::vocab::membrane;

use crate::BiomarkerSection;
use crate::layout::{FieldDefinition, FieldSource};

/// External limiting membrane and ellipsoid zone integrity.
pub struct MembranesSection;

impl BiomarkerSection for MembranesSection {
    fn id(&self) -> &str {
        "membranes"
    }

    fn label(&self) -> &str {
        "Intégrité de la MLE/ZE"
    }

    fn fields(&self) -> &[FieldDefinition] {
        static FIELDS: std::sync::LazyLock<Vec<FieldDefinition>> = std::sync::LazyLock::new(|| {
            vec![
                FieldDefinition::choice("mle", "MLE", &membrane::ALL, FieldSource::Model),
                FieldDefinition::choice("ze", "ZE", &membrane::ALL, FieldSource::Model),
            ]
        });
        &FIELDS
    }
}
