use deepoct_core::vocab::points;

use crate::BiomarkerSection;
use crate::layout::{FieldDefinition, FieldSource};

pub struct PointsSection;

impl BiomarkerSection for PointsSection {
    fn id(&self) -> &str {
        "points"
    }

    fn label(&self) -> &str {
        "Points Hyperréflectifs"
    }

    fn fields(&self) -> &[FieldDefinition] {
        static FIELDS: std::sync::LazyLock<Vec<FieldDefinition>> = std::sync::LazyLock::new(|| {
            vec![FieldDefinition::choice(
                "points",
                "Points Hyperréflectifs",
                &[points::PRESENT, points::ABSENT],
                FieldSource::Model,
            )]
        });
        &FIELDS
    }
}
