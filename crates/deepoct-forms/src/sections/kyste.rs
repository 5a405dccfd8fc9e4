use deepoct_core::vocab::oedeme;

use crate::BiomarkerSection;
use crate::layout::{FieldDefinition, FieldSource};

/// Intraretinal cysts. Detail fields appear only while the status is
/// "Présent"; the status control keeps its historical `oedeme` key.
pub struct KysteSection;

impl BiomarkerSection for KysteSection {
    fn id(&self) -> &str {
        "kyste"
    }

    fn label(&self) -> &str {
        "Kyste intrarétinien"
    }

    fn fields(&self) -> &[FieldDefinition] {
        static FIELDS: std::sync::LazyLock<Vec<FieldDefinition>> = std::sync::LazyLock::new(|| {
            vec![
                FieldDefinition::choice(
                    "oedeme",
                    "Kyste intrarétinien",
                    &[oedeme::PRESENT, oedeme::ABSENT],
                    FieldSource::Model,
                ),
                FieldDefinition::text(
                    "nb-logette-input",
                    "Nb de logette",
                    "Entrer le nombre de logettes",
                )
                .shown_when("oedeme", oedeme::PRESENT),
                FieldDefinition::text("taille-logette-input", "Taille", "Entrer la taille")
                    .with_suggestions(&oedeme::SIZES)
                    .shown_when("oedeme", oedeme::PRESENT),
                FieldDefinition::text(
                    "localisation-input",
                    "Localisation",
                    "Entrer la localisation",
                )
                .with_suggestions(&oedeme::LOCATIONS)
                .shown_when("oedeme", oedeme::PRESENT),
            ]
        });
        &FIELDS
    }
}
