use crate::BiomarkerSection;
use crate::layout::FieldDefinition;

/// ETDRS thickness map as one text line, e.g. `Central: 310μm, Nasal: 290μm`.
pub struct EpaisseurSection;

impl BiomarkerSection for EpaisseurSection {
    fn id(&self) -> &str {
        "epaisseur"
    }

    fn label(&self) -> &str {
        "Épaisseur Rétinienne (EDTRS)"
    }

    fn fields(&self) -> &[FieldDefinition] {
        static FIELDS: std::sync::LazyLock<Vec<FieldDefinition>> = std::sync::LazyLock::new(|| {
            vec![FieldDefinition::text(
                "edtrs-input",
                "Épaisseur Rétinienne (EDTRS)",
                "Entrer la valeur EDTRS",
            )]
        });
        &FIELDS
    }
}
