use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::vocab;

/// Which eye a record describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Eye {
    Left,
    Right,
}

impl Eye {
    pub const BOTH: [Eye; 2] = [Eye::Left, Eye::Right];

    /// Key used for this eye in analysis JSON (`left_eye` / `right_eye`).
    pub fn key(self) -> &'static str {
        match self {
            Eye::Left => vocab::LEFT_EYE,
            Eye::Right => vocab::RIGHT_EYE,
        }
    }

    /// Suffix used by form control ids (`dril-left`).
    pub fn side(self) -> &'static str {
        match self {
            Eye::Left => "left",
            Eye::Right => "right",
        }
    }
}

/// Findings for both eyes of one OCT analysis.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnalysisResult {
    pub left_eye: BiomarkerRecord,
    pub right_eye: BiomarkerRecord,
}

impl AnalysisResult {
    pub fn eye(&self, eye: Eye) -> &BiomarkerRecord {
        match eye {
            Eye::Left => &self.left_eye,
            Eye::Right => &self.right_eye,
        }
    }

    pub fn eye_mut(&mut self, eye: Eye) -> &mut BiomarkerRecord {
        match eye {
            Eye::Left => &mut self.left_eye,
            Eye::Right => &mut self.right_eye,
        }
    }
}

/// Biomarker findings for a single eye.
///
/// Every value is a plain string. Values outside the canonical vocabulary
/// (see [`crate::vocab`]) are legal and must be tolerated by consumers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BiomarkerRecord {
    pub dril: Dril,
    pub oedeme: Oedeme,
    pub mle: String,
    pub ze: String,
    pub points_hyperreflectifs: HyperreflectivePoints,
    pub epaisseur_retinienne: RetinalThickness,
    pub briding: String,
    pub decollement: String,
}

impl Default for BiomarkerRecord {
    fn default() -> Self {
        Self {
            dril: Dril::default(),
            oedeme: Oedeme::default(),
            mle: vocab::membrane::CONTINUOUS.to_string(),
            ze: vocab::membrane::CONTINUOUS.to_string(),
            points_hyperreflectifs: HyperreflectivePoints::default(),
            epaisseur_retinienne: RetinalThickness::default(),
            briding: vocab::clinician::ABSENT.to_string(),
            decollement: vocab::clinician::ABSENT.to_string(),
        }
    }
}

/// Disorganization of retinal inner layers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Dril {
    pub status: String,
    pub extent: String,
}

impl Default for Dril {
    fn default() -> Self {
        Self {
            status: vocab::dril::ABSENT.to_string(),
            extent: String::new(),
        }
    }
}

/// Intraretinal cyst findings. The `oedeme` key name is kept for the wire format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Oedeme {
    pub status: String,
    pub nb_logette: String,
    pub taille: String,
    pub localisation: String,
}

impl Default for Oedeme {
    fn default() -> Self {
        Self {
            status: vocab::oedeme::ABSENT.to_string(),
            nb_logette: String::new(),
            taille: String::new(),
            localisation: String::new(),
        }
    }
}

impl Oedeme {
    pub fn is_present(&self) -> bool {
        self.status == vocab::oedeme::PRESENT
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct HyperreflectivePoints {
    pub status: String,
    pub nombre: String,
    pub localisation: String,
}

impl Default for HyperreflectivePoints {
    fn default() -> Self {
        Self {
            status: vocab::points::ABSENT.to_string(),
            nombre: String::new(),
            localisation: String::new(),
        }
    }
}

/// ETDRS sector thickness values in micrometers, kept as entered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RetinalThickness {
    pub central: String,
    pub superieur: String,
    pub inferieur: String,
    pub nasal: String,
    pub temporal: String,
}

impl RetinalThickness {
    /// A thickness map with only the central sector filled.
    pub fn central_only(value: impl Into<String>) -> Self {
        Self {
            central: value.into(),
            ..Self::default()
        }
    }

    /// Look up a sector by its key in [`vocab::THICKNESS_SECTORS`].
    pub fn sector(&self, key: &str) -> Option<&str> {
        match key {
            "central" => Some(&self.central),
            "superieur" => Some(&self.superieur),
            "inferieur" => Some(&self.inferieur),
            "nasal" => Some(&self.nasal),
            "temporal" => Some(&self.temporal),
            _ => None,
        }
    }

    pub fn sector_mut(&mut self, key: &str) -> Option<&mut String> {
        match key {
            "central" => Some(&mut self.central),
            "superieur" => Some(&mut self.superieur),
            "inferieur" => Some(&mut self.inferieur),
            "nasal" => Some(&mut self.nasal),
            "temporal" => Some(&mut self.temporal),
            _ => None,
        }
    }
}
