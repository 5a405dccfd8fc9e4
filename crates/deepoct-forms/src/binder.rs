//! Mapping between an [`AnalysisResult`] and the flat form slots.
//!
//! Each eye has seven main slots and four detail slots, all plain strings.
//! Slot ids are `{key}-{left|right}`; [`slots`] lists all 22 in the order
//! the dashboard expects them.

use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use deepoct_core::models::biomarkers::{
    AnalysisResult, BiomarkerRecord, Dril, Eye, HyperreflectivePoints, Oedeme, RetinalThickness,
};
use deepoct_core::vocab::{self, THICKNESS_SECTOR_LABELS, THICKNESS_SECTORS};

use crate::all_sections;
use crate::error::FormError;
use crate::layout::FormWarning;

/// Per-eye slots, in output order.
pub const MAIN_SLOTS: [&str; 7] = ["dril", "oedeme", "briding", "mle", "ze", "points", "decollement"];

/// Detail slots, emitted after the main slots of both eyes, eye-interleaved.
pub const DETAIL_SLOTS: [&str; 4] = [
    "nb-logette-input",
    "taille-logette-input",
    "localisation-input",
    "edtrs-input",
];

pub const SLOT_COUNT: usize = (MAIN_SLOTS.len() + DETAIL_SLOTS.len()) * Eye::BOTH.len();

/// Form values for one eye.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct EyeFormValues {
    pub dril: String,
    pub oedeme: String,
    pub briding: String,
    pub mle: String,
    pub ze: String,
    pub points: String,
    pub decollement: String,
    pub nb_logette: String,
    pub taille: String,
    pub localisation: String,
    pub edtrs: String,
}

impl EyeFormValues {
    /// Value of a slot by its key (see [`MAIN_SLOTS`] and [`DETAIL_SLOTS`]).
    pub fn get(&self, key: &str) -> Option<&str> {
        let value = match key {
            "dril" => &self.dril,
            "oedeme" => &self.oedeme,
            "briding" => &self.briding,
            "mle" => &self.mle,
            "ze" => &self.ze,
            "points" => &self.points,
            "decollement" => &self.decollement,
            "nb-logette-input" => &self.nb_logette,
            "taille-logette-input" => &self.taille,
            "localisation-input" => &self.localisation,
            "edtrs-input" => &self.edtrs,
            _ => return None,
        };
        Some(value)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut String> {
        let value = match key {
            "dril" => &mut self.dril,
            "oedeme" => &mut self.oedeme,
            "briding" => &mut self.briding,
            "mle" => &mut self.mle,
            "ze" => &mut self.ze,
            "points" => &mut self.points,
            "decollement" => &mut self.decollement,
            "nb-logette-input" => &mut self.nb_logette,
            "taille-logette-input" => &mut self.taille,
            "localisation-input" => &mut self.localisation,
            "edtrs-input" => &mut self.edtrs,
            _ => return None,
        };
        Some(value)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct FormValues {
    pub left: EyeFormValues,
    pub right: EyeFormValues,
}

impl FormValues {
    pub fn eye(&self, eye: Eye) -> &EyeFormValues {
        match eye {
            Eye::Left => &self.left,
            Eye::Right => &self.right,
        }
    }

    pub fn eye_mut(&mut self, eye: Eye) -> &mut EyeFormValues {
        match eye {
            Eye::Left => &mut self.left,
            Eye::Right => &mut self.right,
        }
    }

    /// Build form values from `(slot id, value)` pairs. Slots not listed stay empty.
    pub fn from_slots<I, K, V>(slots: I) -> Result<Self, FormError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut form = Self::default();
        for (id, value) in slots {
            let id = id.as_ref();
            let Some((key, eye)) = parse_slot_id(id) else {
                return Err(FormError::UnknownSlot(id.to_string()));
            };
            let Some(slot) = form.eye_mut(eye).get_mut(key) else {
                return Err(FormError::UnknownSlot(id.to_string()));
            };
            *slot = value.into();
        }
        Ok(form)
    }
}

/// The clinician's current bridging and detachment selections for one eye.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct ClinicianFindings {
    pub briding: String,
    pub decollement: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct ClinicianInputs {
    pub left: ClinicianFindings,
    pub right: ClinicianFindings,
}

impl ClinicianInputs {
    pub fn eye(&self, eye: Eye) -> &ClinicianFindings {
        match eye {
            Eye::Left => &self.left,
            Eye::Right => &self.right,
        }
    }
}

/// Fill the form from an analysis.
///
/// Bridging and detachment always come from `clinician`, whatever the
/// analysis holds. Cyst details are only filled while the cyst status is
/// "Présent".
pub fn bind(analysis: &AnalysisResult, clinician: &ClinicianInputs) -> FormValues {
    let mut form = FormValues::default();
    for eye in Eye::BOTH {
        let record = analysis.eye(eye);
        let findings = clinician.eye(eye);
        let cyst = &record.oedeme;
        let detail = |value: String| {
            if cyst.is_present() {
                value
            } else {
                String::new()
            }
        };

        *form.eye_mut(eye) = EyeFormValues {
            dril: record.dril.status.clone(),
            oedeme: cyst.status.clone(),
            briding: findings.briding.clone(),
            mle: record.mle.clone(),
            ze: record.ze.clone(),
            points: record.points_hyperreflectifs.status.clone(),
            decollement: findings.decollement.clone(),
            nb_logette: detail(cyst.nb_logette.clone()),
            taille: detail(cyst.taille.to_lowercase()),
            localisation: detail(cyst.localisation.clone()),
            edtrs: format_edtrs(&record.epaisseur_retinienne),
        };
        debug!(eye = eye.key(), values = ?form.eye(eye), "form values bound");
    }
    form
}

/// Replace bridging and detachment in `analysis` with the clinician's
/// selection, `Absent` where nothing is selected. Whatever the model
/// reported for them is discarded.
pub fn apply_clinician(analysis: &mut AnalysisResult, clinician: &ClinicianInputs) {
    for eye in Eye::BOTH {
        let findings = clinician.eye(eye);
        let record = analysis.eye_mut(eye);
        record.briding = or_default(&findings.briding, vocab::clinician::ABSENT);
        record.decollement = or_default(&findings.decollement, vocab::clinician::ABSENT);
    }
}

/// All 22 `(slot id, value)` pairs: main slots of the left eye, then of the
/// right eye, then each detail slot for left and right.
pub fn slots(form: &FormValues) -> Vec<(String, String)> {
    let mut out = Vec::with_capacity(SLOT_COUNT);
    for eye in Eye::BOTH {
        for key in MAIN_SLOTS {
            out.push(slot_pair(form, eye, key));
        }
    }
    for key in DETAIL_SLOTS {
        for eye in Eye::BOTH {
            out.push(slot_pair(form, eye, key));
        }
    }
    out
}

/// Split `nb-logette-input-left` into `("nb-logette-input", Eye::Left)`.
fn parse_slot_id(id: &str) -> Option<(&str, Eye)> {
    let (key, side) = id.rsplit_once('-')?;
    let eye = Eye::BOTH.into_iter().find(|e| e.side() == side)?;
    Some((key, eye))
}

fn slot_pair(form: &FormValues, eye: Eye, key: &str) -> (String, String) {
    let value = form.eye(eye).get(key).unwrap_or_default();
    (format!("{key}-{}", eye.side()), value.to_string())
}

/// Rebuild an analysis from the form as the clinician left it.
///
/// Empty slots take the record defaults. DRIL extent and point details have
/// no slot and come back empty. Only the central thickness survives the
/// EDTRS text.
pub fn reconstruct(form: &FormValues) -> AnalysisResult {
    let mut analysis = AnalysisResult::default();
    for eye in Eye::BOTH {
        let values = form.eye(eye);
        *analysis.eye_mut(eye) = BiomarkerRecord {
            dril: Dril {
                status: or_default(&values.dril, vocab::dril::ABSENT),
                extent: String::new(),
            },
            oedeme: Oedeme {
                status: or_default(&values.oedeme, vocab::oedeme::ABSENT),
                nb_logette: values.nb_logette.clone(),
                taille: values.taille.clone(),
                localisation: values.localisation.clone(),
            },
            mle: or_default(&values.mle, vocab::membrane::CONTINUOUS),
            ze: or_default(&values.ze, vocab::membrane::CONTINUOUS),
            points_hyperreflectifs: HyperreflectivePoints {
                status: or_default(&values.points, vocab::points::ABSENT),
                ..HyperreflectivePoints::default()
            },
            epaisseur_retinienne: RetinalThickness::central_only(central_from_edtrs(&values.edtrs)),
            briding: or_default(&values.briding, vocab::clinician::ABSENT),
            decollement: or_default(&values.decollement, vocab::clinician::ABSENT),
        };
    }
    analysis
}

/// Collect warnings from every section for both eyes.
pub fn validate(form: &FormValues) -> Vec<FormWarning> {
    let sections = all_sections();
    Eye::BOTH
        .into_iter()
        .flat_map(|eye| {
            sections
                .iter()
                .flat_map(move |s| s.validate_values(eye, form.eye(eye)))
        })
        .collect()
}

/// Render sectors as `Central: 310μm, Supérieur: 295μm`, skipping empty ones.
pub fn format_edtrs(thickness: &RetinalThickness) -> String {
    THICKNESS_SECTORS
        .iter()
        .zip(THICKNESS_SECTOR_LABELS)
        .filter_map(|(key, label)| {
            let value = thickness.sector(key)?;
            (!value.is_empty()).then(|| format!("{label}: {value}μm"))
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Text after the first `:` of the first comma-separated part, trimmed.
///
/// Returns an empty string when the text has no `:` at all, or when the first
/// part has none.
pub fn central_from_edtrs(edtrs: &str) -> String {
    if !edtrs.contains(':') {
        return String::new();
    }
    edtrs
        .split(',')
        .next()
        .and_then(|first| first.split(':').nth(1))
        .map(str::trim)
        .unwrap_or_default()
        .to_string()
}

fn or_default(value: &str, default: &str) -> String {
    if value.is_empty() { default } else { value }.to_string()
}
