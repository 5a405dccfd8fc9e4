use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

pub const MISSING_REQUIRED_FIELDS: &str =
    "Veuillez remplir tous les champs obligatoires (nom, prénom, âge).";
pub const MISSING_IVT_DETAILS: &str = "Veuillez indiquer le nombre d'injections et la molécule.";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Patient {
    pub nom: String,
    pub prenom: String,
    pub sexe: Sex,
    pub age: u32,
    pub ivt_recu: IvtStatus,
    pub type_ivt: Option<IvtType>,
    pub nb_injections: u32,
    pub molecule: String,
    /// Identifiant of the owning doctor.
    pub doctor: String,
}

impl Patient {
    /// Patient identifier, `{nom}_{prenom}`.
    pub fn id(&self) -> String {
        format!("{}_{}", self.nom, self.prenom)
    }

    pub fn has_received_ivt(&self) -> bool {
        self.ivt_recu == IvtStatus::Oui
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Sex {
    #[default]
    Homme,
    Femme,
}

/// Whether the patient already received intravitreal injections.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum IvtStatus {
    Oui,
    #[default]
    Non,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum IvtType {
    #[default]
    AntiVegf,
    Corticoid,
}

/// Patient form input as submitted by the clinician. Every field may be missing.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PatientForm {
    #[serde(default)]
    pub nom: Option<String>,
    #[serde(default)]
    pub prenom: Option<String>,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub sexe: Option<Sex>,
    #[serde(default)]
    pub ivt_recu: Option<IvtStatus>,
    #[serde(default)]
    pub type_ivt: Option<IvtType>,
    #[serde(default)]
    pub nb_injections: Option<u32>,
    #[serde(default)]
    pub molecule: Option<String>,
}

impl PatientForm {
    /// Validate the form and build a patient owned by `doctor`.
    ///
    /// Empty strings and zero counts count as missing. Injection details are
    /// only kept when the patient has received IVT.
    pub fn into_patient(self, doctor: &str) -> Result<Patient, CoreError> {
        let nom = non_empty(self.nom);
        let prenom = non_empty(self.prenom);
        let age = self.age.filter(|a| *a > 0);

        let (Some(nom), Some(prenom), Some(age)) = (nom, prenom, age) else {
            return Err(CoreError::Validation(MISSING_REQUIRED_FIELDS.to_string()));
        };

        let ivt_recu = self.ivt_recu.unwrap_or_default();
        let nb_injections = self.nb_injections.filter(|n| *n > 0);
        let molecule = non_empty(self.molecule);

        let (type_ivt, nb_injections, molecule) = match ivt_recu {
            IvtStatus::Oui => {
                let (Some(count), Some(molecule)) = (nb_injections, molecule) else {
                    return Err(CoreError::Validation(MISSING_IVT_DETAILS.to_string()));
                };
                (Some(self.type_ivt.unwrap_or_default()), count, molecule)
            }
            IvtStatus::Non => (None, 0, String::new()),
        };

        Ok(Patient {
            nom,
            prenom,
            sexe: self.sexe.unwrap_or_default(),
            age,
            ivt_recu,
            type_ivt,
            nb_injections,
            molecule,
            doctor: doctor.to_string(),
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
