//! Accounts and patients every fresh store starts with.

use deepoct_core::models::patient::{IvtStatus, IvtType, Patient, Sex};
use deepoct_core::models::user::Role;

/// A seed account before its password is hashed.
#[derive(Debug, Clone, Copy)]
pub struct SeedUser {
    pub identifiant: &'static str,
    pub nom: &'static str,
    pub role: Role,
}

pub const SEED_USERS: [SeedUser; 3] = [
    SeedUser {
        identifiant: "Elamri_Ayoub",
        nom: "Dr Elamri Ayoub",
        role: Role::Doctor,
    },
    SeedUser {
        identifiant: "Nezar",
        nom: "Eng Nezar",
        role: Role::Doctor,
    },
    SeedUser {
        identifiant: "admin",
        nom: "Administrateur",
        role: Role::Admin,
    },
];

pub fn default_patients() -> Vec<Patient> {
    let doctor = SEED_USERS[0].identifiant;
    let treated = |nom: &str,
                   prenom: &str,
                   sexe: Sex,
                   age: u32,
                   type_ivt: IvtType,
                   nb_injections: u32,
                   molecule: &str| Patient {
        nom: nom.to_string(),
        prenom: prenom.to_string(),
        sexe,
        age,
        ivt_recu: IvtStatus::Oui,
        type_ivt: Some(type_ivt),
        nb_injections,
        molecule: molecule.to_string(),
        doctor: doctor.to_string(),
    };

    vec![
        treated("El Amrani", "Ahmed", Sex::Homme, 65, IvtType::AntiVegf, 3, "Aflibercept"),
        treated("Benkirane", "Fatima", Sex::Femme, 72, IvtType::Corticoid, 2, "Dexaméthasone"),
        Patient {
            nom: "Tazi".to_string(),
            prenom: "Mohammed".to_string(),
            sexe: Sex::Homme,
            age: 58,
            ivt_recu: IvtStatus::Non,
            type_ivt: None,
            nb_injections: 0,
            molecule: String::new(),
            doctor: doctor.to_string(),
        },
        treated("Alaoui", "Laila", Sex::Femme, 63, IvtType::AntiVegf, 4, "Ranibizumab"),
        treated("Idrissi", "Younes", Sex::Homme, 70, IvtType::AntiVegf, 5, "Bevacizumab"),
    ]
}
