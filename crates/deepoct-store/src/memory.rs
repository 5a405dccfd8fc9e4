use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use deepoct_core::models::analysis::StoredAnalysis;
use deepoct_core::models::biomarkers::AnalysisResult;
use deepoct_core::models::patient::Patient;
use deepoct_core::models::user::User;
use tracing::info;

use crate::error::StorageError;
use crate::repository::{AnalysisRepository, PatientRepository, UserRepository};

/// Process-local store backing all three repositories.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    users: RwLock<Vec<User>>,
    patients: RwLock<Vec<Patient>>,
    analyses: RwLock<HashMap<String, Vec<StoredAnalysis>>>,
}

impl InMemoryStore {
    pub fn new(users: Vec<User>, patients: Vec<Patient>) -> Self {
        Self {
            users: RwLock::new(users),
            patients: RwLock::new(patients),
            analyses: RwLock::new(HashMap::new()),
        }
    }
}

fn read<T>(lock: &RwLock<T>) -> Result<RwLockReadGuard<'_, T>, StorageError> {
    lock.read().map_err(|_| StorageError::Poisoned)
}

fn write<T>(lock: &RwLock<T>) -> Result<RwLockWriteGuard<'_, T>, StorageError> {
    lock.write().map_err(|_| StorageError::Poisoned)
}

impl UserRepository for InMemoryStore {
    fn get_user(&self, identifiant: &str) -> Result<Option<User>, StorageError> {
        Ok(read(&self.users)?
            .iter()
            .find(|u| u.identifiant == identifiant)
            .cloned())
    }

    fn list_users(&self) -> Result<Vec<User>, StorageError> {
        Ok(read(&self.users)?.clone())
    }

    fn add_user(&self, user: User) -> Result<(), StorageError> {
        let mut users = write(&self.users)?;
        if users.iter().any(|u| u.identifiant == user.identifiant) {
            return Err(StorageError::AlreadyExists {
                key: user.identifiant,
            });
        }
        users.push(user);
        Ok(())
    }

    fn update_user(&self, user: User) -> Result<(), StorageError> {
        let mut users = write(&self.users)?;
        let slot = users
            .iter_mut()
            .find(|u| u.identifiant == user.identifiant)
            .ok_or_else(|| StorageError::NotFound {
                key: user.identifiant.clone(),
            })?;
        *slot = user;
        Ok(())
    }
}

impl PatientRepository for InMemoryStore {
    fn get_patient(&self, id: &str) -> Result<Option<Patient>, StorageError> {
        Ok(read(&self.patients)?
            .iter()
            .find(|p| p.id() == id)
            .cloned())
    }

    fn list_patients(&self) -> Result<Vec<Patient>, StorageError> {
        Ok(read(&self.patients)?.clone())
    }

    fn add_patient(&self, patient: Patient) -> Result<(), StorageError> {
        let mut patients = write(&self.patients)?;
        let id = patient.id();
        if patients.iter().any(|p| p.id() == id) {
            return Err(StorageError::AlreadyExists { key: id });
        }
        info!(patient_id = %id, doctor = %patient.doctor, "patient added");
        patients.push(patient);
        Ok(())
    }

    fn update_patient(&self, id: &str, patient: Patient) -> Result<(), StorageError> {
        let mut patients = write(&self.patients)?;
        let index = patients
            .iter()
            .position(|p| p.id() == id)
            .ok_or_else(|| StorageError::NotFound { key: id.to_string() })?;

        let new_id = patient.id();
        if new_id != id && patients.iter().any(|p| p.id() == new_id) {
            return Err(StorageError::AlreadyExists { key: new_id });
        }

        patients[index] = patient;
        info!(patient_id = %id, new_patient_id = %new_id, "patient updated");
        Ok(())
    }
}

impl AnalysisRepository for InMemoryStore {
    fn save_analysis(
        &self,
        patient_id: &str,
        data: AnalysisResult,
    ) -> Result<StoredAnalysis, StorageError> {
        let stored = StoredAnalysis {
            timestamp: jiff::Timestamp::now(),
            data,
        };
        write(&self.analyses)?
            .entry(patient_id.to_string())
            .or_default()
            .push(stored.clone());
        info!(patient_id, "analysis saved");
        Ok(stored)
    }

    fn list_analyses(&self, patient_id: &str) -> Result<Vec<StoredAnalysis>, StorageError> {
        Ok(read(&self.analyses)?
            .get(patient_id)
            .cloned()
            .unwrap_or_default())
    }
}
