use deepoct_core::models::analysis::StoredAnalysis;
use deepoct_core::models::biomarkers::AnalysisResult;
use deepoct_core::models::patient::Patient;
use deepoct_core::models::user::User;

use crate::error::StorageError;

/// Access to application users.
pub trait UserRepository: Send + Sync {
    /// Exact-match lookup by identifiant.
    fn get_user(&self, identifiant: &str) -> Result<Option<User>, StorageError>;

    fn list_users(&self) -> Result<Vec<User>, StorageError>;

    fn add_user(&self, user: User) -> Result<(), StorageError>;

    /// Replace the user with the same identifiant.
    fn update_user(&self, user: User) -> Result<(), StorageError>;
}

/// Access to patient records.
pub trait PatientRepository: Send + Sync {
    /// Lookup by patient id (`{nom}_{prenom}`).
    fn get_patient(&self, id: &str) -> Result<Option<Patient>, StorageError>;

    /// All patients, in insertion order.
    fn list_patients(&self) -> Result<Vec<Patient>, StorageError>;

    fn add_patient(&self, patient: Patient) -> Result<(), StorageError>;

    /// Replace the patient currently stored under `id`. The replacement may
    /// carry a different id if its name changed.
    fn update_patient(&self, id: &str, patient: Patient) -> Result<(), StorageError>;

    /// Patients owned by `doctor`, newest first.
    fn list_patients_for_doctor(&self, doctor: &str) -> Result<Vec<Patient>, StorageError> {
        let mut patients: Vec<Patient> = self
            .list_patients()?
            .into_iter()
            .filter(|p| p.doctor == doctor)
            .collect();
        patients.reverse();
        Ok(patients)
    }
}

/// Access to analyses saved against patients.
pub trait AnalysisRepository: Send + Sync {
    /// Append an analysis for `patient_id`, stamped with the current time.
    fn save_analysis(
        &self,
        patient_id: &str,
        data: AnalysisResult,
    ) -> Result<StoredAnalysis, StorageError>;

    /// All analyses for a patient in save order. Unknown patients yield an
    /// empty list.
    fn list_analyses(&self, patient_id: &str) -> Result<Vec<StoredAnalysis>, StorageError>;

    /// The analysis with the most recent timestamp; ties go to the last saved.
    fn latest_analysis(&self, patient_id: &str) -> Result<Option<StoredAnalysis>, StorageError> {
        Ok(self
            .list_analyses(patient_id)?
            .into_iter()
            .max_by_key(|a| a.timestamp))
    }
}
