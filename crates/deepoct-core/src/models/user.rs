use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub identifiant: String,
    pub nom: String,
    pub password_hash: String,
    pub role: Role,
}

impl User {
    pub fn summary(&self) -> UserSummary {
        UserSummary {
            identifiant: self.identifiant.clone(),
            nom: self.nom.clone(),
            role: self.role,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Role {
    Doctor,
    Admin,
}

/// User data safe to send to the frontend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct UserSummary {
    pub identifiant: String,
    pub nom: String,
    pub role: Role,
}
