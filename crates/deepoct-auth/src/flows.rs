use tracing::{info, warn};

use deepoct_core::models::user::{Role, User};
use deepoct_store::repository::UserRepository;
use deepoct_store::seed::SEED_USERS;

use crate::error::AuthError;
use crate::password::{hash_password_with, verify_password};

/// Check credentials. The identifiant match ignores case.
///
/// Returns `Ok(None)` for an unknown user or a wrong password.
pub fn authenticate(
    users: &dyn UserRepository,
    identifiant: &str,
    password: &str,
) -> Result<Option<User>, AuthError> {
    let wanted = identifiant.to_lowercase();
    let Some(user) = users
        .list_users()?
        .into_iter()
        .find(|u| u.identifiant.to_lowercase() == wanted)
    else {
        info!("login rejected: unknown identifiant");
        return Ok(None);
    };

    match verify_password(password, &user.password_hash) {
        Ok(true) => {
            info!(identifiant = %user.identifiant, "login succeeded");
            Ok(Some(user))
        }
        Ok(false) => {
            info!(identifiant = %user.identifiant, "login rejected: wrong password");
            Ok(None)
        }
        Err(e) => {
            warn!(identifiant = %user.identifiant, error = %e, "stored password hash unreadable");
            Ok(None)
        }
    }
}

/// Build the seed accounts with freshly hashed passwords.
pub fn seed_users(doctor_password: &str, admin_password: &str, iterations: u32) -> Vec<User> {
    SEED_USERS
        .iter()
        .map(|seed| {
            let password = match seed.role {
                Role::Admin => admin_password,
                Role::Doctor => doctor_password,
            };
            User {
                identifiant: seed.identifiant.to_string(),
                nom: seed.nom.to_string(),
                password_hash: hash_password_with(password, iterations),
                role: seed.role,
            }
        })
        .collect()
}
