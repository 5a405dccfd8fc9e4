use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::Response;

use deepoct_core::models::user::{Role, UserSummary};

use crate::error::ApiError;
use crate::state::AppState;

/// Session guard for protected routes.
///
/// Extracts the `Authorization: Bearer <token>` header and validates the
/// session token. On success, inserts `AuthUser` into request extensions for
/// handlers to use. Anything else is rejected before the handler runs.
pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .filter(|t| !t.is_empty())
        .ok_or_else(|| ApiError::Unauthorized("authentification requise".to_string()))?;

    let claims = state.sessions.validate(token)?;
    let user = claims.user();

    req.extensions_mut().insert(AuthUser {
        identifiant: user.identifiant,
        nom: user.nom,
        role: user.role,
    });

    Ok(next.run(req).await)
}

/// Authenticated user extracted from session claims.
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub identifiant: String,
    pub nom: String,
    pub role: Role,
}

impl AuthUser {
    pub fn summary(&self) -> UserSummary {
        UserSummary {
            identifiant: self.identifiant.clone(),
            nom: self.nom.clone(),
            role: self.role,
        }
    }
}
