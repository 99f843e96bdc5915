use axum::http::StatusCode;
use axum::Extension;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::principal::models::PrincipalKind;
use crate::inbound::http::middleware::AuthenticatedPrincipal;

/// The principal attached to this request by the authentication filter.
pub async fn current_principal(
    Extension(principal): Extension<AuthenticatedPrincipal>,
) -> Result<ApiSuccess<CurrentPrincipalData>, ApiError> {
    Ok(ApiSuccess::new(StatusCode::OK, (&principal).into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurrentPrincipalData {
    pub login_name: String,
    pub kind: PrincipalKind,
    pub principal_id: i64,
    pub remote_address: Option<String>,
    pub session_id: Option<String>,
}

impl From<&AuthenticatedPrincipal> for CurrentPrincipalData {
    fn from(principal: &AuthenticatedPrincipal) -> Self {
        Self {
            login_name: principal.details.login_name.clone(),
            kind: principal.details.kind,
            principal_id: principal.details.principal_id,
            remote_address: principal.remote_address.map(|addr| addr.to_string()),
            session_id: principal.session_id.clone(),
        }
    }
}
