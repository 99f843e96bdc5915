use std::net::SocketAddr;
use std::sync::Arc;

use auth::ClaimedPrincipal;
use auth::TokenService;
use axum::extract::ConnectInfo;
use axum::extract::Request;
use axum::extract::State;
use axum::http::header;
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::Response;
use chrono::Utc;
use thiserror::Error;

use crate::domain::principal::errors::LookupError;
use crate::domain::principal::models::PrincipalDetails;
use crate::domain::principal::models::PrincipalKind;
use crate::domain::principal::ports::PrincipalLookup;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

const BEARER_PREFIX: &str = "Bearer ";
const SESSION_COOKIE: &str = "SESSION";

/// Security context attached to request extensions for an authenticated request.
#[derive(Debug, Clone)]
pub struct AuthenticatedPrincipal {
    pub details: PrincipalDetails,
    pub remote_address: Option<SocketAddr>,
    pub session_id: Option<String>,
}

impl AuthenticatedPrincipal {
    /// Record id of this principal if it is of the given kind, 403 otherwise.
    pub fn require_kind(&self, kind: PrincipalKind) -> Result<i64, ApiError> {
        if self.details.kind != kind {
            return Err(ApiError::Forbidden(format!(
                "Only a {} may do this",
                kind.as_str()
            )));
        }
        Ok(self.details.principal_id)
    }

    /// Succeeds only when this principal is the account `kind`/`principal_id`.
    pub fn require_account(&self, kind: PrincipalKind, principal_id: i64) -> Result<(), ApiError> {
        if self.require_kind(kind)? != principal_id {
            return Err(ApiError::Forbidden(
                "Not allowed to modify another account".to_string(),
            ));
        }
        Ok(())
    }
}

/// Why a presented bearer token did not authenticate the request.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthenticationFailure {
    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Token expired")]
    TokenExpired,

    #[error("Token carries no usable principal claim")]
    UnrecognizedClaims,

    #[error("Invalid subject: {0}")]
    InvalidSubject(String),

    #[error("Principal not found: {0}")]
    PrincipalNotFound(String),

    #[error("Credential store error: {0}")]
    Store(String),
}

impl From<LookupError> for AuthenticationFailure {
    fn from(err: LookupError) -> Self {
        match err {
            LookupError::InvalidSubject(s) => AuthenticationFailure::InvalidSubject(s),
            LookupError::PrincipalNotFound(s) => AuthenticationFailure::PrincipalNotFound(s),
            LookupError::Store(s) => AuthenticationFailure::Store(s),
        }
    }
}

/// Turns a bearer token into a principal, consulting exactly one lookup.
pub struct AuthenticationFilter {
    token_service: TokenService,
    customer_lookup: Arc<dyn PrincipalLookup>,
    company_lookup: Arc<dyn PrincipalLookup>,
}

impl AuthenticationFilter {
    pub fn new(
        token_service: TokenService,
        customer_lookup: Arc<dyn PrincipalLookup>,
        company_lookup: Arc<dyn PrincipalLookup>,
    ) -> Self {
        Self {
            token_service,
            customer_lookup,
            company_lookup,
        }
    }

    /// Resolve the principal named by the request's bearer token.
    ///
    /// Returns `Ok(None)` when the request carries no bearer token.
    pub async fn resolve(
        &self,
        headers: &HeaderMap,
    ) -> Result<Option<PrincipalDetails>, AuthenticationFailure> {
        let Some(token) = bearer_token(headers) else {
            return Ok(None);
        };

        let claims = self
            .token_service
            .parse(token)
            .map_err(|e| AuthenticationFailure::InvalidToken(e.to_string()))?;

        if claims.is_expired(Utc::now().timestamp()) {
            return Err(AuthenticationFailure::TokenExpired);
        }

        let details = match claims.claimed_principal() {
            ClaimedPrincipal::Company(ico) => self.company_lookup.load_by_subject(ico).await?,
            ClaimedPrincipal::Customer(email) => {
                self.customer_lookup.load_by_subject(email).await?
            }
            ClaimedPrincipal::Unrecognized => {
                return Err(AuthenticationFailure::UnrecognizedClaims)
            }
        };

        Ok(Some(details))
    }
}

/// Middleware that attaches an `AuthenticatedPrincipal` when the bearer token
/// resolves. Never rejects: failures are logged and the request continues
/// anonymously.
pub async fn authenticate(State(state): State<AppState>, mut req: Request, next: Next) -> Response {
    match state.authentication_filter.resolve(req.headers()).await {
        Ok(Some(details)) => {
            let remote_address = req
                .extensions()
                .get::<ConnectInfo<SocketAddr>>()
                .map(|ConnectInfo(addr)| *addr);
            let session_id = session_id(req.headers());

            tracing::debug!(
                kind = ?details.kind,
                principal_id = details.principal_id,
                login_name = %details.login_name,
                "Request authenticated"
            );

            req.extensions_mut().insert(AuthenticatedPrincipal {
                details,
                remote_address,
                session_id,
            });
        }
        Ok(None) => {}
        Err(failure) => log_failure(&failure),
    }

    next.run(req).await
}

/// Authorization guard for protected routes.
pub async fn require_principal(req: Request, next: Next) -> Result<Response, ApiError> {
    if req.extensions().get::<AuthenticatedPrincipal>().is_none() {
        return Err(ApiError::Unauthorized(
            "Authentication required".to_string(),
        ));
    }

    Ok(next.run(req).await)
}

fn log_failure(failure: &AuthenticationFailure) {
    match failure {
        AuthenticationFailure::TokenExpired | AuthenticationFailure::UnrecognizedClaims => {
            tracing::debug!(reason = %failure, "Bearer token ignored");
        }
        _ => tracing::warn!(reason = %failure, "Bearer token rejected"),
    }
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix(BEARER_PREFIX)
}

fn session_id(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|cookies| cookies.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .map(|(_, value)| value.to_string())
}
