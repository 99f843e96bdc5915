use thiserror::Error;

/// Failure to resolve a token subject to a principal.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LookupError {
    /// Subject rejected before the store was consulted
    #[error("Invalid subject: {0}")]
    InvalidSubject(String),

    #[error("Principal not found: {0}")]
    PrincipalNotFound(String),

    #[error("Credential store error: {0}")]
    Store(String),
}
