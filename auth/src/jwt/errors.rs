use thiserror::Error;

/// Error type for token operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TokenError {
    /// Malformed token, wrong signature, or unparseable claims
    #[error("Token is invalid: {0}")]
    InvalidToken(String),

    /// Signature verifies but the token is past its expiry
    #[error("Token is expired")]
    TokenExpired,

    /// Signing secret or token lifetime unusable; fatal at startup
    #[error("Signing key misconfigured: {0}")]
    SigningKeyMisconfigured(String),
}
