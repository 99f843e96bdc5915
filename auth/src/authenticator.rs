use crate::jwt::Claims;
use crate::jwt::PrincipalClaim;
use crate::jwt::TokenError;
use crate::jwt::TokenService;
use crate::password::PasswordError;
use crate::password::PasswordHasher;

/// Login coordinator combining password verification and token issuance.
#[derive(Clone)]
pub struct Authenticator {
    password_hasher: PasswordHasher,
    token_service: TokenService,
}

/// Result of a successful login.
pub struct AuthenticationResult {
    /// Signed access token
    pub access_token: String,
}

/// Login errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    PasswordError(#[from] PasswordError),

    #[error("Token error: {0}")]
    TokenError(#[from] TokenError),
}

impl Authenticator {
    /// Create a new authenticator around a configured token service.
    pub fn new(token_service: TokenService) -> Self {
        Self {
            password_hasher: PasswordHasher::new(),
            token_service,
        }
    }

    /// Token service used for issuing and parsing.
    pub fn token_service(&self) -> &TokenService {
        &self.token_service
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Verify credentials and issue an access token.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `stored_hash` - Stored password hash
    /// * `subject` - Login subject written to `sub`
    /// * `principal_id` - Principal record id
    /// * `claim` - Identifying claim (customer email or company ico)
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match
    /// * `PasswordError` - Stored hash could not be read
    /// * `TokenError` - Token signing failed
    pub fn authenticate(
        &self,
        password: &str,
        stored_hash: &str,
        subject: impl ToString,
        principal_id: i64,
        claim: PrincipalClaim,
    ) -> Result<AuthenticationResult, AuthenticationError> {
        if !self.password_hasher.verify(password, stored_hash)? {
            return Err(AuthenticationError::InvalidCredentials);
        }

        let access_token = self.token_service.issue(subject, principal_id, claim)?;

        Ok(AuthenticationResult { access_token })
    }

    /// Parse a token and reject it once expired.
    ///
    /// # Errors
    /// * `InvalidToken` - Signature or structure invalid
    /// * `TokenExpired` - Past expiry
    pub fn validate_token(&self, token: &str) -> Result<Claims, TokenError> {
        self.token_service.verify(token)
    }
}
