use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::claims::PrincipalClaim;
use super::errors::TokenError;

/// Token service issuing and parsing signed access tokens.
///
/// Uses HS256 (HMAC with SHA-256) over a shared secret. Tokens are stateless:
/// nothing is stored server-side and a token only stops working at expiry.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    lifetime: Duration,
}

impl TokenService {
    /// Minimum secret length for HS256 (256 bits).
    pub const MIN_SECRET_LENGTH: usize = 32;

    /// Create a new token service with a secret key.
    ///
    /// # Arguments
    /// * `secret` - Secret key for signing tokens
    /// * `lifetime` - Time between issue and expiry of every token
    ///
    /// # Returns
    /// TokenService configured with HS256 algorithm
    ///
    /// # Errors
    /// * `SigningKeyMisconfigured` - Secret shorter than 32 bytes or non-positive lifetime
    ///
    /// # Security Notes
    /// - Every instance validating tokens must be provisioned with the same secret
    /// - Store secrets in environment variables or secure vaults, never in code
    pub fn new(secret: &[u8], lifetime: Duration) -> Result<Self, TokenError> {
        if secret.len() < Self::MIN_SECRET_LENGTH {
            return Err(TokenError::SigningKeyMisconfigured(format!(
                "secret must be at least {} bytes, got {}",
                Self::MIN_SECRET_LENGTH,
                secret.len()
            )));
        }

        if lifetime <= Duration::zero() {
            return Err(TokenError::SigningKeyMisconfigured(
                "token lifetime must be positive".to_string(),
            ));
        }

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
            lifetime,
        })
    }

    /// Lifetime applied by `issue`.
    pub fn lifetime(&self) -> Duration {
        self.lifetime
    }

    /// Issue a token valid from now for the configured lifetime.
    ///
    /// # Arguments
    /// * `subject` - Login subject (email or ico)
    /// * `principal_id` - Principal record id
    /// * `claim` - Identifying claim deciding the lookup
    ///
    /// # Returns
    /// Compact signed token string
    ///
    /// # Errors
    /// * `SigningKeyMisconfigured` - Signing failed
    pub fn issue(
        &self,
        subject: impl ToString,
        principal_id: i64,
        claim: PrincipalClaim,
    ) -> Result<String, TokenError> {
        let now = Utc::now();
        self.issue_at(subject, principal_id, claim, now, now + self.lifetime)
    }

    /// Issue a token with explicit issue and expiry instants.
    ///
    /// # Errors
    /// * `SigningKeyMisconfigured` - Signing failed
    pub fn issue_at(
        &self,
        subject: impl ToString,
        principal_id: i64,
        claim: PrincipalClaim,
        issued_at: DateTime<Utc>,
        expires_at: DateTime<Utc>,
    ) -> Result<String, TokenError> {
        let claims = Claims::new(
            subject,
            principal_id,
            claim,
            issued_at.timestamp(),
            expires_at.timestamp(),
        );

        self.encode(&claims)
    }

    /// Sign a prepared claim set.
    ///
    /// # Errors
    /// * `SigningKeyMisconfigured` - Signing failed
    pub fn encode(&self, claims: &Claims) -> Result<String, TokenError> {
        let header = Header::new(self.algorithm);

        encode(&header, claims, &self.encoding_key)
            .map_err(|e| TokenError::SigningKeyMisconfigured(e.to_string()))
    }

    /// Verify the signature and decode the claims.
    ///
    /// Expiry is not checked here; see `is_valid` and `Claims::is_expired`.
    ///
    /// # Arguments
    /// * `token` - Compact token string
    ///
    /// # Returns
    /// Decoded claims
    ///
    /// # Errors
    /// * `InvalidToken` - Signature does not verify, token is malformed, or claims are missing
    pub fn parse(&self, token: &str) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(self.algorithm);
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| TokenError::InvalidToken(e.to_string()))
    }

    /// Parse and reject expired tokens.
    ///
    /// # Errors
    /// * `InvalidToken` - See `parse`
    /// * `TokenExpired` - Current time is at or past `exp`
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let claims = self.parse(token)?;

        if claims.is_expired(Utc::now().timestamp()) {
            return Err(TokenError::TokenExpired);
        }

        Ok(claims)
    }

    /// True iff the token parses, names `expected_subject` and is not expired.
    pub fn is_valid(&self, token: &str, expected_subject: &str) -> bool {
        self.verify(token)
            .map(|claims| claims.sub == expected_subject)
            .unwrap_or(false)
    }
}
