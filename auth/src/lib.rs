//! Authentication utilities library
//!
//! Provides the stateless authentication building blocks of the account service:
//! - Password hashing (Argon2id)
//! - Signed access tokens naming a customer or a company principal
//! - Login coordination
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash).unwrap());
//! ```
//!
//! ## Tokens
//! ```
//! use auth::{ClaimedPrincipal, PrincipalClaim, TokenService};
//! use chrono::Duration;
//!
//! let tokens = TokenService::new(b"secret_key_at_least_32_bytes_long!", Duration::hours(24)).unwrap();
//! let token = tokens
//!     .issue("12345678", 7, PrincipalClaim::Company("12345678".to_string()))
//!     .unwrap();
//!
//! let claims = tokens.parse(&token).unwrap();
//! assert_eq!(claims.claimed_principal(), ClaimedPrincipal::Company("12345678"));
//! assert!(tokens.is_valid(&token, "12345678"));
//! ```
//!
//! ## Login
//! ```
//! use auth::{Authenticator, PrincipalClaim, TokenService};
//! use chrono::Duration;
//!
//! let tokens = TokenService::new(b"secret_key_at_least_32_bytes_long!", Duration::hours(24)).unwrap();
//! let auth = Authenticator::new(tokens);
//!
//! let hash = auth.hash_password("password123").unwrap();
//! let result = auth
//!     .authenticate(
//!         "password123",
//!         &hash,
//!         "alice@example.com",
//!         3,
//!         PrincipalClaim::Customer("alice@example.com".to_string()),
//!     )
//!     .unwrap();
//!
//! let claims = auth.validate_token(&result.access_token).unwrap();
//! assert_eq!(claims.principal_id, 3);
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use jwt::ClaimedPrincipal;
pub use jwt::Claims;
pub use jwt::PrincipalClaim;
pub use jwt::TokenError;
pub use jwt::TokenService;
pub use password::PasswordError;
pub use password::PasswordHasher;
