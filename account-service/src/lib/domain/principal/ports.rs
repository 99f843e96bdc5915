use async_trait::async_trait;

use crate::domain::principal::errors::LookupError;
use crate::domain::principal::models::PrincipalDetails;

/// Resolves a token subject to a principal of one kind.
#[async_trait]
pub trait PrincipalLookup: Send + Sync + 'static {
    /// Load the principal named by `subject`.
    ///
    /// # Errors
    /// * `InvalidSubject` - Subject has the wrong shape; the store is not queried
    /// * `PrincipalNotFound` - No principal with this subject
    /// * `Store` - Credential store failed
    async fn load_by_subject(&self, subject: &str) -> Result<PrincipalDetails, LookupError>;
}
