use serde::Deserialize;
use serde::Serialize;

/// Identifying claim attached to a token at issuance.
///
/// Decides which principal lookup applies when the token comes back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrincipalClaim {
    /// Customer email address
    Customer(String),
    /// Company registration code (ico), stringified
    Company(String),
}

/// Principal kind named by a decoded token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClaimedPrincipal<'a> {
    Customer(&'a str),
    Company(&'a str),
    Unrecognized,
}

/// Claims carried by an access token.
///
/// Exactly one of `customer_email` / `company_ico` is set by the issuer and it
/// mirrors `sub`. Timestamps are Unix seconds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (customer email or stringified company ico)
    pub sub: String,

    /// Numeric id of the principal record
    pub principal_id: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_ico: Option<String>,

    /// Issued at
    pub iat: i64,

    /// Expiration time
    pub exp: i64,
}

impl Claims {
    /// Build claims for a principal.
    ///
    /// # Arguments
    /// * `subject` - Login subject (email or ico)
    /// * `principal_id` - Principal record id
    /// * `claim` - Identifying claim deciding the lookup
    /// * `issued_at` - Issue timestamp (Unix seconds)
    /// * `expires_at` - Expiry timestamp (Unix seconds)
    pub fn new(
        subject: impl ToString,
        principal_id: i64,
        claim: PrincipalClaim,
        issued_at: i64,
        expires_at: i64,
    ) -> Self {
        let (customer_email, company_ico) = match claim {
            PrincipalClaim::Customer(email) => (Some(email), None),
            PrincipalClaim::Company(ico) => (None, Some(ico)),
        };

        Self {
            sub: subject.to_string(),
            principal_id,
            customer_email,
            company_ico,
            iat: issued_at,
            exp: expires_at,
        }
    }

    /// Which principal lookup this token asks for.
    ///
    /// Tokens carrying both claims, neither claim, or a claim that does not
    /// mirror the subject are `Unrecognized`.
    pub fn claimed_principal(&self) -> ClaimedPrincipal<'_> {
        match (self.customer_email.as_deref(), self.company_ico.as_deref()) {
            (Some(email), None) if email == self.sub => ClaimedPrincipal::Customer(&self.sub),
            (None, Some(ico)) if ico == self.sub => ClaimedPrincipal::Company(ico),
            _ => ClaimedPrincipal::Unrecognized,
        }
    }

    /// Check if token is expired at `current_timestamp`.
    ///
    /// A token is usable only while `current_timestamp < exp`.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp <= current_timestamp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn customer_claims() -> Claims {
        Claims::new(
            "alice@example.com",
            3,
            PrincipalClaim::Customer("alice@example.com".to_string()),
            1_000,
            2_000,
        )
    }

    #[test]
    fn test_new_sets_only_customer_claim() {
        let claims = customer_claims();

        assert_eq!(claims.sub, "alice@example.com");
        assert_eq!(claims.principal_id, 3);
        assert_eq!(claims.customer_email.as_deref(), Some("alice@example.com"));
        assert!(claims.company_ico.is_none());
        assert_eq!(
            claims.claimed_principal(),
            ClaimedPrincipal::Customer("alice@example.com")
        );
    }

    #[test]
    fn test_wire_names() {
        let claims = Claims::new(
            "12345678",
            7,
            PrincipalClaim::Company("12345678".to_string()),
            1_000,
            2_000,
        );

        let json = serde_json::to_value(&claims).unwrap();
        assert_eq!(json["sub"], "12345678");
        assert_eq!(json["principal_id"], 7);
        assert_eq!(json["company_ico"], "12345678");
        assert_eq!(json["iat"], 1_000);
        assert_eq!(json["exp"], 2_000);
        assert!(json.get("customer_email").is_none());
    }

    #[test]
    fn test_claimed_principal_dispatch() {
        let customer = customer_claims();
        assert_eq!(
            customer.claimed_principal(),
            ClaimedPrincipal::Customer("alice@example.com")
        );

        let company = Claims::new(
            "12345678",
            7,
            PrincipalClaim::Company("12345678".to_string()),
            1_000,
            2_000,
        );
        assert_eq!(company.claimed_principal(), ClaimedPrincipal::Company("12345678"));
    }

    #[test]
    fn test_claimed_principal_both_claims_is_unrecognized() {
        let mut claims = customer_claims();
        claims.company_ico = Some("12345678".to_string());

        assert_eq!(claims.claimed_principal(), ClaimedPrincipal::Unrecognized);
    }

    #[test]
    fn test_claimed_principal_no_claim_is_unrecognized() {
        let mut claims = customer_claims();
        claims.customer_email = None;

        assert_eq!(claims.claimed_principal(), ClaimedPrincipal::Unrecognized);
    }

    #[test]
    fn test_claimed_principal_claim_must_mirror_subject() {
        let mut claims = customer_claims();
        claims.customer_email = Some("mallory@example.com".to_string());

        assert_eq!(claims.claimed_principal(), ClaimedPrincipal::Unrecognized);
    }

    #[test]
    fn test_is_expired() {
        let claims = customer_claims();

        assert!(!claims.is_expired(1_999)); // Not expired
        assert!(claims.is_expired(2_000)); // Exactly at expiration
        assert!(claims.is_expired(2_001)); // Expired
    }
}
