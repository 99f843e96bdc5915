use std::fmt;

use serde::Serialize;

/// Kind of authenticated identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PrincipalKind {
    Customer,
    Company,
}

impl PrincipalKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PrincipalKind::Customer => "customer",
            PrincipalKind::Company => "company",
        }
    }
}

/// Principal resolved from the credential store.
///
/// `login_name` is the customer email or the stringified company ico.
#[derive(Clone, PartialEq, Eq)]
pub struct PrincipalDetails {
    pub kind: PrincipalKind,
    pub principal_id: i64,
    pub login_name: String,
    pub password_hash: String,
    pub authorities: Vec<String>,
}

impl PrincipalDetails {
    pub fn new(
        kind: PrincipalKind,
        principal_id: i64,
        login_name: impl Into<String>,
        password_hash: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            principal_id,
            login_name: login_name.into(),
            password_hash: password_hash.into(),
            authorities: Vec::new(),
        }
    }
}

impl fmt::Debug for PrincipalDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrincipalDetails")
            .field("kind", &self.kind)
            .field("principal_id", &self.principal_id)
            .field("login_name", &self.login_name)
            .field("password_hash", &"<redacted>")
            .field("authorities", &self.authorities)
            .finish()
    }
}
