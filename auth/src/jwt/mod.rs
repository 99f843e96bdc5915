pub mod claims;
pub mod errors;
pub mod service;

pub use claims::ClaimedPrincipal;
pub use claims::Claims;
pub use claims::PrincipalClaim;
pub use errors::TokenError;
pub use service::TokenService;
