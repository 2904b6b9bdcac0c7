//! Auth module: domain, errors, token service.
//!
//! Tokens are stateless HS256 JWTs; there is no credential store, no
//! revocation, and no refresh. Verification is signature + expiry only.

pub mod domain;
pub mod errors;
pub mod service;

pub use domain::Claims;
pub use errors::AuthError;
pub use service::TokenService;
