use thiserror::Error;

/// Token-layer failures. The HTTP guard collapses all verification
/// failures into one 401; the distinction here is for logs and tests.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("token expired")]
    ExpiredToken,
    #[error("invalid token")]
    InvalidToken,
    #[error("token signing failed: {0}")]
    Signing(String),
}
