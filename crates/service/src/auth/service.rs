use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation};
use serde_json::{Map, Value};
use tracing::debug;

use super::domain::Claims;
use super::errors::AuthError;

/// Issues and verifies the bearer tokens protecting the owner-scoped
/// review listing.
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl TokenService {
    pub fn new(secret: &str, ttl: Duration) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl,
        }
    }

    /// Sign an arbitrary identity payload. The payload is embedded into the
    /// claim set unvalidated; only `iat` and `exp` are added on top.
    pub fn issue(&self, mut payload: Map<String, Value>) -> Result<String, AuthError> {
        let now = Utc::now();
        payload.insert("iat".to_string(), Value::from(now.timestamp()));
        payload.insert("exp".to_string(), Value::from((now + self.ttl).timestamp()));
        encode(&Header::default(), &payload, &self.encoding)
            .map_err(|e| AuthError::Signing(e.to_string()))
    }

    /// Verify signature and expiry, returning the decoded claim set.
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        match decode::<Claims>(token, &self.decoding, &Validation::default()) {
            Ok(data) => Ok(data.claims),
            Err(e) if matches!(e.kind(), ErrorKind::ExpiredSignature) => Err(AuthError::ExpiredToken),
            Err(e) => {
                debug!(error = %e, "token verification failed");
                Err(AuthError::InvalidToken)
            }
        }
    }
}
