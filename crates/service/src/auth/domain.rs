use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Decoded claim set of a verified token, attached to request extensions by
/// the guard. Issuance embeds whatever object the client submitted, so only
/// `exp` is guaranteed; `email` is what the ownership check consumes, and
/// anything else lands in `extra`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub exp: i64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
