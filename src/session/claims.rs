use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::{Deserialize, Serialize};

use crate::error::ClientError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub name: String,
    pub email: String,
    pub exp: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl Claims {
    pub fn is_expired_at(&self, now: f64) -> bool {
        self.exp < now
    }

    pub fn user_info(&self) -> UserInfo {
        UserInfo {
            id: self.sub.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
        }
    }
}

// Payload only; the signature is checked server-side.
pub fn decode_claims(token: &str) -> Result<Claims, ClientError> {
    let payload = token
        .split('.')
        .nth(1)
        .filter(|p| !p.is_empty())
        .ok_or_else(|| ClientError::AuthInvalid("token has no payload segment".to_string()))?;
    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|e| ClientError::AuthInvalid(format!("token payload is not base64url: {}", e)))?;
    serde_json::from_slice(&bytes)
        .map_err(|e| ClientError::AuthInvalid(format!("token claims unreadable: {}", e)))
}
