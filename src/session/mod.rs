pub mod claims;
pub mod store;

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use tracing::{info, warn};

use crate::error::ClientError;

pub use claims::{Claims, UserInfo, decode_claims};
pub use store::{FileTokenStore, MemoryTokenStore, TokenStore};

#[derive(Debug, Clone, PartialEq)]
pub struct AuthToken {
    pub raw: String,
    pub claims: Claims,
}

impl AuthToken {
    pub fn parse(raw: &str) -> Result<Self, ClientError> {
        let claims = decode_claims(raw)?;
        Ok(Self {
            raw: raw.to_string(),
            claims,
        })
    }
}

pub struct Session {
    store: Box<dyn TokenStore>,
}

impl Session {
    pub fn new(store: Box<dyn TokenStore>) -> Self {
        Self { store }
    }

    pub fn begin(&mut self, raw: &str) -> Result<AuthToken> {
        let token = AuthToken::parse(raw)?;
        self.store.store(&token.raw)?;
        info!(user = %token.claims.sub, "session_started");
        Ok(token)
    }

    pub fn end(&mut self) -> Result<()> {
        self.store.clear()?;
        info!("session_ended");
        Ok(())
    }

    pub fn read(&self) -> Option<String> {
        self.store.read()
    }

    pub fn is_valid(&mut self) -> bool {
        self.is_valid_at(now_secs())
    }

    pub fn is_valid_at(&mut self, now: f64) -> bool {
        self.current_at(now).is_ok()
    }

    pub fn current(&mut self) -> Result<AuthToken, ClientError> {
        self.current_at(now_secs())
    }

    pub fn current_at(&mut self, now: f64) -> Result<AuthToken, ClientError> {
        let raw = self
            .store
            .read()
            .ok_or_else(|| ClientError::AuthInvalid("no stored token".to_string()))?;
        let outcome = AuthToken::parse(&raw).and_then(|token| {
            if token.claims.is_expired_at(now) {
                Err(ClientError::AuthInvalid("token expired".to_string()))
            } else {
                Ok(token)
            }
        });
        if let Err(err) = &outcome {
            warn!(reason = %err.message(), "session_invalid");
            if let Err(clear_err) = self.store.clear() {
                warn!(error = %clear_err, "session_clear_failed");
            }
        }
        outcome
    }

    pub fn user_info(&self) -> Option<UserInfo> {
        let raw = self.store.read()?;
        decode_claims(&raw).ok().map(|c| c.user_info())
    }
}

pub fn now_secs() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs_f64())
        .unwrap_or(0.0)
}
