use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    Validation(String),
    RequestFailed(String),
    AuthInvalid(String),
    Decode(String),
}

impl ClientError {
    pub fn message(&self) -> &str {
        match self {
            Self::Validation(msg)
            | Self::RequestFailed(msg)
            | Self::AuthInvalid(msg)
            | Self::Decode(msg) => msg,
        }
    }
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(msg) => write!(f, "validation failed: {}", msg),
            Self::RequestFailed(msg) => write!(f, "{}", msg),
            Self::AuthInvalid(msg) => write!(f, "not authenticated: {}", msg),
            Self::Decode(msg) => write!(f, "unexpected response: {}", msg),
        }
    }
}

impl std::error::Error for ClientError {}
