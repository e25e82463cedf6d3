use std::path::PathBuf;
use std::time::Duration;

use crate::cli::Cli;
use crate::transport::ApiConfig;

const TOKEN_DIR: &str = ".lungai";
const TOKEN_FILE: &str = "auth_token";
const FALLBACK_TOKEN_FILE: &str = ".lungai_auth_token";

#[derive(Debug, Clone)]
pub struct Settings {
    pub api: ApiConfig,
    pub token_file: PathBuf,
}

impl Settings {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            api: ApiConfig {
                base_url: cli.api_url.clone(),
                timeout: Duration::from_secs(cli.timeout_secs),
            },
            token_file: cli.token_file.clone().unwrap_or_else(default_token_file),
        }
    }
}

pub fn default_token_file() -> PathBuf {
    match std::env::var_os("HOME").filter(|h| !h.is_empty()) {
        Some(home) => PathBuf::from(home).join(TOKEN_DIR).join(TOKEN_FILE),
        None => PathBuf::from(FALLBACK_TOKEN_FILE),
    }
}
