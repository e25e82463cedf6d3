use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::blocking::multipart::{Form, Part};
use reqwest::blocking::{Client, RequestBuilder};
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{info, warn};

use crate::error::ClientError;
use crate::intake::upload::UploadFile;
use crate::schema::v1::{LoginRequest, LoginResponse, PredictionRecord};
use crate::session::AuthToken;

pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

pub struct ApiClient {
    base_url: String,
    http: Client,
    bearer: Option<AuthToken>,
}

impl ApiClient {
    pub fn new(config: &ApiConfig, bearer: Option<AuthToken>) -> Result<Self> {
        let mut defaults = HeaderMap::new();
        defaults.insert(ACCEPT, HeaderValue::from_static("application/json"));
        let http = Client::builder()
            .timeout(config.timeout)
            .cookie_store(true)
            .default_headers(defaults)
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            http,
            bearer,
        })
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn auth_headers(&self) -> Result<HeaderMap, ClientError> {
        let mut headers = HeaderMap::new();
        if let Some(token) = &self.bearer {
            let value = HeaderValue::from_str(&format!("Bearer {}", token.raw))
                .map_err(|e| ClientError::AuthInvalid(format!("invalid auth header: {}", e)))?;
            headers.insert(AUTHORIZATION, value);
        }
        Ok(headers)
    }

    pub fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let req = self
            .http
            .post(self.url(path))
            .headers(self.auth_headers()?)
            .json(body);
        self.send(req, "POST", path)
    }

    pub fn post_multipart<T>(
        &self,
        path: &str,
        file: &UploadFile,
        fields: &[(&str, &str)],
    ) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
    {
        let part = Part::bytes(file.bytes.clone())
            .file_name(file.file_name.clone())
            .mime_str(file.mime)
            .map_err(|e| ClientError::Validation(format!("invalid file type: {}", e)))?;
        let mut form = Form::new().part("file", part);
        for (name, value) in fields {
            form = form.text(name.to_string(), value.to_string());
        }
        let req = self
            .http
            .post(self.url(path))
            .headers(self.auth_headers()?)
            .multipart(form);
        self.send(req, "POST", path)
    }

    pub fn get<T>(&self, path: &str) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
    {
        let req = self.http.get(self.url(path)).headers(self.auth_headers()?);
        self.send(req, "GET", path)
    }

    pub fn login(&self, credentials: &LoginRequest) -> Result<LoginResponse, ClientError> {
        let req = self.http.post(self.url("/auth/login")).json(credentials);
        self.send(req, "POST", "/auth/login").map_err(|err| match err {
            ClientError::RequestFailed(_) => ClientError::RequestFailed(
                "authentication failed, please check your credentials".to_string(),
            ),
            other => other,
        })
    }

    fn send<T>(&self, req: RequestBuilder, method: &str, path: &str) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
    {
        info!(method, path, "request_sent");
        let resp = req.send().map_err(|e| {
            warn!(method, path, error = %e, "request_failed");
            ClientError::RequestFailed(format!("request to {} failed", path))
        })?;
        let status = resp.status();
        if !status.is_success() {
            warn!(method, path, status = status.as_u16(), "request_failed");
            return Err(ClientError::RequestFailed(format!(
                "request to {} failed",
                path
            )));
        }
        let body = resp.text().map_err(|e| {
            warn!(method, path, error = %e, "response_read_failed");
            ClientError::RequestFailed(format!("request to {} failed", path))
        })?;
        info!(method, path, status = status.as_u16(), bytes = body.len(), "response_received");
        serde_json::from_str(&body)
            .map_err(|e| ClientError::Decode(format!("{} {}: {}", method, path, e)))
    }
}

pub fn get_prediction(client: &ApiClient, id: &str) -> Result<PredictionRecord, ClientError> {
    if id.is_empty()
        || !id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    {
        return Err(ClientError::Validation(format!(
            "invalid prediction id '{}'",
            id
        )));
    }
    client
        .get(&format!("/predictions/{}", id))
        .map_err(|err| match err {
            ClientError::RequestFailed(_) => {
                ClientError::RequestFailed("failed to get prediction results".to_string())
            }
            other => other,
        })
}
