use std::cell::Cell;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::error::ClientError;
use crate::schema::v1::UploadResponse;
use crate::transport::ApiClient;

const ACCEPTED: [(&str, &str); 3] = [
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("png", "image/png"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadKind {
    BloodTest,
    MriScan,
}

impl UploadKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BloodTest => "blood-test",
            Self::MriScan => "mri-scan",
        }
    }
}

pub fn accepted_mime(path: &Path) -> Result<&'static str, ClientError> {
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .map(|s| s.to_ascii_lowercase())
        .unwrap_or_default();
    ACCEPTED
        .iter()
        .find(|(e, _)| *e == ext)
        .map(|(_, mime)| *mime)
        .ok_or_else(|| {
            ClientError::Validation(format!(
                "unsupported file type for {}: expected JPG, JPEG or PNG",
                path.display()
            ))
        })
}

pub fn select(files: &[PathBuf]) -> Result<PathBuf, ClientError> {
    match files {
        [] => Err(ClientError::Validation("no file selected".to_string())),
        [one] => {
            accepted_mime(one)?;
            Ok(one.clone())
        }
        _ => Err(ClientError::Validation(
            "only one file can be uploaded at a time".to_string(),
        )),
    }
}

#[derive(Debug, Clone)]
pub struct UploadFile {
    pub path: PathBuf,
    pub file_name: String,
    pub mime: &'static str,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    pub fn read(path: &Path) -> Result<Self> {
        let mime = accepted_mime(path)?;
        let bytes =
            std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
        let file_name = path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("upload")
            .to_string();
        Ok(Self {
            path: path.to_path_buf(),
            file_name,
            mime,
            bytes,
        })
    }
}

#[derive(Debug, Default)]
pub struct UploadSlot {
    busy: Cell<bool>,
}

pub struct UploadGuard<'a> {
    slot: &'a UploadSlot,
}

impl UploadSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_busy(&self) -> bool {
        self.busy.get()
    }

    pub fn try_begin(&self) -> Option<UploadGuard<'_>> {
        if self.busy.replace(true) {
            debug!("upload_ignored_busy");
            None
        } else {
            Some(UploadGuard { slot: self })
        }
    }
}

impl Drop for UploadGuard<'_> {
    fn drop(&mut self) {
        self.slot.busy.set(false);
    }
}

pub fn submit(
    client: &ApiClient,
    slot: &UploadSlot,
    file: &UploadFile,
    kind: UploadKind,
) -> Result<Option<UploadResponse>, ClientError> {
    let Some(_guard) = slot.try_begin() else {
        return Ok(None);
    };
    info!(file = %file.file_name, kind = kind.as_str(), bytes = file.bytes.len(), "upload_started");
    let response: UploadResponse = client
        .post_multipart("/process_mri", file, &[("type", kind.as_str())])
        .map_err(|err| match err {
            ClientError::RequestFailed(_) => {
                ClientError::RequestFailed("failed to upload file".to_string())
            }
            other => other,
        })?;
    response.validate()?;
    Ok(Some(response))
}
