use std::path::PathBuf;

use crate::intake::biomarker::{BiomarkerDraft, BiomarkerSample};
use crate::intake::upload::{UploadFile, UploadKind, UploadSlot};
use crate::schema::v1::{BiomarkerResponse, PredictionReportV1, Source, UploadResponse};
use crate::scores::PredictionResult;
use crate::session::Session;
use crate::transport::{ApiClient, ApiConfig};

#[derive(Debug, Clone)]
pub enum Submission {
    Biomarkers(BiomarkerDraft),
    Upload { files: Vec<PathBuf>, kind: UploadKind },
}

impl Submission {
    pub fn source(&self) -> Source {
        match self {
            Self::Biomarkers(_) => Source::Biomarkers,
            Self::Upload { .. } => Source::Upload,
        }
    }
}

pub struct Ctx {
    pub api: ApiConfig,
    pub session: Session,
    pub submission: Submission,
    pub out_json: Option<PathBuf>,
    pub client: Option<ApiClient>,
    pub sample: Option<BiomarkerSample>,
    pub upload_file: Option<UploadFile>,
    pub upload_slot: UploadSlot,
    pub biomarker_response: Option<BiomarkerResponse>,
    pub upload_response: Option<UploadResponse>,
    pub result: Option<PredictionResult>,
    pub warnings: Vec<String>,
    pub report: PredictionReportV1,
}

impl Ctx {
    pub fn new(
        api: ApiConfig,
        session: Session,
        submission: Submission,
        out_json: Option<PathBuf>,
        tool_version: &str,
    ) -> Self {
        let report = PredictionReportV1::empty(tool_version, submission.source());
        Self {
            api,
            session,
            submission,
            out_json,
            client: None,
            sample: None,
            upload_file: None,
            upload_slot: UploadSlot::new(),
            biomarker_response: None,
            upload_response: None,
            result: None,
            warnings: Vec::new(),
            report,
        }
    }

    pub fn client(&self) -> anyhow::Result<&ApiClient> {
        self.client
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("api client not initialised"))
    }
}
