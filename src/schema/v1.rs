use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::ClientError;
use crate::intake::biomarker::BiomarkerSample;
use crate::scores::{PredictionResult, RiskLevel};

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: LoginUser,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginUser {
    #[serde(deserialize_with = "id_as_string")]
    pub id: String,
    pub email: String,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BiomarkerResponse {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(rename = "predictionId", default)]
    pub prediction_id: Option<String>,
    pub result: PredictionResultRaw,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PredictionResultRaw {
    pub prediction: i64,
    pub probability: f64,
    pub stage: i64,
    #[serde(rename = "histologicalType")]
    pub histological_type: String,
    #[serde(rename = "riskLevel", default)]
    pub risk_level: Option<RiskLevel>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UploadResponse {
    pub prediction: String,
    pub probability: f64,
}

pub type PredictionRecord = serde_json::Map<String, Value>;

impl PredictionResultRaw {
    pub fn validate(&self) -> Result<(), ClientError> {
        check_probability(self.probability)?;
        if !matches!(self.prediction, 0 | 1) {
            return Err(ClientError::Decode(format!(
                "prediction must be 0 or 1, got {}",
                self.prediction
            )));
        }
        Ok(())
    }
}

impl UploadResponse {
    pub fn validate(&self) -> Result<(), ClientError> {
        if self.prediction.trim().is_empty() {
            return Err(ClientError::Decode("prediction label is empty".to_string()));
        }
        check_probability(self.probability)
    }
}

fn check_probability(p: f64) -> Result<(), ClientError> {
    if p.is_finite() && (0.0..=1.0).contains(&p) {
        Ok(())
    } else {
        Err(ClientError::Decode(format!(
            "probability must lie in [0, 1], got {}",
            p
        )))
    }
}

fn id_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "user id must be a string or number, got {}",
            other
        ))),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Source {
    Biomarkers,
    Upload,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Presentation {
    pub status_text: String,
    pub risk_label: String,
    pub stage_text: String,
    pub probability_display: String,
    pub bar_width_percent: f64,
    pub recommendation: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionReportV1 {
    pub tool: String,
    pub version: String,
    pub schema_version: String,
    pub source: Source,
    pub prediction_id: Option<String>,
    pub sample: Option<BiomarkerSample>,
    pub file: Option<String>,
    pub result: Option<PredictionResult>,
    pub presentation: Option<Presentation>,
}

impl PredictionReportV1 {
    pub fn empty(tool_version: &str, source: Source) -> Self {
        Self {
            tool: "lungai-predict".to_string(),
            version: tool_version.to_string(),
            schema_version: "v1".to_string(),
            source,
            prediction_id: None,
            sample: None,
            file: None,
            result: None,
            presentation: None,
        }
    }
}
