use tracing::warn;

use crate::error::ClientError;
use crate::schema::v1::{PredictionResultRaw, UploadResponse};
use crate::scores::{
    HIGH_RISK_ABOVE, MALIGNANT_LABEL, MEDIUM_RISK_ABOVE, PredictionResult, RiskLevel, UPLOAD_STAGE,
};

const BAR_CELLS: usize = 20;

pub fn classify_risk(probability: f64) -> RiskLevel {
    if probability > HIGH_RISK_ABOVE {
        RiskLevel::High
    } else if probability > MEDIUM_RISK_ABOVE {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

pub fn prediction_flag(label: &str) -> u8 {
    if label == MALIGNANT_LABEL { 1 } else { 0 }
}

pub fn from_upload(raw: &UploadResponse) -> Result<PredictionResult, ClientError> {
    raw.validate()?;
    Ok(PredictionResult {
        prediction: prediction_flag(&raw.prediction),
        probability: raw.probability,
        stage: UPLOAD_STAGE,
        risk_level: classify_risk(raw.probability),
        histological_type: raw.prediction.clone(),
    })
}

// Local tier wins over the one the service sends.
pub fn from_biomarkers(raw: &PredictionResultRaw) -> Result<PredictionResult, ClientError> {
    raw.validate()?;
    let risk_level = classify_risk(raw.probability);
    if let Some(remote) = raw.risk_level {
        if remote != risk_level {
            warn!(
                remote = %remote,
                local = %risk_level,
                probability = raw.probability,
                "risk_level_mismatch"
            );
        }
    }
    Ok(PredictionResult {
        prediction: raw.prediction as u8,
        probability: raw.probability,
        stage: raw.stage,
        risk_level,
        histological_type: raw.histological_type.clone(),
    })
}

pub fn status_text(result: &PredictionResult) -> &'static str {
    if result.histological_type == MALIGNANT_LABEL {
        "Malignant Tumor Detected"
    } else if result.prediction == 1 {
        "Positive"
    } else {
        "Negative"
    }
}

pub fn stage_text(result: &PredictionResult) -> String {
    format!("Stage {}", result.stage)
}

pub fn bar_width_percent(probability: f64) -> f64 {
    probability * 100.0
}

pub fn probability_display(probability: f64) -> String {
    format!("{:.1}%", bar_width_percent(probability))
}

pub fn probability_bar(probability: f64) -> String {
    let filled = (probability.clamp(0.0, 1.0) * BAR_CELLS as f64).round() as usize;
    format!("[{}{}]", "#".repeat(filled), ".".repeat(BAR_CELLS - filled))
}
