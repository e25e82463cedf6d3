pub mod classify;

use std::fmt;

use serde::{Deserialize, Serialize};

// Both comparisons are strict.
pub const HIGH_RISK_ABOVE: f64 = 0.7;
pub const MEDIUM_RISK_ABOVE: f64 = 0.4;

pub const MALIGNANT_LABEL: &str = "Maligant Tumor";

pub const UPLOAD_STAGE: i64 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    pub fn recommendation(&self) -> &'static str {
        match self {
            Self::High => {
                "Immediate medical attention required. Please consult with an oncologist as soon as possible."
            }
            Self::Medium => {
                "Follow-up examination recommended. Schedule a consultation with your healthcare provider."
            }
            Self::Low => "Continue regular check-ups and maintain healthy lifestyle habits.",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionResult {
    pub prediction: u8,
    pub probability: f64,
    pub stage: i64,
    pub risk_level: RiskLevel,
    pub histological_type: String,
}
