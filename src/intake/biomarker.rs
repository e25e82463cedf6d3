use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::ClientError;
use crate::schema::v1::BiomarkerResponse;
use crate::transport::ApiClient;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BiomarkerField {
    Proline,
    LKynurenine,
    Spermidine,
    AminoHippuricAcid,
    PalmitoylLCarnitine,
    Taurine,
    Phenylalanine,
    LValine,
    OTyr,
    Carnitine,
}

impl BiomarkerField {
    pub const ALL: [BiomarkerField; 10] = [
        Self::Proline,
        Self::LKynurenine,
        Self::Spermidine,
        Self::AminoHippuricAcid,
        Self::PalmitoylLCarnitine,
        Self::Taurine,
        Self::Phenylalanine,
        Self::LValine,
        Self::OTyr,
        Self::Carnitine,
    ];

    pub fn wire_name(&self) -> &'static str {
        match self {
            Self::Proline => "proline",
            Self::LKynurenine => "lKynurenine",
            Self::Spermidine => "spermidine",
            Self::AminoHippuricAcid => "aminoHippuricAcid",
            Self::PalmitoylLCarnitine => "palmitoylLCarnitine",
            Self::Taurine => "taurine",
            Self::Phenylalanine => "phenylalanine",
            Self::LValine => "lValine",
            Self::OTyr => "oTyr",
            Self::Carnitine => "carnitine",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Proline => "Proline (μmol/L)",
            Self::LKynurenine => "L-Kynurenine (μmol/L)",
            Self::Spermidine => "Spermidine (μmol/L)",
            Self::AminoHippuricAcid => "Amino-Hippuric Acid (μmol/L)",
            Self::PalmitoylLCarnitine => "Palmitoyl-L-Carnitine (μmol/L)",
            Self::Taurine => "Taurine (μmol/L)",
            Self::Phenylalanine => "Phenylalanine (μmol/L)",
            Self::LValine => "L-Valine (μmol/L)",
            Self::OTyr => "o-Tyr (μmol/L)",
            Self::Carnitine => "Carnitine (μmol/L)",
        }
    }
}

impl FromStr for BiomarkerField {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|f| f.wire_name() == s)
            .ok_or_else(|| ClientError::Validation(format!("unknown biomarker field '{}'", s)))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BiomarkerDraft {
    #[serde(default)]
    pub proline: Option<f64>,
    #[serde(default)]
    pub l_kynurenine: Option<f64>,
    #[serde(default)]
    pub spermidine: Option<f64>,
    #[serde(default)]
    pub amino_hippuric_acid: Option<f64>,
    #[serde(default)]
    pub palmitoyl_l_carnitine: Option<f64>,
    #[serde(default)]
    pub taurine: Option<f64>,
    #[serde(default)]
    pub phenylalanine: Option<f64>,
    #[serde(default)]
    pub l_valine: Option<f64>,
    #[serde(default)]
    pub o_tyr: Option<f64>,
    #[serde(default)]
    pub carnitine: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BiomarkerSample {
    pub proline: f64,
    pub l_kynurenine: f64,
    pub spermidine: f64,
    pub amino_hippuric_acid: f64,
    pub palmitoyl_l_carnitine: f64,
    pub taurine: f64,
    pub phenylalanine: f64,
    pub l_valine: f64,
    pub o_tyr: f64,
    pub carnitine: f64,
}

impl BiomarkerDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read biomarker draft {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("malformed biomarker draft {}", path.display()))
    }

    fn slot_mut(&mut self, field: BiomarkerField) -> &mut Option<f64> {
        match field {
            BiomarkerField::Proline => &mut self.proline,
            BiomarkerField::LKynurenine => &mut self.l_kynurenine,
            BiomarkerField::Spermidine => &mut self.spermidine,
            BiomarkerField::AminoHippuricAcid => &mut self.amino_hippuric_acid,
            BiomarkerField::PalmitoylLCarnitine => &mut self.palmitoyl_l_carnitine,
            BiomarkerField::Taurine => &mut self.taurine,
            BiomarkerField::Phenylalanine => &mut self.phenylalanine,
            BiomarkerField::LValine => &mut self.l_valine,
            BiomarkerField::OTyr => &mut self.o_tyr,
            BiomarkerField::Carnitine => &mut self.carnitine,
        }
    }

    pub fn get(&self, field: BiomarkerField) -> Option<f64> {
        match field {
            BiomarkerField::Proline => self.proline,
            BiomarkerField::LKynurenine => self.l_kynurenine,
            BiomarkerField::Spermidine => self.spermidine,
            BiomarkerField::AminoHippuricAcid => self.amino_hippuric_acid,
            BiomarkerField::PalmitoylLCarnitine => self.palmitoyl_l_carnitine,
            BiomarkerField::Taurine => self.taurine,
            BiomarkerField::Phenylalanine => self.phenylalanine,
            BiomarkerField::LValine => self.l_valine,
            BiomarkerField::OTyr => self.o_tyr,
            BiomarkerField::Carnitine => self.carnitine,
        }
    }

    pub fn set(&mut self, field: BiomarkerField, value: Option<f64>) {
        *self.slot_mut(field) = value;
    }

    pub fn set_field(&mut self, name: &str, raw: &str) -> Result<(), ClientError> {
        let field: BiomarkerField = name.parse()?;
        let text = raw.trim();
        let value = if text.is_empty() {
            None
        } else {
            let v: f64 = text.parse().map_err(|_| {
                ClientError::Validation(format!("{} is not a number: '{}'", name, text))
            })?;
            if !v.is_finite() {
                return Err(ClientError::Validation(format!(
                    "{} must be finite, got '{}'",
                    name, text
                )));
            }
            Some(v)
        };
        self.set(field, value);
        Ok(())
    }

    pub fn merge(&mut self, other: &BiomarkerDraft) {
        for field in BiomarkerField::ALL {
            if let Some(v) = other.get(field) {
                self.set(field, Some(v));
            }
        }
    }

    pub fn missing(&self) -> Vec<BiomarkerField> {
        BiomarkerField::ALL
            .iter()
            .copied()
            .filter(|f| self.get(*f).is_none())
            .collect()
    }

    pub fn to_sample(&self) -> Result<BiomarkerSample, ClientError> {
        let missing = self.missing();
        if !missing.is_empty() {
            let names: Vec<&str> = missing.iter().map(|f| f.wire_name()).collect();
            return Err(ClientError::Validation(format!(
                "required fields missing: {}",
                names.join(", ")
            )));
        }
        let value = |f: BiomarkerField| self.get(f).unwrap_or_default();
        Ok(BiomarkerSample {
            proline: value(BiomarkerField::Proline),
            l_kynurenine: value(BiomarkerField::LKynurenine),
            spermidine: value(BiomarkerField::Spermidine),
            amino_hippuric_acid: value(BiomarkerField::AminoHippuricAcid),
            palmitoyl_l_carnitine: value(BiomarkerField::PalmitoylLCarnitine),
            taurine: value(BiomarkerField::Taurine),
            phenylalanine: value(BiomarkerField::Phenylalanine),
            l_valine: value(BiomarkerField::LValine),
            o_tyr: value(BiomarkerField::OTyr),
            carnitine: value(BiomarkerField::Carnitine),
        })
    }
}

pub fn submit(client: &ApiClient, draft: &BiomarkerDraft) -> Result<BiomarkerResponse, ClientError> {
    let sample = draft.to_sample()?;
    let response: BiomarkerResponse = client
        .post("/biomarkers", &sample)
        .map_err(|err| match err {
            ClientError::RequestFailed(_) => {
                ClientError::RequestFailed("failed to submit biomarker data".to_string())
            }
            other => other,
        })?;
    response.result.validate()?;
    Ok(response)
}
