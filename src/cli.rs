use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::intake::biomarker::BiomarkerField;
use crate::intake::upload::UploadKind;
use crate::transport::{DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS};

#[derive(Debug, Parser)]
#[command(
    name = "lungai-predict",
    version,
    about = "Client for the LungAI lung cancer prediction service"
)]
pub struct Cli {
    #[arg(long, global = true, env = "LUNGAI_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    #[arg(
        long,
        global = true,
        env = "LUNGAI_TOKEN_FILE",
        help = "File holding the bearer token [default: ~/.lungai/auth_token]"
    )]
    pub token_file: Option<PathBuf>,

    #[arg(long, global = true, env = "LUNGAI_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    #[command(about = "Sign in and store the issued token")]
    Login(LoginArgs),
    #[command(about = "Forget the stored token")]
    Logout,
    #[command(about = "Show who the stored token belongs to")]
    Whoami,
    #[command(about = "Submit ten biomarker values for a prediction")]
    Biomarkers(BiomarkerArgs),
    #[command(about = "Upload one JPG/PNG image for a prediction")]
    Upload(UploadArgs),
    #[command(about = "Fetch an earlier prediction record")]
    Prediction(PredictionArgs),
    #[command(about = "Interactive portfolio terminal")]
    Terminal,
}

#[derive(Debug, Args)]
pub struct LoginArgs {
    #[arg(long)]
    pub email: String,

    #[arg(long, env = "LUNGAI_PASSWORD", hide_env_values = true)]
    pub password: String,
}

#[derive(Debug, Args)]
pub struct BiomarkerArgs {
    #[arg(long, help = "JSON draft with camelCase biomarker fields")]
    pub input: Option<PathBuf>,

    #[arg(long, help = "Write the JSON report here")]
    pub out: Option<PathBuf>,

    #[arg(long, help = "Proline (μmol/L)")]
    pub proline: Option<String>,

    #[arg(long, help = "L-Kynurenine (μmol/L)")]
    pub l_kynurenine: Option<String>,

    #[arg(long, help = "Spermidine (μmol/L)")]
    pub spermidine: Option<String>,

    #[arg(long, help = "Amino-Hippuric Acid (μmol/L)")]
    pub amino_hippuric_acid: Option<String>,

    #[arg(long, help = "Palmitoyl-L-Carnitine (μmol/L)")]
    pub palmitoyl_l_carnitine: Option<String>,

    #[arg(long, help = "Taurine (μmol/L)")]
    pub taurine: Option<String>,

    #[arg(long, help = "Phenylalanine (μmol/L)")]
    pub phenylalanine: Option<String>,

    #[arg(long, help = "L-Valine (μmol/L)")]
    pub l_valine: Option<String>,

    #[arg(long, help = "o-Tyr (μmol/L)")]
    pub o_tyr: Option<String>,

    #[arg(long, help = "Carnitine (μmol/L)")]
    pub carnitine: Option<String>,
}

impl BiomarkerArgs {
    pub fn values(&self) -> Vec<(BiomarkerField, &str)> {
        let all = [
            (BiomarkerField::Proline, &self.proline),
            (BiomarkerField::LKynurenine, &self.l_kynurenine),
            (BiomarkerField::Spermidine, &self.spermidine),
            (BiomarkerField::AminoHippuricAcid, &self.amino_hippuric_acid),
            (BiomarkerField::PalmitoylLCarnitine, &self.palmitoyl_l_carnitine),
            (BiomarkerField::Taurine, &self.taurine),
            (BiomarkerField::Phenylalanine, &self.phenylalanine),
            (BiomarkerField::LValine, &self.l_valine),
            (BiomarkerField::OTyr, &self.o_tyr),
            (BiomarkerField::Carnitine, &self.carnitine),
        ];
        all.into_iter()
            .filter_map(|(field, value)| value.as_deref().map(|v| (field, v)))
            .collect()
    }
}

#[derive(Debug, Args)]
pub struct UploadArgs {
    #[arg(long, num_args = 1.., required = true, help = "Image to upload (JPG, JPEG or PNG)")]
    pub file: Vec<PathBuf>,

    #[arg(long, value_enum, default_value_t = KindArg::MriScan)]
    pub kind: KindArg,

    #[arg(long, help = "Write the JSON report here")]
    pub out: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct PredictionArgs {
    #[arg(long)]
    pub id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    BloodTest,
    MriScan,
}

impl From<KindArg> for UploadKind {
    fn from(arg: KindArg) -> Self {
        match arg {
            KindArg::BloodTest => UploadKind::BloodTest,
            KindArg::MriScan => UploadKind::MriScan,
        }
    }
}
