use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use anyhow::{Context, Result};

use crate::ctx::Ctx;
use crate::schema::v1::{PredictionReportV1, Presentation};
use crate::scores::PredictionResult;
use crate::scores::classify;

pub fn presentation(result: &PredictionResult) -> Presentation {
    Presentation {
        status_text: classify::status_text(result).to_string(),
        risk_label: format!("{} Risk Level", result.risk_level),
        stage_text: classify::stage_text(result),
        probability_display: classify::probability_display(result.probability),
        bar_width_percent: classify::bar_width_percent(result.probability),
        recommendation: result.risk_level.recommendation().to_string(),
    }
}

pub fn build_report(ctx: &Ctx) -> PredictionReportV1 {
    let mut report = ctx.report.clone();
    report.sample = ctx.sample.clone();
    report.file = ctx.upload_file.as_ref().map(|f| f.file_name.clone());
    report.result = ctx.result.clone();
    report.presentation = ctx.result.as_ref().map(presentation);
    report
}

pub fn write_json(path: &Path, report: &PredictionReportV1) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
    }
    let file =
        File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, report)?;
    Ok(())
}
