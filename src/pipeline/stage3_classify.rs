use anyhow::Result;
use tracing::info;

use crate::ctx::Ctx;
use crate::pipeline::Stage;
use crate::scores::classify;

pub struct Stage3Classify;

impl Stage3Classify {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage3Classify {
    fn name(&self) -> &'static str {
        "stage3_classify"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let result = if let Some(resp) = &ctx.biomarker_response {
            classify::from_biomarkers(&resp.result)?
        } else if let Some(resp) = &ctx.upload_response {
            classify::from_upload(resp)?
        } else {
            info!("classification_skipped");
            return Ok(());
        };
        info!(
            risk_level = %result.risk_level,
            probability = result.probability,
            prediction = result.prediction,
            "prediction_classified"
        );
        ctx.result = Some(result);
        Ok(())
    }
}
