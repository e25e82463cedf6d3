use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::ctx::{Ctx, Submission};
use crate::intake::{biomarker, upload};
use crate::pipeline::Stage;

pub struct Stage2Submit;

impl Stage2Submit {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage2Submit {
    fn name(&self) -> &'static str {
        "stage2_submit"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let client = ctx.client()?;
        match &ctx.submission {
            Submission::Biomarkers(draft) => {
                let response = biomarker::submit(client, draft)?;
                info!(
                    prediction_id = response.prediction_id.as_deref().unwrap_or("-"),
                    "biomarker_response_ready"
                );
                ctx.report.prediction_id = response.prediction_id.clone();
                ctx.biomarker_response = Some(response);
            }
            Submission::Upload { kind, .. } => {
                let file = ctx
                    .upload_file
                    .as_ref()
                    .context("upload file not prepared")?;
                match upload::submit(client, &ctx.upload_slot, file, *kind)? {
                    Some(response) => {
                        info!(label = %response.prediction, "upload_response_ready");
                        ctx.upload_response = Some(response);
                    }
                    None => {
                        warn!("upload_skipped_busy");
                        ctx.warnings
                            .push("an upload is already in progress; file ignored".to_string());
                    }
                }
            }
        }
        Ok(())
    }
}
