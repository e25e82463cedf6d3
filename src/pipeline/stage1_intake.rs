use anyhow::Result;
use tracing::info;

use crate::ctx::{Ctx, Submission};
use crate::intake::upload::{self, UploadFile};
use crate::pipeline::Stage;

pub struct Stage1Intake;

impl Stage1Intake {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage1Intake {
    fn name(&self) -> &'static str {
        "stage1_intake"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        match &ctx.submission {
            Submission::Biomarkers(draft) => {
                let sample = draft.to_sample()?;
                ctx.report.sample = Some(sample.clone());
                ctx.sample = Some(sample);
                info!("biomarker_sample_ready");
            }
            Submission::Upload { files, kind } => {
                let path = upload::select(files)?;
                let file = UploadFile::read(&path)?;
                info!(
                    file = %file.file_name,
                    mime = file.mime,
                    kind = kind.as_str(),
                    "upload_file_ready"
                );
                ctx.report.file = Some(file.file_name.clone());
                ctx.upload_file = Some(file);
            }
        }
        Ok(())
    }
}
