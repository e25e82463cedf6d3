use anyhow::Result;
use tracing::info;

use crate::ctx::Ctx;
use crate::pipeline::Stage;
use crate::transport::ApiClient;

pub struct Stage0Session;

impl Stage0Session {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage0Session {
    fn name(&self) -> &'static str {
        "stage0_session"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let token = ctx.session.current()?;
        info!(user = %token.claims.sub, exp = token.claims.exp, "session_ready");
        ctx.client = Some(ApiClient::new(&ctx.api, Some(token))?);
        Ok(())
    }
}
