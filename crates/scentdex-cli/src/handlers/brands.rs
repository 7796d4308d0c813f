use crate::args::{OutputFormat, ViewModeArgs};
use crate::context::ExecutionContext;
use crate::handlers::HandlerContext;
use crate::presentation::presenters;
use anyhow::Result;

pub fn handle(ctx: &ExecutionContext, format: OutputFormat, view_mode: &ViewModeArgs) -> Result<()> {
    let handler_ctx = HandlerContext::new(format, view_mode);
    let catalog = ctx.catalog()?;
    handler_ctx.render(presenters::present_brands(&catalog))
}
