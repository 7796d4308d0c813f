use crate::args::OutputFormat;
use crate::context::ExecutionContext;
use crate::handlers::{HandlerContext, find_item};
use crate::presentation::presenters;
use anyhow::Result;

pub fn handle(
    ctx: &ExecutionContext,
    code: &str,
    limit: Option<usize>,
    format: OutputFormat,
) -> Result<()> {
    let handler_ctx = HandlerContext::standard(format);
    let limit = match limit {
        Some(limit) => limit,
        None => ctx.config()?.display.similar_limit,
    };

    let catalog = ctx.catalog()?;
    let item = find_item(&catalog, code)?;

    let view_model = presenters::present_similar(&catalog, item, limit);
    handler_ctx.render(view_model)
}
