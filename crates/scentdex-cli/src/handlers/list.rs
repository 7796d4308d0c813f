use crate::args::{FilterArgs, OutputFormat, ViewModeArgs};
use crate::context::ExecutionContext;
use crate::handlers::HandlerContext;
use crate::presentation::presenters;
use anyhow::Result;

pub fn handle(
    ctx: &ExecutionContext,
    filters: &FilterArgs,
    limit: Option<usize>,
    format: OutputFormat,
    view_mode: &ViewModeArgs,
) -> Result<()> {
    let handler_ctx = HandlerContext::new(format, view_mode);
    let limit = match limit {
        Some(limit) => limit,
        None => ctx.config()?.display.default_limit,
    };

    let mut browser = ctx.browser()?;
    browser.dispatch_all(&filters.to_actions())?;

    let view_model = presenters::present_result_list(browser.session(), limit);
    handler_ctx.render(view_model)
}
