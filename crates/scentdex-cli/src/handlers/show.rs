use crate::args::OutputFormat;
use crate::context::ExecutionContext;
use crate::handlers::{HandlerContext, find_item};
use crate::presentation::presenters;
use anyhow::Result;

pub fn handle(ctx: &ExecutionContext, code: &str, format: OutputFormat) -> Result<()> {
    let handler_ctx = HandlerContext::standard(format);
    let display = &ctx.config()?.display;

    let browser = ctx.browser()?;
    let item = find_item(browser.catalog(), code)?;

    let view_model = presenters::present_item_detail(
        browser.catalog(),
        item,
        browser.is_favorite(code),
        display,
    );
    handler_ctx.render(view_model)
}
