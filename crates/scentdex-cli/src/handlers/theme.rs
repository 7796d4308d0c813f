//! Theme commands work on the store alone; no catalog is needed.

use crate::args::OutputFormat;
use crate::context::ExecutionContext;
use crate::handlers::HandlerContext;
use crate::presentation::presenters;
use anyhow::Result;
use scentdex_runtime::store::{load_theme, save_theme};
use scentdex_types::Theme;

pub fn handle_show(ctx: &ExecutionContext, format: OutputFormat) -> Result<()> {
    let handler_ctx = HandlerContext::standard(format);
    let theme = load_theme(&ctx.store());
    handler_ctx.render(presenters::present_theme(&theme, false))
}

pub fn handle_set(ctx: &ExecutionContext, name: &str, format: OutputFormat) -> Result<()> {
    let handler_ctx = HandlerContext::standard(format);
    let theme: Theme = name.parse()?;

    save_theme(&mut ctx.store(), &theme)?;
    handler_ctx.render(presenters::present_theme(&theme, true))
}

pub fn handle_toggle(ctx: &ExecutionContext, format: OutputFormat) -> Result<()> {
    let handler_ctx = HandlerContext::standard(format);

    let mut store = ctx.store();
    let theme = load_theme(&store).toggled();
    save_theme(&mut store, &theme)?;

    handler_ctx.render(presenters::present_theme(&theme, true))
}
