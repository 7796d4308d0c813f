use crate::args::{FilterArgs, OutputFormat};
use crate::context::ExecutionContext;
use crate::handlers::HandlerContext;
use crate::presentation::presenters;
use anyhow::{Context, Result};
use scentdex_runtime::export_csv;
use std::path::Path;

pub fn handle(
    ctx: &ExecutionContext,
    filters: &FilterArgs,
    output: &Path,
    format: OutputFormat,
) -> Result<()> {
    let handler_ctx = HandlerContext::standard(format);

    let mut browser = ctx.browser()?;
    browser.dispatch_all(&filters.to_actions())?;

    let rows = export_csv(output, &browser.results())
        .with_context(|| format!("Failed to export to {}", output.display()))?;

    handler_ctx.render(presenters::present_export(output, rows))
}
