use crate::args::{FacetArg, FilterArgs, OutputFormat};
use crate::context::ExecutionContext;
use crate::handlers::HandlerContext;
use crate::presentation::presenters;
use anyhow::Result;
use scentdex_engine::facet_statistics;

pub fn handle(
    ctx: &ExecutionContext,
    filters: &FilterArgs,
    facet: FacetArg,
    format: OutputFormat,
) -> Result<()> {
    let handler_ctx = HandlerContext::standard(format);

    let mut browser = ctx.browser()?;
    browser.dispatch_all(&filters.to_actions())?;

    let state = browser.session().state();
    let distribution = facet_statistics(
        browser.catalog(),
        &state.filters,
        &state.favorites,
        facet.into(),
    );

    handler_ctx.render(presenters::present_stats(&distribution))
}
