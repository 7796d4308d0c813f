use crate::args::{FacetArg, FilterArgs, OutputFormat, ViewModeArgs};
use crate::context::ExecutionContext;
use crate::handlers::HandlerContext;
use crate::presentation::presenters;
use anyhow::Result;

pub fn handle(
    ctx: &ExecutionContext,
    filters: &FilterArgs,
    facet: Option<FacetArg>,
    format: OutputFormat,
    view_mode: &ViewModeArgs,
) -> Result<()> {
    let handler_ctx = HandlerContext::new(format, view_mode);

    let mut browser = ctx.browser()?;
    browser.dispatch_all(&filters.to_actions())?;

    let view_model = presenters::present_facets(browser.session(), facet.map(Into::into));
    handler_ctx.render(view_model)
}
