use crate::args::{OutputFormat, ViewModeArgs};
use crate::context::ExecutionContext;
use crate::handlers::{HandlerContext, find_item};
use crate::presentation::presenters;
use anyhow::Result;
use scentdex_engine::Action;

pub fn handle_toggle(ctx: &ExecutionContext, code: &str, format: OutputFormat) -> Result<()> {
    let handler_ctx = HandlerContext::standard(format);

    let mut browser = ctx.browser()?;
    let item = find_item(browser.catalog(), code)?.clone();

    browser.dispatch(&Action::ToggleFavorite(code.to_string()))?;

    let total = browser.session().state().favorites.len();
    let view_model = presenters::present_favorite_toggle(&item, browser.is_favorite(code), total);
    handler_ctx.render(view_model)
}

pub fn handle_list(
    ctx: &ExecutionContext,
    format: OutputFormat,
    view_mode: &ViewModeArgs,
) -> Result<()> {
    let handler_ctx = HandlerContext::new(format, view_mode);

    let mut browser = ctx.browser()?;
    browser.dispatch(&Action::ToggleFavoritesView)?;

    let limit = browser.session().state().favorites.len();
    let view_model = presenters::present_result_list(browser.session(), limit);
    handler_ctx.render(view_model)
}
