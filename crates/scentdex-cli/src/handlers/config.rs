use crate::args::OutputFormat;
use crate::context::ExecutionContext;
use crate::handlers::HandlerContext;
use crate::presentation::presenters;
use anyhow::{Context, Result};
use scentdex_runtime::{Config, expand_tilde};

pub fn handle_show(ctx: &ExecutionContext, format: OutputFormat) -> Result<()> {
    let handler_ctx = HandlerContext::standard(format);

    let config = ctx.config()?;
    let view_model = presenters::present_config(
        ctx.data_dir(),
        &ctx.config_path(),
        &ctx.catalog_path()?,
        config,
    );
    handler_ctx.render(view_model)
}

pub fn handle_set_catalog(ctx: &ExecutionContext, path: &str, format: OutputFormat) -> Result<()> {
    let handler_ctx = HandlerContext::standard(format);

    let catalog_path = std::path::absolute(expand_tilde(path))
        .with_context(|| format!("Invalid catalog path: {}", path))?;

    let config_path = ctx.config_path();
    let mut config = Config::load_from(&config_path)?;
    config.set_catalog_path(&catalog_path);
    config.save_to(&config_path)?;

    let view_model =
        presenters::present_catalog_set(ctx.data_dir(), &config_path, &catalog_path, &config);
    handler_ctx.render(view_model)
}
