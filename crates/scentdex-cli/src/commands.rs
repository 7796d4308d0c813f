use super::args::{Cli, Commands, ConfigCommand, FavoriteCommand, LogLevel, ThemeCommand, hints};
use super::context::ExecutionContext;
use super::handlers;
use super::logging::{self, LogTarget};
use anyhow::Result;
use scentdex_runtime::resolve_data_dir;

pub fn run(cli: Cli) -> Result<()> {
    // The browser owns the terminal; keep stderr quiet while it runs.
    let (level, target) = match cli.command {
        Some(Commands::Browse) => (LogLevel::Error, LogTarget::Interactive),
        _ => (cli.log_level, LogTarget::Console),
    };
    logging::init(level, target);

    let data_dir = resolve_data_dir(cli.data_dir.as_deref())?;
    let ctx = ExecutionContext::new(data_dir, cli.catalog);
    let format = cli.format;

    let Some(command) = cli.command else {
        return show_guidance(&ctx);
    };

    match command {
        Commands::List {
            filters,
            limit,
            view_mode,
        } => handlers::list::handle(&ctx, &filters, limit, format, &view_mode),

        Commands::Facets {
            filters,
            facet,
            view_mode,
        } => handlers::facets::handle(&ctx, &filters, facet, format, &view_mode),

        Commands::Show { code } => handlers::show::handle(&ctx, &code, format),

        Commands::Similar { code, limit } => handlers::similar::handle(&ctx, &code, limit, format),

        Commands::Stats { filters, facet } => handlers::stats::handle(&ctx, &filters, facet, format),

        Commands::Brands { view_mode } => handlers::brands::handle(&ctx, format, &view_mode),

        Commands::Favorite { command } => match command {
            FavoriteCommand::Toggle { code } => {
                handlers::favorite::handle_toggle(&ctx, &code, format)
            }
            FavoriteCommand::List { view_mode } => {
                handlers::favorite::handle_list(&ctx, format, &view_mode)
            }
        },

        Commands::Theme { command } => match command {
            ThemeCommand::Show => handlers::theme::handle_show(&ctx, format),
            ThemeCommand::Set { name } => handlers::theme::handle_set(&ctx, &name, format),
            ThemeCommand::Toggle => handlers::theme::handle_toggle(&ctx, format),
        },

        Commands::Export { filters, output } => {
            handlers::export::handle(&ctx, &filters, &output, format)
        }

        Commands::Config { command } => match command {
            ConfigCommand::Show => handlers::config::handle_show(&ctx, format),
            ConfigCommand::SetCatalog { path } => {
                handlers::config::handle_set_catalog(&ctx, &path, format)
            }
        },

        Commands::Browse => handlers::browse::handle(&ctx),
    }
}

fn show_guidance(ctx: &ExecutionContext) -> Result<()> {
    let catalog_path = ctx.catalog_path()?;

    println!("scentdex - Fragrance catalog browser\n");

    if !catalog_path.exists() {
        println!("No catalog found at {}\n", catalog_path.display());
        println!("Get started:");
        println!("  {}", hints::cmd::CONFIG_SET_CATALOG);
        println!("  or pass --catalog <PATH> to any command\n");
    } else {
        println!("Quick commands:");
        println!("  {:<34}# Browse interactively", hints::cmd::BROWSE);
        println!("  {:<34}# List items", hints::cmd::LIST);
        println!("  {:<34}# See which filters still match", hints::cmd::FACETS);
        println!("  {:<34}# Item details", hints::cmd::SHOW);
        println!("  {:<34}# Scent-alike items", hints::cmd::SIMILAR);
        println!("  {:<34}# Brands and item counts", hints::cmd::BRANDS);
        println!("  {:<34}# Star an item", hints::cmd::FAVORITE_TOGGLE);
        println!("  {:<34}# Your favorites\n", hints::cmd::LIST_FAVORITES);
    }

    println!("For more commands:");
    println!("  scentdex --help");

    Ok(())
}
