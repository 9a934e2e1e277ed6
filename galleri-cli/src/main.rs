//! galleri CLI
//!
//! Command-line front end for the gallery inventory: sync the spreadsheet
//! into the inventory file and browse the catalog the way the site does.

mod cli_types;
mod commands;
mod display;
mod error;

use std::io::Write;

use clap::Parser;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use galleri_catalog::InventorySource;
use galleri_core::Settings;

use cli_types::{Cli, Commands, ConfigAction};
pub(crate) use error::CliError;

/// Resolved state shared by every command.
pub(crate) struct AppContext {
    pub settings: Settings,
    pub inventory: InventorySource,
    pub quiet: bool,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.quiet, cli.verbose);

    let settings = galleri_core::settings::load_settings_or_default();
    let inventory = InventorySource::parse(
        cli.inventory
            .as_deref()
            .unwrap_or(&settings.catalog.inventory),
    );
    let ctx = AppContext {
        settings,
        inventory,
        quiet: cli.quiet,
    };

    let result = match cli.command {
        Commands::Sync {
            csv,
            output,
            sheet_id,
            range,
            dry_run,
        } => commands::sync::run_sync(
            &ctx,
            commands::sync::SyncArgs {
                csv,
                output,
                sheet_id,
                range,
                dry_run,
            },
        ),
        Commands::Browse {
            category,
            sort,
            page,
        } => commands::browse::run_browse(&ctx, category.as_deref(), sort, page),
        Commands::Show { id, variant, size } => {
            commands::show::run_show(&ctx, &id, variant.as_deref(), size.as_deref())
        }
        Commands::Related { id, limit } => commands::related::run_related(&ctx, &id, limit),
        Commands::Featured { limit } => commands::featured::run_featured(&ctx, limit),
        Commands::Categories => commands::categories::run_categories(&ctx),
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::run_config_show(&ctx),
            ConfigAction::Path => commands::config::run_config_path(),
        },
    };

    if let Err(e) = result {
        log::error!("{e}");
        std::process::exit(1);
    }
}

/// Install the logger used for all CLI output.
///
/// Info-level lines are printed bare so that `log::info!` doubles as normal
/// output. `--verbose` switches to timestamped records at debug level.
/// `RUST_LOG` overrides the level either way.
fn init_logging(quiet: bool, verbose: bool) {
    let level = if quiet {
        log::LevelFilter::Warn
    } else if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder.filter_level(level);
    builder.target(env_logger::Target::Stdout);
    if verbose {
        builder.format_timestamp_millis();
    } else {
        builder.format(|buf, record| match record.level() {
            log::Level::Info => writeln!(buf, "{}", record.args()),
            log::Level::Warn => writeln!(
                buf,
                "{} {}",
                "warning:".if_supports_color(Stdout, |t| t.yellow()),
                record.args()
            ),
            log::Level::Error => writeln!(
                buf,
                "{} {}",
                "error:".if_supports_color(Stdout, |t| t.red()),
                record.args()
            ),
            level => writeln!(buf, "[{level}] {}", record.args()),
        });
    }
    builder.parse_default_env();
    builder.init();
}

/// Print an empty line at info level.
pub(crate) fn log_blank() {
    log::info!("");
}
