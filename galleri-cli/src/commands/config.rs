use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use galleri_core::settings::{load_settings_from, settings_path};
use galleri_sync::{Sourced, SyncConfig, mask_secret};

use crate::{AppContext, CliError};

/// Print the settings file path.
pub(crate) fn run_config_path() -> Result<(), CliError> {
    log::info!("{}", settings_path().display());
    Ok(())
}

/// Show resolved settings and their sources.
pub(crate) fn run_config_show(ctx: &AppContext) -> Result<(), CliError> {
    let path = settings_path();

    log::info!("{}", "Galleri Configuration".if_supports_color(Stdout, |t| t.bold()));
    crate::log_blank();

    if path.exists() {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(exists)".if_supports_color(Stdout, |t| t.green()),
        );
        // Surface parse errors that startup only warned about.
        load_settings_from(&path)?;
    } else {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(not found)".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    crate::log_blank();

    let catalog = &ctx.settings.catalog;
    log::info!("{}", "[catalog]".if_supports_color(Stdout, |t| t.bold()));
    log::info!("  {:<16} {}", "inventory", ctx.inventory);
    log::info!("  {:<16} {}", "page_size", catalog.effective_page_size());
    log::info!("  {:<16} {}", "collation", catalog.collation);
    log::info!("  {:<16} {}", "image_dir", catalog.image_dir);
    log::info!("  {:<16} {}", "image_extension", catalog.image_extension);
    crate::log_blank();

    let sync = SyncConfig::resolve(&ctx.settings.sync);
    log::info!("{}", "[sync]".if_supports_color(Stdout, |t| t.bold()));
    show_field("sheet_id", &sync.sheet_id, false);
    show_field("api_key", &sync.api_key, true);
    show_field("range", &sync.range, false);
    let output = Sourced {
        value: sync.output.value.as_ref().map(|p| p.display().to_string()),
        source: sync.output.source,
    };
    show_field("output", &output, false);

    Ok(())
}

fn show_field(name: &str, field: &Sourced<String>, secret: bool) {
    let source = format!("({})", field.source);
    match &field.value {
        Some(value) => {
            let shown = if secret { mask_secret(value) } else { value.clone() };
            log::info!(
                "  {:<16} {} {}",
                name,
                shown,
                source.if_supports_color(Stdout, |t| t.dimmed()),
            );
        }
        None => {
            log::info!(
                "  {:<16} {}",
                name,
                "not set".if_supports_color(Stdout, |t| t.red()),
            );
        }
    }
}
