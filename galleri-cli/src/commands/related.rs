use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use galleri_catalog::{related_section, score};

use crate::display::{item_line, load};
use crate::{AppContext, CliError};

/// List works related to `id`, best match first.
pub(crate) fn run_related(ctx: &AppContext, id: &str, limit: usize) -> Result<(), CliError> {
    let catalog = load(ctx);
    let focal = match catalog.find_item(Some(id)) {
        Ok(item) => item,
        Err(e) => {
            log::warn!("{e}");
            return Ok(());
        }
    };

    log::info!(
        "{} {}",
        "Related to".if_supports_color(Stdout, |t| t.bold()),
        focal.name.if_supports_color(Stdout, |t| t.bold()),
    );
    match related_section(focal, catalog.items(), limit) {
        Some(related) => {
            for item in related {
                log::info!(
                    "{}  {}",
                    item_line(item),
                    format!("score {}", score(focal, item)).if_supports_color(Stdout, |t| t.dimmed())
                );
            }
        }
        None => log::info!("  No other works in the inventory."),
    }
    Ok(())
}
