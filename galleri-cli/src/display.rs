//! Shared output helpers: catalog loading with a spinner and one-line item
//! summaries.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use galleri_catalog::{Catalog, InventorySource, load_or_empty};
use galleri_core::{CatalogItem, format_price};

use crate::AppContext;

/// Spinner shown during network fetches; hidden with `--quiet`.
pub(crate) fn spinner(quiet: bool, msg: String) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("  {spinner:.cyan} {msg}") {
        pb.set_style(style.tick_chars("/-\\|"));
    }
    pb.set_message(msg);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Load the catalog for a read command. Failures degrade to an empty
/// catalog with a warning.
pub(crate) fn load(ctx: &AppContext) -> Catalog {
    match &ctx.inventory {
        InventorySource::Url(url) => {
            let pb = spinner(ctx.quiet, format!("Fetching {url}"));
            let catalog = load_or_empty(&ctx.inventory);
            pb.finish_and_clear();
            catalog
        }
        InventorySource::File(_) => load_or_empty(&ctx.inventory),
    }
}

/// One line per item: id, name, price and availability.
pub(crate) fn item_line(item: &CatalogItem) -> String {
    let sold = if item.available {
        String::new()
    } else {
        format!(" {}", "(såld)".if_supports_color(Stdout, |t| t.red()))
    };
    format!(
        "  {:<12} {}  {}{}",
        item.id.if_supports_color(Stdout, |t| t.dimmed()),
        item.name.if_supports_color(Stdout, |t| t.bold()),
        format_price(item.price),
        sold,
    )
}

/// Log a list of items, or a notice when there are none.
pub(crate) fn log_items<'a>(items: impl IntoIterator<Item = &'a CatalogItem>, empty: &str) {
    let mut any = false;
    for item in items {
        log::info!("{}", item_line(item));
        any = true;
    }
    if !any {
        log::info!("  {}", empty.if_supports_color(Stdout, |t| t.dimmed()));
    }
}
