use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use galleri_catalog::{Selection, category_query, product_url, validate_selection};
use galleri_core::{CatalogItem, color_value, format_price};

use crate::display::load;
use crate::{AppContext, CliError};

/// Show the detail page for `id`. With `--variant`/`--size`, also validate
/// the selection and print the inquiry it would send.
pub(crate) fn run_show(
    ctx: &AppContext,
    id: &str,
    variant: Option<&str>,
    size: Option<&str>,
) -> Result<(), CliError> {
    let catalog = load(ctx);
    let item = match catalog.find_item(Some(id)) {
        Ok(item) => item,
        Err(e) => {
            log::warn!("{e}");
            log::info!("  Tillbaka till galleriet: {}", category_query(""));
            return Ok(());
        }
    };

    log_detail(ctx, item);

    if variant.is_some() || size.is_some() {
        crate::log_blank();
        match validate_selection(item, &Selection::new(variant, size)) {
            Ok(inquiry) => {
                log::info!(
                    "{} {}",
                    "\u{2714}".if_supports_color(Stdout, |t| t.green()),
                    inquiry.subject.if_supports_color(Stdout, |t| t.bold()),
                );
                for line in inquiry.body.lines() {
                    log::info!("  {line}");
                }
            }
            Err(e) => log::warn!("{e}"),
        }
    }
    Ok(())
}

fn log_detail(ctx: &AppContext, item: &CatalogItem) {
    let images = ctx.settings.catalog.image_resolver();

    log::info!("{}", item.name.if_supports_color(Stdout, |t| t.bold()));
    log::info!(
        "  {}",
        product_url(&item.id).if_supports_color(Stdout, |t| t.dimmed())
    );
    crate::log_blank();

    log::info!("  Price:     {}", format_price(item.price));
    let status = if item.available {
        "available".if_supports_color(Stdout, |t| t.green()).to_string()
    } else {
        "sold".if_supports_color(Stdout, |t| t.red()).to_string()
    };
    log::info!("  Status:    {status}");
    log::info!("  Type:      {}", item.kind);
    if let Some(category) = &item.category {
        log::info!("  Category:  {category}");
    }
    if let Some(date) = &item.date_added {
        log::info!("  Added:     {date}");
    }

    let sizes = item.sizes();
    if !sizes.is_empty() {
        log::info!("  Sizes:     {}", sizes.join(", "));
    }
    if !item.variants.is_empty() {
        log::info!("  Variants:  {}", item.variants.join(", "));
    }
    if !item.colors.is_empty() {
        let colors: Vec<String> = item
            .colors
            .iter()
            .map(|c| format!("{c} {}", color_value(c)))
            .collect();
        log::info!("  Colors:    {}", colors.join(", "));
    }

    if !item.description.is_empty() {
        crate::log_blank();
        for line in item.description.lines() {
            log::info!("  {line}");
        }
    }

    crate::log_blank();
    log::info!("  Images:");
    for path in images.all(item) {
        log::info!("    {path}");
    }
}
