use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use galleri_catalog::{CategoryFilter, category_query};

use crate::display::load;
use crate::{AppContext, CliError};

/// List the filter bar's categories with item counts and links.
pub(crate) fn run_categories(ctx: &AppContext) -> Result<(), CliError> {
    let catalog = load(ctx);
    let categories = catalog.categories(ctx.settings.catalog.collation);

    log::info!("{}", "Categories".if_supports_color(Stdout, |t| t.bold()));
    log::info!(
        "  {:<24} {:>4}  {}",
        "Alla",
        catalog.len(),
        category_query("").if_supports_color(Stdout, |t| t.dimmed())
    );
    for entry in &categories {
        let filter = CategoryFilter::Category(entry.slug.clone());
        let count = catalog.iter().filter(|item| filter.matches(item)).count();
        log::info!(
            "  {:<24} {:>4}  {}",
            entry.name,
            count,
            category_query(&entry.slug).if_supports_color(Stdout, |t| t.dimmed())
        );
    }
    Ok(())
}
