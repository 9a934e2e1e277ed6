use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use galleri_catalog::{CategoryFilter, FilterState, PageLink, SortKey, derive_view};

use crate::display::{load, log_items};
use crate::{AppContext, CliError};

/// List one page of the gallery grid.
pub(crate) fn run_browse(
    ctx: &AppContext,
    category: Option<&str>,
    sort: SortKey,
    page: usize,
) -> Result<(), CliError> {
    let catalog = load(ctx);
    let collation = ctx.settings.catalog.collation;

    let state = FilterState::new(ctx.settings.catalog.effective_page_size())
        .with_category(CategoryFilter::parse(category.unwrap_or_default()))
        .with_sort(sort)
        .with_page(page);
    let view = derive_view(&catalog, &state, collation);

    log::info!(
        "{} {} {}",
        "Galleri".if_supports_color(Stdout, |t| t.bold()),
        format!("[{}]", state.category()).if_supports_color(Stdout, |t| t.cyan()),
        format!("sorted by {}", state.sort()).if_supports_color(Stdout, |t| t.dimmed()),
    );

    if view.is_empty() {
        log::info!("  No works match this selection.");
        return Ok(());
    }

    log::info!(
        "  {} works, page {} of {}",
        view.len(),
        view.page_number(),
        view.total_pages()
    );
    crate::log_blank();
    log_items(view.page().iter().copied(), "This page is empty.");

    if let Some(pagination) = view.pagination() {
        let links: Vec<String> = pagination
            .links
            .iter()
            .map(|link| match link {
                PageLink::Page {
                    number,
                    current: true,
                } => format!("[{number}]"),
                PageLink::Page { number, .. } => number.to_string(),
                PageLink::Ellipsis => "\u{2026}".to_string(),
            })
            .collect();
        crate::log_blank();
        log::info!(
            "  {} {} {}",
            if pagination.previous.is_some() { "\u{2039}" } else { " " },
            links.join(" "),
            if pagination.next.is_some() { "\u{203a}" } else { " " },
        );
    }

    Ok(())
}
