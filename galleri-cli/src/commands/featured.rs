use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::display::{load, log_items};
use crate::{AppContext, CliError};

/// List the works shown on the home page.
pub(crate) fn run_featured(ctx: &AppContext, limit: usize) -> Result<(), CliError> {
    let catalog = load(ctx);
    log::info!("{}", "Featured works".if_supports_color(Stdout, |t| t.bold()));
    log_items(catalog.featured(limit), "The inventory is empty.");
    Ok(())
}
