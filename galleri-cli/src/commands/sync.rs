use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use galleri_sync::config::ENV_SHEET_RANGE;
use galleri_sync::{RowSource, SkipReason, SyncConfig, SyncOutcome, SyncRequest};

use crate::display::spinner;
use crate::{AppContext, CliError};

/// Flags of the `sync` subcommand.
pub(crate) struct SyncArgs {
    pub csv: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub sheet_id: Option<String>,
    pub range: Option<String>,
    pub dry_run: bool,
}

/// Run the sync job. Only a failed run is an error; a skipped run exits 0.
pub(crate) fn run_sync(ctx: &AppContext, args: SyncArgs) -> Result<(), CliError> {
    let mut config = SyncConfig::resolve(&ctx.settings.sync);
    config.sheet_id = config.sheet_id.override_with(args.sheet_id);
    config.range = config.range.override_with(args.range);
    config.output = config.output.override_with(args.output);

    let source = match args.csv {
        Some(path) => Some(RowSource::Csv(path)),
        None => config.sheets_source(),
    };
    let output = config
        .output
        .value
        .clone()
        .ok_or_else(|| CliError::config("No output path configured"))?;

    if source.is_none() {
        log::warn!("Missing spreadsheet credentials; using existing inventory");
        crate::log_blank();
        log::info!("  To enable sync, set:");
        for var in config.missing_credentials() {
            log::info!("  - {var}");
        }
        log::info!("  (or pass --csv with an exported sheet; range via ${ENV_SHEET_RANGE})");
    }

    let request = SyncRequest {
        source,
        output,
        dry_run: args.dry_run,
    };

    let pb = match &request.source {
        Some(RowSource::Sheets { .. }) => Some(spinner(ctx.quiet, "Fetching sheet rows".into())),
        _ => None,
    };
    let result = galleri_sync::run_sync(&request);
    if let Some(pb) = pb {
        pb.finish_and_clear();
    }

    match result? {
        SyncOutcome::Written { path, rows, items } => {
            log::info!(
                "{} Synced {} items from {} rows to {}",
                "\u{2714}".if_supports_color(Stdout, |t| t.green()),
                items,
                rows,
                path.display().if_supports_color(Stdout, |t| t.cyan()),
            );
        }
        SyncOutcome::DryRun { rows, document } => {
            log::info!(
                "{} {} items from {} rows (not written)",
                "[DRY RUN]".if_supports_color(Stdout, |t| t.yellow()),
                document.items.len(),
                rows,
            );
            for item in &document.items {
                log::info!("{}", crate::display::item_line(item));
            }
        }
        SyncOutcome::Skipped(SkipReason::NoSource) => {}
        SyncOutcome::Skipped(SkipReason::NoRows) => {
            log::info!("  Nothing to sync; inventory left unchanged.");
        }
    }
    Ok(())
}
