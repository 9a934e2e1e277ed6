//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use galleri_catalog::{DEFAULT_FEATURED_LIMIT, DEFAULT_RELATED_LIMIT, SortKey};

#[derive(Parser)]
#[command(name = "galleri")]
#[command(about = "Browse and sync the gallery inventory", long_about = None)]
pub(crate) struct Cli {
    /// Inventory JSON path or http(s) URL (defaults to the settings file value)
    #[arg(short, long, global = true)]
    pub inventory: Option<String>,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Pull rows from the spreadsheet and rewrite the inventory file
    Sync {
        /// Read rows from a CSV export instead of the Sheets API
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Inventory file to write
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Spreadsheet id (overrides $GOOGLE_SHEET_ID and the settings file)
        #[arg(long)]
        sheet_id: Option<String>,

        /// Sheet range, e.g. Inventory!A2:M
        #[arg(long)]
        range: Option<String>,

        /// Transform and report without writing
        #[arg(short = 'n', long)]
        dry_run: bool,
    },

    /// List works in the gallery grid
    Browse {
        /// Category name or slug ("alla" for every category)
        #[arg(short, long)]
        category: Option<String>,

        /// newest, oldest, price-low, price-high or name-az
        #[arg(short, long, default_value = "newest")]
        sort: SortKey,

        /// 1-based page number
        #[arg(short, long, default_value_t = 1)]
        page: usize,
    },

    /// Show one work's detail page
    Show {
        /// Product id
        id: String,

        /// Variant to include in an inquiry
        #[arg(long)]
        variant: Option<String>,

        /// Size to include in an inquiry
        #[arg(long)]
        size: Option<String>,
    },

    /// List works related to one work
    Related {
        /// Product id
        id: String,

        /// Maximum number of related works
        #[arg(short, long, default_value_t = DEFAULT_RELATED_LIMIT)]
        limit: usize,
    },

    /// List the home page's featured works
    Featured {
        /// Maximum number of works
        #[arg(short, long, default_value_t = DEFAULT_FEATURED_LIMIT)]
        limit: usize,
    },

    /// List categories for the filter bar
    Categories,

    /// Inspect the settings file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show resolved settings and where each value comes from
    Show,

    /// Print the settings file path
    Path,
}
