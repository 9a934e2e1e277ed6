use thiserror::Error;

/// Errors that end a CLI command with a non-zero exit code.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// Sync run failed; the previous inventory is untouched
    #[error("Sync failed: {0}")]
    Sync(#[from] galleri_sync::SyncError),

    /// Settings file could not be read
    #[error("{0}")]
    Settings(#[from] galleri_core::SettingsError),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(String),
}

impl CliError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
