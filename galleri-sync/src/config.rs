//! Sync configuration: environment variables over the settings file over
//! built-in defaults, with the origin of each value kept for display.

use std::fmt;
use std::path::PathBuf;

use galleri_core::SyncSettings;
use galleri_core::settings::DEFAULT_SHEET_RANGE;

use crate::source::RowSource;

pub const ENV_SHEET_ID: &str = "GOOGLE_SHEET_ID";
pub const ENV_API_KEY: &str = "GOOGLE_API_KEY";
pub const ENV_SHEET_RANGE: &str = "GALLERI_SHEET_RANGE";

/// Where a configuration value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueSource {
    /// A command-line flag.
    Flag,
    /// An environment variable.
    EnvVar(&'static str),
    /// The settings file.
    SettingsFile,
    /// Built-in default.
    Default,
    /// Not set anywhere.
    Missing,
}

impl fmt::Display for ValueSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flag => write!(f, "command line"),
            Self::EnvVar(var) => write!(f, "env ${var}"),
            Self::SettingsFile => write!(f, "settings file"),
            Self::Default => write!(f, "default"),
            Self::Missing => write!(f, "not set"),
        }
    }
}

/// A resolved value and its origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sourced<T> {
    pub value: Option<T>,
    pub source: ValueSource,
}

impl<T> Sourced<T> {
    fn missing() -> Self {
        Self {
            value: None,
            source: ValueSource::Missing,
        }
    }

    fn found(value: T, source: ValueSource) -> Self {
        Self {
            value: Some(value),
            source,
        }
    }

    /// Replace with a command-line value when one was given.
    pub fn override_with(self, flag: Option<T>) -> Self {
        match flag {
            Some(value) => Self::found(value, ValueSource::Flag),
            None => self,
        }
    }
}

/// Everything the sync job needs to know, before flags are applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncConfig {
    pub sheet_id: Sourced<String>,
    pub api_key: Sourced<String>,
    pub range: Sourced<String>,
    pub output: Sourced<PathBuf>,
}

impl SyncConfig {
    /// Resolve from the process environment and `settings`.
    pub fn resolve(settings: &SyncSettings) -> Self {
        Self::resolve_with(settings, |var| std::env::var(var).ok())
    }

    /// Resolve using `env` to look up environment variables.
    pub fn resolve_with(settings: &SyncSettings, env: impl Fn(&str) -> Option<String>) -> Self {
        let pick = |var: &'static str, file: Option<&String>| -> Sourced<String> {
            if let Some(value) = env(var).filter(|v| !v.trim().is_empty()) {
                return Sourced::found(value.trim().to_string(), ValueSource::EnvVar(var));
            }
            match file.map(|v| v.trim()).filter(|v| !v.is_empty()) {
                Some(value) => Sourced::found(value.to_string(), ValueSource::SettingsFile),
                None => Sourced::missing(),
            }
        };

        let sheet_id = pick(ENV_SHEET_ID, settings.sheet_id.as_ref());
        let api_key = pick(ENV_API_KEY, settings.api_key.as_ref());

        let mut range = pick(ENV_SHEET_RANGE, Some(&settings.range));
        if range.value.as_deref() == Some(DEFAULT_SHEET_RANGE)
            && range.source == ValueSource::SettingsFile
        {
            range.source = ValueSource::Default;
        }
        if range.value.is_none() {
            range = Sourced::found(DEFAULT_SHEET_RANGE.to_string(), ValueSource::Default);
        }

        let output = if settings.output == SyncSettings::default().output {
            Sourced::found(PathBuf::from(&settings.output), ValueSource::Default)
        } else {
            Sourced::found(PathBuf::from(&settings.output), ValueSource::SettingsFile)
        };

        Self {
            sheet_id,
            api_key,
            range,
            output,
        }
    }

    /// The Sheets source, or `None` when the sheet id or API key is missing.
    pub fn sheets_source(&self) -> Option<RowSource> {
        let sheet_id = self.sheet_id.value.clone()?;
        let api_key = self.api_key.value.clone()?;
        Some(RowSource::Sheets {
            sheet_id,
            api_key,
            range: self
                .range
                .value
                .clone()
                .unwrap_or_else(|| DEFAULT_SHEET_RANGE.to_string()),
        })
    }

    /// Names of the credentials that still need to be provided.
    pub fn missing_credentials(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.sheet_id.value.is_none() {
            missing.push(ENV_SHEET_ID);
        }
        if self.api_key.value.is_none() {
            missing.push(ENV_API_KEY);
        }
        missing
    }
}

/// Mask a secret for display, keeping the last four characters.
pub fn mask_secret(secret: &str) -> String {
    let count = secret.chars().count();
    if count <= 4 {
        return "*".repeat(count);
    }
    let tail: String = secret.chars().skip(count - 4).collect();
    format!("{}{tail}", "*".repeat(count - 4))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn defaults_without_settings_or_env() {
        let config = SyncConfig::resolve_with(&SyncSettings::default(), no_env);
        assert_eq!(config.sheet_id.source, ValueSource::Missing);
        assert_eq!(config.range.value.as_deref(), Some("Inventory!A2:M"));
        assert_eq!(config.range.source, ValueSource::Default);
        assert_eq!(config.output.source, ValueSource::Default);
        assert!(config.sheets_source().is_none());
        assert_eq!(config.missing_credentials(), vec![ENV_SHEET_ID, ENV_API_KEY]);
    }

    #[test]
    fn env_beats_settings_file() {
        let settings = SyncSettings {
            sheet_id: Some("from-file".into()),
            api_key: Some("file-key".into()),
            range: "Lager!A2:M".into(),
            output: "public/inventory.json".into(),
        };
        let config = SyncConfig::resolve_with(&settings, |var| {
            (var == ENV_SHEET_ID).then(|| "from-env".to_string())
        });
        assert_eq!(config.sheet_id.value.as_deref(), Some("from-env"));
        assert_eq!(config.sheet_id.source, ValueSource::EnvVar(ENV_SHEET_ID));
        assert_eq!(config.api_key.source, ValueSource::SettingsFile);
        assert_eq!(config.range.value.as_deref(), Some("Lager!A2:M"));
        assert_eq!(config.range.source, ValueSource::SettingsFile);
        assert_eq!(config.output.source, ValueSource::SettingsFile);

        assert_eq!(
            config.sheets_source(),
            Some(RowSource::Sheets {
                sheet_id: "from-env".into(),
                api_key: "file-key".into(),
                range: "Lager!A2:M".into(),
            })
        );
    }

    #[test]
    fn blank_env_is_ignored() {
        let settings = SyncSettings {
            api_key: Some("file-key".into()),
            ..SyncSettings::default()
        };
        let config = SyncConfig::resolve_with(&settings, |_| Some("  ".to_string()));
        assert_eq!(config.api_key.source, ValueSource::SettingsFile);
    }

    #[test]
    fn flags_override_everything() {
        let config = SyncConfig::resolve_with(&SyncSettings::default(), no_env);
        let sheet = config.sheet_id.override_with(Some("cli".to_string()));
        assert_eq!(sheet.value.as_deref(), Some("cli"));
        assert_eq!(sheet.source, ValueSource::Flag);
    }

    #[test]
    fn secrets_are_masked() {
        assert_eq!(mask_secret("AIzaSyExample1234"), "*************1234");
        assert_eq!(mask_secret("abc"), "***");
    }
}
