use thiserror::Error;

/// Failure to obtain or parse the inventory document.
///
/// Always recoverable: callers degrade to an empty catalog.
#[derive(Debug, Error)]
pub enum LoadError {
    /// I/O error reading a local inventory file
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    /// Network failure fetching a remote inventory
    #[error("Failed to fetch {url}: {message}")]
    Http { url: String, message: String },

    /// The server answered with a non-success status
    #[error("HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    /// The document is not valid JSON or not an object
    #[error("Invalid inventory JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl LoadError {
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn http(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Http {
            url: url.into(),
            message: message.into(),
        }
    }
}

/// A product was requested that the catalog does not contain.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotFoundError {
    /// No product id was supplied at all
    #[error("No product id given")]
    MissingId,

    /// The id does not match any catalog item
    #[error("No artwork with id '{0}'")]
    UnknownId(String),
}

/// A required choice on the product page has not been made.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Choose a variant for '{item}'")]
    MissingVariant { item: String },

    #[error("'{variant}' is not a variant of '{item}'")]
    UnknownVariant { item: String, variant: String },

    #[error("Choose a size for '{item}'")]
    MissingSize { item: String },

    #[error("'{size}' is not an available size of '{item}'")]
    UnknownSize { item: String, size: String },
}
