//! Error handling types and utilities.

use std::fmt::Display;
use std::path::{Path, PathBuf};

/// A specialized Result type for scheme-finder plumbing.
///
/// This is an alias for `anyhow::Result` with context added via `.context()` and
/// `.with_context()` in the binary and configuration code. The library core
/// returns the typed errors below.
pub type Result<T> = anyhow::Result<T>;

/// Error returned when building or loading a catalog fails.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Catalog file could not be read.
    #[error("Failed to read catalog at {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Catalog file is not valid TOML/JSON or does not match the schema.
    #[error("Failed to parse catalog at {}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },
    /// File extension is neither `.toml` nor `.json`.
    #[error("Unsupported catalog format for {} (expected .toml or .json)", .0.display())]
    UnsupportedFormat(PathBuf),
    #[error("Category name must not be blank")]
    BlankCategory,
    #[error("Scheme #{position} in category '{category}' has a blank title")]
    BlankTitle { category: String, position: usize },
    #[error("Panel id '{0}' is reserved")]
    ReservedPanelId(String),
    #[error(
        "Invalid panel id '{0}': must be lowercase alphanumeric, hyphens, and underscores"
    )]
    InvalidPanelId(String),
    #[error("Panel id '{0}' is declared more than once")]
    DuplicatePanelId(String),
}

impl CatalogError {
    pub(crate) fn inline_parse(err: impl Display) -> Self {
        Self::Parse {
            path: PathBuf::from("<inline>"),
            message: err.to_string(),
        }
    }

    /// Point a parse error at the file its content came from.
    pub(crate) fn in_file(self, file: &Path) -> Self {
        match self {
            Self::Parse { message, .. } => Self::Parse {
                path: file.to_path_buf(),
                message,
            },
            other => other,
        }
    }
}

/// Error returned by panel operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PanelError {
    /// The requested panel is not declared by the catalog.
    #[error("Unknown panel '{id}'{}", format_suggestions(.suggestions))]
    UnknownPanel { id: String, suggestions: Vec<String> },
}

/// Error returned by page controller events.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ControllerError {
    /// A title was selected that the field is not currently offering.
    #[error("'{title}' is not among the current suggestions")]
    NotSuggested { title: String },
    #[error(transparent)]
    Panel(#[from] PanelError),
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(". Did you mean: {}?", suggestions.join(", "))
    }
}
