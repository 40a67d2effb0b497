//! Startup configuration: where the catalog lives and how to log.

use crate::error::Result;
use anyhow::Context;
use std::borrow::Cow;
use std::path::PathBuf;

/// Environment variable naming the catalog file when no argument is given.
pub const CATALOG_ENV: &str = "SCHEME_FINDER_CATALOG";

/// Environment variable selecting JSON log output (`1` or `true`).
pub const LOG_JSON_ENV: &str = "SCHEME_FINDER_LOG_JSON";

/// Log line format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

/// Resolved startup configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub catalog_path: PathBuf,
    pub log_format: LogFormat,
}

impl Config {
    /// Resolve configuration from process arguments and environment.
    pub fn from_env() -> Result<Self> {
        let arg = std::env::args().nth(1);
        let env = |key: &str| std::env::var(key).ok();
        Self::resolve(arg, env)
    }

    /// Resolve configuration from an optional first argument and an
    /// environment lookup. The argument wins over the environment.
    pub fn resolve(arg: Option<String>, env: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let raw = arg
            .or_else(|| env(CATALOG_ENV))
            .filter(|p| !p.trim().is_empty())
            .with_context(|| {
                format!(
                    "No catalog given. Pass the path to a .toml or .json catalog as the first \
                     argument or set {}",
                    CATALOG_ENV
                )
            })?;

        let log_format = match env(LOG_JSON_ENV).as_deref() {
            Some("1" | "true") => LogFormat::Json,
            _ => LogFormat::Compact,
        };

        Ok(Self {
            catalog_path: PathBuf::from(expand_tilde(&raw).into_owned()),
            log_format,
        })
    }
}

/// Expands tilde (`~`) in a path to the user's home directory.
///
/// - `~/foo` becomes `/home/user/foo`
/// - `~` becomes `/home/user`
/// - Other paths are returned unchanged
pub fn expand_tilde(path: &str) -> Cow<'_, str> {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return Cow::Owned(home.join(stripped).display().to_string());
        }
    } else if path == "~"
        && let Some(home) = dirs::home_dir()
    {
        return Cow::Owned(home.display().to_string());
    }
    Cow::Borrowed(path)
}
