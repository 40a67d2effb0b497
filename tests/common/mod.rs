//! Shared test fixtures and utilities for integration tests.
//!
//! # Available Fixtures
//!
//! - `sample_catalog`: a small three-category catalog with two side panels
//! - `session`: a fresh controller session over `sample_catalog`
//!
//! [`TempCatalog`] writes catalog source files into a temp directory for
//! tests that exercise loading from disk.

use rstest::fixture;
use scheme_finder::tools::SessionState;
use scheme_finder::{Catalog, CatalogSource, DirectoryController};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;
use tokio::sync::Mutex;

/// Catalog used across integration tests.
pub const SAMPLE_TOML: &str = r#"
[[category]]
name = "Agriculture"

[[category.scheme]]
title = "Crop Insurance"
description = "Crop insurance subsidy"

[[category.scheme]]
title = "Kisan Credit Card"
description = "Short term loans for farmers"
keywords = "farm credit loan"

[[category]]
name = "Education"

[[category.scheme]]
title = "Education Grant"
description = "Grant for tuition"

[[category.scheme]]
title = "National Scholarship"
description = "Scholarships for merit students"
keywords = "education merit"

[[category]]
name = "Health"

[[category.scheme]]
title = "Health Cover"
description = "Hospital insurance for families"

[[panel]]
id = "about"

[[panel]]
id = "contact"
"#;

#[fixture]
pub fn sample_catalog() -> Arc<Catalog> {
    let source = CatalogSource::from_toml(SAMPLE_TOML).expect("sample catalog parses");
    Arc::new(source.build().expect("sample catalog is valid"))
}

#[fixture]
pub fn session(sample_catalog: Arc<Catalog>) -> SessionState {
    Arc::new(Mutex::new(DirectoryController::new(sample_catalog)))
}

/// A temporary directory holding catalog files.
///
/// Removed automatically when dropped.
#[allow(dead_code)] // Methods used across different integration test crates
pub struct TempCatalog {
    _temp: TempDir,
    root: PathBuf,
}

#[allow(dead_code)] // Methods used across different integration test crates
impl TempCatalog {
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let root = temp.path().to_path_buf();
        Self { _temp: temp, root }
    }

    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Writes `content` to `name` and returns its full path.
    ///
    /// # Panics
    /// Panics if the file cannot be written.
    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let full_path = self.root.join(name);
        std::fs::write(&full_path, content)
            .unwrap_or_else(|e| panic!("Failed to write file '{}': {}", name, e));
        full_path
    }
}

impl Default for TempCatalog {
    fn default() -> Self {
        Self::new()
    }
}
