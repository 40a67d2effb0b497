//! The scheme catalog: an immutable snapshot of every searchable card.
//!
//! A catalog is built once at startup, either directly from [`Category`]
//! values or from a TOML/JSON source file, and is shared read-only from then
//! on. Each [`Item`] precomputes the lowercased text the matchers work on so a
//! filter pass never re-folds case.

use crate::error::CatalogError;
use ahash::AHashSet;
use regex::Regex;
use serde::Deserialize;
use std::path::Path;
use std::sync::LazyLock;

/// Identifier reserved for the sidebar in panel state.
pub const SIDEBAR_ID: &str = "sidebar";

static PANEL_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z0-9][a-z0-9_-]*$").expect("panel id pattern is valid")
});

/// One scheme card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    title: String,
    title_lower: String,
    search_text: String,
}

impl Item {
    /// Build an item. The search text is `keywords + " " + description`,
    /// lowercased, with absent keywords treated as empty.
    pub fn new(title: &str, description: &str, keywords: Option<&str>) -> Self {
        let search_text = format!("{} {}", keywords.unwrap_or_default(), description).to_lowercase();
        Self {
            title: title.to_string(),
            title_lower: title.to_lowercase(),
            search_text,
        }
    }

    /// Display title, original case.
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn title_lower(&self) -> &str {
        &self.title_lower
    }

    /// Lowercased keywords and description.
    pub fn search_text(&self) -> &str {
        &self.search_text
    }
}

/// A named display group of items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    name: String,
    items: Vec<Item>,
}

impl Category {
    pub fn new(name: impl Into<String>, items: Vec<Item>) -> Self {
        Self {
            name: name.into(),
            items,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }
}

/// Ordered categories of items, plus the side panels the page declares.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    categories: Vec<Category>,
    panels: Vec<String>,
}

impl Catalog {
    /// Build a catalog with no side panels.
    pub fn new(categories: Vec<Category>) -> Self {
        Self {
            categories,
            panels: Vec::new(),
        }
    }

    /// Declare the side panel ids available to this page.
    pub fn with_panels(mut self, panels: Vec<String>) -> Self {
        self.panels = panels;
        self
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Every item in catalog order (category by category).
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.categories.iter().flat_map(|c| c.items.iter())
    }

    /// Total number of items.
    pub fn len(&self) -> usize {
        self.categories.iter().map(|c| c.items.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Side panel ids, in declaration order.
    pub fn panels(&self) -> &[String] {
        &self.panels
    }

    /// Load and validate a catalog from a `.toml` or `.json` file.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let start = std::time::Instant::now();
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let parsed = match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => CatalogSource::from_toml(&content),
            Some("json") => CatalogSource::from_json(&content),
            _ => return Err(CatalogError::UnsupportedFormat(path.to_path_buf())),
        };
        let source = parsed.map_err(|e| e.in_file(path))?;

        let catalog = source.build()?;
        tracing::info!(
            "Loaded catalog from {}: {} categories, {} schemes, {} panels in {:?}",
            path.display(),
            catalog.categories.len(),
            catalog.len(),
            catalog.panels.len(),
            start.elapsed()
        );
        Ok(catalog)
    }
}

/// Raw catalog data as written in a source file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogSource {
    #[serde(default, rename = "category")]
    pub categories: Vec<CategorySource>,
    #[serde(default, rename = "panel")]
    pub panels: Vec<PanelSource>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CategorySource {
    pub name: String,
    #[serde(default, rename = "scheme")]
    pub schemes: Vec<SchemeSource>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SchemeSource {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub keywords: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PanelSource {
    pub id: String,
}

impl CatalogSource {
    /// Parse a TOML catalog document.
    pub fn from_toml(content: &str) -> Result<Self, CatalogError> {
        toml::from_str(content).map_err(CatalogError::inline_parse)
    }

    /// Parse a JSON catalog document.
    pub fn from_json(content: &str) -> Result<Self, CatalogError> {
        serde_json::from_str(content).map_err(CatalogError::inline_parse)
    }

    /// Validate the source and build the immutable catalog.
    pub fn build(self) -> Result<Catalog, CatalogError> {
        let mut categories = Vec::with_capacity(self.categories.len());
        for category in self.categories {
            if category.name.trim().is_empty() {
                return Err(CatalogError::BlankCategory);
            }

            let mut items = Vec::with_capacity(category.schemes.len());
            for (position, scheme) in category.schemes.into_iter().enumerate() {
                if scheme.title.trim().is_empty() {
                    return Err(CatalogError::BlankTitle {
                        category: category.name,
                        position,
                    });
                }
                items.push(Item::new(
                    &scheme.title,
                    &scheme.description,
                    scheme.keywords.as_deref(),
                ));
            }
            categories.push(Category::new(category.name, items));
        }

        let mut seen = AHashSet::with_capacity(self.panels.len());
        let mut panels = Vec::with_capacity(self.panels.len());
        for panel in self.panels {
            if panel.id == SIDEBAR_ID {
                return Err(CatalogError::ReservedPanelId(panel.id));
            }
            if !PANEL_ID.is_match(&panel.id) {
                return Err(CatalogError::InvalidPanelId(panel.id));
            }
            if !seen.insert(panel.id.clone()) {
                return Err(CatalogError::DuplicatePanelId(panel.id));
            }
            panels.push(panel.id);
        }

        Ok(Catalog::new(categories).with_panels(panels))
    }
}
