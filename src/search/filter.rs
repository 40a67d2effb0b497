//! Catalog filtering: one visibility decision per item and per category.

use super::matching::is_item_match;
use super::query::Query;
use crate::catalog::Catalog;
use serde::Serialize;

/// Visibility of one category after a filter pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryVisibility {
    pub name: String,
    /// Shown iff at least one of its items is shown.
    pub visible: bool,
    pub visible_items: usize,
}

/// Result of applying a query to the whole catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterOutcome {
    /// Lowercased query this pass ran with.
    pub query: String,
    /// One flag per item, in catalog order.
    pub item_visible: Vec<bool>,
    /// One entry per category, in catalog order.
    pub categories: Vec<CategoryVisibility>,
    pub visible_count: usize,
}

impl FilterOutcome {
    /// True when at least one item is visible.
    pub fn any_visible(&self) -> bool {
        self.visible_count > 0
    }

    /// True when the "no results" indicator must be shown.
    pub fn show_no_results(&self) -> bool {
        !self.any_visible()
    }
}

/// Run a filter pass of `raw_query` over `catalog`.
///
/// Pure: the same catalog and query always produce the same outcome.
pub fn filter(catalog: &Catalog, raw_query: &str) -> FilterOutcome {
    let query = Query::parse(raw_query);
    let mut item_visible = Vec::with_capacity(catalog.len());
    let mut categories = Vec::with_capacity(catalog.categories().len());

    for category in catalog.categories() {
        let mut visible_items = 0;
        for item in category.items() {
            let visible = is_item_match(item, query.words());
            if visible {
                visible_items += 1;
            }
            item_visible.push(visible);
        }
        categories.push(CategoryVisibility {
            name: category.name().to_string(),
            visible: visible_items > 0,
            visible_items,
        });
    }

    let visible_count: usize = categories.iter().map(|c| c.visible_items).sum();

    tracing::debug!(
        "Filter pass for {:?}: {} of {} items visible across {} categories",
        query.text(),
        visible_count,
        item_visible.len(),
        categories.iter().filter(|c| c.visible).count()
    );

    FilterOutcome {
        query: query.text().to_string(),
        item_visible,
        categories,
        visible_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Category, Item};
    use assert2::check;
    use rstest::rstest;

    fn sample() -> Catalog {
        Catalog::new(vec![
            Category::new(
                "Agriculture",
                vec![
                    Item::new("Crop Insurance", "crop insurance subsidy", None),
                    Item::new("Kisan Credit", "loans for farmers", Some("farm credit")),
                ],
            ),
            Category::new(
                "Education",
                vec![Item::new("Education Grant", "grant for tuition", None)],
            ),
        ])
    }

    #[test]
    fn test_empty_query_shows_everything() {
        let outcome = filter(&sample(), "");
        check!(outcome.item_visible == vec![true, true, true]);
        check!(outcome.categories.iter().all(|c| c.visible));
        check!(outcome.any_visible());
    }

    #[test]
    fn test_no_match_hides_everything() {
        let outcome = filter(&sample(), "zzzzzz");
        check!(outcome.item_visible.iter().all(|v| !v));
        check!(outcome.categories.iter().all(|c| !c.visible));
        check!(outcome.show_no_results());
    }

    #[rstest]
    #[case("grant", vec![false, false, true], vec![false, true])]
    #[case("FARM", vec![false, true, false], vec![true, false])]
    #[case("kisan", vec![false, true, false], vec![true, false])] // exact first title word
    #[case("crop tuition", vec![true, false, true], vec![true, true])]
    fn test_partitions_by_category(
        #[case] query: &str,
        #[case] items: Vec<bool>,
        #[case] categories: Vec<bool>,
    ) {
        let outcome = filter(&sample(), query);
        check!(outcome.item_visible == items);
        let category_flags: Vec<bool> = outcome.categories.iter().map(|c| c.visible).collect();
        check!(category_flags == categories);
    }

    #[test]
    fn test_idempotent() {
        let catalog = sample();
        check!(filter(&catalog, "crop") == filter(&catalog, "crop"));
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::default();
        check!(!filter(&catalog, "").any_visible());
        check!(filter(&catalog, "grant").show_no_results());
    }
}
