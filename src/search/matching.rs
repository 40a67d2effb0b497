//! Match rules for catalog filtering and title suggestions.
//!
//! Both rules combine a cheap substring test with a bounded fuzzy test. The
//! fuzzy test only ever looks at the first word of a title and accepts at most
//! one edit, which keeps the number of distance computations per item at one
//! per query word.
//!
//! The two rules are deliberately not symmetric:
//! - [`is_item_match`] tests each query word on its own and accepts the item
//!   if any single word matches.
//! - [`is_title_match`] tests the whole query string as one unit.

use super::distance::distance;
use crate::catalog::Item;

/// Edits tolerated between a query token and a title's first word.
pub const MAX_FUZZY_EDITS: usize = 1;

/// The leading word of a title: everything before the first space.
///
/// A title with a leading space has an empty first word.
pub fn first_word(title: &str) -> &str {
    title.split(' ').next().unwrap_or_default()
}

/// True when `token` is within [`MAX_FUZZY_EDITS`] of `title`'s first word.
fn near_first_word(token: &str, title: &str) -> bool {
    distance(token, first_word(title)) <= MAX_FUZZY_EDITS
}

/// Decide whether a catalog item survives a filter pass.
///
/// `words` must already be lowercased. No words matches everything. Otherwise
/// the item matches when any word is a substring of the item's search text or
/// is one edit away from the first word of its title.
pub fn is_item_match(item: &Item, words: &[String]) -> bool {
    if words.is_empty() {
        return true;
    }

    words.iter().any(|word| {
        item.search_text().contains(word.as_str()) || near_first_word(word, item.title_lower())
    })
}

/// Decide whether a title should be offered as a suggestion for `query`.
///
/// `query` must already be lowercased; `title` may be in any case.
pub fn is_title_match(title: &str, query: &str) -> bool {
    let title = title.to_lowercase();
    title.contains(query) || near_first_word(query, &title)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::Query;
    use assert2::check;
    use rstest::rstest;

    fn item(title: &str, keywords: &str, description: &str) -> Item {
        Item::new(title, description, Some(keywords))
    }

    fn words(raw: &str) -> Vec<String> {
        Query::parse(raw).words().to_vec()
    }

    #[rstest]
    #[case("Education Grant", "Education")]
    #[case("pension", "pension")]
    #[case(" leading", "")]
    #[case("", "")]
    fn test_first_word(#[case] title: &str, #[case] expected: &str) {
        check!(first_word(title) == expected);
    }

    #[test]
    fn test_empty_words_match_everything() {
        check!(is_item_match(&item("Crop Insurance", "", ""), &[]));
        check!(is_item_match(&Item::new("", "", None), &words("   ")));
    }

    #[rstest]
    #[case("subsidy")]
    #[case("insurance sub")]
    #[case("nothing crop")] // one matching word is enough
    #[case("SUBSIDY")]
    fn test_substring_of_search_text_matches(#[case] query: &str) {
        let crop = item("Crop Insurance", "farm", "crop insurance subsidy");
        check!(is_item_match(&crop, &words(query)));
    }

    #[test]
    fn test_one_edit_from_first_title_word_matches() {
        let grant = item("Education Grant", "", "grant for tuition");
        check!(is_item_match(&grant, &words("Eucation")));
        check!(is_item_match(&grant, &words("educations")));
        check!(is_item_match(&grant, &words("edukation")));
    }

    #[test]
    fn test_two_edits_and_no_substring_fails() {
        let grant = item("Education Grant", "", "grant for tuition");
        check!(!is_item_match(&grant, &words("eduktion")));
        check!(!is_item_match(&grant, &words("graant tution")));
    }

    #[test]
    fn test_fuzzy_only_against_first_title_word() {
        let crop = item("Crop Insurance", "", "crop insurance subsidy");
        // one edit from "insurance", but that is the second title word
        check!(!is_item_match(&crop, &words("insurence")));
    }

    #[rstest]
    #[case("Education Grant", "edu", true)]
    #[case("Education Grant", "ion gr", true)]
    #[case("Education Grant", "eucation", true)]
    #[case("Education Grant", "grnt", false)]
    #[case("Crop Insurance", "crops", true)]
    #[case("Crop Insurance", "insurence", false)]
    #[case("Crop Insurance", "crop insurence", false)] // whole query, not words
    fn test_title_match(#[case] title: &str, #[case] query: &str, #[case] expected: bool) {
        check!(is_title_match(title, query) == expected);
    }
}
