//! Typo-tolerant search over the scheme catalog.
//!
//! This module provides edit distance, query normalization, the item and title
//! match rules, and the two passes built on them: catalog filtering and title
//! suggestions.

// Module declarations
pub mod distance;
pub mod filter;
pub mod matching;
pub mod query;
pub mod suggest;

// Public re-exports (used via lib.rs)
pub use distance::distance;
pub use filter::{CategoryVisibility, FilterOutcome, filter};
pub use matching::{MAX_FUZZY_EDITS, first_word, is_item_match, is_title_match};
pub use query::Query;
pub use suggest::{MAX_SUGGESTIONS, SuggestionList, suggest};
