//! Query normalization: case folding and whitespace splitting.

/// A case-folded query and its whitespace-separated words.
///
/// An empty query is valid and matches everything. `words` never contains
/// empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Query {
    text: String,
    words: Vec<String>,
}

impl Query {
    /// Lowercase `raw` and split it into non-empty words.
    pub fn parse(raw: &str) -> Self {
        let text = raw.to_lowercase();
        let words = text.split_whitespace().map(str::to_string).collect();
        Self { text, words }
    }

    /// The full lowercased query, unsplit.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The query words in input order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// True when the lowercased text is the empty string.
    ///
    /// A whitespace-only query is not empty: it has no words (so filtering
    /// matches everything) but it still drives suggestion lookup.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}
