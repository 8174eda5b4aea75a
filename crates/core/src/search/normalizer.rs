use std::fmt;

/// A trimmed, lowercased, non-empty search string. Used as the cache key.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NormalizedQuery(String);

impl NormalizedQuery {
    /// Normalize `raw`, returning `None` when nothing is left after trimming.
    pub fn new(raw: &str) -> Option<Self> {
        match normalize(raw) {
            Query::Empty => None,
            Query::Term(term) => Some(term),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NormalizedQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for NormalizedQuery {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Outcome of normalizing user input.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Query {
    /// Blank input: show the initial list again.
    Empty,
    /// A real search term.
    Term(NormalizedQuery),
}

impl Query {
    pub fn is_empty(&self) -> bool {
        matches!(self, Query::Empty)
    }

    /// The normalized text; `""` for [`Query::Empty`].
    pub fn as_str(&self) -> &str {
        match self {
            Query::Empty => "",
            Query::Term(term) => term.as_str(),
        }
    }
}

/// Trim surrounding whitespace and lowercase.
pub fn normalize(raw: &str) -> Query {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        Query::Empty
    } else {
        Query::Term(NormalizedQuery(trimmed.to_lowercase()))
    }
}
