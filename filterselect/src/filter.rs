//! Option filtering.
//!
//! Matching is a plain lowercase substring test. Search text is never
//! interpreted as a pattern, so `.`, `(`, `*` and friends match only
//! themselves.

use crate::element::SelectOption;

/// Lowercased search text derived from the input on each change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterQuery {
    text: String,
}

impl FilterQuery {
    pub fn new(raw: &str) -> Self {
        Self {
            text: raw.to_lowercase(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Whether the query is long enough to hide anything.
    pub fn is_active(&self, min_len: usize) -> bool {
        self.len() >= min_len
    }

    pub fn matches(&self, label: &str) -> bool {
        label.to_lowercase().contains(self.text.as_str())
    }
}

/// Set each option's visibility from `query`.
///
/// With an inactive query every option is shown. Returns the number of
/// visible options.
pub fn apply(options: &mut [SelectOption], query: &FilterQuery, min_len: usize) -> usize {
    let active = query.is_active(min_len);
    let mut visible = 0;
    for option in options.iter_mut() {
        option.visible = !active || query.matches(&option.label);
        if option.visible {
            visible += 1;
        }
    }
    visible
}
