use serde::{Deserialize, Serialize};

/// Structured filter extracted from one free-text search query.
///
/// Keywords keep their first-seen order and are not deduplicated. Bounds are
/// inclusive; a range match sorts its pair and an exact match sets both
/// bounds to the same value, so those paths never produce `min > max`.
/// Contradictory cue pairs ("under 100 above 900") are passed through
/// unreconciled. An absent bound means "no constraint", never an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedQuery {
    pub keywords: Vec<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
}

impl ParsedQuery {
    /// True when the query carried neither keywords nor price constraints.
    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty() && self.min_price.is_none() && self.max_price.is_none()
    }

    /// True when at least one price bound was extracted.
    pub fn has_price_filter(&self) -> bool {
        self.min_price.is_some() || self.max_price.is_some()
    }
}
