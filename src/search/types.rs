use crate::query::types::ParsedQuery;
use serde::{Deserialize, Serialize};

/// How keyword tokens combine when filtering: `All` requires every keyword
/// to hit the listing, `Any` is satisfied by a single hit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TokenMode {
    #[default]
    All,
    Any,
}

#[derive(Debug, Clone)]
pub struct SearchOptions {
    pub mode: TokenMode,
    pub limit: usize,
    pub offset: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            mode: TokenMode::All,
            limit: 10,
            offset: 0,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResponse {
    pub query: String,
    pub filters: ParsedQuery,
    pub total_count: usize,
    pub count: usize,
    pub results: Vec<SearchResultItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResultItem {
    pub listing_id: String,
    pub title: String,
    pub artist: String,
    pub price: Option<f64>,
    pub score: usize,
}
