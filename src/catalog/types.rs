use serde::{Deserialize, Serialize};

/// A stored artwork listing, the unit the search engine filters and ranks.
/// `price` is optional: sellers may list a piece as price-on-request, and
/// such listings are invisible to any price-constrained search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Listing {
    pub listing_id: String,
    pub title: String,
    pub artist: String,
    pub description: String,
    pub price: Option<f64>,
    pub img_url: Option<String>,
    pub created_at: u64,
}

/// Insertion payload for a new listing; the store assigns the id and the
/// creation timestamp.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingDraft {
    pub title: String,
    pub artist: String,
    #[serde(default)]
    pub description: String,
    pub price: Option<f64>,
    pub img_url: Option<String>,
}
