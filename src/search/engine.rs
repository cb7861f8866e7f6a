use super::matcher::{listing_matches, matched_tokens};
use super::types::{SearchOptions, SearchResponse, SearchResultItem, TokenMode};
use crate::catalog::store::ListingStore;
use crate::catalog::types::Listing;
use crate::query::parser::parse_query;
use crate::query::types::ParsedQuery;

pub fn search(store: &ListingStore, filter: &ParsedQuery, mode: TokenMode) -> Vec<(Listing, usize)> {
    let mut results: Vec<(Listing, usize)> = store
        .all()
        .into_iter()
        .filter(|listing| listing_matches(listing, filter, mode))
        .map(|listing| {
            let score = matched_tokens(&listing, filter);
            (listing, score)
        })
        .collect();

    // Highest score first; ties fall back to title so the ordering stays
    // stable even though the store iterates in arbitrary order.
    results.sort_by(|a, b| {
        b.1.cmp(&a.1)
            .then_with(|| a.0.title.to_lowercase().cmp(&b.0.title.to_lowercase()))
    });
    results
}

/// Parses the raw query, ranks the catalog against it and shapes the
/// paginated response.
pub fn execute_search(store: &ListingStore, raw_query: &str, options: &SearchOptions) -> SearchResponse {
    let filters = parse_query(raw_query);
    let ranked = search(store, &filters, options.mode);
    let total_count = ranked.len();

    let results: Vec<SearchResultItem> = ranked
        .into_iter()
        .skip(options.offset)
        .take(options.limit)
        .map(|(listing, score)| SearchResultItem {
            listing_id: listing.listing_id,
            title: listing.title,
            artist: listing.artist,
            price: listing.price,
            score,
        })
        .collect();

    tracing::info!(
        "Search {:?} matched {} listing(s), returning {}",
        raw_query,
        total_count,
        results.len()
    );

    SearchResponse {
        query: raw_query.to_string(),
        filters,
        total_count,
        count: results.len(),
        results,
    }
}
