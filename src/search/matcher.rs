use super::types::TokenMode;
use crate::catalog::types::Listing;
use crate::query::types::ParsedQuery;

/// A token hits a listing when it appears, case-insensitively, in the
/// title, the description or the artist name.
pub fn token_matches(listing: &Listing, token: &str) -> bool {
    let needle = token.to_lowercase();
    listing.title.to_lowercase().contains(&needle)
        || listing.description.to_lowercase().contains(&needle)
        || listing.artist.to_lowercase().contains(&needle)
}

/// Inclusive bound check. A listing without a price never satisfies a price
/// comparison, the same way a NULL column loses every SQL comparison.
pub fn price_within_bounds(listing: &Listing, filter: &ParsedQuery) -> bool {
    match listing.price {
        Some(price) => {
            filter.min_price.map_or(true, |min| price >= min)
                && filter.max_price.map_or(true, |max| price <= max)
        }
        None => !filter.has_price_filter(),
    }
}

/// Counts how many of the filter's keywords hit the listing. Duplicate
/// keywords count twice, which keeps repeated terms weightier.
pub fn matched_tokens(listing: &Listing, filter: &ParsedQuery) -> usize {
    filter
        .keywords
        .iter()
        .filter(|token| token_matches(listing, token))
        .count()
}

pub fn listing_matches(listing: &Listing, filter: &ParsedQuery, mode: TokenMode) -> bool {
    if !price_within_bounds(listing, filter) {
        return false;
    }
    if filter.keywords.is_empty() {
        return true;
    }
    match mode {
        TokenMode::All => filter
            .keywords
            .iter()
            .all(|token| token_matches(listing, token)),
        TokenMode::Any => filter
            .keywords
            .iter()
            .any(|token| token_matches(listing, token)),
    }
}
