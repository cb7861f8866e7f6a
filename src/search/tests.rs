//! Search Module Tests
//!
//! Validates search execution, including match predicates, ranking and response assembly.
//!
//! ## Test Scopes
//! - **Matcher**: Ensures keyword and price predicates accept and reject correctly.
//! - **Ranking**: Verifies listings matching more keywords rank higher, with stable ties.
//! - **Pagination**: Checks offset / limit windows and count bookkeeping.
//! - **Serialization**: Checks JSON compatibility for response types.

#[cfg(test)]
mod tests {
    use crate::catalog::store::ListingStore;
    use crate::catalog::types::Listing;
    use crate::query::types::ParsedQuery;
    use crate::search::engine::{execute_search, search};
    use crate::search::matcher::{
        listing_matches, matched_tokens, price_within_bounds, token_matches,
    };
    use crate::search::types::{SearchOptions, SearchResponse, SearchResultItem, TokenMode};

    fn listing(title: &str, artist: &str, description: &str, price: Option<f64>) -> Listing {
        Listing {
            listing_id: format!("listing-{}", title.to_lowercase().replace(' ', "-")),
            title: title.to_string(),
            artist: artist.to_string(),
            description: description.to_string(),
            price,
            img_url: None,
            created_at: 0,
        }
    }

    fn sample_store() -> ListingStore {
        let store = ListingStore::new();
        store.put(listing(
            "Monsoon Skies",
            "Aarav Mehta",
            "Moody monsoon landscape in oils",
            Some(7500.0),
        ));
        store.put(listing(
            "Minimalist Study",
            "Ishita Rao",
            "Minimalist monochrome abstract on canvas",
            Some(4800.0),
        ));
        store.put(listing(
            "Portrait of a Dancer",
            "Kabir Sen",
            "Expressive blue toned portrait in acrylic",
            Some(2000.0),
        ));
        store.put(listing(
            "Street Sketch No 4",
            "Aarav Mehta",
            "Ink sketch of an old bazaar street",
            Some(950.0),
        ));
        store.put(listing(
            "Blue Period",
            "Ishita Rao",
            "Large blue abstract, mixed media",
            None,
        ));
        store
    }

    fn price_filter(min: Option<f64>, max: Option<f64>) -> ParsedQuery {
        ParsedQuery {
            keywords: Vec::new(),
            min_price: min,
            max_price: max,
        }
    }

    fn keyword_filter(keywords: &[&str]) -> ParsedQuery {
        ParsedQuery {
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            min_price: None,
            max_price: None,
        }
    }

    // ============================================================
    // MATCHER TESTS - token predicates
    // ============================================================

    #[test]
    fn test_token_matches_title_description_and_artist() {
        let piece = listing(
            "Monsoon Skies",
            "Aarav Mehta",
            "Moody monsoon landscape in oils",
            Some(7500.0),
        );

        assert!(token_matches(&piece, "monsoon"), "Title should match");
        assert!(token_matches(&piece, "landscape"), "Description should match");
        assert!(token_matches(&piece, "mehta"), "Artist should match");
        assert!(!token_matches(&piece, "sculpture"));
    }

    #[test]
    fn test_token_match_is_case_insensitive() {
        let piece = listing("Monsoon Skies", "Aarav Mehta", "", Some(7500.0));

        assert!(token_matches(&piece, "MONSOON"));
        assert!(token_matches(&piece, "MoNsOoN"));
    }

    #[test]
    fn test_matched_tokens_counts_duplicates() {
        let piece = listing("Blue Period", "Ishita Rao", "Large blue abstract", None);
        let filter = keyword_filter(&["blue", "blue", "portrait"]);

        // "blue" hits twice, "portrait" misses
        assert_eq!(matched_tokens(&piece, &filter), 2);
    }

    // ============================================================
    // MATCHER TESTS - price bounds
    // ============================================================

    #[test]
    fn test_price_bounds_are_inclusive() {
        let filter = price_filter(Some(2000.0), Some(7500.0));

        let at_floor = listing("A", "X", "", Some(2000.0));
        let at_ceiling = listing("B", "X", "", Some(7500.0));
        let below = listing("C", "X", "", Some(1999.0));
        let above = listing("D", "X", "", Some(7501.0));

        assert!(price_within_bounds(&at_floor, &filter));
        assert!(price_within_bounds(&at_ceiling, &filter));
        assert!(!price_within_bounds(&below, &filter));
        assert!(!price_within_bounds(&above, &filter));
    }

    #[test]
    fn test_unpriced_listing_fails_any_price_bound() {
        let unpriced = listing("Blue Period", "Ishita Rao", "", None);

        assert!(price_within_bounds(&unpriced, &price_filter(None, None)));
        assert!(!price_within_bounds(&unpriced, &price_filter(Some(100.0), None)));
        assert!(!price_within_bounds(&unpriced, &price_filter(None, Some(100.0))));
    }

    #[test]
    fn test_listing_matches_all_vs_any_mode() {
        let portrait = listing(
            "Portrait of a Dancer",
            "Kabir Sen",
            "Expressive blue toned portrait",
            Some(2000.0),
        );
        let abstract_piece = listing("Blue Period", "Ishita Rao", "Large blue abstract", None);
        let filter = keyword_filter(&["blue", "portrait"]);

        // Both keywords hit the portrait, only "blue" hits the abstract
        assert!(listing_matches(&portrait, &filter, TokenMode::All));
        assert!(listing_matches(&portrait, &filter, TokenMode::Any));
        assert!(!listing_matches(&abstract_piece, &filter, TokenMode::All));
        assert!(listing_matches(&abstract_piece, &filter, TokenMode::Any));
    }

    #[test]
    fn test_empty_keywords_match_on_price_alone() {
        let piece = listing("Monsoon Skies", "Aarav Mehta", "", Some(7500.0));

        assert!(listing_matches(&piece, &price_filter(None, None), TokenMode::All));
        assert!(listing_matches(&piece, &price_filter(Some(7000.0), None), TokenMode::All));
        assert!(!listing_matches(&piece, &price_filter(None, Some(7000.0)), TokenMode::All));
    }

    // ============================================================
    // RANKING TESTS
    // ============================================================

    #[test]
    fn test_search_ranks_by_keyword_hits() {
        let store = sample_store();
        let filter = keyword_filter(&["blue", "portrait"]);

        let ranked = search(&store, &filter, TokenMode::Any);

        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].0.title, "Portrait of a Dancer");
        assert_eq!(ranked[0].1, 2, "Both keywords should hit the portrait");
        assert_eq!(ranked[1].0.title, "Blue Period");
        assert_eq!(ranked[1].1, 1);
    }

    #[test]
    fn test_search_breaks_score_ties_by_title() {
        let store = sample_store();
        let filter = keyword_filter(&["abstract"]);

        let ranked = search(&store, &filter, TokenMode::All);

        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].0.title, "Blue Period");
        assert_eq!(ranked[1].0.title, "Minimalist Study");
        assert_eq!(ranked[0].1, ranked[1].1, "Tied scores should sort by title");
    }

    #[test]
    fn test_search_with_empty_filter_returns_everything() {
        let store = sample_store();

        let ranked = search(&store, &ParsedQuery::default(), TokenMode::All);

        assert_eq!(ranked.len(), 5);
        assert_eq!(ranked[0].0.title, "Blue Period");
    }

    #[test]
    fn test_search_price_filter_excludes_out_of_range() {
        let store = sample_store();

        let ranked = search(&store, &price_filter(None, Some(1000.0)), TokenMode::All);

        // Only the sketch is priced under 1000; the unpriced listing is
        // excluded once any bound is present.
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].0.title, "Street Sketch No 4");
    }

    // ============================================================
    // END-TO-END EXECUTION TESTS
    // ============================================================

    #[test]
    fn test_execute_search_end_to_end() {
        let store = sample_store();

        let response = execute_search(&store, "blue portrait under 3000", &SearchOptions::default());

        assert_eq!(response.query, "blue portrait under 3000");
        assert_eq!(response.filters.max_price, Some(3000.0));
        assert_eq!(response.filters.keywords, vec!["blue", "portrait"]);
        assert_eq!(response.total_count, 1);
        assert_eq!(response.results[0].title, "Portrait of a Dancer");
        assert_eq!(response.results[0].score, 2);
    }

    #[test]
    fn test_execute_search_empty_query_returns_catalog() {
        let store = sample_store();

        let response = execute_search(&store, "", &SearchOptions::default());

        assert_eq!(response.total_count, 5);
        assert_eq!(response.count, 5);
    }

    #[test]
    fn test_execute_search_pagination_window() {
        let store = sample_store();
        let options = SearchOptions {
            limit: 2,
            offset: 1,
            ..SearchOptions::default()
        };

        let response = execute_search(&store, "", &options);

        assert_eq!(response.total_count, 5);
        assert_eq!(response.count, 2);
        assert_eq!(response.results[0].title, "Minimalist Study");
        assert_eq!(response.results[1].title, "Monsoon Skies");
    }

    #[test]
    fn test_execute_search_offset_past_end() {
        let store = sample_store();
        let options = SearchOptions {
            offset: 50,
            ..SearchOptions::default()
        };

        let response = execute_search(&store, "", &options);

        assert_eq!(response.total_count, 5);
        assert_eq!(response.count, 0);
        assert!(response.results.is_empty());
    }

    #[test]
    fn test_execute_search_match_any_widens_results() {
        let store = sample_store();

        let strict = execute_search(&store, "blue portrait", &SearchOptions::default());
        let loose = execute_search(
            &store,
            "blue portrait",
            &SearchOptions {
                mode: TokenMode::Any,
                ..SearchOptions::default()
            },
        );

        assert_eq!(strict.total_count, 1);
        assert_eq!(loose.total_count, 2);
    }

    #[test]
    fn test_execute_search_contradictory_bounds_match_nothing() {
        let store = sample_store();

        let response = execute_search(&store, "under 100 above 900", &SearchOptions::default());

        assert_eq!(response.filters.min_price, Some(900.0));
        assert_eq!(response.filters.max_price, Some(100.0));
        assert_eq!(response.total_count, 0);
        assert!(response.results.is_empty());
    }

    // ============================================================
    // TYPES TESTS - serialization
    // ============================================================

    #[test]
    fn test_search_result_item_serialization() {
        let item = SearchResultItem {
            listing_id: "listing-001".to_string(),
            title: "Monsoon Skies".to_string(),
            artist: "Aarav Mehta".to_string(),
            price: Some(7500.0),
            score: 2,
        };

        let json = serde_json::to_string(&item).unwrap();
        let restored: SearchResultItem = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.listing_id, "listing-001");
        assert_eq!(restored.price, Some(7500.0));
        assert_eq!(restored.score, 2);
    }

    #[test]
    fn test_search_response_serialization() {
        let store = sample_store();
        let response = execute_search(&store, "abstract under 5000", &SearchOptions::default());

        let json = serde_json::to_string(&response).unwrap();
        let restored: SearchResponse = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.query, "abstract under 5000");
        assert_eq!(restored.filters.max_price, Some(5000.0));
        assert_eq!(restored.total_count, response.total_count);
        assert_eq!(restored.results.len(), response.results.len());
    }

    #[test]
    fn test_search_response_empty_results() {
        let response = SearchResponse {
            query: "nonexistent query".to_string(),
            filters: ParsedQuery::default(),
            total_count: 0,
            count: 0,
            results: vec![],
        };

        let json = serde_json::to_string(&response).unwrap();
        let restored: SearchResponse = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.total_count, 0);
        assert!(restored.results.is_empty());
    }

    #[test]
    fn test_token_mode_defaults_to_all() {
        assert_eq!(TokenMode::default(), TokenMode::All);
        assert_eq!(SearchOptions::default().limit, 10);
        assert_eq!(SearchOptions::default().offset, 0);
    }
}
