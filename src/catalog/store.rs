use super::types::{Listing, ListingDraft};
use anyhow::Context;
use dashmap::DashMap;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Concurrent in-memory listing store keyed by listing id.
#[derive(Debug, Default)]
pub struct ListingStore {
    listings: DashMap<String, Listing>,
}

impl ListingStore {
    pub fn new() -> Self {
        Self {
            listings: DashMap::new(),
        }
    }

    /// Inserts a draft, assigning a fresh id and creation timestamp, and
    /// returns the stored listing.
    pub fn insert(&self, draft: ListingDraft) -> Listing {
        let listing = Listing {
            listing_id: Uuid::new_v4().to_string(),
            title: draft.title,
            artist: draft.artist,
            description: draft.description,
            price: draft.price,
            img_url: draft.img_url,
            created_at: now_ms(),
        };
        tracing::debug!("Stored listing {} ({:?})", listing.listing_id, listing.title);
        self.listings
            .insert(listing.listing_id.clone(), listing.clone());
        listing
    }

    /// Inserts or replaces a fully-formed listing under its own id.
    pub fn put(&self, listing: Listing) {
        self.listings.insert(listing.listing_id.clone(), listing);
    }

    pub fn get(&self, listing_id: &str) -> Option<Listing> {
        self.listings
            .get(listing_id)
            .map(|entry| entry.value().clone())
    }

    /// Snapshot of every stored listing, in arbitrary order.
    pub fn all(&self) -> Vec<Listing> {
        self.listings
            .iter()
            .map(|entry| entry.value().clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    /// Parses a JSON array of listing drafts and stores each one. Returns
    /// how many listings were added.
    pub fn load_json_str(&self, raw: &str) -> anyhow::Result<usize> {
        let drafts: Vec<ListingDraft> =
            serde_json::from_str(raw).context("Failed to parse listing JSON")?;
        let count = drafts.len();
        for draft in drafts {
            self.insert(draft);
        }
        tracing::info!("Loaded {} listing(s) into the catalog", count);
        Ok(count)
    }

    /// Reads a JSON file of listing drafts and stores each one.
    pub fn load_json_file(&self, path: &Path) -> anyhow::Result<usize> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog file {:?}", path))?;
        self.load_json_str(&raw)
    }
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|duration| duration.as_millis() as u64)
        .unwrap_or(0)
}
