//! # Catalog Module
//!
//! ## Overview
//! In-memory catalog of artwork listings. Holds the records the search
//! engine filters and ranks, and loads seed data from JSON files.
//!
//! ## Responsibilities
//! - Define the listing record and its insertion payload
//! - Store listings in a concurrent map keyed by listing id
//! - Bulk-load listings from JSON documents and files
//!
//! ## Submodules
//! - `types`: listing record and draft payload
//! - `store`: concurrent listing store

pub mod store;
pub mod types;
