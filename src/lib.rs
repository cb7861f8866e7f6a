//! Clyst Search Library
//!
//! This library crate implements the search subsystem of the Clyst art
//! marketplace: natural-language query interpretation over a listing catalog.
//!
//! ## Architecture Modules
//! The crate is composed of three loosely coupled subsystems:
//!
//! - **`query`**: The query interpretation core. Turns a free-text search
//!   string (e.g. "minimalist monochrome abstracts under ₹5k") into a
//!   structured filter: keyword tokens plus optional inclusive price bounds.
//! - **`search`**: The retrieval logic. Applies a structured filter to
//!   listings (substring matching across text fields, price range checks),
//!   scores matches by keyword overlap, and assembles ranked, paginated
//!   responses.
//! - **`catalog`**: The listing state layer. A concurrent in-memory store for
//!   artwork listings with UUID identifiers and JSON catalog loading.

pub mod catalog;
pub mod query;
pub mod search;
