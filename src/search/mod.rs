//! Search Execution Module
//!
//! The core component responsible for executing parsed queries against the catalog.
//!
//! ## Overview
//! This module turns a parsed filter into ranked results. It sits between the
//! query interpretation layer and the catalog store: listings stream out of
//! the store, pass through the match predicates, and come back as a scored,
//! paginated response.
//!
//! ## Responsibilities
//! - **Matching**: Testing individual listings against keyword and price filters.
//! - **Ranking**: Scoring matches by keyword hit count with a stable tiebreak.
//! - **Assembly**: Applying pagination and shaping the response DTO.
//!
//! ## Submodules
//! - **`engine`**: Contains the core ranking and response assembly logic.
//! - **`matcher`**: Per-listing match predicates.
//! - **`types`**: Search options and response DTOs.

pub mod engine;
pub mod matcher;
pub mod types;

#[cfg(test)]
mod tests;
