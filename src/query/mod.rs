//! Query Interpretation Module
//!
//! The core component responsible for turning raw search-box text into a
//! structured listing filter.
//!
//! ## Overview
//! Queries like "landscape oil painting between 2000 and 7500" mix keywords
//! with price phrasing. This module extracts both: price cues are matched by
//! priority-ordered pattern tables and removed from the working text, then the
//! remaining words are tokenized into keywords. The whole pipeline is a pure
//! function of the input string; it never fails and returns an empty filter
//! for empty input.
//!
//! ## Responsibilities
//! - **Normalization**: Lowercasing, currency-notation collapsing, grouping
//!   comma removal, whitespace collapsing.
//! - **Price extraction**: Range, ceiling, floor, and exact-price passes, each
//!   consuming the text it matched so later passes cannot re-match it.
//! - **Keyword extraction**: Cue-word scrubbing, tokenization, and stopword
//!   filtering on whatever text the price passes left behind.
//!
//! ## Submodules
//! - **`parser`**: The `parse_query` entry point wiring the passes together.
//! - **`normalize`**: Text normalization and numeric amount parsing.
//! - **`price`**: Pattern tables and the four price-extraction stages.
//! - **`keywords`**: Keyword tokenization and the stopword list.
//! - **`types`**: The `ParsedQuery` result type.

pub mod keywords;
pub mod normalize;
pub mod parser;
pub mod price;
pub mod types;
