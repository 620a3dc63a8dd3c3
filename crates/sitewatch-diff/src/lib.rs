//! Content diff engine for SiteWatch.
//!
//! Quantifies how much a new snapshot of a watched resource differs from the
//! previous one. Three granularities (line, word, character) share one
//! LCS routine; oversized inputs are sampled so the cost stays bounded.
//!
//! # Key Types
//!
//! - [`DiffAlgorithm`] -- The granularity to compare at, and the entry point
//! - [`DiffResult`] -- Added/removed/unchanged counts with a derived change percentage
//!
//! # Example
//!
//! ```rust
//! use sitewatch_diff::DiffAlgorithm;
//!
//! let result = DiffAlgorithm::Word.compute_diff(
//!     "The product costs $99",
//!     "The product costs $79",
//! );
//! assert_eq!(result.unchanged_units(), 3);
//! assert_eq!(result.change_percent(), 50.0);
//! assert_eq!(result.description(), "1 units added, 1 units removed (50.0% change)");
//! ```

pub mod algorithm;
pub mod error;
pub mod lcs;
pub mod result;
pub mod sample;
pub mod units;

pub use algorithm::{DiffAlgorithm, CHARACTER_UNIT_CAP, LINE_UNIT_CAP, WORD_UNIT_CAP};
pub use error::DiffError;
pub use lcs::UnitCounts;
pub use result::DiffResult;
