//! Snapshot comparison for SiteWatch.
//!
//! Wraps the diff engine with the policy around it: missing snapshots,
//! identical-content short-circuit, a noise floor for negligible changes,
//! and the alert threshold check.
//!
//! # Quick Start
//!
//! ```rust
//! use sitewatch_compare::{CompareConfig, ContentComparator};
//! use sitewatch_diff::DiffAlgorithm;
//!
//! let comparator = ContentComparator::new(CompareConfig::with_algorithm(DiffAlgorithm::Word));
//! let result = comparator.compare(
//!     Some("The product costs $99"),
//!     Some("The product costs $79"),
//! );
//! assert!(result.has_changed);
//! assert!(comparator.should_alert(&result));
//! ```

pub mod comparator;
pub mod comparison;
pub mod config;
pub mod error;

pub use comparator::ContentComparator;
pub use comparison::ComparisonResult;
pub use config::{CompareConfig, DEFAULT_NOISE_FLOOR_PERCENT, DEFAULT_THRESHOLD_PERCENT};
pub use error::{ConfigError, ConfigResult};
