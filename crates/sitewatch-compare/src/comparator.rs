use sitewatch_diff::DiffAlgorithm;
use tracing::{debug, info};

use crate::comparison::ComparisonResult;
use crate::config::CompareConfig;

/// Compares successive snapshots of a watched resource.
///
/// Inputs are text already extracted by the fetcher. A missing snapshot is
/// `None`: the first check of a site has no previous content, and a failed
/// extraction has no new content.
#[derive(Clone, Debug, Default)]
pub struct ContentComparator {
    config: CompareConfig,
}

impl ContentComparator {
    /// Create a comparator with the given configuration.
    pub fn new(config: CompareConfig) -> Self {
        Self { config }
    }

    /// The current configuration.
    pub fn config(&self) -> &CompareConfig {
        &self.config
    }

    /// The algorithm this comparator dispatches to.
    pub fn algorithm(&self) -> DiffAlgorithm {
        self.config.algorithm
    }

    /// Compare two snapshots.
    ///
    /// Identical snapshots short-circuit without running the diff engine.
    /// Engine results below the configured noise floor are reported as
    /// unchanged.
    pub fn compare(&self, old: Option<&str>, new: Option<&str>) -> ComparisonResult {
        let (old, new) = match (old, new) {
            (None, None) => return ComparisonResult::no_change(0),
            (None, Some(new)) => {
                return ComparisonResult::changed(100.0, 0, char_len(new), "Initial content captured")
            }
            (Some(old), None) => {
                return ComparisonResult::changed(
                    100.0,
                    char_len(old),
                    0,
                    "Content no longer available",
                )
            }
            (Some(old), Some(new)) => (old, new),
        };

        let old_size = char_len(old);
        if old == new {
            return ComparisonResult::no_change(old_size);
        }
        let new_size = char_len(new);

        let algorithm = self.config.algorithm;
        let diff = algorithm.compute_diff(old, new);
        let change_percent = diff.change_percent();

        if change_percent < self.config.noise_floor_percent {
            debug!(
                algorithm = algorithm.name(),
                change_percent,
                noise_floor = self.config.noise_floor_percent,
                "change below noise floor"
            );
            return ComparisonResult::no_change(old_size);
        }

        info!(
            algorithm = algorithm.name(),
            change_percent,
            old_size,
            new_size,
            "content changed"
        );
        ComparisonResult::changed(change_percent, old_size, new_size, diff.description())
    }

    /// Returns `true` if `result` crosses the configured alert threshold.
    pub fn should_alert(&self, result: &ComparisonResult) -> bool {
        result.is_significant_change(self.config.threshold_percent)
    }
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}
