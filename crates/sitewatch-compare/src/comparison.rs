use std::fmt;

use serde::Serialize;

/// The outcome of comparing two snapshots, ready for the alerting decision.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ComparisonResult {
    /// Change percentage, clamped to `0.0..=100.0`.
    pub change_percent: f32,
    /// Size of the old content in characters.
    pub old_size: usize,
    /// Size of the new content in characters.
    pub new_size: usize,
    /// Whether the content is considered changed.
    pub has_changed: bool,
    /// Brief description of the change.
    pub description: String,
}

impl ComparisonResult {
    /// Create a result, clamping the percentage into `0.0..=100.0`.
    pub fn new(
        change_percent: f32,
        old_size: usize,
        new_size: usize,
        has_changed: bool,
        description: impl Into<String>,
    ) -> Self {
        Self {
            change_percent: change_percent.clamp(0.0, 100.0),
            old_size,
            new_size,
            has_changed,
            description: description.into(),
        }
    }

    /// A result for content that did not change.
    pub fn no_change(size: usize) -> Self {
        Self::new(0.0, size, size, false, "No changes detected")
    }

    /// A result for content that changed.
    pub fn changed(
        change_percent: f32,
        old_size: usize,
        new_size: usize,
        description: impl Into<String>,
    ) -> Self {
        Self::new(change_percent, old_size, new_size, true, description)
    }

    /// Signed size difference; positive when the new content is larger.
    pub fn size_difference(&self) -> i64 {
        self.new_size as i64 - self.old_size as i64
    }

    /// Absolute size difference.
    pub fn absolute_size_difference(&self) -> usize {
        self.new_size.abs_diff(self.old_size)
    }

    /// Returns `true` if the content changed by at least `threshold_percent`.
    pub fn is_significant_change(&self, threshold_percent: f32) -> bool {
        self.has_changed && self.change_percent >= threshold_percent
    }
}

impl fmt::Display for ComparisonResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = if self.has_changed { "changed" } else { "unchanged" };
        write!(
            f,
            "{state} ({:.2}%, {} -> {} chars): {}",
            self.change_percent, self.old_size, self.new_size, self.description
        )
    }
}
