//! The immutable outcome of one diff computation.

use std::fmt;

use serde::Serialize;

/// Change statistics for one pair of snapshots.
///
/// The percentage and description are derived from the counts in
/// [`DiffResult::new`] and cannot be set independently.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DiffResult {
    added_units: usize,
    removed_units: usize,
    unchanged_units: usize,
    total_old_units: usize,
    total_new_units: usize,
    change_percent: f32,
    description: String,
}

impl DiffResult {
    /// Build a result from raw counts and the true sequence lengths.
    pub fn new(
        added_units: usize,
        removed_units: usize,
        unchanged_units: usize,
        total_old_units: usize,
        total_new_units: usize,
    ) -> Self {
        let changed = added_units + removed_units;
        let max_units = total_old_units.max(total_new_units);
        let change_percent = if max_units > 0 {
            (changed as f32 / max_units as f32) * 100.0
        } else {
            0.0
        };
        let description = describe(added_units, removed_units, change_percent);

        Self {
            added_units,
            removed_units,
            unchanged_units,
            total_old_units,
            total_new_units,
            change_percent,
            description,
        }
    }

    /// Units present only in the new content.
    pub fn added_units(&self) -> usize {
        self.added_units
    }

    /// Units present only in the old content.
    pub fn removed_units(&self) -> usize {
        self.removed_units
    }

    /// Units common to both.
    pub fn unchanged_units(&self) -> usize {
        self.unchanged_units
    }

    /// Length of the old unit sequence, never the sampled length.
    pub fn total_old_units(&self) -> usize {
        self.total_old_units
    }

    /// Length of the new unit sequence, never the sampled length.
    pub fn total_new_units(&self) -> usize {
        self.total_new_units
    }

    /// `(added + removed) / max(total_old, total_new) * 100`, or `0` when both
    /// sides are empty. May exceed 100 when most units were replaced.
    pub fn change_percent(&self) -> f32 {
        self.change_percent
    }

    /// Human-readable summary, e.g. `"1 units added, 1 units removed (66.7% change)"`.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns `true` if no unit was added or removed.
    pub fn is_unchanged(&self) -> bool {
        self.added_units == 0 && self.removed_units == 0
    }
}

impl fmt::Display for DiffResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description)
    }
}

fn describe(added: usize, removed: usize, change_percent: f32) -> String {
    let summary = match (added > 0, removed > 0) {
        (true, true) => format!("{added} units added, {removed} units removed"),
        (true, false) => format!("{added} units added"),
        (false, true) => format!("{removed} units removed"),
        (false, false) => "Content modified".to_string(),
    };
    format!("{summary} ({:.1}% change)", round_half_up_tenths(change_percent))
}

/// Round to one decimal place with ties going up.
///
/// `{:.1}` alone rounds exact ties to even (`0.25` prints as `0.2`). An `f32`
/// has a 24-bit mantissa, so scaling by ten in `f64` is exact and ties stay
/// ties before rounding.
fn round_half_up_tenths(value: f32) -> f64 {
    (f64::from(value) * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_uses_larger_side() {
        let r = DiffResult::new(1, 1, 2, 3, 3);
        assert!((r.change_percent() - 66.666_67).abs() < 1e-3);

        let r = DiffResult::new(4, 0, 6, 6, 10);
        assert_eq!(r.change_percent(), 40.0);
    }

    #[test]
    fn empty_totals_are_zero_percent() {
        let r = DiffResult::new(0, 0, 0, 0, 0);
        assert_eq!(r.change_percent(), 0.0);
        assert!(r.is_unchanged());
        assert_eq!(r.description(), "Content modified (0.0% change)");
    }

    #[test]
    fn description_added_and_removed() {
        let r = DiffResult::new(1, 1, 2, 3, 3);
        assert_eq!(r.description(), "1 units added, 1 units removed (66.7% change)");
    }

    #[test]
    fn description_rounds_ties_up() {
        // 1 of 400 is exactly 0.25%.
        let r = DiffResult::new(1, 0, 399, 399, 400);
        assert_eq!(r.change_percent(), 0.25);
        assert_eq!(r.description(), "1 units added (0.3% change)");

        let r = DiffResult::new(1, 0, 79, 79, 80);
        assert_eq!(r.change_percent(), 1.25);
        assert_eq!(r.description(), "1 units added (1.3% change)");
    }

    #[test]
    fn description_added_only() {
        let r = DiffResult::new(2, 0, 3, 3, 5);
        assert_eq!(r.description(), "2 units added (40.0% change)");
    }

    #[test]
    fn description_removed_only() {
        let r = DiffResult::new(0, 3, 1, 4, 1);
        assert_eq!(r.description(), "3 units removed (75.0% change)");
    }

    #[test]
    fn percent_can_exceed_hundred() {
        let r = DiffResult::new(2, 2, 0, 2, 2);
        assert_eq!(r.change_percent(), 200.0);
    }

    #[test]
    fn display_matches_description() {
        let r = DiffResult::new(1, 0, 0, 0, 1);
        assert_eq!(r.to_string(), r.description());
    }

    #[test]
    fn serializes_derived_fields() {
        let r = DiffResult::new(1, 1, 4, 5, 5);
        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(json["added_units"], 1);
        assert_eq!(json["total_new_units"], 5);
        assert_eq!(json["change_percent"], 40.0);
        assert_eq!(json["description"], "1 units added, 1 units removed (40.0% change)");
    }
}
