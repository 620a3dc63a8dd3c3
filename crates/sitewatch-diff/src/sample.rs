//! Bounded-cost diffing for oversized sequences.
//!
//! When either side exceeds the unit cap, both sides are reduced to an
//! excerpt of at most `3 * (cap / 3)` units (head, middle and tail windows),
//! counted with the regular LCS core, and the counts are scaled back to the
//! magnitude of the full sequences.

use std::borrow::Cow;

use tracing::debug;

use crate::lcs::{CountFn, UnitCounts};
use crate::result::DiffResult;

/// Diff two unit sequences, sampling both if either exceeds `cap`.
///
/// Totals in the returned result are always the true lengths.
pub fn diff_sequences<T: PartialEq + Clone>(
    old: &[T],
    new: &[T],
    cap: usize,
    count: CountFn<T>,
) -> DiffResult {
    let counts = if old.len() > cap || new.len() > cap {
        sampled_counts(old, new, cap, count)
    } else {
        count(old, new)
    };

    DiffResult::new(
        counts.added,
        counts.removed,
        counts.unchanged,
        old.len(),
        new.len(),
    )
}

fn sampled_counts<T: PartialEq + Clone>(
    old: &[T],
    new: &[T],
    cap: usize,
    count: CountFn<T>,
) -> UnitCounts {
    let sample_size = cap / 3;
    let old_sample = sample_window(old, sample_size);
    let new_sample = sample_window(new, sample_size);

    debug!(
        cap,
        old_len = old.len(),
        new_len = new.len(),
        old_sample = old_sample.len(),
        new_sample = new_sample.len(),
        "sequence exceeds unit cap; diffing sampled excerpt"
    );

    let counts = count(&old_sample, &new_sample);
    let factor = scale_factor(
        old.len().max(new.len()),
        old_sample.len().max(new_sample.len()),
    );
    scale_counts(counts, factor)
}

/// Reduce `units` to its head, middle and tail windows of `sample_size` units.
///
/// A sequence of at most `3 * sample_size` units is returned whole, even
/// when the other side of the comparison is being reduced.
pub fn sample_window<T: Clone>(units: &[T], sample_size: usize) -> Cow<'_, [T]> {
    let len = units.len();
    if len <= sample_size * 3 {
        return Cow::Borrowed(units);
    }

    let middle_start = len / 2 - sample_size / 2;
    let mut sample = Vec::with_capacity(sample_size * 3);
    sample.extend_from_slice(&units[..sample_size]);
    sample.extend_from_slice(&units[middle_start..middle_start + sample_size]);
    sample.extend_from_slice(&units[len - sample_size..]);
    Cow::Owned(sample)
}

/// Ratio of the true magnitude to the sampled magnitude.
pub fn scale_factor(true_len: usize, sample_len: usize) -> f32 {
    if sample_len == 0 {
        return 1.0;
    }
    true_len as f32 / sample_len as f32
}

/// Scale each count by `factor`, rounding each one on its own.
///
/// Because the three values are rounded independently, their sum can differ
/// from the rounded scaled total by up to 1.5 units.
pub fn scale_counts(counts: UnitCounts, factor: f32) -> UnitCounts {
    UnitCounts {
        added: scale(counts.added, factor),
        removed: scale(counts.removed, factor),
        unchanged: scale(counts.unchanged, factor),
    }
}

fn scale(value: usize, factor: f32) -> usize {
    // Non-negative inputs, so `round` (half away from zero) is half-up.
    (value as f32 * factor).round() as usize
}
