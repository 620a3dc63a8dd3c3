//! The closed set of diff granularities and their shared contract.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::DiffError;
use crate::lcs::{backtrack_counts, rowwise_counts};
use crate::result::DiffResult;
use crate::sample::diff_sequences;
use crate::units;

/// Maximum line count diffed without sampling.
pub const LINE_UNIT_CAP: usize = 5_000;
/// Maximum word count diffed without sampling.
pub const WORD_UNIT_CAP: usize = 10_000;
/// Maximum character count diffed without sampling.
pub const CHARACTER_UNIT_CAP: usize = 10_000;

/// A diff granularity.
///
/// Every variant offers the same operations: [`compute_diff`](Self::compute_diff),
/// [`name`](Self::name) and [`description`](Self::description).
///
/// | Content | Variant |
/// |---|---|
/// | Code, HTML, structured text | [`Line`](Self::Line) |
/// | Articles, product descriptions | [`Word`](Self::Word) |
/// | Prices, counters, typos | [`Character`](Self::Character) |
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffAlgorithm {
    /// LCS over newline-delimited lines.
    #[default]
    Line,
    /// LCS over whitespace-delimited words.
    Word,
    /// LCS over individual characters, with a two-row table.
    Character,
}

impl DiffAlgorithm {
    /// All variants, in catalogue order.
    pub const ALL: [DiffAlgorithm; 3] = [Self::Line, Self::Word, Self::Character];

    /// Compare two snapshots and summarize how much changed.
    ///
    /// Total over all inputs, including empty strings. Sequences above
    /// [`unit_cap`](Self::unit_cap) are sampled, so time and memory are
    /// bounded by the cap rather than by the input size.
    pub fn compute_diff(&self, old: &str, new: &str) -> DiffResult {
        let cap = self.unit_cap();
        let result = match self {
            Self::Line => {
                diff_sequences(&units::lines(old), &units::lines(new), cap, backtrack_counts)
            }
            Self::Word => {
                diff_sequences(&units::words(old), &units::words(new), cap, backtrack_counts)
            }
            Self::Character => {
                diff_sequences(&units::chars(old), &units::chars(new), cap, rowwise_counts)
            }
        };

        debug!(
            algorithm = self.name(),
            old_units = result.total_old_units(),
            new_units = result.total_new_units(),
            added = result.added_units(),
            removed = result.removed_units(),
            change_percent = result.change_percent(),
            "computed diff"
        );
        result
    }

    /// Short name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Line => "LCS",
            Self::Word => "Word",
            Self::Character => "Character",
        }
    }

    /// What the algorithm does and what it is best at.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Line => {
                "Longest Common Subsequence - Standard diff algorithm used by Git. \
                 Accurately detects additions and deletions. Best for general use."
            }
            Self::Word => {
                "Word-based diff using LCS on words. More sensitive to small text changes. \
                 Best for articles, descriptions, and prose content."
            }
            Self::Character => {
                "Character-based diff using LCS on individual characters. \
                 Most sensitive to tiny changes. Best for prices, numbers, or typos."
            }
        }
    }

    /// Label for selection menus.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Line => "Line-based (Default)",
            Self::Word => "Word-based",
            Self::Character => "Character-based",
        }
    }

    /// One-line blurb shown next to [`display_name`](Self::display_name).
    pub fn summary(&self) -> &'static str {
        match self {
            Self::Line => "Standard diff like Git. Compares whole lines.",
            Self::Word => "Compares individual words. Better for text/prose.",
            Self::Character => "Compares individual characters. Most sensitive.",
        }
    }

    /// Sequence length above which inputs are sampled.
    pub fn unit_cap(&self) -> usize {
        match self {
            Self::Line => LINE_UNIT_CAP,
            Self::Word => WORD_UNIT_CAP,
            Self::Character => CHARACTER_UNIT_CAP,
        }
    }

    /// The identifier accepted by [`FromStr`] and serde.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Line => "line",
            Self::Word => "word",
            Self::Character => "character",
        }
    }
}

impl fmt::Display for DiffAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DiffAlgorithm {
    type Err = DiffError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "line" | "lcs" => Ok(Self::Line),
            "word" => Ok(Self::Word),
            "character" | "char" => Ok(Self::Character),
            _ => Err(DiffError::UnknownAlgorithm(s.to_string())),
        }
    }
}
