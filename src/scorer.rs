//! Quality scoring.
//!
//! The 0-100 score is the sum of three independent sub-scores so that each
//! axis can be shown to the user on its own:
//!
//! | Component   | Max | Input                     |
//! |-------------|-----|---------------------------|
//! | Length      | 40  | word count                |
//! | Readability | 40  | Flesch Reading Ease       |
//! | Structure   | 20  | average words per sentence |
//!
//! Every banded rule is a [`Ladder`]: an ordered list of bands evaluated top
//! down, with the first matching band winning and a floor for no match.

use std::fmt;
use std::ops::{Bound, RangeBounds};

use serde::Serialize;

use crate::metrics::Metrics;

/// Maximum possible quality score.
pub const MAX_SCORE: u8 = 100;

/// One band of a ladder: a value range and the points it awards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    /// Lower bound of the band.
    pub low: Bound<f64>,
    /// Upper bound of the band.
    pub high: Bound<f64>,
    /// Points awarded when the value falls in the band.
    pub points: u8,
}

impl Band {
    /// Band covering `low..` (inclusive lower bound, no upper bound).
    #[must_use]
    pub const fn at_least(low: f64, points: u8) -> Self {
        Self {
            low: Bound::Included(low),
            high: Bound::Unbounded,
            points,
        }
    }

    /// Band covering `low..=high`.
    #[must_use]
    pub const fn between(low: f64, high: f64, points: u8) -> Self {
        Self {
            low: Bound::Included(low),
            high: Bound::Included(high),
            points,
        }
    }

    /// Band covering values strictly greater than `low`.
    #[must_use]
    pub const fn above(low: f64, points: u8) -> Self {
        Self {
            low: Bound::Excluded(low),
            high: Bound::Unbounded,
            points,
        }
    }

    /// Whether `value` falls in this band.
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        (self.low, self.high).contains(&value)
    }
}

/// An ordered list of bands with a floor for values no band matches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ladder {
    /// Bands in evaluation order.
    pub bands: &'static [Band],
    /// Points when no band matches.
    pub floor: u8,
}

impl Ladder {
    /// Points for `value`: the first matching band, else the floor.
    #[must_use]
    pub fn points(&self, value: f64) -> u8 {
        self.bands
            .iter()
            .find(|band| band.contains(value))
            .map_or(self.floor, |band| band.points)
    }

    /// Highest points this ladder can award.
    #[must_use]
    pub fn max_points(&self) -> u8 {
        self.bands
            .iter()
            .map(|band| band.points)
            .fold(self.floor, u8::max)
    }
}

/// Word count → length points (max 40). Never below 10, even for empty text.
pub const LENGTH_LADDER: Ladder = Ladder {
    bands: &[
        Band::at_least(1500.0, 40),
        Band::at_least(1000.0, 30),
        Band::at_least(500.0, 20),
    ],
    floor: 10,
};

/// Readability → readability points (max 40).
///
/// Non-positive scores, including the `0.0` floor for short or unscorable
/// text, fall through to the floor.
pub const READABILITY_LADDER: Ladder = Ladder {
    bands: &[
        Band::between(50.0, 70.0, 40),
        Band::between(40.0, 80.0, 30),
        Band::above(0.0, 20),
    ],
    floor: 10,
};

/// Average words per sentence → structure points (max 20).
///
/// Only consulted when at least one sentence was detected.
pub const STRUCTURE_LADDER: Ladder = Ladder {
    bands: &[Band::between(15.0, 25.0, 20), Band::between(10.0, 30.0, 15)],
    floor: 10,
};

/// A bounded 0-100 quality score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct QualityScore(u8);

impl QualityScore {
    /// Build a score, capping at [`MAX_SCORE`].
    #[must_use]
    pub fn new(value: u32) -> Self {
        let capped = value.min(u32::from(MAX_SCORE));
        Self(u8::try_from(capped).unwrap_or(MAX_SCORE))
    }

    /// The score as an integer.
    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }

    /// Display band for the score.
    #[must_use]
    pub fn band(self) -> ScoreBand {
        match self.0 {
            70.. => ScoreBand::Good,
            50..=69 => ScoreBand::Fair,
            _ => ScoreBand::Poor,
        }
    }
}

impl fmt::Display for QualityScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0, MAX_SCORE)
    }
}

/// Coarse display band of a quality score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreBand {
    /// 70 and above.
    Good,
    /// 50 to 69.
    Fair,
    /// Below 50.
    Poor,
}

/// Per-component points behind a quality score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreBreakdown {
    /// Length points (10-40).
    pub length: u8,
    /// Readability points (10-40).
    pub readability: u8,
    /// Structure points (10-20), `None` when no sentence was detected.
    ///
    /// A document without sentences earns no structure credit at all,
    /// rather than the 10 point floor.
    pub structure: Option<u8>,
}

impl ScoreBreakdown {
    /// Score each component of `metrics`.
    #[must_use]
    pub fn from_metrics(metrics: &Metrics) -> Self {
        Self {
            length: LENGTH_LADDER.points(metrics.word_count as f64),
            readability: READABILITY_LADDER.points(metrics.readability_score),
            structure: metrics
                .avg_words_per_sentence()
                .map(|avg| STRUCTURE_LADDER.points(avg)),
        }
    }

    /// Sum of the components, capped at 100.
    #[must_use]
    pub fn total(&self) -> QualityScore {
        let sum = u32::from(self.length)
            + u32::from(self.readability)
            + u32::from(self.structure.unwrap_or(0));
        QualityScore::new(sum)
    }
}

/// Compute the 0-100 quality score for `metrics`.
///
/// # Example
///
/// ```rust
/// use rs_content_quality::metrics::Metrics;
/// use rs_content_quality::scorer::score;
///
/// let metrics = Metrics { word_count: 1800, sentence_count: 90, readability_score: 60.0 };
/// assert_eq!(score(&metrics).value(), 100);
/// ```
#[must_use]
pub fn score(metrics: &Metrics) -> QualityScore {
    ScoreBreakdown::from_metrics(metrics).total()
}
