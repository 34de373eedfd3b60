use crate::Date;
use core::{
    fmt::{self, Display},
    slice,
};
use tracing::trace;

/// A one-sided confidence level and the number of standard deviations past the mean it sits at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ConfidenceLevel {
    /// 68%, one standard deviation.
    P68,
    /// 90%, 1.645 standard deviations.
    P90,
    /// 95%, two standard deviations.
    P95,
}

impl ConfidenceLevel {
    /// All levels in display order.
    pub const ALL: [ConfidenceLevel; 3] = [
        ConfidenceLevel::P68,
        ConfidenceLevel::P90,
        ConfidenceLevel::P95,
    ];

    /// The multiplier applied to the standard deviation.
    pub fn z_score(&self) -> f64 {
        match self {
            ConfidenceLevel::P68 => 1.0,
            ConfidenceLevel::P90 => 1.645,
            ConfidenceLevel::P95 => 2.0,
        }
    }

    /// The label used in output, such as `68%`.
    pub fn label(&self) -> &'static str {
        match self {
            ConfidenceLevel::P68 => "68%",
            ConfidenceLevel::P90 => "90%",
            ConfidenceLevel::P95 => "95%",
        }
    }
}

impl Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A projected completion date at some confidence level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    /// The confidence level.
    pub level: ConfidenceLevel,
    /// The date by the end of which the work completes with that confidence.
    pub date: Date,
}

impl Display for Interval {
    /// Renders the table row, such as `68% Confidence: 2024/01/17`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Confidence: {}", self.level, self.date)
    }
}

/// The 68%, 90%, and 95% completion dates of an estimate, in that order.
///
/// Each date is `mean + z * std_dev` with the time of day dropped, so it should be read as
/// "done by the end of this day".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfidenceIntervals {
    intervals: [Interval; 3],
}

impl ConfidenceIntervals {
    /// Derives the intervals from a mean and standard deviation in epoch seconds.
    pub fn new(mean: f64, std_dev: f64) -> Self {
        let intervals = ConfidenceLevel::ALL.map(|level| {
            let secs = mean + level.z_score() * std_dev;
            trace!(%level, secs, "confidence instant");
            Interval {
                level,
                date: Date::from_fractional_epoch_seconds(secs),
            }
        });
        Self { intervals }
    }

    /// Returns the date for `level`.
    pub fn get(&self, level: ConfidenceLevel) -> Date {
        // ALL is in declaration order, so the discriminant is the index
        self.intervals[level as usize].date
    }

    /// Iterates over the intervals in display order.
    pub fn iter(&self) -> slice::Iter<'_, Interval> {
        self.intervals.iter()
    }
}

impl<'a> IntoIterator for &'a ConfidenceIntervals {
    type Item = &'a Interval;
    type IntoIter = slice::Iter<'a, Interval>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
