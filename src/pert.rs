use crate::{
    confidence::ConfidenceIntervals,
    error::{EstimateError, Field},
    Date,
};
use core::str::FromStr;
use tracing::debug;

/// Weighted mean of a three-point estimate, `(best + 4 * likely + worst) / 6`, in seconds since
/// the Unix epoch.
///
/// Nothing requires `best <= likely <= worst`; any ordering produces a number.
pub fn pert_mean(best: &Date, likely: &Date, worst: &Date) -> f64 {
    let a = best.epoch_seconds() as f64;
    let m = likely.epoch_seconds() as f64;
    let b = worst.epoch_seconds() as f64;

    (a + 4.0 * m + b) / 6.0
}

/// Spread of a three-point estimate, `(worst - best) / 6`, in seconds.
///
/// Negative when `worst` precedes `best`.
pub fn pert_std_dev(best: &Date, worst: &Date) -> f64 {
    let a = best.epoch_seconds() as f64;
    let b = worst.epoch_seconds() as f64;

    (b - a) / 6.0
}

/// The three dates of a PERT estimate: optimistic, most likely, and pessimistic.
///
/// ```
/// use gestimate::prelude::*;
///
/// let estimate = Estimate::parse("2024/01/01", "2024/01/10", "2024/01/31").unwrap();
/// let intervals = estimate.pert().intervals();
/// assert_eq!("2024/01/17", intervals.get(ConfidenceLevel::P68).to_string());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Estimate {
    /// The optimistic date.
    pub best: Date,
    /// The most likely date.
    pub likely: Date,
    /// The pessimistic date.
    pub worst: Date,
}

impl Estimate {
    /// Returns a new [Estimate] from already parsed dates.
    pub fn new(best: Date, likely: Date, worst: Date) -> Self {
        Self {
            best,
            likely,
            worst,
        }
    }

    /// Parses three `YYYY/MM/DD` strings into an [Estimate].
    ///
    /// # Errors
    ///
    /// Returns [EstimateError::InvalidDate] naming the first of best, likely, worst (in that
    /// order) that does not parse.
    pub fn parse(best: &str, likely: &str, worst: &str) -> Result<Self, EstimateError> {
        let parse_field = |field: Field, date_str: &str| {
            Date::from_str(date_str).map_err(|source| EstimateError::InvalidDate { field, source })
        };

        Ok(Self::new(
            parse_field(Field::Best, best)?,
            parse_field(Field::Likely, likely)?,
            parse_field(Field::Worst, worst)?,
        ))
    }

    /// Returns true if `best <= likely <= worst`. Estimates that are not ordered still compute,
    /// but their spread may be negative.
    pub fn is_ordered(&self) -> bool {
        self.best <= self.likely && self.likely <= self.worst
    }

    /// Computes the PERT mean and standard deviation of this estimate.
    pub fn pert(&self) -> Pert {
        let pert = Pert {
            mean: pert_mean(&self.best, &self.likely, &self.worst),
            std_dev: pert_std_dev(&self.best, &self.worst),
        };
        debug!(
            best = %self.best,
            likely = %self.likely,
            worst = %self.worst,
            mean = pert.mean,
            std_dev = pert.std_dev,
            "computed pert estimate"
        );
        pert
    }
}

/// The PERT mean and standard deviation, both in (fractional) epoch seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pert {
    /// Expected completion instant.
    pub mean: f64,
    /// Standard deviation in seconds. May be negative.
    pub std_dev: f64,
}

impl Pert {
    /// The calendar date containing the mean.
    pub fn mean_date(&self) -> Date {
        Date::from_fractional_epoch_seconds(self.mean)
    }

    /// The standard deviation expressed in days.
    pub fn std_dev_days(&self) -> f64 {
        self.std_dev / 86_400.0
    }

    /// Derives the confidence dates for this estimate.
    pub fn intervals(&self) -> ConfidenceIntervals {
        ConfidenceIntervals::new(self.mean, self.std_dev)
    }
}
