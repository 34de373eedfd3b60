//! # gestimate
//!
//! A library for three-point (PERT) schedule estimation over calendar dates.
//!
//! Give it an optimistic, a most likely, and a pessimistic completion date, and it computes the
//! weighted mean and standard deviation of the estimate and projects the dates by which the work
//! should be done with 68%, 90%, and 95% confidence.
//!
//! ## Examples
//!
//! ```
//! use gestimate::prelude::*;
//!
//! let estimate = Estimate::parse(
//!   "2024/01/01", // best case
//!   "2024/01/10", // most likely case
//!   "2024/01/31", // worst case
//! ).unwrap();
//!
//! let pert = estimate.pert();
//! assert_eq!("2024/01/12", pert.mean_date().to_string());
//! assert_eq!(5.0, pert.std_dev_days());
//!
//! let intervals = pert.intervals();
//! let dates: Vec<String> = intervals.iter().map(|i| i.date.to_string()).collect();
//! assert_eq!(vec!["2024/01/17", "2024/01/20", "2024/01/22"], dates);
//! ```
//!
//! ## Formulas
//!
//! Every date is converted to seconds since the Unix epoch at midnight UTC, then:
//!
//! | Quantity | Formula |
//! |---|---|
//! | Mean | `(best + 4 * likely + worst) / 6` |
//! | Standard deviation | `(worst - best) / 6` |
//! | 68% date | `mean + 1.0 * std_dev` |
//! | 90% date | `mean + 1.645 * std_dev` |
//! | 95% date | `mean + 2.0 * std_dev` |
//!
//! Projected instants are converted back to dates by dropping the time of day, so a reported
//! date means "done by the end of this day". Inputs out of order are not rejected: a worst date
//! before the best date yields a negative standard deviation, and the confidence dates fall before
//! the mean instead of after it.
//!
//! ## Dates
//!
//! Dates are always written `YYYY/MM/DD`, zero-padded, and must exist in the Gregorian calendar.
//!
//! ```
//! use gestimate::prelude::*;
//!
//! assert!("2024/02/29".parse::<Date>().is_ok());
//! assert!(matches!(
//!   "2024-02-29".parse::<Date>(),
//!   Err(DateError::InvalidDateFormat { .. })
//! ));
//! ```
//!
//! ## Prelude
//!
//! gestimate provides a prelude module for convenience. Use it with:
//!
//! ```
//! use gestimate::prelude::*;
//! ```
#![warn(missing_docs)]

mod confidence;
mod date;
mod error;
mod pert;

pub use crate::confidence::{ConfidenceIntervals, ConfidenceLevel, Interval};
pub use crate::date::{Date, DATE_FORMAT};
pub use crate::error::{DateError, EstimateError, Field};
pub use crate::pert::{pert_mean, pert_std_dev, Estimate, Pert};

/// A convenience module appropriate for glob imports (`use gestimate::prelude::*;`).
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::ConfidenceIntervals;
    #[doc(no_inline)]
    pub use crate::ConfidenceLevel;
    #[doc(no_inline)]
    pub use crate::Date;
    #[doc(no_inline)]
    pub use crate::DateError;
    #[doc(no_inline)]
    pub use crate::Estimate;
    #[doc(no_inline)]
    pub use crate::EstimateError;
    #[doc(no_inline)]
    pub use crate::Field;
    #[doc(no_inline)]
    pub use crate::Interval;
    #[doc(no_inline)]
    pub use crate::Pert;
}
