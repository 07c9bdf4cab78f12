//! Property calculation errors.

use crate::region::Region;
use sp_solve::BisectError;
use thiserror::Error;

/// Result type for IF-97 operations.
pub type If97Result<T> = Result<T, If97Error>;

/// Errors that can occur during IF-97 property calculations.
#[derive(Error, Debug)]
pub enum If97Error {
    /// Input is NaN, infinite, or outside the global IF-97 envelope.
    /// Raised before any region is consulted.
    #[error("{what} outside the IF-97 envelope: {value}")]
    Domain { what: &'static str, value: f64 },

    /// Input is finite but outside the selected region's envelope.
    #[error("{region} not applicable: {what}")]
    Applicability { region: Region, what: String },

    /// The root finder could not locate a sign change or ran out of
    /// iterations.
    #[error("inversion failed in {region}: {what}")]
    Inversion { region: Region, what: String },

    /// Malformed embedded coefficient resource.
    #[error("coefficient table {name}: {what}")]
    Table { name: &'static str, what: String },

    /// A potential produced NaN/±∞ or a non-physical value despite finite
    /// inputs.
    #[error("{region} produced a non-finite or non-physical value for {what}")]
    NonFinite { region: Region, what: &'static str },

    /// (h,s) input maps outside Region 3; backward equations for the other
    /// regions are not implemented.
    #[error("(h,s) state not supported (guessed {guess}): {what}")]
    NotSupported { guess: Region, what: String },
}

impl If97Error {
    /// Collapse a bisection failure into an inversion error, letting
    /// evaluation errors from the inner function pass through untouched.
    pub(crate) fn from_bisect(region: Region, what: &'static str) -> impl Fn(BisectError<If97Error>) -> If97Error {
        move |e| match e {
            BisectError::Eval(inner) => inner,
            other => If97Error::Inversion {
                region,
                what: format!("{what}: {other}"),
            },
        }
    }
}
