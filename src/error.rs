use crate::models::OptionKind;
use thiserror::Error;

/// Errors raised while setting up a trip session or computing its result.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TripError {
    /// The calendar cannot represent January 1st of this year.
    #[error("year {year} is outside the supported calendar range")]
    InvalidYear { year: i32 },

    /// There is nothing to pick a winner from.
    #[error("no {kind} candidates to choose from")]
    NoCandidates { kind: OptionKind },

    /// A destination has the same name as one of the generated weekends.
    #[error("destination {destination:?} has the same name as a weekend")]
    DestinationClash { destination: String },

    /// A configuration value could not be parsed.
    #[error("invalid value {value:?} for {key}")]
    InvalidConfig { key: &'static str, value: String },
}
