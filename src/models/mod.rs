use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;

/// Destinations offered when no list is configured.
pub const DEFAULT_DESTINATIONS: [&str; 15] = [
    "Miami",
    "Las Vegas",
    "Austin",
    "New Orleans",
    "Nashville",
    "Denver",
    "Chicago",
    "Los Angeles",
    "San Diego",
    "Orlando",
    "Montreal",
    "Cancun",
    "San Francisco",
    "Boston",
    "Seattle",
];

/// Ratings a voter may give an option.
pub const RATING_SCALE: RangeInclusive<i32> = 1..=5;

/// Marker attached to every computed trip.
pub const TRIP_MARKER: &str = "🛫";

/// Which of the two candidate lists an option belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OptionKind {
    Destination,
    Weekend,
}

impl fmt::Display for OptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionKind::Destination => f.write_str("destination"),
            OptionKind::Weekend => f.write_str("weekend"),
        }
    }
}

/// A Friday-to-Sunday span. The label doubles as the option identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekendOption {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub label: String,
}

impl WeekendOption {
    /// Builds the weekend starting on `friday`, or `None` if the Sunday
    /// would fall past the end of the calendar.
    pub fn starting(friday: NaiveDate) -> Option<Self> {
        debug_assert_eq!(friday.weekday(), Weekday::Fri);
        let end = friday.checked_add_days(Days::new(2))?;
        let label = format!("{}–{}", short_date(friday), short_date(end));
        Some(Self {
            start: friday,
            end,
            label,
        })
    }
}

impl fmt::Display for WeekendOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

// "Jan 2", "Dec 31"
fn short_date(date: NaiveDate) -> String {
    date.format("%b %-d").to_string()
}

/// The winning destination and weekend of a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalTrip {
    pub destination: String,
    pub weekend: String,
    pub marker: String,
}

impl FinalTrip {
    pub fn new(destination: String, weekend: String) -> Self {
        Self {
            destination,
            weekend,
            marker: TRIP_MARKER.to_string(),
        }
    }
}
