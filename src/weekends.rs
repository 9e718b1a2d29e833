//! Friday-to-Sunday weekends of a calendar year.

use crate::error::TripError;
use crate::models::WeekendOption;
use chrono::{Datelike, Days, NaiveDate, Weekday};

/// Iterates the weekends whose Friday falls within one year.
///
/// Only the start date is checked against the year, so a weekend that begins
/// on the last Friday of December and ends in January is still yielded.
#[derive(Debug, Clone)]
pub struct Weekends {
    year: i32,
    next_friday: Option<NaiveDate>,
}

impl Weekends {
    pub fn for_year(year: i32) -> Result<Self, TripError> {
        let jan_first = NaiveDate::from_ymd_opt(year, 1, 1).ok_or(TripError::InvalidYear { year })?;
        Ok(Self {
            year,
            next_friday: first_friday_on_or_after(jan_first),
        })
    }
}

impl Iterator for Weekends {
    type Item = WeekendOption;

    fn next(&mut self) -> Option<Self::Item> {
        let friday = self.next_friday.filter(|d| d.year() == self.year)?;
        let weekend = WeekendOption::starting(friday);
        self.next_friday = match weekend {
            Some(_) => friday.checked_add_days(Days::new(7)),
            None => None,
        };
        weekend
    }
}

fn first_friday_on_or_after(date: NaiveDate) -> Option<NaiveDate> {
    let from = date.weekday().num_days_from_monday();
    let friday = Weekday::Fri.num_days_from_monday();
    let offset = (friday + 7 - from) % 7;
    date.checked_add_days(Days::new(u64::from(offset)))
}

/// Every weekend of `year` in chronological order.
pub fn weekends_in_year(year: i32) -> Result<Vec<WeekendOption>, TripError> {
    Ok(Weekends::for_year(year)?.collect())
}
