use crate::error::TripError;
use crate::models::DEFAULT_DESTINATIONS;
use log::warn;
use std::env;

pub const YEAR_VAR: &str = "TRIP_YEAR";
pub const DESTINATIONS_VAR: &str = "TRIP_DESTINATIONS";

pub const DEFAULT_YEAR: i32 = 2026;

/// What a session offers for voting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripConfig {
    pub year: i32,
    pub destinations: Vec<String>,
}

impl Default for TripConfig {
    fn default() -> Self {
        Self {
            year: DEFAULT_YEAR,
            destinations: DEFAULT_DESTINATIONS.iter().map(|d| d.to_string()).collect(),
        }
    }
}

impl TripConfig {
    /// Reads `TRIP_YEAR` and `TRIP_DESTINATIONS` (comma-separated), loading a
    /// `.env` file first if there is one. Unset variables keep their defaults.
    pub fn from_env() -> Result<Self, TripError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, TripError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(YEAR_VAR) {
            config.year = raw.trim().parse().map_err(|_| TripError::InvalidConfig {
                key: YEAR_VAR,
                value: raw.clone(),
            })?;
        }

        if let Some(raw) = lookup(DESTINATIONS_VAR) {
            let destinations = parse_destinations(&raw);
            if destinations.is_empty() {
                warn!("{} is set but lists no destinations", DESTINATIONS_VAR);
            }
            config.destinations = destinations;
        }

        Ok(config)
    }
}

// Trims names, skips blanks, keeps the first of any duplicates.
fn parse_destinations(raw: &str) -> Vec<String> {
    distinct_destinations(
        raw.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string),
    )
}

/// Drops repeated names, keeping the first occurrence in place.
pub(crate) fn distinct_destinations<I>(names: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut destinations: Vec<String> = Vec::new();
    for name in names {
        if destinations.contains(&name) {
            warn!("Ignoring duplicate destination {:?}", name);
            continue;
        }
        destinations.push(name);
    }
    destinations
}
