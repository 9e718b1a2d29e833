//! Voting core for picking a group trip: rate destinations and weekends,
//! then take the best average of each.

pub mod config;
pub mod error;
pub mod models;
pub mod session;
pub mod store;
pub mod voting;
pub mod weekends;

pub use config::TripConfig;
pub use error::TripError;
pub use models::{
    DEFAULT_DESTINATIONS, FinalTrip, OptionKind, RATING_SCALE, TRIP_MARKER, WeekendOption,
};
pub use session::TripSession;
pub use store::VoteStore;
pub use voting::{OptionScore, TripStandings};
pub use weekends::weekends_in_year;
