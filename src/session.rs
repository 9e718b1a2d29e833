use crate::config::{TripConfig, distinct_destinations};
use crate::error::TripError;
use crate::models::{FinalTrip, OptionKind, RATING_SCALE, WeekendOption};
use crate::store::VoteStore;
use crate::voting::{TripStandings, pick_winner, score_all};
use crate::weekends::weekends_in_year;
use log::{debug, info, warn};
use uuid::Uuid;

/// One voting session: the candidate lists, the votes cast so far and the
/// last computed trip.
#[derive(Debug, Clone)]
pub struct TripSession {
    id: Uuid,
    year: i32,
    destinations: Vec<String>,
    weekends: Vec<WeekendOption>,
    store: VoteStore,
    final_trip: Option<FinalTrip>,
}

impl TripSession {
    /// Generates the weekends for the configured year and seeds an empty
    /// rating list for every destination and weekend.
    ///
    /// Repeated destinations are collapsed onto their first occurrence. A
    /// destination named like one of the weekends is rejected, since both
    /// would share one rating list.
    pub fn new(config: TripConfig) -> Result<Self, TripError> {
        let weekends = weekends_in_year(config.year)?;
        let destinations = distinct_destinations(config.destinations);
        if let Some(clash) = destinations
            .iter()
            .find(|d| weekends.iter().any(|w| &w.label == *d))
        {
            return Err(TripError::DestinationClash {
                destination: clash.clone(),
            });
        }

        let mut store = VoteStore::new();
        store.initialize(destinations.iter().map(String::as_str));
        store.initialize(weekends.iter().map(|w| w.label.as_str()));

        let session = Self {
            id: Uuid::new_v4(),
            year: config.year,
            destinations,
            weekends,
            store,
            final_trip: None,
        };
        info!(
            "Started trip session {} for {} with {} destinations and {} weekends",
            session.id,
            session.year,
            session.destinations.len(),
            session.weekends.len()
        );
        Ok(session)
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn destinations(&self) -> &[String] {
        &self.destinations
    }

    pub fn weekends(&self) -> &[WeekendOption] {
        &self.weekends
    }

    /// Records a rating for a known destination or weekend.
    ///
    /// Ratings outside 1..=5 are clamped onto the scale. Returns `false`
    /// without recording anything when the option is not part of this
    /// session.
    pub fn cast_vote(&mut self, option_id: &str, rating: i32) -> bool {
        let Some(kind) = self.kind_of(option_id) else {
            warn!("Session {}: ignoring vote for unknown option {:?}", self.id, option_id);
            return false;
        };
        let clamped = rating.clamp(*RATING_SCALE.start(), *RATING_SCALE.end());
        if clamped != rating {
            warn!(
                "Session {}: rating {} for {:?} clamped to {}",
                self.id, rating, option_id, clamped
            );
        }
        debug!("Session {}: {} vote for {:?}", self.id, kind, option_id);
        self.store.record(option_id, clamped);
        true
    }

    pub fn count_for(&self, option_id: &str) -> usize {
        self.store.count_for(option_id)
    }

    /// Current mean scores for both lists.
    pub fn standings(&self) -> TripStandings {
        TripStandings {
            destinations: score_all(self.destinations.as_slice(), &self.store),
            weekends: score_all(self.weekend_labels().as_slice(), &self.store),
        }
    }

    /// Picks the best destination and weekend from the votes cast so far.
    ///
    /// The result replaces any previously computed trip.
    pub fn compute_final_trip(&mut self) -> Result<FinalTrip, TripError> {
        let standings = self.standings();
        let destination = pick_winner(&standings.destinations).ok_or(TripError::NoCandidates {
            kind: OptionKind::Destination,
        })?;
        let weekend = pick_winner(&standings.weekends).ok_or(TripError::NoCandidates {
            kind: OptionKind::Weekend,
        })?;

        let trip = FinalTrip::new(destination.option.clone(), weekend.option.clone());
        info!(
            "Session {}: final trip is {} on {} ({:.1} / {:.1} stars, {} votes cast)",
            self.id,
            trip.destination,
            trip.weekend,
            destination.score,
            weekend.score,
            self.store.total_votes()
        );
        self.final_trip = Some(trip.clone());
        Ok(trip)
    }

    /// The trip from the latest [`Self::compute_final_trip`] call, if any.
    pub fn final_trip(&self) -> Option<&FinalTrip> {
        self.final_trip.as_ref()
    }

    /// Which list `option_id` belongs to, if either.
    pub fn kind_of(&self, option_id: &str) -> Option<OptionKind> {
        if !self.store.contains(option_id) {
            None
        } else if self.destinations.iter().any(|d| d == option_id) {
            Some(OptionKind::Destination)
        } else if self.weekends.iter().any(|w| w.label == option_id) {
            Some(OptionKind::Weekend)
        } else {
            None
        }
    }

    fn weekend_labels(&self) -> Vec<&str> {
        self.weekends.iter().map(|w| w.label.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn session() -> TripSession {
        let config = TripConfig {
            year: 2026,
            destinations: vec!["Miami".to_string(), "Austin".to_string()],
        };
        TripSession::new(config).expect("session")
    }

    #[rstest]
    fn new_session_seeds_every_option(session: TripSession) {
        assert_eq!(session.destinations(), ["Miami", "Austin"]);
        assert_eq!(session.weekends().len(), 52);
        assert_eq!(session.weekends()[0].label, "Jan 2–Jan 4");
        assert_eq!(session.count_for("Miami"), 0);
        assert_eq!(session.count_for("Jan 2–Jan 4"), 0);
        assert!(session.final_trip().is_none());
    }

    #[rstest]
    fn unknown_option_is_a_no_op(mut session: TripSession) {
        assert!(!session.cast_vote("Atlantis", 5));

        assert_eq!(session.count_for("Atlantis"), 0);
        assert!(session.kind_of("Atlantis").is_none());
    }

    #[rstest]
    #[case(0, 1)]
    #[case(-3, 1)]
    #[case(9, 5)]
    #[case(3, 3)]
    fn ratings_are_clamped_to_scale(
        mut session: TripSession,
        #[case] rating: i32,
        #[case] stored: i32,
    ) {
        assert!(session.cast_vote("Austin", rating));

        let standings = session.standings();
        assert_eq!(standings.destinations[1].score, f64::from(stored));
    }

    #[rstest]
    fn tie_on_destination_goes_to_first_listed(mut session: TripSession) {
        session.cast_vote("Miami", 5);
        session.cast_vote("Miami", 3);
        session.cast_vote("Austin", 4);

        let trip = session.compute_final_trip().expect("trip");

        assert_eq!(trip.destination, "Miami");
        assert_eq!(trip.weekend, "Jan 2–Jan 4");
        assert_eq!(session.final_trip(), Some(&trip));
    }

    #[rstest]
    fn recompute_reflects_latest_votes(mut session: TripSession) {
        session.cast_vote("Miami", 2);
        session.cast_vote("Mar 6–Mar 8", 4);
        let first = session.compute_final_trip().expect("first trip");

        session.cast_vote("Austin", 5);
        session.cast_vote("Jul 3–Jul 5", 5);
        let second = session.compute_final_trip().expect("second trip");

        assert_eq!(first.destination, "Miami");
        assert_eq!(first.weekend, "Mar 6–Mar 8");
        assert_eq!(second.destination, "Austin");
        assert_eq!(second.weekend, "Jul 3–Jul 5");
        assert_eq!(session.final_trip(), Some(&second));
    }

    #[rstest]
    fn empty_destination_list_has_no_winner() {
        let config = TripConfig {
            year: 2026,
            destinations: Vec::new(),
        };
        let mut session = TripSession::new(config).expect("session");

        assert_eq!(
            session.compute_final_trip().unwrap_err(),
            TripError::NoCandidates {
                kind: OptionKind::Destination
            }
        );
        assert!(session.final_trip().is_none());
    }

    #[rstest]
    fn kind_of_tells_lists_apart(session: TripSession) {
        assert_eq!(session.kind_of("Miami"), Some(OptionKind::Destination));
        assert_eq!(session.kind_of("Dec 25–Dec 27"), Some(OptionKind::Weekend));
    }

    #[rstest]
    fn empty_weekend_list_has_no_winner(mut session: TripSession) {
        session.weekends.clear();
        session.cast_vote("Miami", 4);

        assert_eq!(
            session.compute_final_trip().unwrap_err(),
            TripError::NoCandidates {
                kind: OptionKind::Weekend
            }
        );
        assert!(session.final_trip().is_none());
    }

    #[rstest]
    #[case(&["Miami", "Austin", "Miami"], &["Miami", "Austin"])]
    #[case(&["Austin", "Austin", "Austin"], &["Austin"])]
    #[case(&["Denver", "Miami"], &["Denver", "Miami"])]
    fn repeated_destinations_keep_first(#[case] configured: &[&str], #[case] expected: &[&str]) {
        let config = TripConfig {
            year: 2026,
            destinations: configured.iter().map(|d| d.to_string()).collect(),
        };
        let mut session = TripSession::new(config).expect("session");
        session.cast_vote(expected[0], 5);

        assert_eq!(session.destinations(), expected);
        assert_eq!(session.standings().destinations.len(), expected.len());
        assert_eq!(session.count_for(expected[0]), 1);
    }

    #[rstest]
    #[case(2026, "Jan 9–Jan 11")]
    #[case(2027, "Dec 31–Jan 2")]
    fn destination_named_like_weekend_is_rejected(#[case] year: i32, #[case] label: &str) {
        let config = TripConfig {
            year,
            destinations: vec!["Miami".to_string(), label.to_string()],
        };

        assert_eq!(
            TripSession::new(config).unwrap_err(),
            TripError::DestinationClash {
                destination: label.to_string()
            }
        );
    }

    #[rstest]
    fn vote_counts_toward_one_list_only(mut session: TripSession) {
        session.cast_vote("Jan 9–Jan 11", 5);
        session.cast_vote("Austin", 3);

        let standings = session.standings();
        assert_eq!(standings.destinations[0].votes, 0);
        assert_eq!(standings.destinations[1].votes, 1);
        assert_eq!(
            session.compute_final_trip().expect("trip").weekend,
            "Jan 9–Jan 11"
        );
    }
}
