use log::debug;
use std::collections::HashMap;

/// Ratings recorded per option identifier.
///
/// The store is append-only: keys are never removed and rating lists only
/// grow. It does not check ratings against the rating scale; callers that
/// need that go through [`crate::session::TripSession::cast_vote`].
#[derive(Debug, Clone, Default)]
pub struct VoteStore {
    votes: HashMap<String, Vec<i32>>,
}

impl VoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an empty rating list for every identifier not already present.
    /// Existing lists are left untouched.
    pub fn initialize<I, S>(&mut self, option_ids: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for id in option_ids {
            self.votes.entry(id.into()).or_default();
        }
    }

    /// Appends one rating. An unseen identifier gets a fresh list.
    pub fn record(&mut self, option_id: &str, rating: i32) {
        let ratings = self.votes.entry(option_id.to_string()).or_default();
        ratings.push(rating);
        debug!("Recorded rating {} for {:?} ({} total)", rating, option_id, ratings.len());
    }

    pub fn count_for(&self, option_id: &str) -> usize {
        self.votes.get(option_id).map_or(0, Vec::len)
    }

    pub fn ratings(&self, option_id: &str) -> &[i32] {
        self.votes.get(option_id).map_or(&[], Vec::as_slice)
    }

    pub fn contains(&self, option_id: &str) -> bool {
        self.votes.contains_key(option_id)
    }

    pub fn total_votes(&self) -> usize {
        self.votes.values().map(Vec::len).sum()
    }
}
