use crate::store::VoteStore;
use crate::voting::OptionScore;

/// Mean rating for each identifier, in the order given.
///
/// Options without votes score exactly zero.
pub fn score_all<S: AsRef<str>>(option_ids: &[S], store: &VoteStore) -> Vec<OptionScore> {
    option_ids
        .iter()
        .map(|id| {
            let ratings = store.ratings(id.as_ref());
            OptionScore {
                option: id.as_ref().to_string(),
                score: mean(ratings),
                votes: ratings.len(),
            }
        })
        .collect()
}

/// Highest-scoring entry. Ties go to whichever comes first; `None` when
/// there are no scores at all.
pub fn pick_winner(scores: &[OptionScore]) -> Option<&OptionScore> {
    scores.iter().fold(None, |best, candidate| match best {
        Some(best) if best.score >= candidate.score => Some(best),
        _ => Some(candidate),
    })
}

fn mean(ratings: &[i32]) -> f64 {
    if ratings.is_empty() {
        return 0.0;
    }
    let total: i64 = ratings.iter().map(|&r| i64::from(r)).sum();
    total as f64 / ratings.len() as f64
}
