pub mod mean;

use serde::{Deserialize, Serialize};

pub use mean::{pick_winner, score_all};

/// Mean rating of one option.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionScore {
    pub option: String,
    pub score: f64, // 0.0 when nobody voted
    pub votes: usize,
}

/// Scores for both candidate lists, in display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripStandings {
    pub destinations: Vec<OptionScore>,
    pub weekends: Vec<OptionScore>,
}

impl TripStandings {
    /// Human-readable breakdown with each list's leader in bold.
    pub fn summary(&self) -> String {
        let mut summary = String::new();
        push_section(&mut summary, "Destinations", &self.destinations);
        summary.push('\n');
        push_section(&mut summary, "Weekends", &self.weekends);
        summary
    }

    /// Both score lists as JSON.
    pub fn raw_results(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

fn push_section(summary: &mut String, title: &str, scores: &[OptionScore]) {
    summary.push_str(&format!("**{}:**\n", title));
    let leader = pick_winner(scores).map(|s| s.option.as_str());
    for score in scores {
        let name = if Some(score.option.as_str()) == leader {
            format!("**{}**", score.option)
        } else {
            score.option.clone()
        };
        let line = format!("{}: {:.1} stars ({} votes)", name, score.score, score.votes);
        summary.push_str(&line);
        summary.push('\n');
    }
}
