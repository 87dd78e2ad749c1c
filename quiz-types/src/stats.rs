use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Rank {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl Rank {
    /// Step function over the cumulative score. Thresholds are strict, so a
    /// boundary score of 61, 151 or 251 already belongs to the higher band.
    pub fn for_score(score: u32) -> Self {
        if score > 250 {
            Rank::Expert
        } else if score > 150 {
            Rank::Advanced
        } else if score > 60 {
            Rank::Intermediate
        } else {
            Rank::Beginner
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Rank::Beginner => "Narretje",
            Rank::Intermediate => "Raadslid",
            Rank::Advanced => "Adjudant",
            Rank::Expert => "Prins Carnaval",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Cumulative progress for one browser session.
///
/// Rank is not stored; it is derived from `score` on every read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStats {
    pub score: u32,
    pub questions_answered: u32,
}

impl SessionStats {
    pub fn rank(&self) -> Rank {
        Rank::for_score(self.score)
    }

    pub fn add_points(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
        self.questions_answered += 1;
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct StatsView {
    pub score: u32,
    pub questions_answered: u32,
    pub rank: Rank,
    pub rank_title: String,
}

impl From<&SessionStats> for StatsView {
    fn from(stats: &SessionStats) -> Self {
        let rank = stats.rank();
        StatsView {
            score: stats.score,
            questions_answered: stats.questions_answered,
            rank,
            rank_title: rank.title().to_string(),
        }
    }
}
