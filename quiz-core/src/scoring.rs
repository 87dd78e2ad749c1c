use quiz_types::Rank;
use std::time::Duration;

pub struct ScoringEngine;

impl ScoringEngine {
    /// Multiple-choice question answered correctly
    pub const CORRECT_ANSWER_POINTS: u32 = 15;
    /// Hangman word guessed before running out of lives
    pub const HANGMAN_WIN_POINTS: u32 = 10;
    /// Awarded for every completed typing word, before the speed bonus
    pub const TYPING_BASE_POINTS: u32 = 5;
    pub const TYPING_BONUS_WINDOW_SECS: f64 = 10.0;
    pub const TYPING_MIN_BONUS: u32 = 1;
    pub const HANGMAN_MAX_WRONG_GUESSES: u32 = 8;

    /// Speed bonus for a typing word: `max(1, floor(10 - elapsed))`
    pub fn typing_bonus(elapsed: Duration) -> u32 {
        // Duration cannot be negative, so clock skew already clamps to zero here
        let remaining = (Self::TYPING_BONUS_WINDOW_SECS - elapsed.as_secs_f64()).floor();
        if remaining < Self::TYPING_MIN_BONUS as f64 {
            Self::TYPING_MIN_BONUS
        } else {
            remaining as u32
        }
    }

    /// Score delta reported for a completed typing word
    pub fn typing_points(elapsed: Duration) -> u32 {
        Self::TYPING_BASE_POINTS + Self::typing_bonus(elapsed)
    }

    pub fn rank_for(score: u32) -> Rank {
        Rank::for_score(score)
    }
}
