use quiz_types::HangmanStatus;
use std::collections::BTreeSet;

use crate::ScoringEngine;

pub const HANGMAN_PLACEHOLDER: char = '_';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Guess was not accepted (not A-Z, already guessed, or round over)
    Rejected,
    Hit,
    Miss,
    /// This guess revealed the last missing letter
    Won,
    /// This guess used up the last life
    Lost,
}

/// Hangman controller state for one word
#[derive(Debug, Clone)]
pub struct HangmanRound {
    word: String,
    guessed: BTreeSet<char>,
    wrong_guesses: u32,
    max_wrong_guesses: u32,
}

impl HangmanRound {
    pub fn new(word: &str) -> Self {
        Self {
            word: word.to_uppercase(),
            guessed: BTreeSet::new(),
            wrong_guesses: 0,
            max_wrong_guesses: ScoringEngine::HANGMAN_MAX_WRONG_GUESSES,
        }
    }

    /// Only A-Z can be guessed; everything else in the word is shown from the start
    pub fn is_guessable(letter: char) -> bool {
        letter.is_ascii_alphabetic()
    }

    pub fn guess(&mut self, letter: char) -> GuessOutcome {
        let letter = letter.to_ascii_uppercase();
        if !Self::is_guessable(letter) || self.guessed.contains(&letter) || self.is_over() {
            return GuessOutcome::Rejected;
        }

        self.guessed.insert(letter);

        if !self.word.contains(letter) {
            self.wrong_guesses += 1;
            if self.is_lost() {
                return GuessOutcome::Lost;
            }
            return GuessOutcome::Miss;
        }

        if self.is_won() {
            GuessOutcome::Won
        } else {
            GuessOutcome::Hit
        }
    }

    pub fn is_won(&self) -> bool {
        self.word
            .chars()
            .filter(|c| Self::is_guessable(*c))
            .all(|c| self.guessed.contains(&c))
    }

    pub fn is_lost(&self) -> bool {
        self.wrong_guesses >= self.max_wrong_guesses
    }

    pub fn is_over(&self) -> bool {
        self.is_won() || self.is_lost()
    }

    pub fn status(&self) -> HangmanStatus {
        if self.is_won() {
            HangmanStatus::Won
        } else if self.is_lost() {
            HangmanStatus::Lost
        } else {
            HangmanStatus::InProgress
        }
    }

    /// Display form of the word: guessed letters revealed, the rest as `_`
    pub fn masked(&self) -> String {
        self.word
            .chars()
            .map(|c| {
                if !Self::is_guessable(c) || self.guessed.contains(&c) {
                    c
                } else {
                    HANGMAN_PLACEHOLDER
                }
            })
            .collect()
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn guessed(&self) -> impl Iterator<Item = char> + '_ {
        self.guessed.iter().copied()
    }

    pub fn wrong_guesses(&self) -> u32 {
        self.wrong_guesses
    }

    pub fn lives_left(&self) -> u32 {
        self.max_wrong_guesses.saturating_sub(self.wrong_guesses)
    }
}
