use std::time::{Duration, Instant};

use crate::ScoringEngine;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypingOutcome {
    /// Input does not (yet) equal the target
    Pending,
    /// Input matched the target exactly
    Completed { points: u32, elapsed: Duration },
}

/// Typing controller state for one word
#[derive(Debug, Clone)]
pub struct TypingRound {
    target: String,
    input: String,
    started_at: Option<Instant>, // Set lazily on the first keystroke
    completed: bool,
}

impl TypingRound {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            input: String::new(),
            started_at: None,
            completed: false,
        }
    }

    /// Replace the input buffer with the current contents of the text field.
    ///
    /// The timer starts on the first call. Once the input equals the target
    /// the word is scored and the round stops accepting input.
    pub fn update_input(&mut self, input: &str, now: Instant) -> TypingOutcome {
        if self.completed {
            return TypingOutcome::Pending;
        }

        let started_at = *self.started_at.get_or_insert(now);
        self.input = input.to_string();

        if self.input != self.target {
            return TypingOutcome::Pending;
        }

        let elapsed = now.saturating_duration_since(started_at);
        let points = ScoringEngine::typing_points(elapsed);
        self.completed = true;
        self.input.clear();
        self.started_at = None;

        TypingOutcome::Completed { points, elapsed }
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn has_started(&self) -> bool {
        self.started_at.is_some()
    }

    /// Number of leading characters that match the target
    pub fn correct_prefix_len(&self) -> usize {
        self.input
            .chars()
            .zip(self.target.chars())
            .take_while(|(typed, expected)| typed == expected)
            .count()
    }
}
