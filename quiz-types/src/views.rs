use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::{AnswerRecord, GamePhase, GameType, Question, QuestionId, StatsView};

/// Read-only picture of a session, handed to the presentation layer
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SessionSnapshot {
    pub session_id: Uuid,
    pub phase: GamePhase,
    pub category: Option<GameType>,
    pub stats: StatsView,
    pub question_number: u32, // 1-based, 0 when no question is active
    pub question_count: u32,
    pub question: Option<QuestionView>,
    pub round: Option<RoundView>,
}

/// Safe version of Question that doesn't expose the answer
/// until the round for it has been resolved
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct QuestionView {
    pub id: QuestionId,
    pub category: GameType,
    pub prompt: String,
    pub options: Vec<String>,
    pub correct_answer: Option<String>,
    pub explanation: Option<String>,
}

impl QuestionView {
    pub fn new(question: &Question, revealed: bool) -> Self {
        // A hangman prompt is the word itself in generated content
        let prompt = if question.category == GameType::Hangman && !revealed {
            String::new()
        } else {
            question.prompt.clone()
        };

        QuestionView {
            id: question.id.clone(),
            category: question.category,
            prompt,
            options: question.options.clone(),
            correct_answer: revealed.then(|| question.correct_answer.clone()),
            explanation: revealed.then(|| question.explanation.clone()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum HangmanStatus {
    InProgress,
    Won,
    Lost,
}

/// Controller substate for the current question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum RoundView {
    MultipleChoice {
        selection: Option<AnswerRecord>,
    },
    Typing {
        target: String,
        input: String,
        #[serde(rename = "correctPrefixLen")]
        correct_prefix_len: u32, // Leading characters typed correctly
    },
    Hangman {
        masked: String,
        guessed: Vec<String>,
        #[serde(rename = "wrongGuesses")]
        wrong_guesses: u32,
        #[serde(rename = "livesLeft")]
        lives_left: u32,
        status: HangmanStatus,
    },
}
