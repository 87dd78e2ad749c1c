use quiz_types::{GameType, Question};
use std::collections::HashSet;

use crate::HangmanRound;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidContent {
    #[error("no questions")]
    Empty,
    #[error("duplicate question id {id}")]
    DuplicateId { id: String },
    #[error("question {id} is {found}, expected {expected}")]
    WrongCategory {
        id: String,
        expected: GameType,
        found: GameType,
    },
    #[error("question {id} has an empty prompt")]
    EmptyPrompt { id: String },
    #[error("question {id} has no options")]
    NoOptions { id: String },
    #[error("answer of question {id} is not one of its options")]
    AnswerNotInOptions { id: String },
    #[error("hangman question {id} has no guessable letters")]
    NoGuessableLetters { id: String },
}

/// Check a question sequence for `category` before it reaches a session
pub fn validate_questions(category: GameType, questions: &[Question]) -> Result<(), InvalidContent> {
    if questions.is_empty() {
        return Err(InvalidContent::Empty);
    }

    let mut seen_ids = HashSet::new();
    for question in questions {
        if !seen_ids.insert(question.id.as_str()) {
            return Err(InvalidContent::DuplicateId {
                id: question.id.clone(),
            });
        }
        validate_question(category, question)?;
    }

    Ok(())
}

pub fn validate_question(category: GameType, question: &Question) -> Result<(), InvalidContent> {
    let id = || question.id.clone();

    if question.category != category {
        return Err(InvalidContent::WrongCategory {
            id: id(),
            expected: category,
            found: question.category,
        });
    }

    match category {
        GameType::Quiz | GameType::Math | GameType::Language => {
            if question.prompt.trim().is_empty() {
                return Err(InvalidContent::EmptyPrompt { id: id() });
            }
            if question.options.is_empty() {
                return Err(InvalidContent::NoOptions { id: id() });
            }
            if !question.options.contains(&question.correct_answer) {
                return Err(InvalidContent::AnswerNotInOptions { id: id() });
            }
        }
        GameType::Typing => {
            if question.typing_target().trim().is_empty() {
                return Err(InvalidContent::EmptyPrompt { id: id() });
            }
        }
        GameType::Hangman => {
            if !question.hangman_word().chars().any(HangmanRound::is_guessable) {
                return Err(InvalidContent::NoGuessableLetters { id: id() });
            }
        }
    }

    Ok(())
}
