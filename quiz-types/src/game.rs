use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::ParseGameTypeError;

pub type QuestionId = String;

/// The five mini-games offered on the home screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum GameType {
    Quiz,     // General carnival knowledge
    Math,     // Fractions, percentages, word problems
    Language, // Spelling, sayings, grammar
    Typing,   // Type the shown word as fast as possible
    Hangman,  // Guess the hidden word letter by letter
}

impl GameType {
    /// Menu order
    pub const ALL: [GameType; 5] = [
        GameType::Quiz,
        GameType::Math,
        GameType::Language,
        GameType::Typing,
        GameType::Hangman,
    ];

    /// Quiz, math and language questions are answered by picking one of the options
    pub fn is_multiple_choice(&self) -> bool {
        matches!(self, GameType::Quiz | GameType::Math | GameType::Language)
    }

    /// Number of items requested from the live question generator
    pub fn question_count(&self) -> usize {
        match self {
            GameType::Typing => 10,
            _ => 5,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameType::Quiz => "quiz",
            GameType::Math => "math",
            GameType::Language => "language",
            GameType::Typing => "typing",
            GameType::Hangman => "hangman",
        }
    }
}

impl fmt::Display for GameType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GameType {
    type Err = ParseGameTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_lowercase();
        GameType::ALL
            .into_iter()
            .find(|game_type| game_type.as_str() == name)
            .ok_or_else(|| ParseGameTypeError {
                name: s.to_string(),
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum GamePhase {
    Home,    // Category menu
    Loading, // Waiting for the question provider
    Playing, // Working through the question sequence
    Results, // Sequence exhausted, showing score and rank
}

/// A single generated (or fallback) question.
///
/// Field names on the wire follow the generator's response schema, so the
/// JSON produced by the AI service deserializes directly into this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Question {
    pub id: QuestionId,
    #[serde(rename = "type")]
    pub category: GameType,
    /// The question text, or the literal word to type for typing questions
    #[serde(rename = "question")]
    pub prompt: String,
    #[serde(default)]
    pub options: Vec<String>,
    pub correct_answer: String,
    #[serde(default)]
    pub explanation: String,
}

impl Question {
    /// Target string of a typing question
    pub fn typing_target(&self) -> &str {
        &self.prompt
    }

    /// Target word of a hangman question
    pub fn hangman_word(&self) -> String {
        self.correct_answer.to_uppercase()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AnswerRecord {
    pub answer: String,
    pub is_correct: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_type_parsing() {
        assert_eq!("quiz".parse::<GameType>().unwrap(), GameType::Quiz);
        assert_eq!("Hangman".parse::<GameType>().unwrap(), GameType::Hangman);
        assert_eq!(" TYPING ".parse::<GameType>().unwrap(), GameType::Typing);

        let err = "bingo".parse::<GameType>().unwrap_err();
        assert!(err.to_string().contains("bingo"));
    }

    #[test]
    fn test_question_counts() {
        assert_eq!(GameType::Typing.question_count(), 10);
        for game_type in [GameType::Quiz, GameType::Math, GameType::Language, GameType::Hangman] {
            assert_eq!(game_type.question_count(), 5);
        }
    }

    #[test]
    fn test_multiple_choice_categories() {
        assert!(GameType::Quiz.is_multiple_choice());
        assert!(GameType::Math.is_multiple_choice());
        assert!(GameType::Language.is_multiple_choice());
        assert!(!GameType::Typing.is_multiple_choice());
        assert!(!GameType::Hangman.is_multiple_choice());
    }

    #[test]
    fn test_question_wire_format() {
        let json = r#"{
            "id": "q1",
            "type": "quiz",
            "question": "Op welke datum begint het carnavalsseizoen officieel?",
            "options": ["1 januari", "11 november"],
            "correctAnswer": "11 november",
            "explanation": "De 11e van de 11e."
        }"#;

        let question: Question = serde_json::from_str(json).unwrap();
        assert_eq!(question.category, GameType::Quiz);
        assert_eq!(question.correct_answer, "11 november");
        assert_eq!(question.options.len(), 2);

        let value = serde_json::to_value(&question).unwrap();
        assert_eq!(value["type"], "quiz");
        assert_eq!(value["correctAnswer"], "11 november");
        assert!(value.get("prompt").is_none());
    }

    #[test]
    fn test_word_question_targets() {
        let question = Question {
            id: "t1".to_string(),
            category: GameType::Hangman,
            prompt: "Polonaise".to_string(),
            options: Vec::new(),
            correct_answer: "Polonaise".to_string(),
            explanation: String::new(),
        };

        assert_eq!(question.typing_target(), "Polonaise");
        assert_eq!(question.hangman_word(), "POLONAISE");
    }
}
