use quiz_types::{AnswerRecord, GameType, Question, RoundView};

use crate::{HangmanRound, TypingRound};

/// Selection state for a multiple-choice question
#[derive(Debug, Clone, Default)]
pub struct ChoiceRound {
    selection: Option<AnswerRecord>,
}

impl ChoiceRound {
    /// Record the first answer given for the question. Later answers are ignored.
    pub fn answer(&mut self, answer: &str, correct_answer: &str) -> Option<AnswerRecord> {
        if self.selection.is_some() {
            return None;
        }

        let record = AnswerRecord {
            answer: answer.to_string(),
            is_correct: answer == correct_answer,
        };
        self.selection = Some(record.clone());
        Some(record)
    }

    pub fn selection(&self) -> Option<&AnswerRecord> {
        self.selection.as_ref()
    }
}

/// Per-question controller substate, discarded when the session advances
#[derive(Debug, Clone)]
pub enum Round {
    MultipleChoice(ChoiceRound),
    Typing(TypingRound),
    Hangman(HangmanRound),
}

impl Round {
    pub fn for_question(question: &Question) -> Self {
        match question.category {
            GameType::Typing => Round::Typing(TypingRound::new(question.typing_target())),
            GameType::Hangman => Round::Hangman(HangmanRound::new(&question.hangman_word())),
            GameType::Quiz | GameType::Math | GameType::Language => {
                Round::MultipleChoice(ChoiceRound::default())
            }
        }
    }

    /// Whether the answer to the current question may be shown
    pub fn is_resolved(&self) -> bool {
        match self {
            Round::MultipleChoice(choice) => choice.selection().is_some(),
            Round::Typing(typing) => typing.is_completed(),
            Round::Hangman(hangman) => hangman.is_over(),
        }
    }

    pub fn view(&self) -> RoundView {
        match self {
            Round::MultipleChoice(choice) => RoundView::MultipleChoice {
                selection: choice.selection().cloned(),
            },
            Round::Typing(typing) => RoundView::Typing {
                target: typing.target().to_string(),
                input: typing.input().to_string(),
                correct_prefix_len: typing.correct_prefix_len() as u32,
            },
            Round::Hangman(hangman) => RoundView::Hangman {
                masked: hangman.masked(),
                guessed: hangman.guessed().map(String::from).collect(),
                wrong_guesses: hangman.wrong_guesses(),
                lives_left: hangman.lives_left(),
                status: hangman.status(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_types::HangmanStatus;

    fn question(category: GameType, prompt: &str, answer: &str) -> Question {
        Question {
            id: "r1".to_string(),
            category,
            prompt: prompt.to_string(),
            options: Vec::new(),
            correct_answer: answer.to_string(),
            explanation: String::new(),
        }
    }

    #[test]
    fn test_choice_round_keeps_first_answer() {
        let mut round = ChoiceRound::default();
        let first = round.answer("2 meter", "3 meter").unwrap();
        assert!(!first.is_correct);

        assert!(round.answer("3 meter", "3 meter").is_none());
        assert_eq!(round.selection().unwrap().answer, "2 meter");
    }

    #[test]
    fn test_round_for_each_category() {
        assert!(matches!(
            Round::for_question(&question(GameType::Math, "12 x 25%?", "3 meter")),
            Round::MultipleChoice(_)
        ));
        assert!(matches!(
            Round::for_question(&question(GameType::Typing, "Polonaise", "")),
            Round::Typing(_)
        ));

        match Round::for_question(&question(GameType::Hangman, "", "Polonaise")) {
            Round::Hangman(hangman) => assert_eq!(hangman.word(), "POLONAISE"),
            other => panic!("Expected hangman round, got {:?}", other),
        }
    }

    #[test]
    fn test_hangman_view() {
        let mut round = Round::for_question(&question(GameType::Hangman, "", "Elf"));
        if let Round::Hangman(hangman) = &mut round {
            hangman.guess('E');
            hangman.guess('Q');
        }

        assert!(!round.is_resolved());
        assert_eq!(
            round.view(),
            RoundView::Hangman {
                masked: "E__".to_string(),
                guessed: vec!["E".to_string(), "Q".to_string()],
                wrong_guesses: 1,
                lives_left: 7,
                status: HangmanStatus::InProgress,
            }
        );
    }
}
