#![allow(dead_code)]

use async_trait::async_trait;
use quiz_core::{
    ContentUnavailable, QuestionSource, Session, SessionEvent, SessionEventHandler,
};
use quiz_types::{GamePhase, GameType, Question};
use std::sync::{Arc, Mutex};

/// Creates a multiple-choice question whose first option is correct
pub fn create_choice_question(id: &str, category: GameType, answer: &str) -> Question {
    Question {
        id: id.to_string(),
        category,
        prompt: format!("Vraag {}", id),
        options: vec![
            answer.to_string(),
            "fout".to_string(),
            "ook fout".to_string(),
        ],
        correct_answer: answer.to_string(),
        explanation: "Uitleg".to_string(),
    }
}

/// Creates typing or hangman questions, one per word
pub fn create_word_questions(category: GameType, words: &[&str]) -> Vec<Question> {
    words
        .iter()
        .enumerate()
        .map(|(i, word)| Question {
            id: format!("w{}", i),
            category,
            prompt: word.to_string(),
            options: Vec::new(),
            correct_answer: word.to_string(),
            explanation: String::new(),
        })
        .collect()
}

/// Puts a fresh session straight into `Playing` with the given questions
pub fn create_playing_session(category: GameType, questions: Vec<Question>) -> Session {
    let mut session = Session::new();
    load_level(&mut session, category, questions);
    session
}

pub fn load_level(session: &mut Session, category: GameType, questions: Vec<Question>) {
    let request = session
        .begin_level(category)
        .expect("session should accept a new level");
    assert!(session.complete_level(request, questions));
    assert_eq!(session.phase(), GamePhase::Playing);
}

/// Source that always fails like an unreachable generator
pub struct FailingSource;

#[async_trait]
impl QuestionSource for FailingSource {
    async fn fetch_questions(&self, _category: GameType) -> Result<Vec<Question>, ContentUnavailable> {
        Err(ContentUnavailable::Transport("connection refused".to_string()))
    }
}

/// Source that serves fixed questions
pub struct FixedSource {
    pub questions: Vec<Question>,
}

#[async_trait]
impl QuestionSource for FixedSource {
    async fn fetch_questions(&self, _category: GameType) -> Result<Vec<Question>, ContentUnavailable> {
        Ok(self.questions.clone())
    }
}

/// Event collector for testing event emissions
#[derive(Clone)]
pub struct EventCollector {
    events: Arc<Mutex<Vec<SessionEvent>>>,
}

impl EventCollector {
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Creates a collector and registers a copy of it on the session
    pub fn attach(session: &mut Session) -> Self {
        let collector = Self::new();
        session.event_bus.add_handler(Box::new(collector.clone()));
        collector
    }

    pub fn get_events(&self) -> Vec<SessionEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn clear(&self) {
        self.events.lock().unwrap().clear();
    }

    pub fn count(&self, check_fn: impl Fn(&SessionEvent) -> bool) -> usize {
        self.events.lock().unwrap().iter().filter(|e| check_fn(e)).count()
    }

    pub fn phases(&self) -> Vec<GamePhase> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter_map(|event| match event {
                SessionEvent::PhaseChanged { to, .. } => Some(*to),
                _ => None,
            })
            .collect()
    }
}

impl SessionEventHandler for EventCollector {
    fn handle_event(&mut self, event: &SessionEvent) {
        self.events.lock().unwrap().push(event.clone());
    }
}

/// Asserts the session's phase and cumulative score
pub fn assert_session(session: &Session, expected_phase: GamePhase, expected_score: u32) {
    assert_eq!(
        session.phase(),
        expected_phase,
        "Expected phase {:?}, got {:?}",
        expected_phase,
        session.phase()
    );
    assert_eq!(
        session.stats().score,
        expected_score,
        "Expected score {}, got {}",
        expected_score,
        session.stats().score
    );
}
