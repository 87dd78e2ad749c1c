use quiz_types::{
    AnswerRecord, GamePhase, GameType, Question, QuestionView, Rank, SessionSnapshot, SessionStats,
    StatsView,
};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::{
    GuessOutcome, QuestionProvider, Round, ScoringEngine, SessionEvent, SessionEventBus, SessionId,
    TypingOutcome, fallback, validate_questions,
};

/// How long the confetti runs after a correct multiple-choice answer
pub const ANSWER_CELEBRATION: Duration = Duration::from_millis(2000);
/// How long the confetti runs after a completed typing or hangman word
pub const WORD_CELEBRATION: Duration = Duration::from_millis(1500);
/// Time a won hangman word stays on screen before the next one is shown
pub const HANGMAN_ADVANCE_DELAY: Duration = Duration::from_millis(1500);

/// Handle for one outstanding question request, returned by `Session::begin_level`.
/// Completing with a handle from an earlier request is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelRequest {
    pub category: GameType,
    generation: u64,
}

/// The question sequence being played for one category
#[derive(Debug)]
pub struct GameSession {
    pub category: GameType,
    pub questions: Vec<Question>,
    pub current_index: usize,
    pub round: Round,
    pub advance_at: Option<Instant>, // Pending auto-advance after a won hangman word
}

impl GameSession {
    fn new(category: GameType, questions: Vec<Question>) -> Self {
        let round = Round::for_question(&questions[0]);
        Self {
            category,
            questions,
            current_index: 0,
            round,
            advance_at: None,
        }
    }

    pub fn current_question(&self) -> &Question {
        &self.questions[self.current_index]
    }

    pub fn is_last_question(&self) -> bool {
        self.current_index + 1 >= self.questions.len()
    }

    fn next_question(&mut self) {
        self.current_index += 1;
        self.round = Round::for_question(&self.questions[self.current_index]);
        self.advance_at = None;
    }
}

/// Session state machine: home -> loading -> playing -> results.
///
/// Score and rank survive `reset` and replays; only a new `Session` starts
/// from zero.
#[derive(Debug)]
pub struct Session {
    pub id: SessionId,
    pub event_bus: SessionEventBus,
    stats: SessionStats,
    phase: GamePhase,
    category: Option<GameType>,
    game: Option<GameSession>,
    generation: u64,
}

impl Session {
    pub fn new() -> Self {
        Self::with_stats(SessionStats::default())
    }

    pub fn with_stats(stats: SessionStats) -> Self {
        Self {
            id: Uuid::new_v4(),
            event_bus: SessionEventBus::new(),
            stats,
            phase: GamePhase::Home,
            category: None,
            game: None,
            generation: 0,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    pub fn rank(&self) -> Rank {
        ScoringEngine::rank_for(self.stats.score)
    }

    pub fn category(&self) -> Option<GameType> {
        self.category
    }

    pub fn game(&self) -> Option<&GameSession> {
        self.game.as_ref()
    }

    pub fn current_question(&self) -> Option<&Question> {
        match self.phase {
            GamePhase::Playing => self.game.as_ref().map(GameSession::current_question),
            _ => None,
        }
    }

    /// Enter `Loading` for `category`. Ignored while another request is loading.
    pub fn begin_level(&mut self, category: GameType) -> Option<LevelRequest> {
        if self.phase == GamePhase::Loading {
            warn!(
                session = %self.id,
                "Ignoring {} selection while {:?} questions are loading",
                category, self.category
            );
            return None;
        }

        self.generation += 1;
        self.category = Some(category);
        self.game = None;
        self.set_phase(GamePhase::Loading);

        Some(LevelRequest {
            category,
            generation: self.generation,
        })
    }

    /// Install the questions for an outstanding request and start playing
    pub fn complete_level(&mut self, request: LevelRequest, questions: Vec<Question>) -> bool {
        if self.phase != GamePhase::Loading || request.generation != self.generation {
            warn!(
                session = %self.id,
                "Dropping stale {} questions (phase {:?})",
                request.category, self.phase
            );
            return false;
        }

        let questions = match validate_questions(request.category, &questions) {
            Ok(()) => questions,
            Err(e) => {
                warn!(
                    session = %self.id,
                    "Replacing unusable {} questions with fallback: {}",
                    request.category, e
                );
                fallback::questions(request.category)
            }
        };

        let question_count = questions.len();
        self.game = Some(GameSession::new(request.category, questions));
        self.event_bus.publish(SessionEvent::LevelLoaded {
            session_id: self.id,
            category: request.category,
            question_count,
        });
        self.set_phase(GamePhase::Playing);
        true
    }

    /// Request questions for `category` and start playing once they arrive
    pub async fn start_level<P>(&mut self, provider: &P, category: GameType) -> bool
    where
        P: QuestionProvider + ?Sized,
    {
        let Some(request) = self.begin_level(category) else {
            return false;
        };

        let questions = provider.questions_for(category).await;
        self.complete_level(request, questions)
    }

    /// Play the same category again from the results screen
    pub async fn replay<P>(&mut self, provider: &P) -> bool
    where
        P: QuestionProvider + ?Sized,
    {
        match (self.phase, self.category) {
            (GamePhase::Results, Some(category)) => self.start_level(provider, category).await,
            _ => false,
        }
    }

    /// Answer the current multiple-choice question. Only the first answer counts.
    pub fn record_answer(&mut self, answer: &str) -> Option<AnswerRecord> {
        if self.phase != GamePhase::Playing {
            return None;
        }
        let game = self.game.as_mut()?;
        let correct_answer = game.questions[game.current_index].correct_answer.clone();
        let question_id = game.questions[game.current_index].id.clone();

        let Round::MultipleChoice(choice) = &mut game.round else {
            debug!(session = %self.id, "Answer submitted to a {} round", game.category);
            return None;
        };
        let record = choice.answer(answer, &correct_answer)?;

        self.event_bus.publish(SessionEvent::AnswerRecorded {
            session_id: self.id,
            question_id,
            record: record.clone(),
        });

        if record.is_correct {
            self.celebrate(ANSWER_CELEBRATION);
            self.report_score(ScoringEngine::CORRECT_ANSWER_POINTS);
        } else {
            self.report_score(0);
        }

        Some(record)
    }

    /// Move to the next question, or to the results when this was the last one
    pub fn advance(&mut self) {
        if self.phase != GamePhase::Playing {
            return;
        }
        let Some(game) = self.game.as_mut() else {
            return;
        };

        if game.is_last_question() {
            game.advance_at = None;
            self.set_phase(GamePhase::Results);
        } else {
            game.next_question();
            debug!(
                session = %self.id,
                "Question {}/{}",
                game.current_index + 1,
                game.questions.len()
            );
        }
    }

    /// Add a mini-game's score delta; counts as one answered question
    pub fn report_score(&mut self, points: u32) {
        self.stats.add_points(points);
        debug!(
            session = %self.id,
            "Score +{} = {} ({})",
            points,
            self.stats.score,
            self.stats.rank()
        );
        self.event_bus.publish(SessionEvent::ScoreChanged {
            session_id: self.id,
            points,
            stats: self.stats,
        });
    }

    /// Feed the typing field's current contents to the typing controller
    pub fn type_input(&mut self, input: &str, now: Instant) -> Option<TypingOutcome> {
        if self.phase != GamePhase::Playing {
            return None;
        }
        let Some(GameSession {
            round: Round::Typing(typing),
            ..
        }) = self.game.as_mut()
        else {
            return None;
        };

        let outcome = typing.update_input(input, now);
        if let TypingOutcome::Completed { points, .. } = outcome {
            self.celebrate(WORD_CELEBRATION);
            self.report_score(points);
            self.advance();
        }

        Some(outcome)
    }

    /// Guess a letter in the current hangman word
    pub fn guess_letter(&mut self, letter: char, now: Instant) -> Option<GuessOutcome> {
        if self.phase != GamePhase::Playing {
            return None;
        }
        let game = self.game.as_mut()?;
        let Round::Hangman(hangman) = &mut game.round else {
            return None;
        };

        let outcome = hangman.guess(letter);
        match outcome {
            GuessOutcome::Won => {
                game.advance_at = Some(now + HANGMAN_ADVANCE_DELAY);
                self.celebrate(WORD_CELEBRATION);
                self.report_score(ScoringEngine::HANGMAN_WIN_POINTS);
            }
            GuessOutcome::Lost => {
                debug!(session = %self.id, "Hangman word lost: {}", hangman.word());
            }
            _ => {}
        }

        Some(outcome)
    }

    /// Perform a due auto-advance. Returns whether the session advanced.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.phase != GamePhase::Playing {
            return false;
        }
        let due = self
            .game
            .as_ref()
            .and_then(|game| game.advance_at)
            .is_some_and(|advance_at| now >= advance_at);

        if due {
            self.advance();
        }
        due
    }

    /// Back to the category menu. Score and rank are kept.
    pub fn reset(&mut self) {
        self.category = None;
        self.game = None;
        self.set_phase(GamePhase::Home);
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let active = match self.phase {
            GamePhase::Playing => self.game.as_ref(),
            _ => None,
        };

        SessionSnapshot {
            session_id: self.id,
            phase: self.phase,
            category: self.category,
            stats: StatsView::from(&self.stats),
            question_number: active.map_or(0, |game| game.current_index as u32 + 1),
            question_count: self.game.as_ref().map_or(0, |game| game.questions.len() as u32),
            question: active
                .map(|game| QuestionView::new(game.current_question(), game.round.is_resolved())),
            round: active.map(|game| game.round.view()),
        }
    }

    fn celebrate(&mut self, duration: Duration) {
        self.event_bus.publish(SessionEvent::Celebrate {
            session_id: self.id,
            duration,
        });
    }

    fn set_phase(&mut self, phase: GamePhase) {
        let from = self.phase;
        self.phase = phase;
        info!(session = %self.id, "Phase {:?} -> {:?}", from, phase);
        self.event_bus.publish(SessionEvent::PhaseChanged {
            session_id: self.id,
            from,
            to: phase,
        });
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiz_questions(count: usize) -> Vec<Question> {
        (0..count)
            .map(|i| Question {
                id: format!("q{}", i),
                category: GameType::Quiz,
                prompt: format!("Vraag {}", i),
                options: vec!["11 november".to_string(), "1 april".to_string()],
                correct_answer: "11 november".to_string(),
                explanation: String::new(),
            })
            .collect()
    }

    fn playing_quiz(count: usize) -> Session {
        let mut session = Session::new();
        let request = session.begin_level(GameType::Quiz).unwrap();
        assert!(session.complete_level(request, quiz_questions(count)));
        session
    }

    #[test]
    fn test_new_session_is_home() {
        let session = Session::new();
        assert_eq!(session.phase(), GamePhase::Home);
        assert_eq!(session.stats(), SessionStats::default());
        assert_eq!(session.rank(), Rank::Beginner);
        assert!(session.current_question().is_none());
    }

    #[test]
    fn test_begin_level_ignored_while_loading() {
        let mut session = Session::new();
        assert!(session.begin_level(GameType::Math).is_some());
        assert!(session.begin_level(GameType::Quiz).is_none());
        assert_eq!(session.category(), Some(GameType::Math));
        assert_eq!(session.phase(), GamePhase::Loading);
    }

    #[test]
    fn test_stale_completion_is_dropped() {
        let mut session = Session::new();
        let stale = session.begin_level(GameType::Quiz).unwrap();
        session.reset();
        let current = session.begin_level(GameType::Quiz).unwrap();

        assert!(!session.complete_level(stale, quiz_questions(1)));
        assert_eq!(session.phase(), GamePhase::Loading);

        assert!(session.complete_level(current, quiz_questions(2)));
        assert_eq!(session.phase(), GamePhase::Playing);
        assert_eq!(session.game().unwrap().questions.len(), 2);
    }

    #[test]
    fn test_empty_questions_fall_back() {
        let mut session = Session::new();
        let request = session.begin_level(GameType::Hangman).unwrap();
        assert!(session.complete_level(request, Vec::new()));
        assert_eq!(session.game().unwrap().questions, fallback::questions(GameType::Hangman));
    }

    #[test]
    fn test_questions_for_another_category_fall_back() {
        let mut session = Session::new();
        let request = session.begin_level(GameType::Typing).unwrap();
        assert!(session.complete_level(request, quiz_questions(1)));

        assert_eq!(session.game().unwrap().questions, fallback::questions(GameType::Typing));
        assert!(session.record_answer("11 november").is_none());
        assert_eq!(
            session.type_input("P", Instant::now()),
            Some(TypingOutcome::Pending)
        );
        assert_eq!(session.stats().score, 0);
    }

    #[test]
    fn test_unguessable_hangman_word_falls_back() {
        let mut session = Session::new();
        let request = session.begin_level(GameType::Hangman).unwrap();
        let date_only = Question {
            id: "h1".to_string(),
            category: GameType::Hangman,
            prompt: String::new(),
            options: Vec::new(),
            correct_answer: "11-11".to_string(),
            explanation: String::new(),
        };
        assert!(session.complete_level(request, vec![date_only]));

        assert_eq!(session.game().unwrap().questions, fallback::questions(GameType::Hangman));
        assert_eq!(
            session.guess_letter('P', Instant::now()),
            Some(GuessOutcome::Hit)
        );
    }

    #[test]
    fn test_correct_answer_scores() {
        let mut session = playing_quiz(1);
        let record = session.record_answer("11 november").unwrap();

        assert!(record.is_correct);
        assert_eq!(session.stats().score, 15);
        assert_eq!(session.stats().questions_answered, 1);
    }

    #[test]
    fn test_record_answer_only_once() {
        let mut session = playing_quiz(2);
        assert!(!session.record_answer("1 april").unwrap().is_correct);
        let after_first = session.stats();

        assert!(session.record_answer("11 november").is_none());
        assert!(session.record_answer("1 april").is_none());
        assert_eq!(session.stats(), after_first);
        assert_eq!(after_first.score, 0);
        assert_eq!(after_first.questions_answered, 1);
    }

    #[test]
    fn test_advance_through_to_results() {
        let mut session = playing_quiz(2);
        session.record_answer("11 november");
        session.advance();

        assert_eq!(session.phase(), GamePhase::Playing);
        assert_eq!(session.game().unwrap().current_index, 1);
        // Selection is cleared for the new question
        assert!(session.record_answer("11 november").is_some());

        session.advance();
        assert_eq!(session.phase(), GamePhase::Results);
        assert_eq!(session.stats().score, 30);

        // No-op outside of playing
        session.advance();
        assert_eq!(session.phase(), GamePhase::Results);
    }

    #[test]
    fn test_reset_keeps_stats() {
        let mut session = playing_quiz(1);
        session.record_answer("11 november");
        session.advance();
        session.reset();

        assert_eq!(session.phase(), GamePhase::Home);
        assert!(session.category().is_none());
        assert!(session.game().is_none());
        assert_eq!(session.stats().score, 15);
    }

    #[test]
    fn test_answers_ignored_outside_playing() {
        let mut session = Session::new();
        assert!(session.record_answer("11 november").is_none());
        assert!(session.type_input("Polonaise", Instant::now()).is_none());
        assert!(session.guess_letter('P', Instant::now()).is_none());
        assert_eq!(session.stats().questions_answered, 0);
    }

    #[test]
    fn test_snapshot_hides_answer_until_answered() {
        let mut session = playing_quiz(1);
        let snapshot = session.snapshot();
        assert_eq!(snapshot.question_number, 1);
        assert_eq!(snapshot.question_count, 1);
        assert!(snapshot.question.as_ref().unwrap().correct_answer.is_none());

        session.record_answer("1 april");
        let snapshot = session.snapshot();
        assert_eq!(
            snapshot.question.unwrap().correct_answer.as_deref(),
            Some("11 november")
        );
    }

    #[test]
    fn test_report_score_updates_rank() {
        let mut session = Session::with_stats(SessionStats {
            score: 55,
            questions_answered: 4,
        });
        session.report_score(6);
        assert_eq!(session.stats().score, 61);
        assert_eq!(session.rank(), Rank::Intermediate);
        assert_eq!(session.snapshot().stats.rank_title, "Raadslid");
    }
}
