use async_trait::async_trait;
use quiz_types::{GameType, Question};
use tracing::{debug, warn};

use crate::{InvalidContent, fallback, validate_questions};

/// Reasons live content could not be produced. Always recovered by the
/// fallback provider, never shown to the player.
#[derive(Debug, thiserror::Error)]
pub enum ContentUnavailable {
    #[error("request to question generator failed: {0}")]
    Transport(String),
    #[error("question generator returned status {status}")]
    Status { status: u16 },
    #[error("question generator returned no content")]
    EmptyResponse,
    #[error("could not parse generated questions: {0}")]
    Unparseable(String),
    #[error("generated questions are invalid: {0}")]
    Invalid(#[from] InvalidContent),
}

/// A live question generator that may fail
#[async_trait]
pub trait QuestionSource: Send + Sync {
    async fn fetch_questions(&self, category: GameType) -> Result<Vec<Question>, ContentUnavailable>;
}

/// Always resolves to a non-empty, valid question sequence
#[async_trait]
pub trait QuestionProvider: Send + Sync {
    async fn questions_for(&self, category: GameType) -> Vec<Question>;
}

/// Wraps a live source and substitutes the built-in questions on any failure
pub struct FallbackProvider<S> {
    source: S,
}

impl<S: QuestionSource> FallbackProvider<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    async fn live_questions(&self, category: GameType) -> Result<Vec<Question>, ContentUnavailable> {
        let questions = self.source.fetch_questions(category).await?;
        validate_questions(category, &questions)?;
        Ok(questions)
    }
}

#[async_trait]
impl<S: QuestionSource> QuestionProvider for FallbackProvider<S> {
    async fn questions_for(&self, category: GameType) -> Vec<Question> {
        match self.live_questions(category).await {
            Ok(questions) => {
                debug!("Generated {} {} questions", questions.len(), category);
                questions
            }
            Err(e) => {
                warn!("Using fallback {} questions: {}", category, e);
                fallback::questions(category)
            }
        }
    }
}

/// Serves only the built-in questions
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticProvider;

#[async_trait]
impl QuestionProvider for StaticProvider {
    async fn questions_for(&self, category: GameType) -> Vec<Question> {
        fallback::questions(category)
    }
}
