use quiz_types::{AnswerRecord, GamePhase, GameType, SessionStats};
use std::time::Duration;
use uuid::Uuid;

pub type SessionId = Uuid;

#[derive(Debug, Clone)]
pub enum SessionEvent {
    PhaseChanged {
        session_id: SessionId,
        from: GamePhase,
        to: GamePhase,
    },
    LevelLoaded {
        session_id: SessionId,
        category: GameType,
        question_count: usize,
    },
    AnswerRecorded {
        session_id: SessionId,
        question_id: String,
        record: AnswerRecord,
    },
    ScoreChanged {
        session_id: SessionId,
        points: u32,
        stats: SessionStats,
    },
    /// Decorative only; handlers must not feed anything back into the session
    Celebrate {
        session_id: SessionId,
        duration: Duration,
    },
}

impl SessionEvent {
    pub fn session_id(&self) -> SessionId {
        match self {
            SessionEvent::PhaseChanged { session_id, .. } => *session_id,
            SessionEvent::LevelLoaded { session_id, .. } => *session_id,
            SessionEvent::AnswerRecorded { session_id, .. } => *session_id,
            SessionEvent::ScoreChanged { session_id, .. } => *session_id,
            SessionEvent::Celebrate { session_id, .. } => *session_id,
        }
    }
}

/// Event handler trait for observing session events
pub trait SessionEventHandler: Send {
    fn handle_event(&mut self, event: &SessionEvent);
}

/// Simple event bus for distributing session events
pub struct SessionEventBus {
    handlers: Vec<Box<dyn SessionEventHandler>>,
}

impl SessionEventBus {
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    pub fn add_handler(&mut self, handler: Box<dyn SessionEventHandler>) {
        self.handlers.push(handler);
    }

    pub fn publish(&mut self, event: SessionEvent) {
        for handler in &mut self.handlers {
            handler.handle_event(&event);
        }
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }
}

impl Default for SessionEventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SessionEventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionEventBus")
            .field("handlers", &self.handlers.len())
            .finish()
    }
}
