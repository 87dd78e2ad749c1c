pub mod fallback;
pub mod hangman;
pub mod provider;
pub mod question_validation;
pub mod round;
pub mod scoring;
pub mod session;
pub mod session_events;
pub mod typing;

// Re-export main components
pub use hangman::*;
pub use provider::*;
pub use question_validation::*;
pub use round::*;
pub use scoring::*;
pub use session::*;
pub use session_events::*;
pub use typing::*;
