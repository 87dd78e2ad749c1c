pub mod errors;
pub mod game;
pub mod messages;
pub mod stats;
pub mod views;

// Re-export all types
pub use errors::*;
pub use game::*;
pub use messages::*;
pub use stats::*;
pub use views::*;
