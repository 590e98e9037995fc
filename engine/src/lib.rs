pub mod config;
pub mod game;
pub mod logger;
pub mod session;

pub use game::{Board, GameMode, GameState, Mark, Outcome};
pub use session::{Session, SessionSettings, SessionState};
