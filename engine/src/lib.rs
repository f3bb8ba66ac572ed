pub mod config;
pub mod game;
pub mod logger;
pub mod session_rng;

pub use game::{
    Direction, GameOverReason, GameSettings, GameSnapshot, GridPosition, SnakeGame, StepOutcome,
    StepResult,
};
pub use session_rng::SessionRng;
