mod food;
mod settings;
mod state;
mod types;

pub use food::spawn_food;
pub use settings::GameSettings;
pub use state::SnakeGame;
pub use types::{Direction, GameOverReason, GameSnapshot, GridPosition, StepOutcome, StepResult};
