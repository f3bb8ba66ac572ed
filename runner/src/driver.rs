use std::time::Duration;

use tokio::time::sleep;

use snake3d_engine::{GameOverReason, SessionRng, SnakeGame, StepOutcome};

use crate::autopilot::{Autopilot, AutopilotKind};

pub struct RoundReport {
    pub score: u32,
    pub ticks: u64,
    pub length: usize,
    /// None when the round was cut off by the tick budget.
    pub reason: Option<GameOverReason>,
}

/// Plays one round to completion: the repeating-timer driver from the
/// engine's contract. The sleep is re-armed from the speed reported by
/// each step result, so a speed-up takes effect on the following tick (at
/// worst one tick still fires at the old interval).
pub async fn run_round(
    game: &mut SnakeGame,
    rng: &mut SessionRng,
    autopilot: AutopilotKind,
    max_ticks: u64,
) -> RoundReport {
    game.start_game(rng);
    let mut interval_ms = game.speed_ms();
    let mut ticks = 0u64;

    loop {
        sleep(Duration::from_millis(interval_ms)).await;

        if let Some(direction) = Autopilot::calculate_move(autopilot, game) {
            game.set_direction(direction);
        }

        let result = game.step(rng);
        ticks += 1;
        interval_ms = result.speed_ms;

        if let StepOutcome::GameOver(reason) = result.outcome {
            return RoundReport {
                score: result.score,
                ticks,
                length: result.snake.len(),
                reason: Some(reason),
            };
        }

        if ticks >= max_ticks {
            return RoundReport {
                score: result.score,
                ticks,
                length: result.snake.len(),
                reason: None,
            };
        }
    }
}
