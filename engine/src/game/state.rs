use std::collections::VecDeque;

use crate::log;
use crate::session_rng::SessionRng;

use super::food::spawn_food;
use super::settings::GameSettings;
use super::types::{
    Direction, GameOverReason, GameSnapshot, GridPosition, StepOutcome, StepResult,
};

/// Authoritative state of one game: the snake body, direction, food,
/// score, speed and lifecycle flags. The engine is purely discrete; an
/// external driver calls [`step`] once per tick at the cadence given by
/// the current speed, and an input layer feeds [`set_direction`] between
/// ticks.
///
/// Lifecycle: `NotStarted -> Running -> GameOver -> Running -> ...`, where
/// only [`start_game`] moves the state into `Running`. `NotStarted` and
/// `GameOver` are inert: [`step`] and [`set_direction`] are no-ops there.
///
/// [`step`]: SnakeGame::step
/// [`set_direction`]: SnakeGame::set_direction
/// [`start_game`]: SnakeGame::start_game
#[derive(Clone, Debug)]
pub struct SnakeGame {
    settings: GameSettings,
    snake: VecDeque<GridPosition>,
    direction: Option<Direction>,
    pending_direction: Option<Direction>,
    food: GridPosition,
    score: u32,
    speed_ms: u64,
    started: bool,
    over: bool,
    game_over_reason: Option<GameOverReason>,
}

impl SnakeGame {
    pub fn new(settings: GameSettings, rng: &mut SessionRng) -> Self {
        let food = spawn_food(rng, settings.tile_count);
        Self {
            settings,
            snake: VecDeque::from([GridPosition::new(0, 0)]),
            direction: None,
            pending_direction: None,
            food,
            score: 0,
            speed_ms: settings.base_speed_ms,
            started: false,
            over: false,
            game_over_reason: None,
        }
    }

    /// Resets everything to initial values and enters `Running`. Legal
    /// from any state, including a second call in a row.
    pub fn start_game(&mut self, rng: &mut SessionRng) -> GameSnapshot {
        self.snake = VecDeque::from([GridPosition::new(0, 0)]);
        self.direction = None;
        self.pending_direction = None;
        self.food = spawn_food(rng, self.settings.tile_count);
        self.score = 0;
        self.speed_ms = self.settings.base_speed_ms;
        self.started = true;
        self.over = false;
        self.game_over_reason = None;
        log!("Game started on a {0}x{0} grid", self.settings.tile_count);
        self.snapshot()
    }

    /// Requests a turn for the next tick. A request that reverses the
    /// committed direction is dropped silently; otherwise the last valid
    /// request before a tick wins. No-op while not running.
    pub fn set_direction(&mut self, direction: Direction) {
        if !self.started || self.over {
            return;
        }
        if let Some(current) = self.direction
            && direction.is_opposite(&current)
        {
            return;
        }
        self.pending_direction = Some(direction);
    }

    /// Advances the game by one cell. Runs to completion synchronously;
    /// returns `Ignored` while not running or before the first input.
    pub fn step(&mut self, rng: &mut SessionRng) -> StepResult {
        if !self.started || self.over {
            return self.step_result(StepOutcome::Ignored);
        }

        if let Some(direction) = self.pending_direction.take() {
            self.direction = Some(direction);
        }

        let Some(direction) = self.direction else {
            // The snake does not move before the first accepted input.
            return self.step_result(StepOutcome::Ignored);
        };

        let next_head = self.head().offset(direction);

        let half = self.settings.half_extent();
        if next_head.x < -half || next_head.x >= half || next_head.z < -half || next_head.z >= half
        {
            return self.finish(GameOverReason::WallCollision, next_head);
        }

        // The last segment is exempt because it vacates its cell on a
        // normal move. The exemption holds even when this tick turns out
        // to eat and the tail stays put, so the head may enter the current
        // tail cell while growing.
        if self
            .snake
            .iter()
            .take(self.snake.len() - 1)
            .any(|segment| *segment == next_head)
        {
            return self.finish(GameOverReason::SelfCollision, next_head);
        }

        self.snake.push_front(next_head);

        if next_head == self.food {
            self.score += self.settings.food_score;
            self.food = spawn_food(rng, self.settings.tile_count);
            self.speed_ms = self
                .speed_ms
                .saturating_sub(self.settings.speed_step_ms)
                .max(self.settings.speed_floor_ms);
            log!(
                "Ate food at ({}, {}). Score: {}, speed: {}ms",
                next_head.x,
                next_head.z,
                self.score,
                self.speed_ms
            );
            self.step_result(StepOutcome::Ate)
        } else {
            self.snake.pop_back();
            self.step_result(StepOutcome::Moved)
        }
    }

    fn finish(&mut self, reason: GameOverReason, at: GridPosition) -> StepResult {
        self.over = true;
        self.game_over_reason = Some(reason);
        log!(
            "Game over: {:?} at ({}, {}). Final score: {}",
            reason,
            at.x,
            at.z,
            self.score
        );
        self.step_result(StepOutcome::GameOver(reason))
    }

    fn step_result(&self, outcome: StepOutcome) -> StepResult {
        StepResult {
            outcome,
            snake: self.snake.iter().copied().collect(),
            food: self.food,
            score: self.score,
            speed_ms: self.speed_ms,
        }
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            snake: self.snake.iter().copied().collect(),
            direction: self.direction,
            food: self.food,
            score: self.score,
            speed_ms: self.speed_ms,
            started: self.started,
            over: self.over,
            game_over_reason: self.game_over_reason,
        }
    }

    pub fn head(&self) -> GridPosition {
        *self.snake.front().expect("Snake body should never be empty")
    }

    pub fn tail(&self) -> GridPosition {
        *self.snake.back().expect("Snake body should never be empty")
    }

    pub fn snake(&self) -> &VecDeque<GridPosition> {
        &self.snake
    }

    pub fn food(&self) -> GridPosition {
        self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn speed_ms(&self) -> u64 {
        self.speed_ms
    }

    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn is_over(&self) -> bool {
        self.over
    }

    pub fn game_over_reason(&self) -> Option<GameOverReason> {
        self.game_over_reason
    }

    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    #[cfg(test)]
    fn set_snake(&mut self, segments: &[GridPosition]) {
        self.snake = segments.iter().copied().collect();
    }

    #[cfg(test)]
    fn set_food(&mut self, food: GridPosition) {
        self.food = food;
    }
}
