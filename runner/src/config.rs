use serde::{Deserialize, Serialize};

use snake3d_engine::GameSettings;
use snake3d_engine::config::Validate;

use crate::autopilot::AutopilotKind;

pub const CONFIG_FILE_NAME: &str = "snake3d_runner_config.yaml";

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct RunnerConfig {
    pub game: GameSettings,
    pub autopilot: AutopilotKind,
    pub games: u32,
    pub max_ticks: u64,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            game: GameSettings::default(),
            autopilot: AutopilotKind::Greedy,
            games: 1,
            max_ticks: 10_000,
        }
    }
}

impl Validate for RunnerConfig {
    fn validate(&self) -> Result<(), String> {
        self.game.validate()?;
        if self.games == 0 {
            return Err("games must be greater than 0".to_string());
        }
        if self.max_ticks == 0 {
            return Err("max_ticks must be greater than 0".to_string());
        }
        Ok(())
    }
}
