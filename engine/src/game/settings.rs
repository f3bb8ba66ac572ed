use serde::{Deserialize, Serialize};

use crate::config::Validate;

/// Tunables of one game. The defaults reproduce the classic ruleset:
/// a 20x20 grid, 150ms ticks accelerating by 2ms per food down to 50ms,
/// 10 points per food.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSettings {
    pub tile_count: i32,
    pub base_speed_ms: u64,
    pub speed_floor_ms: u64,
    pub speed_step_ms: u64,
    pub food_score: u32,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            tile_count: 20,
            base_speed_ms: 150,
            speed_floor_ms: 50,
            speed_step_ms: 2,
            food_score: 10,
        }
    }
}

impl GameSettings {
    /// Half the grid side. Valid coordinates are `-half_extent()` to
    /// `half_extent() - 1` per axis.
    pub fn half_extent(&self) -> i32 {
        self.tile_count / 2
    }
}

impl Validate for GameSettings {
    fn validate(&self) -> Result<(), String> {
        if self.tile_count < 4 || self.tile_count > 100 {
            return Err("tile_count must be between 4 and 100".to_string());
        }
        if self.tile_count % 2 != 0 {
            return Err("tile_count must be even".to_string());
        }
        if self.base_speed_ms < 10 || self.base_speed_ms > 5000 {
            return Err("base_speed_ms must be between 10 and 5000".to_string());
        }
        if self.speed_floor_ms < 10 || self.speed_floor_ms > self.base_speed_ms {
            return Err("speed_floor_ms must be between 10 and base_speed_ms".to_string());
        }
        if self.food_score == 0 {
            return Err("food_score must be greater than 0".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(GameSettings::default().validate().is_ok());
    }

    #[test]
    fn test_odd_tile_count_is_rejected() {
        let mut settings = GameSettings::default();
        settings.tile_count = 21;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_floor_above_base_is_rejected() {
        let mut settings = GameSettings::default();
        settings.speed_floor_ms = 200;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_half_extent() {
        assert_eq!(GameSettings::default().half_extent(), 10);
    }
}
