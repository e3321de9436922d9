//! Generation constants, with defaults and optional JSON overrides.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const DEFAULT_ROOM_MIN_SIZE: i32 = 7;
pub const DEFAULT_ROOM_MAX_SIZE: i32 = 21;
pub const DEFAULT_PLACEMENT_TRIALS: u32 = 50;
pub const DEFAULT_TILE_SIZE: u32 = 16;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    pub room_min_width: i32,
    pub room_max_width: i32,
    pub room_min_height: i32,
    pub room_max_height: i32,
    /// Gap, in tiles, added around both rooms before the overlap test.
    pub room_margin: i32,
    pub placement_trials: u32,
    pub tile_size: u32,
    /// One monster in `monster_chance` per room column.
    pub monster_chance: u32,
    /// One chest in `chest_chance` per interior room.
    pub chest_chance: u32,
    /// One weapon drop in `weapon_drop_chance` per monster death.
    pub weapon_drop_chance: u32,
    pub interact_range_tiles: f32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            room_min_width: DEFAULT_ROOM_MIN_SIZE,
            room_max_width: DEFAULT_ROOM_MAX_SIZE,
            room_min_height: DEFAULT_ROOM_MIN_SIZE,
            room_max_height: DEFAULT_ROOM_MAX_SIZE,
            room_margin: 1,
            placement_trials: DEFAULT_PLACEMENT_TRIALS,
            tile_size: DEFAULT_TILE_SIZE,
            monster_chance: 8,
            chest_chance: 7,
            weapon_drop_chance: 4,
            interact_range_tiles: 1.5,
        }
    }
}

impl GenerationConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)
            .map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;
        Self::from_json_str(&content)
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_room_range("width", self.room_min_width, self.room_max_width)?;
        check_room_range("height", self.room_min_height, self.room_max_height)?;
        if self.room_margin < 0 {
            return Err(ConfigError::NegativeMargin(self.room_margin));
        }
        for (name, value) in [
            ("placement_trials", self.placement_trials),
            ("tile_size", self.tile_size),
            ("monster_chance", self.monster_chance),
            ("chest_chance", self.chest_chance),
            ("weapon_drop_chance", self.weapon_drop_chance),
        ] {
            if value == 0 {
                return Err(ConfigError::Zero(name));
            }
        }
        if !(self.interact_range_tiles.is_finite() && self.interact_range_tiles > 0.0) {
            return Err(ConfigError::InvalidInteractRange(self.interact_range_tiles));
        }
        Ok(())
    }

    pub fn interact_range_px(&self) -> f32 {
        self.interact_range_tiles * self.tile_size as f32
    }
}

fn check_room_range(axis: &'static str, min: i32, max: i32) -> Result<(), ConfigError> {
    if min <= 0 {
        return Err(ConfigError::NonPositiveRoomSize { axis, min });
    }
    if min > max {
        return Err(ConfigError::EmptyRoomRange { axis, min, max });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn defaults_are_valid_and_match_reference_room_bounds() {
        let config = GenerationConfig::default();
        config.validate().expect("defaults should validate");
        assert_eq!((config.room_min_width, config.room_max_width), (7, 21));
        assert_eq!((config.room_min_height, config.room_max_height), (7, 21));
        assert_eq!(config.placement_trials, 50);
    }

    #[test]
    fn partial_json_keeps_defaults_for_missing_fields() {
        let config = GenerationConfig::from_json_str(r#"{ "placement_trials": 80, "tile_size": 32 }"#)
            .expect("partial config should parse");
        assert_eq!(config.placement_trials, 80);
        assert_eq!(config.tile_size, 32);
        assert_eq!(config.room_max_width, DEFAULT_ROOM_MAX_SIZE);
        assert!((config.interact_range_px() - 48.0).abs() < f32::EPSILON);
    }

    #[test]
    fn rejects_inverted_room_range() {
        let config = GenerationConfig { room_min_height: 9, room_max_height: 4, ..Default::default() };
        let err = config.validate().expect_err("inverted range must fail");
        assert!(matches!(err, ConfigError::EmptyRoomRange { axis: "height", min: 9, max: 4 }));
    }

    #[test]
    fn rejects_zero_denominators() {
        let config = GenerationConfig { chest_chance: 0, ..Default::default() };
        let err = config.validate().expect_err("zero chance must fail");
        assert!(err.to_string().contains("chest_chance"), "unexpected message: {err}");
    }

    #[test]
    fn rejects_non_positive_interact_range() {
        let config = GenerationConfig { interact_range_tiles: 0.0, ..Default::default() };
        assert!(matches!(config.validate(), Err(ConfigError::InvalidInteractRange(_))));
    }

    #[test]
    fn loads_config_file_from_disk() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("levelgen.json");
        let written = GenerationConfig { room_margin: 2, monster_chance: 5, ..Default::default() };
        fs::write(&path, serde_json::to_string_pretty(&written).expect("serialize"))
            .expect("write");

        let loaded = GenerationConfig::load(&path).expect("load");
        assert_eq!(loaded, written);
    }

    #[test]
    fn missing_file_reports_its_path() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("absent.json");
        let err = GenerationConfig::load(&path).expect_err("missing file must fail");
        assert!(err.to_string().contains("absent.json"), "unexpected message: {err}");
    }
}
