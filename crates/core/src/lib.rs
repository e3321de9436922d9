pub mod audit;
pub mod config;
pub mod content;
pub mod error;
pub mod interactive;
pub mod level;
pub mod mapgen;
pub mod monster;
pub mod point;
pub mod population;
pub mod rng;
pub mod types;

pub use audit::{LayoutViolation, audit};
pub use config::GenerationConfig;
pub use content::{Armory, Bestiary, Weapon};
pub use error::{ConfigError, GenerationError};
pub use interactive::{Chest, GroundWeapon, InteractState, Interactive, Stairs};
pub use level::{DEFAULT_GENERATION_ATTEMPTS, LevelMap, SweepReport};
pub use mapgen::{Bridge, Floor, FloorSides, GridLayout, Room, TileMap, Wall};
pub use monster::{Monster, MonsterCatalog, MonsterController, MonsterTemplate};
pub use point::{GridPoint, PixelPoint};
pub use rng::LevelRng;
pub use types::*;
