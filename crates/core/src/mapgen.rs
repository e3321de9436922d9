//! Procedural level layout split into coherent submodules: room placement, ordering,
//! corridors, floor/wall derivation and the final pixel-space pass.

pub mod bridge;
pub mod finalize;
pub mod ordering;
pub mod placement;
pub mod room;
pub mod tiles;

use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use crate::config::GenerationConfig;
use crate::error::GenerationError;
use crate::point::GridPoint;
use crate::rng::LevelRng;

pub use bridge::{Bridge, generate_bridges};
pub use finalize::{Floor, TileMap, Wall};
pub use ordering::sort_rooms;
pub use placement::place_rooms;
pub use room::Room;
pub use tiles::{FloorSides, gen_floors, gen_walls};

/// Level geometry in grid units, before the pixel pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridLayout {
    pub width: u32,
    pub height: u32,
    /// Rooms in traversal order: the first is the spawn room, the last holds the stairs.
    pub rooms: Vec<Room>,
    pub bridges: Vec<Bridge>,
    pub floors: BTreeSet<GridPoint>,
    pub walls: BTreeMap<GridPoint, FloorSides>,
}

impl GridLayout {
    pub fn spawn_room(&self) -> Option<&Room> {
        self.rooms.first()
    }

    pub fn stairs_room(&self) -> Option<&Room> {
        self.rooms.last()
    }
}

/// Runs placement, ordering, bridging, floor and wall derivation in that order.
pub fn build_layout(
    config: &GenerationConfig,
    width: u32,
    height: u32,
    rng: &mut LevelRng,
) -> Result<GridLayout, GenerationError> {
    config.validate()?;
    let placed = place_rooms(config, width, height, rng)?;
    if placed.is_empty() {
        return Err(GenerationError::NoRoomsPlaced { trials: config.placement_trials });
    }

    let rooms = sort_rooms(placed);
    let bridges = generate_bridges(&rooms, rng);
    let floors = gen_floors(&rooms, &bridges);
    let walls = gen_walls(&floors, &bridges);
    debug!(rooms = rooms.len(), floors = floors.len(), walls = walls.len(), "layout built");

    Ok(GridLayout { width, height, rooms, bridges, floors, walls })
}
