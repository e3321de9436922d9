//! Rejection-sampled room placement.

use tracing::debug;

use crate::config::GenerationConfig;
use crate::error::GenerationError;
use crate::rng::LevelRng;

use super::room::Room;

/// Draws `placement_trials` candidate rooms and keeps those that do not collide with an
/// already accepted room. Rejected candidates are dropped, never retried, so the result
/// holds between zero and `placement_trials` rooms in acceptance order.
pub fn place_rooms(
    config: &GenerationConfig,
    width: u32,
    height: u32,
    rng: &mut LevelRng,
) -> Result<Vec<Room>, GenerationError> {
    let (Ok(grid_width), Ok(grid_height)) = (i32::try_from(width), i32::try_from(height)) else {
        return Err(GenerationError::MapTooLarge { width, height });
    };
    let max_x = grid_width - config.room_max_width;
    let max_y = grid_height - config.room_max_height;
    if max_x < 0 || max_y < 0 {
        return Err(GenerationError::MapTooSmall {
            width,
            height,
            room_width: config.room_max_width,
            room_height: config.room_max_height,
        });
    }

    let mut rooms: Vec<Room> = Vec::new();
    let mut rejected = 0_u32;
    for _ in 0..config.placement_trials {
        let x = rng.randint(0, max_x);
        let y = rng.randint(0, max_y);
        let room_width = rng.randint(config.room_min_width, config.room_max_width);
        let room_height = rng.randint(config.room_min_height, config.room_max_height);
        let candidate = Room::from_size(x, y, room_width, room_height);
        if candidate.is_colliding(&rooms, config.room_margin) {
            rejected += 1;
            continue;
        }
        rooms.push(candidate);
    }

    debug!(accepted = rooms.len(), rejected, "room placement finished");
    Ok(rooms)
}
