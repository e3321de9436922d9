//! Stable hashing of the generated geometry for determinism checks.

use std::hash::Hasher;

use xxhash_rust::xxh3::Xxh3;

use super::*;
use crate::point::GridPoint;

impl LevelMap {
    /// Hash of everything generation decides: rooms, corridors, floors, walls, spawn and
    /// stairs. Population is not included.
    pub fn layout_hash(&self) -> u64 {
        let mut hasher = Xxh3::new();
        hasher.write_u64(self.rng.seed());
        hasher.write_u32(self.level);
        hasher.write_u32(self.layout.width);
        hasher.write_u32(self.layout.height);

        hasher.write_usize(self.layout.rooms.len());
        for room in &self.layout.rooms {
            write_point(&mut hasher, room.start);
            write_point(&mut hasher, room.end);
        }
        hasher.write_usize(self.layout.bridges.len());
        for bridge in &self.layout.bridges {
            hasher.write_usize(bridge.from);
            hasher.write_usize(bridge.to);
            hasher.write_usize(bridge.points.len());
            for &point in &bridge.points {
                write_point(&mut hasher, point);
            }
        }
        hasher.write_usize(self.layout.floors.len());
        for &floor in &self.layout.floors {
            write_point(&mut hasher, floor);
        }
        hasher.write_usize(self.layout.walls.len());
        for (&wall, sides) in &self.layout.walls {
            write_point(&mut hasher, wall);
            hasher.write_u8(sides.bits());
        }

        hasher.write_u32(self.spawn.x.to_bits());
        hasher.write_u32(self.spawn.y.to_bits());
        hasher.write_u32(self.stairs.pos.x.to_bits());
        hasher.write_u32(self.stairs.pos.y.to_bits());
        hasher.write_u32(self.stairs.target_level);
        hasher.finish()
    }
}

fn write_point(hasher: &mut Xxh3, point: GridPoint) {
    hasher.write_i32(point.x);
    hasher.write_i32(point.y);
}
