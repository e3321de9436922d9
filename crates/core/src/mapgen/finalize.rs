//! The single grid-to-pixel pass run once the floor and wall sets are complete.

use serde::Serialize;

use crate::point::{GridPoint, PixelPoint};

use super::GridLayout;
use super::tiles::FloorSides;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Floor {
    pub grid: GridPoint,
    pub pixel: PixelPoint,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Wall {
    pub grid: GridPoint,
    pub pixel: PixelPoint,
    pub sides: FloorSides,
}

/// Floors and walls in pixel space. Only [`TileMap::finalize`] builds one, so a pixel
/// position always comes from a complete layout.
#[derive(Clone, Debug, PartialEq)]
pub struct TileMap {
    tile_size: u32,
    floors: Vec<Floor>,
    walls: Vec<Wall>,
}

impl TileMap {
    pub fn finalize(layout: &GridLayout, tile_size: u32) -> Self {
        let floors = layout
            .floors
            .iter()
            .map(|&grid| Floor { grid, pixel: grid.to_pixel(tile_size) })
            .collect();
        let walls = layout
            .walls
            .iter()
            .map(|(&grid, &sides)| Wall { grid, pixel: grid.to_pixel(tile_size), sides })
            .collect();
        Self { tile_size, floors, walls }
    }

    pub fn tile_size(&self) -> u32 {
        self.tile_size
    }

    pub fn floors(&self) -> &[Floor] {
        &self.floors
    }

    pub fn walls(&self) -> &[Wall] {
        &self.walls
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapgen::room::Room;
    use crate::mapgen::tiles::{gen_floors, gen_walls};

    #[test]
    fn every_tile_is_scaled_by_the_tile_size() {
        let rooms = vec![Room::from_size(2, 3, 2, 2)];
        let floors = gen_floors(&rooms, &[]);
        let walls = gen_walls(&floors, &[]);
        let layout = GridLayout { width: 10, height: 10, rooms, bridges: Vec::new(), floors, walls };

        let tiles = TileMap::finalize(&layout, 16);
        assert_eq!(tiles.floors().len(), 4);
        assert_eq!(tiles.walls().len(), 8);
        for floor in tiles.floors() {
            assert_eq!(floor.pixel, PixelPoint::new(floor.grid.x as f32 * 16.0, floor.grid.y as f32 * 16.0));
        }
        let west_wall = tiles
            .walls()
            .iter()
            .find(|wall| wall.grid == GridPoint::new(1, 3))
            .expect("west wall exists");
        assert_eq!(west_wall.pixel, PixelPoint::new(16.0, 48.0));
        assert_eq!(west_wall.sides, FloorSides::EAST);
    }
}
