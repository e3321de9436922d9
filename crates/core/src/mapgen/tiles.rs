//! Floor occupancy and the wall geometry derived from it.

use std::collections::{BTreeMap, BTreeSet};

use bitflags::bitflags;
use tracing::debug;

use crate::point::GridPoint;

use super::bridge::Bridge;
use super::room::Room;

bitflags! {
    /// Orthogonal sides of a wall cell that border floor. Renderers pick the wall
    /// sprite variant from this set.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
    pub struct FloorSides: u8 {
        const NORTH = 0b0001;
        const EAST = 0b0010;
        const SOUTH = 0b0100;
        const WEST = 0b1000;
    }
}

/// Side flags matching the order of [`GridPoint::orthogonal_neighbors`].
const NEIGHBOR_SIDES: [FloorSides; 4] =
    [FloorSides::NORTH, FloorSides::EAST, FloorSides::SOUTH, FloorSides::WEST];

/// Every interior cell of every room plus every corridor cell, keyed by position.
pub fn gen_floors(rooms: &[Room], bridges: &[Bridge]) -> BTreeSet<GridPoint> {
    let mut floors: BTreeSet<GridPoint> = rooms.iter().flat_map(|room| room.cells()).collect();
    let room_cells = floors.len();
    floors.extend(bridges.iter().flat_map(|bridge| bridge.points.iter().copied()));
    debug!(room_cells, total = floors.len(), "floors generated");
    floors
}

/// Walls are the non-floor cells orthogonally adjacent to a floor. Candidates come from
/// every floor's neighbourhood and from each corridor's flanks; duplicates collapse on
/// the grid key.
pub fn gen_walls(floors: &BTreeSet<GridPoint>, bridges: &[Bridge]) -> BTreeMap<GridPoint, FloorSides> {
    let mut candidates: BTreeSet<GridPoint> = BTreeSet::new();
    let mut emitted = 0_usize;
    for floor in floors {
        for neighbor in floor.orthogonal_neighbors() {
            if !floors.contains(&neighbor) {
                candidates.insert(neighbor);
                emitted += 1;
            }
        }
    }
    for bridge in bridges {
        for cell in bridge.side_walls(floors) {
            candidates.insert(cell);
            emitted += 1;
        }
    }

    let walls: BTreeMap<GridPoint, FloorSides> = candidates
        .into_iter()
        .map(|cell| (cell, floor_sides(floors, cell)))
        .filter(|(_, sides)| !sides.is_empty())
        .collect();
    debug!(candidates = emitted, walls = walls.len(), "walls derived");
    walls
}

pub fn floor_sides(floors: &BTreeSet<GridPoint>, cell: GridPoint) -> FloorSides {
    cell.orthogonal_neighbors()
        .into_iter()
        .zip(NEIGHBOR_SIDES)
        .filter(|(neighbor, _)| floors.contains(neighbor))
        .fold(FloorSides::empty(), |sides, (_, side)| sides | side)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_cell_is_surrounded_by_four_walls() {
        let floors: BTreeSet<GridPoint> = [GridPoint::new(0, 0)].into_iter().collect();
        let walls = gen_walls(&floors, &[]);
        assert_eq!(walls.len(), 4);
        assert_eq!(walls[&GridPoint::new(0, -1)], FloorSides::SOUTH);
        assert_eq!(walls[&GridPoint::new(1, 0)], FloorSides::WEST);
        assert_eq!(walls[&GridPoint::new(0, 1)], FloorSides::NORTH);
        assert_eq!(walls[&GridPoint::new(-1, 0)], FloorSides::EAST);
    }

    #[test]
    fn room_walls_ring_the_room_without_corners() {
        let room = Room::from_size(0, 0, 3, 2);
        let floors = gen_floors(&[room], &[]);
        let walls = gen_walls(&floors, &[]);
        assert_eq!(floors.len(), 6);
        assert_eq!(walls.len(), 2 * 3 + 2 * 2);
        assert!(!walls.contains_key(&GridPoint::new(-1, -1)));
        assert!(walls.keys().all(|cell| !floors.contains(cell)));
    }

    #[test]
    fn notch_between_two_floors_borders_both_sides() {
        let floors: BTreeSet<GridPoint> =
            [GridPoint::new(0, 0), GridPoint::new(2, 0)].into_iter().collect();
        let walls = gen_walls(&floors, &[]);
        assert_eq!(walls[&GridPoint::new(1, 0)], FloorSides::EAST | FloorSides::WEST);
    }

    #[test]
    fn overlapping_room_and_corridor_cells_are_stored_once() {
        let room = Room::from_size(0, 0, 4, 4);
        let bridges = [Bridge {
            from: 0,
            to: 1,
            points: vec![GridPoint::new(3, 1), GridPoint::new(4, 1), GridPoint::new(5, 1)],
        }];
        let floors = gen_floors(&[room], &bridges);
        assert_eq!(floors.len(), 16 + 2);
    }

    #[test]
    fn corridor_flanks_agree_with_the_floor_neighbourhood_pass() {
        let rooms = [Room::from_size(0, 0, 5, 5), Room::from_size(10, 8, 5, 5)];
        let bridges = [Bridge::connect(&rooms, 0, 1, false)];
        let floors = gen_floors(&rooms, &bridges);
        let from_floors_only = gen_walls(&floors, &[]);
        let with_flanks = gen_walls(&floors, &bridges);
        assert_eq!(from_floors_only, with_flanks);
        for cell in bridges[0].side_walls(&floors) {
            assert!(with_flanks.contains_key(&cell));
        }
    }
}
