//! Structural checks over a generated layout: room spacing, floor connectivity and wall
//! placement. Used by tests, the fuzz harness and `levelgen --check`.

use std::collections::{BTreeSet, VecDeque};
use std::fmt;

use crate::mapgen::{FloorSides, GridLayout, tiles::floor_sides};
use crate::point::GridPoint;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LayoutViolation {
    NoRooms,
    RoomsOverlap { first: usize, second: usize },
    RoomOutOfBounds { room: usize },
    Disconnected { reachable: usize, total: usize },
    WallOnFloor { at: GridPoint },
    DetachedWall { at: GridPoint },
    WrongWallSides { at: GridPoint, recorded: FloorSides, actual: FloorSides },
    MissingWall { at: GridPoint },
}

impl fmt::Display for LayoutViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoRooms => write!(f, "layout has no rooms"),
            Self::RoomsOverlap { first, second } => {
                write!(f, "rooms {first} and {second} overlap within the margin")
            }
            Self::RoomOutOfBounds { room } => write!(f, "room {room} leaves the map"),
            Self::Disconnected { reachable, total } => {
                write!(f, "only {reachable} of {total} floor cells reachable from the spawn room")
            }
            Self::WallOnFloor { at } => write!(f, "wall at ({}, {}) is also floor", at.x, at.y),
            Self::DetachedWall { at } => {
                write!(f, "wall at ({}, {}) has no orthogonal floor neighbour", at.x, at.y)
            }
            Self::WrongWallSides { at, recorded, actual } => write!(
                f,
                "wall at ({}, {}) records sides {recorded:?} but borders {actual:?}",
                at.x, at.y
            ),
            Self::MissingWall { at } => {
                write!(f, "floor-adjacent cell ({}, {}) is not a wall", at.x, at.y)
            }
        }
    }
}

/// Every violation found, in a stable order. An empty result means the layout is sound.
pub fn audit(layout: &GridLayout, margin: i32) -> Vec<LayoutViolation> {
    let mut violations = Vec::new();
    let Some(spawn) = layout.spawn_room() else {
        violations.push(LayoutViolation::NoRooms);
        return violations;
    };

    check_rooms(layout, margin, &mut violations);

    let reachable = reachable_floors(&layout.floors, spawn.center());
    if reachable.len() != layout.floors.len() {
        violations.push(LayoutViolation::Disconnected {
            reachable: reachable.len(),
            total: layout.floors.len(),
        });
    }

    check_walls(layout, &mut violations);
    violations
}

fn check_rooms(layout: &GridLayout, margin: i32, violations: &mut Vec<LayoutViolation>) {
    let (width, height) = (layout.width as i32, layout.height as i32);
    for (index, room) in layout.rooms.iter().enumerate() {
        if room.start.x < 0 || room.start.y < 0 || room.end.x > width || room.end.y > height {
            violations.push(LayoutViolation::RoomOutOfBounds { room: index });
        }
        for (other_index, other) in layout.rooms.iter().enumerate().skip(index + 1) {
            if room.collides_with(other, margin) {
                violations.push(LayoutViolation::RoomsOverlap { first: index, second: other_index });
            }
        }
    }
}

fn check_walls(layout: &GridLayout, violations: &mut Vec<LayoutViolation>) {
    for (&at, &recorded) in &layout.walls {
        if layout.floors.contains(&at) {
            violations.push(LayoutViolation::WallOnFloor { at });
            continue;
        }
        let actual = floor_sides(&layout.floors, at);
        if actual.is_empty() {
            violations.push(LayoutViolation::DetachedWall { at });
        } else if actual != recorded {
            violations.push(LayoutViolation::WrongWallSides { at, recorded, actual });
        }
    }

    for floor in &layout.floors {
        for neighbor in floor.orthogonal_neighbors() {
            if !layout.floors.contains(&neighbor) && !layout.walls.contains_key(&neighbor) {
                violations.push(LayoutViolation::MissingWall { at: neighbor });
            }
        }
    }
}

/// Orthogonal flood fill over the floor set.
pub fn reachable_floors(floors: &BTreeSet<GridPoint>, start: GridPoint) -> BTreeSet<GridPoint> {
    let mut seen = BTreeSet::new();
    if !floors.contains(&start) {
        return seen;
    }
    let mut queue = VecDeque::from([start]);
    seen.insert(start);
    while let Some(cell) = queue.pop_front() {
        for neighbor in cell.orthogonal_neighbors() {
            if floors.contains(&neighbor) && seen.insert(neighbor) {
                queue.push_back(neighbor);
            }
        }
    }
    seen
}
