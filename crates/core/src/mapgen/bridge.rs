//! Corridors ("bridges") between consecutive rooms of the traversal path.

use std::collections::BTreeSet;

use serde::Serialize;
use tracing::debug;

use crate::point::GridPoint;
use crate::rng::LevelRng;

use super::room::Room;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Bridge {
    /// Index of the source room in the sorted room list.
    pub from: usize,
    /// Index of the destination room in the sorted room list.
    pub to: usize,
    /// Corridor cells, ordered from the source room's edge to the destination's edge.
    pub points: Vec<GridPoint>,
}

impl Bridge {
    /// Builds the L-shaped corridor between the centers of `rooms[from]` and `rooms[to]`
    /// and keeps only the cells outside both rooms.
    pub fn connect(rooms: &[Room], from: usize, to: usize, horizontal_first: bool) -> Self {
        let source = rooms[from];
        let destination = rooms[to];
        let points = l_shaped_path(source.center(), destination.center(), horizontal_first)
            .into_iter()
            .filter(|point| !source.contains(*point) && !destination.contains(*point))
            .collect();
        Self { from, to, points }
    }

    /// Cells flanking the corridor across its direction of travel (both axes at bends)
    /// that are not floor once every room and bridge has been laid down.
    pub fn side_walls(&self, floors: &BTreeSet<GridPoint>) -> Vec<GridPoint> {
        let mut walls = Vec::new();
        for (index, &point) in self.points.iter().enumerate() {
            let previous = index.checked_sub(1).and_then(|i| self.points.get(i));
            let next = self.points.get(index + 1);
            let mut horizontal = false;
            let mut vertical = false;
            for neighbor in [previous, next].into_iter().flatten() {
                horizontal |= neighbor.y == point.y;
                vertical |= neighbor.x == point.x;
            }
            if !horizontal && !vertical {
                horizontal = true;
                vertical = true;
            }

            let [north, east, south, west] = point.orthogonal_neighbors();
            let mut flanks = Vec::with_capacity(4);
            if horizontal {
                flanks.extend([north, south]);
            }
            if vertical {
                flanks.extend([east, west]);
            }
            walls.extend(flanks.into_iter().filter(|cell| !floors.contains(cell)));
        }
        walls
    }
}

/// Connects every consecutive pair of the ordered rooms. A single room yields none.
pub fn generate_bridges(rooms: &[Room], rng: &mut LevelRng) -> Vec<Bridge> {
    let bridges: Vec<Bridge> = (1..rooms.len())
        .map(|to| Bridge::connect(rooms, to - 1, to, rng.coin_flip()))
        .collect();
    debug!(
        bridges = bridges.len(),
        cells = bridges.iter().map(|bridge| bridge.points.len()).sum::<usize>(),
        "corridors generated"
    );
    bridges
}

fn l_shaped_path(start: GridPoint, end: GridPoint, horizontal_first: bool) -> Vec<GridPoint> {
    let corner = if horizontal_first {
        GridPoint::new(end.x, start.y)
    } else {
        GridPoint::new(start.x, end.y)
    };
    let mut points = Vec::new();
    push_segment(&mut points, start, corner);
    push_segment(&mut points, corner, end);
    points
}

fn push_segment(points: &mut Vec<GridPoint>, from: GridPoint, to: GridPoint) {
    let step = GridPoint::new((to.x - from.x).signum(), (to.y - from.y).signum());
    let mut current = from;
    loop {
        if points.last() != Some(&current) {
            points.push(current);
        }
        if current == to {
            break;
        }
        current = current + step;
    }
}
