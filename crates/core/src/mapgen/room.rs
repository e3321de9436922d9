//! Rectangular rooms on the generation grid.

use serde::Serialize;

use crate::point::GridPoint;

/// Half-open rectangle `[start.x, end.x) x [start.y, end.y)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Room {
    pub start: GridPoint,
    pub end: GridPoint,
}

impl Room {
    pub fn new(start: GridPoint, end: GridPoint) -> Self {
        debug_assert!(end.x > start.x && end.y > start.y, "room must have positive area");
        Self { start, end }
    }

    pub fn from_size(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self::new(GridPoint::new(x, y), GridPoint::new(x + width, y + height))
    }

    pub fn width(&self) -> i32 {
        self.end.x - self.start.x
    }

    pub fn height(&self) -> i32 {
        self.end.y - self.start.y
    }

    pub fn center(&self) -> GridPoint {
        GridPoint::new(self.start.x + self.width() / 2, self.start.y + self.height() / 2)
    }

    pub fn contains(&self, point: GridPoint) -> bool {
        point.x >= self.start.x
            && point.x < self.end.x
            && point.y >= self.start.y
            && point.y < self.end.y
    }

    pub fn expanded(&self, margin: i32) -> Self {
        Self {
            start: GridPoint::new(self.start.x - margin, self.start.y - margin),
            end: GridPoint::new(self.end.x + margin, self.end.y + margin),
        }
    }

    pub fn intersects(&self, other: &Self) -> bool {
        self.start.x < other.end.x
            && other.start.x < self.end.x
            && self.start.y < other.end.y
            && other.start.y < self.end.y
    }

    /// Overlap test with both rooms grown by `margin`, leaving space for walls and
    /// corridor mouths between neighbours.
    pub fn collides_with(&self, other: &Self, margin: i32) -> bool {
        self.expanded(margin).intersects(&other.expanded(margin))
    }

    pub fn is_colliding(&self, rooms: &[Self], margin: i32) -> bool {
        rooms.iter().any(|room| self.collides_with(room, margin))
    }

    /// Index of the candidate whose center is closest to this room's center.
    /// Ties keep the earliest candidate.
    pub fn nearest_index(&self, candidates: &[Self]) -> Option<usize> {
        let center = self.center();
        let mut best: Option<(usize, f64)> = None;
        for (index, candidate) in candidates.iter().enumerate() {
            let distance = center.distance(candidate.center());
            if best.is_none_or(|(_, best_distance)| distance < best_distance) {
                best = Some((index, distance));
            }
        }
        best.map(|(index, _)| index)
    }

    /// Every grid cell of the room, row by row.
    pub fn cells(&self) -> impl Iterator<Item = GridPoint> + '_ {
        (self.start.y..self.end.y)
            .flat_map(move |y| (self.start.x..self.end.x).map(move |x| GridPoint::new(x, y)))
    }
}
