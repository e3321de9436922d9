//! Grid-space and pixel-space coordinates.
//!
//! Generation works in [`GridPoint`]s. Anything placed for the renderer (floors, walls,
//! monsters, interactives) lives in [`PixelPoint`]s, produced only through
//! [`GridPoint::to_pixel`].

use std::ops::{Add, Mul};

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GridPoint {
    pub y: i32,
    pub x: i32,
}

impl GridPoint {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { y, x }
    }

    pub fn distance(self, other: Self) -> f64 {
        let dx = f64::from(self.x - other.x);
        let dy = f64::from(self.y - other.y);
        dx.hypot(dy)
    }

    pub fn to_pixel(self, tile_size: u32) -> PixelPoint {
        let scale = tile_size as f32;
        PixelPoint { x: self.x as f32 * scale, y: self.y as f32 * scale }
    }

    /// The four orthogonal neighbours in north, east, south, west order.
    pub fn orthogonal_neighbors(self) -> [Self; 4] {
        [
            Self::new(self.x, self.y - 1),
            Self::new(self.x + 1, self.y),
            Self::new(self.x, self.y + 1),
            Self::new(self.x - 1, self.y),
        ]
    }
}

impl Add for GridPoint {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Mul<i32> for GridPoint {
    type Output = Self;

    fn mul(self, rhs: i32) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PixelPoint {
    pub x: f32,
    pub y: f32,
}

impl PixelPoint {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: Self) -> f32 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Grid cell containing this pixel position.
    pub fn to_grid(self, tile_size: u32) -> GridPoint {
        let scale = tile_size as f32;
        GridPoint::new((self.x / scale).floor() as i32, (self.y / scale).floor() as i32)
    }
}

impl Add for PixelPoint {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Mul<f32> for PixelPoint {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_arithmetic_and_distance() {
        let a = GridPoint::new(1, 2);
        let b = GridPoint::new(4, 6);
        assert_eq!(a + b, GridPoint::new(5, 8));
        assert_eq!(a * 3, GridPoint::new(3, 6));
        assert!((a.distance(b) - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn grid_points_order_row_major() {
        let upper_right = GridPoint::new(9, 0);
        let lower_left = GridPoint::new(0, 1);
        assert!(upper_right < lower_left);
    }

    #[test]
    fn pixel_conversion_scales_by_tile_size_and_back() {
        let cell = GridPoint::new(3, -1);
        let pixel = cell.to_pixel(16);
        assert_eq!(pixel, PixelPoint::new(48.0, -16.0));
        assert_eq!(pixel.to_grid(16), cell);
        assert_eq!(PixelPoint::new(47.9, 0.5).to_grid(16), GridPoint::new(2, 0));
    }

    #[test]
    fn pixel_arithmetic_and_distance() {
        let a = PixelPoint::new(0.0, 0.0);
        let b = PixelPoint::new(3.0, 4.0);
        assert_eq!((a + b) * 2.0, PixelPoint::new(6.0, 8.0));
        assert!((a.distance(b) - 5.0).abs() < f32::EPSILON);
    }
}
