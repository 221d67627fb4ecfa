use std::ops::Range;

use crate::math::point::Point;

use super::math::vec::Vec3;

/// A half-line `origin + t * direction`, restricted to the open interval `bounds`.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    pub origin: Point,
    pub direction: Vec3,
    pub bounds: (f32, f32),
}

impl Ray {
    pub fn new(origin: Point, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
            bounds: (0.0, f32::INFINITY),
        }
    }
    pub fn new_with_range(origin: Point, direction: Vec3, range: Range<f32>) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
            bounds: (range.start, range.end),
        }
    }

    /// Whether `t` lies strictly inside the bounds of the ray
    pub fn contains(&self, t: f32) -> bool {
        self.bounds.0 < t && t < self.bounds.1
    }

    pub fn at(&self, t: f32) -> Point {
        if !self.contains(t) {
            crate::error_once!("a ray has been accessed out of bounds");
        }

        self.at_unchecked(t)
    }
    pub fn at_unchecked(&self, t: f32) -> Point {
        self.origin + t * self.direction
    }
}
