use crate::{
    material::Material,
    math::{float::FloatAsExt, point::Point, vec::Vec3},
    ray::Ray,
};

use super::Shape;

/// Below this value of `normal·direction` a ray is considered parallel to a plane
pub const PARALLEL_EPSILON: f32 = 1e-6;

/// An infinite plane through `origin`. `normal` is expected to be of unit length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    pub origin: Point,
    pub normal: Vec3,
    pub material: Material,
}

fn plane_t(origin: Point, direction: Vec3, point: Point, normal: Vec3) -> Option<f32> {
    let denominator = normal.dot(direction).into_non_zero(PARALLEL_EPSILON)?;
    (normal.dot(point - origin) / denominator).into_finite()
}

/// Distance along `direction` to the plane through `point` with normal `normal`.
///
/// Returns None for rays parallel to the plane or pointing away from it.
pub fn intersect_plane(origin: Point, direction: Vec3, point: Point, normal: Vec3) -> Option<f32> {
    plane_t(origin, direction, point, normal).filter(|t| *t > 0.0)
}

impl Shape for Plane {
    fn intersect(&self, ray: &Ray) -> Option<f32> {
        plane_t(ray.origin, ray.direction, self.origin, self.normal).filter(|t| ray.contains(*t))
    }

    fn normal_at(&self, _pos: Point) -> Vec3 {
        self.normal
    }

    fn material(&self) -> &Material {
        &self.material
    }
}
