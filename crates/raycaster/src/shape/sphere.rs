use crate::{
    material::Material,
    math::{float::FloatAsExt, point::Point, vec::Vec3},
    ray::Ray,
};

use super::Shape;

/// A simple sphere shape, with normals pointing outwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    pub center: Point,
    pub radius: f32,
    pub material: Material,
}

/// Both roots of `|origin + t direction - center|² = radius²`, in ascending order.
fn sphere_roots(origin: Point, direction: Vec3, center: Point, radius: f32) -> Option<(f32, f32)> {
    let oc = origin - center;
    let a = direction.length_squared().into_non_zero(f32::EPSILON)?;
    let b = 2.0 * direction.dot(oc);
    let c = oc.length_squared() - radius * radius;

    let discriminant = b * b - 4.0 * a * c;
    if discriminant.is_nan() || discriminant < 0.0 {
        return None;
    }
    let sqrt_discriminant = discriminant.sqrt();

    // a > 0 so the roots are already ordered
    let t0 = (-b - sqrt_discriminant) / (2.0 * a);
    let t1 = (-b + sqrt_discriminant) / (2.0 * a);
    Some((t0, t1))
}

/// Distance along `direction` to the nearest point of the sphere in front of `origin`.
///
/// Returns None if the ray misses or if the sphere is entirely behind `origin`.
pub fn intersect_sphere(origin: Point, direction: Vec3, center: Point, radius: f32) -> Option<f32> {
    let (t0, t1) = sphere_roots(origin, direction, center, radius)?;
    [t0, t1].into_iter().find(|t| *t > 0.0)
}

impl Shape for Sphere {
    fn intersect(&self, ray: &Ray) -> Option<f32> {
        // Either find first hit if hit is in range else, find the second hit
        let (t0, t1) = sphere_roots(ray.origin, ray.direction, self.center, self.radius)?;
        [t0, t1].into_iter().find(|t| ray.contains(*t))
    }

    fn normal_at(&self, pos: Point) -> Vec3 {
        (pos - self.center).normalize()
    }

    fn material(&self) -> &Material {
        &self.material
    }
}
