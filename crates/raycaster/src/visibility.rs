//! Shadow rays.

use crate::{
    counter,
    lighting::Light,
    math::{float::FloatAsExt, point::Point},
    ray::Ray,
    scene::{ObjectId, Scene},
};

/// Whether some shape other than `surface` lies strictly between `point` and `light`.
///
/// `surface` is the shape `point` lies on. It is excluded by identity so that rounding errors on
/// `point` cannot make a surface shadow itself.
pub fn in_shadow(scene: &Scene, point: Point, surface: ObjectId, light: &Light) -> bool {
    counter!("Shadow rays");

    let to_light = light.position - point;
    let Some(distance) = to_light.length().into_non_zero(0.0) else {
        return false;
    };

    let shadow_ray = Ray::new_with_range(point, to_light, 0.0..distance);
    scene.any_hit(&shadow_ray, Some(surface))
}
