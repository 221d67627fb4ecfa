//! Local illumination: Lambertian diffuse plus a Phong specular lobe, scaled by the angular and
//! radial attenuation of the light.

pub mod light;

pub use light::{Light, RadialAttenuation, Spot};

use crate::{
    color::Rgb,
    material::Material,
    math::{
        point::Point,
        vec::{RefrReflVecExt, RgbAsVec3Ext, Vec3, Vec3AsNonZero, Vec3AsRgbExt},
    },
};

/// Exponent of the specular lobe
pub const DEFAULT_SPECULAR_EXPONENT: f32 = 20.0;

/// `Kd · Il · (N·L)`, or zero when the light is behind the surface
pub fn diffuse(kd: Vec3, il: Vec3, normal: Vec3, to_light: Vec3) -> Vec3 {
    let n_dot_l = normal.dot(to_light);
    if n_dot_l > 0.0 {
        kd * il * n_dot_l
    } else {
        Vec3::ZERO
    }
}

/// `Ks · Il · (R·V)^n`, or zero unless both `R·V` and `N·L` are positive
///
/// `reflected` is `to_light` mirrored around `normal` and `view` the direction of the incoming
/// ray.
pub fn specular(
    ks: Vec3,
    il: Vec3,
    view: Vec3,
    reflected: Vec3,
    normal: Vec3,
    to_light: Vec3,
    exponent: f32,
) -> Vec3 {
    let r_dot_v = view.dot(reflected);
    if r_dot_v > 0.0 && normal.dot(to_light) > 0.0 {
        ks * il * r_dot_v.powf(exponent)
    } else {
        Vec3::ZERO
    }
}

/// Geometry of the point being shaded.
#[derive(Debug, Clone, Copy)]
pub struct ShadingPoint {
    pub pos: Point,
    /// Outward unit normal
    pub normal: Vec3,
    /// Unit direction of the ray that reached `pos`
    pub view: Vec3,
}

/// Radiance `light` sends toward the viewer through `point`. Occlusion is not checked here.
pub fn illuminate(
    light: &Light,
    material: &Material,
    point: &ShadingPoint,
    specular_exponent: f32,
) -> Rgb {
    let to_light = light.position - point.pos;
    let distance = to_light.length();
    let Some(to_light) = to_light.into_unit() else {
        // The light sits on the surface, there is no direction to shade with
        return Rgb::default();
    };

    let attenuation =
        light.angular_attenuation(-to_light) * light.radial_attenuation(distance);
    if attenuation == 0.0 {
        return Rgb::default();
    }

    let il = light.color.vec();
    let reflected = to_light.reflect(point.normal);
    let diffuse = diffuse(material.diffuse.vec(), il, point.normal, to_light);
    let specular = specular(
        material.specular.vec(),
        il,
        point.view,
        reflected,
        point.normal,
        to_light,
        specular_exponent,
    );

    (attenuation * (diffuse + specular)).rgb()
}
