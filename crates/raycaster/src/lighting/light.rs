use crate::{
    color::Rgb,
    math::{float::FloatAsExt, point::Point, vec::Vec3},
};

/// Cone restriction of a [Light].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spot {
    /// Unit vector the spot is aimed along
    pub direction: Vec3,
    /// Aperture of the cone in radians; points further than `theta / 2` from the axis are unlit
    pub theta: f32,
    /// Exponent applied to the cosine of the angle to the axis
    pub exponent: f32,
}

impl Spot {
    pub fn from_degrees(direction: Vec3, theta: f32, exponent: f32) -> Self {
        Self {
            direction,
            theta: theta.to_radians(),
            exponent,
        }
    }

    /// `from_light` is the unit vector from the light to the lit point
    pub fn attenuation(&self, from_light: Vec3) -> f32 {
        let cos_angle = from_light.dot(self.direction).clamp(-1.0, 1.0);
        if cos_angle.acos() > self.theta / 2.0 {
            return 0.0;
        }

        cos_angle.max(0.0).powf(self.exponent)
    }
}

/// Distance falloff `1 / (a2 d² + a1 d + a0)`. An unset coefficient contributes no term and a
/// light with no coefficient set does not fall off at all.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RadialAttenuation {
    pub a0: Option<f32>,
    pub a1: Option<f32>,
    pub a2: Option<f32>,
}

impl RadialAttenuation {
    pub const NONE: Self = Self {
        a0: None,
        a1: None,
        a2: None,
    };

    pub fn new(a0: f32, a1: f32, a2: f32) -> Self {
        Self {
            a0: Some(a0),
            a1: Some(a1),
            a2: Some(a2),
        }
    }

    pub fn is_disabled(&self) -> bool {
        self.a0.is_none() && self.a1.is_none() && self.a2.is_none()
    }

    pub fn attenuation(&self, distance: f32) -> f32 {
        if self.is_disabled() || distance.is_infinite() {
            return 1.0;
        }

        let a0 = self.a0.unwrap_or(0.0);
        let a1 = self.a1.unwrap_or(0.0);
        let a2 = self.a2.unwrap_or(0.0);
        let quotient = a2 * distance * distance + a1 * distance + a0;

        // A vanishing quotient fully attenuates instead of blowing up
        quotient
            .into_non_zero(0.0)
            .and_then(|q| (1.0 / q).into_finite())
            .map_or(0.0, |f| f.max(0.0))
    }
}

/// A point light, optionally restricted to a cone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    pub position: Point,
    pub color: Rgb,
    pub spot: Option<Spot>,
    pub radial: RadialAttenuation,
}

impl Light {
    pub fn point(position: Point, color: Rgb) -> Self {
        Self {
            position,
            color,
            spot: None,
            radial: RadialAttenuation::NONE,
        }
    }

    pub fn with_spot(self, spot: Spot) -> Self {
        Self {
            spot: Some(spot),
            ..self
        }
    }

    pub fn with_radial(self, radial: RadialAttenuation) -> Self {
        Self { radial, ..self }
    }

    /// 1 for omnidirectional lights
    pub fn angular_attenuation(&self, from_light: Vec3) -> f32 {
        self.spot.map_or(1.0, |spot| spot.attenuation(from_light))
    }

    pub fn radial_attenuation(&self, distance: f32) -> f32 {
        self.radial.attenuation(distance)
    }
}
