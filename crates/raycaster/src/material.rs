use crate::color::{self, Rgb};

/// Surface response of a sphere or a plane.
///
/// `reflectivity` and `refractivity` are independent blend weights in [0, 1]; their sum is not
/// bounded, so a surface may return more energy than it receives.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub diffuse: Rgb,
    pub specular: Rgb,
    pub reflectivity: f32,
    pub refractivity: f32,
    /// Index of refraction of the medium enclosed by the surface
    pub ior: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            diffuse: color::linear::BLACK,
            specular: color::linear::BLACK,
            reflectivity: 0.0,
            refractivity: 0.0,
            ior: 1.0,
        }
    }
}

impl Material {
    pub fn diffuse(color: Rgb) -> Self {
        Self {
            diffuse: color,
            ..Default::default()
        }
    }

    pub fn with_specular(self, specular: Rgb) -> Self {
        Self { specular, ..self }
    }

    pub fn with_reflectivity(self, reflectivity: f32) -> Self {
        Self {
            reflectivity,
            ..self
        }
    }

    pub fn with_refraction(self, refractivity: f32, ior: f32) -> Self {
        Self {
            refractivity,
            ior,
            ..self
        }
    }
}
