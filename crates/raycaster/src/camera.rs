use crate::{
    math::{point::Point, vec::Vec3},
    ray::Ray,
};

/// A pinhole camera at the origin looking down +Z through a view plane at `z = 1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// width of the view plane, in world unit
    pub width: f32,
    /// height of the view plane, in world unit
    pub height: f32,
}

impl Camera {
    pub const POSITION: Point = Point::ORIGIN;

    /// Generate the primary ray going through the given [ViewportCoord]
    pub fn ray(&self, coords: ViewportCoord) -> Ray {
        Ray::new(Self::POSITION, Vec3::new(coords.vx, coords.vy, 1.0))
    }
}

/// Size of the rendered image, in pixel
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

impl std::fmt::Display for Dimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Represent a pixel in the view plane grid.
///
/// $\left(0, 0\right)$ is the bottom left pixel, `y` grows upwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelCoord {
    pub x: u32,
    pub y: u32,
}

/// Represent a coordinate on the view plane, in world unit.
///
/// $\left(0, 0\right)$ is the center of the view plane.
#[derive(Debug, Clone, Copy)]
pub struct ViewportCoord {
    pub vx: f32,
    pub vy: f32,
}

impl ViewportCoord {
    /// Center of the pixel `coord` on the view plane of `camera`
    pub fn from_pixel_coord(camera: &Camera, dimensions: Dimensions, coord: PixelCoord) -> Self {
        let pixel_width = camera.width / dimensions.width as f32;
        let pixel_height = camera.height / dimensions.height as f32;
        Self {
            vx: -camera.width / 2. + pixel_width * (coord.x as f32 + 0.5),
            vy: -camera.height / 2. + pixel_height * (coord.y as f32 + 0.5),
        }
    }
}
