use rayon::iter::{IntoParallelIterator, ParallelIterator};

use crate::{
    camera::{Dimensions, PixelCoord, ViewportCoord},
    color::{linear, Rgb},
    counter,
    integrators::Integrator,
    ray::Ray,
    scene::Scene,
};

/// What an [Integrator] found along a ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayResult {
    /// Radiance in [0, 1]
    pub color: Rgb,
    /// Distance to the first hit, infinite when the ray escapes
    pub z: f32,
    /// Number of surfaces the deepest bounce went through
    pub ray_depth: u32,
}

impl Default for RayResult {
    fn default() -> Self {
        Self {
            color: linear::BLACK,
            z: f32::INFINITY,
            ray_depth: 0,
        }
    }
}

/// A rendered image, stored row by row from the top of the view plane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub dimensions: Dimensions,
    pub pixels: Vec<[u8; 3]>,
}

impl Frame {
    pub fn rows(&self) -> impl Iterator<Item = &[[u8; 3]]> {
        self.pixels.chunks(self.dimensions.width.max(1) as usize)
    }

    /// Pixel at column `x` of the output row `row`, 0 being the top row
    pub fn pixel(&self, x: u32, row: u32) -> Option<[u8; 3]> {
        if x >= self.dimensions.width || row >= self.dimensions.height {
            return None;
        }
        let index = row as usize * self.dimensions.width as usize + x as usize;
        self.pixels.get(index).copied()
    }

    /// Interleaved RGB bytes, row-major
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }
}

/// Drives an [Integrator] over every pixel of the view plane.
pub struct Renderer<'a> {
    pub scene: &'a Scene,
    pub integrator: &'a dyn Integrator,
    pub dimensions: Dimensions,
}

impl<'a> Renderer<'a> {
    pub fn new(scene: &'a Scene, integrator: &'a dyn Integrator, dimensions: Dimensions) -> Self {
        Self {
            scene,
            integrator,
            dimensions,
        }
    }

    /// Primary ray through the center of pixel `x` of the output row `row`.
    ///
    /// Output rows go top to bottom while the view plane `y` grows upwards.
    /// Returns None outside of the frame.
    pub fn primary_ray(&self, x: u32, row: u32) -> Option<Ray> {
        if x >= self.dimensions.width {
            return None;
        }
        let y = self.dimensions.height.checked_sub(row)?.checked_sub(1)?;

        let viewport_coord = ViewportCoord::from_pixel_coord(
            self.scene.camera(),
            self.dimensions,
            PixelCoord { x, y },
        );
        Some(self.scene.camera().ray(viewport_coord))
    }

    /// Quantized color of a pixel, black outside of the frame
    pub fn process_pixel(&self, x: u32, row: u32) -> [u8; 3] {
        let Some(ray) = self.primary_ray(x, row) else {
            crate::warn_once!("pixel ({x}, {row}) is outside of the {} frame", self.dimensions);
            return [0; 3];
        };
        counter!("Primary rays");
        let result = self.integrator.ray_cast(self.scene, ray, None, 0);
        result.color.to_byte_array()
    }

    pub fn render_row(&self, row: u32) -> Vec<[u8; 3]> {
        log::trace!("working on row {row}");
        (0..self.dimensions.width)
            .map(|x| self.process_pixel(x, row))
            .collect()
    }

    /// Render the rows in order on the current thread, calling `on_row_rendered` after each one
    pub fn run_monothreaded<F: FnMut(u32)>(&self, mut on_row_rendered: F) -> Frame {
        let mut pixels = Vec::with_capacity(self.dimensions.pixel_count());
        for row in 0..self.dimensions.height {
            pixels.extend(self.render_row(row));
            on_row_rendered(row);
        }

        Frame {
            dimensions: self.dimensions,
            pixels,
        }
    }

    /// Render the rows on the rayon thread pool.
    ///
    /// `on_row_rendered` may be called from any worker thread, in any order.
    pub fn run_multithreaded<F: Fn(u32) + Sync>(&self, on_row_rendered: F) -> Frame {
        let rows: Vec<Vec<[u8; 3]>> = (0..self.dimensions.height)
            .into_par_iter()
            .map(|row| {
                let pixels = self.render_row(row);
                on_row_rendered(row);
                pixels
            })
            .collect();

        Frame {
            dimensions: self.dimensions,
            pixels: rows.concat(),
        }
    }
}
