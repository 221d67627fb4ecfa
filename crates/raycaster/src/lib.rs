//! A recursive Whitted-style ray tracer.
//!
//! A [scene::Scene] holds a camera, spheres, planes and point lights. The [renderer::Renderer]
//! casts one primary ray per pixel and hands it to an [integrators::Integrator], which shades
//! hits with diffuse and specular terms, hard shadows, mirror reflection and, optionally,
//! refraction.

pub mod camera;
pub mod color;
pub mod error;
pub mod integrators;
pub mod lighting;
pub mod material;
pub mod math;
pub mod ray;
pub mod renderer;
pub mod scene;
pub mod shape;
pub mod utils;
pub mod visibility;

pub use error::{LoadError, SceneError};
