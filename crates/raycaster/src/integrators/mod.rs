use crate::{
    ray::Ray,
    renderer::RayResult,
    scene::{ObjectId, Scene},
};

mod whitted;

pub trait Integrator: Send + Sync {
    /// Color seen along `ray`, `depth` bounces away from the camera.
    ///
    /// `origin` is the shape `ray` leaves from, if any; it is never hit again by this ray.
    fn ray_cast(
        &self,
        scene: &Scene,
        ray: Ray,
        origin: Option<ObjectId>,
        depth: u32,
    ) -> RayResult;

    /// Color of a ray escaping the scene
    fn sky_ray(&self, _ray: Ray) -> RayResult {
        RayResult::default()
    }
}

pub use whitted::{WhittedIntegrator, DEFAULT_MAX_DEPTH};
