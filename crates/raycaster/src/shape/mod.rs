//! Contains the objects that are meant to be renderered: spheres and planes.
//!
//! Each shape exposes its intersection as a free function working on raw ray parameters
//! ([intersect_sphere], [intersect_plane]) and through the [Shape] trait, which also honours
//! the bounds of a [Ray].

pub mod plane;
pub mod sphere;

pub use plane::{intersect_plane, Plane};
pub use sphere::{intersect_sphere, Sphere};

use crate::{material::Material, math::point::Point, math::vec::Vec3, ray::Ray};

/// An abstracted shape to be rendered by raytracing.
pub trait Shape: Sync + Send {
    /// Smallest `t` inside the bounds of `ray` at which the ray crosses the shape
    fn intersect(&self, ray: &Ray) -> Option<f32>;

    /// Outward unit normal at `pos`, which is assumed to lie on the surface
    fn normal_at(&self, pos: Point) -> Vec3;

    fn material(&self) -> &Material;
}

pub mod local_info {
    use crate::{material::Material, math::point::Point, scene::ObjectId};
    use glam::Vec3;

    /// Contains all the local information the shader needs about a hit
    #[derive(Debug, Clone, Copy)]
    pub struct Full {
        pub pos: Point,
        pub normal: Vec3,
        pub material: Material,
        pub object: ObjectId,
    }
}

/// Holds local informations and the time of a colision between a ray and a shape.
#[derive(Debug)]
pub struct RayIntersection<LocalInfo> {
    pub t: f32,
    pub local_info: LocalInfo,
}

/// A `Result`-like type that takes care of intersections data.
#[derive(Debug)]
pub enum IntersectionResult<LocalInfo> {
    Intersection(RayIntersection<LocalInfo>),
    NoIntersection,
}

impl<T> IntersectionResult<T> {
    pub fn is_intersection(&self) -> bool {
        matches!(self, Self::Intersection(_))
    }

    pub fn into_option(self) -> Option<RayIntersection<T>> {
        match self {
            Self::Intersection(isect) => Some(isect),
            Self::NoIntersection => None,
        }
    }
}

pub type FullIntersectionResult = IntersectionResult<local_info::Full>;
