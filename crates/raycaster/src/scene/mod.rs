pub mod loader;

pub use loader::{load_scene, parse_scene};

use crate::{
    camera::Camera,
    error::SceneError,
    lighting::Light,
    material::Material,
    math::{float::FloatAsExt, vec::Vec3AsNonZero},
    ray::Ray,
    shape::{
        local_info, FullIntersectionResult, IntersectionResult, Plane, RayIntersection, Shape,
        Sphere,
    },
};

/// Position of an object in the scene, which is its identity during a render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(pub usize);

#[derive(Debug, Clone, PartialEq)]
pub enum SceneObject {
    Camera(Camera),
    Sphere(Sphere),
    Plane(Plane),
    Light(Light),
}

impl SceneObject {
    pub fn kind(&self) -> &'static str {
        match self {
            SceneObject::Camera(_) => "camera",
            SceneObject::Sphere(_) => "sphere",
            SceneObject::Plane(_) => "plane",
            SceneObject::Light(_) => "light",
        }
    }

    pub fn as_shape(&self) -> Option<&dyn Shape> {
        match self {
            SceneObject::Sphere(sphere) => Some(sphere),
            SceneObject::Plane(plane) => Some(plane),
            SceneObject::Camera(_) | SceneObject::Light(_) => None,
        }
    }
}

/// The validated, read-only content of a render.
///
/// Objects keep the order they were given in, so the first of two shapes hit at exactly the
/// same distance is the one that wins.
#[derive(Debug, Clone)]
pub struct Scene {
    objects: Vec<SceneObject>,
    camera: Camera,
    lights: Vec<Light>,
}

impl Scene {
    /// Validates `objects`, normalizes directions and collects the lights.
    pub fn new(mut objects: Vec<SceneObject>) -> Result<Self, SceneError> {
        if objects.is_empty() {
            return Err(SceneError::Empty);
        }

        let mut camera: Option<(usize, Camera)> = None;
        for (index, object) in objects.iter_mut().enumerate() {
            match object {
                SceneObject::Camera(cam) => {
                    if let Some((first, _)) = camera {
                        return Err(SceneError::MultipleCameras {
                            first,
                            second: index,
                        });
                    }
                    if cam.width.into_positive_finite().is_none()
                        || cam.height.into_positive_finite().is_none()
                    {
                        return Err(SceneError::InvalidCamera {
                            width: cam.width,
                            height: cam.height,
                        });
                    }
                    camera = Some((index, *cam));
                }
                SceneObject::Sphere(sphere) => {
                    if sphere.radius.into_positive_finite().is_none() {
                        return Err(SceneError::NonPositiveRadius {
                            index,
                            radius: sphere.radius,
                        });
                    }
                    validate_material(index, &sphere.material)?;
                }
                SceneObject::Plane(plane) => {
                    plane.normal = plane
                        .normal
                        .into_unit()
                        .ok_or(SceneError::DegenerateNormal { index })?;
                    validate_material(index, &plane.material)?;
                }
                SceneObject::Light(light) => {
                    if let Some(spot) = light.spot.as_mut() {
                        spot.direction = spot
                            .direction
                            .into_unit()
                            .ok_or(SceneError::DegenerateSpotDirection { index })?;
                    }
                }
            }
        }
        let (_, camera) = camera.ok_or(SceneError::MissingCamera)?;

        let lights: Vec<Light> = objects
            .iter()
            .filter_map(|object| match object {
                SceneObject::Light(light) => Some(*light),
                _ => None,
            })
            .collect();

        log::debug!(
            "scene built: {} objects, {} lights",
            objects.len(),
            lights.len()
        );

        Ok(Self {
            objects,
            camera,
            lights,
        })
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    /// All the renderable objects, in scene order
    pub fn shapes(&self) -> impl Iterator<Item = (ObjectId, &dyn Shape)> {
        self.objects
            .iter()
            .enumerate()
            .filter_map(|(index, object)| Some((ObjectId(index), object.as_shape()?)))
    }

    /// Nearest shape crossed by `ray`, ignoring `skip`.
    pub fn first_hit(&self, ray: &Ray, skip: Option<ObjectId>) -> FullIntersectionResult {
        let mut ray = *ray;
        let mut best: Option<(f32, ObjectId, &dyn Shape)> = None;

        for (id, shape) in self.shapes() {
            if Some(id) == skip {
                continue;
            }

            // Shrinking the ray keeps the earliest of equally distant shapes
            if let Some(t) = shape.intersect(&ray) {
                ray.bounds.1 = t;
                best = Some((t, id, shape));
            }
        }

        let Some((t, object, shape)) = best else {
            return IntersectionResult::NoIntersection;
        };
        let pos = ray.at_unchecked(t);
        IntersectionResult::Intersection(RayIntersection {
            t,
            local_info: local_info::Full {
                pos,
                normal: shape.normal_at(pos),
                material: *shape.material(),
                object,
            },
        })
    }

    /// Whether any shape but `skip` is crossed by `ray` within its bounds
    pub fn any_hit(&self, ray: &Ray, skip: Option<ObjectId>) -> bool {
        self.shapes()
            .filter(|(id, _)| Some(*id) != skip)
            .any(|(_, shape)| shape.intersect(ray).is_some())
    }
}

fn validate_material(index: usize, material: &Material) -> Result<(), SceneError> {
    for (name, value) in [
        ("reflectivity", material.reflectivity),
        ("refractivity", material.refractivity),
    ] {
        if !(0.0..=1.0).contains(&value) {
            return Err(SceneError::CoefficientOutOfRange { index, name, value });
        }
    }
    if material.ior.into_positive_finite().is_none() {
        return Err(SceneError::InvalidIor {
            index,
            ior: material.ior,
        });
    }
    Ok(())
}
