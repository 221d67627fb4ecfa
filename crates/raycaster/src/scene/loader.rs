//! Reads scene descriptions: a JSON array of objects tagged by a `"type"` key.
//!
//! ```json
//! [
//!   { "type": "camera", "width": 1.0, "height": 1.0 },
//!   { "type": "sphere", "position": [0, 0, 5], "radius": 1, "diffuse_color": [1, 0, 0] },
//!   { "type": "light", "position": [0, 0, 0], "color": [1, 1, 1], "radial-a2": 0.1 }
//! ]
//! ```
//!
//! Numeric fields default to zero, `ior` defaults to 1. Attenuation coefficients that are not
//! given disable their term. Unknown fields are ignored.

use std::path::Path;

use serde::Deserialize;

use crate::{
    camera::Camera,
    color::Rgb,
    error::LoadError,
    lighting::{Light, RadialAttenuation, Spot},
    material::Material,
    math::{point::Point, vec::Vec3},
    shape::{Plane, Sphere},
};

use super::{Scene, SceneObject};

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum ObjectDescriptor {
    Camera(CameraDescriptor),
    Sphere(SphereDescriptor),
    Plane(PlaneDescriptor),
    Light(LightDescriptor),
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CameraDescriptor {
    width: f32,
    height: f32,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SurfaceDescriptor {
    diffuse_color: [f32; 3],
    specular_color: [f32; 3],
    reflectivity: f32,
    refractivity: f32,
    ior: Option<f32>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SphereDescriptor {
    position: [f32; 3],
    radius: f32,
    #[serde(flatten)]
    surface: SurfaceDescriptor,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PlaneDescriptor {
    position: [f32; 3],
    normal: [f32; 3],
    #[serde(flatten)]
    surface: SurfaceDescriptor,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct LightDescriptor {
    position: [f32; 3],
    color: [f32; 3],
    direction: [f32; 3],
    /// Aperture of the spot cone in degrees, 0 for an omnidirectional light
    theta: f32,
    #[serde(rename = "radial-a0")]
    radial_a0: Option<f32>,
    #[serde(rename = "radial-a1")]
    radial_a1: Option<f32>,
    #[serde(rename = "radial-a2")]
    radial_a2: Option<f32>,
    #[serde(rename = "angular-a0")]
    angular_a0: Option<f32>,
}

impl From<SurfaceDescriptor> for Material {
    fn from(surface: SurfaceDescriptor) -> Self {
        Material {
            diffuse: Rgb::from(surface.diffuse_color),
            specular: Rgb::from(surface.specular_color),
            reflectivity: surface.reflectivity,
            refractivity: surface.refractivity,
            ior: surface.ior.unwrap_or(1.0),
        }
    }
}

impl From<ObjectDescriptor> for SceneObject {
    fn from(descriptor: ObjectDescriptor) -> Self {
        match descriptor {
            ObjectDescriptor::Camera(CameraDescriptor { width, height }) => {
                SceneObject::Camera(Camera { width, height })
            }
            ObjectDescriptor::Sphere(sphere) => SceneObject::Sphere(Sphere {
                center: Point::from(sphere.position),
                radius: sphere.radius,
                material: sphere.surface.into(),
            }),
            ObjectDescriptor::Plane(plane) => SceneObject::Plane(Plane {
                origin: Point::from(plane.position),
                normal: Vec3::from_array(plane.normal),
                material: plane.surface.into(),
            }),
            ObjectDescriptor::Light(light) => {
                let spot = (light.theta > 0.0).then(|| {
                    Spot::from_degrees(
                        Vec3::from_array(light.direction),
                        light.theta,
                        light.angular_a0.unwrap_or(0.0),
                    )
                });
                SceneObject::Light(Light {
                    position: Point::from(light.position),
                    color: Rgb::from(light.color),
                    spot,
                    radial: RadialAttenuation {
                        a0: light.radial_a0,
                        a1: light.radial_a1,
                        a2: light.radial_a2,
                    },
                })
            }
        }
    }
}

/// Parses and validates a scene description
pub fn parse_scene(json: &str) -> Result<Scene, LoadError> {
    let descriptors: Vec<ObjectDescriptor> = serde_json::from_str(json)?;

    let objects: Vec<SceneObject> = descriptors
        .into_iter()
        .map(SceneObject::from)
        .inspect(|object| log::debug!("found {}", object.kind()))
        .collect();

    Ok(Scene::new(objects)?)
}

/// Reads, parses and validates the scene description at `path`
pub fn load_scene(path: impl AsRef<Path>) -> Result<Scene, LoadError> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_owned(),
        source,
    })?;

    let scene = parse_scene(&json)?;
    log::info!(
        "loaded {} objects ({} lights) from {path:?}",
        scene.objects().len(),
        scene.lights().len()
    );
    Ok(scene)
}
