use crate::{
    color::{linear, Rgb},
    counter,
    lighting::{illuminate, ShadingPoint, DEFAULT_SPECULAR_EXPONENT},
    math::vec::RefrReflVecExt,
    ray::Ray,
    renderer::RayResult,
    scene::{ObjectId, Scene},
    shape::{local_info, IntersectionResult},
    visibility::in_shadow,
};

use super::Integrator;

/// Number of bounces after which reflected and refracted rays are no longer cast
pub const DEFAULT_MAX_DEPTH: u32 = 7;

/// Rays that may hit their own surface again start this far from it instead of skipping it
const SELF_INTERSECTION_EPSILON: f32 = 1e-4;

/// Local illumination with hard shadows, plus mirror reflection and, optionally, refraction.
#[derive(Debug, Clone, Copy)]
pub struct WhittedIntegrator {
    pub max_depth: u32,
    pub specular_exponent: f32,
    /// Whether refracted rays are cast for surfaces with a positive refractivity
    pub refraction: bool,
}

impl Default for WhittedIntegrator {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            specular_exponent: DEFAULT_SPECULAR_EXPONENT,
            refraction: false,
        }
    }
}

impl Integrator for WhittedIntegrator {
    fn ray_cast(
        &self,
        scene: &Scene,
        ray: Ray,
        origin: Option<ObjectId>,
        depth: u32,
    ) -> RayResult {
        let IntersectionResult::Intersection(intersection) = scene.first_hit(&ray, origin) else {
            return self.sky_ray(ray);
        };

        let local_info::Full {
            pos,
            normal,
            material,
            object,
        } = intersection.local_info;
        let mut ray_depth = depth + 1;

        let shading_point = ShadingPoint {
            pos,
            normal,
            view: ray.direction,
        };
        let mut color = linear::BLACK;
        for light in scene.lights() {
            if in_shadow(scene, pos, object, light) {
                continue;
            }

            let contribution = illuminate(light, &material, &shading_point, self.specular_exponent);
            color = (color + contribution).clamp();
        }

        let reflection = 'reflection: {
            if depth >= self.max_depth || material.reflectivity <= 0.0 {
                break 'reflection linear::BLACK;
            }
            counter!("Reflected rays");

            let reflected = ray.direction.reflect(normal);
            // From inside a shape the reflected ray has to be able to hit it again
            let (reflected_ray, skip) = if ray.direction.dot(normal) > 0.0 {
                let range = SELF_INTERSECTION_EPSILON..f32::INFINITY;
                (Ray::new_with_range(pos, reflected, range), None)
            } else {
                (Ray::new(pos, reflected), Some(object))
            };
            let reflected_ray_result = self.ray_cast(scene, reflected_ray, skip, depth + 1);
            ray_depth = ray_depth.max(reflected_ray_result.ray_depth);

            material.reflectivity * reflected_ray_result.color
        };

        let transmission = 'transmission: {
            if !self.refraction || depth >= self.max_depth || material.refractivity <= 0.0 {
                break 'transmission linear::BLACK;
            }
            let Some(refracted) = ray.direction.refract(normal, material.ior) else {
                break 'transmission linear::BLACK;
            };
            counter!("Refracted rays");

            // The refracted ray may need to reach the far side of the same shape
            let refracted_ray =
                Ray::new_with_range(pos, refracted, SELF_INTERSECTION_EPSILON..f32::INFINITY);
            let refracted_ray_result = self.ray_cast(scene, refracted_ray, None, depth + 1);
            ray_depth = ray_depth.max(refracted_ray_result.ray_depth);

            material.refractivity * refracted_ray_result.color
        };

        let color: Rgb = color + reflection + transmission;
        if !color.is_finite() {
            crate::warn_once!("non finite color at depth {depth}, clamping it");
        }

        RayResult {
            color: color.clamp(),
            z: intersection.t,
            ray_depth,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        camera::Camera,
        lighting::Light,
        material::Material,
        math::{point::Point, vec::Vec3},
        scene::SceneObject,
        shape::{Plane, Sphere},
    };

    fn scene(objects: Vec<SceneObject>) -> Scene {
        let mut all = vec![SceneObject::Camera(Camera {
            width: 1.0,
            height: 1.0,
        })];
        all.extend(objects);
        Scene::new(all).unwrap()
    }

    fn white_light(position: Point) -> SceneObject {
        SceneObject::Light(Light::point(position, linear::WHITE))
    }

    #[test]
    fn miss_is_black() {
        let scene = scene(vec![
            SceneObject::Sphere(Sphere {
                center: Point::new(0.0, 0.0, 5.0),
                radius: 1.0,
                material: Material::diffuse(linear::WHITE),
            }),
            white_light(Point::ORIGIN),
        ]);
        let result = WhittedIntegrator::default().ray_cast(
            &scene,
            Ray::new(Point::ORIGIN, Vec3::NEG_Z),
            None,
            0,
        );
        assert_eq!(result.color, linear::BLACK);
        assert_eq!(result.ray_depth, 0);
        assert_eq!(result.z, f32::INFINITY);
    }

    #[test]
    fn lit_sphere() {
        let scene = scene(vec![
            SceneObject::Sphere(Sphere {
                center: Point::new(0.0, 0.0, 5.0),
                radius: 1.0,
                material: Material::diffuse(Rgb([1.0, 0.5, 0.0])),
            }),
            white_light(Point::ORIGIN),
        ]);
        let result = WhittedIntegrator::default().ray_cast(
            &scene,
            Ray::new(Point::ORIGIN, Vec3::Z),
            None,
            0,
        );
        assert_eq!(result.color, Rgb([1.0, 0.5, 0.0]));
        assert!((result.z - 4.0).abs() < 1e-5);
        assert_eq!(result.ray_depth, 1);
    }

    #[test]
    fn shadowed_point_only_gets_reflections() {
        // The floor point under the sphere is hidden from the light
        let scene = scene(vec![
            SceneObject::Plane(Plane {
                origin: Point::new(0.0, -1.0, 0.0),
                normal: Vec3::Y,
                material: Material::diffuse(linear::WHITE),
            }),
            SceneObject::Sphere(Sphere {
                center: Point::new(0.0, 1.0, 5.0),
                radius: 1.0,
                material: Material::diffuse(linear::WHITE),
            }),
            white_light(Point::new(0.0, 10.0, 5.0)),
        ]);
        let integrator = WhittedIntegrator::default();

        let under = Ray::new(Point::ORIGIN, Point::new(0.0, -1.0, 5.0) - Point::ORIGIN);
        assert_eq!(integrator.ray_cast(&scene, under, None, 0).color, linear::BLACK);

        let aside = Ray::new(Point::ORIGIN, Point::new(3.0, -1.0, 5.0) - Point::ORIGIN);
        assert_ne!(integrator.ray_cast(&scene, aside, None, 0).color, linear::BLACK);
    }

    #[test]
    fn accumulates_lights_and_clamps() {
        let scene = scene(vec![
            SceneObject::Sphere(Sphere {
                center: Point::new(0.0, 0.0, 5.0),
                radius: 1.0,
                material: Material::diffuse(Rgb([0.75, 0.25, 0.0])),
            }),
            white_light(Point::ORIGIN),
            white_light(Point::ORIGIN),
        ]);
        let result = WhittedIntegrator::default().ray_cast(
            &scene,
            Ray::new(Point::ORIGIN, Vec3::Z),
            None,
            0,
        );
        assert_eq!(result.color, Rgb([1.0, 0.5, 0.0]));
    }

    fn facing_mirrors() -> Scene {
        // Two mirrors facing each other, the camera ray bounces between them forever
        let mirror = Material::diffuse(Rgb([0.1, 0.1, 0.1])).with_reflectivity(0.5);
        scene(vec![
            SceneObject::Plane(Plane {
                origin: Point::new(0.0, 0.0, 5.0),
                normal: Vec3::NEG_Z,
                material: mirror,
            }),
            SceneObject::Plane(Plane {
                origin: Point::new(0.0, 0.0, -5.0),
                normal: Vec3::Z,
                material: mirror,
            }),
            white_light(Point::new(0.0, 0.0, 1.0)),
        ])
    }

    #[test]
    fn recursion_depth_advances() {
        let scene = facing_mirrors();
        for max_depth in [0, 1, 3, 7] {
            let integrator = WhittedIntegrator {
                max_depth,
                ..Default::default()
            };
            let result = integrator.ray_cast(&scene, Ray::new(Point::ORIGIN, Vec3::Z), None, 0);
            assert_eq!(result.ray_depth, max_depth + 1);
        }
    }

    #[test]
    fn reflection_adds_light() {
        let scene = facing_mirrors();
        let flat = WhittedIntegrator {
            max_depth: 0,
            ..Default::default()
        };
        let deep = WhittedIntegrator::default();
        let ray = Ray::new(Point::ORIGIN, Vec3::Z);
        let flat = flat.ray_cast(&scene, ray, None, 0).color;
        let deep = deep.ray_cast(&scene, ray, None, 0).color;
        assert!(deep.0[0] > flat.0[0]);
    }

    #[test]
    fn non_reflective_surfaces_ignore_depth() {
        let scene = scene(vec![
            SceneObject::Plane(Plane {
                origin: Point::new(0.0, -1.0, 0.0),
                normal: Vec3::Y,
                material: Material::diffuse(Rgb([0.2, 0.6, 0.2]))
                    .with_specular(linear::WHITE),
            }),
            SceneObject::Sphere(Sphere {
                center: Point::new(0.5, 0.0, 4.0),
                radius: 1.0,
                material: Material::diffuse(linear::BLUE).with_specular(linear::WHITE),
            }),
            white_light(Point::new(-2.0, 4.0, 0.0)),
        ]);

        for direction in [
            Vec3::Z,
            Vec3::new(0.3, -0.2, 1.0),
            Vec3::new(-0.4, -0.3, 1.0),
        ] {
            let ray = Ray::new(Point::ORIGIN, direction);
            let shallow = WhittedIntegrator {
                max_depth: 0,
                ..Default::default()
            }
            .ray_cast(&scene, ray, None, 0);
            let deep = WhittedIntegrator {
                max_depth: 12,
                ..Default::default()
            }
            .ray_cast(&scene, ray, None, 0);
            assert_eq!(shallow.color, deep.color);
            assert_eq!(shallow.ray_depth, 1);
            assert_eq!(deep.ray_depth, 1);
        }
    }

    #[test]
    fn reflection_stays_inside_a_closed_mirror() {
        // Seen from its center, a mirror sphere bounces the ray back and forth
        let scene = scene(vec![SceneObject::Sphere(Sphere {
            center: Point::ORIGIN,
            radius: 2.0,
            material: Material::diffuse(Rgb([0.1, 0.1, 0.1])).with_reflectivity(0.5),
        })]);
        let integrator = WhittedIntegrator {
            max_depth: 3,
            ..Default::default()
        };

        let result = integrator.ray_cast(&scene, Ray::new(Point::ORIGIN, Vec3::Z), None, 0);
        assert_eq!(result.ray_depth, 4);
        assert!((result.z - 2.0).abs() < 1e-5);
    }

    #[test]
    fn refraction_is_opt_in() {
        // A glass sphere in front of a lit red wall
        let scene = scene(vec![
            SceneObject::Sphere(Sphere {
                center: Point::new(0.0, 0.0, 4.0),
                radius: 1.0,
                material: Material::default().with_refraction(1.0, 1.5),
            }),
            SceneObject::Plane(Plane {
                origin: Point::new(0.0, 0.0, 10.0),
                normal: Vec3::NEG_Z,
                material: Material::diffuse(linear::RED),
            }),
            white_light(Point::new(0.0, 5.0, 8.0)),
        ]);
        let ray = Ray::new(Point::ORIGIN, Vec3::Z);

        let opaque = WhittedIntegrator::default().ray_cast(&scene, ray, None, 0);
        assert_eq!(opaque.color, linear::BLACK);
        assert_eq!(opaque.ray_depth, 1);

        let glass = WhittedIntegrator {
            refraction: true,
            ..Default::default()
        }
        .ray_cast(&scene, ray, None, 0);
        // entering the sphere, leaving it, then hitting the wall
        assert_eq!(glass.ray_depth, 3);
        assert!(glass.color.0[0] > 0.0);
        assert_eq!(glass.color.0[1], 0.0);
    }
}
