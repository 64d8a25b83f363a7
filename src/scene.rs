use crate::camera::Camera;
use crate::input::InputState;
use crate::lights::Light;
use crate::materials::Material;
use crate::ray::{HitRecord, Ray};
use crate::shapes::{Plane, Sphere, TriangleMesh};

/// Owner of a scene's primitives, materials, lights, and camera.
///
/// Materials are owned exclusively here; primitives hold only an 8-bit
/// index into `materials`, never a reference, so they stay small and
/// `Send + Sync` regardless of material size. There is no separate
/// Initialize/Deinitialize pair: building a `Scene` *is* initialization, and
/// dropping it tears everything down in one pass, which is what those hooks
/// would do in a language without RAII.
pub struct Scene {
    pub camera: Camera,
    materials: Vec<Box<dyn Material>>,
    pub spheres: Vec<Sphere>,
    pub planes: Vec<Plane>,
    pub meshes: Vec<TriangleMesh>,
    pub lights: Vec<Light>,
    animate: Option<Box<dyn FnMut(&mut Scene, f32) + Send + Sync>>,
}

impl Scene {
    pub fn new(camera: Camera) -> Scene {
        Scene {
            camera,
            materials: Vec::new(),
            spheres: Vec::new(),
            planes: Vec::new(),
            meshes: Vec::new(),
            lights: Vec::new(),
            animate: None,
        }
    }

    pub fn add_material(&mut self, material: Box<dyn Material>) -> u8 {
        let index = self.materials.len();
        assert!(index < u8::MAX as usize, "material index must fit in 8 bits");
        self.materials.push(material);
        index as u8
    }

    pub fn material(&self, index: u8) -> &dyn Material {
        self.materials[index as usize].as_ref()
    }

    pub fn add_sphere(&mut self, sphere: Sphere) -> usize {
        self.spheres.push(sphere);
        self.spheres.len() - 1
    }

    pub fn add_plane(&mut self, plane: Plane) -> usize {
        self.planes.push(plane);
        self.planes.len() - 1
    }

    pub fn add_mesh(&mut self, mesh: TriangleMesh) -> usize {
        self.meshes.push(mesh);
        self.meshes.len() - 1
    }

    pub fn add_point_light(&mut self, origin: crate::vector::Vector3, intensity: f32, color: crate::color::ColorRGB) -> usize {
        self.lights.push(Light::Point { origin, intensity, color });
        self.lights.len() - 1
    }

    pub fn add_directional_light(
        &mut self,
        direction: crate::vector::Vector3,
        intensity: f32,
        color: crate::color::ColorRGB,
    ) -> usize {
        self.lights.push(Light::Directional { direction, intensity, color });
        self.lights.len() - 1
    }

    /// Installs a per-frame mesh animation hook, called after the camera
    /// update on every `Scene::update`. Scenes with static geometry leave
    /// this unset.
    pub fn set_animation<F>(&mut self, f: F)
    where
        F: FnMut(&mut Scene, f32) + Send + Sync + 'static,
    {
        self.animate = Some(Box::new(f));
    }

    /// Iterates spheres, planes, and meshes in that order, keeping the
    /// record with the smallest positive `t`.
    pub fn get_closest_hit(&self, ray: &Ray) -> HitRecord {
        let mut best = HitRecord::NONE;

        for sphere in &self.spheres {
            if let Some(hit) = sphere.closest_hit(ray) {
                if hit.t < best.t {
                    best = hit;
                }
            }
        }
        for plane in &self.planes {
            if let Some(hit) = plane.closest_hit(ray) {
                if hit.t < best.t {
                    best = hit;
                }
            }
        }
        for mesh in &self.meshes {
            if let Some(hit) = mesh.closest_hit(ray) {
                if hit.t < best.t {
                    best = hit;
                }
            }
        }

        best
    }

    /// Any-hit short-circuit across the same collections, in the same order.
    pub fn does_hit(&self, ray: &Ray) -> bool {
        self.spheres.iter().any(|s| s.any_hit(ray))
            || self.planes.iter().any(|p| p.any_hit(ray))
            || self.meshes.iter().any(|m| m.any_hit(ray))
    }

    /// Per-frame hook: updates the camera, then runs the scene's animation
    /// hook (if any).
    pub fn update(&mut self, dt: f32, input: &dyn InputState) {
        self.camera.update(dt, input);
        if let Some(mut animate) = self.animate.take() {
            animate(self, dt);
            self.animate = Some(animate);
        }
    }
}
