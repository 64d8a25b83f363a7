use rayon::prelude::*;

use crate::color::ColorRGB;
use crate::matrix::Matrix4;
use crate::ray::Ray;
use crate::scene::Scene;
use crate::vector::Vector3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightingMode {
    ObservedArea,
    Radiance,
    Brdf,
    Combined,
}

const LIGHTING_MODES: [LightingMode; 4] = [
    LightingMode::ObservedArea,
    LightingMode::Radiance,
    LightingMode::Brdf,
    LightingMode::Combined,
];

const MIN_SAMPLES: u32 = 1;
const MAX_SAMPLES: u32 = 16;
const SHADOW_RAY_MIN: f32 = 1e-4;

/// Owns the MSAA/lighting-mode/shadow state and dispatches the per-pixel
/// render loop. The framebuffer itself is owned by the caller (see §6); this
/// type only produces the pixel colors.
pub struct Renderer {
    pub width: u32,
    pub height: u32,
    pub lighting_mode: LightingMode,
    pub shadows_enabled: bool,
    pub shadow_strength: f32,
    sample_count: u32,
    sample_offsets: Vec<(f32, f32)>,
    per_sample_weight: f32,
}

/// Regular grid of sample positions in the unit square for `n = k²` samples:
/// `((x+0.5)/k, (y+0.5)/k)` for `x, y` in `[0, k)`.
fn calculate_sample_positions(sample_count: u32) -> Vec<(f32, f32)> {
    let k = (sample_count as f64).sqrt().round() as u32;
    let mut offsets = Vec::with_capacity(sample_count as usize);
    for y in 0..k {
        for x in 0..k {
            offsets.push(((x as f32 + 0.5) / k as f32, (y as f32 + 0.5) / k as f32));
        }
    }
    offsets
}

impl Renderer {
    pub fn new(width: u32, height: u32) -> Renderer {
        let sample_count = MIN_SAMPLES;
        Renderer {
            width,
            height,
            lighting_mode: LightingMode::Combined,
            shadows_enabled: true,
            shadow_strength: 0.5,
            sample_count,
            sample_offsets: calculate_sample_positions(sample_count),
            per_sample_weight: 1.0 / sample_count as f32,
        }
    }

    pub fn sample_count(&self) -> u32 {
        self.sample_count
    }

    pub fn cycle_lighting_mode(&mut self) {
        let current = LIGHTING_MODES.iter().position(|&m| m == self.lighting_mode).unwrap();
        self.lighting_mode = LIGHTING_MODES[(current + 1) % LIGHTING_MODES.len()];
    }

    pub fn toggle_shadows(&mut self) {
        self.shadows_enabled = !self.shadows_enabled;
    }

    /// Sets the MSAA sample count directly. Only perfect squares in
    /// `[MIN_SAMPLES, MAX_SAMPLES]` (i.e. 1, 4, 16) produce a uniform grid;
    /// callers outside the CLI's fixed choices should prefer
    /// `increase_msaa`/`decrease_msaa`.
    pub fn set_sample_count(&mut self, sample_count: u32) {
        self.sample_count = sample_count;
        self.sample_offsets = calculate_sample_positions(sample_count);
        self.per_sample_weight = 1.0 / sample_count as f32;
    }

    pub fn increase_msaa(&mut self) {
        self.set_sample_count((self.sample_count * 4).min(MAX_SAMPLES));
    }

    pub fn decrease_msaa(&mut self) {
        self.set_sample_count((self.sample_count / 4).max(MIN_SAMPLES));
    }

    fn aspect(&self) -> f32 {
        self.width as f32 / self.height as f32
    }

    /// Resolves the camera basis and fov once, then dispatches
    /// `render_pixel` over every pixel index in parallel.
    pub fn render(&self, scene: &Scene) -> Vec<ColorRGB> {
        let mut camera = scene.camera;
        let camera_to_world = camera.calculate_camera_to_world();
        let camera_origin = camera.origin;
        let fov = camera.fov_value();
        let aspect = self.aspect();

        (0..self.width * self.height)
            .into_par_iter()
            .map(|pixel_index| self.render_pixel(scene, pixel_index, fov, aspect, camera_to_world, camera_origin))
            .collect()
    }

    fn render_pixel(
        &self,
        scene: &Scene,
        pixel_index: u32,
        fov: f32,
        aspect: f32,
        camera_to_world: Matrix4,
        camera_origin: Vector3,
    ) -> ColorRGB {
        let px = (pixel_index % self.width) as f32;
        let py = (pixel_index / self.width) as f32;

        let mut accumulator = ColorRGB::BLACK;

        for &(sx, sy) in &self.sample_offsets {
            let cx = (2.0 * (px + sx) / self.width as f32 - 1.0) * aspect * fov;
            let cy = (1.0 - 2.0 * (py + sy) / self.height as f32) * fov;
            let ray_direction = camera_to_world
                .transform_direction(Vector3::new(cx, cy, 1.0))
                .normalized();
            let ray = Ray::primary(camera_origin, ray_direction);

            let hit = scene.get_closest_hit(&ray);
            if !hit.did_hit {
                continue;
            }

            let material = scene.material(hit.material_index);
            let view_dir = -ray_direction;

            let mut sample_color = ColorRGB::BLACK;
            for light in &scene.lights {
                let light_dir = light.direction_to_light(hit.origin);
                let light_dir_normalized = light_dir.normalized();
                let observed_area = hit.normal.dot(light_dir_normalized);

                let mut contribution = match self.lighting_mode {
                    LightingMode::Combined => {
                        if observed_area > 0.0 {
                            light.radiance(hit.origin)
                                * material.shade(hit.normal, light_dir_normalized, view_dir)
                                * observed_area
                        } else {
                            ColorRGB::BLACK
                        }
                    }
                    LightingMode::ObservedArea => {
                        if observed_area > 0.0 {
                            ColorRGB::WHITE * observed_area
                        } else {
                            ColorRGB::BLACK
                        }
                    }
                    LightingMode::Radiance => light.radiance(hit.origin),
                    LightingMode::Brdf => material.shade(hit.normal, light_dir_normalized, view_dir),
                };

                if self.shadows_enabled {
                    let shadow_max = match light {
                        crate::lights::Light::Directional { .. } => f32::INFINITY,
                        crate::lights::Light::Point { .. } => light_dir.length(),
                    };
                    let shadow_ray = Ray::shadow(hit.origin, hit.normal, light_dir_normalized, shadow_max);
                    debug_assert!(shadow_ray.min >= SHADOW_RAY_MIN);
                    if scene.does_hit(&shadow_ray) {
                        contribution = contribution * self.shadow_strength;
                    }
                }

                sample_color += contribution;
            }

            accumulator += sample_color * self.per_sample_weight;
        }

        accumulator.max_to_one()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn msaa_never_leaves_the_allowed_sample_counts() {
        let mut r = Renderer::new(64, 64);
        assert_eq!(r.sample_count(), 1);
        r.increase_msaa();
        assert_eq!(r.sample_count(), 4);
        r.increase_msaa();
        assert_eq!(r.sample_count(), 16);
        r.increase_msaa();
        assert_eq!(r.sample_count(), 16);
        r.decrease_msaa();
        assert_eq!(r.sample_count(), 4);
        r.decrease_msaa();
        assert_eq!(r.sample_count(), 1);
        r.decrease_msaa();
        assert_eq!(r.sample_count(), 1);
    }

    #[test]
    fn sample_offsets_track_sample_count_and_weight() {
        let mut r = Renderer::new(64, 64);
        r.increase_msaa();
        assert_eq!(r.sample_offsets.len(), 4);
        assert!((r.per_sample_weight - 0.25).abs() < 1e-6);
    }

    #[test]
    fn cycle_lighting_mode_wraps_around() {
        let mut r = Renderer::new(64, 64);
        assert_eq!(r.lighting_mode, LightingMode::Combined);
        r.cycle_lighting_mode();
        assert_eq!(r.lighting_mode, LightingMode::ObservedArea);
        r.cycle_lighting_mode();
        r.cycle_lighting_mode();
        r.cycle_lighting_mode();
        assert_eq!(r.lighting_mode, LightingMode::Combined);
    }

    #[test]
    fn toggle_shadows_flips_the_flag() {
        let mut r = Renderer::new(64, 64);
        assert!(r.shadows_enabled);
        r.toggle_shadows();
        assert!(!r.shadows_enabled);
    }
}
