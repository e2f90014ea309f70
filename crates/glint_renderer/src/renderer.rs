//! Core ray tracing renderer.
//!
//! Implements Whitted-style shading with:
//! - Ambient term from the material
//! - Lambertian term per unshadowed point light
//! - Mirror reflection traced recursively up to a fixed depth

use std::time::Instant;

use glint_math::{reflect, Color, Interval, Ray};

use crate::bucket::{render_parallel, DEFAULT_BUCKET_SIZE};
use crate::error::{RenderError, RenderResult};
use crate::hittable::{nearest_hit, occluded};
use crate::Scene;

/// Default number of shading levels (the primary hit plus one reflection).
pub const DEFAULT_MAX_DEPTH: u32 = 2;

/// Default lower bound on hit distances.
///
/// Rays spawned on a surface would otherwise hit that surface again at a
/// round-off distance.
pub const DEFAULT_MIN_DISTANCE: f64 = 1e-6;

/// An integer RGB pixel value.
pub type Rgb = [i32; 3];

/// How an unbounded color channel becomes a pixel value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorPolicy {
    /// Clamp each channel to [0, 255], then truncate.
    #[default]
    Clamp,
    /// Truncate toward zero without clamping. Out-of-range values pass through.
    Truncate,
}

/// Render configuration.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Shading depth at which recursion stops and black is returned
    pub max_depth: u32,
    /// Hits at or below this distance are ignored
    pub min_distance: f64,
    /// Float-to-pixel conversion rule
    pub color_policy: ColorPolicy,
    /// Edge length of a parallel render bucket in pixels
    pub bucket_size: u32,
    /// Render buckets on the rayon thread pool
    pub parallel: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            min_distance: DEFAULT_MIN_DISTANCE,
            color_policy: ColorPolicy::default(),
            bucket_size: DEFAULT_BUCKET_SIZE,
            parallel: true,
        }
    }
}

impl RenderConfig {
    /// Check the configuration before any pixel is rendered.
    pub fn validate(&self) -> RenderResult<()> {
        if self.max_depth == 0 {
            return Err(RenderError::InvalidConfig("max_depth must be at least 1".into()));
        }
        if !(self.min_distance.is_finite() && self.min_distance >= 0.0) {
            return Err(RenderError::InvalidConfig(format!(
                "min_distance must be finite and non-negative, got {}",
                self.min_distance
            )));
        }
        if self.bucket_size == 0 {
            return Err(RenderError::InvalidConfig("bucket_size must be at least 1".into()));
        }
        Ok(())
    }

    /// Interval of ray parameters that count as a forward hit.
    #[inline]
    pub fn forward(&self) -> Interval {
        Interval::beyond(self.min_distance)
    }
}

/// Ray counts gathered while rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TraceStats {
    pub primary_rays: u64,
    pub shadow_rays: u64,
    pub reflection_rays: u64,
    /// Deepest `depth` argument `shade` was called with
    pub deepest_depth: u32,
}

impl TraceStats {
    /// Fold another set of counts into this one.
    pub fn merge(&mut self, other: &TraceStats) {
        self.primary_rays += other.primary_rays;
        self.shadow_rays += other.shadow_rays;
        self.reflection_rays += other.reflection_rays;
        self.deepest_depth = self.deepest_depth.max(other.deepest_depth);
    }

    pub fn total_rays(&self) -> u64 {
        self.primary_rays + self.shadow_rays + self.reflection_rays
    }
}

/// Compute the color seen along a ray.
///
/// `depth` is 0 for camera rays and grows by one per reflection. At
/// `config.max_depth` the ray contributes black without being traced.
/// The result is not clamped.
pub fn shade(
    scene: &Scene,
    ray: &Ray,
    depth: u32,
    config: &RenderConfig,
    stats: &mut TraceStats,
) -> Color {
    stats.deepest_depth = stats.deepest_depth.max(depth);

    if depth >= config.max_depth {
        return Color::ZERO;
    }

    let forward = config.forward();
    let Some(hit) = nearest_hit(scene.primitives(), ray, forward) else {
        return scene.background();
    };

    let point = hit.point(ray);
    let normal = hit.normal(ray);
    let material = hit.primitive.material();
    let base = material.color_at(point);

    let mut color = base * material.ambient();

    for light in scene.lights() {
        // A light exactly on the hit point has no direction and adds nothing
        let Ok(shadow_ray) = Ray::new(point, light.position - point) else {
            continue;
        };
        stats.shadow_rays += 1;

        if occluded(scene.primitives(), &shadow_ray, forward) {
            continue;
        }

        let intensity = normal.dot(shadow_ray.direction());
        if intensity > 0.0 {
            color += base * intensity;
        }
    }

    if let Ok(reflected) = Ray::new(point, reflect(ray.direction(), normal)) {
        stats.reflection_rays += 1;
        color += shade(scene, &reflected, depth + 1, config, stats) * material.specular();
    }

    color
}

/// Shade the camera ray through pixel (x, y).
pub fn render_pixel(
    scene: &Scene,
    x: u32,
    y: u32,
    config: &RenderConfig,
    stats: &mut TraceStats,
) -> Color {
    match scene.camera().build_ray(x, y) {
        Ok(ray) => {
            stats.primary_rays += 1;
            shade(scene, &ray, 0, config, stats)
        }
        // Only reachable with a degenerate camera basis, which build() rejects
        Err(err) => {
            log::warn!("No camera ray for pixel ({x}, {y}): {err}");
            scene.background()
        }
    }
}

/// Convert a shaded color to an integer pixel.
pub fn color_to_rgb(color: Color, policy: ColorPolicy) -> Rgb {
    const CHANNEL: Interval = Interval::new(0.0, 255.0);

    let convert = |c: f64| match policy {
        // `as` truncates toward zero; NaN becomes 0
        ColorPolicy::Clamp => CHANNEL.clamp(c) as i32,
        ColorPolicy::Truncate => c as i32,
    };

    [convert(color.x), convert(color.y), convert(color.z)]
}

/// Raster position written by camera pixel (x, y).
///
/// Both axes are mirrored: camera y grows upward, raster rows grow downward.
#[inline]
pub fn raster_position(x: u32, y: u32, width: u32, height: u32) -> (u32, u32) {
    (width - 1 - x, height - 1 - y)
}

/// A width x height grid of integer RGB pixels, row-major from the top-left.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Rgb>,
}

impl RasterBuffer {
    /// Create a new raster filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![[0; 3]; (width as usize) * (height as usize)],
        }
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Rgb {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, rgb: Rgb) {
        let i = self.index(x, y);
        self.pixels[i] = rgb;
    }

    /// Convert to packed 8-bit RGB bytes, saturating each channel.
    pub fn to_rgb8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 3);
        for rgb in &self.pixels {
            bytes.extend(rgb.iter().map(|&c| c.clamp(0, 255) as u8));
        }
        bytes
    }
}

/// A finished render.
#[derive(Debug, Clone)]
pub struct RenderOutput {
    pub image: RasterBuffer,
    pub stats: TraceStats,
}

/// Render the entire scene on the calling thread.
pub fn render(scene: &Scene, config: &RenderConfig) -> RenderResult<RenderOutput> {
    config.validate()?;

    let (width, height) = (scene.width(), scene.height());
    let mut image = RasterBuffer::new(width, height);
    let mut stats = TraceStats::default();

    for y in 0..height {
        for x in 0..width {
            let color = render_pixel(scene, x, y, config, &mut stats);
            let (rx, ry) = raster_position(x, y, width, height);
            image.set(rx, ry, color_to_rgb(color, config.color_policy));
        }
    }

    Ok(RenderOutput { image, stats })
}

/// Render with the path selected by `config.parallel`, logging timing and ray counts.
pub fn render_scene(scene: &Scene, config: &RenderConfig) -> RenderResult<RenderOutput> {
    config.validate()?;

    log::info!(
        "Rendering {}x{}: {} primitives, {} lights, max depth {}, {}",
        scene.width(),
        scene.height(),
        scene.primitives().len(),
        scene.lights().len(),
        config.max_depth,
        if config.parallel { "parallel" } else { "serial" }
    );

    let start = Instant::now();
    let output = if config.parallel {
        render_parallel(scene, config)?
    } else {
        render(scene, config)?
    };

    let stats = &output.stats;
    log::info!(
        "Rendered in {:?}: {} rays ({} primary, {} shadow, {} reflection)",
        start.elapsed(),
        stats.total_rays(),
        stats.primary_rays,
        stats.shadow_rays,
        stats.reflection_rays
    );

    Ok(output)
}
