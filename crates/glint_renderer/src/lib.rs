//! Glint Renderer - CPU recursive ray tracing
//!
//! A Whitted-style ray tracer: one ray per pixel, nearest-hit search over a
//! flat list of primitives, ambient + Lambertian shading with hard shadows,
//! and mirror reflections traced to a fixed depth.

mod error;
mod primitive;
mod sphere;
mod plane;
mod triangle;
mod camera;
mod scene;
mod renderer;
mod material;
mod hittable;
pub mod bucket;
pub mod demo;

pub use error::{RenderError, RenderResult};
pub use material::{Checkerboard, Material, Solid, DEFAULT_AMBIENT, DEFAULT_SPECULAR};
pub use primitive::Primitive;
pub use sphere::Sphere;
pub use plane::Plane;
pub use triangle::Triangle;
pub use camera::{Camera, CameraSettings};
pub use scene::{Light, Scene, SceneBuilder};
pub use hittable::{nearest_hit, occluded, Hit};
pub use renderer::{
    color_to_rgb, raster_position, render, render_pixel, render_scene, shade, ColorPolicy,
    RasterBuffer, RenderConfig, RenderOutput, Rgb, TraceStats, DEFAULT_MAX_DEPTH,
    DEFAULT_MIN_DISTANCE,
};
pub use bucket::{generate_buckets, render_bucket, render_parallel, Bucket, BucketResult, DEFAULT_BUCKET_SIZE};

/// Re-export the math types from glint_math
pub use glint_math::{Color, Interval, MathError, Point3, Ray, Vec3};
