//! Glint math - vector algebra, rays and intervals.
//!
//! Everything is `f64`. The vector type is glam's `DVec3`, named by role
//! (`Vec3`, `Point3`, `Color`).

pub use glam::{dvec3, DVec3};

mod interval;
mod ray;
pub mod vector;

pub use interval::Interval;
pub use ray::Ray;
pub use vector::{normalize, norm, reflect, Color, MathError, MathResult, Point3, Vec3};
