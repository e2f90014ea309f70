//! Sphere primitive for ray tracing.

use glint_math::{Point3, Ray, Vec3};

use crate::error::{RenderError, RenderResult};
use crate::Material;

/// A sphere primitive.
#[derive(Debug, Clone, PartialEq)]
pub struct Sphere {
    pub(crate) center: Point3,
    pub(crate) radius: f64,
    pub(crate) material: Material,
}

impl Sphere {
    /// Create a new sphere.
    ///
    /// The radius must be positive and finite and the center finite.
    pub fn new(center: Point3, radius: f64, material: impl Into<Material>) -> RenderResult<Self> {
        if !center.is_finite() {
            return Err(RenderError::degenerate("sphere", "center is not finite"));
        }
        if !(radius.is_finite() && radius > 0.0) {
            return Err(RenderError::degenerate(
                "sphere",
                format!("radius must be positive and finite, got {radius}"),
            ));
        }

        Ok(Self {
            center,
            radius,
            material: material.into(),
        })
    }

    pub fn center(&self) -> Point3 {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn material(&self) -> &Material {
        &self.material
    }

    /// Distance along `ray` to the near root of the ray-sphere quadratic.
    ///
    /// The near root is returned even when it is negative (ray starting
    /// inside or past the sphere); the caller filters non-forward hits.
    pub fn intersection_parameter(&self, ray: &Ray) -> Option<f64> {
        let co = self.center - ray.origin();
        let v = co.dot(ray.direction());
        let discriminant = v * v - co.length_squared() + self.radius * self.radius;

        if discriminant < 0.0 {
            return None;
        }

        Some(v - discriminant.sqrt())
    }

    /// Outward unit normal at a point on the surface.
    #[inline]
    pub fn normal_at(&self, point: Point3) -> Vec3 {
        (point - self.center) / self.radius
    }
}
