//! The closed set of renderable shapes.

use glint_math::{Point3, Ray, Vec3};

use crate::{Material, Plane, Sphere, Triangle};

/// A shape together with its material.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Sphere(Sphere),
    Plane(Plane),
    Triangle(Triangle),
}

impl Primitive {
    /// Signed distance along `ray` to this primitive, `None` on a miss.
    ///
    /// Negative distances are reported as-is; nearest-hit resolution decides
    /// which hits count.
    #[inline]
    pub fn intersection_parameter(&self, ray: &Ray) -> Option<f64> {
        match self {
            Primitive::Sphere(s) => s.intersection_parameter(ray),
            Primitive::Plane(p) => p.intersection_parameter(ray),
            Primitive::Triangle(t) => t.intersection_parameter(ray),
        }
    }

    /// Unit surface normal at `point`, which must lie on the surface.
    #[inline]
    pub fn normal_at(&self, point: Point3) -> Vec3 {
        match self {
            Primitive::Sphere(s) => s.normal_at(point),
            Primitive::Plane(p) => p.normal_at(point),
            Primitive::Triangle(t) => t.normal_at(point),
        }
    }

    #[inline]
    pub fn material(&self) -> &Material {
        match self {
            Primitive::Sphere(s) => s.material(),
            Primitive::Plane(p) => p.material(),
            Primitive::Triangle(t) => t.material(),
        }
    }

    /// Short name of the variant, for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Primitive::Sphere(_) => "sphere",
            Primitive::Plane(_) => "plane",
            Primitive::Triangle(_) => "triangle",
        }
    }
}

impl From<Sphere> for Primitive {
    fn from(s: Sphere) -> Self {
        Primitive::Sphere(s)
    }
}

impl From<Plane> for Primitive {
    fn from(p: Plane) -> Self {
        Primitive::Plane(p)
    }
}

impl From<Triangle> for Primitive {
    fn from(t: Triangle) -> Self {
        Primitive::Triangle(t)
    }
}
