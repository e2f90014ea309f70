//! Triangle primitive for ray tracing.
//!
//! Uses the Möller-Trumbore algorithm for ray-triangle intersection.

use glint_math::{normalize, Point3, Ray, Vec3};

use crate::error::{RenderError, RenderResult};
use crate::Material;

/// A flat-shaded triangle.
#[derive(Debug, Clone, PartialEq)]
pub struct Triangle {
    /// Vertices
    a: Point3,
    b: Point3,
    c: Point3,
    /// Edges from `a`, cached for intersection
    u: Vec3,
    v: Vec3,
    /// Pre-computed face normal (unit length)
    normal: Vec3,
    material: Material,
}

impl Triangle {
    /// Create a new triangle from three vertices.
    ///
    /// Fails if the vertices are not finite or are collinear.
    pub fn new(a: Point3, b: Point3, c: Point3, material: impl Into<Material>) -> RenderResult<Self> {
        if !(a.is_finite() && b.is_finite() && c.is_finite()) {
            return Err(RenderError::degenerate("triangle", "vertex is not finite"));
        }

        let u = b - a;
        let v = c - a;
        let normal = normalize(u.cross(v))
            .map_err(|_| RenderError::degenerate("triangle", "vertices are collinear"))?;

        Ok(Self {
            a,
            b,
            c,
            u,
            v,
            normal,
            material: material.into(),
        })
    }

    pub fn vertices(&self) -> [Point3; 3] {
        [self.a, self.b, self.c]
    }

    pub fn material(&self) -> &Material {
        &self.material
    }

    /// Signed distance along `ray` to the triangle.
    ///
    /// Points on an edge or vertex count as inside.
    pub fn intersection_parameter(&self, ray: &Ray) -> Option<f64> {
        let d = ray.direction();
        let w = ray.origin() - self.a;

        let dv = d.cross(self.v);
        let dvu = dv.dot(self.u);

        // Ray is parallel to triangle
        if dvu == 0.0 {
            return None;
        }

        let wu = w.cross(self.u);
        let r = dv.dot(w) / dvu;
        let s = wu.dot(d) / dvu;

        if (0.0..=1.0).contains(&r) && (0.0..=1.0).contains(&s) && r + s <= 1.0 {
            Some(wu.dot(self.v) / dvu)
        } else {
            None
        }
    }

    /// The face normal, independent of `point`.
    #[inline]
    pub fn normal_at(&self, _point: Point3) -> Vec3 {
        self.normal
    }
}
