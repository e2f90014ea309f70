//! Infinite plane primitive.

use glint_math::{normalize, Point3, Ray, Vec3};

use crate::error::{RenderError, RenderResult};
use crate::Material;

/// An infinite plane through `point` with unit `normal`.
#[derive(Debug, Clone, PartialEq)]
pub struct Plane {
    pub(crate) point: Point3,
    pub(crate) normal: Vec3,
    pub(crate) material: Material,
}

impl Plane {
    /// Create a new plane. The normal is normalized here.
    pub fn new(point: Point3, normal: Vec3, material: impl Into<Material>) -> RenderResult<Self> {
        if !point.is_finite() {
            return Err(RenderError::degenerate("plane", "point is not finite"));
        }
        let normal = normalize(normal)
            .map_err(|e| RenderError::degenerate("plane", format!("invalid normal: {e}")))?;

        Ok(Self {
            point,
            normal,
            material: material.into(),
        })
    }

    pub fn point(&self) -> Point3 {
        self.point
    }

    pub fn material(&self) -> &Material {
        &self.material
    }

    /// Signed distance along `ray` to the plane, `None` if the ray is parallel.
    pub fn intersection_parameter(&self, ray: &Ray) -> Option<f64> {
        let denom = ray.direction().dot(self.normal);

        // Ray is parallel to plane
        if denom == 0.0 {
            return None;
        }

        let op = ray.origin() - self.point;
        Some(-op.dot(self.normal) / denom)
    }

    /// The plane's normal, independent of `point`.
    #[inline]
    pub fn normal_at(&self, _point: Point3) -> Vec3 {
        self.normal
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::Checkerboard;

    fn ground() -> Plane {
        Plane::new(Point3::ZERO, Vec3::Y, Checkerboard::default()).unwrap()
    }

    #[test]
    fn test_plane_hit_from_above() {
        let plane = ground();
        let ray = Ray::new(Point3::new(3.0, 5.0, -2.0), Vec3::new(0.0, -1.0, 0.0)).unwrap();

        assert_eq!(plane.intersection_parameter(&ray), Some(5.0));
    }

    #[test]
    fn test_plane_hit_oblique() {
        let plane = ground();
        let ray = Ray::new(Point3::new(0.0, 2.0, 0.0), Vec3::new(1.0, -1.0, 0.0)).unwrap();

        let t = plane.intersection_parameter(&ray).unwrap();
        assert!((t - 2.0 * 2.0_f64.sqrt()).abs() < 1e-12);
        assert!(ray.at(t).y.abs() < 1e-12);
    }

    #[test]
    fn test_plane_parallel_ray_misses() {
        let plane = ground();

        for origin in [
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(0.0, -4.0, 2.0),
            Point3::new(7.0, 0.0, 7.0), // lying in the plane
        ] {
            for direction in [Vec3::X, Vec3::new(1.0, 0.0, -3.0), Vec3::NEG_Z] {
                let ray = Ray::new(origin, direction).unwrap();
                assert_eq!(plane.intersection_parameter(&ray), None);
            }
        }
    }

    #[test]
    fn test_plane_behind_reports_negative() {
        let plane = ground();
        let ray = Ray::new(Point3::new(0.0, 1.0, 0.0), Vec3::Y).unwrap();

        assert_eq!(plane.intersection_parameter(&ray), Some(-1.0));
    }

    #[test]
    fn test_plane_normal_is_normalized() {
        let plane = Plane::new(Point3::ZERO, Vec3::new(0.0, 3.0, 0.0), Checkerboard::default())
            .unwrap();

        assert_eq!(plane.normal_at(Point3::new(10.0, 0.0, -4.0)), Vec3::Y);
    }

    #[test]
    fn test_plane_rejects_zero_normal() {
        let result = Plane::new(Point3::ZERO, Vec3::ZERO, Checkerboard::default());
        assert!(matches!(
            result,
            Err(RenderError::DegenerateGeometry { primitive: "plane", .. })
        ));
    }
}
