//! Vector algebra for the tracer.
//!
//! One `f64` three-component value type serves as point, direction and color.
//! The aliases below only document the role a value plays at a call site;
//! they are the same type and convert freely.

use glam::DVec3;
use thiserror::Error;

/// A 3-component vector (direction, offset).
pub type Vec3 = DVec3;

/// A position in world space.
pub type Point3 = DVec3;

/// An RGB color on a 0-255 scale. Channels are not clamped.
pub type Color = DVec3;

/// Errors produced by vector operations that have no meaningful result.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum MathError {
    #[error("cannot normalize a zero-length vector")]
    ZeroLength,

    #[error("vector has non-finite components: ({0}, {1}, {2})")]
    NonFinite(f64, f64, f64),
}

pub type MathResult<T> = Result<T, MathError>;

/// Euclidean length.
#[inline]
pub fn norm(v: Vec3) -> f64 {
    v.length()
}

/// Scale `v` to unit length.
///
/// Fails instead of producing NaNs when `v` is zero or not finite.
pub fn normalize(v: Vec3) -> MathResult<Vec3> {
    if !v.is_finite() {
        return Err(MathError::NonFinite(v.x, v.y, v.z));
    }
    v.try_normalize().ok_or(MathError::ZeroLength)
}

/// Mirror `v` about the axis `n`.
///
/// `n` must be unit length: the result is `v - 2 (v·n) n`.
#[inline]
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn test_normalize_unit_length() {
        let samples = [
            Vec3::new(3.0, 4.0, 0.0),
            Vec3::new(-1.0, 2.0, -7.5),
            Vec3::new(1e-8, 0.0, 0.0),
            Vec3::new(1e8, -1e8, 3.0),
        ];

        for v in samples {
            let n = normalize(v).unwrap();
            assert!((norm(n) - 1.0).abs() < EPS, "{v:?} -> {n:?}");
            // Same direction as the input
            assert!(n.dot(v) > 0.0);
        }
    }

    #[test]
    fn test_normalize_zero_fails() {
        assert_eq!(normalize(Vec3::ZERO), Err(MathError::ZeroLength));
    }

    #[test]
    fn test_normalize_non_finite_fails() {
        let err = normalize(Vec3::new(f64::NAN, 1.0, 0.0)).unwrap_err();
        assert!(matches!(err, MathError::NonFinite(..)));

        let err = normalize(Vec3::new(f64::INFINITY, 0.0, 0.0)).unwrap_err();
        assert!(matches!(err, MathError::NonFinite(..)));
    }

    #[test]
    fn test_reflect_flips_normal_component() {
        let n = Vec3::Y;
        let v = Vec3::new(1.0, -2.0, 3.0);
        let r = reflect(v, n);

        assert_eq!(r, Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_reflect_preserves_tangent_and_length() {
        let n = normalize(Vec3::new(1.0, 1.0, -0.5)).unwrap();
        let vectors = [
            Vec3::new(0.3, -4.0, 2.0),
            Vec3::new(-1.0, 0.0, 0.0),
            Vec3::new(5.0, 5.0, 5.0),
        ];

        for v in vectors {
            let r = reflect(v, n);

            // Component along n changes sign
            assert!((r.dot(n) + v.dot(n)).abs() < 1e-9);

            // Orthogonal component is untouched
            let v_tangent = v - v.dot(n) * n;
            let r_tangent = r - r.dot(n) * n;
            assert!((v_tangent - r_tangent).length() < 1e-9);

            assert!((norm(r) - norm(v)).abs() < 1e-9);
        }
    }

    #[test]
    fn test_scalar_and_vector_arithmetic() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);

        assert_eq!(a + b, Vec3::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Vec3::new(3.0, 3.0, 3.0));
        assert_eq!(a - 1.0, Vec3::new(0.0, 1.0, 2.0));
        assert_eq!(a * 2.0, Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(b / 2.0, Vec3::new(2.0, 2.5, 3.0));
        assert_eq!(a.dot(b), 32.0);
        assert_eq!(Vec3::X.cross(Vec3::Y), Vec3::Z);
    }
}
