//! Nearest-hit resolution over a list of primitives.
//!
//! The scan is linear in the number of primitives and runs once per camera
//! ray, once per light per hit, and once per reflection bounce.

use glint_math::{Interval, Point3, Ray, Vec3};

use crate::Primitive;

/// Record of a ray-primitive intersection.
#[derive(Debug, Clone, Copy)]
pub struct Hit<'a> {
    /// The primitive that was struck
    pub primitive: &'a Primitive,
    /// Distance along the ray
    pub distance: f64,
}

impl<'a> Hit<'a> {
    /// World-space point of the hit on `ray`.
    #[inline]
    pub fn point(&self, ray: &Ray) -> Point3 {
        ray.at(self.distance)
    }

    /// Surface normal at the hit point.
    #[inline]
    pub fn normal(&self, ray: &Ray) -> Vec3 {
        self.primitive.normal_at(self.point(ray))
    }
}

/// Find the primitive with the smallest distance strictly inside `ray_t`.
///
/// Misses, distances outside the interval and non-finite distances (from a
/// malformed primitive) are skipped without affecting the rest of the scan.
/// Ties keep the earlier primitive.
pub fn nearest_hit<'a>(
    primitives: &'a [Primitive],
    ray: &Ray,
    ray_t: Interval,
) -> Option<Hit<'a>> {
    let mut closest: Option<Hit<'a>> = None;
    let mut closest_so_far = ray_t.max;

    for primitive in primitives {
        let Some(distance) = primitive.intersection_parameter(ray) else {
            continue;
        };

        if Interval::new(ray_t.min, closest_so_far).surrounds(distance) {
            closest_so_far = distance;
            closest = Some(Hit {
                primitive,
                distance,
            });
        }
    }

    closest
}

/// True if any primitive is hit strictly inside `ray_t`.
///
/// Stops at the first hit; used for shadow rays where only occlusion matters.
pub fn occluded(primitives: &[Primitive], ray: &Ray, ray_t: Interval) -> bool {
    primitives.iter().any(|primitive| {
        primitive
            .intersection_parameter(ray)
            .is_some_and(|distance| ray_t.surrounds(distance))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::Solid;
    use crate::{Plane, Sphere};
    use glint_math::Color;

    const FORWARD: Interval = Interval::beyond(1e-6);

    fn sphere_at(z: f64, color: Color) -> Primitive {
        Sphere::new(Point3::new(0.0, 0.0, z), 1.0, Solid::new(color))
            .unwrap()
            .into()
    }

    fn down_z() -> Ray {
        Ray::new(Point3::ZERO, Vec3::NEG_Z).unwrap()
    }

    #[test]
    fn test_nearest_wins_regardless_of_order() {
        let near = sphere_at(-5.0, Color::new(255.0, 0.0, 0.0));
        let far = sphere_at(-20.0, Color::new(0.0, 0.0, 255.0));

        for primitives in [vec![near.clone(), far.clone()], vec![far.clone(), near.clone()]] {
            let hit = nearest_hit(&primitives, &down_z(), FORWARD).unwrap();
            assert!((hit.distance - 4.0).abs() < 1e-12);
            assert_eq!(hit.primitive, &near);
        }
    }

    #[test]
    fn test_behind_and_missing_are_excluded() {
        let behind = sphere_at(10.0, Color::ONE);
        let off_axis: Primitive = Sphere::new(Point3::new(5.0, 0.0, -5.0), 1.0, Solid::new(Color::ONE))
            .unwrap()
            .into();
        let ahead = sphere_at(-8.0, Color::ONE);

        let primitives = vec![behind, off_axis, ahead.clone()];
        let hit = nearest_hit(&primitives, &down_z(), FORWARD).unwrap();
        assert_eq!(hit.primitive, &ahead);

        let primitives = &primitives[..2];
        assert!(nearest_hit(primitives, &down_z(), FORWARD).is_none());
    }

    #[test]
    fn test_empty_scene_has_no_hit() {
        assert!(nearest_hit(&[], &down_z(), FORWARD).is_none());
        assert!(!occluded(&[], &down_z(), FORWARD));
    }

    #[test]
    fn test_surface_origin_is_not_a_hit() {
        // A ray leaving the ground plane must not hit the plane again
        let ground: Primitive = Plane::new(Point3::ZERO, Vec3::Y, Solid::new(Color::ONE))
            .unwrap()
            .into();
        let ray = Ray::new(Point3::new(1.0, 0.0, 1.0), Vec3::new(0.0, 1.0, 1.0)).unwrap();

        assert!(nearest_hit(std::slice::from_ref(&ground), &ray, FORWARD).is_none());
    }

    #[test]
    fn test_malformed_primitive_is_skipped() {
        let broken = Primitive::Sphere(Sphere {
            center: Point3::new(0.0, 0.0, -3.0),
            radius: f64::NAN,
            material: Solid::new(Color::ONE).into(),
        });
        let good = sphere_at(-10.0, Color::ONE);

        let primitives = vec![broken, good.clone()];
        let hit = nearest_hit(&primitives, &down_z(), FORWARD).unwrap();
        assert_eq!(hit.primitive, &good);
        assert!(occluded(&primitives, &down_z(), FORWARD));
    }

    #[test]
    fn test_hit_point_and_normal() {
        let primitives = vec![sphere_at(-5.0, Color::ONE)];
        let ray = down_z();
        let hit = nearest_hit(&primitives, &ray, FORWARD).unwrap();

        assert!((hit.point(&ray) - Point3::new(0.0, 0.0, -4.0)).length() < 1e-12);
        assert!((hit.normal(&ray) - Vec3::Z).length() < 1e-12);
    }

    #[test]
    fn test_occluded_respects_interval() {
        let primitives = vec![sphere_at(-5.0, Color::ONE)];

        assert!(occluded(&primitives, &down_z(), FORWARD));
        // Blocker beyond the end of the interval does not count
        assert!(!occluded(&primitives, &down_z(), Interval::new(1e-6, 3.0)));
    }
}
