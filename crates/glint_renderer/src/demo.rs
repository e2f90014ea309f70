//! The reference demo scene.
//!
//! Three spheres (red, green, blue) with a yellow triangle spanning their
//! centers, standing on a checkerboard ground plane and lit by two lights.

use glint_math::{Color, Point3, Vec3};

use crate::error::RenderResult;
use crate::material::{Checkerboard, Solid};
use crate::{CameraSettings, Plane, Scene, Sphere, Triangle};

pub const RED: Color = Color::new(255.0, 0.0, 0.0);
pub const GREEN: Color = Color::new(0.0, 255.0, 0.0);
pub const BLUE: Color = Color::new(0.0, 0.0, 255.0);
pub const YELLOW: Color = Color::new(255.0, 255.0, 0.0);

/// Camera settings the demo scene is framed for, at 400x400.
pub fn demo_camera() -> CameraSettings {
    CameraSettings::new()
        .with_resolution(400, 400)
        .with_position(
            Point3::new(1.0, 1.8, 10.0), // eye
            Point3::new(0.0, 3.0, 0.0),  // target
            Vec3::Y,                     // up
        )
        .with_fov_degrees(45.0)
}

/// Build the demo scene with the given camera and background.
pub fn demo_scene(camera: CameraSettings, background: Color) -> RenderResult<Scene> {
    let scene = Scene::builder()
        .camera(camera.build()?)
        .background(background)
        .primitive(Sphere::new(Point3::new(2.5, 3.0, -10.0), 2.0, Solid::new(RED))?)
        .primitive(Sphere::new(Point3::new(-2.5, 3.0, -10.0), 2.0, Solid::new(GREEN))?)
        .primitive(Sphere::new(Point3::new(0.0, 7.0, -10.0), 2.0, Solid::new(BLUE))?)
        .primitive(Triangle::new(
            Point3::new(2.5, 3.0, -10.0),
            Point3::new(-2.5, 3.0, -10.0),
            Point3::new(0.0, 7.0, -10.0),
            Solid::new(YELLOW),
        )?)
        .primitive(Plane::new(Point3::ZERO, Vec3::Y, Checkerboard::default())?)
        .light(Point3::new(30.0, 30.0, 10.0))
        .light(Point3::new(-10.0, 100.0, 30.0))
        .build()?;

    Ok(scene)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_scene_contents() {
        let scene = demo_scene(demo_camera(), Color::ZERO).unwrap();

        assert_eq!(scene.primitives().len(), 5);
        assert_eq!(scene.lights().len(), 2);
        assert_eq!((scene.width(), scene.height()), (400, 400));
        assert_eq!(
            scene.primitives().iter().map(|p| p.kind()).collect::<Vec<_>>(),
            ["sphere", "sphere", "sphere", "triangle", "plane"]
        );
    }

    #[test]
    fn test_demo_scene_rejects_tiny_resolution() {
        let result = demo_scene(demo_camera().with_resolution(1, 400), Color::ZERO);
        assert!(result.is_err());
    }
}
