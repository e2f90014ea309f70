//! Scene description consumed by the renderer.
//!
//! A scene is assembled once through [`SceneBuilder`] and is read-only while
//! rendering, so it can be shared across worker threads by reference.

use glint_math::{Color, Point3};

use crate::error::{RenderError, RenderResult};
use crate::{Camera, Primitive};

/// A white point light with unit intensity and no falloff.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    pub position: Point3,
}

impl Light {
    pub fn new(position: Point3) -> Self {
        Self { position }
    }
}

impl From<Point3> for Light {
    fn from(position: Point3) -> Self {
        Self { position }
    }
}

/// Everything needed to render one image.
#[derive(Debug, Clone)]
pub struct Scene {
    primitives: Vec<Primitive>,
    lights: Vec<Light>,
    camera: Camera,
    background: Color,
}

impl Scene {
    pub fn builder() -> SceneBuilder {
        SceneBuilder::new()
    }

    /// Primitives in insertion order.
    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    /// Lights in insertion order.
    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Color returned for rays that hit nothing.
    pub fn background(&self) -> Color {
        self.background
    }

    pub fn width(&self) -> u32 {
        self.camera.width()
    }

    pub fn height(&self) -> u32 {
        self.camera.height()
    }
}

/// Builder for [`Scene`].
#[derive(Debug, Default)]
pub struct SceneBuilder {
    primitives: Vec<Primitive>,
    lights: Vec<Light>,
    camera: Option<Camera>,
    background: Color,
    skipped: usize,
}

impl SceneBuilder {
    /// Create an empty builder with a black background.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn camera(mut self, camera: Camera) -> Self {
        self.camera = Some(camera);
        self
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    /// Add a primitive.
    pub fn primitive(mut self, primitive: impl Into<Primitive>) -> Self {
        self.primitives.push(primitive.into());
        self
    }

    /// Add a primitive whose construction may have failed.
    ///
    /// A degenerate primitive is logged and left out of the scene; the
    /// rest of the scene is unaffected.
    pub fn try_primitive<P: Into<Primitive>>(mut self, primitive: RenderResult<P>) -> Self {
        match primitive {
            Ok(p) => self.primitives.push(p.into()),
            Err(e) => {
                log::warn!("Skipping primitive: {}", e);
                self.skipped += 1;
            }
        }
        self
    }

    pub fn light(mut self, light: impl Into<Light>) -> Self {
        self.lights.push(light.into());
        self
    }

    /// Number of primitives dropped by [`SceneBuilder::try_primitive`].
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Finish the scene. A camera is required.
    pub fn build(self) -> RenderResult<Scene> {
        let camera = self.camera.ok_or(RenderError::MissingCamera)?;

        log::debug!(
            "Scene built: {} primitives ({} skipped), {} lights, {}x{}",
            self.primitives.len(),
            self.skipped,
            self.lights.len(),
            camera.width(),
            camera.height()
        );

        Ok(Scene {
            primitives: self.primitives,
            lights: self.lights,
            camera,
            background: self.background,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::Solid;
    use crate::{CameraSettings, Sphere};
    use glint_math::Vec3;

    fn camera() -> Camera {
        CameraSettings::new().with_resolution(8, 6).build().unwrap()
    }

    #[test]
    fn test_build_requires_camera() {
        let result = Scene::builder().light(Point3::ONE).build();
        assert!(matches!(result, Err(RenderError::MissingCamera)));
    }

    #[test]
    fn test_build_keeps_order_and_size() {
        let a = Sphere::new(Point3::new(0.0, 0.0, -5.0), 1.0, Solid::new(Color::ONE)).unwrap();
        let b = Sphere::new(Point3::new(2.0, 0.0, -5.0), 1.0, Solid::new(Color::ONE)).unwrap();

        let scene = Scene::builder()
            .camera(camera())
            .background(Color::new(10.0, 20.0, 30.0))
            .primitive(a.clone())
            .primitive(b.clone())
            .light(Point3::new(30.0, 30.0, 10.0))
            .light(Light::new(Point3::new(-10.0, 100.0, 30.0)))
            .build()
            .unwrap();

        assert_eq!(scene.primitives(), &[Primitive::from(a), Primitive::from(b)]);
        assert_eq!(scene.lights()[1].position, Point3::new(-10.0, 100.0, 30.0));
        assert_eq!(scene.background(), Color::new(10.0, 20.0, 30.0));
        assert_eq!((scene.width(), scene.height()), (8, 6));
    }

    #[test]
    fn test_degenerate_primitive_is_skipped() {
        let builder = Scene::builder()
            .camera(camera())
            .try_primitive(Sphere::new(Point3::ZERO, 0.0, Solid::new(Color::ONE)))
            .try_primitive(Sphere::new(Point3::new(0.0, 0.0, -4.0), 1.0, Solid::new(Color::ONE)));

        assert_eq!(builder.skipped(), 1);
        let scene = builder.build().unwrap();
        assert_eq!(scene.primitives().len(), 1);
    }

    #[test]
    fn test_default_background_is_black() {
        let scene = Scene::builder().camera(camera()).build().unwrap();
        assert_eq!(scene.background(), Vec3::ZERO);
        assert!(scene.primitives().is_empty());
    }

    #[test]
    fn test_scene_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Scene>();
    }
}
