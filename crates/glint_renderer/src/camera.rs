//! Camera for ray generation.
//!
//! A pinhole camera: an orthonormal basis built from eye, target and up,
//! and a screen of `width` x `height` pixels spanning the field of view.

use glint_math::{normalize, MathResult, Point3, Ray, Vec3};

use crate::error::{RenderError, RenderResult};

/// Settings from which a [`Camera`] is built.
#[derive(Debug, Clone)]
pub struct CameraSettings {
    width: u32,
    height: u32,
    eye: Point3,
    target: Point3,
    up: Vec3,
    /// Full vertical field of view in radians
    fov: f64,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraSettings {
    /// Create camera settings with default values.
    pub fn new() -> Self {
        Self {
            width: 400,
            height: 400,
            eye: Point3::ZERO,
            target: Point3::new(0.0, 0.0, -1.0),
            up: Vec3::Y,
            fov: 45.0_f64.to_radians(),
        }
    }

    /// Set image resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set camera position.
    pub fn with_position(mut self, eye: Point3, target: Point3, up: Vec3) -> Self {
        self.eye = eye;
        self.target = target;
        self.up = up;
        self
    }

    /// Set the vertical field of view in radians.
    pub fn with_fov(mut self, fov: f64) -> Self {
        self.fov = fov;
        self
    }

    /// Set the vertical field of view in degrees.
    pub fn with_fov_degrees(self, degrees: f64) -> Self {
        self.with_fov(degrees.to_radians())
    }

    /// Derive the view basis and screen mapping.
    ///
    /// Fails on a resolution below 2x2, a field of view outside (0, π),
    /// or a basis that cannot be built (eye at target, up along the view).
    pub fn build(self) -> RenderResult<Camera> {
        let Self {
            width,
            height,
            eye,
            target,
            up,
            fov,
        } = self;

        if width < 2 || height < 2 {
            return Err(RenderError::InvalidResolution { width, height });
        }
        if !(fov.is_finite() && fov > 0.0 && fov < std::f64::consts::PI) {
            return Err(RenderError::DegenerateCamera(format!(
                "field of view must be in (0, pi) radians, got {fov}"
            )));
        }

        let forward = normalize(target - eye)
            .map_err(|e| RenderError::DegenerateCamera(format!("eye and target: {e}")))?;
        let right = normalize(forward.cross(up))
            .map_err(|e| RenderError::DegenerateCamera(format!("up vector: {e}")))?;
        let true_up = right.cross(forward);

        let ratio = width as f64 / height as f64;
        let half_height = (fov / 2.0).tan();
        let half_width = ratio * half_height;

        Ok(Camera {
            width,
            height,
            eye,
            forward,
            right,
            up: true_up,
            half_width,
            half_height,
            pixel_width: 2.0 * half_width / (width - 1) as f64,
            pixel_height: 2.0 * half_height / (height - 1) as f64,
        })
    }
}

/// A camera with a fixed resolution, ready to generate rays.
///
/// Changing the resolution means building a new camera.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    width: u32,
    height: u32,
    eye: Point3,

    // Orthonormal basis
    forward: Vec3,
    right: Vec3,
    up: Vec3,

    // Screen mapping
    half_width: f64,
    half_height: f64,
    pixel_width: f64,
    pixel_height: f64,
}

impl Camera {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn eye(&self) -> Point3 {
        self.eye
    }

    /// The (forward, right, up) basis vectors.
    pub fn basis(&self) -> (Vec3, Vec3, Vec3) {
        (self.forward, self.right, self.up)
    }

    /// Generate the ray through pixel (x, y).
    ///
    /// Pixel (0, 0) is the corner at `-right` and `-up`; x grows along
    /// `right` and y along `up`.
    pub fn build_ray(&self, x: u32, y: u32) -> MathResult<Ray> {
        let x_comp = self.right * (x as f64 * self.pixel_width - self.half_width);
        let y_comp = self.up * (y as f64 * self.pixel_height - self.half_height);
        Ray::new(self.eye, self.forward + x_comp + y_comp)
    }
}
