//! Surface materials.
//!
//! A material maps a world-space point to a base color and carries two fixed
//! coefficients: how much of the base color is always visible (ambient) and
//! how much of the mirror reflection is added on top (specular).

use glint_math::{Color, Point3};

use crate::error::{RenderError, RenderResult};

/// Ambient coefficient used when none is given.
pub const DEFAULT_AMBIENT: f64 = 0.2;

/// Specular coefficient used when none is given.
pub const DEFAULT_SPECULAR: f64 = 0.5;

/// A surface material.
#[derive(Debug, Clone, PartialEq)]
pub enum Material {
    Solid(Solid),
    Checkerboard(Checkerboard),
}

impl Material {
    /// Base color of the surface at `point`.
    #[inline]
    pub fn color_at(&self, point: Point3) -> Color {
        match self {
            Material::Solid(m) => m.color,
            Material::Checkerboard(m) => m.color_at(point),
        }
    }

    /// Fraction of the base color contributed regardless of lighting.
    #[inline]
    pub fn ambient(&self) -> f64 {
        match self {
            Material::Solid(m) => m.ambient,
            Material::Checkerboard(m) => m.ambient,
        }
    }

    /// Fraction of the reflected color added to the surface.
    #[inline]
    pub fn specular(&self) -> f64 {
        match self {
            Material::Solid(m) => m.specular,
            Material::Checkerboard(m) => m.specular,
        }
    }
}

impl From<Solid> for Material {
    fn from(m: Solid) -> Self {
        Material::Solid(m)
    }
}

impl From<Checkerboard> for Material {
    fn from(m: Checkerboard) -> Self {
        Material::Checkerboard(m)
    }
}

/// A single uniform color.
#[derive(Debug, Clone, PartialEq)]
pub struct Solid {
    color: Color,
    ambient: f64,
    specular: f64,
}

impl Solid {
    /// Create a new solid material with the default coefficients.
    pub fn new(color: Color) -> Self {
        Self {
            color,
            ambient: DEFAULT_AMBIENT,
            specular: DEFAULT_SPECULAR,
        }
    }

    /// Set the ambient coefficient, clamped to [0, 1].
    pub fn with_ambient(mut self, ambient: f64) -> Self {
        self.ambient = unit_coefficient(ambient);
        self
    }

    /// Set the specular coefficient, clamped to [0, 1].
    pub fn with_specular(mut self, specular: f64) -> Self {
        self.specular = unit_coefficient(specular);
        self
    }
}

/// A 3D checker pattern.
///
/// Space is cut into cubes of `check_size`; the cell index along each axis is
/// `floor(|coord| / check_size + 0.5)` and the color flips with the parity of
/// the summed indices. The pattern depends only on world position, so it
/// looks the same on every primitive.
#[derive(Debug, Clone, PartialEq)]
pub struct Checkerboard {
    base_color: Color,
    other_color: Color,
    ambient: f64,
    specular: f64,
    check_size: f64,
}

impl Default for Checkerboard {
    fn default() -> Self {
        Self {
            base_color: Color::splat(200.0),
            other_color: Color::ZERO,
            ambient: DEFAULT_AMBIENT,
            specular: DEFAULT_SPECULAR,
            check_size: 1.0,
        }
    }
}

impl Checkerboard {
    /// Create a checkerboard alternating between two colors with unit cells.
    pub fn new(base_color: Color, other_color: Color) -> Self {
        Self {
            base_color,
            other_color,
            ..Default::default()
        }
    }

    /// Set the edge length of a cell.
    pub fn with_check_size(mut self, check_size: f64) -> RenderResult<Self> {
        if !(check_size.is_finite() && check_size > 0.0) {
            return Err(RenderError::InvalidConfig(format!(
                "checker size must be positive and finite, got {check_size}"
            )));
        }
        self.check_size = check_size;
        Ok(self)
    }

    /// Set the ambient coefficient, clamped to [0, 1].
    pub fn with_ambient(mut self, ambient: f64) -> Self {
        self.ambient = unit_coefficient(ambient);
        self
    }

    /// Set the specular coefficient, clamped to [0, 1].
    pub fn with_specular(mut self, specular: f64) -> Self {
        self.specular = unit_coefficient(specular);
        self
    }

    fn color_at(&self, point: Point3) -> Color {
        let p = point / self.check_size;
        let cell = |c: f64| (c.abs() + 0.5).floor() as i64;

        if (cell(p.x) + cell(p.y) + cell(p.z)) % 2 != 0 {
            self.other_color
        } else {
            self.base_color
        }
    }
}

fn unit_coefficient(x: f64) -> f64 {
    if x.is_nan() {
        0.0
    } else {
        x.clamp(0.0, 1.0)
    }
}
