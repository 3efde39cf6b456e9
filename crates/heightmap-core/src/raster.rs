//! Scalar field → color mapping.
use serde::{Deserialize, Serialize};

use crate::error::FieldError;
use crate::field::ScalarField;

/// Linear RGBA color with channels in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BLACK: Color = Color { r: 0.0, g: 0.0, b: 0.0, a: 1.0 };
    pub const WHITE: Color = Color { r: 1.0, g: 1.0, b: 1.0, a: 1.0 };

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque gray with all three channels set to `v`.
    pub const fn gray(v: f32) -> Self {
        Self { r: v, g: v, b: v, a: 1.0 }
    }

    /// Channel-wise interpolation towards `other`; `t` is clamped to [0, 1].
    #[inline]
    pub fn lerp(self, other: Color, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        Color {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
            a: self.a + (other.a - self.a) * t,
        }
    }

    /// Quantize to 8 bits per channel.
    #[inline]
    pub fn to_rgba8(self) -> [u8; 4] {
        let q = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b), q(self.a)]
    }
}

/// Row-major color samples, one per field cell.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    pub pixels: Vec<Color>,
    pub width: usize,
    pub height: usize,
}

impl PixelBuffer {
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Color {
        self.pixels[y * self.width + x]
    }

    /// Flat RGBA8 bytes in row order, as image encoders expect.
    pub fn to_rgba8_bytes(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|c| c.to_rgba8()).collect()
    }
}

/// Maps normalized field values onto a two-color ramp.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldRasterizer {
    /// Color at t = 0.
    pub low: Color,
    /// Color at t = 1.
    pub high: Color,
}

impl Default for FieldRasterizer {
    fn default() -> Self {
        Self { low: Color::BLACK, high: Color::WHITE }
    }
}

impl FieldRasterizer {
    pub fn new(low: Color, high: Color) -> Self {
        Self { low, high }
    }

    pub fn rasterize(&self, field: &ScalarField) -> Result<PixelBuffer, FieldError> {
        if field.is_empty() || field.width.checked_mul(field.height) != Some(field.data.len()) {
            return Err(FieldError::DimensionMismatch { width: field.width, height: field.height });
        }
        let pixels = field.data.iter().map(|&t| self.low.lerp(self.high, t)).collect();
        Ok(PixelBuffer { pixels, width: field.width, height: field.height })
    }
}

/// Rasterize onto the default black → white ramp.
pub fn rasterize(field: &ScalarField) -> Result<PixelBuffer, FieldError> {
    FieldRasterizer::default().rasterize(field)
}
