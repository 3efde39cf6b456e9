use serde::{Deserialize, Serialize};

/// A 2D scalar field stored row-major as f32: cell (x, y) lives at `y * width + x`.
///
/// Holds raw accumulated noise right after synthesis and values in [0, 1]
/// once [`ScalarField::normalize`] has run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScalarField {
    pub data: Vec<f32>,
    pub width: usize,
    pub height: usize,
}

/// Value every cell takes when the field has no spread to normalize against.
pub const DEGENERATE_FILL: f32 = 0.5;

impl ScalarField {
    /// Create a new field filled with the given value.
    pub fn new(width: usize, height: usize, fill: f32) -> Self {
        Self { data: vec![fill; width * height], width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    #[inline]
    pub fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> f32 {
        self.data[self.index(x, y)]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, val: f32) {
        let i = self.index(x, y);
        self.data[i] = val;
    }

    pub fn min_value(&self) -> f32 {
        self.data.iter().cloned().fold(f32::INFINITY, f32::min)
    }

    pub fn max_value(&self) -> f32 {
        self.data.iter().cloned().fold(f32::NEG_INFINITY, f32::max)
    }

    /// Remap every cell from `[min, max]` onto `[0, 1]`.
    ///
    /// `min` and `max` must bound the field's values. When they are equal the
    /// field is flat and every cell becomes [`DEGENERATE_FILL`]. Returns
    /// `false` in that case.
    pub fn normalize_between(&mut self, min: f32, max: f32) -> bool {
        let range = max as f64 - min as f64;
        if range <= 0.0 || !range.is_finite() {
            self.data.fill(DEGENERATE_FILL);
            return false;
        }
        for v in &mut self.data {
            *v = inverse_lerp(min, range, *v);
        }
        true
    }

    /// Normalize against the field's own extrema.
    pub fn normalize(&mut self) -> bool {
        let (min, max) = (self.min_value(), self.max_value());
        self.normalize_between(min, max)
    }
}

/// Computed in f64 so that the span of two finite f32 values cannot overflow.
#[inline]
fn inverse_lerp(min: f32, range: f64, v: f32) -> f32 {
    let t = (v as f64 - min as f64) / range;
    if t.is_nan() {
        DEGENERATE_FILL
    } else {
        t.clamp(0.0, 1.0) as f32
    }
}
