//! Multi-octave noise field synthesis.
//!
//! Two passes: accumulate raw octave sums into the field while tracking its
//! extrema, then remap every cell into [0, 1]. The extrema reduction always
//! covers the whole field before the second pass starts.
pub mod coherent;
pub mod octaves;

use log::{debug, trace};

use crate::error::FieldError;
use crate::field::{ScalarField, DEGENERATE_FILL};
use crate::params::{GenerationParameters, Offset2};
use coherent::CoherentNoise;
use octaves::octave_offsets;

/// Per-run sampling state: everything a cell needs, read-only.
struct OctaveSampler<'a> {
    noise: &'a CoherentNoise,
    offsets: &'a [Offset2],
    scale: f64,
    persistence: f64,
    lacunarity: f64,
    half_width: f64,
    half_height: f64,
}

impl OctaveSampler<'_> {
    /// Raw octave sum at cell `(x, y)`. Unbounded; roughly within
    /// `±sum(persistence^i)`.
    #[inline]
    fn sample(&self, x: usize, y: usize) -> f64 {
        let dx = (x as f64 - self.half_width) / self.scale;
        let dy = (y as f64 - self.half_height) / self.scale;

        let mut value = 0.0f64;
        let mut amplitude = 1.0f64;
        let mut frequency = 1.0f64;
        for off in self.offsets {
            let sx = dx * frequency + off.x;
            let sy = dy * frequency + off.y;
            value += (2.0 * self.noise.sample(sx, sy) - 1.0) * amplitude;
            amplitude *= self.persistence;
            frequency *= self.lacunarity;
        }
        value
    }

    /// Fill one scanline with raw sums; returns the row's (min, max).
    fn accumulate_row(&self, y: usize, row: &mut [f32]) -> (f32, f32) {
        let mut lo = f32::INFINITY;
        let mut hi = f32::NEG_INFINITY;
        for (x, cell) in row.iter_mut().enumerate() {
            let v = finite_f32(self.sample(x, y));
            *cell = v;
            lo = lo.min(v);
            hi = hi.max(v);
        }
        (lo, hi)
    }
}

/// Narrow a raw sum to a finite f32. Overflowing sums saturate; NaN becomes 0.
#[inline]
fn finite_f32(v: f64) -> f32 {
    if v.is_nan() {
        0.0
    } else {
        v.clamp(f32::MIN as f64, f32::MAX as f64) as f32
    }
}

fn merge_extrema(a: (f32, f32), b: (f32, f32)) -> (f32, f32) {
    (a.0.min(b.0), a.1.max(b.1))
}

#[cfg(not(feature = "threading"))]
fn accumulate(field: &mut ScalarField, sampler: &OctaveSampler<'_>) -> (f32, f32) {
    let width = field.width;
    field
        .data
        .chunks_mut(width)
        .enumerate()
        .map(|(y, row)| sampler.accumulate_row(y, row))
        .fold((f32::INFINITY, f32::NEG_INFINITY), merge_extrema)
}

#[cfg(feature = "threading")]
fn accumulate(field: &mut ScalarField, sampler: &OctaveSampler<'_>) -> (f32, f32) {
    use rayon::prelude::*;

    let width = field.width;
    field
        .data
        .par_chunks_mut(width)
        .enumerate()
        .map(|(y, row)| sampler.accumulate_row(y, row))
        .reduce(|| (f32::INFINITY, f32::NEG_INFINITY), merge_extrema)
}

/// Fractal noise field generator.
///
/// Stateless apart from the fixed coherent-noise primitive, so one instance
/// can serve any number of runs.
#[derive(Clone, Default)]
pub struct NoiseFieldGenerator {
    noise: CoherentNoise,
}

impl NoiseFieldGenerator {
    pub fn new() -> Self {
        Self { noise: CoherentNoise::new() }
    }

    /// Generate a normalized field for `params`.
    ///
    /// Fails with [`FieldError::InvalidDimension`] before doing any work if
    /// either axis is zero. A field with no spread (single cell, zero octaves)
    /// comes back filled with 0.5.
    pub fn generate(&self, params: &GenerationParameters) -> Result<ScalarField, FieldError> {
        let (width, height) = (params.width, params.height);
        if width == 0 || height == 0 || width.checked_mul(height).is_none() {
            return Err(FieldError::InvalidDimension { width, height });
        }

        let offsets = octave_offsets(params.seed, params.octaves, params.effective_offset());
        debug!("seed {} -> octave offsets {:?}", params.seed, offsets);

        let sampler = OctaveSampler {
            noise: &self.noise,
            offsets: &offsets,
            scale: params.effective_scale(),
            persistence: params.persistence,
            lacunarity: params.lacunarity,
            half_width: width as f64 / 2.0,
            half_height: height as f64 / 2.0,
        };

        // ── Pass 1: raw octave sums + extrema ──────────────────────────────
        let mut field = ScalarField::new(width, height, 0.0);
        let (min, max) = accumulate(&mut field, &sampler);
        trace!("raw field range [{min}, {max}]");

        // ── Pass 2: inverse-lerp into [0, 1] ───────────────────────────────
        if !field.normalize_between(min, max) {
            debug!("flat {width}x{height} field (value {min}); filling with {DEGENERATE_FILL}");
        }
        Ok(field)
    }
}

/// Generate with a fresh [`NoiseFieldGenerator`].
pub fn generate_field(params: &GenerationParameters) -> Result<ScalarField, FieldError> {
    NoiseFieldGenerator::new().generate(params)
}
