use serde::{Deserialize, Serialize};

/// Smallest scale used at evaluation time; non-positive scales are clamped to it.
pub const MIN_SCALE: f64 = 0.0001;

/// A 2D translation in noise space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Offset2 {
    pub x: f64,
    pub y: f64,
}

impl Offset2 {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Full parameter set for one height map generation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationParameters {
    /// Field width in cells.
    pub width: usize,
    /// Field height in cells.
    pub height: usize,
    /// Cells per noise unit at the first octave. Clamped to `MIN_SCALE` if <= 0.
    pub scale: f64,
    /// Number of summed octaves (1-10 in the editor).
    pub octaves: u32,
    /// Amplitude multiplier applied after each octave (0-1).
    pub persistence: f64,
    /// Frequency multiplier applied after each octave (>= 1).
    pub lacunarity: f64,
    /// Seeds the per-octave offset sequence.
    pub seed: i32,
    /// Global translation added to every octave offset.
    pub offset: Offset2,
}

impl Default for GenerationParameters {
    fn default() -> Self {
        Self {
            width: 512,
            height: 512,
            scale: 20.0,
            octaves: 4,
            persistence: 0.5,
            lacunarity: 2.0,
            seed: 0,
            offset: Offset2::default(),
        }
    }
}

impl GenerationParameters {
    /// Parse parameters from JSON. Missing fields take their default values.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Scale as used by the sampler: strictly positive. NaN is clamped too.
    #[inline]
    pub fn effective_scale(&self) -> f64 {
        if self.scale.is_nan() || self.scale <= 0.0 {
            MIN_SCALE
        } else {
            self.scale
        }
    }

    /// Global offset as used by the sampler: non-finite components become 0.
    #[inline]
    pub fn effective_offset(&self) -> Offset2 {
        let finite = |v: f64| if v.is_finite() { v } else { 0.0 };
        Offset2::new(finite(self.offset.x), finite(self.offset.y))
    }
}
