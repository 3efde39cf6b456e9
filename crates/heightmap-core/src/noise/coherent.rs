//! The single coherent-noise primitive every octave samples.
use noise::{NoiseFn, Perlin};

/// Permutation seed for the gradient table. Fixed so that the user seed only
/// moves octave offsets, never the underlying noise.
pub const PERMUTATION_SEED: u32 = 0;

/// The gradient lattice repeats every `PERIOD` units along each axis.
pub const PERIOD: f64 = 256.0;

/// Fold a coordinate into `[0, PERIOD]`. Non-finite input lands on the origin.
#[inline]
fn wrap(v: f64) -> f64 {
    let w = v.rem_euclid(PERIOD);
    if w.is_finite() {
        w
    } else {
        0.0
    }
}

/// 2D Perlin gradient noise remapped to [0, 1].
#[derive(Clone)]
pub struct CoherentNoise {
    perlin: Perlin,
}

impl CoherentNoise {
    pub fn new() -> Self {
        Self { perlin: Perlin::new(PERMUTATION_SEED) }
    }

    /// Evaluate at `(x, y)`. Continuous in both coordinates, result in [0, 1].
    ///
    /// Coordinates are folded into one lattice period first, so any finite
    /// input is accepted.
    #[inline]
    pub fn sample(&self, x: f64, y: f64) -> f64 {
        (self.perlin.get([wrap(x), wrap(y)]) * 0.5 + 0.5).clamp(0.0, 1.0)
    }
}

impl Default for CoherentNoise {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_stays_in_unit_interval() {
        let n = CoherentNoise::new();
        for i in 0..2000 {
            let x = i as f64 * 0.137 - 91.3;
            let y = i as f64 * -0.071 + 12_345.6;
            let v = n.sample(x, y);
            assert!((0.0..=1.0).contains(&v), "sample({x}, {y}) = {v}");
        }
    }

    #[test]
    fn lattice_points_sit_at_midpoint() {
        // Gradient noise vanishes on integer lattice points.
        let n = CoherentNoise::new();
        approx::assert_abs_diff_eq!(n.sample(3.0, -7.0), 0.5, epsilon = 1e-9);
    }

    #[test]
    fn small_steps_give_small_changes() {
        let n = CoherentNoise::new();
        let a = n.sample(10.25, 4.5);
        let b = n.sample(10.25 + 1e-6, 4.5);
        assert!((a - b).abs() < 1e-4);
    }

    #[test]
    fn sampling_repeats_every_period() {
        let n = CoherentNoise::new();
        for &(x, y) in &[(0.3, 0.7), (-54_321.2, 17.05), (99_999.9, -0.45)] {
            let a = n.sample(x, y);
            approx::assert_abs_diff_eq!(a, n.sample(x + PERIOD, y), epsilon = 1e-9);
            approx::assert_abs_diff_eq!(a, n.sample(x, y - 3.0 * PERIOD), epsilon = 1e-9);
        }
    }

    #[test]
    fn extreme_coordinates_do_not_panic() {
        let n = CoherentNoise::new();
        for &(x, y) in &[
            (1e30, 0.0),
            (-1e300, 1e300),
            (f64::MAX, f64::MIN),
            (f64::NAN, 2.5),
            (f64::INFINITY, f64::NEG_INFINITY),
        ] {
            let v = n.sample(x, y);
            assert!((0.0..=1.0).contains(&v), "sample({x}, {y}) = {v}");
        }
    }

    #[test]
    fn independent_instances_agree() {
        let a = CoherentNoise::new();
        let b = CoherentNoise::default();
        assert_eq!(a.sample(0.3, 0.7).to_bits(), b.sample(0.3, 0.7).to_bits());
    }
}
