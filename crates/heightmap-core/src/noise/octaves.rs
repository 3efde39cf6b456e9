//! Per-octave sampling offsets derived from the generation seed.
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::params::Offset2;

/// Octave offsets are drawn from `[-OFFSET_RANGE, OFFSET_RANGE)`.
pub const OFFSET_RANGE: i32 = 100_000;

/// One offset per octave: a seeded integer pair (x drawn before y) plus the
/// global offset. Same seed, same offsets.
pub fn octave_offsets(seed: i32, octaves: u32, offset: Offset2) -> Vec<Offset2> {
    let mut rng = StdRng::seed_from_u64(seed as i64 as u64);
    (0..octaves)
        .map(|_| {
            let x = rng.gen_range(-OFFSET_RANGE..OFFSET_RANGE) as f64 + offset.x;
            let y = rng.gen_range(-OFFSET_RANGE..OFFSET_RANGE) as f64 + offset.y;
            Offset2::new(x, y)
        })
        .collect()
}
