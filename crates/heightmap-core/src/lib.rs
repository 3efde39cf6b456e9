//! Fractal height map synthesis: multi-octave coherent noise summed into a
//! normalized scalar field, then mapped onto a grayscale pixel buffer.

pub mod error;
pub mod field;
pub mod noise;
pub mod params;
pub mod raster;

pub use error::FieldError;
pub use field::ScalarField;
pub use crate::noise::{generate_field, NoiseFieldGenerator};
pub use params::{GenerationParameters, Offset2};
pub use raster::{rasterize, Color, FieldRasterizer, PixelBuffer};
