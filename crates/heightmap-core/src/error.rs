//! Error types for field generation and rasterization.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    /// Requested field has a zero-length axis, or more cells than fit in memory.
    #[error("invalid field dimensions {width}x{height}: both axes must be positive and their product must fit in usize")]
    InvalidDimension { width: usize, height: usize },

    /// Rasterizer was handed a field with no cells, or one whose data length
    /// disagrees with its dimensions.
    #[error("cannot rasterize a {width}x{height} field: field is empty or its data does not match")]
    DimensionMismatch { width: usize, height: usize },
}
