//! Windowed statistics over raster data
//!
//! - **variance**: fixed-window sample variance with fill propagation,
//!   the texture feature consumed by the variance-aware ensemble mode

mod variance;

pub use variance::{window_variance, VarianceParams, WindowVariance, FIXED_POINT_SCALE};
