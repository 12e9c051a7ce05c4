//! # skymask core
//!
//! Core types, traits and scene interfaces for the skymask cloud-mask
//! refinement library.
//!
//! This crate provides:
//! - `Raster<T>`: generic in-memory raster grid
//! - Mask code vocabulary (coarse mask, water confidence, output codes)
//! - `SceneSource` / `SceneSink`: abstract interfaces to the I/O layer
//! - Algorithm trait for a consistent API

pub mod error;
pub mod mask;
pub mod raster;
pub mod scene;

pub use error::{Error, Result};
pub use mask::{CloudClass, MaskCode};
pub use raster::{Raster, RasterElement};
pub use scene::{
    Band, IndexLayer, MemoryScene, MemorySink, SceneSink, SceneSource, VarianceLayer,
};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::mask::{CloudClass, MaskCode};
    pub use crate::raster::{Raster, RasterElement};
    pub use crate::scene::{
        Band, IndexLayer, MemoryScene, MemorySink, SceneSink, SceneSource, VarianceLayer,
    };
    pub use crate::Algorithm;
}

/// Core trait for all algorithms in skymask.
///
/// Algorithms are pure functions that transform input data according to parameters.
pub trait Algorithm {
    /// Input type for the algorithm
    type Input;
    /// Output type for the algorithm
    type Output;
    /// Parameters controlling algorithm behavior
    type Params: Default;
    /// Error type for algorithm execution
    type Error: std::error::Error;

    /// Returns the algorithm name
    fn name(&self) -> &'static str;

    /// Returns a description of what the algorithm does
    fn description(&self) -> &'static str;

    /// Execute the algorithm
    fn execute(
        &self,
        input: Self::Input,
        params: Self::Params,
    ) -> std::result::Result<Self::Output, Self::Error>;

    /// Execute with default parameters
    fn execute_default(&self, input: Self::Input) -> std::result::Result<Self::Output, Self::Error> {
        self.execute(input, Self::Params::default())
    }
}
