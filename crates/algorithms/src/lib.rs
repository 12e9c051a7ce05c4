//! Refinement algorithms for coarse cloud masks
//!
//! Turns an upstream cloud mask that confuses bright snow with cloud into
//! a refined mask with confirmed-cloud, possibly-cloud, water, clear and
//! fill classes. The stages are exposed individually and composed by
//! [`pipeline::run`]:
//!
//! - [`imagery`]: NDVI and NDSI spectral indices
//! - [`statistics`]: windowed sample variance (texture)
//! - [`classifier`]: rule-based ensemble cloud confirmation
//! - [`morphology`]: opening and buffering of the binary verdict
//! - [`masking`]: final mask compositing
//! - [`pipeline`]: scene-level orchestration over [`SceneSource`] and
//!   [`SceneSink`](skymask_core::scene::SceneSink)
//!
//! [`SceneSource`]: skymask_core::scene::SceneSource

pub mod classifier;
pub mod imagery;
pub mod masking;
pub mod morphology;
pub mod pipeline;
pub mod statistics;

pub use pipeline::{run, RefineParams};
