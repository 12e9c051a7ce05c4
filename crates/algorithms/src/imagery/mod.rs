//! Spectral index derivation
//!
//! - Normalized difference: generic two-band index with fill propagation
//! - NDVI / NDSI: the two indices consumed by the ensemble classifier

mod indices;

pub use indices::{ndsi, ndvi, normalized_difference, INDEX_FILL};
