//! Morphological erosion (minimum filter)
//!
//! Replaces each pixel with the minimum value in its structuring element
//! neighborhood. On a binary verdict raster a flagged pixel survives only
//! if every neighbor under the element is also flagged.
//!
//! Border policy: neighbor coordinates are clamped to the raster edge
//! (edge replication), so out-of-bounds neighbors never erase a pixel on
//! their own. This is the one consistent edge policy used by the whole
//! refiner.

use ndarray::Array2;
use rayon::prelude::*;
use skymask_core::raster::Raster;
use skymask_core::{Algorithm, Error, Result};

use super::element::StructuringElement;

/// Parameters for morphological erosion
#[derive(Debug, Clone, Default)]
pub struct ErodeParams {
    /// Structuring element shape
    pub element: StructuringElement,
}

/// Erosion algorithm
#[derive(Debug, Clone, Default)]
pub struct Erode;

impl Algorithm for Erode {
    type Input = Raster<u8>;
    type Output = Raster<u8>;
    type Params = ErodeParams;
    type Error = Error;

    fn name(&self) -> &'static str {
        "Erode"
    }

    fn description(&self) -> &'static str {
        "Morphological erosion (minimum filter over structuring element)"
    }

    fn execute(&self, input: Self::Input, params: Self::Params) -> Result<Self::Output> {
        erode(&input, &params.element)
    }
}

/// Perform morphological erosion on a mask raster.
///
/// Each output pixel is the minimum value within the structuring element
/// neighborhood, with neighbor coordinates clamped at the raster edge.
pub fn erode(raster: &Raster<u8>, element: &StructuringElement) -> Result<Raster<u8>> {
    morph(raster, element, u8::MAX, |acc, v| acc.min(v))
}

pub(super) fn morph(
    raster: &Raster<u8>,
    element: &StructuringElement,
    init: u8,
    fold: impl Fn(u8, u8) -> u8 + Sync,
) -> Result<Raster<u8>> {
    element.validate()?;

    let (rows, cols) = raster.shape();
    let offsets = element.offsets();

    let data: Vec<u8> = (0..rows)
        .into_par_iter()
        .flat_map(|row| {
            let mut row_data = vec![0u8; cols];
            for (col, out) in row_data.iter_mut().enumerate() {
                let mut acc = init;
                for &(dr, dc) in &offsets {
                    let nr = (row as isize + dr).clamp(0, rows as isize - 1) as usize;
                    let nc = (col as isize + dc).clamp(0, cols as isize - 1) as usize;
                    let v = unsafe { raster.get_unchecked(nr, nc) };
                    acc = fold(acc, v);
                }
                *out = acc;
            }
            row_data
        })
        .collect();

    let array =
        Array2::from_shape_vec((rows, cols), data).map_err(|e| Error::Other(e.to_string()))?;
    Ok(Raster::from_array(array))
}
