//! Final mask compositing
//!
//! Folds the coarse upstream mask, the refined cloud verdict and the
//! optional water layer into one output mask. Per-pixel precedence, from
//! strongest to weakest:
//!
//! 1. fill in the coarse mask stays fill
//! 2. a confirmed cloud verdict becomes cloud
//! 3. a coarse cloud flag without confirmation becomes possibly-cloud
//! 4. a water code becomes water
//! 5. everything else is clear
//!
//! Water never overwrites cloud or fill, so a cloud verdict over a lake is
//! reported as cloud.

use ndarray::Array2;
use rayon::prelude::*;
use skymask_core::mask::{is_water_code, MaskCode, COARSE_CLOUD, COARSE_FILL};
use skymask_core::raster::Raster;
use skymask_core::{Algorithm, Error, Result};

/// Inputs for mask compositing
#[derive(Debug, Clone)]
pub struct CompositeInput {
    /// Coarse upstream mask (cloud flag and fill plane)
    pub coarse: Raster<u8>,
    /// Refined cloud verdict after morphological cleanup
    pub verdict: Raster<u8>,
    /// Optional water layer with codes 1 to 3
    pub water: Option<Raster<u8>>,
}

/// Mask compositing algorithm
#[derive(Debug, Clone, Default)]
pub struct Composite;

impl Algorithm for Composite {
    type Input = CompositeInput;
    type Output = Raster<u8>;
    type Params = ();
    type Error = Error;

    fn name(&self) -> &'static str {
        "Composite"
    }

    fn description(&self) -> &'static str {
        "Fold coarse mask, refined cloud verdict and water layer into the output mask"
    }

    fn execute(&self, input: Self::Input, _params: Self::Params) -> Result<Self::Output> {
        composite(&input.coarse, &input.verdict, input.water.as_ref())
    }
}

/// Composite the final mask from its per-pixel ingredients.
///
/// `verdict` holds [`MaskCode::Cloud`] where the refined classifier
/// confirmed cloud and zero elsewhere. `water` pixels with codes 1 to 3
/// map to [`MaskCode::Water`]; any other water value is treated as land.
pub fn composite(
    coarse: &Raster<u8>,
    verdict: &Raster<u8>,
    water: Option<&Raster<u8>>,
) -> Result<Raster<u8>> {
    let (rows, cols) = coarse.shape();
    check_shape(rows, cols, verdict)?;
    if let Some(water) = water {
        check_shape(rows, cols, water)?;
    }

    let data: Vec<u8> = (0..rows)
        .into_par_iter()
        .flat_map(|row| {
            let mut row_data = vec![MaskCode::Clear.code(); cols];
            for (col, out) in row_data.iter_mut().enumerate() {
                let coarse_value = unsafe { coarse.get_unchecked(row, col) };
                if coarse_value == COARSE_FILL {
                    *out = MaskCode::Fill.code();
                    continue;
                }
                if unsafe { verdict.get_unchecked(row, col) } == MaskCode::Cloud.code() {
                    *out = MaskCode::Cloud.code();
                    continue;
                }
                if coarse_value == COARSE_CLOUD {
                    *out = MaskCode::PossibleCloud.code();
                    continue;
                }
                if let Some(water) = water {
                    if is_water_code(unsafe { water.get_unchecked(row, col) }) {
                        *out = MaskCode::Water.code();
                    }
                }
            }
            row_data
        })
        .collect();

    let array =
        Array2::from_shape_vec((rows, cols), data).map_err(|e| Error::Other(e.to_string()))?;
    let mut output = Raster::from_array(array);
    output.set_nodata(Some(MaskCode::Fill.code()));
    Ok(output)
}

fn check_shape(rows: usize, cols: usize, raster: &Raster<u8>) -> Result<()> {
    let (r, c) = raster.shape();
    if (r, c) != (rows, cols) {
        return Err(Error::SizeMismatch {
            er: rows,
            ec: cols,
            ar: r,
            ac: c,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zeros(rows: usize, cols: usize) -> Raster<u8> {
        Raster::filled(rows, cols, 0u8)
    }

    #[test]
    fn test_composite_fill_always_wins() {
        let mut coarse = zeros(3, 3);
        coarse.set(1, 1, COARSE_FILL).unwrap();
        let mut verdict = zeros(3, 3);
        verdict.set(1, 1, MaskCode::Cloud.code()).unwrap();
        let mut water = zeros(3, 3);
        water.set(1, 1, 1).unwrap();

        let result = composite(&coarse, &verdict, Some(&water)).unwrap();
        assert_eq!(result.get(1, 1).unwrap(), MaskCode::Fill.code());
    }

    #[test]
    fn test_composite_confirmed_cloud() {
        let mut coarse = zeros(3, 3);
        coarse.set(0, 0, COARSE_CLOUD).unwrap();
        let mut verdict = zeros(3, 3);
        verdict.set(0, 0, MaskCode::Cloud.code()).unwrap();

        let result = composite(&coarse, &verdict, None).unwrap();
        assert_eq!(result.get(0, 0).unwrap(), MaskCode::Cloud.code());
    }

    #[test]
    fn test_composite_unconfirmed_coarse_flag_is_possibly_cloud() {
        let mut coarse = zeros(3, 3);
        coarse.set(2, 2, COARSE_CLOUD).unwrap();
        let verdict = zeros(3, 3);

        let result = composite(&coarse, &verdict, None).unwrap();
        assert_eq!(result.get(2, 2).unwrap(), MaskCode::PossibleCloud.code());
        assert_eq!(result.get(0, 0).unwrap(), MaskCode::Clear.code());
    }

    #[test]
    fn test_composite_water_never_overwrites_cloud() {
        let mut coarse = zeros(2, 2);
        coarse.set(0, 0, COARSE_CLOUD).unwrap();
        coarse.set(0, 1, COARSE_CLOUD).unwrap();
        let mut verdict = zeros(2, 2);
        verdict.set(0, 0, MaskCode::Cloud.code()).unwrap();
        let mut water = Raster::filled(2, 2, 2u8);
        water.set(1, 1, 0).unwrap();

        let result = composite(&coarse, &verdict, Some(&water)).unwrap();
        assert_eq!(result.get(0, 0).unwrap(), MaskCode::Cloud.code());
        assert_eq!(result.get(0, 1).unwrap(), MaskCode::PossibleCloud.code());
        assert_eq!(result.get(1, 0).unwrap(), MaskCode::Water.code());
        assert_eq!(result.get(1, 1).unwrap(), MaskCode::Clear.code());
    }

    #[test]
    fn test_composite_water_codes() {
        let coarse = zeros(1, 5);
        let verdict = zeros(1, 5);
        let mut water = zeros(1, 5);
        for (col, code) in [1u8, 2, 3, 4, 0].into_iter().enumerate() {
            water.set(0, col, code).unwrap();
        }

        let result = composite(&coarse, &verdict, Some(&water)).unwrap();
        for col in 0..3 {
            assert_eq!(result.get(0, col).unwrap(), MaskCode::Water.code());
        }
        // Codes outside 1..=3 are not water
        assert_eq!(result.get(0, 3).unwrap(), MaskCode::Clear.code());
        assert_eq!(result.get(0, 4).unwrap(), MaskCode::Clear.code());
    }

    #[test]
    fn test_composite_shape_mismatch() {
        let coarse = zeros(3, 3);
        let verdict = zeros(2, 3);
        assert!(composite(&coarse, &verdict, None).is_err());
    }
}
