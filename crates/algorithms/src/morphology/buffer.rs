//! Distance buffering of flagged regions
//!
//! Grows every non-zero pixel outward by a fixed right-angle distance,
//! stamping the diamond stencil of [`StructuringElement::Diamond`] into a
//! zeroed output with the source pixel's own value. Out-of-bounds stencil
//! cells are skipped. Stamps from the same source carry the same value, so
//! overlap order does not matter for a single-valued mask.

use skymask_core::raster::Raster;
use skymask_core::{Algorithm, Error, Result};

use super::element::StructuringElement;

/// Parameters for mask buffering
#[derive(Debug, Clone)]
pub struct BufferParams {
    /// Buffer distance in pixels, at right angles (radius 0 is the identity)
    pub distance: usize,
}

impl Default for BufferParams {
    fn default() -> Self {
        // Reference cloud-buffer distance
        Self { distance: 6 }
    }
}

/// Mask buffering algorithm
#[derive(Debug, Clone, Default)]
pub struct BufferMask;

impl Algorithm for BufferMask {
    type Input = Raster<u8>;
    type Output = Raster<u8>;
    type Params = BufferParams;
    type Error = Error;

    fn name(&self) -> &'static str {
        "BufferMask"
    }

    fn description(&self) -> &'static str {
        "Grow non-zero mask regions outward by a fixed pixel distance"
    }

    fn execute(&self, input: Self::Input, params: Self::Params) -> Result<Self::Output> {
        buffer_mask(&input, params.distance)
    }
}

/// Buffer the non-zero pixels of a mask raster by `distance`.
///
/// Every pixel within `distance` right-angle steps of a non-zero source
/// pixel receives that source pixel's value. Worst case `O(n * d^2)` when
/// every pixel is non-zero; an all-zero input yields an all-zero output.
pub fn buffer_mask(raster: &Raster<u8>, distance: usize) -> Result<Raster<u8>> {
    let (rows, cols) = raster.shape();
    let offsets = StructuringElement::Diamond(distance).offsets();

    let mut output: Raster<u8> = Raster::new(rows, cols);
    for row in 0..rows {
        for col in 0..cols {
            let value = unsafe { raster.get_unchecked(row, col) };
            if value == 0 {
                continue;
            }

            for &(dr, dc) in &offsets {
                let nr = row as isize + dr;
                let nc = col as isize + dc;
                if nr < 0 || nc < 0 || nr >= rows as isize || nc >= cols as isize {
                    continue;
                }
                unsafe { output.set_unchecked(nr as usize, nc as usize, value) };
            }
        }
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_radius_zero_is_identity() {
        let mut raster = Raster::filled(5, 5, 0u8);
        raster.set(1, 3, 4).unwrap();
        raster.set(4, 0, 2).unwrap();

        let result = buffer_mask(&raster, 0).unwrap();
        assert_eq!(result.data(), raster.data());
    }

    #[test]
    fn test_buffer_all_zero_input() {
        let raster = Raster::filled(6, 6, 0u8);
        let result = buffer_mask(&raster, 3).unwrap();
        assert!(result.data().iter().all(|&v| v == 0));
    }

    #[test]
    fn test_buffer_single_pixel_golden_radius_three() {
        // Stamp pattern of one centered pixel at distance 3, matching the
        // reference stencil row widths 1-3-5-7-5-3-1
        let mut raster = Raster::filled(9, 9, 0u8);
        raster.set(4, 4, 7).unwrap();

        let result = buffer_mask(&raster, 3).unwrap();
        let expected_widths = [1isize, 3, 5, 7, 5, 3, 1];
        for (i, &width) in expected_widths.iter().enumerate() {
            let row = 1 + i;
            let half = (width - 1) / 2;
            for col in 0..9isize {
                let expected = if (col - 4).abs() <= half { 7 } else { 0 };
                assert_eq!(
                    result.get(row, col as usize).unwrap(),
                    expected,
                    "stencil mismatch at ({}, {})",
                    row,
                    col
                );
            }
        }
        // Rows outside the stencil stay zero
        for col in 0..9 {
            assert_eq!(result.get(0, col).unwrap(), 0);
            assert_eq!(result.get(8, col).unwrap(), 0);
        }
    }

    #[test]
    fn test_buffer_stamps_source_value() {
        let mut raster = Raster::filled(7, 7, 0u8);
        raster.set(3, 3, 4).unwrap();

        let result = buffer_mask(&raster, 2).unwrap();
        assert_eq!(result.get(3, 3).unwrap(), 4);
        assert_eq!(result.get(1, 3).unwrap(), 4);
        assert_eq!(result.get(3, 5).unwrap(), 4);
        assert_eq!(result.get(2, 2).unwrap(), 4);
    }

    #[test]
    fn test_buffer_skips_out_of_bounds() {
        let mut raster = Raster::filled(4, 4, 0u8);
        raster.set(0, 0, 2).unwrap();

        let result = buffer_mask(&raster, 2).unwrap();
        assert_eq!(result.get(0, 0).unwrap(), 2);
        assert_eq!(result.get(2, 0).unwrap(), 2);
        assert_eq!(result.get(1, 1).unwrap(), 2);
        assert_eq!(result.get(3, 3).unwrap(), 0);
    }
}
