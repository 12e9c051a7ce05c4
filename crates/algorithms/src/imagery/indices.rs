//! Normalized-difference spectral indices
//!
//! The classifier consumes two indices derived from the scaled reflectance
//! bands: NDVI (vegetation) and NDSI (snow). Both are instances of the same
//! two-band normalized difference, computed in natural units and clamped to
//! [-1, 1]. Scaled inputs are fine here since both bands carry the same
//! scale and it cancels in the ratio.

use ndarray::Array2;
use rayon::prelude::*;
use skymask_core::raster::Raster;
use skymask_core::scene::FILL_VALUE;
use skymask_core::{Error, Result};

/// Fill sentinel for derived index rasters.
pub const INDEX_FILL: f64 = FILL_VALUE as f64;

/// Compute the normalized difference between two scaled reflectance bands:
///
/// `(band_a - band_b) / (band_a + band_b)`
///
/// The result is clamped to [-1, 1]. A pixel that is fill in either band is
/// fill in the output, as is a pixel with a zero band sum (undefined ratio).
/// Saturated samples are used as-is.
///
/// # Arguments
/// * `band_a` - Numerator positive band
/// * `band_b` - Numerator negative band
pub fn normalized_difference(band_a: &Raster<i16>, band_b: &Raster<i16>) -> Result<Raster<f64>> {
    check_dimensions(band_a, band_b)?;

    let (rows, cols) = band_a.shape();
    let nodata_a = band_a.nodata();
    let nodata_b = band_b.nodata();

    let data: Vec<f64> = (0..rows)
        .into_par_iter()
        .flat_map(|row| {
            let mut row_data = vec![INDEX_FILL; cols];
            for col in 0..cols {
                let a = unsafe { band_a.get_unchecked(row, col) };
                let b = unsafe { band_b.get_unchecked(row, col) };

                if is_fill(a, nodata_a) || is_fill(b, nodata_b) {
                    continue;
                }

                let sum = i32::from(a) + i32::from(b);
                if sum == 0 {
                    continue;
                }

                let ratio = f64::from(i32::from(a) - i32::from(b)) / f64::from(sum);
                row_data[col] = ratio.clamp(-1.0, 1.0);
            }
            row_data
        })
        .collect();

    build_output(rows, cols, data)
}

/// Normalized Difference Vegetation Index
///
/// `NDVI = (NIR - Red) / (NIR + Red)` — TM bands 4 and 3.
pub fn ndvi(nir: &Raster<i16>, red: &Raster<i16>) -> Result<Raster<f64>> {
    normalized_difference(nir, red)
}

/// Normalized Difference Snow Index
///
/// `NDSI = (Green - SWIR) / (Green + SWIR)` — TM bands 2 and 5.
/// High values separate snow from most clouds.
pub fn ndsi(green: &Raster<i16>, swir: &Raster<i16>) -> Result<Raster<f64>> {
    normalized_difference(green, swir)
}

fn is_fill(value: i16, nodata: Option<i16>) -> bool {
    match nodata {
        Some(nd) => value == nd,
        None => false,
    }
}

fn check_dimensions(a: &Raster<i16>, b: &Raster<i16>) -> Result<()> {
    if a.shape() != b.shape() {
        let (er, ec) = a.shape();
        let (ar, ac) = b.shape();
        return Err(Error::SizeMismatch { er, ec, ar, ac });
    }
    Ok(())
}

fn build_output(rows: usize, cols: usize, data: Vec<f64>) -> Result<Raster<f64>> {
    let array =
        Array2::from_shape_vec((rows, cols), data).map_err(|e| Error::Other(e.to_string()))?;
    let mut output = Raster::from_array(array);
    output.set_nodata(Some(INDEX_FILL));
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_band(values: Vec<i16>, rows: usize, cols: usize) -> Raster<i16> {
        let mut r = Raster::from_vec(values, rows, cols).unwrap();
        r.set_nodata(Some(FILL_VALUE));
        r
    }

    #[test]
    fn test_normalized_difference_basic() {
        let a = make_band(vec![3000, 1000, 500, 2000], 2, 2);
        let b = make_band(vec![1000, 3000, 500, 0], 2, 2);

        let index = normalized_difference(&a, &b).unwrap();
        assert!((index.get(0, 0).unwrap() - 0.5).abs() < 1e-12);
        assert!((index.get(0, 1).unwrap() + 0.5).abs() < 1e-12);
        assert_eq!(index.get(1, 0).unwrap(), 0.0);
        assert_eq!(index.get(1, 1).unwrap(), 1.0);
    }

    #[test]
    fn test_normalized_difference_range() {
        // Negative band sums can push the raw ratio outside [-1, 1]
        let a = make_band(vec![-2000, 4000], 1, 2);
        let b = make_band(vec![1000, -1000], 1, 2);

        let index = normalized_difference(&a, &b).unwrap();
        for col in 0..2 {
            let v = index.get(0, col).unwrap();
            assert!(
                (-1.0..=1.0).contains(&v),
                "index must stay in [-1, 1], got {}",
                v
            );
        }
    }

    #[test]
    fn test_normalized_difference_antisymmetric() {
        let a = make_band(vec![2500, 900, 4100, 77], 2, 2);
        let b = make_band(vec![1200, 3300, 800, 5000], 2, 2);

        let ab = normalized_difference(&a, &b).unwrap();
        let ba = normalized_difference(&b, &a).unwrap();
        for row in 0..2 {
            for col in 0..2 {
                let forward = ab.get(row, col).unwrap();
                let reverse = ba.get(row, col).unwrap();
                assert!(
                    (forward + reverse).abs() < 1e-12,
                    "index(a,b) should equal -index(b,a) at ({}, {})",
                    row,
                    col
                );
            }
        }
    }

    #[test]
    fn test_normalized_difference_fill_propagates() {
        let a = make_band(vec![FILL_VALUE, 1000], 1, 2);
        let b = make_band(vec![1000, FILL_VALUE], 1, 2);

        let index = normalized_difference(&a, &b).unwrap();
        assert_eq!(index.get(0, 0).unwrap(), INDEX_FILL);
        assert_eq!(index.get(0, 1).unwrap(), INDEX_FILL);
        assert!(index.is_nodata_at(0, 0).unwrap());
    }

    #[test]
    fn test_normalized_difference_zero_sum_is_fill() {
        let a = make_band(vec![0], 1, 1);
        let b = make_band(vec![0], 1, 1);

        let index = normalized_difference(&a, &b).unwrap();
        assert_eq!(index.get(0, 0).unwrap(), INDEX_FILL);
    }

    #[test]
    fn test_normalized_difference_saturated_used_as_is() {
        use skymask_core::scene::SATURATE_VALUE;
        let mut a = make_band(vec![SATURATE_VALUE], 1, 1);
        a.set_saturation(Some(SATURATE_VALUE));
        let b = make_band(vec![1000], 1, 1);

        let index = normalized_difference(&a, &b).unwrap();
        let expected = (20000.0 - 1000.0) / (20000.0 + 1000.0);
        assert!((index.get(0, 0).unwrap() - expected).abs() < 1e-12);
    }

    #[test]
    fn test_normalized_difference_shape_mismatch() {
        let a = make_band(vec![0; 4], 2, 2);
        let b = make_band(vec![0; 6], 2, 3);
        assert!(normalized_difference(&a, &b).is_err());
    }
}
