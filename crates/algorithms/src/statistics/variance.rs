//! Windowed sample variance
//!
//! Computes the classic two-pass sample variance over a fixed odd window
//! (reference 9x9) around every pixel. The window must lie fully inside the
//! raster and contain no fill sample; otherwise the output pixel is fill.
//! Samples are multiplied by a scale factor before the statistics, so the
//! same routine serves both the scaled-integer band domain (scale 1.0) and
//! rasters that still need conversion to natural units.
//!
//! Outputs are quantized to fixed point for compatibility with the integer
//! product files downstream: with multiplier 1.0 for scale 1.0 and 10000.0
//! otherwise, the value stored is round-half-away-from-zero of
//! `variance * multiplier`. Consumers of 10000-quantized layers multiply by
//! 0.0001 to recover natural units.

use ndarray::Array2;
use rayon::prelude::*;
use skymask_core::raster::{Raster, RasterElement};
use skymask_core::scene::FILL_VALUE;
use skymask_core::{Algorithm, Error, Result};

/// Fixed-point multiplier for variance layers computed in natural units.
pub const FIXED_POINT_SCALE: f64 = 10000.0;

/// Fill sentinel for variance rasters.
const VARIANCE_FILL: f64 = FILL_VALUE as f64;

/// Parameters for windowed variance
#[derive(Debug, Clone)]
pub struct VarianceParams {
    /// Window side length; must be odd and at least 3
    pub window: usize,
    /// Factor applied to every sample before the statistics
    pub scale_factor: f64,
}

impl Default for VarianceParams {
    fn default() -> Self {
        Self {
            window: 9,
            scale_factor: 1.0,
        }
    }
}

/// Windowed variance algorithm
#[derive(Debug, Clone, Default)]
pub struct WindowVariance;

impl Algorithm for WindowVariance {
    type Input = Raster<f64>;
    type Output = Raster<f64>;
    type Params = VarianceParams;
    type Error = Error;

    fn name(&self) -> &'static str {
        "WindowVariance"
    }

    fn description(&self) -> &'static str {
        "Sliding-window sample variance with fill propagation"
    }

    fn execute(&self, input: Self::Input, params: Self::Params) -> Result<Self::Output> {
        window_variance(&input, &params)
    }
}

/// Compute the windowed sample variance of a raster.
///
/// Border pixels (half-window on every side) and pixels whose window
/// contains a fill sample are set to fill in the output. Everything else
/// gets the two-pass sample variance (division by `w*w - 1`) of the scaled
/// window samples, quantized per the module's fixed-point rule.
pub fn window_variance<T: RasterElement>(
    raster: &Raster<T>,
    params: &VarianceParams,
) -> Result<Raster<f64>> {
    if params.window < 3 || params.window % 2 == 0 {
        return Err(Error::InvalidParameter {
            name: "window",
            value: params.window.to_string(),
            reason: "window side must be odd and at least 3".to_string(),
        });
    }

    let (rows, cols) = raster.shape();
    let half = (params.window / 2) as isize;
    let n = (params.window * params.window) as f64;
    let scale = params.scale_factor;
    let nodata = raster.nodata();

    // Scale 1.0 means the caller wants the raw-domain variance; anything
    // else is converted to natural units and quantized at 10000.
    let out_scale = if (scale - 1.0).abs() < 1e-5 {
        1.0
    } else {
        FIXED_POINT_SCALE
    };

    let data: Vec<f64> = (0..rows)
        .into_par_iter()
        .flat_map(|row| {
            let mut row_data = vec![VARIANCE_FILL; cols];

            let r = row as isize;
            if r < half || r >= rows as isize - half {
                return row_data;
            }

            let mut window = vec![0.0f64; (n as usize).max(1)];
            'pixels: for col in half..cols as isize - half {
                let mut sum = 0.0;
                let mut count = 0;
                for dr in -half..=half {
                    for dc in -half..=half {
                        let v = unsafe {
                            raster.get_unchecked((r + dr) as usize, (col + dc) as usize)
                        };
                        if v.is_nodata(nodata) {
                            continue 'pixels;
                        }
                        // NumCast cannot fail for the numeric types in use
                        let scaled = v.to_f64().unwrap_or(0.0) * scale;
                        window[count] = scaled;
                        sum += scaled;
                        count += 1;
                    }
                }

                let avg = sum / n;
                let mut sq_sum = 0.0;
                for &v in &window {
                    let diff = v - avg;
                    sq_sum += diff * diff;
                }
                let var = sq_sum / (n - 1.0);

                row_data[col as usize] = round_half_away(var * out_scale);
            }
            row_data
        })
        .collect();

    let array =
        Array2::from_shape_vec((rows, cols), data).map_err(|e| Error::Other(e.to_string()))?;
    let mut output = Raster::from_array(array);
    output.set_nodata(Some(VARIANCE_FILL));
    Ok(output)
}

/// Round half away from zero, matching the integer-cast convention of the
/// fixed-point product files.
fn round_half_away(value: f64) -> f64 {
    if value >= 0.0 {
        (value + 0.5).trunc()
    } else {
        (value - 0.5).trunc()
    }
}
