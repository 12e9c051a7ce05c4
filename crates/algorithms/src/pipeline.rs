//! End-to-end mask refinement
//!
//! Orchestrates the full chain: spectral indices, windowed variances,
//! ensemble classification, morphological cleanup and mask compositing.
//! Band reads and index derivation stream in chunks of up to
//! [`PROC_NLINES`] scene lines; the variance and morphology stages need
//! halo access and run on the assembled whole-scene rasters.

use tracing::{debug, info};

use skymask_core::raster::{Raster, RasterElement};
use skymask_core::scene::{Band, IndexLayer, SceneSink, SceneSource, VarianceLayer};
use skymask_core::{Error, Result};

use crate::classifier::{classify_scene, SceneFeatures, SceneVariances};
use crate::imagery::{ndsi, ndvi, INDEX_FILL};
use crate::masking::composite;
use crate::morphology::{buffer_mask, opening, StructuringElement};
use crate::statistics::{window_variance, VarianceParams, FIXED_POINT_SCALE};

/// Maximum scene lines processed per streaming chunk.
pub const PROC_NLINES: usize = 1000;

/// Tuning knobs for a refinement run.
#[derive(Debug, Clone)]
pub struct RefineParams {
    /// Compute the variance layers and use the variance-aware ensemble
    /// mode where they are defined
    pub variance: bool,
    /// Radius of the square opening element; 0 skips the opening
    pub opening_radius: usize,
    /// Optional distance for buffering the confirmed-cloud verdict
    /// outward before compositing (reference value 6)
    pub buffer_distance: Option<usize>,
}

impl Default for RefineParams {
    fn default() -> Self {
        Self {
            variance: true,
            opening_radius: 2,
            buffer_distance: None,
        }
    }
}

/// Refine a scene's coarse cloud mask.
///
/// Reads the six reflectance bands, the coarse mask and the optional
/// water layer from `source`; writes NDVI, NDSI, the eight variance
/// layers (when enabled) and the final refined mask to `sink`.
pub fn run<S, K>(source: &S, sink: &mut K, params: &RefineParams) -> Result<()>
where
    S: SceneSource,
    K: SceneSink,
{
    let rows = source.nlines();
    let cols = source.nsamps();
    if rows == 0 || cols == 0 {
        return Err(Error::InvalidDimensions {
            width: cols,
            height: rows,
        });
    }
    info!(rows, cols, variance = params.variance, "refining scene");

    let (bands, ndvi_raster, ndsi_raster) = stream_indices(source, rows, cols)?;
    sink.write_index(IndexLayer::Ndvi, &ndvi_raster)?;
    sink.write_index(IndexLayer::Ndsi, &ndsi_raster)?;
    debug!("spectral indices written");

    let variances = if params.variance {
        let b1 = band_variance(&bands, Band::B1, sink)?;
        let b2 = band_variance(&bands, Band::B2, sink)?;
        // Band 3 variance is a product layer only; no ensemble member
        // reads it
        band_variance(&bands, Band::B3, sink)?;
        let b4 = band_variance(&bands, Band::B4, sink)?;
        let b5 = band_variance(&bands, Band::B5, sink)?;
        let b7 = band_variance(&bands, Band::B7, sink)?;
        let ndvi_var = index_variance(&ndvi_raster, IndexLayer::Ndvi, sink)?;
        let ndsi_var = index_variance(&ndsi_raster, IndexLayer::Ndsi, sink)?;
        debug!("variance layers written");
        Some(SceneVariances {
            b1,
            b2,
            b4,
            b5,
            b7,
            ndvi: ndvi_var,
            ndsi: ndsi_var,
        })
    } else {
        None
    };

    let coarse = source.read_coarse_mask()?;
    if coarse.shape() != (rows, cols) {
        let (ar, ac) = coarse.shape();
        return Err(Error::SizeMismatch {
            er: rows,
            ec: cols,
            ar,
            ac,
        });
    }

    let scene = SceneFeatures {
        bands: &bands,
        ndvi: &ndvi_raster,
        ndsi: &ndsi_raster,
        variances: variances.as_ref(),
    };
    let verdict = classify_scene(&scene, &coarse)?;
    debug!("ensemble verdict computed");

    let mut refined = if params.opening_radius > 0 {
        opening(&verdict, &StructuringElement::Square(params.opening_radius))?
    } else {
        verdict
    };
    if let Some(distance) = params.buffer_distance {
        refined = buffer_mask(&refined, distance)?;
    }

    let water = source.read_water_mask()?;
    let mask = composite(&coarse, &refined, water.as_ref())?;
    sink.write_mask(&mask)?;
    info!("refined mask written");
    Ok(())
}

/// Read all six bands and derive both indices, one line chunk at a time.
fn stream_indices<S: SceneSource>(
    source: &S,
    rows: usize,
    cols: usize,
) -> Result<(Vec<Raster<i16>>, Raster<f64>, Raster<f64>)> {
    let mut band_data: Vec<Vec<i16>> = (0..Band::ALL.len())
        .map(|_| Vec::with_capacity(rows * cols))
        .collect();
    let mut ndvi_data: Vec<f64> = Vec::with_capacity(rows * cols);
    let mut ndsi_data: Vec<f64> = Vec::with_capacity(rows * cols);

    let mut line = 0;
    while line < rows {
        let n = PROC_NLINES.min(rows - line);
        let mut windows = Vec::with_capacity(Band::ALL.len());
        for band in Band::ALL {
            windows.push(source.read_band_window(band, line, n)?);
        }

        let ndvi_window = ndvi(&windows[Band::B4.index()], &windows[Band::B3.index()])?;
        let ndsi_window = ndsi(&windows[Band::B2.index()], &windows[Band::B5.index()])?;
        ndvi_data.extend(ndvi_window.data().iter().copied());
        ndsi_data.extend(ndsi_window.data().iter().copied());
        for (store, window) in band_data.iter_mut().zip(&windows) {
            store.extend(window.data().iter().copied());
        }

        line += n;
        debug!(line, "index chunk complete");
    }

    let fill = source.fill_value();
    let saturation = source.saturation_value();
    let bands = band_data
        .into_iter()
        .map(|data| {
            let mut raster = Raster::from_vec(data, rows, cols)?;
            raster.set_nodata(Some(fill));
            raster.set_saturation(Some(saturation));
            Ok(raster)
        })
        .collect::<Result<Vec<_>>>()?;

    Ok((
        bands,
        build_index(ndvi_data, rows, cols)?,
        build_index(ndsi_data, rows, cols)?,
    ))
}

fn build_index(data: Vec<f64>, rows: usize, cols: usize) -> Result<Raster<f64>> {
    let mut raster = Raster::from_vec(data, rows, cols)?;
    raster.set_nodata(Some(INDEX_FILL));
    Ok(raster)
}

/// Raw-domain windowed variance of one reflectance band, written to the
/// sink and returned for the classifier.
fn band_variance<K: SceneSink>(
    bands: &[Raster<i16>],
    band: Band,
    sink: &mut K,
) -> Result<Raster<f64>> {
    let layer = window_variance(&bands[band.index()], &VarianceParams::default())?;
    sink.write_variance(VarianceLayer::Band(band), &layer)?;
    Ok(layer)
}

/// Fixed-point windowed variance of one index layer. The index is stored
/// in natural units; the variance is taken over its fixed-point storage
/// form so the output carries the 10000-quantized values the product
/// files and the ensemble expect.
fn index_variance<K: SceneSink>(
    index: &Raster<f64>,
    layer: IndexLayer,
    sink: &mut K,
) -> Result<Raster<f64>> {
    let fixed = index_fixed_point(index);
    let params = VarianceParams {
        scale_factor: 1.0 / FIXED_POINT_SCALE,
        ..VarianceParams::default()
    };
    let raster = window_variance(&fixed, &params)?;
    sink.write_variance(VarianceLayer::Index(layer), &raster)?;
    Ok(raster)
}

fn index_fixed_point(index: &Raster<f64>) -> Raster<f64> {
    let nodata = index.nodata();
    let data = index.data().mapv(|v| {
        if v.is_nodata(nodata) {
            INDEX_FILL
        } else {
            (v * FIXED_POINT_SCALE).round()
        }
    });
    let mut raster = Raster::from_array(data);
    raster.set_nodata(Some(INDEX_FILL));
    raster
}
