//! Ensemble evaluation and per-scene classification
//!
//! Five decision lists vote per pixel; the verdict is the maximum class,
//! so a single cloud vote makes the pixel cloud. The classifier only runs
//! where the upstream coarse mask already flagged cloud — unflagged pixels
//! are never upgraded, which keeps the refinement strictly a correction of
//! the coarse mask's snow/cloud confusion.

use ndarray::Array2;
use rayon::prelude::*;
use skymask_core::mask::{CloudClass, MaskCode, COARSE_CLOUD};
use skymask_core::raster::Raster;
use skymask_core::scene::Band;
use skymask_core::{Error, Result};

use super::feature::FeatureVector;
use super::rules::DecisionList;
use super::{LIMITED_MEMBERS, VARIANCE_MEMBERS};
use crate::statistics::FIXED_POINT_SCALE;

/// Which rule set and feature subset to evaluate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnsembleMode {
    /// Full feature set including local variances
    Variance,
    /// Bands and indices only, for pixels where variance is undefined
    #[default]
    Limited,
}

/// The five members of the given mode.
pub fn members(mode: EnsembleMode) -> &'static [DecisionList; 5] {
    match mode {
        EnsembleMode::Variance => &VARIANCE_MEMBERS,
        EnsembleMode::Limited => &LIMITED_MEMBERS,
    }
}

/// Combine member verdicts by conservative max-vote.
pub fn vote(members: &[DecisionList], features: &FeatureVector) -> CloudClass {
    members
        .iter()
        .map(|member| member.evaluate(features))
        .max()
        .unwrap_or(CloudClass::CloudFree)
}

/// Classify one pixel's feature vector under the given mode.
pub fn classify(features: &FeatureVector, mode: EnsembleMode) -> CloudClass {
    vote(members(mode), features)
}

/// The seven variance layers the variance-aware members consume.
#[derive(Debug, Clone)]
pub struct SceneVariances {
    pub b1: Raster<f64>,
    pub b2: Raster<f64>,
    pub b4: Raster<f64>,
    pub b5: Raster<f64>,
    pub b7: Raster<f64>,
    pub ndvi: Raster<f64>,
    pub ndsi: Raster<f64>,
}

impl SceneVariances {
    fn layers(&self) -> [&Raster<f64>; 7] {
        [
            &self.b1, &self.b2, &self.b4, &self.b5, &self.b7, &self.ndvi, &self.ndsi,
        ]
    }
}

/// All per-pixel inputs to scene classification.
#[derive(Debug)]
pub struct SceneFeatures<'a> {
    /// The six reflectance bands in [`Band::ALL`] order
    pub bands: &'a [Raster<i16>],
    /// NDVI in natural units
    pub ndvi: &'a Raster<f64>,
    /// NDSI in natural units
    pub ndsi: &'a Raster<f64>,
    /// Variance layers; `None` forces the variance-free mode everywhere
    pub variances: Option<&'a SceneVariances>,
}

/// Run the ensemble over a whole scene.
///
/// Returns a binary verdict raster: [`MaskCode::Cloud`]'s code where the
/// ensemble confirmed cloud, clear (0) everywhere else. Pixels the coarse
/// mask did not flag as cloud are left clear without evaluating any rules.
/// Where any variance feature is fill (scene border, scan gap) the
/// variance-free mode is used instead; where a reflectance or index
/// feature is fill the pixel stays clear.
pub fn classify_scene(scene: &SceneFeatures<'_>, coarse: &Raster<u8>) -> Result<Raster<u8>> {
    let (rows, cols) = coarse.shape();
    if scene.bands.len() != Band::ALL.len() {
        return Err(Error::InvalidParameter {
            name: "bands",
            value: scene.bands.len().to_string(),
            reason: format!("expected {} reflectance bands", Band::ALL.len()),
        });
    }
    for raster in scene
        .bands
        .iter()
        .map(Raster::shape)
        .chain([scene.ndvi.shape(), scene.ndsi.shape()])
    {
        if raster != (rows, cols) {
            let (ar, ac) = raster;
            return Err(Error::SizeMismatch {
                er: rows,
                ec: cols,
                ar,
                ac,
            });
        }
    }
    if let Some(variances) = scene.variances {
        for layer in variances.layers() {
            if layer.shape() != (rows, cols) {
                let (ar, ac) = layer.shape();
                return Err(Error::SizeMismatch {
                    er: rows,
                    ec: cols,
                    ar,
                    ac,
                });
            }
        }
    }

    let cloud = MaskCode::Cloud.code();
    let data: Vec<u8> = (0..rows)
        .into_par_iter()
        .flat_map(|row| {
            let mut row_data = vec![MaskCode::Clear.code(); cols];
            for col in 0..cols {
                let flag = unsafe { coarse.get_unchecked(row, col) };
                if flag != COARSE_CLOUD {
                    continue;
                }

                if let Some((features, mode)) = pixel_features(scene, row, col) {
                    if classify(&features, mode) == CloudClass::Cloud {
                        row_data[col] = cloud;
                    }
                }
            }
            row_data
        })
        .collect();

    let array =
        Array2::from_shape_vec((rows, cols), data).map_err(|e| Error::Other(e.to_string()))?;
    Ok(Raster::from_array(array))
}

/// Assemble the feature vector for one pixel, deciding the mode from the
/// variance fill state. `None` means the pixel cannot be classified.
fn pixel_features(
    scene: &SceneFeatures<'_>,
    row: usize,
    col: usize,
) -> Option<(FeatureVector, EnsembleMode)> {
    let mut bands = [0.0f64; 6];
    for (slot, band) in bands.iter_mut().zip(scene.bands) {
        let v = unsafe { band.get_unchecked(row, col) };
        if band.is_nodata(v) {
            return None;
        }
        *slot = f64::from(v);
    }

    let ndvi = unsafe { scene.ndvi.get_unchecked(row, col) };
    let ndsi = unsafe { scene.ndsi.get_unchecked(row, col) };
    if scene.ndvi.is_nodata(ndvi) || scene.ndsi.is_nodata(ndsi) {
        return None;
    }

    let mut features = FeatureVector {
        b1: bands[Band::B1.index()],
        b2: bands[Band::B2.index()],
        b3: bands[Band::B3.index()],
        b4: bands[Band::B4.index()],
        b5: bands[Band::B5.index()],
        b7: bands[Band::B7.index()],
        ndvi,
        ndsi,
        ..FeatureVector::default()
    };

    if let Some(variances) = scene.variances {
        let mut values = [0.0f64; 7];
        let mut defined = true;
        for (slot, layer) in values.iter_mut().zip(variances.layers()) {
            let v = unsafe { layer.get_unchecked(row, col) };
            if layer.is_nodata(v) {
                defined = false;
                break;
            }
            *slot = v;
        }
        if defined {
            features.b1_var = values[0];
            features.b2_var = values[1];
            features.b4_var = values[2];
            features.b5_var = values[3];
            features.b7_var = values[4];
            // Index variances are stored fixed-point; rules expect natural units
            features.ndvi_var = values[5] / FIXED_POINT_SCALE;
            features.ndsi_var = values[6] / FIXED_POINT_SCALE;
            return Some((features, EnsembleMode::Variance));
        }
    }

    Some((features, EnsembleMode::Limited))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::rules::{le, rule, DecisionList};
    use crate::classifier::Feature::B1;
    use skymask_core::mask::CloudClass::{Cloud, CloudFree};
    use skymask_core::mask::COARSE_FILL;
    use skymask_core::scene::FILL_VALUE;

    #[test]
    fn test_vote_is_max_over_members() {
        static CLEAR_VOTER: DecisionList = DecisionList {
            rules: &[rule(&[le(B1, 1e9)], CloudFree, 1.0)],
            default: CloudFree,
        };
        static CLOUD_VOTER: DecisionList = DecisionList {
            rules: &[],
            default: Cloud,
        };

        let features = FeatureVector::default();
        assert_eq!(vote(&[CLEAR_VOTER, CLOUD_VOTER], &features), Cloud);
        assert_eq!(vote(&[CLEAR_VOTER, CLEAR_VOTER], &features), CloudFree);
    }

    #[test]
    fn test_classify_matches_member_maximum() {
        // The public verdict must be exactly the max of individual members
        let samples = [
            FeatureVector::default(),
            FeatureVector {
                b1: 3200.0,
                b2: 3100.0,
                b3: 2800.0,
                b4: 2900.0,
                b5: 2500.0,
                b7: 2000.0,
                ndvi: 0.02,
                ndsi: 0.1,
                ..FeatureVector::default()
            },
            FeatureVector {
                b1: 900.0,
                b2: 800.0,
                b3: 700.0,
                b4: 2400.0,
                b5: 600.0,
                b7: 300.0,
                ndvi: 0.55,
                ndsi: 0.14,
                ..FeatureVector::default()
            },
        ];
        for mode in [EnsembleMode::Variance, EnsembleMode::Limited] {
            for features in &samples {
                let expected = members(mode)
                    .iter()
                    .map(|m| m.evaluate(features))
                    .max()
                    .unwrap();
                assert_eq!(classify(features, mode), expected);
            }
        }
    }

    #[test]
    fn test_variance_member_one_boundary() {
        // With b1 = 3000 and everything else near zero, member 1 of the
        // variance mode hinges on the b5 <= 1005 threshold
        let mut features = FeatureVector {
            b1: 3000.0,
            b5: 1005.0,
            ..FeatureVector::default()
        };
        assert_eq!(VARIANCE_MEMBERS[0].evaluate(&features), CloudFree);

        features.b5 = 1006.0;
        assert_eq!(VARIANCE_MEMBERS[0].evaluate(&features), Cloud);
    }

    fn uniform_scene(
        rows: usize,
        cols: usize,
        value: i16,
    ) -> (Vec<Raster<i16>>, Raster<f64>, Raster<f64>) {
        let bands: Vec<Raster<i16>> = (0..6)
            .map(|_| {
                let mut band = Raster::filled(rows, cols, value);
                band.set_nodata(Some(FILL_VALUE));
                band
            })
            .collect();
        let mut index = Raster::filled(rows, cols, 0.0);
        index.set_nodata(Some(FILL_VALUE as f64));
        (bands, index.clone(), index)
    }

    #[test]
    fn test_classify_scene_short_circuits_on_coarse_mask() {
        let (bands, ndvi, ndsi) = uniform_scene(4, 4, 4000);
        let scene = SceneFeatures {
            bands: &bands,
            ndvi: &ndvi,
            ndsi: &ndsi,
            variances: None,
        };

        // Bright pixels everywhere, but the coarse mask flags nothing
        let coarse = Raster::filled(4, 4, 0u8);
        let verdict = classify_scene(&scene, &coarse).unwrap();
        for row in 0..4 {
            for col in 0..4 {
                assert_eq!(
                    verdict.get(row, col).unwrap(),
                    MaskCode::Clear.code(),
                    "unflagged pixel must stay clear without running the ensemble"
                );
            }
        }
    }

    #[test]
    fn test_classify_scene_confirms_flagged_cloud() {
        // Bright, low-NDSI pixels: the limited members vote cloud
        let (bands, ndvi, ndsi) = uniform_scene(3, 3, 4000);
        let scene = SceneFeatures {
            bands: &bands,
            ndvi: &ndvi,
            ndsi: &ndsi,
            variances: None,
        };

        let mut coarse = Raster::filled(3, 3, 0u8);
        coarse.set(1, 1, COARSE_CLOUD).unwrap();

        let verdict = classify_scene(&scene, &coarse).unwrap();
        assert_eq!(verdict.get(1, 1).unwrap(), MaskCode::Cloud.code());
        assert_eq!(verdict.get(0, 0).unwrap(), MaskCode::Clear.code());
    }

    #[test]
    fn test_classify_scene_fill_band_stays_clear() {
        let (mut bands, ndvi, ndsi) = uniform_scene(3, 3, 4000);
        bands[0].set(1, 1, FILL_VALUE).unwrap();
        let scene = SceneFeatures {
            bands: &bands,
            ndvi: &ndvi,
            ndsi: &ndsi,
            variances: None,
        };

        let mut coarse = Raster::filled(3, 3, COARSE_FILL);
        coarse.set(1, 1, COARSE_CLOUD).unwrap();

        let verdict = classify_scene(&scene, &coarse).unwrap();
        assert_eq!(verdict.get(1, 1).unwrap(), MaskCode::Clear.code());
    }
}
