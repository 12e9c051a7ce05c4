//! Per-pixel feature vector
//!
//! Domains matter here and are a correctness contract with the rule
//! tables: reflectance stays in the scaled-integer domain, indices are in
//! natural units, band variances are in the quantized scale-1.0 domain,
//! and index variances are natural units (quantized fixed-point value
//! times 0.0001). The variance fields are ignored by the variance-free
//! ensemble mode.

use super::rules::Feature;

/// The fifteen features a decision rule can reference, as f64.
#[derive(Debug, Clone, Copy, Default)]
pub struct FeatureVector {
    pub b1: f64,
    pub b2: f64,
    pub b3: f64,
    pub b4: f64,
    pub b5: f64,
    pub b7: f64,
    pub ndvi: f64,
    pub ndsi: f64,
    pub b1_var: f64,
    pub b2_var: f64,
    pub b4_var: f64,
    pub b5_var: f64,
    pub b7_var: f64,
    pub ndvi_var: f64,
    pub ndsi_var: f64,
}

impl FeatureVector {
    /// Look up a feature by name
    pub fn get(&self, feature: Feature) -> f64 {
        match feature {
            Feature::B1 => self.b1,
            Feature::B2 => self.b2,
            Feature::B3 => self.b3,
            Feature::B4 => self.b4,
            Feature::B5 => self.b5,
            Feature::B7 => self.b7,
            Feature::Ndvi => self.ndvi,
            Feature::Ndsi => self.ndsi,
            Feature::B1Var => self.b1_var,
            Feature::B2Var => self.b2_var,
            Feature::B4Var => self.b4_var,
            Feature::B5Var => self.b5_var,
            Feature::B7Var => self.b7_var,
            Feature::NdviVar => self.ndvi_var,
            Feature::NdsiVar => self.ndsi_var,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_lookup() {
        let features = FeatureVector {
            b7: 1464.0,
            ndsi_var: 0.002,
            ..FeatureVector::default()
        };
        assert_eq!(features.get(Feature::B7), 1464.0);
        assert_eq!(features.get(Feature::NdsiVar), 0.002);
        assert_eq!(features.get(Feature::B1), 0.0);
    }
}
